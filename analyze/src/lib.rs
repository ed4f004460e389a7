mod common;
pub mod config;
pub mod report;

use crate::{
    common::*,
    config::Config,
    report::{AnalysisReport, FailureReport},
};

#[derive(Debug, Clone, StructOpt)]
/// Count tables, seats and sitting persons in one frame of detections
pub struct Args {
    #[structopt(long)]
    /// configuration file
    pub config_file: Option<PathBuf>,
    /// detector output in JSON, grouped by class name
    pub detections_file: PathBuf,
    #[structopt(long)]
    /// camera identifier, selects the camera zone
    pub camera_id: Option<String>,
    #[structopt(long, min_values = 6)]
    /// zone polygon as x1 y1 x2 y2 x3 y3 ..., requires --camera-id
    pub zone: Vec<i32>,
    #[structopt(long)]
    /// table this camera monitors, used with --zone
    pub table_id: Option<i64>,
    #[structopt(long)]
    /// minimum fraction of a box inside the zone to be counted
    pub zone_threshold: Option<f64>,
    #[structopt(long)]
    /// minimum detection confidence
    pub confidence: Option<f64>,
    #[structopt(long)]
    /// include every detection with its zone percentage in the report
    pub show_all: bool,
}

impl Args {
    pub fn failure_report(&self, error: &Error) -> FailureReport {
        FailureReport::new(
            error,
            &self.detections_file,
            self.camera_id.as_deref(),
            self.table_id.or_else(|| self.configured_table_id()),
        )
    }

    /// Table id of the camera's zone in the configuration file, if it can be
    /// loaded.
    fn configured_table_id(&self) -> Option<i64> {
        let camera_id = self.camera_id.as_ref()?;
        let config = Config::open(self.config_file.as_ref()?).ok()?;
        config.zones.get(camera_id)?.table_id()
    }
}

pub fn start(args: &Args) -> Result<AnalysisReport> {
    let config = load_config(args)?;
    let zone = select_zone(&config, args)?;
    match &zone {
        Some(zone) => info!("analyzing {} with zone of {}", args.detections_file.display(), zone),
        None => info!("analyzing {} without zone", args.detections_file.display()),
    }

    let detections = load_detections(&args.detections_file)?;
    let result = spatial::analyze(&detections, zone.as_ref(), &config.analysis);
    let report = AnalysisReport::from(&result).with_camera_id(args.camera_id.clone());

    let report = if args.show_all {
        let detections = filter_by_confidence(detections, config.analysis.min_confidence.raw());
        let all_detections = match &zone {
            Some(zone) => ZoneFilter::new(zone, config.analysis.zone_threshold.raw())
                .annotate(detections),
            None => detections,
        };
        report.with_all_detections(all_detections)
    } else {
        report
    };

    Ok(report)
}

/// Load the configuration file, if any, and apply command line overrides.
pub fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config_file {
        Some(path) => Config::open(path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?,
        None => Config::default(),
    };

    if let Some(zone_threshold) = args.zone_threshold {
        ensure!(
            zone_threshold.is_finite(),
            "zone threshold must be a finite number"
        );
        config.analysis.zone_threshold = r64(zone_threshold);
    }
    if let Some(confidence) = args.confidence {
        ensure!(confidence.is_finite(), "confidence must be a finite number");
        config.analysis.min_confidence = r64(confidence);
    }
    config.analysis.validate()?;

    Ok(config)
}

/// Pick the zone of the requested camera.
///
/// A zone given on the command line takes precedence over the zone of the
/// same camera in the configuration file.
pub fn select_zone(config: &Config, args: &Args) -> Result<Option<Zone>> {
    let camera_id = match &args.camera_id {
        Some(camera_id) => camera_id,
        None => {
            ensure!(args.zone.is_empty(), "--zone requires --camera-id");
            return Ok(None);
        }
    };
    let configured = config.zones.get(camera_id);

    if !args.zone.is_empty() {
        if configured.is_some() {
            warn!(
                "zone of camera {} in the config file is overridden by --zone",
                camera_id
            );
        }
        let zone = Zone::from_flat_coords(camera_id.as_str(), &args.zone, args.table_id)?;
        return Ok(Some(zone));
    }

    if args.table_id.is_some() {
        warn!("--table-id is ignored without --zone");
    }
    if configured.is_none() {
        info!("no zone for camera {}, using the whole frame", camera_id);
    }
    Ok(configured.cloned())
}

pub fn load_detections<P>(path: P) -> Result<DetectionSet>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read detections file '{}'", path.display()))?;
    let detections = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse detections file '{}'", path.display()))?;
    Ok(detections)
}
