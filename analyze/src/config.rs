use crate::common::*;

pub static CONFIG_VERSION: Lazy<VersionReq> = Lazy::new(|| VersionReq::parse("0.1.0").unwrap());

/// The configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_version")]
    pub version: Version,
    /// Analysis thresholds.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Camera zones, at most one per camera.
    #[serde(default)]
    pub zones: ZoneSet,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        text.parse()
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let config: Self = json5::from_str(text)?;
        config.analysis.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Version::new(0, 1, 0),
            analysis: AnalysisConfig::default(),
            zones: ZoneSet::default(),
        }
    }
}

pub fn deserialize_version<'de, D>(deserializer: D) -> Result<Version, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let version = Version::parse(&text).map_err(|err| {
        D::Error::custom(format!(
            "failed to parse version number '{}': {:?}",
            text, err
        ))
    })?;

    if !CONFIG_VERSION.matches(&version) {
        return Err(D::Error::custom(format!(
            "incompatible version: get '{}', but it is incompatible with requirement '{}'",
            version, &*CONFIG_VERSION,
        )));
    }

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config() -> Result<()> {
        let config: Config = r#"{
            version: "0.1.0",
            analysis: {
                zone_threshold: 0.5,
                iou_threshold: 0.3,
            },
            zones: [
                { camera_id: "cam1", table_id: 1, polygon: [[100, 200], [400, 200], [400, 500], [100, 500]] },
            ],
        }"#
        .parse()?;

        assert_eq!(config.analysis.zone_threshold, 0.5);
        assert_eq!(config.analysis.iou_threshold, 0.3);
        assert_eq!(config.analysis.occupancy_proximity, 50.0);
        assert_eq!(config.zones.len(), 1);
        assert_eq!(config.zones.get("cam1").unwrap().table_id(), Some(1));
        Ok(())
    }

    #[test]
    fn minimal_config() -> Result<()> {
        let config: Config = r#"{ version: "0.1.0" }"#.parse()?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn reject_incompatible_version() {
        assert!(r#"{ version: "0.2.0" }"#.parse::<Config>().is_err());
        assert!(r#"{ version: "zero" }"#.parse::<Config>().is_err());
        assert!("{}".parse::<Config>().is_err());
    }

    #[test]
    fn reject_invalid_thresholds() {
        let text = r#"{ version: "0.1.0", analysis: { iou_threshold: 2.0 } }"#;
        assert!(text.parse::<Config>().is_err());
    }
}
