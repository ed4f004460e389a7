pub use anyhow::{bail, ensure, format_err, Context, Error, Result};
pub use label::{DetectionSet, ObjectClass, SeatingClass};
pub use log::{info, warn};
pub use noisy_float::prelude::*;
pub use once_cell::sync::Lazy;
pub use semver::{Version, VersionReq};
pub use serde::{
    de::Error as DeserializeError, Deserialize, Deserializer, Serialize, Serializer,
};
pub use spatial::{filter_by_confidence, AnalysisConfig, SpatialAnalysisResult, ZoneFilter};
pub use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
pub use structopt::StructOpt;
pub use zone::{Zone, ZoneSet};
