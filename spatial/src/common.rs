pub use anyhow::{ensure, Result};
pub use bbox::{overlap, prelude::*, PixelTLBR};
pub use indexmap::IndexMap;
pub use label::{Detection, DetectionSet, Label, ObjectClass, SeatingClass, SeatingDetection};
pub use log::{debug, info};
pub use noisy_float::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::collections::BTreeMap;
pub use strum::IntoEnumIterator;
pub use zone::Zone;
