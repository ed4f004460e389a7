pub use anyhow::{ensure, format_err, Error, Result};
pub use bbox::{prelude::*, PixelTLBR};
pub use getset::{CopyGetters, Getters};
pub use indexmap::IndexMap;
pub use noisy_float::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::convert::TryFrom;
pub use strum::IntoEnumIterator;
