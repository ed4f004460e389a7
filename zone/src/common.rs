pub use anyhow::{bail, ensure, Error, Result};
pub use bbox::{prelude::*, Point};
pub use getset::{CopyGetters, Getters};
pub use indexmap::IndexMap;
pub use serde::{Deserialize, Serialize};
pub use std::{
    convert::TryFrom,
    fmt::{self, Display},
};
