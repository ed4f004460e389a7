use crate::common::*;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Object classes reported by the detector.
///
/// The string form is the detector's class name, so `DiningTable` reads and
/// writes as `"dining table"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum ObjectClass {
    #[serde(rename = "chair")]
    #[strum(serialize = "chair")]
    Chair,
    #[serde(rename = "dining table")]
    #[strum(serialize = "dining table")]
    DiningTable,
    #[serde(rename = "bench")]
    #[strum(serialize = "bench")]
    Bench,
    #[serde(rename = "couch")]
    #[strum(serialize = "couch")]
    Couch,
    #[serde(rename = "person")]
    #[strum(serialize = "person")]
    Person,
}

impl ObjectClass {
    /// The seating class, if this is a seat.
    pub fn seating(&self) -> Option<SeatingClass> {
        Some(match self {
            Self::Chair => SeatingClass::Chair,
            Self::Bench => SeatingClass::Bench,
            Self::Couch => SeatingClass::Couch,
            Self::DiningTable | Self::Person => return None,
        })
    }
}

/// The subset of classes a person can sit on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeatingClass {
    Chair,
    Bench,
    Couch,
}

impl From<SeatingClass> for ObjectClass {
    fn from(from: SeatingClass) -> Self {
        match from {
            SeatingClass::Chair => Self::Chair,
            SeatingClass::Bench => Self::Bench,
            SeatingClass::Couch => Self::Couch,
        }
    }
}

impl TryFrom<ObjectClass> for SeatingClass {
    type Error = Error;

    fn try_from(from: ObjectClass) -> Result<Self, Self::Error> {
        from.seating()
            .ok_or_else(|| format_err!("'{}' is not a seating class", from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn detector_class_names() {
        let names: Vec<_> = ObjectClass::iter().map(|class| class.to_string()).collect();
        assert_eq!(
            names,
            ["chair", "dining table", "bench", "couch", "person"]
        );
        assert_eq!(
            ObjectClass::from_str("dining table").unwrap(),
            ObjectClass::DiningTable
        );
        assert!(ObjectClass::from_str("dining_table").is_err());
    }

    #[test]
    fn seating_conversion() {
        for seat in SeatingClass::iter() {
            let class = ObjectClass::from(seat);
            assert_eq!(class.seating(), Some(seat));
            assert_eq!(SeatingClass::try_from(class).unwrap(), seat);
        }
        assert!(SeatingClass::try_from(ObjectClass::Person).is_err());
        assert!(SeatingClass::try_from(ObjectClass::DiningTable).is_err());
    }
}
