//! Data structures for birthsign definitions.
//!
//! Pure data types deserialized from JSON. File loading lives in
//! [`crate::loader`].

mod birthsign_data;
mod bonus_data;

pub(crate) use birthsign_data::value_text;
pub use birthsign_data::{Birthsign, UNKNOWN_NAME};
pub use bonus_data::{
    BonusDetail, BonusField, BonusType, DetailCheck, EnhancedBonus, TriggerSkills,
    UnknownBonusType,
};
