//! Block catalog errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    #[error("{block} variants have no {attribute} attribute")]
    UnsupportedAttribute {
        block: &'static str,
        attribute: &'static str,
    },

    #[error("{block} has no variant with {attribute} = {value}")]
    UnregisteredCombination {
        block: &'static str,
        attribute: &'static str,
        value: String,
    },

    #[error("slot {slot} out of range (limit: {limit})")]
    SlotOutOfRange { slot: usize, limit: usize },

    #[error("unknown block id: {0}")]
    UnknownBlock(u8),
}
