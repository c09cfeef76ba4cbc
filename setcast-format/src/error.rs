//! Error types for setcast

use crate::raw::RawValue;
use std::fmt;
use thiserror::Error;

/// Declaration role a token is expected to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentRole {
    /// The storage encoding keyword (`set`, `json`, `array`).
    Encoding,
    /// The enum type the column's values belong to.
    EnumType,
    /// A custom container type for the decoded members.
    Container,
}

impl fmt::Display for ArgumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentRole::Encoding => write!(f, "encoding"),
            ArgumentRole::EnumType => write!(f, "enum type"),
            ArgumentRole::Container => write!(f, "container"),
        }
    }
}

/// setcast error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CastError {
    /// Field declaration supplied fewer than two tokens.
    #[error("not enough cast arguments: a field declaration needs an encoding and an enum type")]
    NotEnoughArguments,
    /// A required role never resolved, or a surplus token resolved to no role.
    #[error("invalid {0} argument")]
    InvalidArgument(ArgumentRole),
    /// An enum descriptor declared the same case name twice.
    #[error("duplicate case `{case}` in enum `{enum_name}`")]
    DuplicateCaseName {
        /// Name of the enum being constructed.
        enum_name: String,
        /// The case name that appeared more than once.
        case: String,
    },
    /// An enum descriptor declared the same backing value twice.
    #[error("duplicate backing value `{value}` in enum `{enum_name}`")]
    DuplicateBackingValue {
        /// Name of the enum being constructed.
        enum_name: String,
        /// The backing value that appeared more than once.
        value: RawValue,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CastError>;
