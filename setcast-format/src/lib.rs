//! setcast format - Core primitives for enum-set column casting
//!
//! This crate provides the fundamental value types for casting set-valued
//! enum columns, with no I/O dependencies. It includes:
//!
//! - Raw backing values (integer or string)
//! - Enum type descriptors and member resolution
//! - Wire encodings (delimited text and JSON array)
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod encoding;
pub mod enumtype;
pub mod error;
pub mod raw;

// Re-export commonly used types
pub use encoding::Encoding;
pub use enumtype::{EnumCase, EnumMember, EnumType};
pub use error::{ArgumentRole, CastError, Result};
pub use raw::{BackingKind, RawValue};
