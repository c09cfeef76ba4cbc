//! setcast codec - Configuration resolution and the enum-set field codec
//!
//! This crate provides the engines that sit between a host persistence
//! layer and the format primitives:
//!
//! - Declaration-name registry for enum types and custom containers
//! - Order-independent field configuration resolution
//! - The bidirectional field codec (stored scalar <-> member sequence)
//! - Ordered member containers and the host-facing cast adapters

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cast;
pub mod codec;
pub mod config;
pub mod containers;
pub mod registry;

// Re-export commonly used types
pub use setcast_format::{
    ArgumentRole, BackingKind, CastError, Encoding, EnumCase, EnumMember, EnumType, RawValue,
    Result,
};

// Re-export our own types
pub use cast::{ArrayObjectCast, CollectionCast, CollectionValue, ColumnCast, SequenceCast};
pub use codec::{ColumnWrite, FieldCodec};
pub use config::FieldConfig;
pub use containers::{MemberArrayObject, MemberCollection, MemberContainer, OrderedMembers};
pub use registry::{ContainerSpec, TypeRegistry};
