//! Cast adapters: container shapes layered over the field codec

use crate::codec::{ColumnWrite, FieldCodec};
use crate::config::FieldConfig;
use crate::containers::{MemberArrayObject, MemberCollection, MemberContainer, OrderedMembers};
use crate::registry::TypeRegistry;
use setcast_format::{EnumMember, Result};
use serde_json::Value;

/// A cast attached to one column.
///
/// All adapters share the same codec underneath and differ only in the
/// shape decoded members come back in and in what they accept on the write
/// path. Decode and encode never fail; unusable input becomes an absent
/// result.
pub trait ColumnCast {
    /// Shape decoded members are returned in
    type Decoded;
    /// Value accepted on the write path
    type Candidate: ?Sized;

    /// Decode a stored column value
    fn decode(&self, raw: Option<&str>) -> Option<Self::Decoded>;

    /// Encode a candidate into a column write, or nothing
    fn encode(&self, column: &str, candidate: &Self::Candidate) -> Option<ColumnWrite>;
}

/// Cast returning decoded members as a plain sequence.
#[derive(Debug, Clone)]
pub struct SequenceCast {
    codec: FieldCodec,
}

impl SequenceCast {
    /// Create the cast from a resolved configuration
    pub fn new(config: FieldConfig) -> Self {
        Self {
            codec: FieldCodec::new(config),
        }
    }

    /// Resolve a field declaration and create the cast
    pub fn from_tokens(registry: &TypeRegistry, tokens: &[&str]) -> Result<Self> {
        FieldConfig::resolve(registry, tokens).map(Self::new)
    }

    /// The configuration this cast operates under
    pub fn config(&self) -> &FieldConfig {
        self.codec.config()
    }
}

impl ColumnCast for SequenceCast {
    type Decoded = Vec<EnumMember>;
    type Candidate = Value;

    fn decode(&self, raw: Option<&str>) -> Option<Vec<EnumMember>> {
        self.codec.decode(raw)
    }

    fn encode(&self, column: &str, candidate: &Value) -> Option<ColumnWrite> {
        self.codec.encode(column, candidate)
    }
}

/// Decoded result of a [`CollectionCast`].
///
/// The library collection when the declaration named no container, the
/// registered custom container when it did. [`CollectionValue::members`]
/// reads uniformly across both.
#[derive(Debug)]
pub enum CollectionValue {
    /// Library-provided [`MemberCollection`]
    Collection(MemberCollection),
    /// Custom container built by the registered spec
    Custom(Box<dyn OrderedMembers>),
}

impl CollectionValue {
    /// Decoded members in first-seen order
    pub fn members(&self) -> &[EnumMember] {
        match self {
            CollectionValue::Collection(collection) => collection.members(),
            CollectionValue::Custom(container) => container.members(),
        }
    }

    /// Number of decoded members
    pub fn len(&self) -> usize {
        self.members().len()
    }

    /// Whether no members were decoded
    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// The library collection, if that is what decoded
    pub fn as_collection(&self) -> Option<&MemberCollection> {
        match self {
            CollectionValue::Collection(collection) => Some(collection),
            CollectionValue::Custom(_) => None,
        }
    }

    /// The custom container, if one was configured
    pub fn as_custom(&self) -> Option<&dyn OrderedMembers> {
        match self {
            CollectionValue::Collection(_) => None,
            CollectionValue::Custom(container) => Some(container.as_ref()),
        }
    }
}

/// Cast returning decoded members wrapped in a collection.
///
/// When the field declaration named a registered container, decode builds
/// that container; otherwise it builds the library [`MemberCollection`].
#[derive(Debug, Clone)]
pub struct CollectionCast {
    codec: FieldCodec,
}

impl CollectionCast {
    /// Create the cast from a resolved configuration
    pub fn new(config: FieldConfig) -> Self {
        Self {
            codec: FieldCodec::new(config),
        }
    }

    /// Resolve a field declaration and create the cast
    pub fn from_tokens(registry: &TypeRegistry, tokens: &[&str]) -> Result<Self> {
        FieldConfig::resolve(registry, tokens).map(Self::new)
    }

    /// The configuration this cast operates under
    pub fn config(&self) -> &FieldConfig {
        self.codec.config()
    }
}

impl ColumnCast for CollectionCast {
    type Decoded = CollectionValue;
    type Candidate = Value;

    fn decode(&self, raw: Option<&str>) -> Option<CollectionValue> {
        let members = self.codec.decode(raw)?;
        Some(match self.codec.config().container() {
            Some(spec) => CollectionValue::Custom(spec.build(members)),
            None => CollectionValue::Collection(MemberCollection::from_members(members)),
        })
    }

    fn encode(&self, column: &str, candidate: &Value) -> Option<ColumnWrite> {
        self.codec.encode(column, candidate)
    }
}

/// Cast returning decoded members wrapped in an array object.
///
/// Unlike the other adapters, the write path takes the wrapper itself:
/// encode unwraps it and serializes the members it holds.
#[derive(Debug, Clone)]
pub struct ArrayObjectCast {
    codec: FieldCodec,
}

impl ArrayObjectCast {
    /// Create the cast from a resolved configuration
    pub fn new(config: FieldConfig) -> Self {
        Self {
            codec: FieldCodec::new(config),
        }
    }

    /// Resolve a field declaration and create the cast
    pub fn from_tokens(registry: &TypeRegistry, tokens: &[&str]) -> Result<Self> {
        FieldConfig::resolve(registry, tokens).map(Self::new)
    }

    /// The configuration this cast operates under
    pub fn config(&self) -> &FieldConfig {
        self.codec.config()
    }
}

impl ColumnCast for ArrayObjectCast {
    type Decoded = MemberArrayObject;
    type Candidate = MemberArrayObject;

    fn decode(&self, raw: Option<&str>) -> Option<MemberArrayObject> {
        self.codec.decode(raw).map(MemberArrayObject::new)
    }

    fn encode(&self, column: &str, wrapper: &MemberArrayObject) -> Option<ColumnWrite> {
        self.codec.encode_members(column, wrapper.members())
    }
}
