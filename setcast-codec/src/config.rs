//! Field declaration resolution

use crate::registry::{ContainerSpec, TypeRegistry};
use setcast_format::{ArgumentRole, CastError, Encoding, EnumType, Result};
use std::sync::Arc;

/// Resolved configuration for one cast field.
///
/// Produced by [`FieldConfig::resolve`] from the unordered tokens of a field
/// declaration. Carries the wire encoding, the enum type decoded values must
/// belong to, and the custom container to wrap results in, if one was named.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    encoding: Encoding,
    enum_type: Arc<EnumType>,
    container: Option<ContainerSpec>,
}

impl FieldConfig {
    /// Build a configuration directly, bypassing token resolution
    pub fn new(
        encoding: Encoding,
        enum_type: Arc<EnumType>,
        container: Option<ContainerSpec>,
    ) -> Self {
        Self {
            encoding,
            enum_type,
            container,
        }
    }

    /// Resolve a field declaration from its unordered tokens.
    ///
    /// Each token is classified against `registry`: a registered enum type
    /// name, an encoding keyword (`set`, `json`, `array`), or a registered
    /// container name. Classification wins in that order, so a name serving
    /// double duty resolves as the enum type. Token order never matters, and
    /// a repeated role keeps the last occurrence.
    ///
    /// # Errors
    ///
    /// - [`CastError::NotEnoughArguments`] for fewer than two tokens
    /// - [`CastError::InvalidArgument`] naming the missing or unrecognized
    ///   role: no encoding keyword, no enum type, or a third token that is
    ///   not a registered container
    pub fn resolve(registry: &TypeRegistry, tokens: &[&str]) -> Result<FieldConfig> {
        if tokens.len() < 2 {
            return Err(CastError::NotEnoughArguments);
        }

        let mut encoding = None;
        let mut enum_type = None;
        let mut container = None;

        for token in tokens {
            if let Some(ty) = registry.enum_type(token) {
                enum_type = Some(Arc::clone(ty));
                continue;
            }
            if let Some(enc) = Encoding::from_keyword(token) {
                encoding = Some(enc);
                continue;
            }
            if let Some(spec) = registry.container(token) {
                container = Some(spec.clone());
            }
        }

        let encoding = encoding.ok_or(CastError::InvalidArgument(ArgumentRole::Encoding))?;
        let enum_type = enum_type.ok_or(CastError::InvalidArgument(ArgumentRole::EnumType))?;

        // More than two tokens is only legal when one of them named a container.
        if tokens.len() > 2 && container.is_none() {
            return Err(CastError::InvalidArgument(ArgumentRole::Container));
        }

        Ok(FieldConfig {
            encoding,
            enum_type,
            container,
        })
    }

    /// Wire encoding for the column
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Enum type decoded values are resolved against
    pub fn enum_type(&self) -> &Arc<EnumType> {
        &self.enum_type
    }

    /// Custom container named by the declaration, if any
    pub fn container(&self) -> Option<&ContainerSpec> {
        self.container.as_ref()
    }
}

impl PartialEq for FieldConfig {
    fn eq(&self, other: &Self) -> bool {
        self.encoding == other.encoding
            && self.enum_type.name() == other.enum_type.name()
            && self.container == other.container
    }
}
