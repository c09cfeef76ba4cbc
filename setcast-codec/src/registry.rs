//! Registry of enum types and custom containers available to declarations

use crate::containers::{MemberContainer, OrderedMembers};
use ahash::AHashMap;
use setcast_format::{EnumMember, EnumType};
use std::sync::Arc;

/// A registered custom container type.
///
/// Holds the declaration name and a builder that wraps a decoded member
/// sequence in the registered type. The builder never reorders members.
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    name: String,
    build: fn(Vec<EnumMember>) -> Box<dyn OrderedMembers>,
}

impl ContainerSpec {
    /// Name the container was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap `members` in the registered container type
    pub fn build(&self, members: Vec<EnumMember>) -> Box<dyn OrderedMembers> {
        (self.build)(members)
    }
}

impl PartialEq for ContainerSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ContainerSpec {}

fn build_boxed<C: MemberContainer + 'static>(members: Vec<EnumMember>) -> Box<dyn OrderedMembers> {
    Box::new(C::from_members(members))
}

/// Lookup tables used to classify field declaration tokens.
///
/// A token names an enum type, an encoding keyword, or a registered
/// container; anything registered here is recognizable during resolution.
/// Registration is permissive: re-registering a name replaces the earlier
/// entry.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    enums: AHashMap<String, Arc<EnumType>>,
    containers: AHashMap<String, ContainerSpec>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enum type under its declared name.
    ///
    /// Returns the shared handle so callers can resolve members against it
    /// without a second lookup. Replaces any earlier type with the same name.
    pub fn register_enum(&mut self, ty: EnumType) -> Arc<EnumType> {
        let ty = Arc::new(ty);
        self.enums.insert(ty.name().to_string(), Arc::clone(&ty));
        ty
    }

    /// Register a custom container type under `name`.
    ///
    /// The type only needs [`MemberContainer`]; the registry stores a
    /// monomorphized builder for it. Replaces any earlier container with
    /// the same name.
    pub fn register_container<C: MemberContainer + 'static>(&mut self, name: &str) {
        self.containers.insert(
            name.to_string(),
            ContainerSpec {
                name: name.to_string(),
                build: build_boxed::<C>,
            },
        );
    }

    /// Look up an enum type by name
    pub fn enum_type(&self, name: &str) -> Option<&Arc<EnumType>> {
        self.enums.get(name)
    }

    /// Look up a registered container by name
    pub fn container(&self, name: &str) -> Option<&ContainerSpec> {
        self.containers.get(name)
    }

    /// Whether `name` names a registered enum type
    pub fn is_enum_type(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    /// Whether `name` names a registered container
    pub fn is_container(&self, name: &str) -> bool {
        self.containers.contains_key(name)
    }
}
