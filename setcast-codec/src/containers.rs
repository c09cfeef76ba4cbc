//! Ordered member containers handed back by the cast adapters

use setcast_format::{EnumMember, RawValue};
use std::any::Any;
use std::ops::Index;
use std::slice;

/// Object-safe ordered view over decoded members.
///
/// Implemented by the library containers and by any custom container type
/// registered for declaration resolution. The member slice is always in
/// first-seen decode order, duplicates included.
pub trait OrderedMembers: Any + std::fmt::Debug {
    /// Decoded members in first-seen order
    fn members(&self) -> &[EnumMember];

    /// Consume the container and return the member sequence
    fn into_members(self: Box<Self>) -> Vec<EnumMember>;

    /// Dynamic view for downcasting registered container types
    fn as_any(&self) -> &dyn Any;
}

/// Constructibility capability a type needs to be registered as a custom
/// container: it must be buildable from a decoded member sequence without
/// reordering it.
pub trait MemberContainer: OrderedMembers {
    /// Build the container from decoded members, preserving order.
    fn from_members(members: Vec<EnumMember>) -> Self
    where
        Self: Sized;
}

/// Library-provided ordered collection of enum members.
///
/// This is the generic collection shape: what a field declaration gets when
/// it does not name a custom container type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberCollection {
    members: Vec<EnumMember>,
}

impl MemberCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member at the end
    pub fn push(&mut self, member: EnumMember) {
        self.members.push(member);
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the collection holds no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at `index`, if present
    pub fn get(&self, index: usize) -> Option<&EnumMember> {
        self.members.get(index)
    }

    /// Whether `member` occurs in the collection
    pub fn contains(&self, member: &EnumMember) -> bool {
        self.members.contains(member)
    }

    /// Whether any member carries the given backing value
    pub fn contains_value(&self, value: &RawValue) -> bool {
        self.members.iter().any(|member| member.value() == value)
    }

    /// Iterate the members in order
    pub fn iter(&self) -> slice::Iter<'_, EnumMember> {
        self.members.iter()
    }

    /// Members as a slice
    pub fn as_slice(&self) -> &[EnumMember] {
        &self.members
    }

    /// Consume the collection and return the member sequence
    pub fn into_inner(self) -> Vec<EnumMember> {
        self.members
    }
}

impl OrderedMembers for MemberCollection {
    fn members(&self) -> &[EnumMember] {
        &self.members
    }

    fn into_members(self: Box<Self>) -> Vec<EnumMember> {
        self.members
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl MemberContainer for MemberCollection {
    fn from_members(members: Vec<EnumMember>) -> Self {
        Self { members }
    }
}

impl FromIterator<EnumMember> for MemberCollection {
    fn from_iter<I: IntoIterator<Item = EnumMember>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MemberCollection {
    type Item = EnumMember;
    type IntoIter = std::vec::IntoIter<EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a MemberCollection {
    type Item = &'a EnumMember;
    type IntoIter = slice::Iter<'a, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// Array-like wrapper over decoded members.
///
/// The wrapped-object shape: positionally indexable like a plain array,
/// and unwrappable back into the member sequence on the write path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberArrayObject {
    members: Vec<EnumMember>,
}

impl MemberArrayObject {
    /// Wrap a decoded member sequence
    pub fn new(members: Vec<EnumMember>) -> Self {
        Self { members }
    }

    /// Number of wrapped members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the wrapper holds no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at `index`, if present
    pub fn get(&self, index: usize) -> Option<&EnumMember> {
        self.members.get(index)
    }

    /// Whether `member` occurs in the wrapper
    pub fn contains(&self, member: &EnumMember) -> bool {
        self.members.contains(member)
    }

    /// Iterate the wrapped members in order
    pub fn iter(&self) -> slice::Iter<'_, EnumMember> {
        self.members.iter()
    }

    /// Consume the wrapper and return the member sequence
    pub fn into_inner(self) -> Vec<EnumMember> {
        self.members
    }
}

impl Index<usize> for MemberArrayObject {
    type Output = EnumMember;

    fn index(&self, index: usize) -> &EnumMember {
        &self.members[index]
    }
}

impl OrderedMembers for MemberArrayObject {
    fn members(&self) -> &[EnumMember] {
        &self.members
    }

    fn into_members(self: Box<Self>) -> Vec<EnumMember> {
        self.members
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl MemberContainer for MemberArrayObject {
    fn from_members(members: Vec<EnumMember>) -> Self {
        Self::new(members)
    }
}

impl<'a> IntoIterator for &'a MemberArrayObject {
    type Item = &'a EnumMember;
    type IntoIter = slice::Iter<'a, EnumMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
