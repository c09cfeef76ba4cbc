//! setcast Test Utilities
//!
//! This crate provides shared enum fixtures and helpers for the setcast project.

use serde_json::Value;
use setcast_codec::{MemberContainer, OrderedMembers, TypeRegistry};
use setcast_format::{EnumMember, EnumType};
use std::any::Any;

/// Int-backed fixture enum: low = 1, normal = 2, high = 3
pub fn priority() -> EnumType {
    EnumType::int("priority", &[("low", 1), ("normal", 2), ("high", 3)])
        .expect("fixture enum is well formed")
}

/// String-backed fixture enum: email, sms, push, each backed by its own name
pub fn channel() -> EnumType {
    EnumType::str(
        "channel",
        &[("email", "email"), ("sms", "sms"), ("push", "push")],
    )
    .expect("fixture enum is well formed")
}

/// Custom container fixture with behavior of its own.
///
/// Exists to prove that a registered container round-trips through decode as
/// its concrete type: tests downcast the boxed result and call [`TaggedMembers::tag`]
/// or [`TaggedMembers::labels`].
#[derive(Debug)]
pub struct TaggedMembers {
    members: Vec<EnumMember>,
}

impl TaggedMembers {
    /// Marker identifying the concrete container type
    pub fn tag(&self) -> &'static str {
        "tagged"
    }

    /// Case names prefixed with the tag, in member order
    pub fn labels(&self) -> Vec<String> {
        self.members
            .iter()
            .map(|member| format!("{}:{}", self.tag(), member.case_name()))
            .collect()
    }
}

impl OrderedMembers for TaggedMembers {
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

impl MemberContainer for TaggedMembers {
    fn from_members(members: Vec<EnumMember>) -> Self {
        Self { members }
    }
}

/// Registry preloaded with the fixture enums and the `tagged` container
pub fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register_enum(priority());
    registry.register_enum(channel());
    registry.register_container::<TaggedMembers>("tagged");
    registry
}

/// Stored column values paired with the members they should decode to
pub struct DecodeFixture {
    /// Stored scalar, or `None` for an absent column
    pub stored: Option<&'static str>,
    /// Case names of the expected members, in order
    pub expected: &'static [&'static str],
}

/// Delimited fixtures for the int-backed `priority` enum
pub fn priority_delimited_fixtures() -> Vec<DecodeFixture> {
    vec![
        DecodeFixture {
            stored: Some("1,2,3"),
            expected: &["low", "normal", "high"],
        },
        DecodeFixture {
            stored: Some("1,2,4"),
            expected: &["low", "normal"],
        },
        DecodeFixture {
            stored: Some(" 1, 2,  3"),
            expected: &["low", "normal", "high"],
        },
        DecodeFixture {
            stored: Some("1,,3"),
            expected: &["low", "high"],
        },
        DecodeFixture {
            stored: Some("4,5,6"),
            expected: &[],
        },
        DecodeFixture {
            stored: None,
            expected: &[],
        },
    ]
}

/// Delimited fixtures for the string-backed `channel` enum
pub fn channel_delimited_fixtures() -> Vec<DecodeFixture> {
    vec![
        DecodeFixture {
            stored: Some("email,sms,push"),
            expected: &["email", "sms", "push"],
        },
        DecodeFixture {
            stored: Some("email,sms,fax"),
            expected: &["email", "sms"],
        },
        DecodeFixture {
            stored: Some(" email, sms,  push"),
            expected: &["email", "sms", "push"],
        },
        DecodeFixture {
            stored: Some("email,,push"),
            expected: &["email", "push"],
        },
        DecodeFixture {
            stored: Some("fax,letter"),
            expected: &[],
        },
        DecodeFixture {
            stored: None,
            expected: &[],
        },
    ]
}

/// Assert that decoded members carry the expected case names in order
pub fn assert_case_names(members: &[EnumMember], expected: &[&str], context: &str) {
    let actual: Vec<&str> = members.iter().map(EnumMember::case_name).collect();
    assert_eq!(
        actual, expected,
        "decoded case names mismatch for {}",
        context
    );
}

/// Candidate JSON array from a list of int backing values
pub fn int_candidate(values: &[i64]) -> Value {
    Value::Array(values.iter().map(|v| Value::from(*v)).collect())
}

/// Candidate JSON array from a list of string backing values
pub fn str_candidate(values: &[&str]) -> Value {
    Value::Array(values.iter().map(|v| Value::from(*v)).collect())
}
