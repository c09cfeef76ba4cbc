//! Enum type descriptors and member resolution

use crate::error::{CastError, Result};
use crate::raw::{BackingKind, RawValue};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One declared case of an [`EnumType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    name: String,
    value: RawValue,
}

impl EnumCase {
    /// Declared case name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing value identifying this case in storage
    pub fn value(&self) -> &RawValue {
        &self.value
    }
}

/// A closed, statically declared set of cases with unique backing values.
///
/// Descriptors are immutable once built and are shared as `Arc<EnumType>`;
/// every decoded member holds a handle back to its descriptor.
#[derive(Debug)]
pub struct EnumType {
    name: String,
    backing: BackingKind,
    cases: Vec<EnumCase>,
}

impl EnumType {
    /// Build an integer-backed enum type.
    pub fn int(name: &str, cases: &[(&str, i64)]) -> Result<EnumType> {
        let cases = cases
            .iter()
            .map(|(case, value)| EnumCase {
                name: case.to_string(),
                value: RawValue::Int(*value),
            })
            .collect();
        Self::build(name, BackingKind::Int, cases)
    }

    /// Build a string-backed enum type.
    pub fn str(name: &str, cases: &[(&str, &str)]) -> Result<EnumType> {
        let cases = cases
            .iter()
            .map(|(case, value)| EnumCase {
                name: case.to_string(),
                value: RawValue::Str(value.to_string()),
            })
            .collect();
        Self::build(name, BackingKind::Str, cases)
    }

    fn build(name: &str, backing: BackingKind, cases: Vec<EnumCase>) -> Result<EnumType> {
        // Case names and backing values must both be unique.
        for (i, case) in cases.iter().enumerate() {
            for earlier in &cases[..i] {
                if earlier.name == case.name {
                    return Err(CastError::DuplicateCaseName {
                        enum_name: name.to_string(),
                        case: case.name.clone(),
                    });
                }
                if earlier.value == case.value {
                    return Err(CastError::DuplicateBackingValue {
                        enum_name: name.to_string(),
                        value: case.value.clone(),
                    });
                }
            }
        }

        Ok(EnumType {
            name: name.to_string(),
            backing,
            cases,
        })
    }

    /// Declared name of this enum type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing kind shared by every case
    pub fn backing(&self) -> BackingKind {
        self.backing
    }

    /// All declared cases, in declaration order
    pub fn cases(&self) -> &[EnumCase] {
        &self.cases
    }

    /// Index of the case whose backing value equals `raw`, if any.
    ///
    /// Matching uses the backing value's native equality; a kind mismatch
    /// never matches. Total: unmatched input is a normal outcome, not an
    /// error.
    pub fn case_for(&self, raw: &RawValue) -> Option<usize> {
        self.cases.iter().position(|case| case.value == *raw)
    }
}

/// Handle to one resolved case of an enum type.
///
/// Members are cheap to clone and compare by enum type name plus case
/// index, so two decodes of the same stored value yield equal members.
#[derive(Clone)]
pub struct EnumMember {
    ty: Arc<EnumType>,
    index: usize,
}

impl EnumMember {
    /// Resolve a raw backing value against an enum type.
    ///
    /// Returns the matching member, or `None` when no declared case carries
    /// that backing value. Never fails: unknown raw values are an expected
    /// outcome (stored data may reference retired cases).
    pub fn try_resolve(ty: &Arc<EnumType>, raw: &RawValue) -> Option<EnumMember> {
        ty.case_for(raw).map(|index| EnumMember {
            ty: Arc::clone(ty),
            index,
        })
    }

    /// Name of the enum type this member belongs to
    pub fn enum_name(&self) -> &str {
        self.ty.name()
    }

    /// Declared name of the resolved case
    pub fn case_name(&self) -> &str {
        self.ty.cases[self.index].name()
    }

    /// Backing value of the resolved case
    pub fn value(&self) -> &RawValue {
        self.ty.cases[self.index].value()
    }

    /// Position of the resolved case in the enum's declaration order
    pub fn case_index(&self) -> usize {
        self.index
    }

    /// Descriptor of the enum type this member belongs to
    pub fn enum_type(&self) -> &Arc<EnumType> {
        &self.ty
    }
}

impl PartialEq for EnumMember {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.ty.name() == other.ty.name()
    }
}

impl Eq for EnumMember {}

impl Hash for EnumMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ty.name().hash(state);
        self.index.hash(state);
    }
}

impl fmt::Debug for EnumMember {
    // The derived impl would print the whole descriptor per member.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EnumMember({}::{} = {})",
            self.enum_name(),
            self.case_name(),
            self.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priority() -> Arc<EnumType> {
        Arc::new(
            EnumType::int("priority", &[("low", 1), ("normal", 2), ("high", 3)]).unwrap(),
        )
    }

    fn channel() -> Arc<EnumType> {
        Arc::new(
            EnumType::str(
                "channel",
                &[("email", "email"), ("sms", "sms"), ("push", "push")],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_int_enum_construction() {
        let ty = priority();
        assert_eq!(ty.name(), "priority");
        assert_eq!(ty.backing(), BackingKind::Int);
        assert_eq!(ty.cases().len(), 3);
        assert_eq!(ty.cases()[0].name(), "low");
        assert_eq!(ty.cases()[0].value(), &RawValue::Int(1));
    }

    #[test]
    fn test_duplicate_case_name_rejected() {
        let err = EnumType::int("bad", &[("low", 1), ("low", 2)]).unwrap_err();
        assert!(matches!(err, CastError::DuplicateCaseName { .. }));
    }

    #[test]
    fn test_duplicate_backing_value_rejected() {
        let err = EnumType::int("bad", &[("low", 1), ("high", 1)]).unwrap_err();
        assert!(matches!(err, CastError::DuplicateBackingValue { .. }));

        let err = EnumType::str("bad", &[("a", "x"), ("b", "x")]).unwrap_err();
        assert!(matches!(err, CastError::DuplicateBackingValue { .. }));
    }

    #[test]
    fn test_case_for_native_equality() {
        let ty = priority();
        assert_eq!(ty.case_for(&RawValue::Int(2)), Some(1));
        assert_eq!(ty.case_for(&RawValue::Int(4)), None);
        // A stored "2" does not match an integer-backed case.
        assert_eq!(ty.case_for(&RawValue::Str("2".to_string())), None);

        let ty = channel();
        assert_eq!(ty.case_for(&RawValue::Str("sms".to_string())), Some(1));
        assert_eq!(ty.case_for(&RawValue::Str("SMS".to_string())), None);
        assert_eq!(ty.case_for(&RawValue::Str(" sms".to_string())), None);
        assert_eq!(ty.case_for(&RawValue::Int(1)), None);
    }

    #[test]
    fn test_try_resolve_returns_member() {
        let ty = priority();
        let member = EnumMember::try_resolve(&ty, &RawValue::Int(3)).unwrap();
        assert_eq!(member.case_name(), "high");
        assert_eq!(member.value(), &RawValue::Int(3));
        assert_eq!(member.enum_name(), "priority");
        assert_eq!(member.case_index(), 2);

        assert!(EnumMember::try_resolve(&ty, &RawValue::Int(9)).is_none());
    }

    #[test]
    fn test_member_links_back_to_descriptor() {
        let ty = priority();
        let member = EnumMember::try_resolve(&ty, &RawValue::Int(2)).unwrap();
        assert!(Arc::ptr_eq(member.enum_type(), &ty));
        assert_eq!(member.enum_type().backing(), BackingKind::Int);
        assert_eq!(member.enum_type().name(), member.enum_name());
    }

    #[test]
    fn test_member_equality_across_resolutions() {
        let ty = priority();
        let a = EnumMember::try_resolve(&ty, &RawValue::Int(1)).unwrap();
        let b = EnumMember::try_resolve(&ty, &RawValue::Int(1)).unwrap();
        let c = EnumMember::try_resolve(&ty, &RawValue::Int(2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_member_debug_is_compact() {
        let ty = channel();
        let member = EnumMember::try_resolve(&ty, &RawValue::Str("push".to_string())).unwrap();
        assert_eq!(format!("{:?}", member), "EnumMember(channel::push = push)");
    }
}
