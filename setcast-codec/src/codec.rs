//! Column decode and encode against a resolved field configuration

use crate::config::FieldConfig;
use serde_json::Value;
use setcast_format::encoding::{join_delimited, parse_json_array, split_delimited, to_json_array};
use setcast_format::{Encoding, EnumMember, RawValue};

/// A pending write to a single column.
///
/// Encoding a candidate either yields one of these or nothing at all; there
/// is no "write null" result. An absent write means the column keeps
/// whatever it had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWrite {
    /// Column the serialized value belongs to
    pub column: String,
    /// Serialized wire form in the field's encoding
    pub value: String,
}

/// Bidirectional codec for one cast field.
///
/// Decoding and encoding are total over inputs: malformed stored values and
/// unknown candidates are filtered, never surfaced as errors.
#[derive(Debug, Clone)]
pub struct FieldCodec {
    config: FieldConfig,
}

impl FieldCodec {
    /// Create a codec for a resolved field configuration
    pub fn new(config: FieldConfig) -> Self {
        Self { config }
    }

    /// The configuration this codec operates under
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Decode a stored column value into an ordered member sequence.
    ///
    /// `None` stays `None`. Any present value decodes to `Some` sequence,
    /// possibly empty: pieces that fail to parse or name no case of the
    /// configured enum are dropped, order and duplicates of the survivors
    /// are kept.
    pub fn decode(&self, raw: Option<&str>) -> Option<Vec<EnumMember>> {
        let raw = raw?;
        let ty = self.config.enum_type();
        let backing = ty.backing();
        let mut members = Vec::new();

        match self.config.encoding() {
            Encoding::Delimited => {
                for piece in split_delimited(raw) {
                    if let Some(value) = RawValue::parse_text(backing, piece) {
                        if let Some(member) = EnumMember::try_resolve(ty, &value) {
                            members.push(member);
                        }
                    }
                }
            }
            Encoding::Json => {
                for item in parse_json_array(raw) {
                    if let Some(value) = RawValue::from_json(&item) {
                        if let Some(member) = EnumMember::try_resolve(ty, &value) {
                            members.push(member);
                        }
                    }
                }
            }
        }

        Some(members)
    }

    /// Encode a candidate value into a column write.
    ///
    /// The candidate must be a JSON array to produce anything; other shapes
    /// and the empty array yield no write. Array items that resolve to a
    /// case of the configured enum survive, in order, as their canonical
    /// backing values; if none survive there is no write either.
    pub fn encode(&self, column: &str, candidate: &Value) -> Option<ColumnWrite> {
        let items = candidate.as_array()?;
        if items.is_empty() {
            return None;
        }

        let ty = self.config.enum_type();
        let values: Vec<RawValue> = items
            .iter()
            .filter_map(RawValue::from_json)
            .filter_map(|value| EnumMember::try_resolve(ty, &value))
            .map(|member| member.value().clone())
            .collect();

        if values.is_empty() {
            return None;
        }

        Some(ColumnWrite {
            column: column.to_string(),
            value: self.serialize(&values),
        })
    }

    /// Encode an already-resolved member sequence into a column write.
    ///
    /// Used by adapters whose candidate is a decoded container rather than
    /// loose JSON. Members are re-matched against the configured enum by
    /// backing value, so members of a different enum type are filtered the
    /// same way unknown array items are.
    pub fn encode_members(&self, column: &str, members: &[EnumMember]) -> Option<ColumnWrite> {
        let ty = self.config.enum_type();
        let values: Vec<RawValue> = members
            .iter()
            .filter(|member| ty.case_for(member.value()).is_some())
            .map(|member| member.value().clone())
            .collect();

        if values.is_empty() {
            return None;
        }

        Some(ColumnWrite {
            column: column.to_string(),
            value: self.serialize(&values),
        })
    }

    fn serialize(&self, values: &[RawValue]) -> String {
        match self.config.encoding() {
            Encoding::Delimited => join_delimited(values),
            Encoding::Json => to_json_array(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use proptest::prelude::*;
    use serde_json::json;
    use setcast_format::EnumType;

    fn codec(tokens: &[&str]) -> FieldCodec {
        let mut registry = TypeRegistry::new();
        registry.register_enum(
            EnumType::int("priority", &[("low", 1), ("normal", 2), ("high", 3)]).unwrap(),
        );
        registry.register_enum(
            EnumType::str(
                "channel",
                &[("email", "email"), ("sms", "sms"), ("push", "push")],
            )
            .unwrap(),
        );
        FieldCodec::new(FieldConfig::resolve(&registry, tokens).unwrap())
    }

    fn names(members: &[EnumMember]) -> Vec<&str> {
        members.iter().map(EnumMember::case_name).collect()
    }

    #[test]
    fn test_decode_delimited_int() {
        let codec = codec(&["set", "priority"]);

        let members = codec.decode(Some("1,2,3")).unwrap();
        assert_eq!(names(&members), vec!["low", "normal", "high"]);

        // Unknown values drop, the rest survive in order.
        let members = codec.decode(Some("1,2,4")).unwrap();
        assert_eq!(names(&members), vec!["low", "normal"]);

        // Whitespace around pieces is trimmed.
        let members = codec.decode(Some(" 1, 2,  3")).unwrap();
        assert_eq!(names(&members), vec!["low", "normal", "high"]);

        // Empty pieces drop without affecting neighbors.
        let members = codec.decode(Some("1,,3")).unwrap();
        assert_eq!(names(&members), vec!["low", "high"]);
    }

    #[test]
    fn test_decode_delimited_str() {
        let codec = codec(&["set", "channel"]);

        let members = codec.decode(Some("email,sms,push")).unwrap();
        assert_eq!(names(&members), vec!["email", "sms", "push"]);

        let members = codec.decode(Some("email,sms,fax")).unwrap();
        assert_eq!(names(&members), vec!["email", "sms"]);
    }

    #[test]
    fn test_decode_no_matches_is_empty() {
        let codec = codec(&["set", "priority"]);
        assert_eq!(codec.decode(Some("4,5,6")).unwrap(), Vec::new());
        assert_eq!(codec.decode(Some("")).unwrap(), Vec::new());
        assert_eq!(codec.decode(Some("junk")).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_absent_stays_absent() {
        let delimited = codec(&["set", "priority"]);
        assert_eq!(delimited.decode(None), None);

        let json = codec(&["json", "priority"]);
        assert_eq!(json.decode(None), None);
    }

    #[test]
    fn test_decode_json_int() {
        let codec = codec(&["json", "priority"]);

        let members = codec.decode(Some("[1,2,3]")).unwrap();
        assert_eq!(names(&members), vec!["low", "normal", "high"]);

        let members = codec.decode(Some("[1,2,4]")).unwrap();
        assert_eq!(names(&members), vec!["low", "normal"]);
    }

    #[test]
    fn test_decode_json_str() {
        let codec = codec(&["json", "channel"]);
        let members = codec.decode(Some(r#"["email","push"]"#)).unwrap();
        assert_eq!(names(&members), vec!["email", "push"]);
    }

    #[test]
    fn test_decode_json_malformed_is_empty() {
        let codec = codec(&["json", "priority"]);
        assert_eq!(codec.decode(Some("not json")).unwrap(), Vec::new());
        assert_eq!(codec.decode(Some("{\"a\":1}")).unwrap(), Vec::new());
        assert_eq!(codec.decode(Some("3")).unwrap(), Vec::new());
        assert_eq!(codec.decode(Some("[1,2,3")).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_json_mixed_item_types() {
        let codec = codec(&["json", "priority"]);
        // Non-integral and non-scalar items drop, matches survive.
        let members = codec.decode(Some(r#"[1,"x",2.5,null,[3],2]"#)).unwrap();
        assert_eq!(names(&members), vec!["low", "normal"]);
    }

    #[test]
    fn test_decode_preserves_duplicates() {
        let codec = codec(&["set", "priority"]);
        let members = codec.decode(Some("2,2,1")).unwrap();
        assert_eq!(names(&members), vec!["normal", "normal", "low"]);
    }

    #[test]
    fn test_encode_delimited_int() {
        let codec = codec(&["set", "priority"]);

        let write = codec.encode("priorities", &json!([1, 2, 3])).unwrap();
        assert_eq!(write.column, "priorities");
        assert_eq!(write.value, "1,2,3");

        // Unknowns filter out before serialization.
        let write = codec.encode("priorities", &json!([1, 2, 4])).unwrap();
        assert_eq!(write.value, "1,2");
    }

    #[test]
    fn test_encode_json_int() {
        let codec = codec(&["json", "priority"]);
        let write = codec.encode("priorities", &json!([1, 2, 3])).unwrap();
        assert_eq!(write.value, "[1,2,3]");
    }

    #[test]
    fn test_encode_json_str() {
        let codec = codec(&["json", "channel"]);
        let write = codec.encode("channels", &json!(["email", "sms"])).unwrap();
        assert_eq!(write.value, r#"["email","sms"]"#);
    }

    #[test]
    fn test_encode_non_array_yields_nothing() {
        let codec = codec(&["set", "priority"]);
        assert_eq!(codec.encode("c", &json!("invalid value")), None);
        assert_eq!(codec.encode("c", &json!(1)), None);
        assert_eq!(codec.encode("c", &json!({"a": 1})), None);
        assert_eq!(codec.encode("c", &Value::Null), None);
    }

    #[test]
    fn test_encode_empty_or_all_unknown_yields_nothing() {
        let codec = codec(&["set", "priority"]);
        assert_eq!(codec.encode("c", &json!([])), None);
        assert_eq!(codec.encode("c", &json!([4, 5, 6])), None);
        assert_eq!(codec.encode("c", &json!(["x", "y"])), None);
    }

    #[test]
    fn test_encode_preserves_order_and_duplicates() {
        let codec = codec(&["set", "priority"]);
        let write = codec.encode("c", &json!([3, 1, 3])).unwrap();
        assert_eq!(write.value, "3,1,3");
    }

    #[test]
    fn test_encode_members_roundtrip() {
        let codec = codec(&["json", "channel"]);
        let members = codec.decode(Some(r#"["push","email"]"#)).unwrap();
        let write = codec.encode_members("channels", &members).unwrap();
        assert_eq!(write.value, r#"["push","email"]"#);
    }

    #[test]
    fn test_encode_members_filters_other_enum() {
        let priorities = codec(&["set", "priority"]);
        let channels = codec(&["set", "channel"]);

        let mut members = priorities.decode(Some("1,2")).unwrap();
        members.extend(channels.decode(Some("email")).unwrap());

        let write = priorities.encode_members("c", &members).unwrap();
        assert_eq!(write.value, "1,2");
    }

    #[test]
    fn test_encode_members_empty_yields_nothing() {
        let codec = codec(&["set", "priority"]);
        assert_eq!(codec.encode_members("c", &[]), None);
    }

    proptest! {
        #[test]
        fn prop_decode_encode_roundtrip_delimited(values in proptest::collection::vec(1i64..=3, 1..20)) {
            let codec = codec(&["set", "priority"]);
            let stored: String = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");

            let members = codec.decode(Some(stored.as_str())).unwrap();
            prop_assert_eq!(members.len(), values.len());

            let write = codec.encode_members("c", &members).unwrap();
            prop_assert_eq!(write.value, stored);
        }

        #[test]
        fn prop_decode_encode_roundtrip_json(values in proptest::collection::vec(1i64..=3, 1..20)) {
            let codec = codec(&["json", "priority"]);
            let stored = serde_json::to_string(&values).unwrap();

            let members = codec.decode(Some(stored.as_str())).unwrap();
            prop_assert_eq!(members.len(), values.len());

            let write = codec.encode_members("c", &members).unwrap();
            prop_assert_eq!(write.value, stored);
        }

        #[test]
        fn prop_decode_never_panics(raw in ".*") {
            let delimited = codec(&["set", "priority"]);
            let _ = delimited.decode(Some(raw.as_str()));

            let json = codec(&["json", "priority"]);
            let _ = json.decode(Some(raw.as_str()));
        }
    }
}
