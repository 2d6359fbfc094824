//! Field schemas for coder settings surfaces.
//!
//! One [`FieldSchema`] per configuration key a coder exports. A host walks
//! the schema to build its editing widgets without knowing anything about
//! the coder behind it.

use markkit_coders::{CoderType, DateTimeFormat};
use markkit_core::{ConfigValue, ValueKind};
use std::fmt;

/// How a setting is edited and what its text must parse as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Boolean,
    Text,
    /// One of a fixed list of labels, stored as text
    Choice(Vec<String>),
}

impl FieldKind {
    /// The configuration value kind this field produces
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Integer => ValueKind::Integer,
            Self::Boolean => ValueKind::Boolean,
            Self::Text | Self::Choice(_) => ValueKind::Text,
        }
    }

    /// Parse text typed by the user. `None` when it does not fit the kind.
    pub fn parse(&self, text: &str) -> Option<ConfigValue> {
        match self {
            Self::Integer => text.trim().parse::<i64>().ok().map(ConfigValue::Integer),
            Self::Boolean => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(ConfigValue::Boolean(true)),
                "false" | "no" | "off" | "0" => Some(ConfigValue::Boolean(false)),
                _ => None,
            },
            Self::Text => Some(ConfigValue::Text(text.to_string())),
            Self::Choice(options) => options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(text.trim()))
                .map(|o| ConfigValue::Text(o.clone())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Text => write!(f, "String"),
            Self::Choice(_) => write!(f, "Enum"),
        }
    }
}

/// Description of one editable setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Configuration key
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
    /// Counter state that advances while printing rather than a user choice
    pub runtime: bool,
}

impl FieldSchema {
    fn new(id: &'static str, label: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            id,
            label,
            kind,
            description,
            runtime: false,
        }
    }

    fn runtime(mut self) -> Self {
        self.runtime = true;
        self
    }
}

/// Settings a coder type exposes, in display order
pub fn schema_for(coder_type: CoderType) -> Vec<FieldSchema> {
    use FieldKind::*;

    match coder_type {
        CoderType::DateTime => vec![FieldSchema::new(
            "format",
            "Format",
            Choice(
                DateTimeFormat::ALL
                    .iter()
                    .map(|f| f.label().to_string())
                    .collect(),
            ),
            "Layout of the printed date or time",
        )],
        CoderType::NoCode => vec![FieldSchema::new(
            "userText",
            "Text",
            Text,
            "Printed exactly as entered",
        )],
        CoderType::RandomNumber => vec![
            FieldSchema::new(
                "fixedLength",
                "Fixed length",
                Boolean,
                "Generate a fixed number of digits instead of a range",
            ),
            FieldSchema::new("length", "Digits", Integer, "Number of digits (1-18)"),
            FieldSchema::new("minValue", "Minimum", Integer, "Smallest value in range mode"),
            FieldSchema::new("maxValue", "Maximum", Integer, "Largest value in range mode"),
        ],
        CoderType::SerialNumber => vec![
            FieldSchema::new("startValue", "Start", Integer, "First serial of the sequence"),
            FieldSchema::new("stepValue", "Step", Integer, "Increment between serials"),
            FieldSchema::new("maxValue", "Maximum", Integer, "Last serial before wrapping"),
            FieldSchema::new(
                "repeatCount",
                "Repeat",
                Integer,
                "How many items share each serial",
            ),
            FieldSchema::new(
                "resetOnMax",
                "Wrap at maximum",
                Boolean,
                "Restart at the start value instead of holding the maximum",
            ),
            FieldSchema::new(
                "currentValue",
                "Next serial",
                Integer,
                "Serial printed on the next item",
            )
            .runtime(),
            FieldSchema::new(
                "currentRepeat",
                "Repeats used",
                Integer,
                "Times the next serial has already been printed",
            )
            .runtime(),
        ],
        CoderType::Vin => vec![
            FieldSchema::new(
                "wmiPrefix",
                "Manufacturer prefix",
                Text,
                "World manufacturer identifier (3 characters)",
            ),
            FieldSchema::new(
                "useSequential",
                "Sequential serial",
                Boolean,
                "Number the last six characters sequentially",
            ),
            FieldSchema::new(
                "sequentialStart",
                "Serial start",
                Integer,
                "First sequential serial",
            ),
            FieldSchema::new(
                "sequentialCounter",
                "Next serial",
                Integer,
                "Sequential serial printed on the next item",
            )
            .runtime(),
        ],
    }
}

/// Look up one field of a coder type
pub fn field(coder_type: CoderType, id: &str) -> Option<FieldSchema> {
    schema_for(coder_type).into_iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use markkit_coders::CoderStrategy;

    #[test]
    fn test_schema_covers_exported_keys() {
        for coder_type in CoderType::ALL {
            let config = coder_type.create().configuration();
            let schema = schema_for(coder_type);
            let mut ids: Vec<&str> = schema.iter().map(|f| f.id).collect();
            ids.sort_unstable();
            let keys: Vec<&str> = config.keys().collect();
            assert_eq!(ids, keys, "{}", coder_type);

            for field in &schema {
                let value = config.get(field.id).unwrap();
                assert_eq!(value.kind(), field.kind.value_kind(), "{}", field.id);
            }
        }
    }

    #[test]
    fn test_runtime_fields() {
        let runtime: Vec<&str> = CoderType::ALL
            .iter()
            .flat_map(|t| schema_for(*t))
            .filter(|f| f.runtime)
            .map(|f| f.id)
            .collect();
        assert_eq!(runtime, vec!["currentValue", "currentRepeat", "sequentialCounter"]);
    }

    #[test]
    fn test_parse_by_kind() {
        assert_eq!(FieldKind::Integer.parse(" 42 "), Some(ConfigValue::Integer(42)));
        assert_eq!(FieldKind::Integer.parse("4.2"), None);
        assert_eq!(FieldKind::Boolean.parse("Yes"), Some(ConfigValue::Boolean(true)));
        assert_eq!(FieldKind::Boolean.parse("0"), Some(ConfigValue::Boolean(false)));
        assert_eq!(FieldKind::Boolean.parse("maybe"), None);
        assert_eq!(
            FieldKind::Text.parse(" keep spaces "),
            Some(ConfigValue::Text(" keep spaces ".to_string()))
        );
    }

    #[test]
    fn test_choice_matches_label_case_insensitively() {
        let format = field(CoderType::DateTime, "format").unwrap();
        assert_eq!(
            format.kind.parse("julian date"),
            Some(ConfigValue::Text("Julian Date".to_string()))
        );
        assert_eq!(format.kind.parse("DDMMYY"), None);
    }
}
