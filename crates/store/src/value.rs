// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::datatype::Datatype;
use crate::error::{Error, Result};

pub static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"));
static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex is valid"));

/// A single value of a property.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    AtomicUrl(String),
    ResourceArray(Vec<String>),
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// Returns whether `value` is a valid Atomic Data slug,
/// e.g. `first-name` or `red2`.
#[must_use]
pub fn is_slug(value: &str) -> bool {
    SLUG.is_match(value)
}

fn invalid(value: &str, datatype: Datatype, reason: impl ToString) -> Error {
    Error::InvalidValue {
        value: value.to_owned(),
        datatype,
        reason: reason.to_string(),
    }
}

impl Value {
    /// Parses a literal string representation into a value
    /// of the given datatype.
    ///
    /// Resource arrays are expected as a JSON array of strings.
    ///
    /// # Errors
    ///
    /// If `value` is not a valid representation of `datatype`.
    pub fn parse(value: &str, datatype: Datatype) -> Result<Self> {
        Ok(match datatype {
            Datatype::AtomicUrl => {
                ontokit_subject::Subject::parse(value).map_err(|err| invalid(value, datatype, err))?;
                Self::AtomicUrl(value.to_owned())
            }
            Datatype::ResourceArray => Self::ResourceArray(
                serde_json::from_str(value).map_err(|err| invalid(value, datatype, err))?,
            ),
            Datatype::Boolean => match value {
                "true" | "1" => Self::Boolean(true),
                "false" | "0" => Self::Boolean(false),
                _ => {
                    return Err(invalid(
                        value,
                        datatype,
                        "expected 'true', 'false', '1' or '0'",
                    ))
                }
            },
            Datatype::Integer | Datatype::Timestamp => match value.parse() {
                Ok(int) => Self::Integer(int),
                Err(err)
                    if matches!(
                        err.kind(),
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                    ) =>
                {
                    tracing::warn!(
                        "Integer '{value}' does not fit into 64 bits; keeping it as a string"
                    );
                    Self::String(value.to_owned())
                }
                Err(err) => return Err(invalid(value, datatype, err)),
            },
            Datatype::Float => {
                Self::Float(value.parse().map_err(|err| invalid(value, datatype, err))?)
            }
            Datatype::Slug => {
                if !is_slug(value) {
                    return Err(invalid(
                        value,
                        datatype,
                        "only lowercase letters, digits and single dashes are allowed",
                    ));
                }
                Self::String(value.to_owned())
            }
            Datatype::Date => {
                if !DATE.is_match(value) {
                    return Err(invalid(value, datatype, "expected YYYY-MM-DD"));
                }
                Self::String(value.to_owned())
            }
            Datatype::String
            | Datatype::Markdown
            | Datatype::Json
            | Datatype::Uri
            | Datatype::Unknown => Self::String(value.to_owned()),
        })
    }

    /// The datatype this value most closely represents.
    #[must_use]
    pub const fn datatype(&self) -> Datatype {
        match self {
            Self::AtomicUrl(_) => Datatype::AtomicUrl,
            Self::ResourceArray(_) => Datatype::ResourceArray,
            Self::String(_) => Datatype::String,
            Self::Integer(_) => Datatype::Integer,
            Self::Float(_) => Datatype::Float,
            Self::Boolean(_) => Datatype::Boolean,
        }
    }

    /// Returns the string content of string-like values (strings and URLs).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::AtomicUrl(val) | Self::String(val) => Some(val),
            Self::ResourceArray(_) | Self::Integer(_) | Self::Float(_) | Self::Boolean(_) => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[String]> {
        if let Self::ResourceArray(subjects) = self {
            Some(subjects)
        } else {
            None
        }
    }

    /// The literal string representation of this value,
    /// as accepted by [`Value::parse`].
    /// Resource arrays are represented as a JSON array of strings.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::AtomicUrl(val) | Self::String(val) => val.clone(),
            Self::ResourceArray(subjects) => serde_json::Value::from(subjects.clone()).to_string(),
            Self::Integer(val) => val.to_string(),
            Self::Float(val) => val.to_string(),
            Self::Boolean(val) => val.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_by_datatype() {
        assert_eq!(
            Value::parse("42", Datatype::Integer).unwrap(),
            Value::Integer(42)
        );
        assert_eq!(
            Value::parse("true", Datatype::Boolean).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::parse(r#"["https://example.com/a"]"#, Datatype::ResourceArray).unwrap(),
            Value::ResourceArray(vec!["https://example.com/a".to_owned()])
        );
        assert_eq!(
            Value::parse("first-name", Datatype::Slug).unwrap(),
            Value::String("first-name".to_owned())
        );
    }

    #[test]
    fn numeric_booleans() {
        assert_eq!(
            Value::parse("1", Datatype::Boolean).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::parse("0", Datatype::Boolean).unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn oversized_integers_are_kept_as_strings() {
        assert_eq!(
            Value::parse("99999999999999999999", Datatype::Integer).unwrap(),
            Value::String("99999999999999999999".to_owned())
        );
        assert_eq!(
            Value::parse("-99999999999999999999", Datatype::Integer).unwrap(),
            Value::String("-99999999999999999999".to_owned())
        );
    }

    #[test]
    fn literals_parse_back() {
        for (value, datatype) in [
            (Value::Integer(-7), Datatype::Integer),
            (Value::Float(0.5), Datatype::Float),
            (Value::Boolean(false), Datatype::Boolean),
            (
                Value::ResourceArray(vec!["https://example.com/a".to_owned()]),
                Datatype::ResourceArray,
            ),
        ] {
            assert_eq!(Value::parse(&value.to_literal(), datatype).unwrap(), value);
        }
    }

    #[test]
    fn rejects_invalid_literals() {
        assert!(Value::parse("4.2", Datatype::Integer).is_err());
        assert!(Value::parse("yes", Datatype::Boolean).is_err());
        assert!(Value::parse("2", Datatype::Boolean).is_err());
        assert!(Value::parse("First Name", Datatype::Slug).is_err());
        assert!(Value::parse("not a url", Datatype::AtomicUrl).is_err());
        assert!(Value::parse("20-01-1991", Datatype::Date).is_err());
    }

    #[test]
    fn slugs() {
        assert!(is_slug("red"));
        assert!(is_slug("dark-red-2"));
        assert!(!is_slug("Red"));
        assert!(!is_slug("dark--red"));
        assert!(!is_slug("-red"));
        assert!(!is_slug(""));
    }
}
