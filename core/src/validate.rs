//! Schema definition checks.
//!
//! Every `add*` call on [`OptionSchema`] runs [`validate_spec`] against the
//! schema being extended before anything is built, so an invalid definition
//! never produces a partially extended schema.
//!
//! # Examples
//!
//! ```
//! use optschema_core::{OptionSchema, SchemaError};
//!
//! let schema = OptionSchema::new().add("help", Some('h'), "Show help").unwrap();
//!
//! // Invalid: '=' cannot appear in a long name
//! assert_eq!(
//!     schema.add("a=b", None, "Nope").unwrap_err(),
//!     SchemaError::InvalidName { name: "a=b".into(), character: '=' },
//! );
//!
//! // Invalid: 'h' is already taken
//! assert_eq!(
//!     schema.add("hide", Some('h'), "Nope").unwrap_err(),
//!     SchemaError::DuplicateShortName('h'),
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::OptionSchema;

/// Errors raised while declaring options.
///
/// The `add*` call that produced the error has no effect on the schema it
/// was called on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The long name is the empty string.
    #[error("the name of an option must not be empty")]
    EmptyName,
    /// The long name contains a character outside `[0-9A-Za-z-]`.
    #[error("the name '{name}' contains an invalid character: '{character}'")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// The first offending character.
        character: char,
    },
    /// The short name is not an ASCII letter or digit.
    #[error("the short name '{0}' is an invalid character")]
    InvalidShortName(char),
    /// Another option already uses this long name.
    #[error("the name of the option '{0}' is already added")]
    DuplicateName(String),
    /// Another option already uses this short name.
    #[error("the short name of the option '{0}' is already added")]
    DuplicateShortName(char),
}

/// Checks the syntax of a long name.
pub fn validate_name(name: &str) -> Result<(), SchemaError> {
    static INVALID_NAME_CHAR_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"[^0-9A-Za-z-]").expect("static regex must compile"));

    if name.is_empty() {
        return Err(SchemaError::EmptyName);
    }
    if let Some(character) = INVALID_NAME_CHAR_RE
        .find(name)
        .and_then(|m| m.as_str().chars().next())
    {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            character,
        });
    }
    Ok(())
}

/// Checks the syntax of a short name.
///
/// Only ASCII letters and digits are accepted; `-` and symbols such as `?`
/// or `@` are rejected.
pub fn validate_short_name(short_name: char) -> Result<(), SchemaError> {
    if short_name.is_ascii_alphanumeric() {
        Ok(())
    } else {
        Err(SchemaError::InvalidShortName(short_name))
    }
}

/// Validates a new option definition against the schema it would extend.
///
/// Checks run in order: long-name syntax, short-name syntax, then
/// uniqueness of both names. The first failure is returned.
pub fn validate_spec(
    schema: &OptionSchema,
    name: &str,
    short_name: Option<char>,
) -> Result<(), SchemaError> {
    validate_name(name)?;
    if let Some(c) = short_name {
        validate_short_name(c)?;
    }
    if schema.get(name).is_some() {
        return Err(SchemaError::DuplicateName(name.to_string()));
    }
    match short_name {
        Some(c) if schema.get_by_short_name(c).is_some() => {
            Err(SchemaError::DuplicateShortName(c))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_letters_digits_hyphens() {
        assert_eq!(validate_name("dry-run"), Ok(()));
        assert_eq!(validate_name("x11"), Ok(()));
        assert_eq!(validate_name("UPPER"), Ok(()));
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert_eq!(validate_name(""), Err(SchemaError::EmptyName));
    }

    #[test]
    fn test_validate_name_reports_first_invalid_character() {
        assert_eq!(
            validate_name("contains=equals"),
            Err(SchemaError::InvalidName {
                name: "contains=equals".to_string(),
                character: '=',
            })
        );
        assert_eq!(
            validate_name("snake_case"),
            Err(SchemaError::InvalidName {
                name: "snake_case".to_string(),
                character: '_',
            })
        );
    }

    #[test]
    fn test_validate_short_name() {
        assert_eq!(validate_short_name('v'), Ok(()));
        assert_eq!(validate_short_name('9'), Ok(()));
        assert_eq!(
            validate_short_name('-'),
            Err(SchemaError::InvalidShortName('-'))
        );
        assert_eq!(
            validate_short_name('?'),
            Err(SchemaError::InvalidShortName('?'))
        );
        assert_eq!(
            validate_short_name('\u{00c0}'),
            Err(SchemaError::InvalidShortName('\u{00c0}'))
        );
    }

    #[test]
    fn test_validate_spec_rejects_duplicates() {
        let schema = OptionSchema::new()
            .add("help", Some('h'), "Show help message and exit")
            .unwrap();

        assert_eq!(
            validate_spec(&schema, "help", Some('H')),
            Err(SchemaError::DuplicateName("help".to_string()))
        );
        assert_eq!(
            validate_spec(&schema, "show-help", Some('h')),
            Err(SchemaError::DuplicateShortName('h'))
        );
        assert_eq!(validate_spec(&schema, "hide", None), Ok(()));
    }
}
