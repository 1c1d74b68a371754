//! Option parsing errors.
//!
//! Parsing fails on the first problem it meets and reports it as a
//! [`ParseError`]: the schema the parse ran against, what went wrong
//! ([`ParseErrorKind`]), and, when a callback rejected an occurrence, the
//! occurrence itself.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

use crate::OptionSchema;
use crate::option::ParsedOption;

/// What went wrong while parsing.
///
/// `option` always holds the offending token as typed: the whole
/// `--name[=value]` token for long options, or `-x` for a short option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// No declared option matches.
    #[error("unrecognized option '{option}'")]
    UnknownOption {
        /// The offending token.
        option: String,
    },
    /// A long-name abbreviation matches more than one declared option.
    #[error(
        "option '{option}' is ambiguous; possibilities: {}",
        join_candidates(.candidates)
    )]
    AmbiguousOption {
        /// The offending token.
        option: String,
        /// Long names (without `--`) sharing the typed prefix.
        candidates: Vec<String>,
    },
    /// A flag option was given `=value`.
    #[error("option '{option}' doesn't allow an argument")]
    UnexpectedArgument {
        /// The offending token.
        option: String,
    },
    /// A required-argument option ran out of input.
    #[error("option '{option}' requires an argument")]
    MissingArgument {
        /// The offending token.
        option: String,
    },
    /// A callback refused an occurrence.
    #[error("{message}")]
    Rejected {
        /// The rejected occurrence, rendered as typed.
        option: String,
        /// The callback's explanation.
        message: String,
    },
}

impl ParseErrorKind {
    /// Returns the token that triggered the error.
    pub fn option(&self) -> &str {
        match self {
            Self::UnknownOption { option }
            | Self::AmbiguousOption { option, .. }
            | Self::UnexpectedArgument { option }
            | Self::MissingArgument { option }
            | Self::Rejected { option, .. } => option,
        }
    }
}

fn join_candidates(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|name| format!("--{name}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned by [`OptionSchema::parse`].
///
/// # Examples
///
/// ```
/// use optschema_core::{OptionSchema, ParseErrorKind};
///
/// let schema = OptionSchema::new()
///     .add_required("file", Some('f'), "FILE", "Specify input file")
///     .unwrap()
///     .add("fill", Some('F'), "Specify fill mode")
///     .unwrap();
///
/// let err = schema.parse(["--fi"]).unwrap_err();
/// assert!(matches!(err.kind(), ParseErrorKind::AmbiguousOption { .. }));
/// assert_eq!(
///     err.to_string(),
///     "option '--fi' is ambiguous; possibilities: --file, --fill",
/// );
/// assert!(OptionSchema::ptr_eq(err.schema(), &schema));
/// ```
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ParseError {
    schema: OptionSchema,
    kind: ParseErrorKind,
    option: Option<Box<ParsedOption>>,
    #[source]
    source: Option<Arc<dyn StdError + Send + Sync>>,
}

impl ParseError {
    pub(crate) fn new(schema: &OptionSchema, kind: ParseErrorKind) -> Self {
        Self {
            schema: schema.clone(),
            kind,
            option: None,
            source: None,
        }
    }

    /// Builds the error a callback returns to refuse an occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use optschema_core::{OptionSchema, ParseError, ParseErrorKind};
    ///
    /// let schema = OptionSchema::new()
    ///     .add_required_with_action("jobs", Some('j'), "N", "Run N jobs", |o| {
    ///         match o.argument_value().parse::<u32>() {
    ///             Ok(_) => Ok(()),
    ///             Err(_) => Err(ParseError::rejected(o, format!("{o}: not a number"))),
    ///         }
    ///     })
    ///     .unwrap();
    ///
    /// let err = schema.parse(["-j", "many"]).unwrap_err();
    /// assert_eq!(err.to_string(), "-j: not a number");
    /// assert_eq!(err.option().map(|o| o.name()), Some("jobs"));
    /// ```
    pub fn rejected(option: impl Into<ParsedOption>, message: impl Into<String>) -> Self {
        Self::rejection(option.into(), message.into(), None)
    }

    /// Like [`rejected`](Self::rejected), but keeps the error that made the
    /// callback refuse the occurrence as the [`source`](StdError::source).
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error;
    ///
    /// use optschema_core::{OptionSchema, ParseError};
    ///
    /// let schema = OptionSchema::new()
    ///     .add_required_with_action("jobs", Some('j'), "N", "Run N jobs", |o| {
    ///         o.argument_value()
    ///             .parse::<u32>()
    ///             .map(|_| ())
    ///             .map_err(|e| ParseError::rejected_with_source(o, format!("{o}: bad count"), e))
    ///     })
    ///     .unwrap();
    ///
    /// let err = schema.parse(["--jobs=four"]).unwrap_err();
    /// assert_eq!(err.to_string(), "--jobs=four: bad count");
    /// assert_eq!(
    ///     err.source().map(ToString::to_string).as_deref(),
    ///     Some("invalid digit found in string"),
    /// );
    /// ```
    pub fn rejected_with_source<E>(
        option: impl Into<ParsedOption>,
        message: impl Into<String>,
        source: E,
    ) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::rejection(option.into(), message.into(), Some(Arc::new(source)))
    }

    fn rejection(
        option: ParsedOption,
        message: String,
        source: Option<Arc<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            schema: option.schema().clone(),
            kind: ParseErrorKind::Rejected {
                option: option.to_string(),
                message,
            },
            option: Some(Box::new(option)),
            source,
        }
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the schema the failed parse ran against.
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    /// Returns the rejected occurrence, for errors raised by callbacks.
    pub fn option(&self) -> Option<&ParsedOption> {
        self.option.as_deref()
    }

    /// Returns the token that triggered the error.
    pub fn token(&self) -> &str {
        self.kind.option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let unknown = ParseErrorKind::UnknownOption {
            option: "-x".to_string(),
        };
        assert_eq!(unknown.to_string(), "unrecognized option '-x'");

        let unexpected = ParseErrorKind::UnexpectedArgument {
            option: "--help=yes".to_string(),
        };
        assert_eq!(
            unexpected.to_string(),
            "option '--help=yes' doesn't allow an argument"
        );

        let missing = ParseErrorKind::MissingArgument {
            option: "--file".to_string(),
        };
        assert_eq!(missing.to_string(), "option '--file' requires an argument");
    }

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let kind = ParseErrorKind::AmbiguousOption {
            option: "--co".to_string(),
            candidates: vec!["color".to_string(), "count".to_string(), "config".to_string()],
        };
        assert_eq!(
            kind.to_string(),
            "option '--co' is ambiguous; possibilities: --color, --count, --config"
        );
        assert_eq!(kind.option(), "--co");
    }

    #[test]
    fn test_error_display_delegates_to_kind() {
        let schema = OptionSchema::new();
        let err = ParseError::new(
            &schema,
            ParseErrorKind::UnknownOption {
                option: "--nope".to_string(),
            },
        );
        assert_eq!(err.to_string(), "unrecognized option '--nope'");
        assert_eq!(err.token(), "--nope");
        assert!(err.option().is_none());
        assert!(err.source().is_none());
        assert!(OptionSchema::ptr_eq(err.schema(), &schema));
    }

    #[test]
    fn test_rejection_keeps_source() {
        let schema = OptionSchema::new()
            .add_required_with_action("jobs", Some('j'), "N", "Run N jobs", |o| {
                o.argument_value()
                    .parse::<u32>()
                    .map(|_| ())
                    .map_err(|e| ParseError::rejected_with_source(o, format!("{o}: {e}"), e))
            })
            .unwrap();

        let err = schema.parse(["-j", "x4"]).unwrap_err();
        assert_eq!(err.to_string(), "-j: invalid digit found in string");
        assert_eq!(err.token(), "-j");
        assert_eq!(err.option().map(ParsedOption::name), Some("jobs"));

        let source = err.source().expect("parse error is kept");
        assert_eq!(source.to_string(), "invalid digit found in string");

        // the clone shares the same source
        let clone = err.clone();
        assert!(clone.source().is_some());
    }
}
