//! Option specifications.
//!
//! A specification is the immutable, declared definition of one option: its
//! long name, optional short name, description, and whether it consumes an
//! argument. Specifications are created by the `add*` methods of
//! [`OptionSchema`](crate::OptionSchema) and shared (behind [`Arc`]) by every
//! schema derived from the one that declared them.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::ParseError;
use crate::option::{FlagOption, RequiredArgumentOption};

/// Callback invoked once per occurrence of a flag option.
///
/// Returning an error aborts the parse with that error.
pub type FlagAction = Arc<dyn Fn(&FlagOption) -> Result<(), ParseError> + Send + Sync>;

/// Callback invoked once per occurrence of a required-argument option.
///
/// The occurrence carries every value accumulated for the option so far,
/// including its own.
pub type RequiredArgumentAction =
    Arc<dyn Fn(&RequiredArgumentOption) -> Result<(), ParseError> + Send + Sync>;

/// Definition of an option that takes no argument.
#[derive(Clone, Serialize)]
pub struct FlagSpec {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_name: Option<char>,
    description: String,
    #[serde(skip)]
    action: Option<FlagAction>,
}

impl FlagSpec {
    pub(crate) fn new(
        name: &str,
        short_name: Option<char>,
        description: &str,
        action: Option<FlagAction>,
    ) -> Self {
        Self {
            name: name.to_string(),
            short_name,
            description: description.to_string(),
            action,
        }
    }

    /// Returns the long name, without the leading `--`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns the description. Line feeds separate help lines.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn fire(&self, option: &FlagOption) -> Result<(), ParseError> {
        match &self.action {
            Some(action) => action(option),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for FlagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSpec")
            .field("name", &self.name)
            .field("short_name", &self.short_name)
            .field("description", &self.description)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Definition of an option that requires exactly one argument per
/// occurrence.
#[derive(Clone, Serialize)]
pub struct RequiredArgumentSpec {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_name: Option<char>,
    argument_name: String,
    description: String,
    #[serde(skip)]
    action: Option<RequiredArgumentAction>,
}

impl RequiredArgumentSpec {
    pub(crate) fn new(
        name: &str,
        short_name: Option<char>,
        argument_name: &str,
        description: &str,
        action: Option<RequiredArgumentAction>,
    ) -> Self {
        Self {
            name: name.to_string(),
            short_name,
            argument_name: argument_name.to_string(),
            description: description.to_string(),
            action,
        }
    }

    /// Returns the long name, without the leading `--`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the short name, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns the label of the argument shown in help output (e.g. `FILE`).
    pub fn argument_name(&self) -> &str {
        &self.argument_name
    }

    /// Returns the description. Line feeds separate help lines.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn fire(&self, option: &RequiredArgumentOption) -> Result<(), ParseError> {
        match &self.action {
            Some(action) => action(option),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for RequiredArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequiredArgumentSpec")
            .field("name", &self.name)
            .field("short_name", &self.short_name)
            .field("argument_name", &self.argument_name)
            .field("description", &self.description)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// A declared option: either a flag or a required-argument option.
///
/// # Examples
///
/// ```
/// use optschema_core::OptionSchema;
///
/// let schema = OptionSchema::new()
///     .add_required("file", Some('f'), "FILE", "Specify input file")
///     .unwrap();
///
/// let spec = schema.get("file").unwrap();
/// assert!(spec.takes_argument());
/// assert_eq!(spec.argument_name(), Some("FILE"));
/// assert_eq!(spec.help_heading(), "-f, --file FILE");
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionSpec {
    /// An option without an argument.
    Flag(Arc<FlagSpec>),
    /// An option that consumes one argument per occurrence.
    RequiredArgument(Arc<RequiredArgumentSpec>),
}

impl OptionSpec {
    /// Returns the long name, without the leading `--`.
    pub fn name(&self) -> &str {
        match self {
            Self::Flag(spec) => spec.name(),
            Self::RequiredArgument(spec) => spec.name(),
        }
    }

    /// Returns the short name, if any.
    pub fn short_name(&self) -> Option<char> {
        match self {
            Self::Flag(spec) => spec.short_name(),
            Self::RequiredArgument(spec) => spec.short_name(),
        }
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        match self {
            Self::Flag(spec) => spec.description(),
            Self::RequiredArgument(spec) => spec.description(),
        }
    }

    /// Returns the argument label for required-argument options.
    pub fn argument_name(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::RequiredArgument(spec) => Some(spec.argument_name()),
        }
    }

    /// Whether occurrences of this option consume an argument.
    pub fn takes_argument(&self) -> bool {
        matches!(self, Self::RequiredArgument(_))
    }

    /// Returns the left-hand column of this option's help entry.
    ///
    /// Options without a short name are indented by four spaces so that the
    /// long names line up.
    pub fn help_heading(&self) -> String {
        let short = match self.short_name() {
            Some(c) => format!("-{c}, "),
            None => "    ".to_string(),
        };
        match self {
            Self::Flag(spec) => format!("{short}--{}", spec.name()),
            Self::RequiredArgument(spec) => {
                format!("{short}--{} {}", spec.name(), spec.argument_name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_heading_with_short_name() {
        let spec = OptionSpec::Flag(Arc::new(FlagSpec::new(
            "help",
            Some('h'),
            "Show help message",
            None,
        )));
        assert_eq!(spec.help_heading(), "-h, --help");
        assert!(!spec.takes_argument());
        assert_eq!(spec.argument_name(), None);
    }

    #[test]
    fn test_heading_without_short_name() {
        let spec = OptionSpec::RequiredArgument(Arc::new(RequiredArgumentSpec::new(
            "output",
            None,
            "FILE",
            "Specify output file",
            None,
        )));
        assert_eq!(spec.help_heading(), "    --output FILE");
    }

    #[test]
    fn test_debug_hides_callback() {
        let action: FlagAction = Arc::new(|_| Ok(()));
        let spec = FlagSpec::new("verbose", Some('v'), "Be verbose", Some(action));
        let debug = format!("{spec:?}");
        assert!(debug.contains("has_action: true"));
    }
}
