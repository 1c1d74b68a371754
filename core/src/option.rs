//! Parsed option occurrences.
//!
//! Each recognized option on the command line becomes one occurrence. An
//! occurrence remembers the spec it matched, the schema it was parsed with,
//! and the exact token the user typed, which is what its [`Display`]
//! implementation renders:
//!
//! | typed | rendered |
//! | ----- | -------- |
//! | `-v` or `v` inside `-xvz` | `-v` |
//! | `--verb` (abbreviating `--verbose`) | `--verb` |
//! | `--verb=max` | `--verb=max` |
//!
//! [`Display`]: std::fmt::Display

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::OptionSchema;
use crate::spec::{FlagSpec, RequiredArgumentSpec};

/// How an occurrence was written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A short name, alone or inside a cluster.
    Short(char),
    /// The full long-option token as typed, including any `=value` suffix.
    Long(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(c) => write!(f, "-{c}"),
            Self::Long(s) => f.write_str(s),
        }
    }
}

/// One occurrence of a flag option.
#[derive(Debug, Clone)]
pub struct FlagOption {
    spec: Arc<FlagSpec>,
    schema: OptionSchema,
    token: Token,
}

impl FlagOption {
    pub(crate) fn new(spec: Arc<FlagSpec>, schema: OptionSchema, token: Token) -> Self {
        Self {
            spec,
            schema,
            token,
        }
    }

    /// Returns the long name of the matched option.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Returns the short name of the matched option, if any.
    pub fn short_name(&self) -> Option<char> {
        self.spec.short_name()
    }

    /// Returns the description of the matched option.
    pub fn description(&self) -> &str {
        self.spec.description()
    }

    /// Returns the schema this occurrence was parsed with.
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }
}

impl fmt::Display for FlagOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}

impl PartialEq for FlagOption {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.token == other.token
            && OptionSchema::ptr_eq(&self.schema, &other.schema)
    }
}

/// One occurrence of a required-argument option.
///
/// Besides its own value, the occurrence keeps every value given to the same
/// option up to and including this occurrence. Values of later occurrences
/// are never visible here.
#[derive(Debug, Clone)]
pub struct RequiredArgumentOption {
    spec: Arc<RequiredArgumentSpec>,
    schema: OptionSchema,
    token: Token,
    // Never empty: the last element is this occurrence's own value.
    values: Arc<[String]>,
}

impl RequiredArgumentOption {
    pub(crate) fn new(
        spec: Arc<RequiredArgumentSpec>,
        schema: OptionSchema,
        token: Token,
        values: Arc<[String]>,
    ) -> Self {
        Self {
            spec,
            schema,
            token,
            values,
        }
    }

    /// Returns the long name of the matched option.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Returns the short name of the matched option, if any.
    pub fn short_name(&self) -> Option<char> {
        self.spec.short_name()
    }

    /// Returns the description of the matched option.
    pub fn description(&self) -> &str {
        self.spec.description()
    }

    /// Returns the argument label declared for the option.
    pub fn argument_name(&self) -> &str {
        self.spec.argument_name()
    }

    /// Returns the argument given to this occurrence.
    pub fn argument_value(&self) -> &str {
        self.values.last().map_or("", String::as_str)
    }

    /// Returns the arguments of every occurrence of the same option so far,
    /// in order of appearance, ending with this occurrence's own.
    pub fn argument_values(&self) -> &[String] {
        &self.values
    }

    /// Returns the schema this occurrence was parsed with.
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }
}

impl fmt::Display for RequiredArgumentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.token, f)
    }
}

impl PartialEq for RequiredArgumentOption {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
            && self.token == other.token
            && self.values == other.values
            && OptionSchema::ptr_eq(&self.schema, &other.schema)
    }
}

/// A recognized option, in the order it appeared on the command line.
///
/// # Examples
///
/// ```
/// use optschema_core::{OptionSchema, ParsedOption};
///
/// let schema = OptionSchema::new()
///     .add("verbose", Some('v'), "Be verbose")
///     .unwrap()
///     .add_required("level", Some('l'), "N", "Set the level")
///     .unwrap();
/// let setting = schema.parse(["-v", "--lev=3"]).unwrap();
///
/// let rendered: Vec<String> = setting.options().iter().map(|o| o.to_string()).collect();
/// assert_eq!(rendered, ["-v", "--lev=3"]);
///
/// match &setting.options()[1] {
///     ParsedOption::RequiredArgument(o) => assert_eq!(o.argument_value(), "3"),
///     ParsedOption::Flag(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedOption {
    /// An occurrence of a flag option.
    Flag(FlagOption),
    /// An occurrence of a required-argument option.
    RequiredArgument(RequiredArgumentOption),
}

impl ParsedOption {
    /// Returns the long name of the matched option.
    pub fn name(&self) -> &str {
        match self {
            Self::Flag(o) => o.name(),
            Self::RequiredArgument(o) => o.name(),
        }
    }

    /// Returns the short name of the matched option, if any.
    pub fn short_name(&self) -> Option<char> {
        match self {
            Self::Flag(o) => o.short_name(),
            Self::RequiredArgument(o) => o.short_name(),
        }
    }

    /// Returns the description of the matched option.
    pub fn description(&self) -> &str {
        match self {
            Self::Flag(o) => o.description(),
            Self::RequiredArgument(o) => o.description(),
        }
    }

    /// Returns the schema this occurrence was parsed with.
    pub fn schema(&self) -> &OptionSchema {
        match self {
            Self::Flag(o) => o.schema(),
            Self::RequiredArgument(o) => o.schema(),
        }
    }

    /// Returns this occurrence's argument, if the option takes one.
    pub fn argument_value(&self) -> Option<&str> {
        self.as_required_argument()
            .map(RequiredArgumentOption::argument_value)
    }

    /// Returns the occurrence as a flag, if it is one.
    pub fn as_flag(&self) -> Option<&FlagOption> {
        match self {
            Self::Flag(o) => Some(o),
            Self::RequiredArgument(_) => None,
        }
    }

    /// Returns the occurrence as a required-argument option, if it is one.
    pub fn as_required_argument(&self) -> Option<&RequiredArgumentOption> {
        match self {
            Self::Flag(_) => None,
            Self::RequiredArgument(o) => Some(o),
        }
    }
}

impl fmt::Display for ParsedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(o) => fmt::Display::fmt(o, f),
            Self::RequiredArgument(o) => fmt::Display::fmt(o, f),
        }
    }
}

impl From<FlagOption> for ParsedOption {
    fn from(option: FlagOption) -> Self {
        Self::Flag(option)
    }
}

impl From<RequiredArgumentOption> for ParsedOption {
    fn from(option: RequiredArgumentOption) -> Self {
        Self::RequiredArgument(option)
    }
}

impl From<&FlagOption> for ParsedOption {
    fn from(option: &FlagOption) -> Self {
        Self::Flag(option.clone())
    }
}

impl From<&RequiredArgumentOption> for ParsedOption {
    fn from(option: &RequiredArgumentOption) -> Self {
        Self::RequiredArgument(option.clone())
    }
}

/// Serialized shape of an occurrence; the schema back-reference is omitted.
#[derive(Serialize)]
struct OccurrenceView<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    short_name: Option<char>,
    token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument_value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument_values: Option<&'a [String]>,
}

impl Serialize for ParsedOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let required = self.as_required_argument();
        OccurrenceView {
            name: self.name(),
            short_name: self.short_name(),
            token: self.to_string(),
            argument_value: required.map(RequiredArgumentOption::argument_value),
            argument_values: required.map(RequiredArgumentOption::argument_values),
        }
        .serialize(serializer)
    }
}
