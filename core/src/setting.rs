//! The result of a parse.

use serde::Serialize;

use crate::OptionSchema;
use crate::option::ParsedOption;

/// Recognized options and remaining positional arguments of one command
/// line.
///
/// A `Setting` is created by [`OptionSchema::parse`] and never changes
/// afterwards. It serializes to `{"arguments": [...], "options": [...]}`.
///
/// # Examples
///
/// ```
/// use optschema_core::OptionSchema;
///
/// let schema = OptionSchema::new()
///     .add("help", Some('h'), "Show help message")
///     .unwrap();
/// let setting = schema.parse(["-h", "--", "-x"]).unwrap();
///
/// assert!(OptionSchema::ptr_eq(setting.schema(), &schema));
/// assert_eq!(setting.options()[0].name(), "help");
/// assert_eq!(setting.arguments(), ["-x"]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Setting {
    #[serde(skip)]
    schema: OptionSchema,
    arguments: Vec<String>,
    options: Vec<ParsedOption>,
}

impl Setting {
    pub(crate) fn new(
        schema: OptionSchema,
        arguments: Vec<String>,
        options: Vec<ParsedOption>,
    ) -> Self {
        Self {
            schema,
            arguments,
            options,
        }
    }

    /// Returns the schema that produced this setting.
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    /// Returns the positional arguments in their original order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Returns the recognized options in order of appearance.
    pub fn options(&self) -> &[ParsedOption] {
        &self.options
    }
}

impl PartialEq for Setting {
    fn eq(&self, other: &Self) -> bool {
        OptionSchema::ptr_eq(&self.schema, &other.schema)
            && self.arguments == other.arguments
            && self.options == other.options
    }
}
