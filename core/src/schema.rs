//! The immutable option schema.
//!
//! An [`OptionSchema`] is a persistent value: every `add*` method validates
//! the new definition and returns a *new* schema with one more option, while
//! the schema it was called on stays exactly as it was. Cloning a schema is
//! cheap and clones compare equal under [`OptionSchema::ptr_eq`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ParseError;
use crate::help;
use crate::option::{FlagOption, RequiredArgumentOption};
use crate::parser::Parser;
use crate::setting::Setting;
use crate::spec::{FlagAction, FlagSpec, OptionSpec, RequiredArgumentAction, RequiredArgumentSpec};
use crate::validate::{SchemaError, validate_spec};

#[derive(Default)]
struct SchemaInner {
    specs: Vec<OptionSpec>,
    by_name: HashMap<String, usize>,
    by_short_name: HashMap<char, usize>,
}

/// The set of recognized command-line options.
///
/// # Examples
///
/// ```
/// use optschema_core::OptionSchema;
///
/// let base = OptionSchema::new()
///     .add("help", Some('h'), "Show help message and exit")
///     .unwrap();
/// let extended = base
///     .add_required("file", Some('f'), "FILE", "Specify input file")
///     .unwrap();
///
/// // `base` is untouched by the second `add_required`
/// assert_eq!(base.len(), 1);
/// assert_eq!(extended.len(), 2);
/// assert!(base.parse(["-f", "x"]).is_err());
/// assert!(extended.parse(["-f", "x"]).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct OptionSchema {
    inner: Arc<SchemaInner>,
}

impl OptionSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new schema with an additional flag option.
    ///
    /// `name` may contain ASCII letters, digits, and hyphens; `short_name`
    /// must be an ASCII letter or digit. Both must be unused in this schema.
    pub fn add(
        &self,
        name: &str,
        short_name: Option<char>,
        description: &str,
    ) -> Result<Self, SchemaError> {
        self.add_flag(name, short_name, description, None)
    }

    /// Returns a new schema with an additional flag option whose `action`
    /// runs once for every occurrence found by [`parse`](Self::parse).
    pub fn add_with_action<F>(
        &self,
        name: &str,
        short_name: Option<char>,
        description: &str,
        action: F,
    ) -> Result<Self, SchemaError>
    where
        F: Fn(&FlagOption) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.add_flag(name, short_name, description, Some(Arc::new(action)))
    }

    /// Returns a new schema with an additional option that requires an
    /// argument, labelled `argument_name` in help output.
    pub fn add_required(
        &self,
        name: &str,
        short_name: Option<char>,
        argument_name: &str,
        description: &str,
    ) -> Result<Self, SchemaError> {
        self.add_required_argument(name, short_name, argument_name, description, None)
    }

    /// Returns a new schema with an additional option that requires an
    /// argument and whose `action` runs once for every occurrence.
    ///
    /// The occurrence passed to `action` carries all argument values given to
    /// this option so far, in order, ending with its own.
    pub fn add_required_with_action<F>(
        &self,
        name: &str,
        short_name: Option<char>,
        argument_name: &str,
        description: &str,
        action: F,
    ) -> Result<Self, SchemaError>
    where
        F: Fn(&RequiredArgumentOption) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.add_required_argument(
            name,
            short_name,
            argument_name,
            description,
            Some(Arc::new(action)),
        )
    }

    fn add_flag(
        &self,
        name: &str,
        short_name: Option<char>,
        description: &str,
        action: Option<FlagAction>,
    ) -> Result<Self, SchemaError> {
        validate_spec(self, name, short_name)?;
        let spec = FlagSpec::new(name, short_name, description, action);
        Ok(self.with_spec(OptionSpec::Flag(Arc::new(spec))))
    }

    fn add_required_argument(
        &self,
        name: &str,
        short_name: Option<char>,
        argument_name: &str,
        description: &str,
        action: Option<RequiredArgumentAction>,
    ) -> Result<Self, SchemaError> {
        validate_spec(self, name, short_name)?;
        let spec = RequiredArgumentSpec::new(name, short_name, argument_name, description, action);
        Ok(self.with_spec(OptionSpec::RequiredArgument(Arc::new(spec))))
    }

    fn with_spec(&self, spec: OptionSpec) -> Self {
        debug!(
            name = spec.name(),
            short_name = ?spec.short_name(),
            takes_argument = spec.takes_argument(),
            "adding option to schema"
        );

        let index = self.inner.specs.len();
        let mut specs = self.inner.specs.clone();
        let mut by_name = self.inner.by_name.clone();
        let mut by_short_name = self.inner.by_short_name.clone();

        by_name.insert(spec.name().to_string(), index);
        if let Some(c) = spec.short_name() {
            by_short_name.insert(c, index);
        }
        specs.push(spec);

        Self {
            inner: Arc::new(SchemaInner {
                specs,
                by_name,
                by_short_name,
            }),
        }
    }

    /// Parses a command line (without the program name).
    ///
    /// Options are recognized until the first positional argument or a `--`
    /// terminator; everything after that is returned as positional
    /// arguments. Callbacks of matched options run as their occurrences are
    /// found. The first error aborts the whole parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use optschema_core::OptionSchema;
    ///
    /// let schema = OptionSchema::new()
    ///     .add("help", Some('h'), "Show help message")
    ///     .unwrap();
    ///
    /// let setting = schema.parse(["-h", "foo", "-x"]).unwrap();
    /// assert_eq!(setting.options().len(), 1);
    /// assert_eq!(setting.arguments(), ["foo", "-x"]);
    /// ```
    pub fn parse<I, S>(&self, args: I) -> Result<Setting, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queue = args.into_iter().map(Into::<String>::into).collect();
        let setting = Parser::new(self, queue)
            .run()
            .inspect_err(|err| debug!(error = %err, "option parsing failed"))?;

        debug!(
            options = setting.options().len(),
            arguments = setting.arguments().len(),
            "parsed command line"
        );
        Ok(setting)
    }

    /// Renders the help listing, one entry per line, sorted by long name.
    ///
    /// # Examples
    ///
    /// ```
    /// use optschema_core::OptionSchema;
    ///
    /// let schema = OptionSchema::new()
    ///     .add("help", Some('h'), "Show help message")
    ///     .unwrap();
    /// assert_eq!(schema.help_message(), ["-h, --help  Show help message"]);
    /// ```
    pub fn help_message(&self) -> Vec<String> {
        help::render(&self.inner.specs)
    }

    /// Returns the declared options in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.inner.specs
    }

    /// Looks up an option by its exact long name.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.inner
            .by_name
            .get(name)
            .and_then(|&index| self.inner.specs.get(index))
    }

    /// Looks up an option by its short name.
    pub fn get_by_short_name(&self, short_name: char) -> Option<&OptionSpec> {
        self.inner
            .by_short_name
            .get(&short_name)
            .and_then(|&index| self.inner.specs.get(index))
    }

    /// Returns the number of declared options.
    pub fn len(&self) -> usize {
        self.inner.specs.len()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.inner.specs.is_empty()
    }

    /// Whether `a` and `b` are the same schema value.
    ///
    /// Schemas built by separate `add*` calls are never the same, even if
    /// they declare identical options.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for OptionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSchema")
            .field("specs", &self.inner.specs)
            .finish()
    }
}

impl Serialize for OptionSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.specs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schema() {
        let schema = OptionSchema::new();
        assert!(schema.is_empty());
        assert!(schema.specs().is_empty());
        assert!(schema.help_message().is_empty());
    }

    #[test]
    fn test_add_returns_new_schema() {
        let base = OptionSchema::new()
            .add("verbose", Some('v'), "Be verbose")
            .unwrap();
        let extended = base.add("quiet", Some('q'), "Be quiet").unwrap();

        assert_eq!(base.len(), 1);
        assert!(base.get("quiet").is_none());
        assert!(base.get_by_short_name('q').is_none());

        assert_eq!(extended.len(), 2);
        assert_eq!(extended.get("quiet").map(OptionSpec::name), Some("quiet"));
        assert_eq!(
            extended.get_by_short_name('v').map(OptionSpec::name),
            Some("verbose")
        );
        assert!(!OptionSchema::ptr_eq(&base, &extended));
    }

    #[test]
    fn test_failed_add_leaves_schema_usable() {
        let schema = OptionSchema::new()
            .add("help", Some('h'), "Show help message and exit")
            .unwrap();

        let err = schema.add("help", Some('H'), "Again").unwrap_err();
        assert_eq!(err, SchemaError::DuplicateName("help".to_string()));

        assert_eq!(schema.len(), 1);
        assert!(schema.get_by_short_name('H').is_none());
        assert!(schema.parse(["--help"]).is_ok());
    }

    #[test]
    fn test_divergent_schemas_from_common_ancestor() {
        let base = OptionSchema::new().add("all", Some('a'), "All").unwrap();
        let left = base.add("left", Some('x'), "Left").unwrap();
        let right = base.add("right", Some('x'), "Right").unwrap();

        assert_eq!(left.get_by_short_name('x').map(OptionSpec::name), Some("left"));
        assert_eq!(right.get_by_short_name('x').map(OptionSpec::name), Some("right"));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_specs_keep_declaration_order() {
        let schema = OptionSchema::new()
            .add_required("file", Some('f'), "FILE", "Specify input file")
            .unwrap()
            .add("dir", Some('d'), "Use directory")
            .unwrap()
            .add("all", None, "Everything")
            .unwrap();

        let names: Vec<&str> = schema.specs().iter().map(OptionSpec::name).collect();
        assert_eq!(names, ["file", "dir", "all"]);
    }

    #[test]
    fn test_clone_is_same_schema() {
        let schema = OptionSchema::new().add("help", Some('h'), "Help").unwrap();
        let clone = schema.clone();
        assert!(OptionSchema::ptr_eq(&schema, &clone));
    }

    #[test]
    fn test_schema_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionSchema>();
    }
}
