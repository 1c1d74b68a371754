//! Immutable option schemas and a GNU-style command-line option parser.
//!
//! This crate provides the building blocks for handling command-line
//! options:
//!
//! - [`OptionSchema`] — a persistent set of declared options. Every `add*`
//!   call validates the definition and returns a new schema; the old one is
//!   left intact.
//! - [`OptionSpec`] — a declared option, either a flag or an option that
//!   requires an argument.
//! - [`Setting`] — the result of [`OptionSchema::parse`]: recognized options
//!   in order of appearance ([`ParsedOption`]) and the remaining positional
//!   arguments.
//!
//! The parser accepts `--name`, `--name=value`, unambiguous abbreviations of
//! long names, `-x`, clustered short options (`-abc`), and short options
//! that take the rest of their cluster as the argument (`-fvalue`). A `--`
//! token or the first positional argument ends option scanning.
//!
//! [`OptionSchema::help_message`] renders a column-aligned listing of the
//! declared options.
//!
//! Declaration problems are reported as [`SchemaError`], parse problems as
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! use optschema_core::*;
//!
//! let schema = OptionSchema::new()
//!     .add("help", Some('h'), "Show help message and exit")?
//!     .add("verbose", Some('v'), "Be verbose")?
//!     .add_required("file", Some('f'), "FILE", "Specify input file")?;
//!
//! let setting = schema.parse(["-vffoo.txt", "--verb", "--file", "bar.txt", "input"])?;
//!
//! let rendered: Vec<String> = setting.options().iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, ["-v", "-f", "--verb", "--file"]);
//! assert_eq!(setting.arguments(), ["input"]);
//!
//! let last = setting.options()[3].as_required_argument().unwrap();
//! assert_eq!(last.argument_value(), "bar.txt");
//! assert_eq!(last.argument_values(), ["foo.txt", "bar.txt"]);
//!
//! for line in schema.help_message() {
//!     println!("{line}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod help;
mod option;
mod parser;
mod schema;
mod setting;
mod spec;
mod validate;

pub use error::{ParseError, ParseErrorKind};
pub use help::{HEADING_SEPARATOR, INDENT_UNIT, MAX_HEADING_WIDTH};
pub use option::{FlagOption, ParsedOption, RequiredArgumentOption};
pub use schema::OptionSchema;
pub use setting::Setting;
pub use spec::{FlagAction, FlagSpec, OptionSpec, RequiredArgumentAction, RequiredArgumentSpec};
pub use validate::{SchemaError, validate_name, validate_short_name, validate_spec};
