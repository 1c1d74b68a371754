//! The command-line walker.
//!
//! Tokens are consumed front to back. Each one is classified as the `--`
//! terminator, a long option (`--name[=value]`), a short-option cluster
//! (`-abc`), or a positional argument. The first positional argument ends
//! option scanning, as `getopt` does without permutation.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::trace;

use crate::OptionSchema;
use crate::error::{ParseError, ParseErrorKind};
use crate::option::{FlagOption, ParsedOption, RequiredArgumentOption, Token};
use crate::setting::Setting;
use crate::spec::{FlagSpec, OptionSpec, RequiredArgumentSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Terminator,
    LongOption,
    ShortCluster,
    Positional,
}

fn classify(token: &str) -> TokenClass {
    if token == "--" {
        TokenClass::Terminator
    } else if token.starts_with("--") {
        TokenClass::LongOption
    } else if token == "-" || !token.starts_with('-') {
        TokenClass::Positional
    } else {
        TokenClass::ShortCluster
    }
}

/// State of a single parse.
pub(crate) struct Parser<'a> {
    schema: &'a OptionSchema,
    queue: VecDeque<String>,
    options: Vec<ParsedOption>,
    // Argument values per required-argument option, keyed by long name.
    history: HashMap<String, Vec<String>>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(schema: &'a OptionSchema, queue: VecDeque<String>) -> Self {
        Self {
            schema,
            options: Vec::with_capacity(queue.len()),
            queue,
            history: HashMap::new(),
        }
    }

    pub(crate) fn run(mut self) -> Result<Setting, ParseError> {
        while let Some(class) = self.queue.front().map(|token| classify(token)) {
            trace!(token = ?self.queue.front(), ?class, "classified token");
            match class {
                TokenClass::Terminator => {
                    self.queue.pop_front();
                    break;
                }
                TokenClass::Positional => break,
                TokenClass::LongOption => {
                    if let Some(token) = self.queue.pop_front() {
                        self.parse_long_option(token)?;
                    }
                }
                TokenClass::ShortCluster => {
                    if let Some(token) = self.queue.pop_front() {
                        self.parse_short_cluster(&token)?;
                    }
                }
            }
        }

        Ok(Setting::new(
            self.schema.clone(),
            self.queue.into(),
            self.options,
        ))
    }

    fn parse_long_option(&mut self, token: String) -> Result<(), ParseError> {
        let body = token.strip_prefix("--").unwrap_or(&token);
        let (name, value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };
        let spec = self.resolve_long_name(name, &token)?;

        match spec {
            OptionSpec::Flag(spec) => {
                if value.is_some() {
                    return Err(self.error(ParseErrorKind::UnexpectedArgument { option: token }));
                }
                self.add_flag(spec, Token::Long(token))
            }
            OptionSpec::RequiredArgument(spec) => {
                let value = match value {
                    Some(value) => value,
                    None => self.next_argument(&token)?,
                };
                self.add_required_argument(spec, Token::Long(token), value)
            }
        }
    }

    /// Finds the option named `name`, or the only one it abbreviates.
    fn resolve_long_name(&self, name: &str, token: &str) -> Result<OptionSpec, ParseError> {
        if let Some(spec) = self.schema.get(name) {
            return Ok(spec.clone());
        }

        let candidates: Vec<&OptionSpec> = self
            .schema
            .specs()
            .iter()
            .filter(|spec| spec.name().starts_with(name))
            .collect();

        match candidates.as_slice() {
            [] => Err(self.error(ParseErrorKind::UnknownOption {
                option: token.to_string(),
            })),
            [spec] => Ok((*spec).clone()),
            _ => Err(self.error(ParseErrorKind::AmbiguousOption {
                option: token.to_string(),
                candidates: candidates
                    .iter()
                    .map(|spec| spec.name().to_string())
                    .collect(),
            })),
        }
    }

    fn parse_short_cluster(&mut self, token: &str) -> Result<(), ParseError> {
        let mut chars = token.chars();
        chars.next();

        while let Some(c) = chars.next() {
            let Some(spec) = self.schema.get_by_short_name(c).cloned() else {
                return Err(self.error(ParseErrorKind::UnknownOption {
                    option: format!("-{c}"),
                }));
            };

            match spec {
                OptionSpec::Flag(spec) => self.add_flag(spec, Token::Short(c))?,
                OptionSpec::RequiredArgument(spec) => {
                    // The rest of the cluster is the argument, if there is a rest.
                    let rest = chars.as_str();
                    let value = if rest.is_empty() {
                        self.next_argument(&format!("-{c}"))?
                    } else {
                        rest.to_string()
                    };
                    return self.add_required_argument(spec, Token::Short(c), value);
                }
            }
        }
        Ok(())
    }

    fn next_argument(&mut self, option: &str) -> Result<String, ParseError> {
        self.queue.pop_front().ok_or_else(|| {
            self.error(ParseErrorKind::MissingArgument {
                option: option.to_string(),
            })
        })
    }

    fn add_flag(&mut self, spec: Arc<FlagSpec>, token: Token) -> Result<(), ParseError> {
        let option = FlagOption::new(Arc::clone(&spec), self.schema.clone(), token);
        spec.fire(&option)?;
        self.options.push(option.into());
        Ok(())
    }

    fn add_required_argument(
        &mut self,
        spec: Arc<RequiredArgumentSpec>,
        token: Token,
        value: String,
    ) -> Result<(), ParseError> {
        let history = self.history.entry(spec.name().to_string()).or_default();
        history.push(value);
        let values: Arc<[String]> = Arc::from(history.as_slice());

        let option = RequiredArgumentOption::new(Arc::clone(&spec), self.schema.clone(), token, values);
        spec.fire(&option)?;
        self.options.push(option.into());
        Ok(())
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.schema, kind)
    }
}
