use thiserror::Error;

use crate::parser::ErrorContext;

/// A construction time error in the configuration of a parser.
///
/// Raised by [`Group::build`](crate::Group::build) and [`CommandParser::build_parser`](crate::CommandParser::build_parser).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl ConfigError {
    /// The message, without the `Config error:` prefix.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A coercion error raised by a field once the token stream has been consumed.
///
/// Carries a single human-readable line naming the offending field/token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Parse error: {0}")]
pub struct ParseError(pub(crate) String);

impl ParseError {
    /// The message, without the `Parse error:` prefix.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// A lexical error: one of the input arguments is not a recognizable token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TokenizeError {
    message: String,
    index: usize,
    args: Vec<String>,
}

impl TokenizeError {
    pub(crate) fn new(message: impl Into<String>, index: usize, args: Vec<String>) -> Self {
        assert!(index < args.len(), "internal error - index must point at an argument");
        Self {
            message: message.into(),
            index,
            args,
        }
    }

    /// The reason for the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The index of the offending argument.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The original input arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The caret diagnostic pointing at the offending argument.
    pub fn context(&self) -> ErrorContext {
        ErrorContext::new(self.index, &self.args)
    }
}

/// The reason an invocation of a [`GeneralParser`](crate::GeneralParser) failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lexical(#[from] TokenizeError),
    /// A field could not be coerced.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The command expects a subcommand but the input ran out.
    #[error("Expecting a subcommand")]
    MissingSubcommand,
    /// The subcommand name doesn't match any registered subcommand.
    #[error("Unknown subcommand: '{0}'")]
    UnknownSubcommand(String),
    /// A non-positional token was left over where a subcommand name was expected.
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    /// A token was left over after a terminal command.
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    /// The command was configured with neither an action nor subcommands.
    #[error("Command '{0}' needs either an action or subcommands")]
    Unfinished(String),
}
