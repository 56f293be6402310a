use std::env;
use thiserror::Error;

use crate::api::Values;
use crate::constant::HELP_FIELD;
use crate::matcher::{tokenize, ArgumentGroup};
use crate::model::Token;
use crate::parser::interface::UserInterface;
use crate::parser::{CliError, HelpContext};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A built level of the command tree.
pub(crate) struct Node<'a, R> {
    pub(crate) name: String,
    pub(crate) about: Option<String>,
    pub(crate) group: ArgumentGroup,
    pub(crate) next: Option<Next<'a, R>>,
}

pub(crate) enum Next<'a, R> {
    Action(Box<dyn Fn(Values) -> R + 'a>),
    Subcommands(Vec<Node<'a, R>>),
}

impl<'a, R> std::fmt::Debug for Node<'a, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("group", &self.group)
            .field("next", &self.next)
            .finish()
    }
}

impl<'a, R> std::fmt::Debug for Next<'a, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Next::Action(_) => write!(f, "Action"),
            Next::Subcommands(children) => f.debug_tuple("Subcommands").field(children).finish(),
        }
    }
}

impl<'a, R> Node<'a, R> {
    fn help_context(&self, program: impl Into<String>, screen_width: usize) -> HelpContext {
        // The help switch is appended to the group last, but displayed first.
        let (help, fields): (Vec<_>, Vec<_>) = self
            .group
            .documentation()
            .into_iter()
            .partition(|(name, _)| name == HELP_FIELD);
        let entries = help
            .into_iter()
            .chain(fields)
            .map(|(_, documentation)| documentation)
            .collect();
        let mut subcommands = match &self.next {
            Some(Next::Subcommands(children)) => children
                .iter()
                .map(|child| (child.name.clone(), child.about.clone().unwrap_or_default()))
                .collect::<Vec<_>>(),
            _ => Vec::default(),
        };
        subcommands.sort_by_key(|(name, _)| name.to_lowercase());

        HelpContext::new(program, self.about.clone(), entries, subcommands, screen_width)
    }
}

/// The successful outcome of [`GeneralParser::execute`].
#[derive(Debug)]
pub enum Dispatch<R> {
    /// The terminal action ran, producing this result.
    Action(R),
    /// The help switch was encountered at this level; no action ran.
    Help(HelpContext),
}

/// The failed outcome of [`GeneralParser::execute`].
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Failure {
    /// What went wrong.
    pub error: CliError,
    /// The help of the level at which it went wrong.
    pub context: HelpContext,
}

/// The configured command line parser.
/// Built via [`CommandParser::build`](crate::CommandParser::build).
pub struct GeneralParser<'a, R> {
    program: String,
    root: Node<'a, R>,
    screen_width: usize,
    user_interface: Box<dyn UserInterface>,
}

impl<'a, R> GeneralParser<'a, R> {
    pub(crate) fn new(
        program: impl Into<String>,
        root: Node<'a, R>,
        screen_width: usize,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            root,
            screen_width,
            user_interface,
        }
    }

    /// Run the command tree against the input arguments, without printing anything.
    ///
    /// At each level, the level's fields consume the tokens and are coerced into values.
    /// The values of every level are merged into one record, which is handed to the terminal action.
    /// If the help switch is encountered, the help of that level is returned instead, regardless of the tokens remaining after it.
    /// A field of that level which fails to coerce is still reported as a failure.
    pub fn execute(&self, args: &[impl AsRef<str>]) -> Result<Dispatch<R>, Failure> {
        let tokens = tokenize(args).map_err(|error| Failure {
            error: error.into(),
            context: self.root.help_context(&self.program, self.screen_width),
        })?;

        self.dispatch(&self.root, self.program.clone(), &tokens, Values::default())
    }

    fn dispatch(
        &self,
        node: &Node<'a, R>,
        program: String,
        tokens: &[Token],
        mut values: Values,
    ) -> Result<Dispatch<R>, Failure> {
        let accumulator = node.group.consume(tokens);
        let remaining = accumulator.remaining;
        let fail = |error: CliError| Failure {
            error,
            context: node.help_context(program.as_str(), self.screen_width),
        };
        // Coercion errors are reported even when help is requested.
        let mut level = node
            .group
            .coerce(accumulator)
            .map_err(|error| fail(error.into()))?;

        if let Ok(true) = level.take::<bool>(HELP_FIELD) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Help requested for '{program}'.");
            }

            return Ok(Dispatch::Help(node.help_context(program.as_str(), self.screen_width)));
        }

        values.merge(level);

        match &node.next {
            None => Err(fail(CliError::Unfinished(node.name.clone()))),
            Some(Next::Action(action)) => match remaining.first() {
                Some(token) => Err(fail(CliError::UnknownArgument(token.to_string()))),
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Invoking the action of '{program}' with {values:?}.");
                    }

                    Ok(Dispatch::Action(action(values)))
                }
            },
            Some(Next::Subcommands(children)) => match remaining.split_first() {
                None => Err(fail(CliError::MissingSubcommand)),
                Some((Token::Positional(name), rest)) => {
                    match children.iter().find(|child| &child.name == name) {
                        Some(child) => {
                            #[cfg(feature = "tracing_debug")]
                            {
                                debug!("Dispatching '{program}' to '{name}'.");
                            }

                            self.dispatch(child, format!("{program} {name}"), rest, values)
                        }
                        None => Err(fail(CliError::UnknownSubcommand(name.clone()))),
                    }
                }
                Some((token, _)) => Err(fail(CliError::UnknownOption(token.to_string()))),
            },
        }
    }

    /// Suggest completions for `partial`, given the arguments that precede it.
    ///
    /// Completion follows the subcommands named in `args`, and suggests from the deepest level reached.
    /// Suggestions are empty when `args` cannot be tokenized, or name an unknown subcommand.
    pub fn suggest(&self, args: &[impl AsRef<str>], partial: &str) -> Vec<String> {
        match tokenize(args) {
            Ok(tokens) => complete(&self.root, &tokens, partial),
            Err(_) => Vec::default(),
        }
    }

    /// Run the command line parser against the input arguments.
    ///
    /// Parsing happens in three phases, at each level of the command tree:
    /// 1. The level's fields consume the tokens they recognize.
    /// 2. The fields coerce what they consumed into typed values.
    /// 3. Any remaining tokens select a subcommand (repeating from phase 1), or are an error for a terminal action.
    ///
    /// If at any point the parser encounters an error (ex: an unknown option, an unconvertable value, etc), it prints the error and returns `Err(1)`.
    /// A lexical error is followed by the offending argument underlined, and any other error by the help message of the level that failed.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser prints the help message of that level and returns `Err(0)`.
    /// This skips the action entirely.
    pub fn parse_tokens(&self, args: &[&str]) -> Result<R, i32> {
        match self.execute(args) {
            Ok(Dispatch::Action(result)) => Ok(result),
            Ok(Dispatch::Help(context)) => {
                self.user_interface.print(context.render());
                Err(0)
            }
            Err(Failure { error, context }) => {
                let error_context = match &error {
                    CliError::Lexical(tokenize_error) => Some(tokenize_error.context()),
                    _ => None,
                };
                self.user_interface.print_error(error);

                match error_context {
                    Some(error_context) => self.user_interface.print_error_context(error_context),
                    None => self.user_interface.print(context.render()),
                }

                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// See [`GeneralParser::parse_tokens`] for the parsing semantics.
    /// On an error, exits with error code `1`; on help, exits with error code `0` (via [`std::process::exit`]).
    pub fn parse(&self) -> R {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(result) => result,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}

fn complete<R>(node: &Node<'_, R>, tokens: &[Token], partial: &str) -> Vec<String> {
    let accumulator = node.group.consume(tokens);

    if let Some(Next::Subcommands(children)) = &node.next {
        let selected = accumulator
            .remaining
            .iter()
            .enumerate()
            .find_map(|(i, token)| match token {
                Token::Positional(name) => Some((name, &accumulator.remaining[i + 1..])),
                _ => None,
            });

        if let Some((name, rest)) = selected {
            return match children.iter().find(|child| &child.name == name) {
                Some(child) => complete(child, rest, partial),
                None => Vec::default(),
            };
        }

        let completion = node.group.complete(tokens, partial, &accumulator);
        let mut suggestions = completion.suggestions;

        if !completion.overrides {
            suggestions.extend(
                children
                    .iter()
                    .filter(|child| child.name.starts_with(partial))
                    .map(|child| child.name.clone()),
            );
        }

        return suggestions;
    }

    node.group.complete(tokens, partial, &accumulator).suggestions
}
