use std::collections::HashSet;

use crate::api::{Flag, TokenParser, Values};
use crate::constant::*;
use crate::matcher::Group;
use crate::parser::{
    ConfigError, ConsoleInterface, GeneralParser, Next, Node, UserInterface,
};

/// One level of a command tree: a group of fields, followed by either a terminal action or named subcommands.
///
/// Every level implicitly carries the help switch (`-h`/`--help`).
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{Command, CommandParser, Flag, Positional};
///
/// let parser = CommandParser::new("program")
///     .add("verbose", Flag::new().short('v'))
///     .subcommand(
///         Command::new("add")
///             .about("Add a file")
///             .add("file", Positional::<String>::new("FILE"))
///             .action(|mut values| {
///                 let verbose: bool = values.take("verbose").unwrap();
///                 let file: String = values.take("file").unwrap();
///                 format!("{verbose} {file}")
///             }),
///     )
///     .build_parser()
///     .unwrap();
///
/// assert_eq!(parser.parse_tokens(&["-v", "add", "main.rs"]).unwrap(), "true main.rs");
/// ```
pub struct Command<'a, R> {
    name: String,
    about: Option<String>,
    group: Group,
    next: Option<Plan<'a, R>>,
    deferred_error: Option<ConfigError>,
}

enum Plan<'a, R> {
    Action(Box<dyn Fn(Values) -> R + 'a>),
    Subcommands(Vec<Command<'a, R>>),
}

impl<'a, R> Command<'a, R> {
    /// Create a command named `name`.
    /// As a subcommand, this is the exact (case-sensitive) word that selects it.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: None,
            group: Group::new(),
            next: None,
            deferred_error: None,
        }
    }

    /// Document the about message for this command.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add a field to this command's group.
    /// The field's value is available to the action of this command, and to the actions of all its subcommands.
    pub fn add<P>(mut self, name: impl Into<String>, parser: P) -> Self
    where
        P: TokenParser + 'static,
        P::Output: 'static,
        P::State: 'static,
    {
        self.group = self.group.add(name, parser);
        self
    }

    /// Set the terminal action, invoked with the record of every field from the root down to this command.
    /// If repeated, only the final action will apply.
    ///
    /// A command cannot have both an action and subcommands.
    pub fn action(mut self, action: impl Fn(Values) -> R + 'a) -> Self {
        if matches!(self.next, Some(Plan::Subcommands(_))) {
            self.defer_conflict();
        } else {
            self.next.replace(Plan::Action(Box::new(action)));
        }

        self
    }

    /// Add a subcommand.
    /// Subcommands are selected by the first positional token this command's fields leave unclaimed.
    ///
    /// A command cannot have both an action and subcommands.
    pub fn subcommand(mut self, command: Command<'a, R>) -> Self {
        match self.next.take() {
            Some(Plan::Action(action)) => {
                self.next.replace(Plan::Action(action));
                self.defer_conflict();
            }
            Some(Plan::Subcommands(mut commands)) => {
                commands.push(command);
                self.next.replace(Plan::Subcommands(commands));
            }
            None => {
                self.next.replace(Plan::Subcommands(vec![command]));
            }
        }

        self
    }

    fn defer_conflict(&mut self) {
        if self.deferred_error.is_none() {
            self.deferred_error.replace(ConfigError(format!(
                "Command '{}' cannot have both an action and subcommands.",
                self.name
            )));
        }
    }

    pub(crate) fn build_node(self) -> Result<Node<'a, R>, ConfigError> {
        let Command {
            name,
            about,
            group,
            next,
            deferred_error,
        } = self;

        if let Some(error) = deferred_error {
            return Err(error);
        }

        let group = group
            .add(
                HELP_FIELD,
                Flag::new()
                    .short(HELP_SHORT)
                    .long(HELP_LONG)
                    .description(HELP_MESSAGE),
            )
            .build()?;
        let next = match next {
            None => None,
            Some(Plan::Action(action)) => Some(Next::Action(action)),
            Some(Plan::Subcommands(commands)) => {
                let mut names = HashSet::new();
                let mut children = Vec::default();

                for command in commands {
                    if !is_subcommand_name(&command.name) {
                        return Err(ConfigError(format!(
                            "Subcommand name '{}' is invalid (must be a single word not starting with '-').",
                            command.name
                        )));
                    }

                    if !names.insert(command.name.clone()) {
                        return Err(ConfigError(format!(
                            "Cannot duplicate the subcommand '{}' (command '{name}').",
                            command.name
                        )));
                    }

                    children.push(command.build_node()?);
                }

                Some(Next::Subcommands(children))
            }
        };

        Ok(Node {
            name,
            about,
            group,
            next,
        })
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`GeneralParser`] rooted at this command, for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use argot_builder as argot;
    /// use argot::{Command, Opt};
    ///
    /// // Function under test.
    /// // We want to make sure the command is wired up correctly.
    /// pub fn configure(command: Command<'static, u32>) -> Command<'static, u32> {
    ///     command
    ///         .add("value", Opt::<u32>::new("VALUE").short('x'))
    ///         .action(|mut values| values.take::<u32>("value").unwrap() * 2)
    /// }
    ///
    /// let parser = configure(Command::new("dummy")).build_parser().unwrap();
    /// assert_eq!(parser.parse_tokens(&["-x", "2"]).unwrap(), 4);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn build_parser(self) -> Result<GeneralParser<'a, R>, ConfigError> {
        let program = self.name.clone();
        Ok(GeneralParser::new(
            program,
            self.build_node()?,
            DEFAULT_SCREEN_WIDTH,
            Box::new(ConsoleInterface::default()),
        ))
    }
}

// The word that selects a subcommand must look positional to the tokenizer.
fn is_subcommand_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('-') && !name.chars().any(char::is_whitespace)
}

/// The root of a command tree: the program itself.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{CommandParser, CountFlag, Positional};
///
/// let parser = CommandParser::new("program")
///     .about("Greets someone.")
///     .add("loud", CountFlag::new().short('l').description("Greet louder"))
///     .add("name", Positional::<String>::new("NAME"))
///     .action(|mut values| {
///         let loud: usize = values.take("loud").unwrap();
///         let name: String = values.take("name").unwrap();
///         format!("hello {name}{}", "!".repeat(loud))
///     })
///     .build();
///
/// assert_eq!(parser.parse_tokens(&["world", "-ll"]).unwrap(), "hello world!!");
/// assert_eq!(parser.parse_tokens(&["--help"]).unwrap_err(), 0);
/// assert_eq!(parser.parse_tokens(&["--bogus"]).unwrap_err(), 1);
/// ```
pub struct CommandParser<'a, R> {
    root: Command<'a, R>,
    screen_width: usize,
}

impl<'a, R> CommandParser<'a, R> {
    /// Create a command line parser for the program named `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            root: Command::new(program),
            screen_width: DEFAULT_SCREEN_WIDTH,
        }
    }

    /// Document the about message for this program.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.root = self.root.about(description);
        self
    }

    /// Set the width the help message wraps to.
    /// Defaults to `100`.
    pub fn screen_width(mut self, width: usize) -> Self {
        self.screen_width = width;
        self
    }

    /// Add a field to the root level.
    /// See [`Command::add`].
    pub fn add<P>(mut self, name: impl Into<String>, parser: P) -> Self
    where
        P: TokenParser + 'static,
        P::Output: 'static,
        P::State: 'static,
    {
        self.root = self.root.add(name, parser);
        self
    }

    /// Set the terminal action of the root level.
    /// See [`Command::action`].
    pub fn action(mut self, action: impl Fn(Values) -> R + 'a) -> Self {
        self.root = self.root.action(action);
        self
    }

    /// Add a subcommand to the root level.
    /// See [`Command::subcommand`].
    pub fn subcommand(mut self, command: Command<'a, R>) -> Self {
        self.root = self.root.subcommand(command);
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a, R>, ConfigError> {
        let CommandParser { root, screen_width } = self;
        let program = root.name.clone();
        Ok(GeneralParser::new(
            program,
            root.build_node()?,
            screen_width,
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated field name).
    pub fn build_parser(self) -> Result<GeneralParser<'a, R>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated field name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a, R> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Opt, Positional};
    use rstest::rstest;

    fn leaf(name: &str) -> Command<'static, ()> {
        Command::new(name).action(|_| ())
    }

    #[test]
    fn build_node() {
        // Setup
        let command = Command::new("program")
            .about("about")
            .add("value", Opt::<u32>::new("VALUE").short('v'))
            .subcommand(leaf("a"))
            .subcommand(leaf("b"));

        // Execute
        let node = command.build_node().unwrap();

        // Verify
        assert_eq!(node.name, "program");
        assert_eq!(node.about, Some("about".to_string()));
        let names: Vec<String> = node.group.documentation().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["value", HELP_FIELD]);
        assert_matches!(node.next, Some(Next::Subcommands(children)) if children.len() == 2);
    }

    #[test]
    fn build_node_unfinished() {
        let node = Command::<()>::new("program").build_node().unwrap();
        assert_matches!(node.next, None);
    }

    #[test]
    fn action_replaced() {
        // Setup
        let command = Command::new("program").action(|_| 1).action(|_| 2);

        // Execute
        let node = command.build_node().unwrap();

        // Verify
        match node.next {
            Some(Next::Action(action)) => assert_eq!(action(Values::default()), 2),
            _ => panic!("expected an action"),
        }
    }

    #[rstest]
    #[case(Command::new("program").action(|_| ()).subcommand(leaf("a")), "Command 'program' cannot have both an action and subcommands.")]
    #[case(Command::new("program").subcommand(leaf("a")).action(|_| ()), "Command 'program' cannot have both an action and subcommands.")]
    #[case(Command::new("program").subcommand(leaf("a")).subcommand(leaf("a")), "Cannot duplicate the subcommand 'a' (command 'program').")]
    #[case(Command::new("program").subcommand(leaf("-a")), "Subcommand name '-a' is invalid (must be a single word not starting with '-').")]
    #[case(Command::new("program").subcommand(leaf("a b")), "Subcommand name 'a b' is invalid (must be a single word not starting with '-').")]
    #[case(Command::new("program").subcommand(leaf("")), "Subcommand name '' is invalid (must be a single word not starting with '-').")]
    #[case(Command::new("program").add("help", Flag::new().short('x')).action(|_| ()), "Cannot duplicate the field 'help'.")]
    #[case(Command::new("program").add("hat", Flag::new().short('h')).action(|_| ()), "Cannot duplicate the short name '-h' (field 'help').")]
    #[case(Command::new("program").subcommand(Command::new("a").add("x", Positional::<u32>::new("x")).action(|_| ())), "Metavar 'x' is invalid (must match [A-Z][A-Z0-9_-]*).")]
    fn build_node_invalid(#[case] command: Command<'static, ()>, #[case] message: &str) {
        // Execute
        let result = command.build_node();

        // Verify
        assert_eq!(result.err().unwrap().message(), message);
    }

    #[test]
    fn subcommand_names_per_level() {
        // Setup
        let command = Command::new("program")
            .subcommand(Command::new("a").subcommand(leaf("x")))
            .subcommand(Command::new("b").subcommand(leaf("x")));

        // Execute & verify
        assert_matches!(command.build_node(), Ok(_));
    }

    #[test]
    fn command_parser_build_parser() {
        // Setup
        let parser = CommandParser::new("program")
            .screen_width(40)
            .add("a", Flag::new().short('a'))
            .add("b", Flag::new().short('a'))
            .action(|_| ());

        // Execute
        let result = parser.build_parser();

        // Verify
        assert_eq!(
            result.err().unwrap().to_string(),
            "Config error: Cannot duplicate the short name '-a' (field 'b')."
        );
    }
}
