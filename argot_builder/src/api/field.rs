use std::str::FromStr;

use crate::api::capture::{
    custom_reader, from_str_reader, no_suggestions, read_all, Reader, Suggester,
};
use crate::api::core::{Consumed, TokenParser};
use crate::matcher::{is_long_name, is_short_name};
use crate::model::{Completion, Documentation, Token};
use crate::parser::{ConfigError, ParseError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Names {
    short: Option<char>,
    long: Option<String>,
}

impl Names {
    /// Ex: `-f/--flag`.
    fn display(&self) -> String {
        match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("-{s}/--{l}"),
            (Some(s), None) => format!("-{s}"),
            (None, Some(l)) => format!("--{l}"),
            (None, None) => String::default(),
        }
    }

    /// Ex: `-f, --flag`, or `    --flag` when there is no short name.
    fn prefix(&self) -> String {
        match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("-{s}, --{l}"),
            (Some(s), None) => format!("-{s}"),
            (None, Some(l)) => format!("    --{l}"),
            (None, None) => String::default(),
        }
    }

    /// Ex: `-f`, preferring the short name.
    fn usage(&self) -> String {
        match (&self.short, &self.long) {
            (Some(s), _) => format!("-{s}"),
            (None, Some(l)) => format!("--{l}"),
            (None, None) => String::default(),
        }
    }

    fn matches(&self, token: &Token) -> bool {
        token.matches(self.short, self.long.as_deref())
    }

    // The preceding token names this field but didn't supply an inline argument.
    fn is_mid_argument(&self, preceding: &[Token]) -> bool {
        match preceding.last() {
            Some(token) => self.matches(token) && token.argument().is_none(),
            None => false,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.short.is_none() && self.long.is_none() {
            return Err(ConfigError(
                "At least one of short or long name must be defined.".to_string(),
            ));
        }

        if let Some(short) = self.short {
            if !is_short_name(short) {
                return Err(ConfigError(format!(
                    "Short name '{short}' is invalid (must be a single ascii alphanumeric)."
                )));
            }
        }

        if let Some(long) = &self.long {
            if !is_long_name(long) {
                return Err(ConfigError(format!(
                    "Long name '{long}' is invalid (must be ascii alphanumerics with internal hyphens)."
                )));
            }
        }

        Ok(())
    }

    /// Suggest the names of this field.
    /// `remaining` is how many more occurrences are allowed (`None` for unbounded).
    fn suggest(&self, partial: &str, remaining: Option<usize>) -> Vec<String> {
        if remaining == Some(0) {
            return Vec::default();
        }

        let mut suggestions = Vec::default();

        if let Some(short) = self.short {
            if partial == "-" {
                suggestions.push(format!("-{short}"));
            } else if let Some(cluster) = open_cluster(partial) {
                let used = cluster.chars().filter(|c| *c == short).count();

                if remaining.map_or(true, |r| used < r) {
                    suggestions.push(format!("{partial}{short}"));
                }
            }
        }

        if let Some(long) = &self.long {
            let long = format!("--{long}");

            if long.starts_with(partial) {
                suggestions.push(long);
            }
        }

        suggestions
    }
}

// The short names of a partially typed cluster, ex: `-abc` gives `abc`.
fn open_cluster(partial: &str) -> Option<&str> {
    match partial.strip_prefix('-') {
        Some(cluster) if !cluster.is_empty() && cluster.chars().all(is_short_name) => {
            Some(cluster)
        }
        _ => None,
    }
}

fn times(count: usize) -> String {
    if count == 1 {
        "once".to_string()
    } else {
        format!("{count} times")
    }
}

fn validate_metavar(metavar: &str) -> Result<(), ConfigError> {
    let mut chars = metavar.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ConfigError(format!(
            "Metavar '{metavar}' is invalid (must match [A-Z][A-Z0-9_-]*)."
        )))
    }
}

fn validate_maximum(max: Option<usize>, name: &str) -> Result<(), ConfigError> {
    match max {
        Some(0) => Err(ConfigError(format!(
            "{name} maximum count must be at least 1."
        ))),
        _ => Ok(()),
    }
}

// Head must carry the option, without an inline argument.
fn read_switch<'t>(names: &Names, count: usize, tokens: &'t [Token]) -> Option<Consumed<'t, usize>> {
    match tokens.split_first() {
        Some((head, rest)) if names.matches(head) && head.argument().is_none() => {
            Some(Consumed::new(count + 1, rest))
        }
        _ => None,
    }
}

// Head must carry the option.
// The argument is taken inline, else from a following positional, else recorded as missing.
fn read_argument<'t>(
    names: &Names,
    arguments: &[Option<String>],
    tokens: &'t [Token],
) -> Option<Consumed<'t, Vec<Option<String>>>> {
    let (head, rest) = tokens.split_first()?;

    if !names.matches(head) {
        return None;
    }

    let mut arguments = arguments.to_vec();

    if let Some(argument) = head.argument() {
        arguments.push(Some(argument.to_string()));
        return Some(Consumed::new(arguments, rest));
    }

    match rest.split_first() {
        Some((Token::Positional(value), after)) => {
            arguments.push(Some(value.clone()));
            Some(Consumed::new(arguments, after))
        }
        _ => {
            arguments.push(None);
            Some(Consumed::new(arguments, rest))
        }
    }
}

fn check_arguments<'s>(
    names: &Names,
    arguments: &'s [Option<String>],
    max: Option<usize>,
) -> Result<Vec<&'s str>, ParseError> {
    if arguments.iter().any(Option::is_none) {
        return Err(ParseError(format!(
            "{} needs an argument",
            names.display()
        )));
    }

    match max {
        Some(max) if arguments.len() > max => Err(ParseError(format!(
            "You can't set {} argument more than {}",
            names.display(),
            times(max)
        ))),
        _ => Ok(arguments.iter().flatten().map(String::as_str).collect()),
    }
}

fn suggest_argument(
    names: &Names,
    suggester: &Suggester,
    preceding: &[Token],
    partial: &str,
    remaining: Option<usize>,
) -> Completion {
    if names.is_mid_argument(preceding) {
        // This field alone knows what comes next.
        Completion::overriding(suggester(partial))
    } else {
        Completion::new(names.suggest(partial, remaining))
    }
}

macro_rules! names_builder {
    () => {
        /// Set the short name, ex: `'f'` for `-f`.
        /// If repeated, only the final name applies.
        pub fn short(mut self, name: char) -> Self {
            self.names.short.replace(name);
            self
        }

        /// Set the long name, ex: `"flag"` for `--flag`.
        /// If repeated, only the final name applies.
        pub fn long(mut self, name: impl Into<String>) -> Self {
            self.names.long.replace(name.into());
            self
        }

        /// Document the field for the help message.
        pub fn description(mut self, description: impl Into<String>) -> Self {
            self.description = description.into();
            self
        }
    };
}

/// A boolean switch: absent gives the default, present gives its inverse.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{tokenize, Flag, Group};
///
/// let group = Group::new()
///     .add("verbose", Flag::new().short('v').long("verbose"))
///     .build()
///     .unwrap();
/// let tokens = tokenize(&["-v"]).unwrap();
/// let mut parsed = group.parse(&tokens).unwrap();
///
/// assert_eq!(parsed.values.take::<bool>("verbose").unwrap(), true);
/// ```
#[derive(Debug)]
pub struct Flag {
    names: Names,
    default: bool,
    description: String,
}

impl Flag {
    /// Create a flag defaulting to `false`.
    pub fn new() -> Self {
        Self {
            names: Names::default(),
            default: false,
            description: String::default(),
        }
    }

    names_builder!();

    /// Set the value used when the flag is absent.
    pub fn default(mut self, value: bool) -> Self {
        self.default = value;
        self
    }
}

impl TokenParser for Flag {
    type Output = bool;
    type State = usize;

    fn initial(&self) -> usize {
        0
    }

    fn read<'t>(&self, state: &usize, tokens: &'t [Token]) -> Option<Consumed<'t, usize>> {
        read_switch(&self.names, *state, tokens)
    }

    fn coerce(&self, state: &usize) -> Result<bool, ParseError> {
        match state {
            0 => Ok(self.default),
            1 => Ok(!self.default),
            _ => Err(ParseError(format!(
                "You can't set {} flag more than once",
                self.names.display()
            ))),
        }
    }

    fn suggest(&self, _preceding: &[Token], partial: &str, state: &usize) -> Completion {
        Completion::new(self.names.suggest(partial, Some(1usize.saturating_sub(*state))))
    }

    fn documentation(&self) -> Documentation {
        Documentation {
            hint: format!("[{}]", self.names.usage()),
            prefix: self.names.prefix(),
            description: self.description.clone(),
            short: self.names.short,
            long: self.names.long.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.names.validate()
    }
}

/// A switch that counts its occurrences, optionally up to a maximum.
#[derive(Debug, Default)]
pub struct CountFlag {
    names: Names,
    max: Option<usize>,
    description: String,
}

impl CountFlag {
    /// Create an unbounded count flag.
    pub fn new() -> Self {
        Self::default()
    }

    names_builder!();

    /// Set the maximum number of occurrences (must be at least 1).
    pub fn max(mut self, max: usize) -> Self {
        self.max.replace(max);
        self
    }
}

impl TokenParser for CountFlag {
    type Output = usize;
    type State = usize;

    fn initial(&self) -> usize {
        0
    }

    fn read<'t>(&self, state: &usize, tokens: &'t [Token]) -> Option<Consumed<'t, usize>> {
        read_switch(&self.names, *state, tokens)
    }

    fn coerce(&self, state: &usize) -> Result<usize, ParseError> {
        match self.max {
            Some(max) if *state > max => Err(ParseError(format!(
                "You can't set {} flag more than {}",
                self.names.display(),
                times(max)
            ))),
            _ => Ok(*state),
        }
    }

    fn suggest(&self, _preceding: &[Token], partial: &str, state: &usize) -> Completion {
        let remaining = self.max.map(|max| max.saturating_sub(*state));
        Completion::new(self.names.suggest(partial, remaining))
    }

    fn documentation(&self) -> Documentation {
        let repeat = if self.max == Some(1) { "" } else { "*" };
        Documentation {
            hint: format!("[{}]{repeat}", self.names.usage()),
            prefix: self.names.prefix(),
            description: self.description.clone(),
            short: self.names.short,
            long: self.names.long.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.names.validate()?;
        validate_maximum(self.max, &self.names.display())
    }
}

/// An option taking exactly one argument: `-o VALUE`, `-o=VALUE`, or `--out VALUE`.
/// Without a default, the option is required.
pub struct Opt<T> {
    names: Names,
    metavar: String,
    description: String,
    reader: Reader<T>,
    default: Option<T>,
    suggester: Suggester,
}

impl<T: FromStr + 'static> Opt<T> {
    /// Create an option whose argument is read via [`FromStr`].
    pub fn new(metavar: impl Into<String>) -> Self {
        Self::from_reader(metavar, from_str_reader())
    }
}

impl<T: 'static> Opt<T> {
    /// Create an option whose argument is read via a custom `reader`.
    pub fn with_reader(
        metavar: impl Into<String>,
        reader: impl Fn(&str) -> Result<T, String> + 'static,
    ) -> Self {
        Self::from_reader(metavar, custom_reader(reader))
    }

    fn from_reader(metavar: impl Into<String>, reader: Reader<T>) -> Self {
        Self {
            names: Names::default(),
            metavar: metavar.into(),
            description: String::default(),
            reader,
            default: None,
            suggester: no_suggestions(),
        }
    }

    names_builder!();

    /// Set the value used when the option is absent, making it optional.
    pub fn default(mut self, value: T) -> Self {
        self.default.replace(value);
        self
    }

    /// Offer completions for the argument of this option.
    pub fn suggest_with(mut self, suggester: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.suggester = Box::new(suggester);
        self
    }
}

impl<T: Clone + 'static> TokenParser for Opt<T> {
    type Output = T;
    type State = Vec<Option<String>>;

    fn initial(&self) -> Self::State {
        Vec::default()
    }

    fn read<'t>(
        &self,
        state: &Self::State,
        tokens: &'t [Token],
    ) -> Option<Consumed<'t, Self::State>> {
        read_argument(&self.names, state, tokens)
    }

    fn coerce(&self, state: &Self::State) -> Result<T, ParseError> {
        let arguments = check_arguments(&self.names, state, Some(1))?;

        match arguments.first().copied() {
            Some(argument) => Ok((self.reader)(argument)?),
            None => match &self.default {
                Some(value) => Ok(value.clone()),
                None => Err(ParseError(format!(
                    "{} is required",
                    self.names.display()
                ))),
            },
        }
    }

    fn suggest(&self, preceding: &[Token], partial: &str, state: &Self::State) -> Completion {
        if state.iter().any(Option::is_some) {
            // Already given its argument.
            return Completion::empty();
        }

        let remaining = 1usize.saturating_sub(state.len());
        suggest_argument(&self.names, &self.suggester, preceding, partial, Some(remaining))
    }

    fn documentation(&self) -> Documentation {
        let hint = format!("{} {}", self.names.usage(), self.metavar);
        Documentation {
            hint: if self.default.is_some() {
                format!("[{hint}]")
            } else {
                hint
            },
            prefix: format!("{} {}", self.names.prefix(), self.metavar),
            description: self.description.clone(),
            short: self.names.short,
            long: self.names.long.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.names.validate()?;
        validate_metavar(&self.metavar)
    }
}

/// An option taking one argument, which may be left out entirely.
/// Produces `None` when absent.
pub struct Optional<T> {
    names: Names,
    metavar: String,
    description: String,
    reader: Reader<T>,
    suggester: Suggester,
}

impl<T: FromStr + 'static> Optional<T> {
    /// Create an optional option whose argument is read via [`FromStr`].
    pub fn new(metavar: impl Into<String>) -> Self {
        Self::from_reader(metavar, from_str_reader())
    }
}

impl<T: 'static> Optional<T> {
    /// Create an optional option whose argument is read via a custom `reader`.
    pub fn with_reader(
        metavar: impl Into<String>,
        reader: impl Fn(&str) -> Result<T, String> + 'static,
    ) -> Self {
        Self::from_reader(metavar, custom_reader(reader))
    }

    fn from_reader(metavar: impl Into<String>, reader: Reader<T>) -> Self {
        Self {
            names: Names::default(),
            metavar: metavar.into(),
            description: String::default(),
            reader,
            suggester: no_suggestions(),
        }
    }

    names_builder!();

    /// Offer completions for the argument of this option.
    pub fn suggest_with(mut self, suggester: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.suggester = Box::new(suggester);
        self
    }
}

impl<T: 'static> TokenParser for Optional<T> {
    type Output = Option<T>;
    type State = Vec<Option<String>>;

    fn initial(&self) -> Self::State {
        Vec::default()
    }

    fn read<'t>(
        &self,
        state: &Self::State,
        tokens: &'t [Token],
    ) -> Option<Consumed<'t, Self::State>> {
        read_argument(&self.names, state, tokens)
    }

    fn coerce(&self, state: &Self::State) -> Result<Option<T>, ParseError> {
        let arguments = check_arguments(&self.names, state, Some(1))?;

        match arguments.first().copied() {
            Some(argument) => Ok(Some((self.reader)(argument)?)),
            None => Ok(None),
        }
    }

    fn suggest(&self, preceding: &[Token], partial: &str, state: &Self::State) -> Completion {
        if state.iter().any(Option::is_some) {
            return Completion::empty();
        }

        let remaining = 1usize.saturating_sub(state.len());
        suggest_argument(&self.names, &self.suggester, preceding, partial, Some(remaining))
    }

    fn documentation(&self) -> Documentation {
        Documentation {
            hint: format!("[{} {}]", self.names.usage(), self.metavar),
            prefix: format!("{} {}", self.names.prefix(), self.metavar),
            description: self.description.clone(),
            short: self.names.short,
            long: self.names.long.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.names.validate()?;
        validate_metavar(&self.metavar)
    }
}

/// An option that may be repeated, optionally up to a maximum, collecting every argument.
pub struct MultiOpt<T> {
    names: Names,
    metavar: String,
    description: String,
    reader: Reader<T>,
    max: Option<usize>,
    suggester: Suggester,
}

impl<T: FromStr + 'static> MultiOpt<T> {
    /// Create a repeatable option whose arguments are read via [`FromStr`].
    pub fn new(metavar: impl Into<String>) -> Self {
        Self::from_reader(metavar, from_str_reader())
    }
}

impl<T: 'static> MultiOpt<T> {
    /// Create a repeatable option whose arguments are read via a custom `reader`.
    pub fn with_reader(
        metavar: impl Into<String>,
        reader: impl Fn(&str) -> Result<T, String> + 'static,
    ) -> Self {
        Self::from_reader(metavar, custom_reader(reader))
    }

    fn from_reader(metavar: impl Into<String>, reader: Reader<T>) -> Self {
        Self {
            names: Names::default(),
            metavar: metavar.into(),
            description: String::default(),
            reader,
            max: None,
            suggester: no_suggestions(),
        }
    }

    names_builder!();

    /// Set the maximum number of occurrences (must be at least 1).
    pub fn max(mut self, max: usize) -> Self {
        self.max.replace(max);
        self
    }

    /// Offer completions for the arguments of this option.
    pub fn suggest_with(mut self, suggester: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.suggester = Box::new(suggester);
        self
    }
}

impl<T: 'static> TokenParser for MultiOpt<T> {
    type Output = Vec<T>;
    type State = Vec<Option<String>>;

    fn initial(&self) -> Self::State {
        Vec::default()
    }

    fn read<'t>(
        &self,
        state: &Self::State,
        tokens: &'t [Token],
    ) -> Option<Consumed<'t, Self::State>> {
        read_argument(&self.names, state, tokens)
    }

    fn coerce(&self, state: &Self::State) -> Result<Vec<T>, ParseError> {
        // Occurrence errors are reported before any reader failure.
        let arguments = check_arguments(&self.names, state, self.max)?;
        read_all(&self.reader, arguments)
    }

    fn suggest(&self, preceding: &[Token], partial: &str, state: &Self::State) -> Completion {
        let remaining = self.max.map(|max| max.saturating_sub(state.len()));
        suggest_argument(&self.names, &self.suggester, preceding, partial, remaining)
    }

    fn documentation(&self) -> Documentation {
        let repeat = if self.max == Some(1) { "" } else { "*" };
        Documentation {
            hint: format!("[{} {}]{repeat}", self.names.usage(), self.metavar),
            prefix: format!("{} {}", self.names.prefix(), self.metavar),
            description: self.description.clone(),
            short: self.names.short,
            long: self.names.long.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.names.validate()?;
        validate_metavar(&self.metavar)?;
        validate_maximum(self.max, &self.names.display())
    }
}

/// A single positional value.
/// Without a default, the value is required.
pub struct Positional<T> {
    metavar: String,
    description: String,
    reader: Reader<T>,
    default: Option<T>,
    suggester: Suggester,
}

impl<T: FromStr + 'static> Positional<T> {
    /// Create a positional whose value is read via [`FromStr`].
    pub fn new(metavar: impl Into<String>) -> Self {
        Self::from_reader(metavar, from_str_reader())
    }
}

impl<T: 'static> Positional<T> {
    /// Create a positional whose value is read via a custom `reader`.
    pub fn with_reader(
        metavar: impl Into<String>,
        reader: impl Fn(&str) -> Result<T, String> + 'static,
    ) -> Self {
        Self::from_reader(metavar, custom_reader(reader))
    }

    fn from_reader(metavar: impl Into<String>, reader: Reader<T>) -> Self {
        Self {
            metavar: metavar.into(),
            description: String::default(),
            reader,
            default: None,
            suggester: no_suggestions(),
        }
    }

    /// Document the field for the help message.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the value used when the positional is absent, making it optional.
    pub fn default(mut self, value: T) -> Self {
        self.default.replace(value);
        self
    }

    /// Offer completions for this positional.
    pub fn suggest_with(mut self, suggester: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.suggester = Box::new(suggester);
        self
    }
}

impl<T: Clone + 'static> TokenParser for Positional<T> {
    type Output = T;
    type State = Option<String>;

    fn initial(&self) -> Self::State {
        None
    }

    fn read<'t>(
        &self,
        state: &Self::State,
        tokens: &'t [Token],
    ) -> Option<Consumed<'t, Self::State>> {
        match (state, tokens.split_first()) {
            (None, Some((Token::Positional(value), rest))) => {
                Some(Consumed::new(Some(value.clone()), rest))
            }
            _ => None,
        }
    }

    fn coerce(&self, state: &Self::State) -> Result<T, ParseError> {
        match (state, &self.default) {
            (Some(value), _) => Ok((self.reader)(value.as_str())?),
            (None, Some(value)) => Ok(value.clone()),
            (None, None) => Err(ParseError(format!(
                "{} argument is required",
                self.metavar
            ))),
        }
    }

    fn suggest(&self, _preceding: &[Token], partial: &str, state: &Self::State) -> Completion {
        match state {
            None => Completion::new((self.suggester)(partial)),
            Some(_) => Completion::empty(),
        }
    }

    fn documentation(&self) -> Documentation {
        Documentation {
            hint: if self.default.is_some() {
                format!("[{}]", self.metavar)
            } else {
                self.metavar.clone()
            },
            prefix: self.metavar.clone(),
            description: self.description.clone(),
            short: None,
            long: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_metavar(&self.metavar)
    }
}

/// A run of positional values, optionally up to a maximum.
///
/// The run is claimed once, as the maximal sequence of leading positional tokens.
pub struct MultiPositional<T> {
    metavar: String,
    description: String,
    reader: Reader<T>,
    max: Option<usize>,
    suggester: Suggester,
}

impl<T: FromStr + 'static> MultiPositional<T> {
    /// Create a positional run whose values are read via [`FromStr`].
    pub fn new(metavar: impl Into<String>) -> Self {
        Self::from_reader(metavar, from_str_reader())
    }
}

impl<T: 'static> MultiPositional<T> {
    /// Create a positional run whose values are read via a custom `reader`.
    pub fn with_reader(
        metavar: impl Into<String>,
        reader: impl Fn(&str) -> Result<T, String> + 'static,
    ) -> Self {
        Self::from_reader(metavar, custom_reader(reader))
    }

    fn from_reader(metavar: impl Into<String>, reader: Reader<T>) -> Self {
        Self {
            metavar: metavar.into(),
            description: String::default(),
            reader,
            max: None,
            suggester: no_suggestions(),
        }
    }

    /// Document the field for the help message.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the maximum number of values (must be at least 1).
    pub fn max(mut self, max: usize) -> Self {
        self.max.replace(max);
        self
    }

    /// Offer completions for this positional run.
    pub fn suggest_with(mut self, suggester: impl Fn(&str) -> Vec<String> + 'static) -> Self {
        self.suggester = Box::new(suggester);
        self
    }
}

impl<T: 'static> TokenParser for MultiPositional<T> {
    type Output = Vec<T>;
    type State = Vec<String>;

    fn initial(&self) -> Self::State {
        Vec::default()
    }

    fn read<'t>(
        &self,
        state: &Self::State,
        tokens: &'t [Token],
    ) -> Option<Consumed<'t, Self::State>> {
        if !state.is_empty() {
            return None;
        }

        let values: Vec<String> = tokens
            .iter()
            .take(self.max.unwrap_or(usize::MAX))
            .map_while(|token| match token {
                Token::Positional(value) => Some(value.clone()),
                _ => None,
            })
            .collect();

        if values.is_empty() {
            None
        } else {
            let remaining = &tokens[values.len()..];
            Some(Consumed::new(values, remaining))
        }
    }

    fn coerce(&self, state: &Self::State) -> Result<Vec<T>, ParseError> {
        read_all(&self.reader, state.iter().map(String::as_str))
    }

    fn suggest(&self, _preceding: &[Token], partial: &str, state: &Self::State) -> Completion {
        if state.is_empty() {
            Completion::new((self.suggester)(partial))
        } else {
            Completion::empty()
        }
    }

    fn documentation(&self) -> Documentation {
        Documentation {
            hint: format!("{}*", self.metavar),
            prefix: self.metavar.clone(),
            description: self.description.clone(),
            short: None,
            long: None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_metavar(&self.metavar)?;
        validate_maximum(self.max, &self.metavar)
    }
}
