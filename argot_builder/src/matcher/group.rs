use std::any::Any;
use std::collections::HashSet;

use crate::api::{AnonymousParser, TokenParser, Values};
use crate::model::{Completion, Documentation, Token};
use crate::parser::{ConfigError, ParseError};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

struct Field {
    name: String,
    // We need a (dyn .. [ignoring Output/State] ..) here in order to put all the fields of varying types under one collection.
    parser: Box<dyn AnonymousParser>,
}

/// Builder for an [`ArgumentGroup`].
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{tokenize, Flag, Group, MultiPositional};
///
/// let group = Group::new()
///     .add("verbose", Flag::new().short('v'))
///     .add("items", MultiPositional::<u32>::new("ITEM"))
///     .build()
///     .unwrap();
/// let tokens = tokenize(&["1", "2", "-v", "3"]).unwrap();
/// let mut parsed = group.parse(&tokens).unwrap();
///
/// assert_eq!(parsed.values.take::<bool>("verbose").unwrap(), true);
/// assert_eq!(parsed.values.take::<Vec<u32>>("items").unwrap(), vec![1, 2]);
/// assert_eq!(parsed.remaining, &tokenize(&["3"]).unwrap()[..]);
/// ```
#[derive(Default)]
pub struct Group {
    fields: Vec<Field>,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the group.
    ///
    /// Declaration order is the tie-break order: earlier fields get the first chance to claim tokens,
    /// and report their coercion errors first.
    pub fn add<P>(mut self, name: impl Into<String>, parser: P) -> Self
    where
        P: TokenParser + 'static,
        P::Output: 'static,
        P::State: 'static,
    {
        self.fields.push(Field {
            name: name.into(),
            parser: Box::new(parser),
        });
        self
    }

    /// Build the group.
    /// This finalizes the configuration and checks for errors (ex: a repeated field or option name).
    pub fn build(self) -> Result<ArgumentGroup, ConfigError> {
        let mut field_names = HashSet::new();
        let mut short_names = HashSet::new();
        let mut long_names = HashSet::new();

        for field in &self.fields {
            if !field_names.insert(field.name.as_str()) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the field '{}'.",
                    field.name
                )));
            }

            field.parser.validate()?;
            let Documentation { short, long, .. } = field.parser.documentation();

            if let Some(short) = short {
                if !short_names.insert(short) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the short name '-{short}' (field '{}').",
                        field.name
                    )));
                }
            }

            if let Some(long) = long {
                if !long_names.insert(long.clone()) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the long name '--{long}' (field '{}').",
                        field.name
                    )));
                }
            }
        }

        Ok(ArgumentGroup {
            fields: self.fields,
        })
    }
}

/// An ordered collection of fields sharing one token stream.
///
/// Built via [`Group::build`].
pub struct ArgumentGroup {
    fields: Vec<Field>,
}

impl std::fmt::Debug for ArgumentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgumentGroup")
            .field(
                "fields",
                &self.fields.iter().map(|f| &f.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The outcome of [`ArgumentGroup::parse`].
#[derive(Debug)]
pub struct Parsed<'t> {
    /// The coerced values of every field.
    pub values: Values,
    /// The tokens no field claimed.
    pub remaining: &'t [Token],
}

/// Each field's state once the consumption loop stops, along with the unclaimed tokens.
pub(crate) struct Accumulator<'t> {
    states: Vec<Box<dyn Any>>,
    pub(crate) remaining: &'t [Token],
}

impl ArgumentGroup {
    /// Consume `tokens` and coerce the result.
    ///
    /// Reports the error of the first field (in declaration order) that fails to coerce.
    /// Unclaimed tokens are not an error at this level; they are returned in [`Parsed::remaining`].
    pub fn parse<'t>(&self, tokens: &'t [Token]) -> Result<Parsed<'t>, ParseError> {
        let accumulator = self.consume(tokens);
        let remaining = accumulator.remaining;
        let values = self.coerce(accumulator)?;
        Ok(Parsed { values, remaining })
    }

    /// Suggest completions for `partial`, given the tokens that precede it.
    ///
    /// If any field overrides (ex: it is waiting for its argument), only the overriding suggestions are returned.
    pub fn suggest(&self, preceding: &[Token], partial: &str) -> Vec<String> {
        let accumulator = self.consume(preceding);
        self.complete(preceding, partial, &accumulator).suggestions
    }

    /// Run the fixpoint loop: offer the head of the stream to each field in declaration order,
    /// restarting after every claim, until the stream is empty or nobody claims.
    pub(crate) fn consume<'t>(&self, tokens: &'t [Token]) -> Accumulator<'t> {
        let mut states: Vec<Box<dyn Any>> = self.fields.iter().map(|f| f.parser.initial()).collect();
        let mut remaining = tokens;

        'outer: while !remaining.is_empty() {
            for (i, field) in self.fields.iter().enumerate() {
                if let Some((state, rest)) = field.parser.read(states[i].as_ref(), remaining) {
                    if rest.len() < remaining.len() {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!(
                                "Field '{}' claimed {} token(s).",
                                field.name,
                                remaining.len() - rest.len()
                            );
                        }

                        states[i] = state;
                        remaining = rest;
                        continue 'outer;
                    }

                    // A claim that consumes nothing would never terminate; treat it as a decline.
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Field '{}' claimed without consuming; ignoring.", field.name);
                    }
                }
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("No field claims {}; stopping.", remaining[0]);
            }

            break;
        }

        Accumulator { states, remaining }
    }

    pub(crate) fn coerce(&self, accumulator: Accumulator) -> Result<Values, ParseError> {
        let mut values = Values::default();

        for (field, state) in self.fields.iter().zip(accumulator.states) {
            let value = field.parser.coerce(state.as_ref()).map_err(|error| {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Field '{}' failed to coerce: {error}", field.name);
                }

                error
            })?;
            values.insert(field.name.clone(), value);
        }

        Ok(values)
    }

    pub(crate) fn complete(
        &self,
        preceding: &[Token],
        partial: &str,
        accumulator: &Accumulator,
    ) -> Completion {
        let completions: Vec<Completion> = self
            .fields
            .iter()
            .zip(&accumulator.states)
            .map(|(field, state)| field.parser.suggest(preceding, partial, state.as_ref()))
            .collect();

        if completions.iter().any(|c| c.overrides) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Completion for '{partial}' is overridden.");
            }

            Completion::overriding(
                completions
                    .into_iter()
                    .filter(|c| c.overrides)
                    .flat_map(|c| c.suggestions)
                    .collect(),
            )
        } else {
            Completion::new(
                completions
                    .into_iter()
                    .flat_map(|c| c.suggestions)
                    .collect(),
            )
        }
    }

    pub(crate) fn documentation(&self) -> Vec<(String, Documentation)> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.parser.documentation()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test::{Counter, Failing, Stuck};
    use crate::api::{CountFlag, Flag, MultiOpt, MultiPositional, Opt, Positional};
    use crate::matcher::tokenize;
    use rand::seq::SliceRandom;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn tokens(args: &[&str]) -> Vec<Token> {
        tokenize(args).unwrap()
    }

    #[test]
    fn parse_empty() {
        // Setup
        let group = Group::new().build().unwrap();

        // Execute
        let parsed = group.parse(&[]).unwrap();

        // Verify
        assert!(parsed.values.is_empty());
        assert!(parsed.remaining.is_empty());
    }

    #[test]
    fn parse_leftovers() {
        // Setup
        let group = Group::new()
            .add("flag", Flag::new().short('f'))
            .build()
            .unwrap();
        let tokens = tokens(&["-f", "sub", "-f"]);

        // Execute
        let mut parsed = group.parse(&tokens).unwrap();

        // Verify
        assert_eq!(parsed.values.take::<bool>("flag").unwrap(), true);
        assert_eq!(parsed.remaining, &tokens[1..]);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["x"])]
    #[case(vec!["-x"])]
    #[case(vec!["--x", "-f"])]
    fn head_anchored(#[case] args: Vec<&str>) {
        // Setup
        let group = Group::new()
            .add("flag", Flag::new().short('f'))
            .add("opt", Opt::<u32>::new("N").short('n').default(0))
            .build()
            .unwrap();
        let tokens = tokens(&args);

        // Execute
        let parsed = group.parse(&tokens).unwrap();

        // Verify
        assert_eq!(parsed.remaining, tokens.as_slice());
    }

    #[test]
    fn parse_repeatable() {
        // Setup
        let group = Group::new()
            .add("verbose", CountFlag::new().short('v'))
            .add("include", MultiOpt::<String>::new("DIR").short('I'))
            .add("file", Positional::<String>::new("FILE"))
            .build()
            .unwrap();
        let tokens = tokens(&["-v", "-I", "a", "main.c", "-vI=b", "-v"]);

        // Execute
        let mut parsed = group.parse(&tokens).unwrap();

        // Verify
        assert!(parsed.remaining.is_empty());
        assert_eq!(parsed.values.take::<usize>("verbose").unwrap(), 3);
        assert_eq!(
            parsed.values.take::<Vec<String>>("include").unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(parsed.values.take::<String>("file").unwrap(), "main.c");
    }

    #[test]
    fn parse_declaration_order_claims() {
        // Setup
        let group = Group::new()
            .add("first", Counter)
            .add("second", Counter)
            .build()
            .unwrap();
        let tokens = tokens(&["a", "b", "c"]);

        // Execute
        let mut parsed = group.parse(&tokens).unwrap();

        // Verify
        assert_eq!(parsed.values.take::<usize>("first").unwrap(), 3);
        assert_eq!(parsed.values.take::<usize>("second").unwrap(), 0);
    }

    #[test]
    fn parse_first_error() {
        // Setup
        let group = Group::new()
            .add("ok", Flag::new().short('o'))
            .add("first", Failing("first failure"))
            .add("second", Failing("second failure"))
            .build()
            .unwrap();

        // Execute
        let error = group.parse(&[]).unwrap_err();

        // Verify
        assert_eq!(error.message(), "first failure");
    }

    #[test]
    fn parse_later_fields_still_consume() {
        // Setup
        let group = Group::new()
            .add("flag", Flag::new().short('f'))
            .add("file", Positional::<String>::new("FILE"))
            .build()
            .unwrap();
        let tokens = tokens(&["-f", "-f", "x"]);

        // Execute
        let accumulator = group.consume(&tokens);

        // Verify
        assert!(accumulator.remaining.is_empty());
        assert_eq!(
            group.coerce(accumulator).unwrap_err().message(),
            "You can't set -f flag more than once"
        );
    }

    #[test]
    fn parse_stuck_terminates() {
        // Setup
        let group = Group::new()
            .add("stuck", Stuck)
            .add("counter", Counter)
            .build()
            .unwrap();
        let tokens = tokens(&["a", "-b", "c"]);

        // Execute
        let mut parsed = group.parse(&tokens).unwrap();

        // Verify
        assert_eq!(parsed.values.take::<usize>("counter").unwrap(), 1);
        assert_eq!(parsed.remaining, &tokens[1..]);
    }

    #[test]
    fn fixpoint_termination() {
        let pieces = ["a", "-f", "-vv", "-n", "3", "--name=x", "--", "-q", "--long"];
        let mut rng = thread_rng();

        for _ in 0..200 {
            // Setup
            let group = Group::new()
                .add("stuck", Stuck)
                .add("flag", Flag::new().short('f'))
                .add("verbose", CountFlag::new().short('v'))
                .add("number", MultiOpt::<String>::new("N").short('n').long("name"))
                .add("rest", MultiPositional::<String>::new("REST"))
                .build()
                .unwrap();
            let length = rng.gen_range(0..16);
            let args: Vec<&str> = (0..length)
                .map(|_| *pieces.choose(&mut rng).unwrap())
                .collect();
            let tokens = tokens(&args);

            // Execute
            let accumulator = group.consume(&tokens);

            // Verify
            // The leftovers are always a suffix of the input.
            assert!(accumulator.remaining.len() <= tokens.len());
            assert_eq!(
                accumulator.remaining,
                &tokens[tokens.len() - accumulator.remaining.len()..]
            );
        }
    }

    #[test]
    fn coerce_deterministic() {
        // Setup
        let group = Group::new()
            .add("a", Opt::<u32>::new("A").short('a'))
            .add("b", Opt::<u32>::new("B").short('b'))
            .build()
            .unwrap();
        let tokens = tokens(&["-b", "x"]);

        // Execute
        let first = group.parse(&tokens).unwrap_err();
        let second = group.parse(&tokens).unwrap_err();

        // Verify
        assert_eq!(first.message(), "-a is required");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(Group::new().add("a", Flag::new().short('a')).add("a", Flag::new().short('b')), "Cannot duplicate the field 'a'.")]
    #[case(Group::new().add("a", Flag::new().short('a')).add("b", Flag::new().short('a')), "Cannot duplicate the short name '-a' (field 'b').")]
    #[case(Group::new().add("a", Flag::new().long("x")).add("b", Flag::new().long("x")), "Cannot duplicate the long name '--x' (field 'b').")]
    #[case(Group::new().add("a", Flag::new()), "At least one of short or long name must be defined.")]
    #[case(Group::new().add("a", Positional::<u32>::new("a")), "Metavar 'a' is invalid (must match [A-Z][A-Z0-9_-]*).")]
    fn build_invalid(#[case] group: Group, #[case] message: &str) {
        assert_eq!(group.build().unwrap_err().message(), message);
    }

    #[test]
    fn build_positionals_share_nothing() {
        assert_matches!(
            Group::new()
                .add("a", Positional::<u32>::new("A"))
                .add("b", Positional::<u32>::new("A"))
                .build(),
            Ok(_)
        );
    }

    #[test]
    fn suggest_union() {
        // Setup
        let group = Group::new()
            .add("flag", Flag::new().short('f').long("flag"))
            .add("out", Opt::<String>::new("OUT").short('o').long("out"))
            .build()
            .unwrap();

        // Execute
        let suggestions = group.suggest(&[], "-");

        // Verify
        assert_eq!(suggestions, vec!["-f", "--flag", "-o", "--out"]);
    }

    #[test]
    fn suggest_override() {
        // Setup
        let group = Group::new()
            .add("flag", Flag::new().short('f').long("flag"))
            .add(
                "out",
                Opt::<String>::new("OUT")
                    .short('o')
                    .long("out")
                    .suggest_with(|_| vec!["a.txt".to_string(), "b.txt".to_string()]),
            )
            .build()
            .unwrap();
        let preceding = tokens(&["-o"]);

        // Execute
        let suggestions = group.suggest(&preceding, "");

        // Verify
        assert_eq!(suggestions, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn suggest_exhausted() {
        // Setup
        let group = Group::new()
            .add("flag", Flag::new().short('f').long("flag"))
            .add("verbose", CountFlag::new().short('v').long("verbose"))
            .build()
            .unwrap();
        let preceding = tokens(&["--flag"]);

        // Execute
        let suggestions = group.suggest(&preceding, "--");

        // Verify
        assert_eq!(suggestions, vec!["--verbose"]);
    }

    #[test]
    fn suggest_cluster() {
        // Setup
        let group = Group::new()
            .add("a", Flag::new().short('a'))
            .add("b", Flag::new().short('b'))
            .add("f", CountFlag::new().short('f'))
            .add("c", Flag::new().short('c'))
            .build()
            .unwrap();

        // Execute
        let suggestions = group.suggest(&[], "-abfc");

        // Verify
        assert_eq!(suggestions, vec!["-abfcf"]);
    }

    #[test]
    fn suggest_incomplete_input() {
        // Setup
        let group = Group::new()
            .add("number", Opt::<u32>::new("N").short('n').long("number"))
            .add("flag", Flag::new().long("flag"))
            .build()
            .unwrap();
        // Would fail to coerce: 'x' isn't a number, and the flag is repeated.
        let preceding = tokens(&["-n", "x", "--flag", "--flag"]);

        // Execute
        let suggestions = group.suggest(&preceding, "--");

        // Verify
        assert_eq!(suggestions, Vec::<String>::default());
    }
}
