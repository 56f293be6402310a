use std::any::Any;

use crate::model::{Completion, Documentation, Token};
use crate::parser::{ConfigError, ParseError};

/// The result of a successful [`TokenParser::read`].
#[derive(Debug, PartialEq, Eq)]
pub struct Consumed<'t, S> {
    /// The new state of the field.
    pub state: S,
    /// The stream that remains after the claimed prefix.
    pub remaining: &'t [Token],
}

impl<'t, S> Consumed<'t, S> {
    /// Claim a prefix of the stream, leaving `remaining`.
    pub fn new(state: S, remaining: &'t [Token]) -> Self {
        Self { state, remaining }
    }
}

/// The contract every field of an [`ArgumentGroup`](crate::ArgumentGroup) implements.
///
/// A field accumulates `State` from the head of the token stream, and once the stream is consumed as far as possible,
/// coerces that state into its `Output`.
/// All methods are pure: the parser itself never changes during a parse.
pub trait TokenParser {
    /// The typed value produced by coercion.
    type Output;
    /// The accumulator threaded through the consumption loop.
    type State;

    /// The state before any tokens are seen.
    fn initial(&self) -> Self::State;

    /// Attempt to claim a prefix of `tokens`.
    /// Returns `None` when the head of the stream doesn't belong to this field.
    ///
    /// Reading never fails; invalid input is reported by [`TokenParser::coerce`].
    fn read<'t>(&self, state: &Self::State, tokens: &'t [Token])
        -> Option<Consumed<'t, Self::State>>;

    /// Convert the final state into the typed value.
    fn coerce(&self, state: &Self::State) -> Result<Self::Output, ParseError>;

    /// Offer completion candidates for `partial`, given the tokens that precede it and the state they produced.
    fn suggest(&self, preceding: &[Token], partial: &str, state: &Self::State) -> Completion;

    /// The help/usage metadata of this field.
    fn documentation(&self) -> Documentation;

    /// Check the field's configuration.
    /// Called once when the enclosing group is built.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

// We need a (dyn .. [ignoring Output/State] ..) here in order to put all the fields of varying types under one collection.
// In other words, we want the bottom of the object graph to include the types, but up here we want to work across all of them.
pub(crate) trait AnonymousParser {
    fn initial(&self) -> Box<dyn Any>;

    fn read<'t>(&self, state: &dyn Any, tokens: &'t [Token]) -> Option<(Box<dyn Any>, &'t [Token])>;

    fn coerce(&self, state: &dyn Any) -> Result<Box<dyn Any>, ParseError>;

    fn suggest(&self, preceding: &[Token], partial: &str, state: &dyn Any) -> Completion;

    fn documentation(&self) -> Documentation;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl<P> AnonymousParser for P
where
    P: TokenParser,
    P::Output: 'static,
    P::State: 'static,
{
    fn initial(&self) -> Box<dyn Any> {
        Box::new(TokenParser::initial(self))
    }

    fn read<'t>(&self, state: &dyn Any, tokens: &'t [Token]) -> Option<(Box<dyn Any>, &'t [Token])> {
        TokenParser::read(self, downcast::<P>(state), tokens).map(
            |Consumed { state, remaining }| (Box::new(state) as Box<dyn Any>, remaining),
        )
    }

    fn coerce(&self, state: &dyn Any) -> Result<Box<dyn Any>, ParseError> {
        TokenParser::coerce(self, downcast::<P>(state)).map(|value| Box::new(value) as Box<dyn Any>)
    }

    fn suggest(&self, preceding: &[Token], partial: &str, state: &dyn Any) -> Completion {
        TokenParser::suggest(self, preceding, partial, downcast::<P>(state))
    }

    fn documentation(&self) -> Documentation {
        TokenParser::documentation(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        TokenParser::validate(self)
    }
}

fn downcast<P>(state: &dyn Any) -> &P::State
where
    P: TokenParser,
    P::State: 'static,
{
    state
        .downcast_ref::<P::State>()
        .expect("internal error - state must originate from its own parser")
}
