//! Builder module for `argot`.
//! See [documentation root](https://docs.rs/argot/latest/argot/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::{tokenize, ArgumentGroup, Group, Parsed};
pub use model::*;
pub use parser::{
    CliError, ConfigError, Dispatch, ErrorContext, Failure, GeneralParser, HelpContext,
    ParseError, TokenizeError,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
