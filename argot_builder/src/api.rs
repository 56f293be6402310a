mod capture;
mod command;
mod core;
mod field;
mod values;

pub(crate) use self::core::AnonymousParser;
pub use self::core::{Consumed, TokenParser};
#[doc(hidden)]
pub use capture::InvalidRead;
pub use command::{Command, CommandParser};
pub use field::{CountFlag, Flag, MultiOpt, MultiPositional, Opt, Optional, Positional};
pub use values::{FromValues, ValueError, Values};

#[cfg(test)]
pub(crate) use self::core::test;
