mod base;
mod interface;
mod middleware;
mod printer;

pub use base::*;
pub(crate) use interface::*;
pub use middleware::{Dispatch, Failure, GeneralParser};
pub(crate) use middleware::{Next, Node};
pub use printer::{ErrorContext, HelpContext};
