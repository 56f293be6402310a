mod group;
mod tokenize;

pub use group::{ArgumentGroup, Group, Parsed};
pub(crate) use tokenize::{is_long_name, is_short_name};
pub use tokenize::tokenize;
