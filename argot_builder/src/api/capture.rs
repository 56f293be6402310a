use std::str::FromStr;
use thiserror::Error;

use crate::parser::ParseError;

/// Converts a captured string into the field's type `T`.
pub(crate) type Reader<T> = Box<dyn Fn(&str) -> Result<T, InvalidRead>>;

/// Produces value completions for a partially typed argument.
pub(crate) type Suggester = Box<dyn Fn(&str) -> Vec<String>>;

#[derive(Debug, Error, PartialEq, Eq)]
#[doc(hidden)]
pub enum InvalidRead {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        token: String,
        type_name: &'static str,
    },
    #[error("invalid value '{token}': {message}.")]
    Rejected { token: String, message: String },
}

impl From<InvalidRead> for ParseError {
    fn from(error: InvalidRead) -> Self {
        ParseError(error.to_string())
    }
}

pub(crate) fn from_str_reader<T>() -> Reader<T>
where
    T: FromStr + 'static,
{
    Box::new(|token: &str| {
        T::from_str(token).map_err(|_| InvalidRead::InvalidConversion {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        })
    })
}

pub(crate) fn custom_reader<T: 'static>(
    reader: impl Fn(&str) -> Result<T, String> + 'static,
) -> Reader<T> {
    Box::new(move |token: &str| {
        reader(token).map_err(|message| InvalidRead::Rejected {
            token: token.to_string(),
            message,
        })
    })
}

pub(crate) fn no_suggestions() -> Suggester {
    Box::new(|_| Vec::default())
}

/// Read every value, short-circuiting on the first failure.
pub(crate) fn read_all<'s, T>(
    reader: &Reader<T>,
    values: impl IntoIterator<Item = &'s str>,
) -> Result<Vec<T>, ParseError> {
    values
        .into_iter()
        .map(|value| reader(value).map_err(ParseError::from))
        .collect()
}
