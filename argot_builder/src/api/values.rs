use std::any::Any;
use thiserror::Error;

/// The typed result record of a parse: field names mapped to their coerced values, in declaration order.
///
/// Values are stored type-erased; retrieve them with the type of the field's `Output`.
///
/// ### Example
/// ```
/// # use argot_builder as argot;
/// use argot::{tokenize, Group, Opt, Positional};
///
/// let group = Group::new()
///     .add("count", Opt::<u32>::new("COUNT").short('c').default(1))
///     .add("name", Positional::<String>::new("NAME"))
///     .build()
///     .unwrap();
/// let tokens = tokenize(&["-c", "3", "world"]).unwrap();
/// let mut values = group.parse(&tokens).unwrap().values;
///
/// assert_eq!(values.get::<u32>("count").unwrap(), &3);
/// assert_eq!(values.take::<String>("name").unwrap(), "world".to_string());
/// assert!(!values.contains("name"));
/// ```
#[derive(Default)]
pub struct Values {
    entries: Vec<(String, Box<dyn Any>)>,
}

impl std::fmt::Debug for Values {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Values")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// A failure to retrieve a value from [`Values`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// No field by this name.
    #[error("No value for field '{0}'.")]
    Missing(String),
    /// The field exists, but holds a different type.
    #[error("Field '{name}' is not a {type_name}.")]
    WrongType {
        /// The field name.
        name: String,
        /// The requested type.
        type_name: &'static str,
    },
}

impl Values {
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: Box<dyn Any>) {
        let name = name.into();

        match self.entries.iter_mut().find(|(n, _)| n == &name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Borrow the value of the field `name`.
    pub fn get<T: 'static>(&self, name: &str) -> Result<&T, ValueError> {
        let (_, value) = self
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| ValueError::Missing(name.to_string()))?;

        value.downcast_ref::<T>().ok_or_else(|| ValueError::WrongType {
            name: name.to_string(),
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Move the value of the field `name` out of the record.
    /// On a type mismatch, the value is left in place.
    pub fn take<T: 'static>(&mut self, name: &str) -> Result<T, ValueError> {
        self.get::<T>(name)?;
        let value = self
            .remove(name)
            .expect("internal error - value must exist after get");

        Ok(*value
            .downcast::<T>()
            .expect("internal error - value must downcast after get"))
    }

    /// Remove the field `name`, returning its type-erased value.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Any>> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Fold `other` into this record.
    /// Fields present in both take the value from `other`.
    pub fn merge(&mut self, other: Values) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Whether the field `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// The field names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Conversion of an untyped [`Values`] record into a typed struct.
///
/// Typically derived via `#[derive(FromValues)]`, which takes each struct field from the record by its name.
pub trait FromValues: Sized {
    /// Build `Self` from the record.
    fn from_values(values: Values) -> Result<Self, ValueError>;
}

impl FromValues for Values {
    fn from_values(values: Values) -> Result<Self, ValueError> {
        Ok(values)
    }
}
