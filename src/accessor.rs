//! Member accessors binding a field definition to one record member.
//!
//! An [`Accessor`] is a named getter/setter pair resolved once, when the field
//! is registered. The [`field!`](crate::field) macro builds one from a member
//! path, so the binding is checked by the compiler.

use crate::error::{Error, Result};
use std::fmt;

/// Get/set binding for one member of record type `T` holding a `V`.
///
/// # Examples
///
/// ```rust
/// use line_record::Accessor;
///
/// #[derive(Default)]
/// struct Person { name: String }
///
/// let name = Accessor::new("name", |p: &Person| &p.name, |p, v| p.name = v);
///
/// let mut person = Person::default();
/// name.set(&mut person, "Ann".to_string());
/// assert_eq!(name.get(&person), "Ann");
/// ```
pub struct Accessor<T, V> {
    name: &'static str,
    get: fn(&T) -> &V,
    set: fn(&mut T, V),
}

impl<T, V> Accessor<T, V> {
    pub fn new(name: &'static str, get: fn(&T) -> &V, set: fn(&mut T, V)) -> Self {
        Accessor { name, get, set }
    }

    /// Member name used in error messages and layout descriptions.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'r>(&self, record: &'r T) -> &'r V {
        (self.get)(record)
    }

    pub fn set(&self, record: &mut T, value: V) {
        (self.set)(record, value)
    }

    /// Checks that the accessor names a single member path such as `age` or `address.city`.
    pub(crate) fn resolve(&self) -> Result<()> {
        let resolvable = !self.name.is_empty()
            && self.name.split('.').all(|part| {
                let mut chars = part.chars();
                matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
                    && chars.all(|c| c == '_' || c.is_alphanumeric())
            });
        if resolvable {
            Ok(())
        } else {
            Err(Error::definition(
                self.name,
                "accessor does not name a single record member",
            ))
        }
    }
}

// Manual impls: a derive would require `T: Clone` and `V: Clone`.
impl<T, V> Clone for Accessor<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Accessor<T, V> {}

impl<T, V> fmt::Debug for Accessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").field("name", &self.name).finish()
    }
}
