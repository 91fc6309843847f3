/*!

Attribute containers.

Attributes are string key/value pairs used to identify and look up
secrets. They are matching tags, not payload: the Secret Service stores
them unencrypted, so they must never contain sensitive data.

A container tracks whether it has been released. Mutation and cloning of
a released container report [`Error::NotInitialized`]; read accessors
treat it as empty, which matches how a freed handle behaves in the C
library this API is modeled on.

*/

use std::collections::HashMap;
use std::fmt;

use crate::errors::{Error, Result};
use crate::schema::{self, Schema};

#[derive(Clone)]
pub struct Attributes {
    // None once released.
    map: Option<HashMap<String, String>>,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    /// Creates an empty attribute container. Use [`Attributes::set`] to
    /// add entries.
    pub fn new() -> Self {
        Self {
            map: Some(HashMap::new()),
        }
    }

    /// Creates a container from a map.
    ///
    /// The map must have at least one entry and no empty keys. Entries
    /// whose value is empty are skipped rather than rejected.
    pub fn from_map(values: &HashMap<String, String>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyInput {
                what: "attributes map",
            });
        }
        let mut attrs = Attributes::new();
        for (key, value) in values {
            if key.is_empty() {
                return Err(Error::InvalidKey);
            }
            if value.is_empty() {
                continue;
            }
            attrs.set(key, value)?;
        }
        Ok(attrs)
    }

    /// Adds or replaces an entry. All values are stored as strings; use
    /// `"true"`/`"false"` for booleans and decimal strings for integers,
    /// or build the container through [`crate::builder`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }
        let map = self.map.as_mut().ok_or(Error::NotInitialized)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Returns the value for `key`, or `""` if the key is absent.
    ///
    /// Absence and an explicitly empty value are indistinguishable here;
    /// use [`Attributes::has`] when the difference matters.
    pub fn get(&self, key: &str) -> &str {
        self.map
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.as_ref().is_some_and(|m| m.contains_key(key))
    }

    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.map
            .as_mut()
            .is_some_and(|m| m.remove(key).is_some())
    }

    /// All keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.map
            .as_ref()
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map(HashMap::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an independent copy of the entries.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.map.clone().unwrap_or_default()
    }

    /// Deep, independent copy. Mutating the clone never affects the
    /// original, and vice versa.
    pub fn try_clone(&self) -> Result<Self> {
        let map = self.map.as_ref().ok_or(Error::NotInitialized)?;
        Ok(Self {
            map: Some(map.clone()),
        })
    }

    /// Content equality: same key set, same value per key. A released
    /// container compares as empty.
    pub fn equals(&self, other: &Attributes) -> bool {
        self == other
    }

    /// Checks this container against a schema. See [`schema::validate`].
    pub fn validate(&self, schema: &Schema) -> Result<()> {
        schema::validate(schema, self)
    }

    /// Releases the container. Idempotent; later mutation reports
    /// [`Error::NotInitialized`]. Dropping the container releases it as
    /// well, so calling this is only needed to invalidate a handle early.
    pub fn release(&mut self) {
        self.map = None;
    }

    /// Snapshot of the entries for crossing into the service layer.
    pub(crate) fn snapshot(&self) -> Result<HashMap<String, String>> {
        self.map.clone().ok_or(Error::NotInitialized)
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        match (self.map.as_ref(), other.map.as_ref()) {
            (Some(a), Some(b)) => a == b,
            (Some(m), None) | (None, Some(m)) => m.is_empty(),
            (None, None) => true,
        }
    }
}

impl Eq for Attributes {}

// Keys only: attribute values can identify accounts and hosts, so they
// stay out of debug output.
impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.map {
            Some(m) => f
                .debug_struct("Attributes")
                .field("len", &m.len())
                .field("keys", &m.keys().collect::<Vec<_>>())
                .finish(),
            None => f.write_str("Attributes(released)"),
        }
    }
}
