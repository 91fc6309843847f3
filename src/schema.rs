/*!

Schema descriptors and attribute validation.

A schema names a class of secrets (conventionally a reverse-domain dotted
string) and declares which attribute keys items of that class may carry,
together with the string encoding expected for each key. Schemas built
with [`Schema::new`] are owned by the caller; the predefined schemas
([`Schema::note`], [`Schema::compat_network`]) are process-wide constants
that are borrowed, never mutated, and never freed.

*/

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::attrs::Attributes;
use crate::errors::{Error, Result};

/// Upper bound on declared attributes per schema.
pub const MAX_SCHEMA_ATTRIBUTES: usize = 32;

/// The string encoding expected for an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaAttributeType {
    /// Any string.
    String,
    /// An optional leading `-` followed by one or more decimal digits.
    Integer,
    /// Exactly `true` or `false`.
    Boolean,
}

impl fmt::Display for SchemaAttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaAttributeType::String => "STRING",
            SchemaAttributeType::Integer => "INTEGER",
            SchemaAttributeType::Boolean => "BOOLEAN",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaFlags {
    #[default]
    None,
    /// Do not match the schema name when looking up items. Useful for
    /// items stored by older keyring libraries that recorded no name.
    DontMatchName,
}

impl fmt::Display for SchemaFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaFlags::None => "NONE",
            SchemaFlags::DontMatchName => "DONT_MATCH_NAME",
        })
    }
}

#[derive(Debug)]
struct SchemaData {
    name: String,
    flags: SchemaFlags,
    attributes: HashMap<String, SchemaAttributeType>,
}

// Owned schemas share their data through a refcount; predefined schemas
// borrow process-lifetime statics, so releasing them is a no-op.
#[derive(Debug, Clone)]
enum Inner {
    Owned(Arc<SchemaData>),
    Borrowed(&'static SchemaData),
}

/// A named, flag-qualified set of declared attribute types.
#[derive(Debug, Clone)]
pub struct Schema(Inner);

impl Schema {
    /// Creates a schema declaring between 1 and 32 attributes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::collections::HashMap;
    /// use secret_password_store::{Schema, SchemaAttributeType, SchemaFlags};
    ///
    /// let schema = Schema::new(
    ///     "org.example.Password",
    ///     SchemaFlags::None,
    ///     HashMap::from([
    ///         ("username".to_string(), SchemaAttributeType::String),
    ///         ("port".to_string(), SchemaAttributeType::Integer),
    ///         ("ssl".to_string(), SchemaAttributeType::Boolean),
    ///     ]),
    /// )?;
    /// # Ok::<(), secret_password_store::Error>(())
    /// ```
    pub fn new(
        name: &str,
        flags: SchemaFlags,
        attributes: HashMap<String, SchemaAttributeType>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if attributes.is_empty() {
            return Err(Error::EmptyAttributeSet);
        }
        if attributes.len() > MAX_SCHEMA_ATTRIBUTES {
            return Err(Error::TooManyAttributes {
                count: attributes.len(),
            });
        }
        Ok(Self(Inner::Owned(Arc::new(SchemaData {
            name: name.to_string(),
            flags,
            attributes,
        }))))
    }

    /// Returns a predefined schema. The result is borrowed: it lives for
    /// the whole process and [`Schema::release`] on it is a no-op.
    pub fn predefined(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::Note => Self(Inner::Borrowed(LazyLock::force(&NOTE))),
            SchemaKind::CompatNetwork => Self(Inner::Borrowed(LazyLock::force(&COMPAT_NETWORK))),
        }
    }

    /// The predefined schema for personal notes stored by the user in a
    /// password manager. Declares no attributes; its items are not meant
    /// to be matched automatically by applications.
    pub fn note() -> Self {
        Self::predefined(SchemaKind::Note)
    }

    /// The predefined schema compatible with items stored as "network
    /// passwords" by libgnome-keyring. Meant for applications migrating
    /// from that library, not for new code.
    pub fn compat_network() -> Self {
        Self::predefined(SchemaKind::CompatNetwork)
    }

    pub fn name(&self) -> &str {
        &self.data().name
    }

    pub fn flags(&self) -> SchemaFlags {
        self.data().flags
    }

    /// Declared attribute names and their types.
    pub fn attribute_types(&self) -> &HashMap<String, SchemaAttributeType> {
        &self.data().attributes
    }

    /// Returns an additional handle to the same schema.
    pub fn retain(&self) -> Self {
        self.clone()
    }

    /// Releases this handle. Owned schemas drop a reference; borrowed
    /// predefined schemas are untouched. Dropping the handle has the
    /// same effect.
    pub fn release(self) {}

    /// Whether this handle borrows a predefined process-lifetime schema.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.0, Inner::Borrowed(_))
    }

    fn data(&self) -> &SchemaData {
        match &self.0 {
            Inner::Owned(data) => data,
            Inner::Borrowed(data) => data,
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schema{{name={:?}, flags={}, attributes={}{}}}",
            self.name(),
            self.flags(),
            self.attribute_types().len(),
            if self.is_borrowed() { ", borrowed" } else { "" },
        )
    }
}

/// Selector for the predefined schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Note,
    CompatNetwork,
}

static NOTE: LazyLock<SchemaData> = LazyLock::new(|| SchemaData {
    name: "org.gnome.keyring.Note".to_string(),
    flags: SchemaFlags::None,
    // Predefined schemas are exempt from the one-attribute floor.
    attributes: HashMap::new(),
});

static COMPAT_NETWORK: LazyLock<SchemaData> = LazyLock::new(|| SchemaData {
    name: "org.gnome.keyring.NetworkPassword".to_string(),
    flags: SchemaFlags::None,
    attributes: HashMap::from([
        ("user".to_string(), SchemaAttributeType::String),
        ("domain".to_string(), SchemaAttributeType::String),
        ("object".to_string(), SchemaAttributeType::String),
        ("protocol".to_string(), SchemaAttributeType::String),
        ("port".to_string(), SchemaAttributeType::Integer),
        ("server".to_string(), SchemaAttributeType::String),
        ("authtype".to_string(), SchemaAttributeType::String),
    ]),
});

/// Validates a container against a schema.
///
/// All-or-nothing, reporting the first failure: every container key must
/// be declared, every declared key must be present, and every value must
/// conform to its declared type's encoding. Keys are checked in sorted
/// order so the reported failure does not depend on hash order.
pub fn validate(schema: &Schema, attrs: &Attributes) -> Result<()> {
    let present = attrs.snapshot()?;
    let declared = schema.attribute_types();

    let mut keys: Vec<&String> = present.keys().collect();
    keys.sort();
    for key in &keys {
        if !declared.contains_key(*key) {
            return Err(Error::UndeclaredAttribute {
                name: (*key).clone(),
            });
        }
    }

    let mut wanted: Vec<&String> = declared.keys().collect();
    wanted.sort();
    for name in wanted {
        if !present.contains_key(name) {
            return Err(Error::MissingRequiredAttribute { name: name.clone() });
        }
    }

    for key in keys {
        let value = &present[key];
        let expected = declared[key];
        if !conforms(value, expected) {
            return Err(Error::InvalidAttributeValue {
                name: key.clone(),
                value: value.clone(),
                expected,
            });
        }
    }

    Ok(())
}

fn conforms(value: &str, expected: SchemaAttributeType) -> bool {
    match expected {
        SchemaAttributeType::String => true,
        SchemaAttributeType::Integer => {
            let digits = value.strip_prefix('-').unwrap_or(value);
            !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
        }
        SchemaAttributeType::Boolean => value == "true" || value == "false",
    }
}
