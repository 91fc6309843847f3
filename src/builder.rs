/*!

Attribute construction from loosely-typed inputs.

The Secret Service stores every attribute value as a string. The helpers
here accept strings, integers of any width, and booleans, and render them
into the canonical encodings: base-10 signed decimal for integers,
`"true"`/`"false"` for booleans.

Two shapes are supported: a flat list of alternating key/value [`Arg`]s
(mirroring the C library's varargs builders, terminator included), and a
chaining [`AttributeBuilder`].

*/

use crate::attrs::Attributes;
use crate::errors::{Error, Result};
use crate::schema::{self, Schema};

/// One argument in a key/value list.
///
/// This is a closed union: anything an attribute value can be coerced
/// from converts into it via `From`. [`Arg::Terminator`] plays the role
/// of the C varargs `NULL` sentinel: legal as the final argument or at
/// a key position, where it truncates the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
    Terminator,
}

impl Arg {
    fn render(&self) -> Option<String> {
        match self {
            Arg::Str(s) => Some(s.clone()),
            Arg::Int(i) => Some(i.to_string()),
            Arg::Uint(u) => Some(u.to_string()),
            Arg::Bool(true) => Some("true".to_string()),
            Arg::Bool(false) => Some("false".to_string()),
            Arg::Terminator => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

macro_rules! arg_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Int(value as i64)
            }
        }
    )*};
}

macro_rules! arg_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for Arg {
            fn from(value: $t) -> Self {
                Arg::Uint(value as u64)
            }
        }
    )*};
}

arg_from_signed!(i8 i16 i32 i64 isize);
arg_from_unsigned!(u8 u16 u32 u64 usize);

/// Builds a container from alternating key/value arguments.
///
/// Keys must be strings; values may be strings, integers, or booleans.
/// One trailing [`Arg::Terminator`] is stripped before the pairing check,
/// and a terminator at a key position ends the list early. A list that is
/// exactly one terminator yields an empty container.
///
/// # Example
///
/// ```
/// use secret_password_store::{build_attributes, Arg};
///
/// let attrs = build_attributes([
///     Arg::from("username"),
///     Arg::from("john"),
///     Arg::from("port"),
///     Arg::from(8080),
///     Arg::from("ssl"),
///     Arg::from(true),
/// ])?;
/// assert_eq!(attrs.get("port"), "8080");
/// # Ok::<(), secret_password_store::Error>(())
/// ```
pub fn build_attributes<I>(args: I) -> Result<Attributes>
where
    I: IntoIterator<Item = Arg>,
{
    let args: Vec<Arg> = args.into_iter().collect();
    if args.is_empty() {
        return Err(Error::EmptyInput {
            what: "argument list",
        });
    }
    if args.len() == 1 && args[0] == Arg::Terminator {
        return Ok(Attributes::new());
    }

    let effective = match args.last() {
        Some(Arg::Terminator) => &args[..args.len() - 1],
        _ => &args[..],
    };
    if effective.len() % 2 != 0 {
        return Err(Error::OddArgumentCount { count: args.len() });
    }

    let mut attrs = Attributes::new();
    let mut i = 0;
    while i < effective.len() {
        if effective[i] == Arg::Terminator {
            break;
        }
        let key = match &effective[i] {
            Arg::Str(key) => key.clone(),
            _ => return Err(Error::KeyTypeMismatch { index: i }),
        };
        let Some(value) = effective.get(i + 1) else {
            return Err(Error::MissingValue { key });
        };
        let Some(rendered) = value.render() else {
            return Err(Error::UnsupportedType { key });
        };
        attrs.set(&key, &rendered)?;
        i += 2;
    }

    Ok(attrs)
}

/// As [`build_attributes`], then validates the result against `schema`.
///
/// The schema parameter mirrors the operations in [`crate::password`],
/// which accept an optional schema, but here one is required, and `None`
/// is rejected with [`Error::MissingSchema`]. On validation failure the
/// partially built container is released before the error is returned.
pub fn build_attributes_with_schema<I>(schema: Option<&Schema>, args: I) -> Result<Attributes>
where
    I: IntoIterator<Item = Arg>,
{
    let schema = schema.ok_or(Error::MissingSchema)?;
    let mut attrs = build_attributes(args)?;
    if let Err(err) = schema::validate(schema, &attrs) {
        attrs.release();
        return Err(err);
    }
    Ok(attrs)
}

/// Normalizes a boolean-ish input to `"true"` or `"false"`.
///
/// Accepts the literals `true`/`false` in any case, `"1"`/`"0"`, native
/// booleans, and any integer (zero is false, anything else true).
pub fn normalize_boolean(value: impl Into<Arg>) -> Result<&'static str> {
    match value.into() {
        Arg::Str(s) => {
            if s.eq_ignore_ascii_case("true") || s == "1" {
                Ok("true")
            } else if s.eq_ignore_ascii_case("false") || s == "0" {
                Ok("false")
            } else {
                Err(Error::InvalidBooleanLiteral(s))
            }
        }
        Arg::Int(i) => Ok(if i != 0 { "true" } else { "false" }),
        Arg::Uint(u) => Ok(if u != 0 { "true" } else { "false" }),
        Arg::Bool(b) => Ok(if b { "true" } else { "false" }),
        Arg::Terminator => Err(Error::InvalidBooleanLiteral("<terminator>".to_string())),
    }
}

/// Normalizes an integer-ish input to its base-10 decimal string.
///
/// Native integers are rendered; strings must parse fully as a signed
/// base-10 integer and are returned as given.
pub fn normalize_integer(value: impl Into<Arg>) -> Result<String> {
    match value.into() {
        Arg::Str(s) => {
            if s.is_empty() || s.parse::<i64>().is_err() {
                return Err(Error::InvalidIntegerLiteral(s));
            }
            Ok(s)
        }
        Arg::Int(i) => Ok(i.to_string()),
        Arg::Uint(u) => Ok(u.to_string()),
        Arg::Bool(b) => Err(Error::InvalidIntegerLiteral(b.to_string())),
        Arg::Terminator => Err(Error::InvalidIntegerLiteral("<terminator>".to_string())),
    }
}

/// Chaining builder for attribute containers.
///
/// ```
/// use secret_password_store::AttributeBuilder;
///
/// let attrs = AttributeBuilder::new()
///     .with_string("username", "john")
///     .with_integer("port", 8080)
///     .with_boolean("ssl", true)
///     .build();
/// assert_eq!(attrs.len(), 3);
/// ```
///
/// `build` transfers the accumulated container out and leaves the builder
/// consumed: a second `build` returns a fresh empty container rather than
/// an error. Accumulating with an empty key, or into a consumed builder,
/// is silently skipped.
#[derive(Debug)]
pub struct AttributeBuilder {
    attrs: Option<Attributes>,
}

impl Default for AttributeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeBuilder {
    pub fn new() -> Self {
        Self {
            attrs: Some(Attributes::new()),
        }
    }

    pub fn with_string(&mut self, key: &str, value: &str) -> &mut Self {
        if let Some(attrs) = &mut self.attrs {
            let _ = attrs.set(key, value);
        }
        self
    }

    pub fn with_integer(&mut self, key: &str, value: i64) -> &mut Self {
        self.with_string(key, &value.to_string())
    }

    pub fn with_boolean(&mut self, key: &str, value: bool) -> &mut Self {
        self.with_string(key, if value { "true" } else { "false" })
    }

    /// Transfers ownership of the accumulated container to the caller.
    pub fn build(&mut self) -> Attributes {
        self.attrs.take().unwrap_or_default()
    }

    /// Releases the accumulated state without transferring it.
    pub fn discard(&mut self) {
        self.attrs = None;
    }
}
