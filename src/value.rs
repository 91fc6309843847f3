/*!

Secret value containers.

A [`Value`] couples a secret payload with its MIME content type. The
payload is held in zeroizing storage so the bytes are wiped when the
value is released or dropped. Only text content types support UTF-8
extraction; anything else stays opaque bytes.

*/

use std::fmt;

use zeroize::Zeroizing;

use crate::errors::{Error, Result};

const TEXT_PLAIN: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

pub struct Value {
    // None once released or consumed.
    inner: Option<Inner>,
}

struct Inner {
    secret: Zeroizing<Vec<u8>>,
    content_type: String,
}

impl Value {
    /// Creates a value from a text secret. An empty `content_type`
    /// defaults to `text/plain`.
    pub fn new(secret: &str, content_type: &str) -> Result<Self> {
        if secret.is_empty() {
            return Err(Error::EmptyInput { what: "secret" });
        }
        let content_type = if content_type.is_empty() {
            TEXT_PLAIN
        } else {
            content_type
        };
        Ok(Self::wrap(secret.as_bytes().to_vec(), content_type))
    }

    /// Creates a value from binary data. An empty `content_type`
    /// defaults to `application/octet-stream`.
    pub fn from_bytes(data: &[u8], content_type: &str) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyInput { what: "secret data" });
        }
        let content_type = if content_type.is_empty() {
            OCTET_STREAM
        } else {
            content_type
        };
        Ok(Self::wrap(data.to_vec(), content_type))
    }

    pub(crate) fn wrap(secret: Vec<u8>, content_type: &str) -> Self {
        Self {
            inner: Some(Inner {
                secret: Zeroizing::new(secret),
                content_type: content_type.to_string(),
            }),
        }
    }

    /// The raw secret bytes.
    pub fn get(&self) -> Result<&[u8]> {
        self.inner
            .as_ref()
            .map(|inner| inner.secret.as_slice())
            .ok_or(Error::NotInitialized)
    }

    /// The secret as text, when the content type is textual and the
    /// bytes are valid UTF-8; `None` otherwise.
    pub fn text(&self) -> Result<Option<&str>> {
        let inner = self.inner.as_ref().ok_or(Error::NotInitialized)?;
        if !inner.content_type.starts_with("text/") {
            return Ok(None);
        }
        Ok(std::str::from_utf8(&inner.secret).ok())
    }

    /// The MIME content type, e.g. `text/plain` or
    /// `application/octet-stream`.
    pub fn content_type(&self) -> Result<&str> {
        self.inner
            .as_ref()
            .map(|inner| inner.content_type.as_str())
            .ok_or(Error::NotInitialized)
    }

    /// Length of the secret in bytes; 0 once released.
    pub fn len(&self) -> usize {
        self.inner.as_ref().map(|i| i.secret.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an independent copy holding the same secret. Retaining a
    /// released value yields another released value.
    pub fn retain(&self) -> Self {
        Self {
            inner: self.inner.as_ref().map(|inner| Inner {
                secret: inner.secret.clone(),
                content_type: inner.content_type.clone(),
            }),
        }
    }

    /// Extracts the secret as a password string, consuming the value.
    ///
    /// A released value yields `""`; bytes that are not valid UTF-8 are
    /// replaced lossily.
    pub fn into_password(mut self) -> String {
        match self.inner.take() {
            Some(inner) => String::from_utf8_lossy(&inner.secret).into_owned(),
            None => String::new(),
        }
    }

    /// Releases the value, wiping the secret bytes. Idempotent; later
    /// accessors report [`Error::NotInitialized`]. Dropping the value
    /// wipes it as well.
    pub fn release(&mut self) {
        self.inner = None;
    }
}

// Content type and length only; the secret itself never reaches logs.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => f
                .debug_struct("Value")
                .field("content_type", &inner.content_type)
                .field("len", &inner.secret.len())
                .finish(),
            None => f.write_str("Value(released)"),
        }
    }
}
