/*!

Error taxonomy for attribute, schema, value, and password operations.

Every variant except [`Error::ExternalOperationFailed`] is a local
validation failure reported to the immediate caller. Failures signaled by
the Secret Service itself are wrapped opaquely; nothing is retried here,
so callers own any retry policy.

*/

use crate::schema::SchemaAttributeType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A required input (map, attribute set, label, password, secret
    /// payload, argument list) had no content.
    #[error("{what} must not be empty")]
    EmptyInput { what: &'static str },

    /// Attribute keys must be non-empty strings.
    #[error("attribute key must not be empty")]
    InvalidKey,

    /// The handle was already released (or consumed) and can no longer
    /// be operated on.
    #[error("handle has been released")]
    NotInitialized,

    /// Key/value argument lists must pair up.
    #[error("arguments must be key/value pairs, got {count}")]
    OddArgumentCount { count: usize },

    /// A key-position argument was not a string.
    #[error("argument {index} must be a string key")]
    KeyTypeMismatch { index: usize },

    /// A key had no following value argument.
    #[error("missing value for key {key:?}")]
    MissingValue { key: String },

    /// A value-position argument was not a string, integer, or boolean.
    #[error("unsupported value type for key {key:?}")]
    UnsupportedType { key: String },

    /// An operation that requires a schema was given none.
    #[error("schema is required")]
    MissingSchema,

    #[error("schema name must not be empty")]
    EmptyName,

    #[error("schema must declare at least one attribute")]
    EmptyAttributeSet,

    #[error("schema cannot declare more than 32 attributes, got {count}")]
    TooManyAttributes { count: usize },

    /// The container holds a key the schema does not declare.
    #[error("attribute {name:?} is not declared in the schema")]
    UndeclaredAttribute { name: String },

    /// The schema declares a key the container does not hold.
    #[error("required attribute {name:?} is missing")]
    MissingRequiredAttribute { name: String },

    /// A stored value does not conform to the declared type's encoding.
    #[error("attribute {name:?} has invalid value {value:?} for type {expected}")]
    InvalidAttributeValue {
        name: String,
        value: String,
        expected: SchemaAttributeType,
    },

    #[error("invalid boolean literal: {0:?}")]
    InvalidBooleanLiteral(String),

    #[error("invalid integer literal: {0:?}")]
    InvalidIntegerLiteral(String),

    /// Opaque wrapper around any failure signaled by the Secret Service,
    /// including service unavailability.
    #[error("secret service operation failed: {0}")]
    ExternalOperationFailed(String),
}

/// Wrap a collaborator failure. The underlying error is stringified so
/// [`Error`] stays cheaply comparable and cloneable.
pub(crate) fn external(err: dbus_secret_service::Error) -> Error {
    Error::ExternalOperationFailed(err.to_string())
}
