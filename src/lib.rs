/*!

# Schema-validated password storage over the DBus Secret Service

This crate stores, finds, and removes passwords in the platform's
Secret Service (GNOME Keyring, KWallet, or any other daemon speaking the
Secret Service API) via the
[dbus-secret-service crate](https://crates.io/crates/dbus-secret-service).
The service does the encrypting, persisting, and prompting; this crate
owns the layer in front of it: attribute containers, typed schemas, and
the validation that keeps lookup attributes well-formed.

## Attributes and schemas

Items in the Secret Service are identified by string attributes. The
service treats every value as an opaque string, so `8080` and `true`
must be encoded as `"8080"` and `"true"` to match reliably. The
[`builder`] module coerces strings, integers, and booleans into those
canonical encodings, and a [`Schema`] declares which keys a class of
secrets may carry and how each value must be encoded, so malformed
attributes are caught before anything touches the service:

```no_run
use std::collections::HashMap;
use secret_password_store::{
    build_attributes_with_schema, password, Arg, CollectionAlias, Schema,
    SchemaAttributeType, SchemaFlags,
};

let schema = Schema::new(
    "org.example.Password",
    SchemaFlags::None,
    HashMap::from([
        ("username".to_string(), SchemaAttributeType::String),
        ("port".to_string(), SchemaAttributeType::Integer),
        ("ssl".to_string(), SchemaAttributeType::Boolean),
    ]),
)?;

let attrs = build_attributes_with_schema(
    Some(&schema),
    [
        Arg::from("username"),
        Arg::from("john"),
        Arg::from("port"),
        Arg::from(8080),
        Arg::from("ssl"),
        Arg::from(true),
    ],
)?;

password::store(
    Some(&schema),
    &attrs,
    CollectionAlias::Default,
    "Example password",
    "correct horse battery staple",
)?;
let found = password::lookup(Some(&schema), &attrs)?;
assert_eq!(found.as_deref(), Some("correct horse battery staple"));
# Ok::<(), secret_password_store::Error>(())
```

When a schema is supplied to an operation, its name is recorded on the
item (and required of matches) through the `xdg:schema` attribute, unless
the schema sets [`SchemaFlags::DontMatchName`]. Attributes are matching
tags only. They are stored unencrypted, so never put secrets in them.

## Collections

New items land in the `default` collection unless
[`CollectionAlias::Session`] is chosen, which stores them in the
memory-only session collection that the daemon drops at end of session.
Searches are service-wide: all collections are searched.

## Headless usage

On a headless Linux box there are known issues getting dbus, the Secret
Service, and the GNOME keyring to work together. The usual workaround is
to start the keyring daemon unlocked with a known password:

```shell
function unlock-keyring ()
{
    read -rsp "Password: " pass
    echo -n "$pass" | gnome-keyring-daemon --unlock
    unset pass
}
```

For an excellent treatment of all the headless dbus issues, see
[this answer on ServerFault](https://serverfault.com/a/906224/79617).

 */

pub mod attrs;
pub mod builder;
pub mod errors;
pub mod password;
pub mod schema;
mod service;
pub mod value;

pub use attrs::Attributes;
pub use builder::{
    Arg, AttributeBuilder, build_attributes, build_attributes_with_schema, normalize_boolean,
    normalize_integer,
};
pub use errors::{Error, Result};
pub use password::{CollectionAlias, SearchFlags, SearchItem};
pub use schema::{
    MAX_SCHEMA_ATTRIBUTES, Schema, SchemaAttributeType, SchemaFlags, SchemaKind, validate,
};
pub use value::Value;

#[cfg(test)]
mod tests;
