/*!

Password operations: lookup, store, search, and clear.

Every operation is synchronous, blocks while it crosses into the Secret
Service, and shares one lazily-connected service handle for the whole
process. When a schema is supplied and its flags do not include
[`SchemaFlags::DontMatchName`], the schema name is attached as the
`xdg:schema` attribute: on store so the item records its class, and on
lookup/search/clear so only items of that class match.

Failures reported by the service come back as
[`Error::ExternalOperationFailed`] and are never retried here; a
transient outage is indistinguishable from a permanent failure at this
layer, so retry policy belongs to the caller.

*/

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use dbus_secret_service::Path;
use tracing::debug;

use crate::attrs::Attributes;
use crate::errors::{Error, Result};
use crate::schema::{Schema, SchemaFlags};
use crate::service::Service;
use crate::value::Value;

/// The attribute under which an item's schema name is recorded.
const SCHEMA_ATTRIBUTE: &str = "xdg:schema";

const TEXT_PLAIN: &str = "text/plain";

/// The collection an item is stored into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectionAlias {
    /// The default collection: stored on disk, persists across sessions.
    #[default]
    Default,
    /// The session collection: kept in memory and dropped when the user's
    /// login session ends.
    Session,
}

impl CollectionAlias {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionAlias::Default => "default",
            CollectionAlias::Session => "session",
        }
    }
}

impl fmt::Display for CollectionAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchFlags {
    /// Return every match instead of at most one.
    pub all: bool,
    /// Unlock locked matches.
    pub unlock: bool,
    /// Fetch each match's secret up front instead of on demand.
    pub load_secrets: bool,
}

impl SearchFlags {
    pub const NONE: SearchFlags = SearchFlags {
        all: false,
        unlock: false,
        load_secrets: false,
    };
    pub const ALL: SearchFlags = SearchFlags {
        all: true,
        unlock: false,
        load_secrets: false,
    };
    pub const UNLOCK: SearchFlags = SearchFlags {
        all: false,
        unlock: true,
        load_secrets: false,
    };
    pub const LOAD_SECRETS: SearchFlags = SearchFlags {
        all: false,
        unlock: false,
        load_secrets: true,
    };
}

/// Looks up the password stored under the given schema and attributes.
///
/// Returns `Ok(None)` when nothing matches; not-found is not an error.
/// Locked matches are unlocked before the secret is read.
pub fn lookup(schema: Option<&Schema>, attrs: &Attributes) -> Result<Option<String>> {
    let matching = match_attributes(schema, attrs)?;
    let service = Service::shared()?;
    let paths = service.find_matching_items(&borrow(&matching), true)?;
    let Some(path) = paths.first() else {
        return Ok(None);
    };
    let secret = service.get_secret(path)?;
    Ok(Some(String::from_utf8_lossy(&secret).into_owned()))
}

/// Stores a password, replacing any item with the same attributes.
///
/// The attributes, label, and password must all be non-empty. The secret
/// is stored with a `text/plain` content type.
pub fn store(
    schema: Option<&Schema>,
    attrs: &Attributes,
    collection: CollectionAlias,
    label: &str,
    password: &str,
) -> Result<()> {
    if password.is_empty() {
        return Err(Error::EmptyInput { what: "password" });
    }
    store_bytes(
        schema,
        attrs,
        collection,
        label,
        password.as_bytes(),
        TEXT_PLAIN,
    )
}

/// Stores a binary secret value, replacing any item with the same
/// attributes. The value's own content type is recorded with the item.
pub fn store_binary(
    schema: Option<&Schema>,
    attrs: &Attributes,
    collection: CollectionAlias,
    label: &str,
    value: &Value,
) -> Result<()> {
    let secret = value.get()?;
    let content_type = value.content_type()?;
    store_bytes(schema, attrs, collection, label, secret, content_type)
}

fn store_bytes(
    schema: Option<&Schema>,
    attrs: &Attributes,
    collection: CollectionAlias,
    label: &str,
    secret: &[u8],
    content_type: &str,
) -> Result<()> {
    if label.is_empty() {
        return Err(Error::EmptyInput { what: "label" });
    }
    let matching = match_attributes(schema, attrs)?;
    if attrs.is_empty() {
        return Err(Error::EmptyInput { what: "attributes" });
    }
    let service = Service::shared()?;
    service.create_item(collection, label, borrow(&matching), secret, content_type)?;
    debug!(collection = %collection, content_type, "stored secret item");
    Ok(())
}

/// Searches for items matching the given schema and attributes.
///
/// With default flags at most one match is returned; `all` returns every
/// match. An empty result is not an error. Items come back unlocked-first
/// regardless of flags; `unlock` additionally unlocks the locked ones.
pub fn search(
    schema: Option<&Schema>,
    attrs: &Attributes,
    flags: SearchFlags,
) -> Result<Vec<SearchItem>> {
    let matching = match_attributes(schema, attrs)?;
    let service = Service::shared()?;
    let mut paths = service.find_matching_items(&borrow(&matching), flags.unlock)?;
    if !flags.all {
        paths.truncate(1);
    }
    debug!(matches = paths.len(), all = flags.all, "searched secret items");

    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        let attributes = service.get_attributes(&path)?;
        let label = service.get_label(&path)?;
        let (created, modified) = service.get_timestamps(&path)?;
        let secret = if flags.load_secrets {
            Some(fetch_value(&service, &path)?)
        } else {
            None
        };
        items.push(SearchItem {
            service: service.clone(),
            path,
            attributes,
            label,
            created,
            modified,
            secret,
        });
    }
    Ok(items)
}

/// Removes every item matching the given schema and attributes.
///
/// Returns `Ok(true)` iff at least one item was removed.
pub fn clear(schema: Option<&Schema>, attrs: &Attributes) -> Result<bool> {
    let matching = match_attributes(schema, attrs)?;
    let service = Service::shared()?;
    let paths = service.find_matching_items(&borrow(&matching), true)?;
    if paths.is_empty() {
        return Ok(false);
    }
    for path in &paths {
        service.delete(path)?;
    }
    debug!(removed = paths.len(), "cleared secret items");
    Ok(true)
}

/// As [`lookup`], building the attribute container from a map.
pub fn lookup_with(
    schema: Option<&Schema>,
    attributes: &HashMap<String, String>,
) -> Result<Option<String>> {
    lookup(schema, &Attributes::from_map(attributes)?)
}

/// As [`store`], building the attribute container from a map.
pub fn store_with(
    schema: Option<&Schema>,
    attributes: &HashMap<String, String>,
    collection: CollectionAlias,
    label: &str,
    password: &str,
) -> Result<()> {
    store(
        schema,
        &Attributes::from_map(attributes)?,
        collection,
        label,
        password,
    )
}

/// As [`store_binary`], building the attribute container from a map.
pub fn store_binary_with(
    schema: Option<&Schema>,
    attributes: &HashMap<String, String>,
    collection: CollectionAlias,
    label: &str,
    value: &Value,
) -> Result<()> {
    store_binary(
        schema,
        &Attributes::from_map(attributes)?,
        collection,
        label,
        value,
    )
}

/// One item located by [`search`].
///
/// Items are independent of each other and of the container they were
/// searched with; dropping an item releases it.
pub struct SearchItem {
    service: Arc<Service>,
    path: Path<'static>,
    attributes: HashMap<String, String>,
    label: String,
    created: u64,
    modified: u64,
    secret: Option<Value>,
}

impl SearchItem {
    /// The item's stored attributes, including the `xdg:schema` name
    /// attribute when the item was stored under a schema.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Creation time, in seconds since the epoch.
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Last-modification time, in seconds since the epoch.
    pub fn modified(&self) -> u64 {
        self.modified
    }

    /// The item's secret. Served from the pre-loaded value when the
    /// search used [`SearchFlags::LOAD_SECRETS`], otherwise fetched from
    /// the service (unlocking the item if needed).
    pub fn secret(&self) -> Result<Value> {
        if let Some(value) = &self.secret {
            return Ok(value.retain());
        }
        self.service.ensure_unlocked(&self.path)?;
        fetch_value(&self.service, &self.path)
    }
}

impl fmt::Debug for SearchItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchItem")
            .field("label", &self.label)
            .field("attributes", &self.attributes.keys().collect::<Vec<_>>())
            .field("created", &self.created)
            .field("modified", &self.modified)
            .finish()
    }
}

fn fetch_value(service: &Service, path: &Path<'static>) -> Result<Value> {
    let secret = service.get_secret(path)?;
    let content_type = service.get_secret_content_type(path)?;
    Ok(Value::wrap(secret, &content_type))
}

// The attributes an operation matches or stores: the container's entries
// plus the schema name, unless the schema opts out of name matching.
fn match_attributes(schema: Option<&Schema>, attrs: &Attributes) -> Result<HashMap<String, String>> {
    let mut matching = attrs.snapshot()?;
    if let Some(schema) = schema {
        if schema.flags() != SchemaFlags::DontMatchName {
            matching.insert(SCHEMA_ATTRIBUTE.to_string(), schema.name().to_string());
        }
    }
    Ok(matching)
}

fn borrow(map: &HashMap<String, String>) -> HashMap<&str, &str> {
    map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}
