/*!

Shared Secret Service access.

This module provides mutex-protected shared access to the Secret Service
for the password operations. One lazily-connected handle is shared
process-wide; search items keep it alive for on-demand secret reads.

*/

#[cfg(not(any(feature = "crypto-rust", feature = "crypto-openssl")))]
compile_error!("You must enable one of the features crypto-rust or crypto-openssl");

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dbus_secret_service::{EncryptionType, Item, Path, SecretService};

use crate::errors::{Result, external};
use crate::password::CollectionAlias;

pub(crate) struct Service {
    ss: Mutex<SecretService>,
}

static SHARED: Mutex<Option<Arc<Service>>> = Mutex::new(None);

impl Service {
    fn new() -> Result<Self> {
        Ok(Self {
            ss: Mutex::new(SecretService::connect(EncryptionType::Dh).map_err(external)?),
        })
    }

    /// The process-wide service handle, connected on first use. A failed
    /// connection is not cached, so a later call retries.
    pub(crate) fn shared() -> Result<Arc<Self>> {
        let mut guard = SHARED
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        if let Some(service) = guard.as_ref() {
            return Ok(service.clone());
        }
        let service = Arc::new(Service::new()?);
        *guard = Some(service.clone());
        Ok(service)
    }

    /// Paths of all items matching the attributes, unlocked items first.
    /// With `unlock`, locked matches are unlocked before being returned.
    pub(crate) fn find_matching_items(
        &self,
        attributes: &HashMap<&str, &str>,
        unlock: bool,
    ) -> Result<Vec<Path<'static>>> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let search = ss.search_items(attributes.clone()).map_err(external)?;
        if unlock && !search.locked.is_empty() {
            let item_refs: Vec<&Item> = search.locked.iter().collect();
            ss.unlock_all(item_refs.as_slice()).map_err(external)?;
        }
        let results = search
            .unlocked
            .iter()
            .chain(search.locked.iter())
            .map(|i| i.path.clone())
            .collect();
        Ok(results)
    }

    /// Creates (or replaces) an item in the aliased collection.
    pub(crate) fn create_item(
        &self,
        collection: CollectionAlias,
        label: &str,
        attributes: HashMap<&str, &str>,
        secret: &[u8],
        content_type: &str,
    ) -> Result<()> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let collection = util::resolve_collection(&ss, collection)?;
        collection
            .create_item(
                label,
                attributes,
                secret,
                true, // replace
                content_type,
            )
            .map_err(external)?;
        Ok(())
    }

    /// Given an item's path, ensure it exists and is unlocked.
    pub(crate) fn ensure_unlocked(&self, path: &Path<'static>) -> Result<()> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        item.ensure_unlocked().map_err(external)
    }

    /// Given an existing item's path, retrieve its secret.
    pub(crate) fn get_secret(&self, path: &Path<'static>) -> Result<Vec<u8>> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        let secret = item.get_secret().map_err(external)?;
        Ok(secret)
    }

    /// Given an existing item's path, retrieve its secret's content type.
    pub(crate) fn get_secret_content_type(&self, path: &Path<'static>) -> Result<String> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        let content_type = item.get_secret_content_type().map_err(external)?;
        Ok(content_type)
    }

    /// Given an existing item's path, retrieve its attributes.
    pub(crate) fn get_attributes(&self, path: &Path<'static>) -> Result<HashMap<String, String>> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        let attributes = item.get_attributes().map_err(external)?;
        Ok(attributes)
    }

    /// Given an existing item's path, return its label.
    pub(crate) fn get_label(&self, path: &Path<'static>) -> Result<String> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        let label = item.get_label().map_err(external)?;
        Ok(label)
    }

    /// Creation and last-modification times, in seconds since the epoch.
    pub(crate) fn get_timestamps(&self, path: &Path<'static>) -> Result<(u64, u64)> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        let created = item.get_created().map_err(external)?;
        let modified = item.get_modified().map_err(external)?;
        Ok((created, modified))
    }

    // Given an existing item's path, delete it.
    pub(crate) fn delete(&self, path: &Path<'static>) -> Result<()> {
        let ss = self
            .ss
            .lock()
            .expect("Mutex failure in secret store: please report a bug");
        let item = Item::new(&ss, path.clone());
        item.delete().map_err(external)
    }
}

/// Secret Service utilities: this module is private because these can't
/// be called except from the methods of the Service struct which has
/// made the service singleton available.
mod util {
    use super::{CollectionAlias, Result, external};

    use dbus_secret_service::{Collection, SecretService};

    /// Resolve a collection alias to a live, unlocked collection.
    ///
    /// `Default` maps to the service's default collection regardless of
    /// its label. `Session` is matched by label among the existing
    /// collections and created under the `session` alias when absent.
    pub(crate) fn resolve_collection(
        ss: &SecretService,
        alias: CollectionAlias,
    ) -> Result<Collection<'_>> {
        let collection = match alias {
            CollectionAlias::Default => ss.get_default_collection().map_err(external)?,
            CollectionAlias::Session => {
                let all = ss.get_all_collections().map_err(external)?;
                let found = all.into_iter().find(|c| {
                    c.get_label()
                        .map(|l| l.eq_ignore_ascii_case(alias.as_str()))
                        .unwrap_or(false)
                });
                match found {
                    Some(c) => c,
                    None => ss
                        .create_collection(alias.as_str(), alias.as_str())
                        .map_err(external)?,
                }
            }
        };
        if collection.is_locked().map_err(external)? {
            collection.unlock().map_err(external)?;
        }
        Ok(collection)
    }
}
