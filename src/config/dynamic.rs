//! Process-wide hot-reloadable configuration values.
//!
//! # Responsibilities
//! - Hold named string values that change while the process is running
//! - Hand out per-key handles for lock-free reads on hot paths
//! - Keep each value an atomic, immutable-per-version cell
//!
//! # Design Decisions
//! - Values start unset and are never cleared once written
//! - Readers hold an `Arc<StringProperty>` and never touch the registry again
//! - Writes swap the whole value; readers always see a complete string

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use dashmap::DashMap;

/// Key read by the load-balancing layer for the upstream server list.
///
/// The value format is `"<host>:<port>"`, written exclusively by the
/// discovery bridge.
pub const UPSTREAM_SERVERS_KEY: &str = "api.ribbon.listOfServers";

/// A single hot-reloadable string value.
///
/// Starts unset. Reads are lock-free; each write publishes a new immutable
/// value atomically.
#[derive(Debug, Default)]
pub struct StringProperty {
    value: ArcSwapOption<String>,
}

impl StringProperty {
    /// Create an unset property.
    pub fn unset() -> Self {
        Self {
            value: ArcSwapOption::empty(),
        }
    }

    /// Read the current value, if any has been published.
    pub fn get(&self) -> Option<Arc<String>> {
        self.value.load_full()
    }

    /// Publish a new value, replacing any prior one.
    pub fn set(&self, value: impl Into<String>) {
        self.value.store(Some(Arc::new(value.into())));
    }

    /// Whether a value has ever been published.
    pub fn is_set(&self) -> bool {
        self.value.load().is_some()
    }
}

/// Registry of named dynamic properties.
///
/// Lookup is get-or-create so readers and the writer can resolve their
/// handles in any order during startup.
#[derive(Debug, Default)]
pub struct DynamicProperties {
    values: DashMap<String, Arc<StringProperty>>,
}

impl DynamicProperties {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Resolve the handle for `key`, creating an unset property if absent.
    pub fn string(&self, key: &str) -> Arc<StringProperty> {
        self.values
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(StringProperty::unset()))
            .value()
            .clone()
    }

    /// Read the current value of `key` without retaining a handle.
    pub fn get(&self, key: &str) -> Option<Arc<String>> {
        self.values.get(key).and_then(|property| property.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_starts_unset() {
        let property = StringProperty::unset();
        assert!(!property.is_set());
        assert_eq!(property.get(), None);
    }

    #[test]
    fn set_overwrites_prior_value() {
        let property = StringProperty::unset();
        property.set("10.0.0.5:7101");
        property.set("10.0.0.9:7101");
        assert_eq!(property.get().unwrap().as_str(), "10.0.0.9:7101");
    }

    #[test]
    fn registry_returns_same_handle_for_key() {
        let properties = DynamicProperties::new();
        let writer = properties.string(UPSTREAM_SERVERS_KEY);
        let reader = properties.string(UPSTREAM_SERVERS_KEY);
        assert!(Arc::ptr_eq(&writer, &reader));

        writer.set("10.0.0.5:7101");
        assert_eq!(reader.get().unwrap().as_str(), "10.0.0.5:7101");
        assert_eq!(
            properties.get(UPSTREAM_SERVERS_KEY).unwrap().as_str(),
            "10.0.0.5:7101"
        );
    }

    #[test]
    fn registry_get_on_unknown_key_is_none() {
        let properties = DynamicProperties::new();
        assert_eq!(properties.get("no.such.key"), None);
    }
}
