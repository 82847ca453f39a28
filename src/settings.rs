//! Settings collaborators.
//!
//! Pages read optional configuration (content fragments, feature flags)
//! through the [`SettingsStore`] trait. Values are JSON so one value type
//! covers strings, booleans, and structured data. [`MemorySettings`] is a
//! bundled in-memory implementation for tests and simple deployments.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Read access to application settings.
pub trait SettingsStore: Send + Sync {
	/// Returns the raw value for `key`, if present.
	fn get(&self, key: &str) -> Option<serde_json::Value>;

	/// Returns the value for `key` when it is a JSON string.
	fn get_string(&self, key: &str) -> Option<String> {
		self.get(key)?.as_str().map(str::to_string)
	}

	/// Returns the value for `key` when it is a JSON boolean, or `default`.
	fn get_bool_or(&self, key: &str, default: bool) -> bool {
		self.get(key)
			.and_then(|value| value.as_bool())
			.unwrap_or(default)
	}
}

/// In-memory settings store backed by a `HashMap`.
///
/// The store is thread-safe and can be shared across pages behind an
/// `Arc`.
///
/// ## Example
///
/// ```
/// use pagewright::settings::{MemorySettings, SettingsStore};
///
/// let settings = MemorySettings::new();
/// settings.set("page.navbar.enabled", serde_json::json!(false));
/// assert!(!settings.get_bool_or("page.navbar.enabled", true));
/// ```
pub struct MemorySettings {
	data: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemorySettings {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self {
			data: RwLock::new(HashMap::new()),
		}
	}

	/// Sets `key` to `value`, replacing any previous value.
	pub fn set(&self, key: impl Into<String>, value: serde_json::Value) {
		self.data.write().insert(key.into(), value);
	}

	/// Removes `key`.
	pub fn remove(&self, key: &str) {
		self.data.write().remove(key);
	}

	/// Removes every entry.
	pub fn clear(&self) {
		self.data.write().clear();
	}

	/// Returns the number of stored entries.
	pub fn len(&self) -> usize {
		self.data.read().len()
	}

	/// Returns whether the store is empty.
	pub fn is_empty(&self) -> bool {
		self.data.read().is_empty()
	}
}

impl Default for MemorySettings {
	fn default() -> Self {
		Self::new()
	}
}

impl SettingsStore for MemorySettings {
	fn get(&self, key: &str) -> Option<serde_json::Value> {
		self.data.read().get(key).cloned()
	}
}
