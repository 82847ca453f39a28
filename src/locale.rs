//! Locale collaborators.

/// Source of the active locale for content resolution.
///
/// The page queries the translator when resolving locale-qualified
/// fragment settings and when emitting the document's `lang` attribute.
pub trait Translator: Send + Sync {
	/// Returns the active locale code (e.g. `"de"`, `"en-US"`), if any.
	fn current_locale(&self) -> Option<String>;
}

/// Translator pinned to one locale.
#[derive(Debug, Clone)]
pub struct FixedLocale {
	locale: String,
}

impl FixedLocale {
	/// Creates a translator that always reports `locale`.
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
		}
	}
}

impl Translator for FixedLocale {
	fn current_locale(&self) -> Option<String> {
		Some(self.locale.clone())
	}
}
