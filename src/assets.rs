//! Stylesheet and script descriptors collected for the document head.
//!
//! Elements register assets while the body is being serialized; the page
//! emits them into the head afterwards, so registration order decides
//! emission order and late registrations are never lost.

use std::collections::HashSet;

use bitflags::bitflags;

use crate::escape::html_escape;

bitflags! {
	/// Load-behavior flags for script tags
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub struct ScriptFlags: u8 {
		/// Emit the `defer` attribute
		const DEFER = 1 << 0;
		/// Emit the `async` attribute
		const ASYNC = 1 << 1;
	}
}

/// A stylesheet to include in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
	/// External stylesheet referenced by URL.
	Url {
		/// Stylesheet location.
		url: String,
		/// MIME type emitted on the `<link>` tag.
		mime_type: String,
	},
	/// Inline CSS emitted as a `<style>` block.
	Inline {
		/// CSS source, emitted verbatim.
		css: String,
	},
}

impl Stylesheet {
	/// Creates an external stylesheet entry with the standard CSS MIME type.
	pub fn url(url: impl Into<String>) -> Self {
		Self::Url {
			url: url.into(),
			mime_type: "text/css".to_string(),
		}
	}

	/// Creates an external stylesheet entry with an explicit MIME type.
	pub fn url_with_mime(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
		Self::Url {
			url: url.into(),
			mime_type: mime_type.into(),
		}
	}

	/// Creates an inline stylesheet entry.
	pub fn inline(css: impl Into<String>) -> Self {
		Self::Inline { css: css.into() }
	}
}

/// A script to include in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
	/// External script referenced by URL.
	Url {
		/// Script location.
		url: String,
		/// MIME type emitted on the `<script>` tag.
		mime_type: String,
		/// Load-behavior flags.
		flags: ScriptFlags,
	},
	/// Inline script emitted as a `<script>` block.
	Inline {
		/// Script source, emitted verbatim.
		text: String,
		/// Load-behavior flags.
		flags: ScriptFlags,
	},
}

impl Script {
	/// Creates an external script entry with the standard JavaScript MIME type.
	pub fn url(url: impl Into<String>) -> Self {
		Self::Url {
			url: url.into(),
			mime_type: "text/javascript".to_string(),
			flags: ScriptFlags::empty(),
		}
	}

	/// Creates an external script entry with an explicit MIME type.
	pub fn url_with_mime(url: impl Into<String>, mime_type: impl Into<String>) -> Self {
		Self::Url {
			url: url.into(),
			mime_type: mime_type.into(),
			flags: ScriptFlags::empty(),
		}
	}

	/// Creates an inline script entry.
	pub fn inline(text: impl Into<String>) -> Self {
		Self::Inline {
			text: text.into(),
			flags: ScriptFlags::empty(),
		}
	}

	/// Replaces the load-behavior flags.
	pub fn with_flags(mut self, new_flags: ScriptFlags) -> Self {
		match &mut self {
			Self::Url { flags, .. } | Self::Inline { flags, .. } => *flags = new_flags,
		}
		self
	}
}

/// Ordered collection of stylesheet and script descriptors.
///
/// Both lists are append-only; entries keep registration order. URL
/// entries that repeat an already-emitted URL are dropped at emission
/// time with a warning, first registration wins. Inline entries are
/// never deduplicated. Duplicate detection is exact-string match only,
/// no URL normalization.
#[derive(Debug, Default)]
pub struct AssetRegistry {
	stylesheets: Vec<Stylesheet>,
	scripts: Vec<Script>,
}

impl AssetRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a stylesheet entry.
	pub fn add_stylesheet(&mut self, stylesheet: Stylesheet) {
		self.stylesheets.push(stylesheet);
	}

	/// Appends a script entry.
	pub fn add_script(&mut self, script: Script) {
		self.scripts.push(script);
	}

	/// Returns the registered stylesheets in order.
	pub fn stylesheets(&self) -> &[Stylesheet] {
		&self.stylesheets
	}

	/// Returns the registered scripts in order.
	pub fn scripts(&self) -> &[Script] {
		&self.scripts
	}

	/// Renders the stylesheet entries as head markup.
	pub fn render_stylesheets(&self) -> String {
		let mut html = String::new();
		let mut seen = HashSet::new();
		for stylesheet in &self.stylesheets {
			match stylesheet {
				Stylesheet::Url { url, mime_type } => {
					if !seen.insert(url.as_str()) {
						tracing::warn!("duplicate stylesheet URL skipped: {}", url);
						continue;
					}
					html.push_str(&format!(
						"<link rel=\"stylesheet\" type=\"{}\" href=\"{}\">\n",
						html_escape(mime_type),
						html_escape(url)
					));
				}
				Stylesheet::Inline { css } => {
					html.push_str("<style type=\"text/css\">");
					html.push_str(css);
					html.push_str("</style>\n");
				}
			}
		}
		html
	}

	/// Renders the script entries as head markup.
	pub fn render_scripts(&self) -> String {
		let mut html = String::new();
		let mut seen = HashSet::new();
		for script in &self.scripts {
			match script {
				Script::Url {
					url,
					mime_type,
					flags,
				} => {
					if !seen.insert(url.as_str()) {
						tracing::warn!("duplicate script URL skipped: {}", url);
						continue;
					}
					html.push_str(&format!(
						"<script src=\"{}\" type=\"{}\"{}></script>\n",
						html_escape(url),
						html_escape(mime_type),
						flag_attributes(*flags)
					));
				}
				Script::Inline { text, flags } => {
					html.push_str(&format!(
						"<script type=\"text/javascript\"{}>",
						flag_attributes(*flags)
					));
					html.push_str(text);
					html.push_str("</script>\n");
				}
			}
		}
		html
	}
}

fn flag_attributes(flags: ScriptFlags) -> String {
	let mut attrs = String::new();
	if flags.contains(ScriptFlags::DEFER) {
		attrs.push_str(" defer=\"defer\"");
	}
	if flags.contains(ScriptFlags::ASYNC) {
		attrs.push_str(" async=\"async\"");
	}
	attrs
}
