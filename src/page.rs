//! Page composition and full-document rendering.
//!
//! ## Overview
//!
//! [`Page`] is the root of the view tree. It owns the three built-in
//! sections (`main`, `menubar`, `navbar`), the registry of stylesheet and
//! script descriptors, and the per-instance caches for settings-driven
//! content fragments. [`Page::render`] serializes the whole tree into one
//! HTML document string.
//!
//! A page is meant to live for a single request/response cycle. The
//! fragment caches are instance-scoped, so configuration changes are
//! picked up by the next page, never by a page that already resolved its
//! fragments.
//!
//! ## Example
//!
//! ```
//! use pagewright::element::Component;
//! use pagewright::elements::Paragraph;
//! use pagewright::page::{AppIdentity, Page};
//!
//! let mut page = Page::new(AppIdentity::new("Wiki", "wiki"));
//! page.add_element_to_section("main", Paragraph::with_text("Hello").into_ref())?;
//! let html = page.render();
//! assert!(html.contains("<p><span>Hello</span></p>"));
//! # Ok::<(), pagewright::error::PageError>(())
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use crate::assets::{AssetRegistry, Script, Stylesheet};
use crate::element::{Component, ComponentRef};
use crate::error::{PageError, PageResult};
use crate::escape::html_escape;
use crate::locale::Translator;
use crate::section::{self, Section, SectionRef};
use crate::settings::SettingsStore;

/// Setting keys read by [`Page`].
pub mod keys {
	/// Inline HTML inserted into the document head.
	pub const HEAD_CONTENT: &str = "page.head.content";
	/// Inline HTML inserted before the sections.
	pub const BODY_HEADER_CONTENT: &str = "page.body.header.content";
	/// Path of a file whose contents are inserted before the sections.
	pub const BODY_HEADER_FILE: &str = "page.body.header.file";
	/// Inline HTML inserted after the sections.
	pub const BODY_FOOTER_CONTENT: &str = "page.body.footer.content";
	/// Path of a file whose contents are inserted after the sections.
	pub const BODY_FOOTER_FILE: &str = "page.body.footer.file";
	/// Whether the main section is rendered. Defaults to true.
	pub const MAIN_ENABLED: &str = "page.main.enabled";
	/// Whether the navigation section is rendered. Defaults to true.
	pub const NAVBAR_ENABLED: &str = "page.navbar.enabled";
}

/// Identity of the owning application.
#[derive(Debug, Clone)]
pub struct AppIdentity {
	title: String,
	page_id_prefix: String,
}

impl AppIdentity {
	/// Creates an identity from the application title and the prefix used
	/// for page-unique element ids.
	pub fn new(title: impl Into<String>, page_id_prefix: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			page_id_prefix: page_id_prefix.into(),
		}
	}

	/// Returns the application title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Returns the page-unique id prefix.
	pub fn page_id_prefix(&self) -> &str {
		&self.page_id_prefix
	}
}

/// A complete HTML page built from sections, elements, and assets.
pub struct Page {
	identity: AppIdentity,
	settings: Option<Arc<dyn SettingsStore>>,
	translator: Option<Arc<dyn Translator>>,
	main: SectionRef,
	menubar: SectionRef,
	navbar: SectionRef,
	assets: AssetRegistry,
	head_fragment: OnceCell<String>,
	body_header_fragment: OnceCell<String>,
	body_footer_fragment: OnceCell<String>,
}

impl std::fmt::Debug for Page {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Page")
			.field("identity", &self.identity)
			.field("has_settings", &self.settings.is_some())
			.field("has_translator", &self.translator.is_some())
			.field("assets", &self.assets)
			.finish()
	}
}

impl Page {
	/// Creates a page with its three built-in sections.
	///
	/// Section ids are namespaced with the identity's page-id prefix
	/// (`<prefix>-main`, `<prefix>-menubar`, `<prefix>-navbar`). The menu
	/// bar is created as a child of the main section: it renders inside
	/// main's subtree while staying directly reachable through
	/// [`Page::menu_bar`]. This nesting is permanent.
	pub fn new(identity: AppIdentity) -> Self {
		let prefix = identity.page_id_prefix();
		let main = Rc::new(RefCell::new(Section::new(
			section::MAIN,
			format!("{prefix}-main"),
		)));
		let menubar = Rc::new(RefCell::new(Section::new(
			section::MENUBAR,
			format!("{prefix}-menubar"),
		)));
		let navbar = Rc::new(RefCell::new(Section::new(
			section::NAVBAR,
			format!("{prefix}-navbar"),
		)));
		main.borrow_mut().add_child(menubar.clone());
		Self {
			identity,
			settings: None,
			translator: None,
			main,
			menubar,
			navbar,
			assets: AssetRegistry::new(),
			head_fragment: OnceCell::new(),
			body_header_fragment: OnceCell::new(),
			body_footer_fragment: OnceCell::new(),
		}
	}

	/// Attaches a settings store used for fragments and feature flags.
	pub fn with_settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Attaches a translator providing the active locale.
	pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = Some(translator);
		self
	}

	/// Returns the application identity.
	pub fn identity(&self) -> &AppIdentity {
		&self.identity
	}

	/// Returns the main content section.
	pub fn main_section(&self) -> SectionRef {
		self.main.clone()
	}

	/// Returns the menu bar section nested inside main.
	pub fn menu_bar(&self) -> SectionRef {
		self.menubar.clone()
	}

	/// Returns the navigation section.
	pub fn navbar(&self) -> SectionRef {
		self.navbar.clone()
	}

	/// Appends `element` to the named section.
	///
	/// Recognized names are [`section::MAIN`], [`section::MENUBAR`], and
	/// [`section::NAVBAR`].
	///
	/// # Errors
	///
	/// Returns [`PageError::InvalidSection`] for an unrecognized name and
	/// [`PageError::InvalidElement`] when `element` is one of this page's
	/// own sections, which would alias page chrome into itself.
	pub fn add_element_to_section(
		&self,
		section_name: &str,
		element: ComponentRef,
	) -> PageResult<()> {
		let target = match section_name {
			section::MAIN => &self.main,
			section::MENUBAR => &self.menubar,
			section::NAVBAR => &self.navbar,
			other => {
				tracing::warn!("unknown section name: {}", other);
				return Err(PageError::InvalidSection(other.to_string()));
			}
		};
		if self.is_own_section(&element) {
			tracing::warn!("page section rejected as child of {}", section_name);
			return Err(PageError::InvalidElement(
				"element is one of the page's own sections".to_string(),
			));
		}
		target.borrow_mut().add_child(element);
		Ok(())
	}

	fn is_own_section(&self, element: &ComponentRef) -> bool {
		// Compare data pointers only; the element handle is a fat pointer.
		let element_ptr = Rc::as_ptr(element) as *const ();
		[&self.main, &self.menubar, &self.navbar]
			.into_iter()
			.any(|section| Rc::as_ptr(section) as *const () == element_ptr)
	}

	/// Registers a stylesheet for the document head.
	pub fn add_stylesheet(&mut self, stylesheet: Stylesheet) {
		self.assets.add_stylesheet(stylesheet);
	}

	/// Registers a script for the document head.
	pub fn add_script(&mut self, script: Script) {
		self.assets.add_script(script);
	}

	/// Returns the asset registry.
	pub fn assets(&self) -> &AssetRegistry {
		&self.assets
	}

	/// Returns the resolved head fragment, computing it on first use.
	///
	/// Head content has no locale or file fallback: it is the
	/// [`keys::HEAD_CONTENT`] setting or the empty string.
	pub fn head_content(&self) -> &str {
		self.head_fragment
			.get_or_init(|| self.lookup_string(keys::HEAD_CONTENT).unwrap_or_default())
	}

	/// Returns the resolved body header fragment, computing it on first use.
	///
	/// Without configuration this defaults to a header carrying the
	/// application title.
	pub fn body_header_content(&self) -> &str {
		self.body_header_fragment.get_or_init(|| {
			self.resolve_body_fragment(
				keys::BODY_HEADER_CONTENT,
				keys::BODY_HEADER_FILE,
				format!(
					"<header><h1>{}</h1></header>",
					html_escape(self.identity.title())
				),
			)
		})
	}

	/// Returns the resolved body footer fragment, computing it on first use.
	pub fn body_footer_content(&self) -> &str {
		self.body_footer_fragment.get_or_init(|| {
			self.resolve_body_fragment(
				keys::BODY_FOOTER_CONTENT,
				keys::BODY_FOOTER_FILE,
				String::new(),
			)
		})
	}

	/// Resolves a body fragment through the fallback chain: locale-qualified
	/// inline content, inline content, locale-qualified content file,
	/// content file, built-in default. A file that cannot be read falls
	/// through to the next step.
	fn resolve_body_fragment(&self, content_key: &str, file_key: &str, default: String) -> String {
		let locale = self.current_locale();
		if let Some(locale) = &locale
			&& let Some(text) = self.lookup_string(&format!("{content_key}.{locale}"))
		{
			return text;
		}
		if let Some(text) = self.lookup_string(content_key) {
			return text;
		}
		if let Some(locale) = &locale
			&& let Some(text) = self.read_fragment_file(&format!("{file_key}.{locale}"))
		{
			return text;
		}
		if let Some(text) = self.read_fragment_file(file_key) {
			return text;
		}
		default
	}

	fn read_fragment_file(&self, key: &str) -> Option<String> {
		let path = self.lookup_string(key)?;
		match std::fs::read_to_string(&path) {
			Ok(text) => {
				tracing::debug!("fragment for {} read from {}", key, path);
				Some(text)
			}
			Err(err) => {
				tracing::warn!("failed to read fragment file {}: {}", path, err);
				None
			}
		}
	}

	fn lookup_string(&self, key: &str) -> Option<String> {
		self.settings.as_ref()?.get_string(key)
	}

	fn settings_bool(&self, key: &str, default: bool) -> bool {
		match &self.settings {
			Some(settings) => settings.get_bool_or(key, default),
			None => default,
		}
	}

	fn current_locale(&self) -> Option<String> {
		self.translator
			.as_ref()
			.and_then(|translator| translator.current_locale())
	}

	/// Renders the page to a complete HTML document.
	///
	/// The body is serialized before the head is assembled, so stylesheets
	/// and scripts registered by elements during section rendering still
	/// land in the head. Rendering never fails; missing collaborators and
	/// duplicate asset URLs degrade with a logged warning.
	pub fn render(&mut self) -> String {
		let body = self.render_body();
		let head = self.render_head();
		let mut html = String::with_capacity(head.len() + body.len() + 128);
		html.push_str("<!DOCTYPE html>\n");
		match self.current_locale() {
			Some(locale) => {
				html.push_str(&format!("<html lang=\"{}\">\n", html_escape(&locale)));
			}
			None => html.push_str("<html>\n"),
		}
		html.push_str("<head>\n");
		html.push_str(&head);
		html.push_str("</head>\n");
		html.push_str("<body>\n");
		html.push_str(&body);
		html.push_str("</body>\n");
		html.push_str("</html>\n");
		html
	}

	fn render_body(&mut self) -> String {
		let header = self.body_header_content().to_string();
		let footer = self.body_footer_content().to_string();
		let mut body = String::new();
		if !header.is_empty() {
			body.push_str(&header);
			body.push('\n');
		}
		if self.settings_bool(keys::MAIN_ENABLED, true) {
			let html = self.main.borrow_mut().render(&mut self.assets);
			body.push_str(&html);
			body.push('\n');
		}
		if self.settings_bool(keys::NAVBAR_ENABLED, true) {
			let html = self.navbar.borrow_mut().render(&mut self.assets);
			body.push_str(&html);
			body.push('\n');
		}
		if !footer.is_empty() {
			body.push_str(&footer);
			body.push('\n');
		}
		body
	}

	fn render_head(&self) -> String {
		let mut head = String::new();
		head.push_str("<meta charset=\"UTF-8\">\n");
		head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
		head.push_str(&format!(
			"<title>{}</title>\n",
			html_escape(self.identity.title())
		));
		let fragment = self.head_content();
		if !fragment.is_empty() {
			head.push_str(fragment);
			head.push('\n');
		}
		head.push_str(&self.assets.render_stylesheets());
		head.push_str(&self.assets.render_scripts());
		head
	}
}
