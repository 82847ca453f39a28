//! Page sections.

use std::cell::RefCell;
use std::rc::Rc;

use crate::assets::AssetRegistry;
use crate::element::{Component, ComponentRef, Element};

/// Name of the main content section.
pub const MAIN: &str = "main";
/// Name of the menu bar section.
pub const MENUBAR: &str = "menubar";
/// Name of the navigation section.
pub const NAVBAR: &str = "navbar";

/// Shared handle to a [`Section`].
pub type SectionRef = Rc<RefCell<Section>>;

/// A named container section owned by a page.
///
/// Sections render as `<div>` wrappers around their children. The three
/// built-in sections are created by [`Page::new`](crate::page::Page::new)
/// with ids namespaced by the application's page-id prefix; they exist
/// for the page's whole lifetime.
#[derive(Debug)]
pub struct Section {
	base: Element,
	name: String,
}

impl Section {
	/// Creates a named section with the given element id.
	pub(crate) fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
		let mut base = Element::new();
		base.set_id(id);
		Self {
			base,
			name: name.into(),
		}
	}

	/// Returns the section name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Appends a child element.
	pub fn add_child(&mut self, child: ComponentRef) {
		self.base.add_child(child);
	}
}

impl Component for Section {
	fn base(&self) -> &Element {
		&self.base
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.base
	}

	fn render(&mut self, assets: &mut AssetRegistry) -> String {
		let mut html = String::new();
		html.push_str("<div");
		html.push_str(&self.base.render_attributes());
		html.push('>');
		html.push_str(&self.base.render_children(assets));
		html.push_str("</div>");
		html
	}
}
