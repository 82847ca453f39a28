//! Horizontal rule element.

use crate::assets::AssetRegistry;
use crate::element::{Component, Element};

/// A horizontal rule (`<hr>`) element.
///
/// Renders as a self-closing tag; children are never emitted.
#[derive(Debug)]
pub struct HorizontalRule {
	base: Element,
}

impl HorizontalRule {
	/// Creates a horizontal rule.
	pub fn new() -> Self {
		Self {
			base: Element::new(),
		}
	}
}

impl Component for HorizontalRule {
	fn base(&self) -> &Element {
		&self.base
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.base
	}

	fn render(&mut self, _assets: &mut AssetRegistry) -> String {
		let mut html = String::new();
		html.push_str("<hr");
		html.push_str(&self.base.render_attributes());
		html.push_str(" />");
		html
	}
}

impl Default for HorizontalRule {
	fn default() -> Self {
		Self::new()
	}
}
