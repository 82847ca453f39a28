//! Text run element.

use crate::assets::AssetRegistry;
use crate::element::{Component, Element, Tooltip};
use crate::escape::html_escape;

/// A text run rendered as a `<span>` element.
///
/// The content is HTML-escaped at render time.
#[derive(Debug)]
pub struct Text {
	base: Element,
	content: String,
}

impl Text {
	/// Creates a text run with the given content.
	pub fn new(content: impl Into<String>) -> Self {
		Self {
			base: Element::new(),
			content: content.into(),
		}
	}

	/// Returns the text content.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Replaces the text content.
	pub fn set_content(&mut self, content: impl Into<String>) {
		self.content = content.into();
	}
}

impl Component for Text {
	fn base(&self) -> &Element {
		&self.base
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.base
	}

	fn render(&mut self, assets: &mut AssetRegistry) -> String {
		let mut html = String::new();
		html.push_str("<span");
		html.push_str(&self.base.render_attributes());
		html.push('>');
		html.push_str(&html_escape(&self.content));
		html.push_str(&self.base.render_children(assets));
		html.push_str("</span>");
		html
	}
}

impl Tooltip for Text {}
