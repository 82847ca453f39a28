//! Paragraph element.

use crate::assets::AssetRegistry;
use crate::element::{Component, Element, Tooltip};
use crate::elements::text::Text;

/// A paragraph (`<p>`) element.
#[derive(Debug)]
pub struct Paragraph {
	base: Element,
}

impl Paragraph {
	/// Creates an empty paragraph.
	pub fn new() -> Self {
		Self {
			base: Element::new(),
		}
	}

	/// Creates a paragraph holding a single text child.
	///
	/// # Example
	///
	/// ```
	/// use pagewright::assets::AssetRegistry;
	/// use pagewright::element::Component;
	/// use pagewright::elements::Paragraph;
	///
	/// let mut paragraph = Paragraph::with_text("Hello");
	/// let html = paragraph.render(&mut AssetRegistry::new());
	/// assert_eq!(html, "<p><span>Hello</span></p>");
	/// ```
	pub fn with_text(content: impl Into<String>) -> Self {
		let mut paragraph = Self::new();
		paragraph.base.add_child(Text::new(content).into_ref());
		paragraph
	}
}

impl Component for Paragraph {
	fn base(&self) -> &Element {
		&self.base
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.base
	}

	fn render(&mut self, assets: &mut AssetRegistry) -> String {
		let mut html = String::new();
		html.push_str("<p");
		html.push_str(&self.base.render_attributes());
		html.push('>');
		html.push_str(&self.base.render_children(assets));
		html.push_str("</p>");
		html
	}
}

impl Tooltip for Paragraph {}

impl Default for Paragraph {
	fn default() -> Self {
		Self::new()
	}
}
