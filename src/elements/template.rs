//! Template element.

use crate::assets::AssetRegistry;
use crate::element::{Component, Element};

/// A `<template>` element holding inert children.
///
/// The children render normally; the browser keeps template content out
/// of the live document until it is instantiated client-side.
#[derive(Debug)]
pub struct Template {
	base: Element,
}

impl Template {
	/// Creates an empty template.
	pub fn new() -> Self {
		Self {
			base: Element::new(),
		}
	}
}

impl Component for Template {
	fn base(&self) -> &Element {
		&self.base
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.base
	}

	fn render(&mut self, assets: &mut AssetRegistry) -> String {
		let mut html = String::new();
		html.push_str("<template");
		html.push_str(&self.base.render_attributes());
		html.push('>');
		html.push_str(&self.base.render_children(assets));
		html.push_str("</template>");
		html
	}
}

impl Default for Template {
	fn default() -> Self {
		Self::new()
	}
}
