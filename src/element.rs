//! Element base and the component rendering contract.
//!
//! ## Overview
//!
//! Every renderable type is built around an [`Element`] base holding the
//! shared per-node state (id, class names, attributes, children) and
//! implements the [`Component`] trait to serialize itself to HTML.
//! Children are held as shared [`ComponentRef`] handles so a node can be
//! reachable both through its parent and through a direct accessor.
//!
//! ## Example
//!
//! ```
//! use pagewright::assets::AssetRegistry;
//! use pagewright::elements::Paragraph;
//! use pagewright::element::Component;
//!
//! let mut paragraph = Paragraph::with_text("Hello");
//! let mut assets = AssetRegistry::new();
//! let html = paragraph.render(&mut assets);
//! assert_eq!(html, "<p><span>Hello</span></p>");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::assets::AssetRegistry;
use crate::escape::html_escape;

/// Shared handle to a renderable component.
pub type ComponentRef = Rc<RefCell<dyn Component>>;

/// Component trait - base interface for all renderable element types.
///
/// Implementors expose their shared [`Element`] base and serialize
/// themselves to HTML. Rendering takes the component mutably because some
/// widgets carry render-scoped state, and it receives the page's
/// [`AssetRegistry`] so elements can register stylesheets and scripts
/// while the body is being serialized.
pub trait Component {
	/// Returns the shared element base.
	fn base(&self) -> &Element;

	/// Returns the shared element base mutably.
	fn base_mut(&mut self) -> &mut Element;

	/// Renders the component to an HTML string.
	fn render(&mut self, assets: &mut AssetRegistry) -> String;

	/// Wraps the component in a shared handle.
	fn into_ref(self) -> ComponentRef
	where
		Self: Sized + 'static,
	{
		Rc::new(RefCell::new(self))
	}
}

/// Tooltip capability for element types whose tag supports hover text.
///
/// The tooltip is stored as the `title` attribute on the element base, so
/// it renders through the normal attribute contract. Element types opt in
/// with an empty `impl` block.
pub trait Tooltip: Component {
	/// Returns the current tooltip text.
	fn tooltip(&self) -> Option<&str> {
		self.base().attribute("title")
	}

	/// Sets the tooltip text.
	fn set_tooltip(&mut self, text: impl Into<String>) {
		let text = text.into();
		self.base_mut().set_attribute("title", Some(text.as_str()));
	}

	/// Removes the tooltip.
	fn clear_tooltip(&mut self) {
		self.base_mut().set_attribute("title", None);
	}
}

/// Name capability for element types that carry a form-style `name`.
///
/// The name is stored as the `name` attribute on the element base.
pub trait Named: Component {
	/// Returns the current element name.
	fn name(&self) -> Option<&str> {
		self.base().attribute("name")
	}

	/// Sets the element name.
	fn set_name(&mut self, name: impl Into<String>) {
		let name = name.into();
		self.base_mut().set_attribute("name", Some(name.as_str()));
	}

	/// Removes the element name.
	fn clear_name(&mut self) {
		self.base_mut().set_attribute("name", None);
	}
}

/// Shared per-node state for renderable elements.
///
/// Holds an optional id, the ordered class list, an insertion-ordered
/// attribute map, and the ordered child list. Attribute values are
/// HTML-escaped at render time; ids are unique by convention only.
pub struct Element {
	id: Option<String>,
	class_names: Vec<String>,
	attributes: IndexMap<String, String>,
	children: Vec<ComponentRef>,
}

impl std::fmt::Debug for Element {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Element")
			.field("id", &self.id)
			.field("class_names", &self.class_names)
			.field("attributes", &self.attributes)
			.field("children_count", &self.children.len())
			.finish()
	}
}

impl Element {
	/// Creates an empty element base.
	pub fn new() -> Self {
		Self {
			id: None,
			class_names: Vec::new(),
			attributes: IndexMap::new(),
			children: Vec::new(),
		}
	}

	/// Returns the element id.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Sets the element id.
	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	/// Removes the element id.
	pub fn clear_id(&mut self) {
		self.id = None;
	}

	/// Sets or removes an attribute.
	///
	/// Passing `None` removes the attribute. Setting an existing attribute
	/// replaces its value while keeping its position in insertion order.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: Option<&str>) {
		let name = name.into();
		match value {
			Some(value) => {
				self.attributes.insert(name, value.to_string());
			}
			None => {
				self.attributes.shift_remove(&name);
			}
		}
	}

	/// Returns the value of an attribute, if set.
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	/// Adds a class name if not already present.
	///
	/// Returns `true` when the class set changed.
	pub fn add_class(&mut self, class: impl Into<String>) -> bool {
		let class = class.into();
		if self.class_names.iter().any(|c| *c == class) {
			false
		} else {
			self.class_names.push(class);
			true
		}
	}

	/// Removes a class name if present.
	///
	/// Returns `true` when the class set changed.
	pub fn remove_class(&mut self, class: &str) -> bool {
		let before = self.class_names.len();
		self.class_names.retain(|c| c != class);
		self.class_names.len() != before
	}

	/// Returns whether the class is present.
	pub fn has_class(&self, class: &str) -> bool {
		self.class_names.iter().any(|c| c == class)
	}

	/// Returns the class names in insertion order.
	pub fn class_names(&self) -> &[String] {
		&self.class_names
	}

	/// Runs `f` with `class` present on the element, restoring the prior
	/// membership state afterwards.
	///
	/// The class is removed again on every exit path, so render-scoped
	/// marker classes never leak into the persistent class set even when
	/// `f` panics. If the class was already present it stays present.
	pub fn with_class_temporarily<R>(
		&mut self,
		class: &str,
		f: impl FnOnce(&mut Element) -> R,
	) -> R {
		struct Restore<'a, 'b> {
			element: &'a mut Element,
			class: &'b str,
			added: bool,
		}

		impl Drop for Restore<'_, '_> {
			fn drop(&mut self) {
				if self.added {
					self.element.remove_class(self.class);
				}
			}
		}

		let added = self.add_class(class);
		let restore = Restore {
			element: self,
			class,
			added,
		};
		f(&mut *restore.element)
	}

	/// Appends a child element.
	pub fn add_child(&mut self, child: ComponentRef) {
		self.children.push(child);
	}

	/// Returns the children in order.
	pub fn children(&self) -> &[ComponentRef] {
		&self.children
	}

	/// Renders the attributes as a single string of ` key="value"` pairs.
	///
	/// Order is stable: id first, then the class list if non-empty, then
	/// the remaining attributes in insertion order. Every value is
	/// HTML-escaped.
	pub fn render_attributes(&self) -> String {
		let mut output = String::new();
		if let Some(id) = &self.id {
			output.push_str(" id=\"");
			output.push_str(&html_escape(id));
			output.push('"');
		}
		if !self.class_names.is_empty() {
			output.push_str(" class=\"");
			output.push_str(&html_escape(&self.class_names.join(" ")));
			output.push('"');
		}
		for (name, value) in &self.attributes {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape(value));
			output.push('"');
		}
		output
	}

	/// Renders every child in order and concatenates the results.
	///
	/// A child whose handle is already mutably borrowed (the tree contains
	/// a cycle back to an ancestor currently being rendered) is skipped
	/// with a warning instead of aborting the render.
	pub fn render_children(&self, assets: &mut AssetRegistry) -> String {
		let mut html = String::new();
		for child in &self.children {
			match child.try_borrow_mut() {
				Ok(mut child) => html.push_str(&child.render(assets)),
				Err(_) => {
					tracing::warn!("child element is already being rendered; skipping");
				}
			}
		}
		html
	}
}

impl Default for Element {
	fn default() -> Self {
		Self::new()
	}
}
