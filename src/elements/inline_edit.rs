//! Inline-editable text field.
//!
//! ## Overview
//!
//! [`InlineTextEdit`] renders a value as display text with a hidden input
//! behind it; a client-side script swaps the two when the user clicks the
//! text and submits edits to the endpoint configured with
//! [`InlineTextEdit::set_submit_endpoint`]. The widget restricts itself
//! to single-line text subtypes: passwords and multiline content are
//! rejected at configuration time.
//!
//! ## Example
//!
//! ```
//! use pagewright::elements::{InlineTextEdit, TextInputType};
//!
//! let mut edit = InlineTextEdit::new("alice@example.com");
//! edit.set_input_type(TextInputType::Email)?;
//! edit.set_submit_endpoint("update_email", Some("value"), &[("user", "42")])?;
//! # Ok::<(), pagewright::error::PageError>(())
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::assets::{AssetRegistry, Script, ScriptFlags};
use crate::element::{Component, Element, Named, Tooltip};
use crate::error::{PageError, PageResult};
use crate::escape::html_escape;

/// Marker class present on the container only while it is being rendered.
const ACTIVE_CLASS: &str = "inline-edit-active";

fn is_valid_param_name(name: &str) -> bool {
	static PARAM_NAME: Lazy<Regex> = Lazy::new(|| {
		Regex::new(r"^[A-Za-z][A-Za-z0-9_-]+$").expect("Invalid parameter name regex pattern")
	});
	PARAM_NAME.is_match(name)
}

/// Input subtypes for [`InlineTextEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInputType {
	/// Plain single-line text.
	Text,
	/// Email address.
	Email,
	/// URL.
	Url,
	/// Search term.
	Search,
	/// Password input. Rejected by [`InlineTextEdit::set_input_type`].
	Password,
	/// Multiline text. Rejected by [`InlineTextEdit::set_input_type`].
	Multiline,
}

impl TextInputType {
	/// HTML `type` attribute value for the hidden input.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Url => "url",
			Self::Search => "search",
			Self::Text | Self::Password | Self::Multiline => "text",
		}
	}
}

/// Submit target configured on an [`InlineTextEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEndpoint {
	function: String,
	content_param: Option<String>,
	params: IndexMap<String, String>,
}

impl SubmitEndpoint {
	/// Returns the server-side function name.
	pub fn function(&self) -> &str {
		&self.function
	}

	/// Returns the parameter name carrying the edited content.
	pub fn content_param(&self) -> Option<&str> {
		self.content_param.as_deref()
	}

	/// Returns the extra fixed parameters in insertion order.
	pub fn params(&self) -> &IndexMap<String, String> {
		&self.params
	}
}

/// An inline-editable text field.
#[derive(Debug)]
pub struct InlineTextEdit {
	base: Element,
	value: String,
	input_type: TextInputType,
	endpoint: Option<SubmitEndpoint>,
	behavior_script: Option<String>,
}

impl InlineTextEdit {
	/// Creates an inline edit field showing `value` as plain text.
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			base: Element::new(),
			value: value.into(),
			input_type: TextInputType::Text,
			endpoint: None,
			behavior_script: None,
		}
	}

	/// Returns the current value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Replaces the current value.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	/// Returns the configured input subtype.
	pub fn input_type(&self) -> TextInputType {
		self.input_type
	}

	/// Sets the input subtype.
	///
	/// `Password` and `Multiline` are not usable inline; the call is
	/// rejected and the previously configured subtype stays in effect.
	///
	/// # Errors
	///
	/// Returns [`PageError::Configuration`] for a rejected subtype.
	pub fn set_input_type(&mut self, input_type: TextInputType) -> PageResult<()> {
		match input_type {
			TextInputType::Password | TextInputType::Multiline => {
				tracing::warn!(
					"unsupported inline edit input type rejected: {:?}",
					input_type
				);
				Err(PageError::Configuration(format!(
					"input type {input_type:?} is not supported for inline editing"
				)))
			}
			_ => {
				self.input_type = input_type;
				Ok(())
			}
		}
	}

	/// Returns the configured submit endpoint.
	pub fn submit_endpoint(&self) -> Option<&SubmitEndpoint> {
		self.endpoint.as_ref()
	}

	/// Configures where edited content is submitted.
	///
	/// `content_param` (when present) and every key of `other_params` must
	/// match `^[A-Za-z][A-Za-z0-9_-]+$`. Any invalid name rejects the whole
	/// call: the previously configured endpoint is kept unchanged.
	///
	/// # Errors
	///
	/// Returns [`PageError::Configuration`] when a parameter name fails
	/// validation.
	pub fn set_submit_endpoint(
		&mut self,
		function: impl Into<String>,
		content_param: Option<&str>,
		other_params: &[(&str, &str)],
	) -> PageResult<()> {
		if let Some(name) = content_param
			&& !is_valid_param_name(name)
		{
			tracing::warn!("invalid content parameter name rejected: {}", name);
			return Err(PageError::Configuration(format!(
				"invalid parameter name: {name}"
			)));
		}
		for (name, _) in other_params {
			if !is_valid_param_name(name) {
				tracing::warn!("invalid submit parameter name rejected: {}", name);
				return Err(PageError::Configuration(format!(
					"invalid parameter name: {name}"
				)));
			}
		}
		let mut params = IndexMap::new();
		for (name, value) in other_params {
			params.insert((*name).to_string(), (*value).to_string());
		}
		self.endpoint = Some(SubmitEndpoint {
			function: function.into(),
			content_param: content_param.map(str::to_string),
			params,
		});
		Ok(())
	}

	/// Returns the configured behavior script URL.
	pub fn behavior_script(&self) -> Option<&str> {
		self.behavior_script.as_deref()
	}

	/// Sets the URL of the client-side script driving the widget.
	///
	/// When set, rendering registers the script with the page's asset
	/// registry as a deferred external script; many widgets sharing one
	/// URL produce a single tag.
	pub fn set_behavior_script(&mut self, url: impl Into<String>) {
		self.behavior_script = Some(url.into());
	}
}

impl Component for InlineTextEdit {
	fn base(&self) -> &Element {
		&self.base
	}

	fn base_mut(&mut self) -> &mut Element {
		&mut self.base
	}

	fn render(&mut self, assets: &mut AssetRegistry) -> String {
		if let Some(url) = &self.behavior_script {
			assets.add_script(Script::url(url.clone()).with_flags(ScriptFlags::DEFER));
		}
		let value = &self.value;
		let input_type = self.input_type;
		let endpoint = &self.endpoint;
		self.base.with_class_temporarily(ACTIVE_CLASS, |base| {
			let mut html = String::new();
			html.push_str("<div");
			html.push_str(&base.render_attributes());
			if let Some(endpoint) = endpoint {
				html.push_str(" data-submit=\"");
				html.push_str(&html_escape(endpoint.function()));
				html.push('"');
				if let Some(param) = endpoint.content_param() {
					html.push_str(" data-content-param=\"");
					html.push_str(&html_escape(param));
					html.push('"');
				}
				for (name, value) in endpoint.params() {
					html.push_str(" data-param-");
					html.push_str(name);
					html.push_str("=\"");
					html.push_str(&html_escape(value));
					html.push('"');
				}
			}
			html.push('>');
			html.push_str("<span class=\"inline-edit-display\">");
			html.push_str(&html_escape(value));
			html.push_str("</span>");
			html.push_str("<input type=\"");
			html.push_str(input_type.as_str());
			html.push_str("\" value=\"");
			html.push_str(&html_escape(value));
			html.push_str("\" hidden=\"hidden\" />");
			html.push_str(&base.render_children(assets));
			html.push_str("</div>");
			html
		})
	}
}

impl Tooltip for InlineTextEdit {}

impl Named for InlineTextEdit {}
