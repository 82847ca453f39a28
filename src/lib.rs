//! Server-side HTML view composition.
//!
//! ## Overview
//!
//! This crate builds HTML documents from typed components instead of
//! string templates. A [`Page`] owns three built-in sections (`main`,
//! `menubar`, `navbar`); application code appends [`element`] widgets to
//! the sections and then serializes the whole tree with [`Page::render`].
//!
//! Rendering is a single pass over the tree. Elements may register
//! stylesheets and scripts while they render; the document head is
//! assembled afterwards so those assets are still included. All text and
//! attribute values are HTML-escaped at the rendering boundary, and
//! recoverable problems (duplicate asset URLs, unreadable fragment files,
//! unavailable children) degrade with a `tracing` warning instead of
//! failing the render.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pagewright::element::Component;
//! use pagewright::elements::{InlineTextEdit, Paragraph};
//! use pagewright::page::{AppIdentity, Page};
//! use pagewright::settings::MemorySettings;
//!
//! let settings = Arc::new(MemorySettings::new());
//! settings.set("page.body.footer.content", serde_json::json!("<footer>fin</footer>"));
//!
//! let mut page = Page::new(AppIdentity::new("Wiki", "wiki")).with_settings(settings);
//! page.add_element_to_section("main", Paragraph::with_text("Hello, world!").into_ref())?;
//!
//! let mut editor = InlineTextEdit::new("draft");
//! editor.set_behavior_script("/static/inline-edit.js");
//! page.add_element_to_section("main", editor.into_ref())?;
//!
//! let html = page.render();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<p><span>Hello, world!</span></p>"));
//! assert!(html.contains("/static/inline-edit.js"));
//! # Ok::<(), pagewright::error::PageError>(())
//! ```

pub mod assets;
pub mod element;
pub mod elements;
pub mod error;
mod escape;
pub mod locale;
pub mod page;
pub mod section;
pub mod settings;

pub use assets::{AssetRegistry, Script, ScriptFlags, Stylesheet};
pub use element::{Component, ComponentRef, Element, Named, Tooltip};
pub use elements::{
	HorizontalRule, InlineTextEdit, Paragraph, SubmitEndpoint, Template, Text, TextInputType,
};
pub use error::{PageError, PageResult};
pub use locale::{FixedLocale, Translator};
pub use page::{AppIdentity, Page};
pub use section::{Section, SectionRef};
pub use settings::{MemorySettings, SettingsStore};
