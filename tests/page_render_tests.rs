//! Page rendering tests
//!
//! Tests for full-document assembly: section layout, fragment resolution,
//! and deferred asset emission

use std::sync::Arc;

use pagewright::{
	AppIdentity, Component, FixedLocale, InlineTextEdit, MemorySettings, Page, Paragraph,
	Stylesheet, Text,
};
use rstest::rstest;
use serde_json::json;

fn wiki_page() -> Page {
	Page::new(AppIdentity::new("Wiki", "wiki"))
}

#[rstest]
fn test_hello_world_document() {
	let mut page = wiki_page();
	page.add_element_to_section("main", Paragraph::with_text("Hello, world!").into_ref())
		.unwrap();
	let expected = "<!DOCTYPE html>\n\
		<html>\n\
		<head>\n\
		<meta charset=\"UTF-8\">\n\
		<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
		<title>Wiki</title>\n\
		</head>\n\
		<body>\n\
		<header><h1>Wiki</h1></header>\n\
		<div id=\"wiki-main\"><div id=\"wiki-menubar\"></div><p><span>Hello, world!</span></p></div>\n\
		<div id=\"wiki-navbar\"></div>\n\
		</body>\n\
		</html>\n";
	assert_eq!(page.render(), expected);
}

#[rstest]
fn test_text_content_is_escaped() {
	let mut page = wiki_page();
	page.add_element_to_section("main", Text::new("A & B").into_ref())
		.unwrap();
	let html = page.render();
	assert!(html.contains("<span>A &amp; B</span>"));
	assert!(!html.contains("A & B"));
}

#[rstest]
fn test_body_header_read_from_file() {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(file.path(), "<header>from file</header>").unwrap();
	let settings = Arc::new(MemorySettings::new());
	settings.set(
		"page.body.header.file",
		json!(file.path().to_str().unwrap()),
	);
	let page = wiki_page().with_settings(settings);
	assert_eq!(page.body_header_content(), "<header>from file</header>");
}

#[rstest]
fn test_inline_content_beats_file() {
	let file = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(file.path(), "<header>from file</header>").unwrap();
	let settings = Arc::new(MemorySettings::new());
	settings.set("page.body.header.content", json!("<header>inline</header>"));
	settings.set(
		"page.body.header.file",
		json!(file.path().to_str().unwrap()),
	);
	let page = wiki_page().with_settings(settings);
	assert_eq!(page.body_header_content(), "<header>inline</header>");
}

#[rstest]
fn test_locale_qualified_file_beats_unqualified_file() {
	let localized = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(localized.path(), "<footer>fin</footer>").unwrap();
	let fallback = tempfile::NamedTempFile::new().unwrap();
	std::fs::write(fallback.path(), "<footer>end</footer>").unwrap();
	let settings = Arc::new(MemorySettings::new());
	settings.set(
		"page.body.footer.file.fr",
		json!(localized.path().to_str().unwrap()),
	);
	settings.set(
		"page.body.footer.file",
		json!(fallback.path().to_str().unwrap()),
	);
	let page = wiki_page()
		.with_settings(settings)
		.with_translator(Arc::new(FixedLocale::new("fr")));
	assert_eq!(page.body_footer_content(), "<footer>fin</footer>");
}

#[rstest]
fn test_unreadable_file_falls_back_to_default() {
	let settings = Arc::new(MemorySettings::new());
	settings.set("page.body.header.file", json!("/nonexistent/header.html"));
	let page = wiki_page().with_settings(settings);
	assert_eq!(page.body_header_content(), "<header><h1>Wiki</h1></header>");
}

#[rstest]
fn test_footer_rendered_after_sections() {
	let settings = Arc::new(MemorySettings::new());
	settings.set("page.body.footer.content", json!("<footer>fin</footer>"));
	let mut page = wiki_page().with_settings(settings);
	let html = page.render();
	let navbar_pos = html.find("wiki-navbar").unwrap();
	let footer_pos = html.find("<footer>fin</footer>").unwrap();
	assert!(navbar_pos < footer_pos);
}

#[rstest]
fn test_disabled_sections_keep_fragments() {
	let settings = Arc::new(MemorySettings::new());
	settings.set("page.main.enabled", json!(false));
	settings.set("page.navbar.enabled", json!(false));
	let mut page = wiki_page().with_settings(settings);
	let html = page.render();
	assert!(!html.contains("wiki-main"));
	assert!(!html.contains("wiki-navbar"));
	assert!(html.contains("<header><h1>Wiki</h1></header>"));
}

#[rstest]
fn test_locale_sets_document_language() {
	let mut page = wiki_page().with_translator(Arc::new(FixedLocale::new("ja")));
	assert!(page.render().contains("<html lang=\"ja\">"));
}

#[rstest]
fn test_head_setting_appears_before_assets() {
	let settings = Arc::new(MemorySettings::new());
	settings.set("page.head.content", json!("<base href=\"/wiki/\">"));
	let mut page = wiki_page().with_settings(settings);
	page.add_stylesheet(Stylesheet::url("/static/site.css"));
	let html = page.render();
	let base_pos = html.find("<base href=\"/wiki/\">").unwrap();
	let link_pos = html.find("/static/site.css").unwrap();
	assert!(base_pos < link_pos);
}

#[rstest]
fn test_widget_script_shared_by_two_widgets_emitted_once() {
	let mut page = wiki_page();
	for value in ["first", "second"] {
		let mut edit = InlineTextEdit::new(value);
		edit.set_behavior_script("/static/inline-edit.js");
		page.add_element_to_section("main", edit.into_ref()).unwrap();
	}
	let html = page.render();
	assert_eq!(html.matches("/static/inline-edit.js").count(), 1);
	assert!(html.contains(
		"<script src=\"/static/inline-edit.js\" type=\"text/javascript\" defer=\"defer\"></script>"
	));
}

#[rstest]
fn test_widget_script_lands_in_head_before_body() {
	let mut page = wiki_page();
	let mut edit = InlineTextEdit::new("draft");
	edit.set_behavior_script("/static/inline-edit.js");
	page.add_element_to_section("main", edit.into_ref()).unwrap();
	let html = page.render();
	let head_end = html.find("</head>").unwrap();
	let script_pos = html.find("/static/inline-edit.js").unwrap();
	assert!(script_pos < head_end);
}

#[rstest]
fn test_stylesheets_emitted_before_scripts() {
	let mut page = wiki_page();
	page.add_stylesheet(Stylesheet::inline("body { margin: 0; }"));
	let mut edit = InlineTextEdit::new("draft");
	edit.set_behavior_script("/static/inline-edit.js");
	page.add_element_to_section("main", edit.into_ref()).unwrap();
	let html = page.render();
	let style_pos = html.find("<style").unwrap();
	let script_pos = html.find("<script").unwrap();
	assert!(style_pos < script_pos);
}
