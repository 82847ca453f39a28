//! Inline edit widget tests
//!
//! Tests for the inline-editable text field: endpoint configuration,
//! subtype rules, and rendered markup

use pagewright::{
	AppIdentity, AssetRegistry, Component, InlineTextEdit, Named, Page, Text, TextInputType,
	Tooltip,
};
use rstest::rstest;

#[rstest]
fn test_endpoint_survives_failed_update_and_accepts_later_one() {
	let mut edit = InlineTextEdit::new("draft");
	edit.set_submit_endpoint("first", Some("content"), &[])
		.unwrap();
	assert!(
		edit.set_submit_endpoint("second", Some("bad name"), &[])
			.is_err()
	);
	assert_eq!(edit.submit_endpoint().unwrap().function(), "first");
	edit.set_submit_endpoint("third", None, &[("page", "7")])
		.unwrap();
	let endpoint = edit.submit_endpoint().unwrap();
	assert_eq!(endpoint.function(), "third");
	assert_eq!(endpoint.content_param(), None);
	assert_eq!(endpoint.params().get("page").map(String::as_str), Some("7"));
}

#[rstest]
fn test_endpoint_params_render_in_insertion_order() {
	let mut edit = InlineTextEdit::new("draft");
	edit.set_submit_endpoint("save", None, &[("zeta", "1"), ("alpha", "2")])
		.unwrap();
	let mut assets = AssetRegistry::new();
	let html = edit.render(&mut assets);
	let zeta = html.find("data-param-zeta").unwrap();
	let alpha = html.find("data-param-alpha").unwrap();
	assert!(zeta < alpha);
}

#[rstest]
fn test_data_param_values_are_escaped() {
	let mut edit = InlineTextEdit::new("draft");
	edit.set_submit_endpoint("save", None, &[("note", "a \"quoted\" & value")])
		.unwrap();
	let mut assets = AssetRegistry::new();
	let html = edit.render(&mut assets);
	assert!(html.contains(" data-param-note=\"a &quot;quoted&quot; &amp; value\""));
}

#[rstest]
fn test_container_carries_id_and_classes() {
	let mut edit = InlineTextEdit::new("draft");
	edit.base_mut().set_id("title-edit");
	edit.base_mut().add_class("editable");
	let mut assets = AssetRegistry::new();
	let html = edit.render(&mut assets);
	assert!(html.starts_with("<div id=\"title-edit\" class=\"editable inline-edit-active\""));
}

#[rstest]
fn test_children_render_inside_container() {
	let mut edit = InlineTextEdit::new("draft");
	edit.base_mut().add_child(Text::new("note").into_ref());
	let mut assets = AssetRegistry::new();
	let html = edit.render(&mut assets);
	assert!(html.contains("hidden=\"hidden\" /><span>note</span></div>"));
}

#[rstest]
fn test_tooltip_and_name_render_as_attributes() {
	let mut edit = InlineTextEdit::new("draft");
	edit.set_tooltip("Click to edit");
	edit.set_name("title");
	let mut assets = AssetRegistry::new();
	let html = edit.render(&mut assets);
	assert!(html.contains(" title=\"Click to edit\""));
	assert!(html.contains(" name=\"title\""));
}

#[rstest]
fn test_set_value_updates_display_and_input() {
	let mut edit = InlineTextEdit::new("old");
	edit.set_value("new");
	let mut assets = AssetRegistry::new();
	let html = edit.render(&mut assets);
	assert!(html.contains("<span class=\"inline-edit-display\">new</span>"));
	assert!(html.contains("value=\"new\""));
}

#[rstest]
fn test_widget_inside_page_document() {
	let mut page = Page::new(AppIdentity::new("Wiki", "wiki"));
	let mut edit = InlineTextEdit::new("Page \"Title\"");
	edit.set_input_type(TextInputType::Search).unwrap();
	page.add_element_to_section("main", edit.into_ref()).unwrap();
	let html = page.render();
	assert!(html.contains("<span class=\"inline-edit-display\">Page &quot;Title&quot;</span>"));
	assert!(html.contains("<input type=\"search\" value=\"Page &quot;Title&quot;\""));
}
