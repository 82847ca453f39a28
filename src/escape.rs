//! HTML escaping for text and attribute values.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// The escape set covers both text content and double-quoted attribute
/// positions. Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	let Some(first) = s.find(['&', '<', '>', '"', '\'']) else {
		return Cow::Borrowed(s);
	};
	let mut escaped = String::with_capacity(s.len() + 8);
	escaped.push_str(&s[..first]);
	for c in s[first..].chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
