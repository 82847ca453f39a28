//! Built-in page element types.

pub mod horizontal_rule;
pub mod inline_edit;
pub mod paragraph;
pub mod template;
pub mod text;

pub use horizontal_rule::HorizontalRule;
pub use inline_edit::{InlineTextEdit, SubmitEndpoint, TextInputType};
pub use paragraph::Paragraph;
pub use template::Template;
pub use text::Text;
