//! Builders for common Block Kit blocks
//!
//! These only produce [`StructuredBlock`] values; the delivery client never
//! looks inside them.

use serde_json::{json, Value};

use crate::types::StructuredBlock;

/// Text object formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Markdown,
    PlainText,
}

impl TextFormat {
    fn as_str(self) -> &'static str {
        match self {
            TextFormat::Markdown => "mrkdwn",
            TextFormat::PlainText => "plain_text",
        }
    }
}

fn text_object(format: TextFormat, text: &str) -> Value {
    json!({ "type": format.as_str(), "text": text })
}

/// `section` block with a single text object
pub fn section(format: TextFormat, text: &str) -> StructuredBlock {
    StructuredBlock::new("section").with_field("text", text_object(format, text))
}

/// `section` block laid out as a two-column list of fields
pub fn fields<'a>(
    format: TextFormat,
    items: impl IntoIterator<Item = &'a str>,
) -> StructuredBlock {
    let items: Vec<Value> = items
        .into_iter()
        .map(|text| text_object(format, text))
        .collect();
    StructuredBlock::new("section").with_field("fields", Value::Array(items))
}

/// `header` block. Slack only accepts plain text here.
pub fn header(text: &str) -> StructuredBlock {
    StructuredBlock::new("header").with_field("text", text_object(TextFormat::PlainText, text))
}

pub fn divider() -> StructuredBlock {
    StructuredBlock::new("divider")
}

/// `context` block of small text elements
pub fn context<'a>(
    format: TextFormat,
    elements: impl IntoIterator<Item = &'a str>,
) -> StructuredBlock {
    let elements: Vec<Value> = elements
        .into_iter()
        .map(|text| text_object(format, text))
        .collect();
    StructuredBlock::new("context").with_field("elements", Value::Array(elements))
}
