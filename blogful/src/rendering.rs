//! Text transformations shared by the page templates.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use thiserror::Error;
use time::format_description;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Renders Markdown to HTML. Raw HTML in the source comes out escaped
/// and script-capable link targets are replaced with `#`, so the result
/// is safe to embed into a page as is.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(
        text,
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES,
    ).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) =>
            Event::Start(Tag::Link {
                link_type,
                dest_url: safe_destination(dest_url),
                title,
                id,
            }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) =>
            Event::Start(Tag::Image {
                link_type,
                dest_url: safe_destination(dest_url),
                title,
                id,
            }),
        event => event,
    });
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

// Browsers skip whitespace and control characters inside a scheme.
fn safe_destination(url: CowStr<'_>) -> CowStr<'_> {
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|s| scheme.starts_with(s)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// The form timestamps take on their way into the templates.
pub fn timestamp_to_string(
    timestamp: OffsetDateTime,
) -> Result<String, FormattingError> {
    Ok(timestamp.format(&Rfc3339)?)
}

/// Reformats an RFC 3339 timestamp with a `time` format description,
/// e.g. `[day]/[month]/[year]`. Missing timestamps format to nothing.
pub fn format_timestamp(
    timestamp: Option<&str>,
    format: &str,
) -> Result<String, FormattingError> {
    let Some(timestamp) = timestamp.filter(|t| !t.is_empty()) else {
        return Ok(String::new());
    };
    let timestamp = OffsetDateTime::parse(timestamp, &Rfc3339)?;
    let format = format_description::parse(format)?;
    Ok(timestamp.format(&format)?)
}

#[derive(Debug, Error)]
pub enum FormattingError {
    #[error("invalid timestamp: {0}")]
    Parse(#[from] time::error::Parse),

    #[error("invalid date format: {0}")]
    Description(#[from] time::error::InvalidFormatDescription),

    #[error("cannot format the date: {0}")]
    Format(#[from] time::error::Format),
}
