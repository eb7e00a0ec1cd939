//! HTML Rendering
//!
//! Server-side string templating for the dashboard page. Each section is a
//! pure function of already-fetched data; a section whose data failed to
//! load is rendered as an empty string and the page shell simply shows
//! nothing in that region.

pub mod cards;
pub mod page;
pub mod timeline;

pub use page::render_page;

/// Escape text for insertion into HTML body or attribute positions.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
