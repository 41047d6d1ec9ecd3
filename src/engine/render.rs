//! Annotated text reconstruction.
//!
//! Gaps between references are copied verbatim; each reference becomes an
//! anchor:
//!
//! ```text
//! <a href="#ref:loi:loi-du-12-janvier-2010" data-ref-type="loi"
//!    data-ref-normalized="loi du 12 janvier 2010">loi du 12 janvier 2010</a>
//! ```
//!
//! (one line in the output). The raw text and the normalized attribute are
//! escaped independently. Spans are trusted to be sorted and disjoint; they
//! are not re-checked here.

use super::slug::href;
use crate::{RawMatch, Reference};

/// Rebuild `text` with every accepted match wrapped in an anchor, and return
/// the references carrying the hrefs actually rendered.
pub(crate) fn render(text: &str, accepted: Vec<RawMatch>) -> (String, Vec<Reference>) {
    let mut out = String::with_capacity(text.len() + accepted.len() * 96);
    let mut references = Vec::with_capacity(accepted.len());
    let mut cursor = 0;

    for m in accepted {
        out.push_str(&text[cursor..m.span.start]);

        let href = href(m.category, &m.normalized_text);
        out.push_str("<a href=\"");
        out.push_str(&href);
        out.push_str("\" data-ref-type=\"");
        out.push_str(m.category.as_str());
        out.push_str("\" data-ref-normalized=\"");
        out.push_str(&escape_html(&m.normalized_text));
        out.push_str("\">");
        out.push_str(&escape_html(&m.raw_text));
        out.push_str("</a>");
        cursor = m.span.end;

        references.push(Reference {
            start: m.span.start,
            end: m.span.end,
            category: m.category,
            raw_text: m.raw_text,
            normalized_text: m.normalized_text,
            href,
        });
    }

    out.push_str(&text[cursor..]);
    (out, references)
}

/// Escape `&`, `<`, `>`, `"` and `'` for use in element content or a quoted
/// attribute value.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
