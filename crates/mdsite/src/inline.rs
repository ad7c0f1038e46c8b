//! Inline span parsing.
//!
//! Text is split in fixed stages: `**` bold, `_` italic, `` ` `` code, then
//! links, then images. Each stage only rescans spans that are still plain, so
//! formatting never nests.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ConvertError, Result};

/// Links, plus a captured leading `!` so image syntax can be skipped
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid")
});

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid")
});

/// Inline formatting of a [`TextSpan`]. Only links and images carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// One inline-formatted run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Literal text; the alt text for images
    pub text: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Destination of a link or image
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }
}

/// Parse inline Markdown into spans
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", SpanKind::Code)?;
    let spans = split_links(spans)?;
    split_images(spans)
}

/// Split plain spans on `delimiter`; odd segments get `kind`
///
/// An odd number of delimiters in any plain span is an error. Empty segments
/// are dropped.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        if span.text.matches(delimiter).count() % 2 != 0 {
            return Err(ConvertError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text,
            });
        }

        for (i, part) in span.text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                kind.clone()
            };
            result.push(TextSpan::new(part, part_kind));
        }
    }

    Ok(result)
}

/// `(text, url)` of every `[text](url)` that is not part of an image
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_refs(text, RefKind::Link)
        .map(|r| (r.text.to_string(), r.url.to_string()))
        .collect()
}

/// `(alt, url)` of every `![alt](url)`
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_refs(text, RefKind::Image)
        .map(|r| (r.text.to_string(), r.url.to_string()))
        .collect()
}

/// Split plain spans into text and link spans
pub fn split_links(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_refs(spans, RefKind::Link)
}

/// Split plain spans into text and image spans
pub fn split_images(spans: Vec<TextSpan>) -> Result<Vec<TextSpan>> {
    split_refs(spans, RefKind::Image)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefKind {
    Link,
    Image,
}

impl RefKind {
    fn literal(self, text: &str, url: &str) -> String {
        match self {
            RefKind::Link => format!("[{}]({})", text, url),
            RefKind::Image => format!("![{}]({})", text, url),
        }
    }

    fn span(self, text: &str, url: &str) -> TextSpan {
        match self {
            RefKind::Link => TextSpan::link(text, url),
            RefKind::Image => TextSpan::image(text, url),
        }
    }
}

/// A link or image occurrence; `start` is the byte offset of its literal
struct FoundRef<'a> {
    text: &'a str,
    url: &'a str,
    start: usize,
}

fn find_refs(text: &str, kind: RefKind) -> Box<dyn Iterator<Item = FoundRef<'_>> + '_> {
    match kind {
        RefKind::Link => Box::new(
            LINK_RE
                .captures_iter(text)
                .filter(|caps| caps[1].is_empty())
                .filter_map(|caps| {
                    let start = caps.get(0)?.start();
                    Some(FoundRef {
                        text: caps.get(2)?.as_str(),
                        url: caps.get(3)?.as_str(),
                        start,
                    })
                }),
        ),
        RefKind::Image => Box::new(IMAGE_RE.captures_iter(text).filter_map(|caps| {
            let start = caps.get(0)?.start();
            Some(FoundRef {
                text: caps.get(1)?.as_str(),
                url: caps.get(2)?.as_str(),
                start,
            })
        })),
    }
}

fn split_refs(spans: Vec<TextSpan>, kind: RefKind) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut cursor = 0;

        for found in find_refs(text, kind) {
            let literal = kind.literal(found.text, found.url);
            let located = found.start >= cursor
                && text
                    .get(found.start..)
                    .is_some_and(|rest| rest.starts_with(&literal));
            if !located {
                return Err(ConvertError::SpanNotFound { literal });
            }

            if found.start > cursor {
                result.push(TextSpan::plain(&text[cursor..found.start]));
            }
            result.push(kind.span(found.text, found.url));
            cursor = found.start + literal.len();
        }

        if cursor < text.len() {
            result.push(TextSpan::plain(&text[cursor..]));
        }
    }

    Ok(result)
}
