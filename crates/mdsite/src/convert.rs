//! Block-to-HTML translation and document assembly.

use mdsite_core::HtmlNode;
use tracing::{debug, trace};

use crate::blocks::{block_to_block_kind, markdown_to_blocks, BlockKind};
use crate::inline::{text_to_spans, SpanKind, TextSpan};
use crate::Result;

/// Convert a whole document into a `<div>` holding one node per block
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    let mut children = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.iter().enumerate() {
        let kind = block_to_block_kind(block);
        trace!(index, ?kind, "classified block");
        children.push(block_to_html_node(block, kind)?);
    }

    debug!(blocks = children.len(), "assembled document");
    Ok(HtmlNode::element("div", children))
}

/// Convert one classified block into its HTML subtree
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    let node = match kind {
        BlockKind::Heading(level) => {
            let text = block.get(level as usize + 1..).unwrap_or_default();
            HtmlNode::element(&format!("h{}", level), text_to_children(text)?)
        }

        BlockKind::Code => {
            // Interior verbatim, including the newline before the closing fence
            let interior = block.split_once('\n').map(|(_, rest)| rest).unwrap_or_default();
            let code = interior
                .rfind('\n')
                .map(|end| &interior[..=end])
                .unwrap_or_default();
            let code = HtmlNode::element("code", vec![span_to_html_node(TextSpan::plain(code))]);
            HtmlNode::element("pre", vec![code])
        }

        BlockKind::Quote => {
            let text = block
                .split('\n')
                .map(|line| match line.strip_prefix('>') {
                    Some(rest) => rest.trim_start_matches(' '),
                    None => line,
                })
                .collect::<Vec<_>>()
                .join("\n");
            HtmlNode::element("blockquote", text_to_children(&text)?)
        }

        BlockKind::UnorderedList => HtmlNode::element("ul", list_items(block, "- ")?),

        BlockKind::OrderedList => HtmlNode::element("ol", list_items(block, ". ")?),

        BlockKind::Paragraph => {
            let text = block.split('\n').collect::<Vec<_>>().join(" ");
            HtmlNode::element("p", text_to_children(&text)?)
        }
    };

    Ok(node)
}

/// One `<li>` per line, with everything up to the first `marker` removed
fn list_items(block: &str, marker: &str) -> Result<Vec<HtmlNode>> {
    block
        .split('\n')
        .map(|line| {
            let item = line.split_once(marker).map(|(_, rest)| rest).unwrap_or(line);
            Ok(HtmlNode::element("li", text_to_children(item)?))
        })
        .collect()
}

/// Parse inline Markdown into HTML child nodes
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_spans(text)?
        .into_iter()
        .map(span_to_html_node)
        .collect())
}

/// Map a span to its HTML leaf
pub fn span_to_html_node(span: TextSpan) -> HtmlNode {
    match span.kind {
        SpanKind::Plain => HtmlNode::text(span.text),
        SpanKind::Bold => HtmlNode::leaf("b", span.text),
        SpanKind::Italic => HtmlNode::leaf("i", span.text),
        SpanKind::Code => HtmlNode::leaf("code", span.text),
        SpanKind::Link { url } => HtmlNode::leaf_with_attrs("a", span.text, [("href", url)]),
        SpanKind::Image { url } => {
            HtmlNode::leaf_with_attrs("img", "", [("src", url), ("alt", span.text)])
        }
    }
}
