//! Block splitting and classification.

/// Structural kind of a Markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading with level 1-6
    Heading(u8),
    /// Triple-backtick fenced code
    Code,
    /// Every line starts with `>`
    Quote,
    /// Every line starts with `- `
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps
    OrderedList,
    Paragraph,
}

const FENCE: &str = "```";

/// Split a document into trimmed, non-empty blocks on blank lines
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a single block. First matching rule wins.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    let lines: Vec<&str> = block.split('\n').collect();
    let first = lines.first().copied().unwrap_or_default();
    let last = lines.last().copied().unwrap_or_default();

    if lines.len() > 1 && first.starts_with(FENCE) && last.starts_with(FENCE) {
        return BlockKind::Code;
    }

    if first.starts_with('>') {
        return demote_unless(lines.iter().all(|l| l.starts_with('>')), BlockKind::Quote);
    }

    if first.starts_with("- ") {
        return demote_unless(
            lines.iter().all(|l| l.starts_with("- ")),
            BlockKind::UnorderedList,
        );
    }

    if first.starts_with("1. ") {
        let sequential = lines
            .iter()
            .enumerate()
            .all(|(i, l)| l.starts_with(&format!("{}. ", i + 1)));
        return demote_unless(sequential, BlockKind::OrderedList);
    }

    BlockKind::Paragraph
}

/// Count of leading `#` when it is 1-6 and followed by a space
pub(crate) fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

fn demote_unless(holds: bool, kind: BlockKind) -> BlockKind {
    if holds {
        kind
    } else {
        BlockKind::Paragraph
    }
}
