//! Page title extraction.

use crate::{ConvertError, Result};

/// Text of the first `# ` heading line, trimmed
///
/// Only level 1 headings count; `# ` with nothing after it yields an empty
/// title.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(ConvertError::TitleNotFound)
}
