//! Registry line parser

use svcload_domain::constants::REGISTRY_COMMENT_CHAR;

/// Extract the provider name from one raw registry line
///
/// Everything from the first `#` on is a comment. The remainder is trimmed;
/// an empty result yields `None`. There is no quoting or escaping.
pub fn parse_line(line: &str) -> Option<&str> {
    let content = match line.find(REGISTRY_COMMENT_CHAR) {
        Some(idx) => &line[..idx],
        None => line,
    };
    let name = content.trim();
    (!name.is_empty()).then_some(name)
}
