//! Section boundary extraction for 10-K text

use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Locate `Item {item}` whose heading contains `keyword`
///
/// A section starts at a heading matching `Item <n> ... <keyword>` or
/// `<n>. <keyword>` and ends at the next `Item <n+1>`, or after `max_chars`
/// characters when no next item follows. Filings usually mention each item
/// in the table of contents first, so every candidate start is tried and
/// the longest section wins. Whitespace is collapsed in the result.
pub fn extract_section(text: &str, item: u32, keyword: &str, max_chars: usize) -> Option<String> {
    let keyword = regex::escape(keyword);
    let starts = [
        format!(r"Item\s+{}.*?{}", item, keyword),
        format!(r"{}\.\s*{}", item, keyword),
    ];
    let next_item = case_insensitive(&format!(r"Item\s+{}\b", item + 1))?;

    let mut best: Option<&str> = None;
    for pattern in &starts {
        let Some(start_re) = case_insensitive(pattern) else {
            continue;
        };
        for found in start_re.find_iter(text) {
            let rest = &text[found.start()..];
            let candidate = match next_item.find(rest) {
                Some(end) => &rest[..end.start()],
                None => prefix_chars(rest, max_chars),
            };
            if best.map_or(true, |b| candidate.len() > b.len()) {
                best = Some(candidate);
            }
        }
    }

    let section = collapse_whitespace(best?);
    let section = prefix_chars(&section, max_chars).to_string();
    debug!(item, chars = section.len(), "Section located");
    Some(section).filter(|s| !s.is_empty())
}

fn case_insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern).case_insensitive(true).build().ok()
}

fn prefix_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
