// src/core/sanitize.rs

/// Trim newlines from both ends, then spaces. Tabs and inner whitespace stay.
pub fn trim_newlines_then_spaces(s: &str) -> &str {
    s.trim_matches('\n').trim_matches(' ')
}

/// Byte offset of the first ASCII letter (`[a-zA-Z]`), if any.
pub fn first_ascii_letter(s: &str) -> Option<usize> {
    s.find(|c: char| c.is_ascii_alphabetic())
}

/// Collapse whitespace runs into single spaces and trim. For log lines only.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
