//! Anchored wildcard matching for weapon classname filters.
//!
//! `*` matches any run of characters (including none). Every other character is
//! literal, and the whole input must match.

/// Returns true if `text` matches `pattern` in full.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut s) = (0usize, 0usize);
    // Position of the last `*` seen and the text index it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while s < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, s));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[s] {
            p += 1;
            s += 1;
        } else if let Some((star, absorbed)) = backtrack {
            p = star + 1;
            s = absorbed + 1;
            backtrack = Some((star, s));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// Returns true if `text` matches any of `patterns`.
pub fn matches_any<I, S>(patterns: I, text: &str) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .any(|pattern| wildcard_match(pattern.as_ref(), text))
}
