//! Entry-point name translation.
//!
//! Problem descriptors declare their entry point in camelCase
//! (`containsDuplicate`); registered solutions export snake_case names.
//! The translation runs two passes in order and then lowercases, matching
//! the two substitutions `(.)([A-Z][a-z]+)` and `([a-z0-9])([A-Z])` with
//! non-overlapping, left-to-right matches. Resolution depends on an exact
//! match against the exported name, so the passes must not be reordered or
//! merged.

pub fn camel_to_snake(name: &str) -> String {
    separate_acronym_tails(&separate_word_runs(name)).to_ascii_lowercase()
}

/// Pass 1: split before each uppercase letter that starts a capitalized
/// word (uppercase followed by at least one lowercase) and follows any
/// character. The capitalized word is consumed whole, so its trailing
/// lowercase run never anchors another pass-1 split.
fn separate_word_runs(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    let mut i = 0;
    while i < chars.len() {
        let starts_word = i + 2 < chars.len()
            && chars[i + 1].is_ascii_uppercase()
            && chars[i + 2].is_ascii_lowercase();
        if starts_word {
            out.push(chars[i]);
            out.push('_');
            out.push(chars[i + 1]);
            i += 2;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                out.push(chars[i]);
                i += 1;
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Pass 2: split between a lowercase letter or digit and the uppercase
/// letter that follows it.
fn separate_acronym_tails(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase()
            && i > 0
            && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit())
        {
            out.push('_');
        }
        out.push(c);
    }
    out
}
