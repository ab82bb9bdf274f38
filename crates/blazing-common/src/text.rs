//! Text comparison helpers.
//!
//! Case-insensitive matching folds per `char` with `char::to_lowercase`, so
//! `fold_case(a) == fold_case(b)` agrees exactly with `eq_with_case(a, b, true)`.

/// Lowercase `text` one `char` at a time.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Compare two strings, optionally ignoring case.
#[inline]
pub fn eq_with_case(a: &str, b: &str, ignore_case: bool) -> bool {
    if !ignore_case {
        return a == b;
    }
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod text_tests;
