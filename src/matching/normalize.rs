/// Reduce a title to the form used for comparison.
///
/// The whole string is lowercased, then everything except `a-z`, `0-9`,
/// `(` and `)` is dropped. Parentheses survive so that edition qualifiers
/// such as "(Definitive Edition)" still separate otherwise equal titles.
/// The result is never meant for display.
pub fn normalize_title(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|&c| is_title_char(c))
        .collect()
}

#[inline]
fn is_title_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '(' || c == ')'
}
