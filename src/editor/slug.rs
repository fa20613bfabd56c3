/// Lowercases, drops everything outside `[a-z0-9]`, Cyrillic, whitespace and
/// `-`, then collapses runs of whitespace/hyphens into a single `-`.
///
/// Leading and trailing separators are trimmed, so the result never starts or
/// ends with `-` and `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || is_cyrillic(ch) {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
    }

    slug
}

// U+0400..=U+04FF
fn is_cyrillic(ch: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&ch)
}
