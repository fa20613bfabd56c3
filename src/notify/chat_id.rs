/// Normalizes what an admin pastes into the "chat" field.
///
/// `@handle` and numeric ids (negative for groups/channels) are kept,
/// `https://t.me/handle` links become `@handle`, anything else is passed
/// through trimmed.
pub fn normalize_chat_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('@') || is_numeric_id(trimmed) {
        return trimmed.to_string();
    }

    match handle_from_link(trimmed) {
        Some(handle) => format!("@{handle}"),
        None => trimmed.to_string(),
    }
}

fn is_numeric_id(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn handle_from_link(value: &str) -> Option<&str> {
    let (_, rest) = value.split_once("t.me/")?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let handle = &rest[..end];
    (!handle.is_empty()).then_some(handle)
}
