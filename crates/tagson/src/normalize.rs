//! Whitespace normalization for raw markup text

/// Strip insignificant whitespace between tags.
///
/// Trims the input and removes any whitespace run sitting between a `>`
/// and the next `<`. Text content that does not border two tags is kept
/// as-is; the parser trims an element's own text separately.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut output = String::with_capacity(trimmed.len());

    let mut rest = trimmed;
    while let Some(idx) = rest.find('>') {
        let (head, tail) = rest.split_at(idx + 1);
        output.push_str(head);
        let skipped = tail.trim_start();
        rest = if skipped.starts_with('<') {
            skipped
        } else {
            tail
        };
    }
    output.push_str(rest);

    output
}
