/// Convert a path or identifier into a lower-case, underscore-separated name.
///
/// Word boundaries are non-alphanumeric separators, a lower-case letter or digit
/// followed by an upper-case letter, and the last letter of an upper-case run when
/// a lower-case letter follows it (`GCSys` becomes `gc_sys`). Separators never
/// repeat and never lead or trail, and only alphanumeric characters survive
/// lowering, so the function is idempotent.
#[must_use]
pub fn to_snake_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    let mut prev: Option<char> = None;
    let mut boundary = false;

    while let Some(c) = chars.next() {
        if !c.is_alphanumeric() {
            boundary = true;
            prev = Some(c);
            continue;
        }

        if c.is_uppercase()
            && let Some(p) = prev
        {
            let next_is_lower = chars.peek().is_some_and(|n| n.is_lowercase());
            if p.is_lowercase() || p.is_numeric() || (p.is_uppercase() && next_is_lower) {
                boundary = true;
            }
        }

        // lowering can yield combining marks, which split words like any separator
        for lower in c.to_lowercase() {
            if !lower.is_alphanumeric() {
                boundary = true;
                continue;
            }

            if boundary && !out.is_empty() {
                out.push('_');
            }

            boundary = false;
            out.push(lower);
        }

        prev = Some(c);
    }

    out
}
