//! Loose name normalization for human-entered parameter names.

/// Lowercases a name and replaces every run of whitespace with a single
/// underscore, so `"Cutoff  Freq"` compares equal to `"cutoff_freq"`.
///
/// Applied to parameter declared names only. Widget-declared search strings
/// are lowercased verbatim (underscores in them are already literal).
pub fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            out.push('_');
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(ch);
        }
    }
    out
}
