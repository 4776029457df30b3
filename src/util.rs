/// Panel-local key hint with key and description, shown in the help overlay.
///
/// Distinct from command shortcuts: these keys are fixed, not rebindable.
#[derive(Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub description: &'static str,
}

/// Pad `text` with spaces to `width` columns, truncating if longer.
pub fn pad_right(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}
