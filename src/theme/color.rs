//! Color value helpers.

/// Append a two-character alpha code to a color value.
///
/// This is plain string composition: `with_alpha("#272e33", "80")` is
/// `"#272e3380"`. The input is not parsed or validated.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    let mut out = String::with_capacity(color.len() + alpha.len());
    out.push_str(color);
    out.push_str(alpha);
    out
}
