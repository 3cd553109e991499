//! Markdown code-fence stripping for model responses.

const FENCE: &str = "```";

/// Removes a leading and trailing markdown code fence from a response.
///
/// The opening fence may carry a language tag (```` ```json ````). Text with
/// no fences is returned trimmed and otherwise unchanged.
///
/// # Examples
///
/// ```
/// use careboard::kanban::codec::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n{\"tasks\":[]}\n```"), "{\"tasks\":[]}");
/// assert_eq!(strip_code_fences("  {\"tasks\":[]}  "), "{\"tasks\":[]}");
/// ```
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    let mut body = raw.trim();

    if let Some(after_fence) = body.strip_prefix(FENCE) {
        body = skip_language_tag(after_fence);
    }
    if let Some(before_fence) = body.trim_end().strip_suffix(FENCE) {
        body = before_fence;
    }

    body.trim().to_owned()
}

fn skip_language_tag(after_fence: &str) -> &str {
    let tag_len = after_fence
        .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'))
        .unwrap_or(after_fence.len());
    after_fence.get(tag_len..).unwrap_or_default()
}
