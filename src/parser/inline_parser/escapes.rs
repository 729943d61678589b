/// Length of a backslash escape (`\` followed by ASCII punctuation) at the
/// start of `text`.
pub(crate) fn try_parse_escape(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let escaped = chars.next()?;
    escaped.is_ascii_punctuation().then_some(2)
}
