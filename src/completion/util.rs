use ropey::Rope;

/// Text of `line` without its line terminator, or `None` past the end of the document.
pub fn select_line(document: &Rope, line: usize) -> Option<String> {
    if line >= document.len_lines() {
        return None;
    }

    let text = document.line(line).to_string();
    Some(text.trim_end_matches(['\n', '\r']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_terminators() {
        let document = Rope::from_str("first\r\n// camel-k: trait\nlast");
        assert_eq!(select_line(&document, 0).as_deref(), Some("first"));
        assert_eq!(select_line(&document, 1).as_deref(), Some("// camel-k: trait"));
        assert_eq!(select_line(&document, 2).as_deref(), Some("last"));
    }

    #[test]
    fn test_out_of_range() {
        let document = Rope::from_str("only\n");
        assert_eq!(select_line(&document, 1).as_deref(), Some(""));
        assert_eq!(select_line(&document, 2), None);
    }
}
