//! Line splitting that keeps each line's terminator.

/// Split text into lines, each retaining its trailing `'\n'`.
///
/// A final line without a terminator is kept as is, so
/// `join_lines(&split_lines(s)) == s` for every input.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_owned).collect()
}

/// Concatenate lines back into a single string.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let len = lines.iter().map(|l| l.as_ref().len()).sum();
    let mut out = String::with_capacity(len);
    for line in lines {
        out.push_str(line.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_terminators() {
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
    }

    #[test]
    fn test_split_unterminated_tail() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_crlf_is_not_translated() {
        let lines = split_lines("a\r\nb\n");
        assert_eq!(lines, vec!["a\r\n", "b\n"]);
        assert_eq!(join_lines(&lines), "a\r\nb\n");
    }

    #[test]
    fn test_blank_lines_survive() {
        let content = "\n\nx\n\n";
        assert_eq!(join_lines(&split_lines(content)), content);
    }
}
