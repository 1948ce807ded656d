//! Leading comment extraction
//!
//! Programs usually open with a block of comments (job name, tool,
//! generator). Those lines are collected verbatim up to the first line of
//! code.

/// True when a trimmed line is a comment (`;` or `(` first)
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with(';') || trimmed.starts_with('(')
}

/// Comment lines before the first code line, blank lines skipped
pub fn leading_comments(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .take_while(|line| is_comment(line.trim()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_until_first_code_line() {
        let text = "; job: bracket\n\n  (tool: 3mm endmill)\nG0 X0 Y0\n; not leading\n";
        assert_eq!(
            leading_comments(text),
            vec!["; job: bracket".to_string(), "  (tool: 3mm endmill)".to_string()]
        );
    }

    #[test]
    fn test_no_comments() {
        assert!(leading_comments("G1 X1\n; later").is_empty());
        assert!(leading_comments("").is_empty());
    }

    #[test]
    fn test_is_comment() {
        assert!(is_comment("; hello"));
        assert!(is_comment("(hello)"));
        assert!(!is_comment("G1 (inline)"));
    }
}
