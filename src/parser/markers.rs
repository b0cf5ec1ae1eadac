/// Substring that opens a proof body.
pub const PROOF_START: &str = "begin";
/// Substring that closes a proof body.
pub const PROOF_END: &str = "end";
pub const BLOCK_COMMENT_OPEN: &str = "/-";
pub const BLOCK_COMMENT_CLOSE: &str = "-/";
pub const LINE_COMMENT: &str = "--";
pub const ASSIGNMENT: &str = ":=";

/// Split file contents into lines, keeping each line's terminator.
pub fn raw_lines(contents: &str) -> Vec<&str> {
    contents.split_inclusive('\n').collect()
}

/// Check if line is nothing but a terminator
pub fn is_blank_line(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}

pub fn opens_proof(line: &str) -> bool {
    line.contains(PROOF_START)
}

pub fn closes_proof(line: &str) -> bool {
    line.contains(PROOF_END)
}

pub fn opens_block_comment(line: &str) -> bool {
    line.contains(BLOCK_COMMENT_OPEN)
}

pub fn closes_block_comment(line: &str) -> bool {
    line.contains(BLOCK_COMMENT_CLOSE)
}

/// Check if the trimmed line begins with a block comment opener
pub fn starts_block_comment(line: &str) -> bool {
    line.trim().starts_with(BLOCK_COMMENT_OPEN)
}

pub fn has_line_comment(line: &str) -> bool {
    line.contains(LINE_COMMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_lines_keep_terminators() {
        let lines = raw_lines("a\n\nb\r\nc");
        assert_eq!(lines, vec!["a\n", "\n", "b\r\n", "c"]);
    }

    #[test]
    fn raw_lines_empty_input() {
        assert!(raw_lines("").is_empty());
    }

    #[test]
    fn blank_line_is_terminator_only() {
        assert!(is_blank_line("\n"));
        assert!(is_blank_line("\r\n"));
        assert!(!is_blank_line(" \n"));
        assert!(!is_blank_line(""));
    }

    #[test]
    fn block_comment_start_ignores_indentation() {
        assert!(starts_block_comment("   /-- doc\n"));
        assert!(!starts_block_comment("def x := 1 /- trailing -/\n"));
    }

    #[test]
    fn markers_are_plain_substrings() {
        assert!(closes_proof("append\n"));
        assert!(opens_proof("beginning\n"));
        assert!(has_line_comment("x --y\n"));
    }
}
