//! Code-block detection and fencing for transcript and shell snippets.

use crate::text::unindent;

/// How many characters an interactive prompt marker occupies.
const PROMPT_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// `$ `-prefixed shell commands, fenced as `bash`.
    Shell,
    /// `>>> `-prefixed interactive session lines, fenced as `python`.
    Transcript,
}

impl CodeKind {
    pub fn fence_tag(self) -> &'static str {
        match self {
            CodeKind::Shell => "bash",
            CodeKind::Transcript => "python",
        }
    }

    /// Which kind, if any, a left-stripped line starts a block for.
    pub fn trigger(trimmed: &str) -> Option<Self> {
        if trimmed.starts_with(">>> ") {
            Some(CodeKind::Transcript)
        } else if trimmed.starts_with("$ ") {
            Some(CodeKind::Shell)
        } else {
            None
        }
    }
}

fn is_prompt_line(line: &str) -> bool {
    line.starts_with(">>> ") || line.starts_with("... ") || line == ">>>" || line == "..."
}

/// Strip the interactive prompts from a transcript that contains no output.
///
/// A transcript made up entirely of prompt lines is really just code, so the
/// prompt prefixes are removed and the fenced block becomes directly
/// runnable. A transcript with interleaved output keeps its prompts.
pub fn transcript_to_code<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let lines = unindent(lines);
    if lines.iter().all(|line| is_prompt_line(line)) {
        lines
            .iter()
            .map(|line| line.get(PROMPT_WIDTH..).unwrap_or(""))
            .collect()
    } else {
        lines
    }
}

/// Wrap `lines` in a fenced code block tagged for syntax highlighting.
pub fn fence(lines: &[&str], kind: CodeKind) -> Vec<String> {
    let mut block = Vec::with_capacity(lines.len() + 2);
    block.push(format!("```{}", kind.fence_tag()));
    block.extend(lines.iter().map(|line| line.to_string()));
    block.push("```".to_string());
    block
}

/// Classify and fence an accumulated code block.
///
/// Only transcripts get the prompt-stripping treatment; shell blocks are
/// fenced exactly as written.
pub fn render_block(lines: &[&str], kind: CodeKind) -> Vec<String> {
    match kind {
        CodeKind::Transcript => fence(&transcript_to_code(lines), kind),
        CodeKind::Shell => fence(lines, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_transcript_loses_prompts() {
        let lines = vec![">>> x = 1", ">>> y = 2"];
        assert_eq!(transcript_to_code(&lines), vec!["x = 1", "y = 2"]);
    }

    #[test]
    fn test_bare_markers_count_as_code() {
        let lines = vec![">>> if True:", "...     pass", "..."];
        assert_eq!(transcript_to_code(&lines), vec!["if True:", "    pass", ""]);
    }

    #[test]
    fn test_transcript_with_output_is_untouched() {
        let lines = vec![">>> x = 1", ">>> x", "1"];
        assert_eq!(transcript_to_code(&lines), lines);
    }

    #[test]
    fn test_indented_transcript_unindents_before_check() {
        let lines = vec!["    >>> x = 1"];
        assert_eq!(transcript_to_code(&lines), vec!["x = 1"]);
    }
}
