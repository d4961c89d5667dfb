//! Whitespace normalization for docstring blocks.
//!
//! Two related but distinct operations live here:
//!
//! - [`unindent`] removes the leading whitespace shared by every non-empty
//!   line, with no special treatment of the first line.
//! - [`doctrim`] trims a whole docstring: the first line is handled
//!   independently because it usually starts flush with the opening quote.

const TAB_STOP: usize = 8;

/// Count of leading whitespace characters in `line`.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Slice `line` past its first `n` characters. Lines shorter than `n`
/// collapse to the empty string.
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut col = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - col % TAB_STOP;
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else {
            out.push(ch);
            col += 1;
        }
    }
    out
}

/// Remove the indentation common to every non-empty line.
///
/// The common indent is the minimum leading-whitespace width over all
/// non-empty lines. Input with no non-empty lines is returned unchanged.
pub fn unindent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let indent = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| indent_width(line))
        .min();
    match indent {
        Some(indent) => lines.iter().map(|line| skip_chars(line, indent)).collect(),
        None => lines.to_vec(),
    }
}

/// Trim a whole docstring block.
///
/// Tabs are expanded to 8-column stops, the first line is left-stripped on
/// its own, the margin shared by all later non-blank lines is removed, and
/// leading/trailing empty lines are dropped.
pub fn doctrim(text: &str) -> String {
    let lines: Vec<String> = text.split('\n').map(expand_tabs).collect();
    let margin = lines[1..]
        .iter()
        .filter(|line| !line.trim_start_matches(' ').is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min();

    let mut trimmed: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            trimmed.push(line.trim_start_matches(' '));
        } else {
            match margin {
                Some(margin) => trimmed.push(skip_chars(line, margin)),
                None => trimmed.push(line),
            }
        }
    }
    while trimmed.last().is_some_and(|line| line.is_empty()) {
        trimmed.pop();
    }
    while trimmed.first().is_some_and(|line| line.is_empty()) {
        trimmed.remove(0);
    }
    trimmed.join("\n")
}
