//! Single-pass line transformer.
//!
//! Walks a docstring body once with a two-state machine. In [`State::Normal`]
//! a code trigger opens an accumulator, headings are shifted when a shift
//! level is configured, and field directives are rewritten as bullets. In
//! [`State::InCode`] lines are buffered until a blank line (or end of input)
//! flushes the block through the classifier. Heading shifts and directive
//! rewrites never fire inside an open code block, so prompt- or heading-like
//! text within a fence is preserved verbatim.

pub mod code;
pub mod directive;

use crate::heading::{self, HeadingError};
use code::CodeKind;
use directive::Directive;

enum State<'a> {
    Normal,
    InCode { kind: CodeKind, buf: Vec<&'a str> },
}

/// Transform docstring body lines into Markdown, shifting every heading
/// level by `shift_level` when non-zero.
///
/// The output always ends with exactly one empty line.
pub fn transform_lines(lines: &[&str], shift_level: usize) -> Result<Vec<String>, HeadingError> {
    let mut md: Vec<String> = Vec::with_capacity(lines.len() + 1);
    let mut state = State::Normal;

    for &line in lines {
        let trimmed = line.trim_start();
        match &mut state {
            State::InCode { kind, buf } => {
                if line.is_empty() {
                    md.extend(code::render_block(buf, *kind));
                    md.push(String::new());
                    state = State::Normal;
                } else {
                    buf.push(line);
                }
            }
            State::Normal => {
                if let Some(kind) = CodeKind::trigger(trimmed) {
                    state = State::InCode {
                        kind,
                        buf: vec![line],
                    };
                } else if shift_level != 0 && heading::is_heading(line) {
                    let parsed = heading::get_heading(line)?;
                    md.push(heading::make_heading(
                        parsed.level + shift_level,
                        &parsed.title,
                    ));
                } else if let Some(dir) = Directive::detect(trimmed) {
                    md.extend(directive::translate(line, dir));
                } else {
                    md.push(line.to_string());
                }
            }
        }
    }

    // Unterminated block at end of input: flush without a trailing blank.
    if let State::InCode { kind, buf } = state {
        md.extend(code::render_block(&buf, kind));
    }

    md.push(String::new());
    Ok(md)
}
