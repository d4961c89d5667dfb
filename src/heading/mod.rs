//! ATX heading parsing, section discovery, and table-of-contents generation.
//!
//! A heading line is one or more `#` characters followed by a single space
//! and the title text. Sections are the ordered list of headings found in a
//! document body; the document title itself (a level-1 heading) is never a
//! section, and finding one is a structural error rather than a panic so
//! callers processing many entities can log and skip.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeadingError {
    #[error("not a heading line: {0:?}")]
    NotAHeading(String),
    #[error("top-level heading cannot be a section: {0:?}")]
    TopLevelSection(String),
}

/// A parsed ATX heading: its nesting level and title text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub title: String,
}

impl Heading {
    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
        }
    }
}

/// A line is a heading iff it starts with `#`-run + space.
pub fn is_heading(line: &str) -> bool {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    hashes > 0 && line[hashes..].starts_with(' ')
}

/// Parse a heading line into its `(level, title)` pair.
///
/// Errors with [`HeadingError::NotAHeading`] when `line` does not satisfy
/// [`is_heading`].
pub fn get_heading(line: &str) -> Result<Heading, HeadingError> {
    if !is_heading(line) {
        return Err(HeadingError::NotAHeading(line.to_string()));
    }
    let (hashes, title) = line.split_once(' ').unwrap_or((line, ""));
    Ok(Heading::new(hashes.len(), title))
}

/// Format a heading line; the level is clamped to at least 1.
pub fn make_heading(level: usize, title: &str) -> String {
    format!("{} {}", "#".repeat(level.max(1)), title)
}

/// Collect every heading in `lines`, in document order.
///
/// A level-1 heading is rejected: the document title is not a section.
pub fn find_sections(lines: &[&str]) -> Result<Vec<Heading>, HeadingError> {
    let mut sections = Vec::new();
    for line in lines {
        if is_heading(line) {
            if !line.starts_with("##") {
                return Err(HeadingError::TopLevelSection(line.to_string()));
            }
            sections.push(get_heading(line)?);
        }
    }
    Ok(sections)
}

/// GitHub-style anchor slug: lowercased, spaces hyphenated, `?` removed.
pub fn anchor_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-").replace('?', "")
}

/// Generate a nested Markdown link list for the given sections.
///
/// Nesting is relative to the shallowest level present; entries keep
/// document order.
pub fn make_toc(sections: &[Heading]) -> Vec<String> {
    let Some(outer) = sections.iter().map(|sec| sec.level).min() else {
        return Vec::new();
    };
    sections
        .iter()
        .map(|sec| {
            format!(
                "{}- [{}](#{})",
                "    ".repeat(sec.level - outer),
                sec.title,
                anchor_slug(&sec.title)
            )
        })
        .collect()
}
