//! Top-level document assembly.
//!
//! Composes the leaf components into full Markdown documents: a generic
//! docstring renderer, kind-aware variants for callables and classes, and a
//! whole-module API listing. Each render is a pure function of its input
//! text and title; members of a container are rendered sequentially so the
//! aggregated output and TOC keep document order.

use crate::entity::{Entity, EntityKind};
use crate::heading::{self, Heading, HeadingError};
use crate::text;
use crate::transform;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Heading(#[from] HeadingError),
    #[error("no renderer for entity kind {0:?}")]
    UnsupportedKind(EntityKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Minimum heading level for the rendered document.
    pub min_level: usize,
    /// Whether to emit a table of contents.
    pub toc: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self {
            min_level: 1,
            toc: true,
        }
    }

    pub fn min_level(mut self, level: usize) -> Self {
        self.min_level = level;
        self
    }

    pub fn toc(mut self, toc: bool) -> Self {
        self.toc = toc;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A trimmed docstring with its sections and the heading shift required to
/// embed it at `min_level`.
struct Prepared {
    lines: Vec<String>,
    sections: Vec<Heading>,
    level: usize,
    shift: usize,
}

fn prepare(docstring: &str, min_level: usize) -> Result<Prepared, HeadingError> {
    let trimmed = text::doctrim(docstring);
    let lines: Vec<String> = trimmed.split('\n').map(str::to_string).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut sections = heading::find_sections(&refs)?;

    let mut level = sections
        .iter()
        .map(|sec| sec.level)
        .min()
        .unwrap_or(min_level);
    let mut shift = 0;
    if level < min_level {
        shift = min_level - level;
        level = min_level;
        for sec in &mut sections {
            sec.level += shift;
        }
    }

    Ok(Prepared {
        lines,
        sections,
        level,
        shift,
    })
}

/// Emit the document: heading, leading prose up to the first field
/// directive, optional TOC, then the transformed body.
fn assemble(
    prepared: Prepared,
    title: &str,
    level: usize,
    toc: bool,
) -> Result<(Vec<String>, Vec<Heading>), HeadingError> {
    let Prepared {
        lines,
        sections,
        shift,
        ..
    } = prepared;

    let mut md = vec![heading::make_heading(level, title), String::new()];

    let body_start = lines
        .iter()
        .position(|line| line.trim_start().starts_with(':'))
        .unwrap_or(lines.len());
    for line in &lines[..body_start] {
        md.push(line.trim_start().to_string());
    }

    if toc {
        md.extend(heading::make_toc(&sections));
    }

    let body: Vec<&str> = lines[body_start..].iter().map(String::as_str).collect();
    md.extend(transform::transform_lines(&body, shift)?);

    Ok((md, sections))
}

/// Render a bare docstring as a standalone Markdown document.
pub fn render_docstring(
    docstring: &str,
    title: &str,
    opts: RenderOptions,
) -> Result<String, RenderError> {
    let prepared = prepare(docstring, opts.min_level)?;
    let level = prepared.level;
    let (md, _) = assemble(prepared, title, level, opts.toc)?;
    Ok(md.join("\n"))
}

/// Render a callable or class entity, returning the Markdown lines together
/// with the accumulated section list for composition by a caller.
pub fn doc_to_md_with_sections(
    entity: &Entity,
    opts: RenderOptions,
) -> Result<(Vec<String>, Vec<Heading>), RenderError> {
    tracing::debug!(name = %entity.name, kind = ?entity.kind, "rendering entity");
    let prepared = prepare(entity.docstring_text(), opts.min_level)?;
    let mut level = prepared.level;

    let mut title = match entity.kind {
        EntityKind::Function | EntityKind::Method => entity
            .signature
            .clone()
            .unwrap_or_else(|| entity.name.clone()),
        EntityKind::Class => {
            // Classes carry their constructor signature and nest their
            // docstring one level deeper than the computed level.
            level += 1;
            match &entity.signature {
                Some(sig) => format!("{}{}", entity.name, sig),
                None => entity.name.clone(),
            }
        }
        EntityKind::Module => return Err(RenderError::UnsupportedKind(EntityKind::Module)),
    };
    if title.starts_with('_') {
        title.insert(0, '\\');
    }

    Ok(assemble(prepared, &title, level, opts.toc)?)
}

/// Render a callable or class entity to a Markdown string.
pub fn doc_to_md(entity: &Entity, opts: RenderOptions) -> Result<String, RenderError> {
    let (md, _) = doc_to_md_with_sections(entity, opts)?;
    Ok(md.join("\n"))
}

/// Render a class and all of its regular members.
///
/// Members render at `min_level + 2`, in the order the introspector listed
/// them; their sections accumulate into the class's section list.
pub fn class_to_md(
    entity: &Entity,
    opts: RenderOptions,
) -> Result<(Vec<String>, Vec<Heading>), RenderError> {
    let (mut md, mut sections) = doc_to_md_with_sections(entity, opts.toc(false))?;
    for member in entity.regular_members() {
        let member_opts = RenderOptions::new()
            .min_level(opts.min_level + 2)
            .toc(false);
        let (member_md, member_sections) = doc_to_md_with_sections(member, member_opts)?;
        md.extend(member_md);
        md.push(String::new());
        sections.extend(member_sections);
    }
    Ok((md, sections))
}

/// Render a whole module: headline, TOC, transformed module docstring, then
/// aggregated `Class` and `Functions` sections built from the export list.
pub fn module_to_md(
    entity: &Entity,
    title: &str,
    opts: RenderOptions,
) -> Result<String, RenderError> {
    if entity.kind != EntityKind::Module {
        return Err(RenderError::UnsupportedKind(entity.kind));
    }
    tracing::debug!(name = %entity.name, members = entity.members.len(), "rendering module");

    let trimmed = text::doctrim(entity.docstring_text());
    let mut lines: Vec<&str> = trimmed.split('\n').collect();
    let mut sections = heading::find_sections(&lines)?;
    let level = sections
        .iter()
        .map(|sec| sec.level)
        .min()
        .map(|min| min - 1)
        .unwrap_or(1);

    let mut class_md: Vec<String> = Vec::new();
    let mut class_sections: Vec<Heading> = Vec::new();
    let mut api_md: Vec<String> = Vec::new();
    let mut api_sections: Vec<Heading> = Vec::new();

    for member in &entity.members {
        match member.kind {
            EntityKind::Class => {
                let (md, secs) = class_to_md(member, RenderOptions::new().min_level(level).toc(false))?;
                class_md.extend(md);
                class_sections.extend(secs);
            }
            _ if !member.docstring_text().is_empty() => {
                api_sections.push(Heading::new(level + 2, member.name.clone()));
                api_md.push(String::new());
                api_md.push(String::new());
                let (md, secs) = doc_to_md_with_sections(
                    member,
                    RenderOptions::new().min_level(level + 2).toc(false),
                )?;
                api_md.extend(md);
                api_sections.extend(secs);
            }
            _ => {}
        }
    }

    // TOC entries for the aggregate sections actually emitted below.
    if !class_md.is_empty() {
        sections.push(Heading::new(level + 1, "Class"));
    }
    if !api_md.is_empty() {
        sections.push(Heading::new(level + 1, "Functions"));
        sections.extend(api_sections.iter().cloned());
    }

    let first = lines.remove(0);
    let mut md = vec![
        heading::make_heading(level, title),
        String::new(),
        first.to_string(),
        String::new(),
    ];
    if opts.toc {
        md.extend(heading::make_toc(&sections));
    }
    md.extend(transform::transform_lines(&lines, 0)?);

    if !class_md.is_empty() {
        md.push(String::new());
        md.push(String::new());
        md.push(heading::make_heading(level, "Class"));
        if opts.toc {
            md.push(String::new());
            md.extend(heading::make_toc(&class_sections));
        }
        md.extend(class_md);
    }

    if !api_md.is_empty() {
        md.push(String::new());
        md.push(String::new());
        md.push(heading::make_heading(level, "Functions"));
        if opts.toc {
            md.push(String::new());
            md.extend(heading::make_toc(&api_sections));
        }
        md.extend(api_md);
    }

    Ok(md.join("\n"))
}
