//! doc2md: lightweight docstring to GitHub-flavored Markdown converter.
//!
//! Turns the raw documentation text attached to code entities into Markdown
//! suitable for a `README.md`. The pipeline is a line-oriented state machine
//! over the docstring:
//!
//! - **Whitespace normalization** - common-indent removal and
//!   cleandoc-style block trimming
//! - **Headings and sections** - ATX heading parsing, section discovery,
//!   and table-of-contents generation with GitHub anchor slugs
//! - **Code blocks** - interactive transcripts and shell commands detected
//!   and fenced, with prompt stripping for output-free transcripts
//! - **Field directives** - `:param`/`:return`/`:throw` lines rewritten as
//!   bullets with type cross-reference links
//! - **Entity rendering** - document assembly for callables, classes, and
//!   whole modules, driven by introspector-provided entity descriptions
//!
//! # Quick Start
//!
//! ```rust
//! use doc2md::{RenderOptions, render_docstring};
//!
//! let md = render_docstring("Adds two numbers.", "add", RenderOptions::default()).unwrap();
//! assert_eq!(md, "# add\n\nAdds two numbers.\n");
//! ```

// Whitespace normalization
pub mod text;

// Heading parsing, sections, and TOC
pub mod heading;

// The line-oriented transformer and its code/directive leaves
pub mod transform;

// Introspection-collaborator boundary types
pub mod entity;

// Document assembly
pub mod render;

// Re-export the public surface
pub use entity::{Entity, EntityKind};
pub use heading::{
    Heading, HeadingError, anchor_slug, find_sections, get_heading, is_heading, make_heading,
    make_toc,
};
pub use render::{
    RenderError, RenderOptions, class_to_md, doc_to_md, doc_to_md_with_sections, module_to_md,
    render_docstring,
};
pub use text::{doctrim, unindent};
pub use transform::transform_lines;
