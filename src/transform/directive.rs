//! Structured field directives rewritten as Markdown bullets.
//!
//! Lines whose left-stripped text starts with `:param`, `:return` or
//! `:throw` become bullet list entries, with recognized type names replaced
//! by links to their reference documentation.

/// Known type names and their documentation links, in match order.
///
/// Matching is a literal substring search with no word-boundary guard, so a
/// type name embedded in a longer identifier also matches. Existing output
/// depends on that, so it stays.
const TYPE_LINKS: &[(&str, &str)] = &[
    (
        "bool",
        "https://docs.python.org/2/library/stdtypes.html#boolean-values",
    ),
    (
        "str",
        "https://docs.python.org/2/library/stdtypes.html#sequence-types-str-unicode-list-tuple-bytearray-buffer-xrange",
    ),
    (
        "int",
        "https://docs.python.org/2/library/stdtypes.html#numeric-types-int-float-long-complex",
    ),
    (
        "float",
        "https://docs.python.org/2/library/stdtypes.html#numeric-types-int-float-long-complex",
    ),
    (
        "list",
        "https://docs.python.org/2/tutorial/datastructures.html#more-on-lists",
    ),
    ("Exception", "https://docs.python.org/2/tutorial/errors.html"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Param,
    Return,
    Throw,
}

impl Directive {
    /// Which directive, if any, a left-stripped line carries.
    pub fn detect(trimmed: &str) -> Option<Self> {
        if trimmed.starts_with(":param") {
            Some(Directive::Param)
        } else if trimmed.starts_with(":throw") {
            Some(Directive::Throw)
        } else if trimmed.starts_with(":return") {
            Some(Directive::Return)
        } else {
            None
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Directive::Param => ":param",
            Directive::Return => ":return",
            Directive::Throw => ":throw",
        }
    }

    fn bullet(self) -> &'static str {
        match self {
            Directive::Param => "-",
            Directive::Return => "- return",
            Directive::Throw => "- throw",
        }
    }

    /// `:return` and `:throw` bullets are set off from preceding prose by a
    /// blank line; `:param` bullets are not.
    fn wants_separator(self) -> bool {
        !matches!(self, Directive::Param)
    }
}

/// Replace the first occurrence of each known type name with a Markdown link.
///
/// Matches are located against the pre-substitution text, so a link URL
/// inserted for one name is never re-matched by a later name in the table.
fn link_types(text: &str) -> String {
    let mut matches: Vec<(usize, &str, &str)> = Vec::new();
    for &(name, url) in TYPE_LINKS {
        if let Some(pos) = text.find(name) {
            let end = pos + name.len();
            let overlaps = matches
                .iter()
                .any(|&(start, other, _)| pos < start + other.len() && start < end);
            if !overlaps {
                matches.push((pos, name, url));
            }
        }
    }
    matches.sort_by_key(|&(pos, _, _)| pos);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (pos, name, url) in matches {
        out.push_str(&text[cursor..pos]);
        out.push('[');
        out.push_str(name);
        out.push_str("](");
        out.push_str(url);
        out.push(')');
        cursor = pos + name.len();
    }
    out.push_str(&text[cursor..]);
    out
}

/// Rewrite a directive line into its Markdown bullet form.
///
/// Returns one line for `:param`, or a blank line plus the bullet for
/// `:return` and `:throw`. The bullet is left-stripped.
pub fn translate(line: &str, directive: Directive) -> Vec<String> {
    let replaced = line.replacen(directive.marker(), directive.bullet(), 1);
    let bullet = link_types(&replaced).trim_start().to_string();
    if directive.wants_separator() {
        vec![String::new(), bullet]
    } else {
        vec![bullet]
    }
}
