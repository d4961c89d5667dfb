//! Entity descriptions handed over by the introspection collaborator.
//!
//! The converter never inspects source code itself. A language-specific
//! introspector resolves each code entity to a name, its raw docstring, its
//! kind, an optional recovered signature and, for containers, an ordered
//! list of already-resolved members, and serializes the result as JSON.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Module,
    Class,
    Function,
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Display name.
    pub name: String,
    pub kind: EntityKind,
    /// Raw documentation text; absent is treated as empty. For classes the
    /// introspector is expected to have appended the constructor docstring.
    #[serde(default)]
    pub docstring: Option<String>,
    /// Source-recovered signature: the full `name(args)` text for callables,
    /// the `(args)` suffix for classes.
    #[serde(default)]
    pub signature: Option<String>,
    /// Resolved members of a container entity, in export order.
    #[serde(default)]
    pub members: Vec<Entity>,
}

impl Entity {
    pub fn docstring_text(&self) -> &str {
        self.docstring.as_deref().unwrap_or("")
    }

    /// Members that are not `__special__` names.
    pub fn regular_members(&self) -> impl Iterator<Item = &Entity> {
        self.members
            .iter()
            .filter(|member| !(member.name.starts_with("__") && member.name.ends_with("__")))
    }
}
