//! Negation frames and their role slots.
//!
//! A [`Frame`] is one detected negation event. It always carries a Target;
//! Focus and Negated are [`RoleSlot`]s that accept a single reference and
//! ignore every later one; Scope accumulates references in attach order.

use serde::{Deserialize, Serialize};

/// Name of the frames produced and compared by this workspace.
pub const NEGATION_FRAME_NAME: &str = "Negation";

/// The four annotation roles of a negation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// The negation marker itself ("nicht", "un", "los")
    Target,
    /// The token most directly emphasized by the negation
    Focus,
    /// The negated predicate or state
    Negated,
    /// Everything the negation covers
    Scope,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Target, Role::Focus, Role::Negated, Role::Scope];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Target => "Target",
            Role::Focus => "Focus",
            Role::Negated => "Negated",
            Role::Scope => "Scope",
        }
    }

    /// Suffix of the frame element id for this role. The target is not a
    /// frame element and has none.
    pub fn element_suffix(&self) -> Option<&'static str> {
        match self {
            Role::Target => None,
            Role::Focus => Some("_e1"),
            Role::Negated => Some("_e2"),
            Role::Scope => Some("_e3"),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A reference from a frame role to a node of the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeNode {
    /// Id of a terminal, splitword part or nonterminal
    pub idref: String,
    /// Whether `idref` names a splitword part
    #[serde(default)]
    pub is_split: bool,
}

impl FeNode {
    pub fn new(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            is_split: false,
        }
    }

    pub fn split(idref: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            is_split: true,
        }
    }
}

/// A role that holds at most one reference.
///
/// The first [`RoleSlot::set_once`] wins; later calls leave the slot untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleSlot {
    Empty,
    Set(FeNode),
}

impl Default for RoleSlot {
    fn default() -> Self {
        RoleSlot::Empty
    }
}

impl RoleSlot {
    /// Store `node` if the slot is empty. Returns whether it was stored.
    pub fn set_once(&mut self, node: FeNode) -> bool {
        match self {
            RoleSlot::Empty => {
                *self = RoleSlot::Set(node);
                true
            }
            RoleSlot::Set(_) => false,
        }
    }

    pub fn get(&self) -> Option<&FeNode> {
        match self {
            RoleSlot::Empty => None,
            RoleSlot::Set(node) => Some(node),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, RoleSlot::Set(_))
    }
}

/// One negation event within a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    id: String,
    name: String,
    target: FeNode,
    #[serde(default)]
    focus: RoleSlot,
    #[serde(default)]
    negated: RoleSlot,
    #[serde(default)]
    scope: Vec<FeNode>,
}

impl Frame {
    /// Create a Negation frame. The target is fixed for the frame's lifetime.
    pub fn new(id: impl Into<String>, target: FeNode) -> Self {
        Self::named(id, NEGATION_FRAME_NAME, target)
    }

    /// Create a frame with an arbitrary name (gold corpora carry other frames too).
    pub fn named(id: impl Into<String>, name: impl Into<String>, target: FeNode) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target,
            focus: RoleSlot::Empty,
            negated: RoleSlot::Empty,
            scope: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_negation(&self) -> bool {
        self.name == NEGATION_FRAME_NAME
    }

    pub fn target(&self) -> &FeNode {
        &self.target
    }

    pub fn focus(&self) -> Option<&FeNode> {
        self.focus.get()
    }

    pub fn negated(&self) -> Option<&FeNode> {
        self.negated.get()
    }

    pub fn scope(&self) -> &[FeNode] {
        &self.scope
    }

    /// Attach a reference to a role.
    ///
    /// Target never changes after construction, Focus and Negated keep their
    /// first reference, Scope appends. Returns whether the reference was stored.
    pub fn attach(&mut self, role: Role, node: FeNode) -> bool {
        match role {
            Role::Target => false,
            Role::Focus => self.focus.set_once(node),
            Role::Negated => self.negated.set_once(node),
            Role::Scope => {
                self.scope.push(node);
                true
            }
        }
    }

    /// All references held by a role, in attach order.
    pub fn references(&self, role: Role) -> Vec<&FeNode> {
        match role {
            Role::Target => vec![&self.target],
            Role::Focus => self.focus.get().into_iter().collect(),
            Role::Negated => self.negated.get().into_iter().collect(),
            Role::Scope => self.scope.iter().collect(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Target => true,
            Role::Focus => self.focus.is_set(),
            Role::Negated => self.negated.is_set(),
            Role::Scope => !self.scope.is_empty(),
        }
    }

    /// Frame element id for a role, e.g. `"12_f0_e3"` for the Scope of `"12_f0"`.
    pub fn element_id(&self, role: Role) -> Option<String> {
        role.element_suffix()
            .map(|suffix| format!("{}{}", self.id, suffix))
    }
}
