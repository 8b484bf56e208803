//! Syntactic-context classification for marker accesses.
//!
//! The guard and branch synthesizers only need to know where a marker
//! member access sits relative to its neighbors: whether it is being
//! called, and whether its result flows into a further member access.
//! Absent parent or grandparent links classify as false, never as errors.

use exis_ast::cursor::{AncestorLink, Edge, NodeKind};

/// Immediate ancestry of a marker member access, as seen from the node
/// itself: its direct parent and that parent's parent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighborhood {
    pub parent: Option<AncestorLink>,
    pub grandparent: Option<AncestorLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The parent is a call and the marker node is its callee.
    pub is_callee: bool,
    /// The parent is a member access continuing the chain over the marker
    /// node.
    pub child_exists: bool,
    pub parent_exists: bool,
    /// The grandparent is a member access continuing the chain over the
    /// parent. Decides the failure shape for call-position markers.
    pub scope_is_accessed: bool,
}

impl Classification {
    /// Whether the rewritten value flows into a further access, i.e. the
    /// marker is non-terminal in its chain.
    pub fn chain_continues(&self) -> bool {
        if self.is_callee {
            self.scope_is_accessed
        } else {
            self.child_exists
        }
    }
}

fn continues_member(link: Option<AncestorLink>) -> bool {
    matches!(
        link,
        Some(AncestorLink {
            kind: NodeKind::Member,
            edge: Edge::MemberObject,
        })
    )
}

/// Classifies a marker access from its local neighborhood. Pure; no
/// side effects.
pub fn classify(neighborhood: &Neighborhood) -> Classification {
    let is_callee = matches!(
        neighborhood.parent,
        Some(AncestorLink {
            kind: NodeKind::Call,
            edge: Edge::Callee,
        })
    );
    let parent_exists = neighborhood.parent.is_some();

    Classification {
        is_callee,
        child_exists: continues_member(neighborhood.parent),
        parent_exists,
        scope_is_accessed: parent_exists && continues_member(neighborhood.grandparent),
    }
}
