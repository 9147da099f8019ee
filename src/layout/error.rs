use thiserror::Error;

use crate::ir::GroupId;

use super::VisualId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Members with different group signatures were put into one label.
    /// Only reachable when labels are assembled by hand.
    #[error("all members in a label must have identical group ids (expected {expected:?}, got {found:?} for member `{member}`)")]
    GroupMismatch {
        expected: Vec<GroupId>,
        found: Vec<GroupId>,
        member: String,
    },
    #[error("a label needs at least one member")]
    EmptyLabel,
    #[error("group `{id}` has no labels to enclose")]
    EmptyGroup { id: GroupId },
    #[error("render surface has no item for visual handle {0:?}")]
    UnknownVisual(VisualId),
}
