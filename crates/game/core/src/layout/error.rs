//! Layout operation errors.

use crate::error::{ErrorSeverity, GameError};
use crate::layout::PanelId;

/// Errors produced by [`LayoutTree`](super::LayoutTree) operations.
///
/// Every failing operation leaves the tree exactly as it was, so hosts may
/// simply log these and carry on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// No node with the given id exists in the tree.
    #[error("panel '{0}' not found")]
    NotFound(PanelId),

    /// The node already has children; only leaves can be split.
    #[error("panel '{0}' is already split")]
    AlreadySplit(PanelId),

    /// The node is a leaf where a container was required.
    #[error("panel '{0}' is not a container")]
    NotAContainer(PanelId),

    /// Splitting would create an id that is already in use.
    #[error("panel id '{0}' is already in use")]
    DuplicateId(PanelId),

    /// Resize request does not describe a valid size distribution.
    #[error("invalid sizes for panel '{panel}': {reason}")]
    InvalidSizes {
        panel: PanelId,
        reason: &'static str,
    },

    /// A structural invariant does not hold.
    #[error("layout invariant violated at '{panel}': {reason}")]
    InvalidTree {
        panel: PanelId,
        reason: &'static str,
    },
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        use LayoutError::*;
        match self {
            NotFound(_) | AlreadySplit(_) | NotAContainer(_) | InvalidSizes { .. } => {
                ErrorSeverity::Validation
            }
            DuplicateId(_) | InvalidTree { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use LayoutError::*;
        match self {
            NotFound(_) => "LAYOUT_NOT_FOUND",
            AlreadySplit(_) => "LAYOUT_ALREADY_SPLIT",
            NotAContainer(_) => "LAYOUT_NOT_A_CONTAINER",
            DuplicateId(_) => "LAYOUT_DUPLICATE_ID",
            InvalidSizes { .. } => "LAYOUT_INVALID_SIZES",
            InvalidTree { .. } => "LAYOUT_INVALID_TREE",
        }
    }
}
