use std::collections::HashSet;

use super::{LayoutError, LayoutNode, PanelId, PanelKind, SplitDirection};

/// Resizable panel tree backing the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutTree {
    root: LayoutNode,
}

impl LayoutTree {
    /// Smallest share a panel may be resized to, in percent.
    pub const MIN_PANEL_SIZE: u8 = 20;
    /// Size given to both halves of a fresh split.
    pub const SPLIT_SIZE: u8 = 50;

    /// Builds a tree from an existing root, checking every invariant.
    pub fn from_root(root: LayoutNode) -> Result<Self, LayoutError> {
        let tree = Self { root };
        tree.validate()?;
        Ok(tree)
    }

    /// A single empty leaf keyed `root`.
    pub fn empty() -> Self {
        Self {
            root: LayoutNode::leaf(PanelId::root(), PanelKind::Empty, None),
        }
    }

    pub fn root(&self) -> &LayoutNode {
        &self.root
    }

    pub fn find(&self, id: &PanelId) -> Option<&LayoutNode> {
        self.root.find(id)
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.find(id).is_some()
    }

    /// Leaves in render order (left-to-right, top-to-bottom).
    pub fn leaves(&self) -> Vec<&LayoutNode> {
        let mut out = Vec::new();
        self.root.walk(&mut |node| {
            if node.is_leaf() {
                out.push(node);
            }
        });
        out
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.root.walk(&mut |_| count += 1);
        count
    }

    /// Splits a leaf into a container holding two half-sized children.
    ///
    /// The first child keeps the leaf's content, the second starts empty.
    /// Splitting a node that already has children is rejected with
    /// [`LayoutError::AlreadySplit`] and leaves the tree unchanged.
    pub fn split(&mut self, id: &PanelId, direction: SplitDirection) -> Result<(), LayoutError> {
        let target = self
            .find(id)
            .ok_or_else(|| LayoutError::NotFound(id.clone()))?;
        if !target.is_leaf() {
            return Err(LayoutError::AlreadySplit(id.clone()));
        }
        let first = id.child(1);
        let second = id.child(2);
        for child in [&first, &second] {
            if self.contains(child) {
                return Err(LayoutError::DuplicateId(child.clone()));
            }
        }

        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| LayoutError::NotFound(id.clone()))?;

        let previous = core::mem::take(&mut node.kind);
        node.direction = Some(direction);
        node.children = vec![
            LayoutNode::leaf(first, previous, Some(Self::SPLIT_SIZE)),
            LayoutNode::leaf(second, PanelKind::Empty, Some(Self::SPLIT_SIZE)),
        ];
        tracing::debug!(panel = %id, %direction, "split panel");
        Ok(())
    }

    /// Replaces the content shown by a node. The tree shape is untouched.
    pub fn set_kind(&mut self, id: &PanelId, kind: PanelKind) -> Result<(), LayoutError> {
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| LayoutError::NotFound(id.clone()))?;
        node.kind = kind;
        Ok(())
    }

    /// Removes a node and its subtree.
    ///
    /// Containers left with a single child collapse into that child, which
    /// inherits the container's size. A child promoted to the root is re-keyed
    /// to `root`; removing everything leaves an empty root leaf.
    pub fn remove(&mut self, id: &PanelId) -> Result<(), LayoutError> {
        if !self.contains(id) {
            return Err(LayoutError::NotFound(id.clone()));
        }

        let root = core::mem::replace(&mut self.root, Self::empty().root);
        self.root = match prune(root, id) {
            Some(mut node) => {
                if !node.id.is_root() {
                    node.id = PanelId::root();
                }
                node.size = None;
                node
            }
            None => Self::empty().root,
        };
        tracing::debug!(panel = %id, "removed panel");
        Ok(())
    }

    /// Assigns new sizes to the children of a container.
    pub fn resize(&mut self, id: &PanelId, sizes: &[u8]) -> Result<(), LayoutError> {
        let node = self
            .root
            .find_mut(id)
            .ok_or_else(|| LayoutError::NotFound(id.clone()))?;
        if node.is_leaf() {
            return Err(LayoutError::NotAContainer(id.clone()));
        }
        let invalid = |reason| LayoutError::InvalidSizes {
            panel: id.clone(),
            reason,
        };
        if sizes.len() != node.children.len() {
            return Err(invalid("size count does not match child count"));
        }
        if sizes.iter().any(|size| *size < Self::MIN_PANEL_SIZE) {
            return Err(invalid("panel smaller than minimum size"));
        }
        if sizes.iter().map(|size| u32::from(*size)).sum::<u32>() != 100 {
            return Err(invalid("sizes must sum to 100"));
        }

        for (child, size) in node.children.iter_mut().zip(sizes) {
            child.size = Some(*size);
        }
        Ok(())
    }

    /// Checks the structural invariants of the whole tree.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.root.size.is_some() {
            return Err(LayoutError::InvalidTree {
                panel: self.root.id.clone(),
                reason: "root must not carry a size",
            });
        }
        let mut seen = HashSet::new();
        validate_node(&self.root, &mut seen)
    }
}

impl Default for LayoutTree {
    /// Two side-by-side panels: monster hunts and inventory.
    fn default() -> Self {
        Self {
            root: LayoutNode::container(
                PanelId::root(),
                SplitDirection::Horizontal,
                vec![
                    LayoutNode::leaf("panel-1", PanelKind::MonsterHunts, Some(Self::SPLIT_SIZE)),
                    LayoutNode::leaf("panel-2", PanelKind::Inventory, Some(Self::SPLIT_SIZE)),
                ],
                None,
            ),
        }
    }
}

/// Rebuilds `node` without the subtree rooted at `target`.
fn prune(node: LayoutNode, target: &PanelId) -> Option<LayoutNode> {
    if &node.id == target {
        return None;
    }
    if node.is_leaf() {
        return Some(node);
    }

    let LayoutNode {
        id,
        kind,
        direction,
        children,
        size,
    } = node;
    let before = children.len();
    let mut remaining: Vec<LayoutNode> = children
        .into_iter()
        .filter_map(|child| prune(child, target))
        .collect();

    match remaining.len() {
        0 => None,
        1 => {
            let mut only = remaining.remove(0);
            only.size = size;
            Some(only)
        }
        n => {
            if n != before {
                normalize_sizes(&mut remaining);
            }
            Some(LayoutNode {
                id,
                kind,
                direction,
                children: remaining,
                size,
            })
        }
    }
}

/// Rescales sibling sizes proportionally so they sum to 100 again.
fn normalize_sizes(children: &mut [LayoutNode]) {
    let total: u32 = children
        .iter()
        .map(|child| u32::from(child.size.unwrap_or(0)))
        .sum();
    let count = children.len() as u32;
    let mut assigned = 0u32;
    let last = children.len() - 1;
    for (index, child) in children.iter_mut().enumerate() {
        let share = if index == last {
            100 - assigned
        } else if total == 0 {
            100 / count
        } else {
            u32::from(child.size.unwrap_or(0)) * 100 / total
        };
        assigned += share;
        child.size = Some(share as u8);
    }
}

fn validate_node<'a>(node: &'a LayoutNode, seen: &mut HashSet<&'a PanelId>) -> Result<(), LayoutError> {
    let invalid = |reason| LayoutError::InvalidTree {
        panel: node.id.clone(),
        reason,
    };
    if !seen.insert(&node.id) {
        return Err(LayoutError::DuplicateId(node.id.clone()));
    }

    match node.children.len() {
        0 => {
            if node.direction.is_some() {
                return Err(invalid("leaf must not carry a direction"));
            }
            Ok(())
        }
        1 => Err(invalid("container with a single child")),
        _ => {
            if node.direction.is_none() {
                return Err(invalid("container without a direction"));
            }
            let mut sum = 0u32;
            for child in &node.children {
                let size = child.size.ok_or_else(|| invalid("child without a size"))?;
                sum += u32::from(size);
            }
            if sum != 100 {
                return Err(invalid("child sizes do not sum to 100"));
            }
            for child in &node.children {
                validate_node(child, seen)?;
            }
            Ok(())
        }
    }
}
