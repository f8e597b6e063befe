use super::{PanelKind, SplitDirection};

/// Stable identifier of a layout node.
///
/// Split children derive their ids from the parent (`{id}-1`, `{id}-2`), so
/// ids stay readable and unique without a global counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PanelId(pub String);

impl PanelId {
    pub const ROOT: &'static str = "root";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn root() -> Self {
        Self(Self::ROOT.to_owned())
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Id given to the `n`-th child created by splitting this node.
    pub fn child(&self, n: usize) -> Self {
        Self(format!("{}-{}", self.0, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PanelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One node of the layout tree.
///
/// A node is either a leaf (no children, renders `kind`) or a container with
/// at least two children laid out along `direction`. `size` is the node's
/// share of its parent in percent; the root carries no size.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutNode {
    pub id: PanelId,
    pub kind: PanelKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Option<SplitDirection>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<LayoutNode>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: Option<u8>,
}

impl LayoutNode {
    pub fn leaf(id: impl Into<PanelId>, kind: PanelKind, size: Option<u8>) -> Self {
        Self {
            id: id.into(),
            kind,
            direction: None,
            children: Vec::new(),
            size,
        }
    }

    pub fn container(
        id: impl Into<PanelId>,
        direction: SplitDirection,
        children: Vec<LayoutNode>,
        size: Option<u8>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: PanelKind::Empty,
            direction: Some(direction),
            children,
            size,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: &PanelId) -> Option<&LayoutNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &PanelId) -> Option<&mut LayoutNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Visits every node in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a LayoutNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

impl From<String> for PanelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
