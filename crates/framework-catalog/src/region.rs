//! Display Region
//!
//! The page area whose children are fully owned by the renderer.

use crate::models::FrameworkCard;

/// A single child of the display region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionNode {
    Card(FrameworkCard),
    Message(String),
}

impl RegionNode {
    pub fn is_card(&self) -> bool {
        matches!(self, RegionNode::Card(_))
    }
}

/// Container the renderer writes into
pub trait DisplayRegion {
    /// Remove every child
    fn clear(&mut self);
    /// Add a child after the existing ones
    fn append(&mut self, node: RegionNode);

    /// Swap in a whole new set of children
    fn replace(&mut self, nodes: Vec<RegionNode>) {
        self.clear();
        for node in nodes {
            self.append(node);
        }
    }
}

impl DisplayRegion for Vec<RegionNode> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, node: RegionNode) {
        self.push(node);
    }

    fn replace(&mut self, nodes: Vec<RegionNode>) {
        *self = nodes;
    }
}

impl<R: DisplayRegion + ?Sized> DisplayRegion for &mut R {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, node: RegionNode) {
        (**self).append(node);
    }

    fn replace(&mut self, nodes: Vec<RegionNode>) {
        (**self).replace(nodes);
    }
}
