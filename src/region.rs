//! Signal-backed display region
//!
//! Lets the renderer write straight into reactive state.

use framework_catalog::{DisplayRegion, RegionNode};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SignalRegion(pub RwSignal<Vec<RegionNode>>);

impl DisplayRegion for SignalRegion {
    fn clear(&mut self) {
        self.0.update(|nodes| nodes.clear());
    }

    fn append(&mut self, node: RegionNode) {
        self.0.update(|nodes| nodes.push(node));
    }

    /// Single `set`, so the list view rebuilds once per render
    fn replace(&mut self, nodes: Vec<RegionNode>) {
        self.0.set(nodes);
    }
}
