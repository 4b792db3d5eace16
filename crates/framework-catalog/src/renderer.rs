//! Renderer
//!
//! Replaces the display region's contents with framework cards or the
//! error message.

use crate::models::{Framework, FrameworkCard};
use crate::region::{DisplayRegion, RegionNode};

/// Fixed message shown when loading fails
pub const ERROR_MESSAGE: &str = "Error loading frameworks. Please try again later.";

pub struct Renderer<R: DisplayRegion> {
    region: R,
}

impl<R: DisplayRegion> Renderer<R> {
    pub fn new(region: R) -> Self {
        Self { region }
    }

    /// Render one card per framework, in input order.
    /// An empty list leaves the region empty.
    pub fn show(&mut self, frameworks: &[Framework]) {
        let cards = frameworks
            .iter()
            .map(|framework| RegionNode::Card(FrameworkCard::from(framework)))
            .collect();
        self.region.replace(cards);
    }

    pub fn show_error(&mut self) {
        self.region.replace(vec![RegionNode::Message(ERROR_MESSAGE.to_string())]);
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn into_region(self) -> R {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Vec<RegionNode> {
        Vec::new()
    }

    fn cards(region: &[RegionNode]) -> Vec<&FrameworkCard> {
        region
            .iter()
            .filter_map(|node| match node {
                RegionNode::Card(card) => Some(card),
                RegionNode::Message(_) => None,
            })
            .collect()
    }

    fn line_texts(card: &FrameworkCard) -> Vec<String> {
        card.lines().iter().map(|line| line.text()).collect()
    }

    /// Counts writes; clear/append each count as one
    #[derive(Default)]
    struct CountingRegion {
        nodes: Vec<RegionNode>,
        writes: usize,
    }

    impl DisplayRegion for CountingRegion {
        fn clear(&mut self) {
            self.writes += 1;
            self.nodes.clear();
        }

        fn append(&mut self, node: RegionNode) {
            self.writes += 1;
            self.nodes.push(node);
        }

        fn replace(&mut self, nodes: Vec<RegionNode>) {
            self.writes += 1;
            self.nodes = nodes;
        }
    }

    #[test]
    fn test_show_full_record() {
        let mut renderer = Renderer::new(empty());
        renderer.show(&[Framework::new("Data Act")
            .with_abbreviation("DA")
            .with_category("Privacy")
            .with_legislator("Jane Doe")]);

        let region = renderer.into_region();
        assert_eq!(region.len(), 1);
        let card = cards(&region)[0];
        assert_eq!(card.heading, "Data Act (DA)");
        assert_eq!(line_texts(card), vec!["Category: Privacy", "Legislator: Jane Doe"]);
    }

    #[test]
    fn test_show_minimal_record() {
        let mut renderer = Renderer::new(empty());
        renderer.show(&[Framework::new("Draft Bill")]);

        let card = cards(renderer.region())[0];
        assert_eq!(card.heading, "Draft Bill");
        assert!(!card.heading.contains('('));
        assert_eq!(line_texts(card), vec!["Category: N/A", "Legislator: N/A"]);
    }

    #[test]
    fn test_show_preserves_order() {
        let items: Vec<Framework> = ["C", "A", "B", "A"]
            .iter()
            .map(|t| Framework::new(*t))
            .collect();
        let mut renderer = Renderer::new(empty());
        renderer.show(&items);

        let headings: Vec<&str> = cards(renderer.region())
            .iter()
            .map(|c| c.heading.as_str())
            .collect();
        assert_eq!(headings, vec!["C", "A", "B", "A"]);
    }

    #[test]
    fn test_show_empty_clears_region() {
        let mut renderer = Renderer::new(vec![RegionNode::Message("stale".into())]);
        renderer.show(&[]);
        assert!(renderer.region().is_empty());
    }

    #[test]
    fn test_show_is_idempotent() {
        let items = vec![Framework::new("One"), Framework::new("Two").with_abbreviation("2")];
        let mut renderer = Renderer::new(empty());
        renderer.show(&items);
        let first = renderer.region().clone();
        renderer.show(&items);
        assert_eq!(renderer.region(), &first);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_show_error_replaces_cards() {
        let mut renderer = Renderer::new(empty());
        renderer.show(&[Framework::new("One"), Framework::new("Two")]);
        renderer.show_error();

        let region = renderer.into_region();
        assert_eq!(region, vec![RegionNode::Message(ERROR_MESSAGE.to_string())]);
        assert!(cards(&region).is_empty());
    }

    #[test]
    fn test_renderer_over_borrowed_region() {
        let mut region = empty();
        Renderer::new(&mut region).show(&[Framework::new("Borrowed")]);
        assert_eq!(region.len(), 1);
        assert!(region[0].is_card());
    }

    #[test]
    fn test_show_writes_region_once() {
        let items = vec![Framework::new("One"), Framework::new("Two"), Framework::new("Three")];
        let mut renderer = Renderer::new(CountingRegion::default());

        renderer.show(&items);
        assert_eq!(renderer.region().writes, 1);
        assert_eq!(renderer.region().nodes.len(), 3);

        renderer.show_error();
        assert_eq!(renderer.region().writes, 2);
        assert_eq!(renderer.region().nodes.len(), 1);
    }

    #[test]
    fn test_default_replace_goes_through_clear_and_append() {
        struct PlainRegion(Vec<RegionNode>);

        impl DisplayRegion for PlainRegion {
            fn clear(&mut self) {
                self.0.clear();
            }

            fn append(&mut self, node: RegionNode) {
                self.0.push(node);
            }
        }

        let mut renderer = Renderer::new(PlainRegion(vec![RegionNode::Message("stale".into())]));
        renderer.show(&[Framework::new("A"), Framework::new("B")]);
        let headings: Vec<&str> = cards(&renderer.region().0)
            .iter()
            .map(|c| c.heading.as_str())
            .collect();
        assert_eq!(headings, vec!["A", "B"]);
    }
}
