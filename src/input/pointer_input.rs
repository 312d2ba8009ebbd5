use crate::scene::NodeId;
use std::collections::HashSet;
use vek::vec::Vec2;

/// Pointer state tracked between events. The owner hit-tests the scene and
/// feeds the result in, this type only remembers what the pointer is over.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pub position: Vec2<f32>,
    pub button_held: bool,
    pub hovered: HashSet<NodeId>,
}

impl PointerInput {
    pub fn new() -> Self {
        PointerInput::default()
    }

    /// Moves the pointer to `position` where `hits` are the nodes under it.
    /// Returns the nodes the pointer left, in ascending id order.
    pub fn move_to(&mut self, position: Vec2<f32>, hits: &[NodeId]) -> Vec<NodeId> {
        self.position = position;

        let now: HashSet<NodeId> = hits.iter().cloned().collect();
        let mut left: Vec<NodeId> = self.hovered.difference(&now).cloned().collect();
        left.sort();

        self.hovered = now;
        left
    }

    pub fn press(&mut self) {
        self.button_held = true;
    }

    pub fn release(&mut self) {
        self.button_held = false;
    }

    /// Stops tracking a node, used when it is destroyed
    pub fn forget(&mut self, node: NodeId) {
        self.hovered.remove(&node);
    }
}
