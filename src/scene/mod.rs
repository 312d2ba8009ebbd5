//! The collaborators a widget needs from its host scene graph.
//!
//! A host engine implements these traits on its own node handles. Handles are
//! expected to be cheap references into the host's graph, so the same node can
//! be reached both from the widget that owns it and from the host while it
//! dispatches pointer events.

pub mod headless;

use crate::input::PointerEvent;
use crate::menu::TextStyle;
use failure::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use vek::vec::Extent2;
use vek::vec::Vec2;

/// Identifies a node inside a scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Returned when subscribing to pointer events, used to unsubscribe again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub node: NodeId,
    pub id: u64,
}

/// A pointer handler receives the image the event was delivered to
pub type PointerHandler<I> = Box<dyn FnMut(&mut I) -> Result<(), Error>>;

pub trait SceneNode {
    fn id(&self) -> NodeId;

    /// Position relative to the parent node, or to the scene for root nodes
    fn position(&self) -> Result<Vec2<f32>, Error>;

    fn destroy(&mut self) -> Result<(), Error>;
}

/// A node grouping other nodes, children are placed relative to it
pub trait ContainerNode: SceneNode {
    fn add<N: SceneNode>(&mut self, child: &N) -> Result<(), Error>;
}

pub trait ImageNode: SceneNode + Sized {
    fn set_texture(&mut self, key: &str) -> Result<(), Error>;

    fn texture(&self) -> Result<String, Error>;

    /// Scales the image so it is displayed at exactly `size`, the texture itself is untouched
    fn set_display_size(&mut self, size: Extent2<f32>) -> Result<(), Error>;

    fn display_size(&self) -> Result<Extent2<f32>, Error>;

    /// The size of the current texture frame, before any scaling
    fn natural_size(&self) -> Result<Extent2<f32>, Error>;

    /// Enables hit-testing against the displayed bounds
    fn set_interactive(&mut self) -> Result<(), Error>;

    fn is_interactive(&self) -> Result<bool, Error>;

    fn on(&mut self, event: PointerEvent, handler: PointerHandler<Self>) -> Result<Subscription, Error>;

    fn off(&mut self, subscription: Subscription) -> Result<(), Error>;
}

pub trait TextNode: SceneNode {
    fn set_text(&mut self, text: &str) -> Result<(), Error>;

    fn text(&self) -> Result<String, Error>;

    fn set_style(&mut self, style: &TextStyle) -> Result<(), Error>;

    fn style(&self) -> Result<TextStyle, Error>;

    /// Normalized origin, (0.5, 0.5) centers the text on its position
    fn set_origin(&mut self, origin: Vec2<f32>) -> Result<(), Error>;

    fn origin(&self) -> Result<Vec2<f32>, Error>;

    fn set_scale(&mut self, scale: f32) -> Result<(), Error>;

    fn scale(&self) -> Result<f32, Error>;
}

pub trait Scene {
    type Container: ContainerNode;
    type Image: ImageNode;
    type Text: TextNode;

    fn add_container(&mut self, position: Vec2<f32>) -> Result<Self::Container, Error>;

    fn add_image(&mut self, position: Vec2<f32>, texture: &str) -> Result<Self::Image, Error>;

    fn add_text(&mut self, position: Vec2<f32>, text: &str, style: &TextStyle) -> Result<Self::Text, Error>;

    /// Puts a container on the scene's display list so it is rendered and updated
    fn add_existing(&mut self, container: &Self::Container) -> Result<(), Error>;
}
