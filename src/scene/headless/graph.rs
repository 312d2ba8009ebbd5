use crate::errors::SceneError;
use crate::errors::SceneErrorKind;
use crate::input::PointerEvent;
use crate::input::PointerInput;
use crate::menu::TextStyle;
use crate::scene::headless::HeadlessImage;
use crate::scene::headless::TextureRegistry;
use crate::scene::NodeId;
use crate::scene::PointerHandler;
use crate::scene::Subscription;
use failure::Error;
use std::collections::HashMap;
use vek::vec::Extent2;
use vek::vec::Vec2;

pub(crate) struct ContainerState {
    pub position: Vec2<f32>,
    pub children: Vec<NodeId>,
}

pub(crate) struct HandlerEntry {
    pub subscription: Subscription,
    pub event: PointerEvent,
    // None while the handler is running
    pub handler: Option<PointerHandler<HeadlessImage>>,
}

pub(crate) struct ImageState {
    pub position: Vec2<f32>,
    pub texture: String,
    pub scale: Vec2<f32>,
    pub interactive: bool,
    pub handlers: Vec<HandlerEntry>,
}

pub(crate) struct TextState {
    pub position: Vec2<f32>,
    pub text: String,
    pub style: TextStyle,
    pub origin: Vec2<f32>,
    pub scale: f32,
}

/// Everything the headless scene knows, shared by all node handles
#[derive(Default)]
pub(crate) struct Graph {
    next_id: u64,
    next_subscription: u64,
    pub textures: TextureRegistry,
    pub containers: HashMap<NodeId, ContainerState>,
    pub images: HashMap<NodeId, ImageState>,
    pub texts: HashMap<NodeId, TextState>,
    pub parents: HashMap<NodeId, NodeId>,
    pub display_list: Vec<NodeId>,
    pub pointer: PointerInput,
}

fn destroyed(id: NodeId) -> Error {
    SceneError::from(SceneErrorKind::NodeDestroyed(id)).into()
}

impl Graph {
    pub fn new(textures: TextureRegistry) -> Self {
        Graph {
            textures,
            ..Graph::default()
        }
    }

    pub fn next_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId::new(self.next_id)
    }

    pub fn subscribe(&mut self, node: NodeId) -> Subscription {
        self.next_subscription += 1;
        Subscription {
            node,
            id: self.next_subscription,
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.containers.contains_key(&id) || self.images.contains_key(&id) || self.texts.contains_key(&id)
    }

    pub fn container_mut(&mut self, id: NodeId) -> Result<&mut ContainerState, Error> {
        self.containers.get_mut(&id).ok_or_else(|| destroyed(id))
    }

    pub fn image(&self, id: NodeId) -> Result<&ImageState, Error> {
        self.images.get(&id).ok_or_else(|| destroyed(id))
    }

    pub fn image_mut(&mut self, id: NodeId) -> Result<&mut ImageState, Error> {
        self.images.get_mut(&id).ok_or_else(|| destroyed(id))
    }

    pub fn text(&self, id: NodeId) -> Result<&TextState, Error> {
        self.texts.get(&id).ok_or_else(|| destroyed(id))
    }

    pub fn text_mut(&mut self, id: NodeId) -> Result<&mut TextState, Error> {
        self.texts.get_mut(&id).ok_or_else(|| destroyed(id))
    }

    pub fn local_position(&self, id: NodeId) -> Result<Vec2<f32>, Error> {
        if let Some(container) = self.containers.get(&id) {
            return Ok(container.position);
        }
        if let Some(image) = self.images.get(&id) {
            return Ok(image.position);
        }
        if let Some(text) = self.texts.get(&id) {
            return Ok(text.position);
        }
        Err(destroyed(id))
    }

    pub fn world_position(&self, id: NodeId) -> Result<Vec2<f32>, Error> {
        let mut position = self.local_position(id)?;
        let mut current = id;
        while let Some(parent) = self.parents.get(&current) {
            position += self.local_position(*parent)?;
            current = *parent;
        }
        Ok(position)
    }

    /// A node is displayed when its root ancestor is on the display list
    pub fn is_displayed(&self, id: NodeId) -> bool {
        let mut root = id;
        while let Some(parent) = self.parents.get(&root) {
            root = *parent;
        }
        self.display_list.contains(&root)
    }

    pub fn natural_size(&self, id: NodeId) -> Result<Extent2<f32>, Error> {
        let image = self.image(id)?;
        let size = self.textures.size(&image.texture)?;
        Ok(Extent2::new(size.w as f32, size.h as f32))
    }

    pub fn display_size(&self, id: NodeId) -> Result<Extent2<f32>, Error> {
        let natural = self.natural_size(id)?;
        let scale = self.image(id)?.scale;
        Ok(Extent2::new(natural.w * scale.x, natural.h * scale.y))
    }

    /// Interactive, displayed images whose displayed bounds contain `point`, in ascending id order
    pub fn hits(&self, point: Vec2<f32>) -> Result<Vec<NodeId>, Error> {
        let mut hits = Vec::new();
        for (id, image) in &self.images {
            if !image.interactive || !self.is_displayed(*id) {
                continue;
            }
            let center = self.world_position(*id)?;
            let size = self.display_size(*id)?;
            if (point.x - center.x).abs() <= size.w.abs() / 2.0
                && (point.y - center.y).abs() <= size.h.abs() / 2.0
            {
                hits.push(*id);
            }
        }
        hits.sort();
        Ok(hits)
    }

    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        if !self.contains(child) {
            return Err(destroyed(child));
        }
        self.container_mut(parent)?;

        self.detach(child);
        self.display_list.retain(|id| *id != child);
        self.container_mut(parent)?.children.push(child);
        self.parents.insert(child, parent);
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.parents.remove(&child) {
            if let Some(container) = self.containers.get_mut(&parent) {
                container.children.retain(|id| *id != child);
            }
        }
    }

    /// Removes a node, containers take their remaining children with them
    pub fn remove(&mut self, id: NodeId) -> Result<(), Error> {
        if !self.contains(id) {
            return Err(destroyed(id));
        }

        if let Some(container) = self.containers.remove(&id) {
            for child in container.children {
                self.parents.remove(&child);
                self.remove(child)?;
            }
        }
        self.images.remove(&id);
        self.texts.remove(&id);

        self.detach(id);
        self.display_list.retain(|node| *node != id);
        self.pointer.forget(id);
        Ok(())
    }
}
