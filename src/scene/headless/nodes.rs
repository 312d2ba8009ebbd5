use crate::input::PointerEvent;
use crate::menu::TextStyle;
use crate::scene::headless::graph::Graph;
use crate::scene::headless::graph::HandlerEntry;
use crate::scene::ContainerNode;
use crate::scene::ImageNode;
use crate::scene::NodeId;
use crate::scene::PointerHandler;
use crate::scene::SceneNode;
use crate::scene::Subscription;
use crate::scene::TextNode;
use failure::Error;
use std::cell::RefCell;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::rc::Rc;
use vek::vec::Extent2;
use vek::vec::Vec2;

macro_rules! headless_node {
    ($name:ident) => {
        #[derive(Clone)]
        pub struct $name {
            pub(crate) id: NodeId,
            pub(crate) graph: Rc<RefCell<Graph>>,
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.id)
            }
        }

        impl SceneNode for $name {
            fn id(&self) -> NodeId {
                self.id
            }

            fn position(&self) -> Result<Vec2<f32>, Error> {
                self.graph.borrow().local_position(self.id)
            }

            fn destroy(&mut self) -> Result<(), Error> {
                trace!("Destroying {:?}", self);
                self.graph.borrow_mut().remove(self.id)
            }
        }
    };
}

headless_node!(HeadlessContainer);
headless_node!(HeadlessImage);
headless_node!(HeadlessText);

impl ContainerNode for HeadlessContainer {
    fn add<N: SceneNode>(&mut self, child: &N) -> Result<(), Error> {
        self.graph.borrow_mut().attach(self.id, child.id())
    }
}

impl HeadlessContainer {
    pub fn children(&self) -> Vec<NodeId> {
        self.graph
            .borrow()
            .containers
            .get(&self.id)
            .map(|container| container.children.clone())
            .unwrap_or_default()
    }
}

impl ImageNode for HeadlessImage {
    fn set_texture(&mut self, key: &str) -> Result<(), Error> {
        let mut graph = self.graph.borrow_mut();
        // unknown keys fail here rather than at render time
        graph.textures.size(key)?;
        trace!("Setting texture of {} to \"{}\"", self.id, key);
        graph.image_mut(self.id)?.texture = key.to_string();
        Ok(())
    }

    fn texture(&self) -> Result<String, Error> {
        Ok(self.graph.borrow().image(self.id)?.texture.clone())
    }

    fn set_display_size(&mut self, size: Extent2<f32>) -> Result<(), Error> {
        let mut graph = self.graph.borrow_mut();
        let natural = graph.natural_size(self.id)?;
        graph.image_mut(self.id)?.scale = Vec2::new(size.w / natural.w, size.h / natural.h);
        Ok(())
    }

    fn display_size(&self) -> Result<Extent2<f32>, Error> {
        self.graph.borrow().display_size(self.id)
    }

    fn natural_size(&self) -> Result<Extent2<f32>, Error> {
        self.graph.borrow().natural_size(self.id)
    }

    fn set_interactive(&mut self) -> Result<(), Error> {
        self.graph.borrow_mut().image_mut(self.id)?.interactive = true;
        Ok(())
    }

    fn is_interactive(&self) -> Result<bool, Error> {
        Ok(self.graph.borrow().image(self.id)?.interactive)
    }

    fn on(&mut self, event: PointerEvent, handler: PointerHandler<Self>) -> Result<Subscription, Error> {
        let mut graph = self.graph.borrow_mut();
        graph.image(self.id)?;
        let subscription = graph.subscribe(self.id);
        graph.image_mut(self.id)?.handlers.push(HandlerEntry {
            subscription,
            event,
            handler: Some(handler),
        });
        Ok(subscription)
    }

    fn off(&mut self, subscription: Subscription) -> Result<(), Error> {
        let mut graph = self.graph.borrow_mut();
        graph
            .image_mut(self.id)?
            .handlers
            .retain(|entry| entry.subscription != subscription);
        Ok(())
    }
}

impl HeadlessImage {
    /// Number of handlers subscribed to `event`
    pub fn listener_count(&self, event: PointerEvent) -> usize {
        self.graph
            .borrow()
            .images
            .get(&self.id)
            .map(|image| image.handlers.iter().filter(|entry| entry.event == event).count())
            .unwrap_or(0)
    }
}

impl TextNode for HeadlessText {
    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.graph.borrow_mut().text_mut(self.id)?.text = text.to_string();
        Ok(())
    }

    fn text(&self) -> Result<String, Error> {
        Ok(self.graph.borrow().text(self.id)?.text.clone())
    }

    fn set_style(&mut self, style: &TextStyle) -> Result<(), Error> {
        self.graph.borrow_mut().text_mut(self.id)?.style = style.clone();
        Ok(())
    }

    fn style(&self) -> Result<TextStyle, Error> {
        Ok(self.graph.borrow().text(self.id)?.style.clone())
    }

    fn set_origin(&mut self, origin: Vec2<f32>) -> Result<(), Error> {
        self.graph.borrow_mut().text_mut(self.id)?.origin = origin;
        Ok(())
    }

    fn origin(&self) -> Result<Vec2<f32>, Error> {
        Ok(self.graph.borrow().text(self.id)?.origin)
    }

    fn set_scale(&mut self, scale: f32) -> Result<(), Error> {
        self.graph.borrow_mut().text_mut(self.id)?.scale = scale;
        Ok(())
    }

    fn scale(&self) -> Result<f32, Error> {
        Ok(self.graph.borrow().text(self.id)?.scale)
    }
}
