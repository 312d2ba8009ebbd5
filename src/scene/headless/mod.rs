//! An in-memory scene graph that implements the host traits without rendering
//! anything. Pointer input is fed in by the caller, either as already resolved
//! events with [`HeadlessScene::dispatch`] or as positions that are hit-tested
//! against the interactive images.

mod graph;
mod nodes;
mod texture_registry;

#[doc(inline)]
pub use self::nodes::HeadlessContainer;

#[doc(inline)]
pub use self::nodes::HeadlessImage;

#[doc(inline)]
pub use self::nodes::HeadlessText;

#[doc(inline)]
pub use self::texture_registry::TextureRegistry;

use self::graph::ContainerState;
use self::graph::Graph;
use self::graph::ImageState;
use self::graph::TextState;
use crate::input::PointerEvent;
use crate::menu::TextStyle;
use crate::scene::NodeId;
use crate::scene::Scene;
use crate::scene::SceneNode;
use failure::Error;
use std::cell::RefCell;
use std::cell::RefMut;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::rc::Rc;
use vek::vec::Vec2;

pub struct HeadlessScene {
    graph: Rc<RefCell<Graph>>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::with_textures(TextureRegistry::new())
    }

    pub fn with_textures(textures: TextureRegistry) -> Self {
        HeadlessScene {
            graph: Rc::new(RefCell::new(Graph::new(textures))),
        }
    }

    pub fn textures_mut(&mut self) -> RefMut<TextureRegistry> {
        RefMut::map(self.graph.borrow_mut(), |graph| &mut graph.textures)
    }

    /// Tells if the node is still part of the scene graph
    pub fn contains(&self, id: NodeId) -> bool {
        self.graph.borrow().contains(id)
    }

    /// Tells if the node sits directly on the display list
    pub fn is_registered(&self, id: NodeId) -> bool {
        self.graph.borrow().display_list.contains(&id)
    }

    pub fn pointer_position(&self) -> Vec2<f32> {
        self.graph.borrow().pointer.position
    }

    /// Delivers `event` to the handlers of an image. Events sent to images
    /// that are not interactive are dropped.
    pub fn dispatch(&mut self, id: NodeId, event: PointerEvent) -> Result<(), Error> {
        let taken = {
            let mut graph = self.graph.borrow_mut();
            let image = graph.image_mut(id)?;
            if !image.interactive {
                warn!("Dropping {} sent to non interactive image {}", event, id);
                return Ok(());
            }
            let taken: Vec<_> = image
                .handlers
                .iter_mut()
                .filter(|entry| entry.event == event)
                .filter_map(|entry| entry.handler.take().map(|handler| (entry.subscription, handler)))
                .collect();
            taken
        };

        trace!("Dispatching {} to {} ({} handlers)", event, id, taken.len());

        // The graph must not be borrowed while handlers run, they reach it through the handle
        let mut target = HeadlessImage {
            id,
            graph: Rc::clone(&self.graph),
        };
        let mut result = Ok(());
        let mut ran = Vec::with_capacity(taken.len());
        let mut pending = taken.into_iter();
        for (subscription, mut handler) in pending.by_ref() {
            let outcome = handler(&mut target);
            ran.push((subscription, handler));
            if let Err(error) = outcome {
                result = Err(error);
                break;
            }
        }
        ran.extend(pending);

        let mut graph = self.graph.borrow_mut();
        if let Some(image) = graph.images.get_mut(&id) {
            for (subscription, handler) in ran {
                // handlers that unsubscribed while running are dropped here
                if let Some(entry) = image
                    .handlers
                    .iter_mut()
                    .find(|entry| entry.subscription == subscription)
                {
                    entry.handler = Some(handler);
                }
            }
        }

        result
    }

    /// Moves the pointer, images it leaves receive [`PointerEvent::Out`]
    pub fn pointer_move(&mut self, point: Vec2<f32>) -> Result<(), Error> {
        self.move_pointer(point)?;
        Ok(())
    }

    /// Presses the pointer at `point`, the topmost image under it receives [`PointerEvent::Down`]
    pub fn pointer_down(&mut self, point: Vec2<f32>) -> Result<(), Error> {
        let hits = self.move_pointer(point)?;
        self.graph.borrow_mut().pointer.press();
        match hits.last() {
            Some(id) => self.dispatch(*id, PointerEvent::Down),
            None => Ok(()),
        }
    }

    /// Releases the pointer at `point`, the topmost image under it receives [`PointerEvent::Up`]
    pub fn pointer_up(&mut self, point: Vec2<f32>) -> Result<(), Error> {
        let hits = self.move_pointer(point)?;
        self.graph.borrow_mut().pointer.release();
        match hits.last() {
            Some(id) => self.dispatch(*id, PointerEvent::Up),
            None => Ok(()),
        }
    }

    fn move_pointer(&mut self, point: Vec2<f32>) -> Result<Vec<NodeId>, Error> {
        let (hits, left) = {
            let mut graph = self.graph.borrow_mut();
            let hits = graph.hits(point)?;
            let left = graph.pointer.move_to(point, &hits);
            (hits, left)
        };

        for id in left {
            if self.contains(id) {
                self.dispatch(id, PointerEvent::Out)?;
            }
        }

        Ok(hits)
    }
}

impl Default for HeadlessScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for HeadlessScene {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let graph = self.graph.borrow();
        write!(
            f,
            "HeadlessScene {{ containers: {}, images: {}, texts: {} }}",
            graph.containers.len(),
            graph.images.len(),
            graph.texts.len()
        )
    }
}

impl Scene for HeadlessScene {
    type Container = HeadlessContainer;
    type Image = HeadlessImage;
    type Text = HeadlessText;

    fn add_container(&mut self, position: Vec2<f32>) -> Result<HeadlessContainer, Error> {
        let mut graph = self.graph.borrow_mut();
        let id = graph.next_id();
        graph.containers.insert(
            id,
            ContainerState {
                position,
                children: Vec::new(),
            },
        );
        Ok(HeadlessContainer {
            id,
            graph: Rc::clone(&self.graph),
        })
    }

    fn add_image(&mut self, position: Vec2<f32>, texture: &str) -> Result<HeadlessImage, Error> {
        let mut graph = self.graph.borrow_mut();
        graph.textures.size(texture)?;
        let id = graph.next_id();
        graph.images.insert(
            id,
            ImageState {
                position,
                texture: texture.to_string(),
                scale: Vec2::one(),
                interactive: false,
                handlers: Vec::new(),
            },
        );
        graph.display_list.push(id);
        Ok(HeadlessImage {
            id,
            graph: Rc::clone(&self.graph),
        })
    }

    fn add_text(&mut self, position: Vec2<f32>, text: &str, style: &TextStyle) -> Result<HeadlessText, Error> {
        let mut graph = self.graph.borrow_mut();
        let id = graph.next_id();
        graph.texts.insert(
            id,
            TextState {
                position,
                text: text.to_string(),
                style: style.clone(),
                origin: Vec2::zero(),
                scale: 1.0,
            },
        );
        graph.display_list.push(id);
        Ok(HeadlessText {
            id,
            graph: Rc::clone(&self.graph),
        })
    }

    fn add_existing(&mut self, container: &HeadlessContainer) -> Result<(), Error> {
        let mut graph = self.graph.borrow_mut();
        let id = container.id();
        graph.container_mut(id)?;
        if !graph.display_list.contains(&id) {
            graph.display_list.push(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::SceneError;
    use crate::errors::SceneErrorKind;
    use crate::input::PointerEvent;
    use crate::menu::TextStyle;
    use crate::scene::headless::HeadlessImage;
    use crate::scene::headless::HeadlessScene;
    use crate::scene::ContainerNode;
    use crate::scene::ImageNode;
    use crate::scene::Scene;
    use crate::scene::SceneNode;
    use crate::scene::TextNode;
    use failure::Error;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vek::vec::Extent2;
    use vek::vec::Vec2;

    fn scene() -> HeadlessScene {
        let mut scene = HeadlessScene::new();
        scene.textures_mut().register("up", 100, 50);
        scene.textures_mut().register("down", 100, 50);
        scene
    }

    fn recorder<I: ImageNode>(image: &mut I, event: PointerEvent) -> Rc<RefCell<Vec<PointerEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let cloned = Rc::clone(&log);
        image
            .on(
                event,
                Box::new(move |_: &mut I| {
                    cloned.borrow_mut().push(event);
                    Ok(())
                }),
            )
            .unwrap();
        log
    }

    #[test]
    fn it_should_reject_unknown_textures() {
        let mut scene = scene();

        let error = scene.add_image(Vec2::zero(), "missing").unwrap_err();

        assert_eq!(
            SceneErrorKind::UnknownTexture("missing".to_string()),
            error.downcast_ref::<SceneError>().unwrap().kind()
        );
    }

    #[test]
    fn it_should_scale_instead_of_resampling() {
        let mut scene = scene();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();

        image.set_display_size(Extent2::new(50.0, 100.0)).unwrap();

        assert_eq!(Extent2::new(100.0, 50.0), image.natural_size().unwrap());
        assert_eq!(Extent2::new(50.0, 100.0), image.display_size().unwrap());
    }

    #[test]
    fn it_should_move_children_off_the_display_list() {
        let mut scene = scene();
        let mut container = scene.add_container(Vec2::new(10.0, 10.0)).unwrap();
        let image = scene.add_image(Vec2::zero(), "up").unwrap();
        assert_eq!(true, scene.is_registered(image.id()));

        container.add(&image).unwrap();
        scene.add_existing(&container).unwrap();

        assert_eq!(false, scene.is_registered(image.id()));
        assert_eq!(true, scene.is_registered(container.id()));
        assert_eq!(vec![image.id()], container.children());
    }

    #[test]
    fn it_should_drop_events_for_non_interactive_images() {
        let mut scene = scene();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();
        let log = recorder(&mut image, PointerEvent::Down);

        scene.dispatch(image.id(), PointerEvent::Down).unwrap();

        assert_eq!(0, log.borrow().len());
    }

    #[test]
    fn it_should_let_handlers_change_their_image() {
        let mut scene = scene();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();
        image.set_interactive().unwrap();
        image
            .on(PointerEvent::Down, Box::new(|image: &mut HeadlessImage| image.set_texture("down")))
            .unwrap();

        scene.dispatch(image.id(), PointerEvent::Down).unwrap();

        assert_eq!("down", image.texture().unwrap());
    }

    #[test]
    fn it_should_keep_handlers_after_a_failing_dispatch() {
        let mut scene = scene();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();
        image.set_interactive().unwrap();
        image
            .on(PointerEvent::Down, Box::new(|image: &mut HeadlessImage| image.set_texture("missing")))
            .unwrap();

        assert!(scene.dispatch(image.id(), PointerEvent::Down).is_err());
        assert!(scene.dispatch(image.id(), PointerEvent::Down).is_err());
        assert_eq!(1, image.listener_count(PointerEvent::Down));
        assert_eq!("up", image.texture().unwrap());
    }

    #[test]
    fn it_should_stop_calling_unsubscribed_handlers() {
        let mut scene = scene();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();
        image.set_interactive().unwrap();
        let calls = Rc::new(RefCell::new(0));
        let cloned = Rc::clone(&calls);
        let subscription = image
            .on(
                PointerEvent::Up,
                Box::new(move |_: &mut HeadlessImage| -> Result<(), Error> {
                    *cloned.borrow_mut() += 1;
                    Ok(())
                }),
            )
            .unwrap();

        scene.dispatch(image.id(), PointerEvent::Up).unwrap();
        image.off(subscription).unwrap();
        scene.dispatch(image.id(), PointerEvent::Up).unwrap();

        assert_eq!(1, *calls.borrow());
        assert_eq!(0, image.listener_count(PointerEvent::Up));
    }

    #[test]
    fn it_should_hit_test_the_displayed_bounds() {
        let mut scene = scene();
        let mut container = scene.add_container(Vec2::new(200.0, 100.0)).unwrap();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();
        image.set_interactive().unwrap();
        container.add(&image).unwrap();
        scene.add_existing(&container).unwrap();
        let log = recorder(&mut image, PointerEvent::Down);

        // 100x50 centered on (200, 100)
        scene.pointer_down(Vec2::new(260.0, 100.0)).unwrap();
        assert_eq!(0, log.borrow().len());

        scene.pointer_down(Vec2::new(245.0, 120.0)).unwrap();
        assert_eq!(vec![PointerEvent::Down], *log.borrow());
    }

    #[test]
    fn it_should_send_out_when_the_pointer_leaves() {
        let mut scene = scene();
        let mut image = scene.add_image(Vec2::zero(), "up").unwrap();
        image.set_interactive().unwrap();
        let log = recorder(&mut image, PointerEvent::Out);

        scene.pointer_move(Vec2::new(10.0, 10.0)).unwrap();
        scene.pointer_move(Vec2::new(20.0, 10.0)).unwrap();
        assert_eq!(0, log.borrow().len());

        scene.pointer_move(Vec2::new(300.0, 10.0)).unwrap();
        assert_eq!(vec![PointerEvent::Out], *log.borrow());
        assert_eq!(Vec2::new(300.0, 10.0), scene.pointer_position());
    }

    #[test]
    fn it_should_only_press_the_topmost_image() {
        let mut scene = scene();
        let mut below = scene.add_image(Vec2::zero(), "up").unwrap();
        let mut above = scene.add_image(Vec2::zero(), "up").unwrap();
        below.set_interactive().unwrap();
        above.set_interactive().unwrap();
        let below_log = recorder(&mut below, PointerEvent::Down);
        let above_log = recorder(&mut above, PointerEvent::Down);

        scene.pointer_down(Vec2::zero()).unwrap();

        assert_eq!(0, below_log.borrow().len());
        assert_eq!(1, above_log.borrow().len());
    }

    #[test]
    fn it_should_destroy_children_with_their_container() {
        let mut scene = scene();
        let mut container = scene.add_container(Vec2::zero()).unwrap();
        let image = scene.add_image(Vec2::zero(), "up").unwrap();
        let mut text = scene.add_text(Vec2::zero(), "Play", &TextStyle::new()).unwrap();
        container.add(&image).unwrap();
        container.add(&text).unwrap();

        container.destroy().unwrap();

        assert_eq!(false, scene.contains(image.id()));
        assert_eq!(false, scene.contains(text.id()));
        let error = text.set_text("Quit").unwrap_err();
        assert_eq!(
            SceneErrorKind::NodeDestroyed(text.id()),
            error.downcast_ref::<SceneError>().unwrap().kind()
        );
    }
}
