use crate::input::PointerEvent;
use crate::menu::ButtonBuilder;
use crate::menu::ButtonConfig;
use crate::menu::Component;
use crate::menu::TextStyle;
use crate::scene::ContainerNode;
use crate::scene::ImageNode;
use crate::scene::Scene;
use crate::scene::SceneNode;
use crate::scene::Subscription;
use crate::scene::TextNode;
use arrayvec::ArrayVec;
use failure::Error;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use vek::vec::Extent2;
use vek::vec::Vec2;

/// Invoked every time the button is pressed
pub type Callback = Box<dyn FnMut()>;

/// What the button currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// The default texture is shown
    Resting,
    /// The clicked texture is shown
    Pressed,
}

/// An image backed push button with an optional centered label.
///
/// The button is a container holding a background image and, when a label was
/// given at construction, a text node. Pressing the pointer on the background
/// swaps in the clicked texture and runs the callback, releasing the pointer or
/// dragging it off the button swaps the default texture back.
pub struct Button<S: Scene> {
    container: S::Container,
    background: S::Image,
    label: Option<S::Text>,
    default_texture: String,
    clicked_texture: String,
    size: Option<Extent2<f32>>,
    subscriptions: ArrayVec<[Subscription; 3]>,
}

/// Uniform label scale that fits the label to a background displayed at `size`
fn fit_scale(size: Extent2<f32>, natural: Extent2<f32>) -> f32 {
    (size.w / natural.w).min(size.h / natural.h)
}

impl<S: Scene> Button<S> {
    /// Creates a label-less button at its texture's natural size. Use
    /// [`ButtonBuilder`] for the optional parts.
    pub fn new(
        scene: &mut S,
        x: f32,
        y: f32,
        default_texture: &str,
        clicked_texture: &str,
    ) -> Result<Self, Error> {
        ButtonBuilder::new(default_texture, clicked_texture)
            .with_position(x, y)
            .build(scene)
    }

    pub(crate) fn from_config(
        scene: &mut S,
        config: ButtonConfig,
        callback: Option<Callback>,
    ) -> Result<Self, Error> {
        let size = config.requested_size();

        let mut container = scene.add_container(Vec2::new(config.x, config.y))?;
        let mut background = scene.add_image(Vec2::zero(), &config.default_texture)?;
        if let Some(size) = size {
            background.set_display_size(size)?;
        }
        container.add(&background)?;

        let label = match config.text {
            Some(ref text) if !text.is_empty() => {
                let style = config.style.clone().unwrap_or_default();
                let mut label = scene.add_text(Vec2::zero(), text, &style)?;
                label.set_origin(Vec2::new(0.5, 0.5))?;
                if let Some(size) = size {
                    label.set_scale(fit_scale(size, background.natural_size()?))?;
                }
                container.add(&label)?;
                Some(label)
            }
            _ => None,
        };

        background.set_interactive()?;
        let subscriptions = Self::subscribe(
            &mut background,
            &config.default_texture,
            &config.clicked_texture,
            callback,
        )?;

        scene.add_existing(&container)?;

        debug!(
            "Created button {} (\"{}\" / \"{}\")",
            container.id(),
            config.default_texture,
            config.clicked_texture
        );

        Ok(Button {
            container,
            background,
            label,
            default_texture: config.default_texture,
            clicked_texture: config.clicked_texture,
            size,
            subscriptions,
        })
    }

    fn subscribe(
        background: &mut S::Image,
        default_texture: &str,
        clicked_texture: &str,
        mut callback: Option<Callback>,
    ) -> Result<ArrayVec<[Subscription; 3]>, Error> {
        let mut subscriptions = ArrayVec::new();

        let clicked = clicked_texture.to_string();
        subscriptions.push(background.on(
            PointerEvent::Down,
            Box::new(move |image: &mut S::Image| -> Result<(), Error> {
                image.set_texture(&clicked)?;
                if let Some(callback) = callback.as_mut() {
                    callback();
                }
                Ok(())
            }),
        )?);

        // dragging off while pressed must not leave the clicked texture behind
        for event in &[PointerEvent::Up, PointerEvent::Out] {
            let default = default_texture.to_string();
            subscriptions.push(background.on(
                *event,
                Box::new(move |image: &mut S::Image| -> Result<(), Error> { image.set_texture(&default) }),
            )?);
        }

        Ok(subscriptions)
    }

    /// Replaces the label text, does nothing for a button without label
    pub fn set_text(&mut self, text: &str) -> Result<(), Error> {
        match self.label {
            Some(ref mut label) => label.set_text(text),
            None => Ok(()),
        }
    }

    /// Replaces the label style, does nothing for a button without label
    pub fn set_text_style(&mut self, style: &TextStyle) -> Result<(), Error> {
        match self.label {
            Some(ref mut label) => label.set_style(style),
            None => Ok(()),
        }
    }

    /// Displays the background at `width` x `height` and refits the label.
    /// Returns the button so calls can be chained.
    pub fn set_button_size(&mut self, width: f32, height: f32) -> Result<&mut Self, Error> {
        let size = Extent2::new(width, height);
        self.background.set_display_size(size)?;
        if let Some(ref mut label) = self.label {
            label.set_scale(fit_scale(size, self.background.natural_size()?))?;
        }
        self.size = Some(size);
        Ok(self)
    }

    pub fn state(&self) -> Result<ButtonState, Error> {
        if self.background.texture()? == self.clicked_texture {
            Ok(ButtonState::Pressed)
        } else {
            Ok(ButtonState::Resting)
        }
    }

    pub fn text(&self) -> Result<Option<String>, Error> {
        match self.label {
            Some(ref label) => Ok(Some(label.text()?)),
            None => Ok(None),
        }
    }

    pub fn default_texture(&self) -> &str {
        &self.default_texture
    }

    pub fn clicked_texture(&self) -> &str {
        &self.clicked_texture
    }

    /// The explicitly requested display size, `None` while the texture's natural size is used
    pub fn size(&self) -> Option<Extent2<f32>> {
        self.size
    }

    pub fn container(&self) -> &S::Container {
        &self.container
    }

    pub fn background(&self) -> &S::Image {
        &self.background
    }

    pub fn label(&self) -> Option<&S::Text> {
        self.label.as_ref()
    }

    /// Unsubscribes the pointer handlers, then destroys the label, the
    /// background and finally the container
    pub fn destroy(mut self) -> Result<(), Error> {
        debug!("Destroying button {}", self.container.id());
        for subscription in self.subscriptions.iter() {
            self.background.off(*subscription)?;
        }
        if let Some(mut label) = self.label.take() {
            label.destroy()?;
        }
        self.background.destroy()?;
        self.container.destroy()
    }
}

impl<S: Scene> Component for Button<S> {
    fn position(&self) -> Result<Vec2<f32>, Error> {
        self.container.position()
    }

    fn resize(&mut self, size: Extent2<f32>) -> Result<(), Error> {
        self.set_button_size(size.w, size.h)?;
        Ok(())
    }
}

impl<S: Scene> Debug for Button<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Button")
            .field("container", &self.container.id())
            .field("default_texture", &self.default_texture)
            .field("clicked_texture", &self.clicked_texture)
            .field("size", &self.size)
            .field("has_label", &self.label.is_some())
            .finish()
    }
}
