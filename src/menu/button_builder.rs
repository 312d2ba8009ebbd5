use crate::menu::Button;
use crate::menu::Callback;
use crate::menu::TextStyle;
use crate::scene::Scene;
use failure::Error;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use vek::vec::Extent2;

/// Everything about a button except its callback, so buttons can be described in data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    pub default_texture: String,
    pub clicked_texture: String,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub style: Option<TextStyle>,
}

impl ButtonConfig {
    pub fn new(default_texture: &str, clicked_texture: &str) -> Self {
        ButtonConfig {
            x: 0.0,
            y: 0.0,
            default_texture: default_texture.to_string(),
            clicked_texture: clicked_texture.to_string(),
            width: None,
            height: None,
            text: None,
            style: None,
        }
    }

    /// The size to display the button at. Both dimensions have to be given,
    /// a zero dimension counts as not given.
    pub fn requested_size(&self) -> Option<Extent2<f32>> {
        match (self.width, self.height) {
            (Some(width), Some(height)) if width != 0.0 && height != 0.0 => {
                Some(Extent2::new(width, height))
            }
            _ => None,
        }
    }
}

/// The main way to construct a button
///
/// # Examples
///
/// ```
/// # use failure::Error;
/// #
/// # fn main() -> Result<(), Error> {
/// use sprite_button::menu::ButtonBuilder;
/// use sprite_button::scene::headless::HeadlessScene;
///
/// let mut scene = HeadlessScene::new();
/// scene.textures_mut().register("btn_up", 200, 80);
/// scene.textures_mut().register("btn_down", 200, 80);
///
/// let button = ButtonBuilder::new("btn_up", "btn_down")
///     .with_position(400.0, 300.0)
///     .with_size(100.0, 40.0)
///     .with_text("Play")
///     .with_callback(|| println!("Play pressed"))
///     .build(&mut scene)?;
///
/// assert_eq!(Some("Play".to_string()), button.text()?);
/// # Ok(())
/// # }
/// ```
pub struct ButtonBuilder {
    config: ButtonConfig,
    callback: Option<Callback>,
}

impl ButtonBuilder {
    pub fn new(default_texture: &str, clicked_texture: &str) -> Self {
        Self::from_config(ButtonConfig::new(default_texture, clicked_texture))
    }

    pub fn from_config(config: ButtonConfig) -> Self {
        ButtonBuilder {
            config,
            callback: None,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.config.x = x;
        self.config.y = y;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.config.width = Some(width);
        self.config.height = Some(height);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.config.text = Some(text.to_string());
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.config.style = Some(style);
        self
    }

    /// Runs `callback` on every press, not on release
    pub fn with_callback<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn build<S: Scene>(self, scene: &mut S) -> Result<Button<S>, Error> {
        Button::from_config(scene, self.config, self.callback)
    }
}

impl Debug for ButtonBuilder {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ButtonBuilder")
            .field("config", &self.config)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
