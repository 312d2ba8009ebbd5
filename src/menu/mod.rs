mod button;
mod button_builder;
mod component;
mod text_style;

#[doc(inline)]
pub use self::button::Button;

#[doc(inline)]
pub use self::button::ButtonState;

#[doc(inline)]
pub use self::button::Callback;

#[doc(inline)]
pub use self::button_builder::ButtonBuilder;

#[doc(inline)]
pub use self::button_builder::ButtonConfig;

#[doc(inline)]
pub use self::component::Component;

#[doc(inline)]
pub use self::text_style::TextAlign;

#[doc(inline)]
pub use self::text_style::TextStyle;
