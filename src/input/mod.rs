mod pointer_event;
mod pointer_input;

#[doc(inline)]
pub use self::pointer_event::PointerEvent;

#[doc(inline)]
pub use self::pointer_input::PointerInput;
