//! An image backed push button for 2D scene graphs.
//!
//! [`menu::Button`] composes a container, a background image and an optional
//! label out of the nodes a host scene graph provides through the traits in
//! [`scene`]. [`scene::headless::HeadlessScene`] implements those traits in
//! memory for tests and tools that run without a window.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod errors;
pub mod input;
pub mod menu;
pub mod scene;
