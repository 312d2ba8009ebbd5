use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// The pointer events an interactive node can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// A pointer button was pressed over the node
    Down,
    /// A pointer button was released over the node
    Up,
    /// The pointer left the node's hit area
    Out,
}

impl Display for PointerEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            PointerEvent::Down => "pointerdown",
            PointerEvent::Up => "pointerup",
            PointerEvent::Out => "pointerout",
        };
        write!(f, "{}", name)
    }
}
