pub mod display;
pub mod frame;
pub mod lamp;

pub use display::BerlinClockDisplay;
pub use frame::Renderer;
pub use lamp::{Lamp, LampColor, LampRow, RowKind};
