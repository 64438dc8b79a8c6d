pub mod handler;
pub mod held;

pub use handler::{InputHandler, KeyAction};
pub use held::HeldKeys;
