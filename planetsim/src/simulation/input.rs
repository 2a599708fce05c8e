//! Edge-triggered input events delivered by the window layer
//!
//! The window layer translates its own input into one `SandboxEvent` per
//! physical transition. The scenario only acts on release transitions, so a
//! held button or key never repeats an action.

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space, // pause / resume
    Escape, // quit
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SandboxEvent {
    Closed,
    Resized { width: f64, height: f64 },
    MousePressed { button: MouseButton, position: NVec2 },
    MouseReleased { button: MouseButton, position: NVec2 },
    KeyPressed(Key),
    KeyReleased(Key),
}
