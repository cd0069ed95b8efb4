//! A Chip-8 virtual machine.
//!
//! The `Engine` owns memory, registers, the stack and the timers, and drives
//! its `Display` and `Keyboard`. A host loads a program, forwards key events
//! and calls `Engine::step` at whatever rate it likes; rendering, input
//! mapping and scheduling are left to the host.
pub use display::{Display, FrameBuffer};
pub use engine::{Engine, RunState};
pub use error::{Error, Result};
pub use keyboard::Keyboard;
pub use opcode::Opcode;

pub mod constants;
mod display;
mod engine;
mod error;
mod instruction;
mod keyboard;
mod opcode;
mod operations;
