#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use mover::*;
pub use state::*;
pub use types::*;

pub mod test_utils;

mod board;
mod cell;
mod command;
mod engine;
mod error;
mod mover;
mod state;
mod types;
