#![no_std]
pub mod builder;
pub mod chip;
pub mod context;
pub mod frame;
pub mod opcode;
pub mod timer;

pub use builder::Builder;
pub use chip::{Crisp8, Status};
pub use context::Context;
pub use frame::{Frame, FrameView, HEIGHT, WIDTH};
pub use opcode::OpCode;
