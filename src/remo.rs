mod client;
mod device;
mod event;

pub use client::*;
pub use device::*;
pub use event::*;
