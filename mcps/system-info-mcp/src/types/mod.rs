//! Raw fact sets returned by a capability provider
//!
//! These mirror what the platform can tell us, in native units (bytes, GHz,
//! seconds). Nothing here is formatted for display; see [`crate::report`].

mod battery;
mod cpu;
mod graphics;
mod load;
mod memory;
mod network;
mod os;
mod storage;
mod system;
mod time;

pub use battery::*;
pub use cpu::*;
pub use graphics::*;
pub use load::*;
pub use memory::*;
pub use network::*;
pub use os::*;
pub use storage::*;
pub use system::*;
pub use time::*;
