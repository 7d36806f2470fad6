pub mod modifiers;
pub mod prediction;
pub mod reference;
pub mod soil;
pub mod weather;

pub use modifiers::*;
pub use prediction::*;
pub use reference::*;
pub use soil::*;
pub use weather::*;
