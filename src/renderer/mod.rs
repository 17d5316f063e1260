pub mod traits;
pub mod components;
pub mod renders;

pub use traits::*;
pub use components::*;
