pub mod types;
#[allow(clippy::module_inception)]
pub mod parser;

pub use types::*;
pub use parser::*;
