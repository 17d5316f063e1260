//! # Artisan
//!
//! Builds trees of labeled template components and renders them as
//! indented, tag-like text:
//!
//! ```
//! use artisan::Component;
//!
//! let page = Component::new("1").with_child(Component::new("2"));
//!
//! assert_eq!(page.render(), "<Component 1>\n  <Component 2 />\n</Component 1>");
//! ```

pub mod parser;
pub mod renderer;
pub mod template;

pub use parser::*;
pub use renderer::*;
pub use template::*;
