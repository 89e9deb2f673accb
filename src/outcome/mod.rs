pub mod definition;
pub mod tree;
pub mod walk;

pub use definition::*;
pub use tree::*;
