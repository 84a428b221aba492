pub mod course;
pub mod reference;
pub mod types;

pub use course::*;
pub use reference::*;
pub use types::*;
