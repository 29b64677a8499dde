pub mod batch;
pub mod curve;
pub mod types;

pub use batch::*;
pub use curve::*;
pub use types::*;
