pub mod dropdown;
pub mod modal;

pub use dropdown::*;
pub use modal::*;
