pub mod button;
pub mod input;
pub mod select;

pub use button::*;
pub use input::*;
pub use select::*;
