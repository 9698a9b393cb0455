pub mod jump;
pub mod physics;
pub mod progression;
pub mod track;

pub use jump::*;
pub use physics::*;
pub use progression::*;
pub use track::*;
