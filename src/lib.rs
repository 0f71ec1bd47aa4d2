pub mod error;
pub mod grid;
pub mod operations;
pub mod registry;
pub mod room;
pub mod session;
pub mod topology;

pub use error::{Result, RoomGridError};
