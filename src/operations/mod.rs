pub mod orientation;
pub mod reclassify;

pub use orientation::{ClassificationMode, ClassifyWalls};
pub use reclassify::{Reclassify, ReclassifyConfig, ReclassifyReport};
