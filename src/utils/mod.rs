// Utility functions
pub mod error;
pub mod image;
pub mod password;

pub use error::*;
pub use image::*;
pub use password::*;
