pub mod constants;
pub mod error;
pub mod tag;

pub use constants::*;
pub use error::TagError;
pub use tag::*;
