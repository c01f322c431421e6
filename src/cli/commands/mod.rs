pub mod stamp;

pub use stamp::*;
