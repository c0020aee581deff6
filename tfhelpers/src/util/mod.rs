pub mod conversion;
pub mod time;

pub use conversion::*;
pub use time::*;
