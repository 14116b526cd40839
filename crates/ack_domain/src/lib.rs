mod error;
mod match_range;
mod request;
mod result;
mod results;

pub use error::*;
pub use match_range::*;
pub use request::*;
pub use result::*;
pub use results::*;
