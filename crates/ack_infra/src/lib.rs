mod ack_infra;
mod fs;
mod walker;

pub use ack_infra::*;
