mod filter;
mod infra;
mod search;
mod sink;
mod walker;

pub use infra::*;
pub use search::*;
pub use walker::*;
pub mod domain {
    pub use ack_domain::*;
}
