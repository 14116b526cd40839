pub mod grep;

pub use grep::GrepFormat;
