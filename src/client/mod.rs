//! Chat client: the two backend operations plus response interpretation.

mod builder;
mod core;
mod interpret;

pub use builder::ChatClientBuilder;
pub use core::ChatClient;
