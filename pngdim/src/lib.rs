#![doc = include_str!("../README.md")]

mod dimensions;
mod error;
mod header;
mod inspect;

pub use dimensions::*;
pub use error::*;
pub use header::*;
pub use inspect::*;
