mod command;
pub mod keys;
mod storage;

pub use command::*;
pub use storage::*;

#[doc(hidden)]
pub use anyhow;
