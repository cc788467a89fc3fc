mod archive;
mod command;

pub use archive::*;
pub use command::*;
