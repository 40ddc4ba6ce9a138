mod assembler;
mod greeting;

pub use assembler::*;
pub use greeting::*;
