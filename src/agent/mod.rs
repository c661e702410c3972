//! Intent classification and response assembly.

pub mod assembler;
pub mod classifier;
pub mod fixtures;

pub use assembler::ResponseAssembler;
pub use classifier::classify;
pub use fixtures::Fixtures;
