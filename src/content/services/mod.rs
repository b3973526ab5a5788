//! Application services moving models on and off the wire.

mod assembler;
mod composer;

pub use assembler::MessageAssembler;
pub use composer::{MessageComposer, SendOutcome};
