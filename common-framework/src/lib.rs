//! Common Framework
//!
//! Primitives shared by the scanner framework and the exercises built on it:
//! source positions, cursor checkpoints and shared byte slices.

pub mod byte_slice;
pub mod checkpoint;
pub mod position;

pub use byte_slice::ByteSlice;
pub use checkpoint::Checkpoint;
pub use position::Position;
