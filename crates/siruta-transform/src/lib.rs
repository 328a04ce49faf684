//! Identifier allocation and seed assembly.

pub mod allocator;
pub mod assemble;

pub use allocator::IdAllocator;
pub use assemble::{AssembledSeed, assemble_seed};
