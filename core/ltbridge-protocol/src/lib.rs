#![no_std] // Shared by the no_std tag mapper

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod ids;
pub mod unit;

// Re-export core types for convenience
pub use ids::{BlockIndex, PieceIndex};
pub use unit::UnitFlags;

pub mod model;
pub use model::*;
