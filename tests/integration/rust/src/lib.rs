//! Integration test suite
//!
//! This crate provides stubs of the two consumers of the core components, a
//! scanner and a statement evaluator, so tests can verify the components
//! work together across component boundaries.

pub mod evaluator;
pub mod scanner;

/// Re-export components for test convenience
pub mod components {
    pub use character;
    pub use core_types;
}
