//! Representations of Java types and identifiers, and implementations for
//! formatting them.

pub mod identifier;
pub mod primitives;
pub mod types;

pub use identifier::{normalize, CppOperator};
pub use primitives::JavaPrimitive;
pub use types::{JavaType, WrapperFlavor};

// Re-export genco types that are commonly used
pub use genco::{lang::Java, quote, Tokens};
