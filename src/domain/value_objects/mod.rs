//! Value Objects
//!
//! Immutable types compared by value.

mod stack;

pub use stack::StackKind;
