//! Core data model for the `kripke` formula engine: operator descriptors
//! and registries, delimiter configuration, immutable syntax trees, and the
//! serializer that turns a tree back into formula text.
//!
//! Everything in this crate is a plain value. A parse call owns its
//! operator set, its options, and the tree it produces; nothing is cached
//! or shared between calls, so independent parses can run concurrently
//! without coordination.

pub mod delimiters;
pub mod operators;
pub mod serialize;
pub mod tree;

pub use crate::delimiters::Delimiters;
pub use crate::operators::{
    Associativity, Operator, OperatorSet, RegistryError, BASE_PRECEDENCE, HIGH_PRECEDENCE, LOW_PRECEDENCE,
};
pub use crate::serialize::{serialize, SerializeOptions};
pub use crate::tree::{ArityError, Proposition, SyntaxTree, Token};
