//! Runtime type-identity families.
//!
//! Assigns each type a stable identifier without a manual registration step:
//! - [`TypeKey`]: Comparable token minted per distinct type
//! - [`Decay`]: Reference stripping applied before minting
//! - [`KeyRegistry`]: Append-only store of the keys one family has seen
//! - [`Family`]: Scope that maps types to dense [`FamilyId`]s
//! - [`family!`]: Program-wide families bound to a tag type
//!
//! Identifiers are only meaningful inside the family that produced them and
//! within one process run. They are not meant to be persisted or sent over a
//! wire.

#![doc(test(attr(allow(unused_crate_dependencies))))]

mod decay;
mod error;
mod family;
mod id;
mod key;
mod registry;

pub use decay::{Decay, Pack};
pub use error::FamilyError;
pub use family::{Family, FamilyBuilder, FamilyConfig, FamilyTag};
pub use id::FamilyId;
pub use key::TypeKey;
pub use registry::{KeyRegistry, Lookup};
