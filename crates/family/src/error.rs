use thiserror::Error;

/// Internal invariant violations of a family's key registry.
///
/// [`Family::identify`](crate::Family::identify) never returns these. They
/// surface only from the checked registry operations; the unchecked ones treat
/// the same conditions as fatal and panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FamilyError {
	/// The key was resolved before it was ever added.
	#[error("type {ty} is not registered in family {family}")]
	UnknownKey { family: &'static str, ty: &'static str },
	/// The key was added a second time.
	#[error("type {ty} is already registered in family {family}")]
	DuplicateKey { family: &'static str, ty: &'static str },
	/// The family ran out of identifiers.
	#[error("family {family} has no identifiers left")]
	Exhausted { family: &'static str },
}
