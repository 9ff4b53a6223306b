//! Type keys minted from compile-time type information.

use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Opaque token for one distinct type combination.
///
/// Two keys compare equal exactly when they were minted for the same type.
/// The compiler assigns every monomorphized type its own [`TypeId`], so minting
/// needs no registration table and cannot fail.
///
/// The carried type name is diagnostic only and never participates in
/// equality, ordering, or hashing. Keys are stable for the lifetime of the
/// process, not across runs or rebuilds.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Mints the key for `T`.
	#[inline]
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: type_name::<T>(),
		}
	}

	/// Returns the underlying type identity.
	#[inline]
	pub fn type_id(self) -> TypeId {
		self.id
	}

	/// Returns the type name this key was minted for.
	#[inline]
	pub fn name(self) -> &'static str {
		self.name
	}

	/// Returns true if this key was minted for `T`.
	#[inline]
	pub fn is<T: ?Sized + 'static>(self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for TypeKey {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl PartialOrd for TypeKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for TypeKey {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id.cmp(&other.id)
	}
}

impl std::fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TypeKey({})", self.name)
	}
}

impl std::fmt::Display for TypeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	struct Marker;

	#[test]
	fn same_type_mints_equal_keys() {
		assert_eq!(TypeKey::of::<Marker>(), TypeKey::of::<Marker>());
		assert_eq!(TypeKey::of::<str>(), TypeKey::of::<str>());
	}

	#[test]
	fn distinct_types_mint_distinct_keys() {
		assert_ne!(TypeKey::of::<u32>(), TypeKey::of::<i32>());
		assert_ne!(TypeKey::of::<Marker>(), TypeKey::of::<&'static Marker>());
		assert_ne!(TypeKey::of::<(u8, u16)>(), TypeKey::of::<(u16, u8)>());
	}

	#[test]
	fn hashing_follows_identity() {
		let keys: HashSet<_> = [TypeKey::of::<u8>(), TypeKey::of::<u8>(), TypeKey::of::<u16>()].into_iter().collect();
		assert_eq!(keys.len(), 2);
	}

	#[test]
	fn is_and_name_report_minted_type() {
		let key = TypeKey::of::<Marker>();
		assert!(key.is::<Marker>());
		assert!(!key.is::<u8>());
		assert!(key.name().ends_with("Marker"));
		assert_eq!(key.to_string(), key.name());
		assert_eq!(format!("{key:?}"), format!("TypeKey({})", key.name()));
	}
}
