//! Append-only key registry backing a family.

use rustc_hash::FxHashMap;

use crate::{FamilyError, FamilyId, TypeKey};

/// Strategy used to find a key in a [`KeyRegistry`].
///
/// Both strategies assign identical identifiers; they differ only in lookup cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
	/// Scan the keys in insertion order.
	///
	/// Cheapest for the handful of types a family usually sees.
	#[default]
	Linear,
	/// Keep a hashed side index from key to identifier.
	Hashed,
}

/// Ordered, append-only sequence of minted keys.
///
/// A key's identifier is its insertion position. The registry never reorders
/// or removes keys, so identifiers stay valid for its whole lifetime.
///
/// [`add`](Self::add) and [`resolve`](Self::resolve) trust their caller:
/// adding a present key or resolving an absent one is an internal logic fault
/// and panics. The `try_` variants report the same conditions as
/// [`FamilyError`].
#[derive(Debug)]
pub struct KeyRegistry {
	label: &'static str,
	keys: Vec<TypeKey>,
	index: Option<FxHashMap<TypeKey, FamilyId>>,
}

impl KeyRegistry {
	/// Creates an empty registry.
	pub fn new(label: &'static str, lookup: Lookup, capacity: usize) -> Self {
		let index = match lookup {
			Lookup::Linear => None,
			Lookup::Hashed => Some(FxHashMap::with_capacity_and_hasher(capacity, Default::default())),
		};
		Self {
			label,
			keys: Vec::with_capacity(capacity),
			index,
		}
	}

	/// Returns the label used in diagnostics.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the lookup strategy in use.
	pub fn lookup(&self) -> Lookup {
		if self.index.is_some() { Lookup::Hashed } else { Lookup::Linear }
	}

	/// Returns true if `key` has been added.
	#[inline]
	pub fn contains(&self, key: TypeKey) -> bool {
		self.position(key).is_some()
	}

	/// Appends `key` and returns its identifier.
	///
	/// The caller must have checked that `key` is absent. Debug builds verify it.
	///
	/// # Panics
	///
	/// Panics if the registry already holds `u32::MAX + 1` keys, or in debug
	/// builds if `key` is already present.
	pub fn add(&mut self, key: TypeKey) -> FamilyId {
		#[cfg(debug_assertions)]
		if self.contains(key) {
			fatal(FamilyError::DuplicateKey {
				family: self.label,
				ty: key.name(),
			});
		}
		match self.push(key) {
			Ok(id) => id,
			Err(err) => fatal(err),
		}
	}

	/// Appends `key` after checking that it is absent.
	pub fn try_add(&mut self, key: TypeKey) -> Result<FamilyId, FamilyError> {
		if self.contains(key) {
			return Err(FamilyError::DuplicateKey {
				family: self.label,
				ty: key.name(),
			});
		}
		self.push(key)
	}

	/// Returns the identifier of a key known to be present.
	///
	/// # Panics
	///
	/// Panics if `key` was never added.
	pub fn resolve(&self, key: TypeKey) -> FamilyId {
		match self.try_resolve(key) {
			Ok(id) => id,
			Err(err) => fatal(err),
		}
	}

	/// Returns the identifier of `key`, or [`FamilyError::UnknownKey`].
	pub fn try_resolve(&self, key: TypeKey) -> Result<FamilyId, FamilyError> {
		let id = self.position(key).ok_or(FamilyError::UnknownKey {
			family: self.label,
			ty: key.name(),
		})?;
		debug_assert_eq!(self.keys[id.index()].type_id(), key.type_id());
		Ok(id)
	}

	/// Returns the key stored under `id`.
	#[inline]
	pub fn key(&self, id: FamilyId) -> Option<TypeKey> {
		self.keys.get(id.index()).copied()
	}

	/// Returns all keys in insertion order.
	#[inline]
	pub fn keys(&self) -> &[TypeKey] {
		&self.keys
	}

	/// Returns the number of keys.
	#[inline]
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns true if no key has been added.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	fn position(&self, key: TypeKey) -> Option<FamilyId> {
		match &self.index {
			Some(index) => index.get(&key).copied(),
			None => self.keys.iter().position(|&k| k == key).and_then(FamilyId::from_index),
		}
	}

	fn push(&mut self, key: TypeKey) -> Result<FamilyId, FamilyError> {
		let id = FamilyId::from_index(self.keys.len()).ok_or(FamilyError::Exhausted { family: self.label })?;
		self.keys.push(key);
		if let Some(index) = &mut self.index {
			index.insert(key, id);
		}
		Ok(id)
	}
}

#[cold]
#[track_caller]
fn fatal(err: FamilyError) -> ! {
	tracing::error!(error = %err, "family.fatal");
	panic!("{err}");
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	struct Alpha;
	struct Beta;

	#[rstest]
	#[case(Lookup::Linear)]
	#[case(Lookup::Hashed)]
	fn add_then_resolve(#[case] lookup: Lookup) {
		let mut registry = KeyRegistry::new("test", lookup, 0);
		let alpha = TypeKey::of::<Alpha>();
		let beta = TypeKey::of::<Beta>();

		assert!(!registry.contains(alpha));
		assert_eq!(registry.add(alpha), FamilyId(0));
		assert_eq!(registry.add(beta), FamilyId(1));

		assert!(registry.contains(alpha));
		assert_eq!(registry.resolve(alpha), FamilyId(0));
		assert_eq!(registry.resolve(beta), FamilyId(1));
		assert_eq!(registry.keys(), &[alpha, beta]);
		assert_eq!(registry.key(FamilyId(1)), Some(beta));
		assert_eq!(registry.key(FamilyId(2)), None);
		assert_eq!(registry.lookup(), lookup);
	}

	#[rstest]
	#[case(Lookup::Linear)]
	#[case(Lookup::Hashed)]
	fn checked_operations_report_violations(#[case] lookup: Lookup) {
		let mut registry = KeyRegistry::new("checked", lookup, 4);
		let alpha = TypeKey::of::<Alpha>();

		assert_eq!(
			registry.try_resolve(alpha),
			Err(FamilyError::UnknownKey {
				family: "checked",
				ty: alpha.name(),
			})
		);
		assert_eq!(registry.try_add(alpha), Ok(FamilyId(0)));
		assert_eq!(
			registry.try_add(alpha),
			Err(FamilyError::DuplicateKey {
				family: "checked",
				ty: alpha.name(),
			})
		);
		assert_eq!(registry.len(), 1);
	}

	#[test]
	#[should_panic(expected = "is not registered in family fatal")]
	fn resolving_unknown_key_is_fatal() {
		let registry = KeyRegistry::new("fatal", Lookup::Linear, 0);
		registry.resolve(TypeKey::of::<Alpha>());
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic(expected = "is already registered in family fatal")]
	fn duplicate_add_is_fatal_in_debug() {
		let mut registry = KeyRegistry::new("fatal", Lookup::Hashed, 0);
		registry.add(TypeKey::of::<Alpha>());
		registry.add(TypeKey::of::<Alpha>());
	}

	#[test]
	fn empty_registry() {
		let registry = KeyRegistry::new("empty", Lookup::default(), 0);
		assert!(registry.is_empty());
		assert_eq!(registry.len(), 0);
		assert_eq!(registry.label(), "empty");
	}
}
