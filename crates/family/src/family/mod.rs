//! Families: independent scopes that assign identifiers to types.
//!
//! A [`Family`] mints a [`TypeKey`] for the queried type on every call and
//! registers it the first time it is seen:
//!
//! ```rust
//! use kindred_family::Family;
//!
//! let family = Family::new();
//! let a = family.identify::<u32>();
//! let b = family.identify::<(u32, &str)>();
//! assert_ne!(a, b);
//! assert_eq!(a, family.identify::<&u32>());
//! ```
//!
//! Program-wide families are declared with [`family!`](crate::family!), which
//! backs a tag type with a lazily-initialized static:
//!
//! ```rust
//! use kindred_family::FamilyTag;
//!
//! kindred_family::family!(pub Components);
//!
//! assert_eq!(Components::identify::<u8>(), Components::identify::<&mut u8>());
//! ```

use parking_lot::RwLock;

use crate::{Decay, FamilyId, KeyRegistry, Lookup, TypeKey};

/// Construction options for a [`Family`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyConfig {
	/// Name used in logs and errors.
	pub label: &'static str,
	/// Key lookup strategy.
	pub lookup: Lookup,
	/// Number of keys to reserve up front.
	pub capacity: usize,
}

impl Default for FamilyConfig {
	fn default() -> Self {
		Self {
			label: "family",
			lookup: Lookup::default(),
			capacity: 0,
		}
	}
}

/// Builder for a configured [`Family`].
///
/// ```rust
/// use kindred_family::{Family, Lookup};
///
/// let family = Family::builder("messages").lookup(Lookup::Hashed).capacity(32).build();
/// assert_eq!(family.label(), "messages");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FamilyBuilder {
	config: FamilyConfig,
}

impl FamilyBuilder {
	/// Creates a builder with the given label and default options.
	pub fn new(label: &'static str) -> Self {
		Self {
			config: FamilyConfig {
				label,
				..FamilyConfig::default()
			},
		}
	}

	/// Sets the key lookup strategy.
	pub fn lookup(mut self, lookup: Lookup) -> Self {
		self.config.lookup = lookup;
		self
	}

	/// Reserves room for `capacity` keys.
	pub fn capacity(mut self, capacity: usize) -> Self {
		self.config.capacity = capacity;
		self
	}

	/// Returns the accumulated configuration.
	pub fn config(&self) -> FamilyConfig {
		self.config
	}

	/// Builds the family.
	pub fn build(self) -> Family {
		Family::with_config(self.config)
	}
}

/// Independent scope assigning a stable [`FamilyId`] to each type it is asked about.
///
/// Identifiers are dense within one family and have no relationship to the
/// identifiers of any other family, even for the same type.
///
/// Thread-safe. Lookups of known types share a read lock; the first query for
/// a type takes the write lock and re-checks before inserting, so concurrent
/// first use registers the type exactly once.
#[derive(Debug)]
pub struct Family {
	registry: RwLock<KeyRegistry>,
}

impl Default for Family {
	fn default() -> Self {
		Self::new()
	}
}

impl Family {
	/// Creates an empty family with default options.
	pub fn new() -> Self {
		Self::with_config(FamilyConfig::default())
	}

	/// Starts configuring a family.
	pub fn builder(label: &'static str) -> FamilyBuilder {
		FamilyBuilder::new(label)
	}

	/// Creates an empty family from explicit options.
	pub fn with_config(config: FamilyConfig) -> Self {
		tracing::trace!(family = config.label, lookup = ?config.lookup, capacity = config.capacity, "family.new");
		Self {
			registry: RwLock::new(KeyRegistry::new(config.label, config.lookup, config.capacity)),
		}
	}

	/// Returns the identifier of `T`, registering it on first use.
	///
	/// References are stripped first, so `T`, `&T` and `&mut T` share one
	/// identifier. Tuples are treated as type packs and stripped element-wise.
	#[inline]
	pub fn identify<T: ?Sized + Decay>(&self) -> FamilyId {
		self.identify_key(TypeKey::of::<T::Bare>())
	}

	/// Returns the identifier of `T` exactly as written, registering it on first use.
	///
	/// No references are stripped, so `identify_exact::<&u8>()` and
	/// `identify_exact::<u8>()` differ. Accepts any `'static` type, including
	/// types from other crates that do not implement [`Decay`].
	#[inline]
	pub fn identify_exact<T: ?Sized + 'static>(&self) -> FamilyId {
		self.identify_key(TypeKey::of::<T>())
	}

	/// Returns the identifier of an already minted key, registering it on first use.
	pub fn identify_key(&self, key: TypeKey) -> FamilyId {
		{
			let registry = self.registry.read();
			if registry.contains(key) {
				return registry.resolve(key);
			}
		}

		let mut registry = self.registry.write();
		if !registry.contains(key) {
			let id = registry.add(key);
			tracing::debug!(family = registry.label(), ty = key.name(), id = id.as_u32(), "family.register");
		}
		registry.resolve(key)
	}

	/// Returns the identifier of `T` without registering it.
	pub fn get<T: ?Sized + Decay>(&self) -> Option<FamilyId> {
		self.registry.read().try_resolve(TypeKey::of::<T::Bare>()).ok()
	}

	/// Returns true if `T` has been identified by this family.
	pub fn contains<T: ?Sized + Decay>(&self) -> bool {
		self.registry.read().contains(TypeKey::of::<T::Bare>())
	}

	/// Returns the key registered under `id`.
	pub fn key(&self, id: FamilyId) -> Option<TypeKey> {
		self.registry.read().key(id)
	}

	/// Returns the type name registered under `id`.
	pub fn name_of(&self, id: FamilyId) -> Option<&'static str> {
		self.key(id).map(TypeKey::name)
	}

	/// Returns a snapshot of all registered keys in identifier order.
	///
	/// Types identified after this call are not reflected.
	pub fn keys(&self) -> Vec<TypeKey> {
		self.registry.read().keys().to_vec()
	}

	/// Returns the number of registered types.
	pub fn len(&self) -> usize {
		self.registry.read().len()
	}

	/// Returns true if no type has been identified yet.
	pub fn is_empty(&self) -> bool {
		self.registry.read().is_empty()
	}

	/// Returns the family label.
	pub fn label(&self) -> &'static str {
		self.registry.read().label()
	}

	/// Returns the key lookup strategy.
	pub fn lookup(&self) -> Lookup {
		self.registry.read().lookup()
	}
}

/// Tag type bound to one program-wide [`Family`].
///
/// Implemented by [`family!`](crate::family!); every call site naming the same
/// tag shares one registry for the lifetime of the program.
pub trait FamilyTag: 'static {
	/// Returns the family backing this tag.
	fn family() -> &'static Family;

	/// Returns the identifier of `T` in this tag's family.
	#[inline]
	fn identify<T: ?Sized + Decay>() -> FamilyId {
		Self::family().identify::<T>()
	}

	/// Returns the identifier of `T` exactly as written in this tag's family.
	#[inline]
	fn identify_exact<T: ?Sized + 'static>() -> FamilyId {
		Self::family().identify_exact::<T>()
	}
}

/// Declares a tag type backed by a lazily-initialized static [`Family`].
///
/// ```rust
/// use kindred_family::{Family, FamilyTag, Lookup};
///
/// kindred_family::family!(
///     /// Message kinds routed by the dispatcher.
///     pub Messages => Family::builder("messages").lookup(Lookup::Hashed)
/// );
///
/// assert_eq!(Messages::family().lookup(), Lookup::Hashed);
/// ```
#[macro_export]
macro_rules! family {
	($(#[$meta:meta])* $vis:vis $name:ident) => {
		$crate::family!($(#[$meta])* $vis $name => $crate::Family::builder(::core::stringify!($name)));
	};
	($(#[$meta:meta])* $vis:vis $name:ident => $builder:expr) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
		$vis struct $name;

		impl $crate::FamilyTag for $name {
			fn family() -> &'static $crate::Family {
				static FAMILY: ::std::sync::LazyLock<$crate::Family> = ::std::sync::LazyLock::new(|| $crate::FamilyBuilder::build($builder));
				&FAMILY
			}
		}
	};
}
