//! Normalization of type combinations before minting.
//!
//! Families identify a type regardless of how it is borrowed: `T`, `&T`,
//! `&mut T` and `&&T` all decay to the same bare type. Tuples act as type
//! packs and decay element-wise, so `(&A, B)` and `(A, &mut B)` share one key.
//!
//! Stable Rust has no way to blanket-implement "every non-reference type", so
//! user types opt in through [`decay!`](crate::decay!):
//!
//! ```rust
//! struct Position;
//! struct Velocity;
//! kindred_family::decay!(Position, Velocity);
//! ```
//!
//! Generic types implement [`Decay`] by hand with `type Bare = Self;`. Types
//! from other crates that lack an impl can still be identified without
//! normalization through [`Family::identify_exact`](crate::Family::identify_exact).

use std::any::Any;
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::ops::{Range, RangeInclusive};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

/// Maps a type to the bare type that identifies it.
pub trait Decay {
	/// The type with references stripped.
	type Bare: ?Sized + 'static;
}

/// Implements [`Decay`] as identity for the listed types.
#[macro_export]
macro_rules! decay {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::Decay for $ty {
				type Bare = Self;
			}
		)+
	};
}

impl<T: ?Sized + Decay> Decay for &T {
	type Bare = T::Bare;
}

impl<T: ?Sized + Decay> Decay for &mut T {
	type Bare = T::Bare;
}

crate::decay!(
	bool, char, str, String, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
	std::any::TypeId, std::time::Duration, std::path::Path, std::path::PathBuf,
	dyn Any, dyn Any + Send, dyn Any + Send + Sync,
);

/// Bare form of a tuple type pack.
///
/// Each element is wrapped in [`PhantomData`] so that packs holding references
/// to unsized types (`(u32, &str)`) still decay to a valid type. Never
/// constructed.
pub struct Pack<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized + 'static> Decay for *const T {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for *mut T {
	type Bare = Self;
}

impl<T: 'static> Decay for [T] {
	type Bare = Self;
}

impl<T: 'static, const N: usize> Decay for [T; N] {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for PhantomData<T> {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for Box<T> {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for Rc<T> {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for Arc<T> {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for NonNull<T> {
	type Bare = Self;
}

impl<T: ?Sized + ToOwned + 'static> Decay for Cow<'static, T>
where
	T::Owned: 'static,
{
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for Mutex<T> {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for RwLock<T> {
	type Bare = Self;
}

impl<T: 'static> Decay for Range<T> {
	type Bare = Self;
}

impl<T: 'static> Decay for RangeInclusive<T> {
	type Bare = Self;
}

impl<T: 'static> Decay for Cell<T> {
	type Bare = Self;
}

impl<T: ?Sized + 'static> Decay for RefCell<T> {
	type Bare = Self;
}

impl<T: 'static> Decay for Option<T> {
	type Bare = Self;
}

impl<T: 'static, E: 'static> Decay for Result<T, E> {
	type Bare = Self;
}

impl<T: 'static> Decay for Vec<T> {
	type Bare = Self;
}

impl<T: 'static> Decay for VecDeque<T> {
	type Bare = Self;
}

impl<T: 'static, S: 'static> Decay for HashSet<T, S> {
	type Bare = Self;
}

impl<K: 'static, V: 'static, S: 'static> Decay for HashMap<K, V, S> {
	type Bare = Self;
}

impl<T: 'static> Decay for BTreeSet<T> {
	type Bare = Self;
}

impl<K: 'static, V: 'static> Decay for BTreeMap<K, V> {
	type Bare = Self;
}

macro_rules! decay_fn {
	($($arg:ident),*) => {
		impl<R: 'static, $($arg: 'static),*> Decay for fn($($arg),*) -> R {
			type Bare = Self;
		}
	};
}

decay_fn!();
decay_fn!(A);
decay_fn!(A, B);
decay_fn!(A, B, C);
decay_fn!(A, B, C, D);
decay_fn!(A, B, C, D, E);
decay_fn!(A, B, C, D, E, F);

macro_rules! decay_tuple {
	($($name:ident),*) => {
		impl<$($name: Decay),*> Decay for ($($name,)*) {
			type Bare = Pack<($(PhantomData<$name::Bare>,)*)>;
		}
	};
}

decay_tuple!();
decay_tuple!(A);
decay_tuple!(A, B);
decay_tuple!(A, B, C);
decay_tuple!(A, B, C, D);
decay_tuple!(A, B, C, D, E);
decay_tuple!(A, B, C, D, E, F);
decay_tuple!(A, B, C, D, E, F, G);
decay_tuple!(A, B, C, D, E, F, G, H);
decay_tuple!(A, B, C, D, E, F, G, H, I);
decay_tuple!(A, B, C, D, E, F, G, H, I, J);
decay_tuple!(A, B, C, D, E, F, G, H, I, J, K);
decay_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
