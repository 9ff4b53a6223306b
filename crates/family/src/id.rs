/// Identifier assigned to a type within one family.
///
/// Identifiers are dense: the n-th type a family sees gets `FamilyId(n)`, so
/// they can index per-family dispatch tables directly. They carry no meaning
/// outside the family that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FamilyId(pub u32);

impl FamilyId {
	/// Returns the underlying u32 value.
	#[inline]
	pub const fn as_u32(self) -> u32 {
		self.0
	}

	/// Returns the identifier as a table index.
	#[inline]
	pub const fn index(self) -> usize {
		self.0 as usize
	}

	pub(crate) fn from_index(index: usize) -> Option<Self> {
		u32::try_from(index).ok().map(Self)
	}
}

impl std::fmt::Display for FamilyId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "FamilyId({})", self.0)
	}
}

impl From<FamilyId> for usize {
	fn from(id: FamilyId) -> Self {
		id.index()
	}
}
