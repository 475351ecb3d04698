//! Classification bit-sets and name-based flag lookup.
//!
//! Each entity kind declares its own `bitflags!` mask type. Keeping the mask
//! a distinct type per kind makes cross-kind comparison a compile error
//! rather than a runtime surprise.

// Re-exported so downstream generic code can bring the supertrait's
// methods (`contains`, `intersects`, `is_empty`) into scope.
pub use bitflags::Flags;

/// Contract for a kind's classification mask.
///
/// Implemented automatically by every `bitflags!`-generated type that is
/// `Copy + Eq + Debug`, which all Muster kinds are. The blanket impl means
/// kinds never implement this by hand.
pub trait ClassFlags: Flags + Copy + Eq + std::fmt::Debug {}

impl<F> ClassFlags for F where F: Flags + Copy + Eq + std::fmt::Debug {}

/// Looks up a single flag by name, case-insensitively.
///
/// Returns `None` when no flag of `F` carries that name. Used by the sort
/// dispatcher to resolve sort keys like `sort:fortified` into membership
/// comparators.
#[must_use]
pub fn flag_named<F: ClassFlags>(name: &str) -> Option<F> {
    F::FLAGS
        .iter()
        .find(|flag| flag.name().eq_ignore_ascii_case(name))
        .map(|flag| *flag.value())
}

/// Enumerates the names of every flag defined on `F`, in declaration order.
///
/// Callers use this for help text ("known keywords for settlements: ...").
pub fn flag_names<F: ClassFlags>() -> impl Iterator<Item = &'static str> {
    F::FLAGS.iter().map(bitflags::Flag::name)
}
