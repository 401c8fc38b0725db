//! Helpers for Display/Debug impls.

use std::fmt::{self, Display};

/// Write a bracketed, space-separated list: `( 1 2 3 )`. Empty is `( )`.
pub(crate) fn write_list<T: Display>(f: &mut impl fmt::Write, items: &[T]) -> fmt::Result {
    write!(f, "(")?;
    for item in items {
        write!(f, " {item}")?;
    }
    write!(f, " )")
}

/// Adapter for printing a slice with `write_list`.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<'a, T: Display> Display for DisplayList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}
