use std::fmt::{self, Debug, Display};

use crate::debug;

/// A fixed-capacity LIFO stack of integers.
///
/// Storage is never resized: once `N` values are live, `push` is rejected.
#[derive(Clone)]
pub struct Stack<const N: usize = 10> {
    values: [i32; N],
    /// Next free slot; also the number of live values.
    next: usize,
}

impl<const N: usize> Stack<N> {
    pub fn new() -> Self {
        Self {
            values: [0; N],
            next: 0,
        }
    }

    /// Returns `false` (and leaves the stack untouched) if it's full.
    #[must_use]
    pub fn push(&mut self, value: i32) -> bool {
        if self.next == N {
            return false;
        }
        self.values[self.next] = value;
        self.next += 1;
        true
    }

    /// Panics on underflow.
    pub fn pop(&mut self) -> i32 {
        assert!(self.next > 0, "cannot pop an empty stack");
        self.next -= 1;
        self.values[self.next]
    }

    pub fn peek(&self) -> Option<i32> {
        self.as_slice().last().copied()
    }

    /// Forget every value. The old values stay in storage, but are dead.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    pub fn len(&self) -> usize {
        self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    pub fn is_full(&self) -> bool {
        self.next == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Live values, oldest first.
    pub fn as_slice(&self) -> &[i32] {
        &self.values[..self.next]
    }

    pub fn print(&self) {
        println!("{self}");
    }
}

impl<const N: usize> Default for Stack<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// `( 5 3 8 )`, oldest first.
impl<const N: usize> Display for Stack<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug::write_list(f, self.as_slice())
    }
}

impl<const N: usize> Debug for Stack<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack<{}> ", N)?;
        debug::write_list(f, self.as_slice())
    }
}
