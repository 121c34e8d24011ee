//! Fixed-capacity bump arena over a caller-supplied slice.
//!
//! The caller owns the backing storage; the arena only borrows it and hands
//! out consecutive sub-slices. Nothing is freed individually: the whole
//! arena is [`reset`](Arena::reset) at once. Allocation never grows the
//! backing storage, so lexing performs no heap allocation.

use thiserror::Error;

/// An allocation did not fit in the remaining capacity.
///
/// Carries no document position: running out of room is a sizing problem,
/// not a property of the input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("arena exhausted: requested {requested}, {remaining} remaining")]
pub struct ArenaExhausted {
    /// Number of elements asked for.
    pub requested: usize,
    /// Number of elements still free.
    pub remaining: usize,
}

/// Bump allocator over `&'buf mut [T]`.
///
/// # Invariant
///
/// Elements at `used..capacity` hold `T::default()`. For the arenas the
/// lexer uses, that is a `0x00` string byte or a `TokenKind::None` token,
/// which is what lets readers stop at the first unwritten slot.
#[derive(Debug)]
pub struct Arena<'buf, T> {
    buf: &'buf mut [T],
    used: usize,
}

impl<'buf, T: Copy + Default> Arena<'buf, T> {
    /// Take over `buf` as arena storage, filling it with `T::default()`.
    pub fn new(buf: &'buf mut [T]) -> Self {
        buf.fill(T::default());
        Self { buf, used: 0 }
    }

    /// Total number of elements the arena can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of elements handed out so far.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Number of elements still free.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.used
    }

    /// Returns `true` if `n` more elements would fit.
    #[inline]
    pub fn fits(&self, n: usize) -> bool {
        n <= self.remaining()
    }

    /// Carve the next `n` elements out of the arena.
    ///
    /// All-or-nothing: on failure nothing is handed out and `used()` is
    /// unchanged.
    pub fn alloc(&mut self, n: usize) -> Result<&mut [T], ArenaExhausted> {
        if !self.fits(n) {
            return Err(ArenaExhausted {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let start = self.used;
        self.used += n;
        Ok(&mut self.buf[start..start + n])
    }

    /// The whole backing storage, written and unwritten.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..]
    }

    /// The elements handed out so far.
    #[inline]
    pub fn allocated(&self) -> &[T] {
        &self.buf[..self.used]
    }

    /// Refill the storage with `T::default()` and start over.
    pub fn reset(&mut self) {
        self.buf.fill(T::default());
        self.used = 0;
    }

    /// Give up the arena, keeping a shared borrow of its storage.
    pub fn into_slice(self) -> &'buf [T] {
        self.buf
    }
}
