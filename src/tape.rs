//! The fixed size memory tape

use thiserror::Error;

use crate::{types::Cell, TapeAddr};

/// Number of cells on every tape: one per value of [`TapeAddr`].
pub const TAPE_LEN: usize = u16::MAX as usize + 1;

/// Error type for building a tape from caller supplied cells.
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq)]
pub enum TapeError {
    /// The supplied cells do not cover the full pointer range.
    #[error("Tape must have exactly {TAPE_LEN} cells, got {0}")]
    WrongLength(usize),
}

/// A tape of `C` cells, exactly [`TAPE_LEN`] long.
///
/// The length is fixed at construction, so indexing with any [`TapeAddr`]
/// is always in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape<C: Cell> {
    data: Box<[C]>,
}

impl<C: Cell> Tape<C> {
    /// Create a zeroed tape.
    pub fn new() -> Self {
        Self {
            data: vec![C::default(); TAPE_LEN].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, addr: TapeAddr) -> C {
        self.data[usize::from(addr)]
    }

    #[inline]
    pub fn set(&mut self, addr: TapeAddr, value: C) {
        self.data[usize::from(addr)] = value;
    }

    #[inline]
    pub fn increment(&mut self, addr: TapeAddr) {
        let cell = &mut self.data[usize::from(addr)];
        *cell = cell.increment();
    }

    #[inline]
    pub fn decrement(&mut self, addr: TapeAddr) {
        let cell = &mut self.data[usize::from(addr)];
        *cell = cell.decrement();
    }

    /// All cells, in address order.
    pub fn cells(&self) -> &[C] {
        &self.data
    }

    /// Check if every cell is zero.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|c| c.is_zero())
    }
}

impl<C: Cell> Default for Tape<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cell> TryFrom<Vec<C>> for Tape<C> {
    type Error = TapeError;

    fn try_from(value: Vec<C>) -> Result<Self, Self::Error> {
        if value.len() != TAPE_LEN {
            return Err(TapeError::WrongLength(value.len()));
        }
        Ok(Self {
            data: value.into_boxed_slice(),
        })
    }
}

impl<C: Cell> From<Tape<C>> for Vec<C> {
    fn from(value: Tape<C>) -> Self {
        value.data.into_vec()
    }
}
