//! Fuzzing helper function

use std::collections::VecDeque;
use std::fmt::Debug;

use brainfudge::CellWidth;

#[derive(arbitrary::Arbitrary)]
pub struct FuzzInputSrc {
    pub code: Vec<u8>,
    pub width: CellWidth,
    pub input: VecDeque<u8>,
}

impl FuzzInputSrc {
    /// The code with every `]` removed. Without backward jumps every run
    /// terminates.
    pub fn forward_only(&self) -> Vec<u8> {
        self.code.iter().copied().filter(|b| *b != b']').collect()
    }
}

impl Debug for FuzzInputSrc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzInputSrc")
            .field("code", &String::from_utf8_lossy(&self.code))
            .field("width", &self.width)
            .field("input", &self.input)
            .finish()
    }
}
