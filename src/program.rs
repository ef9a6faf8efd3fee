//! The program store and instruction decoding

use std::ops::Deref;

/// The eight instructions. Every other byte is a comment.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Opcode {
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `>`
    Right,
    /// `<`
    Left,
    /// `[`
    BeginLoop,
    /// `]`
    EndLoop,
    /// `,`
    Input,
    /// `.`
    Output,
}

impl Opcode {
    /// Decode a program byte, `None` for comment bytes.
    #[inline]
    pub fn decode(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Opcode::Increment),
            b'-' => Some(Opcode::Decrement),
            b'>' => Some(Opcode::Right),
            b'<' => Some(Opcode::Left),
            b'[' => Some(Opcode::BeginLoop),
            b']' => Some(Opcode::EndLoop),
            b',' => Some(Opcode::Input),
            b'.' => Some(Opcode::Output),
            _ => None,
        }
    }

    /// The source byte for this instruction.
    pub fn as_byte(&self) -> u8 {
        match self {
            Opcode::Increment => b'+',
            Opcode::Decrement => b'-',
            Opcode::Right => b'>',
            Opcode::Left => b'<',
            Opcode::BeginLoop => b'[',
            Opcode::EndLoop => b']',
            Opcode::Input => b',',
            Opcode::Output => b'.',
        }
    }
}

/// An immutable program: the raw source bytes, comments included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Program {
    code: Box<[u8]>,
}

impl Program {
    pub fn new(code: impl Into<Box<[u8]>>) -> Self {
        Self { code: code.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.code
    }

    /// Iterate over the instructions with their positions, skipping comments.
    pub fn instructions(&self) -> impl Iterator<Item = (usize, Opcode)> + '_ {
        self.code
            .iter()
            .enumerate()
            .filter_map(|(pos, b)| Opcode::decode(*b).map(|op| (pos, op)))
    }
}

impl Deref for Program {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.code
    }
}

impl AsRef<[u8]> for Program {
    fn as_ref(&self) -> &[u8] {
        &self.code
    }
}

impl From<Vec<u8>> for Program {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for Program {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Program {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}
