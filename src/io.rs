//! Input and output callbacks for the `,` and `.` instructions.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Read, Write},
};

use thiserror::Error;

use crate::types::Cell;

/// Error raised by an I/O callback. Always fatal for the run.
#[derive(Debug, Error)]
pub enum CallbackError {
    /// The input source has nothing more to give.
    #[error("Input exhausted")]
    InputExhausted,
    /// Underlying IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PartialEq for CallbackError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(l0), Self::Io(r0)) => l0.kind() == r0.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Source of values for the `,` instruction.
pub trait CellInput<C: Cell> {
    /// Produce exactly one cell value. May block.
    fn read_cell(&mut self) -> Result<C, CallbackError>;
}

/// Sink for values from the `.` instruction.
pub trait CellOutput<C: Cell> {
    fn write_cell(&mut self, value: C) -> Result<(), CallbackError>;

    /// Called before the engine blocks on input, so prompts become visible.
    fn flush(&mut self) -> Result<(), CallbackError> {
        Ok(())
    }
}

/// Scripted input. Running dry is an error.
impl<C: Cell> CellInput<C> for VecDeque<C> {
    fn read_cell(&mut self) -> Result<C, CallbackError> {
        self.pop_front().ok_or(CallbackError::InputExhausted)
    }
}

/// Collects every output value.
impl<C: Cell> CellOutput<C> for Vec<C> {
    fn write_cell(&mut self, value: C) -> Result<(), CallbackError> {
        self.push(value);
        Ok(())
    }
}

impl<C: Cell, T: CellInput<C> + ?Sized> CellInput<C> for &mut T {
    fn read_cell(&mut self) -> Result<C, CallbackError> {
        (**self).read_cell()
    }
}

impl<C: Cell, T: CellOutput<C> + ?Sized> CellOutput<C> for &mut T {
    fn write_cell(&mut self, value: C) -> Result<(), CallbackError> {
        (**self).write_cell(value)
    }

    fn flush(&mut self) -> Result<(), CallbackError> {
        (**self).flush()
    }
}

/// Reads one byte per `,` from a byte stream.
///
/// At end of stream the cell is set to 0.
#[derive(Debug)]
pub struct ByteInput<R: Read> {
    inner: R,
}

impl<R: Read> ByteInput<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<C: Cell, R: Read> CellInput<C> for ByteInput<R> {
    fn read_cell(&mut self) -> Result<C, CallbackError> {
        let mut tmp: [u8; 1] = [0; 1];
        loop {
            match self.inner.read(&mut tmp) {
                Ok(0) => return Ok(C::default()),
                Ok(_) => return Ok(C::from_byte(tmp[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// Reads a whole line per `,` and keeps its first byte, the way an
/// interactive console prompt behaves.
///
/// An empty line gives `\n`. End of stream is [`CallbackError::InputExhausted`].
#[derive(Debug)]
pub struct LineInput<R: BufRead> {
    inner: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: Vec::new(),
        }
    }
}

impl<C: Cell, R: BufRead> CellInput<C> for LineInput<R> {
    fn read_cell(&mut self) -> Result<C, CallbackError> {
        self.line.clear();
        if self.inner.read_until(b'\n', &mut self.line)? == 0 {
            return Err(CallbackError::InputExhausted);
        }
        let first = match self.line.first() {
            Some(b'\r') | None => b'\n',
            Some(b) => *b,
        };
        Ok(C::from_byte(first))
    }
}

/// Writes the low byte of each output cell to a byte stream.
#[derive(Debug)]
pub struct ByteOutput<W: Write> {
    inner: W,
}

impl<W: Write> ByteOutput<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<C: Cell, W: Write> CellOutput<C> for ByteOutput<W> {
    fn write_cell(&mut self, value: C) -> Result<(), CallbackError> {
        self.inner.write_all(&[value.low_byte()])?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), CallbackError> {
        self.inner.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::{ByteInput, ByteOutput, CallbackError, CellInput, CellOutput, LineInput};

    #[test]
    fn test_scripted_input() {
        let mut input: VecDeque<u8> = VecDeque::from([1, 2]);
        assert_eq!(input.read_cell(), Ok(1));
        assert_eq!(input.read_cell(), Ok(2));
        assert_eq!(input.read_cell(), Err(CallbackError::InputExhausted));
    }

    #[test]
    fn test_byte_input_eof_is_zero() {
        let mut input = ByteInput::new(&b"A"[..]);
        assert_eq!(CellInput::<u16>::read_cell(&mut input), Ok(65));
        assert_eq!(CellInput::<u16>::read_cell(&mut input), Ok(0));
    }

    #[test]
    fn test_line_input() {
        let mut input = LineInput::new(&b"hello\n\nx\r\n\r\n"[..]);
        assert_eq!(CellInput::<u8>::read_cell(&mut input), Ok(b'h'));
        assert_eq!(CellInput::<u8>::read_cell(&mut input), Ok(b'\n'));
        assert_eq!(CellInput::<u8>::read_cell(&mut input), Ok(b'x'));
        assert_eq!(CellInput::<u8>::read_cell(&mut input), Ok(b'\n'));
        assert_eq!(
            CellInput::<u8>::read_cell(&mut input),
            Err(CallbackError::InputExhausted)
        );
    }

    #[test]
    fn test_byte_output_truncates() {
        let mut output = ByteOutput::new(Vec::new());
        output.write_cell(0x141u32).unwrap();
        output.write_cell(b'B').unwrap();
        CellOutput::<u8>::flush(&mut output).unwrap();
        assert_eq!(output.into_inner(), b"AB");
    }
}
