//! An engine whose cell width is picked at run time.

use crate::io::{CellInput, CellOutput};
use crate::settings::MachineSettings;
use crate::tape::Tape;
use crate::{CellWidth, ExecutionError, Interpreter, TapeAddr, UnsupportedCellWidth};

/// One [`Interpreter`] per supported cell width.
///
/// The width is fixed once built, so the dispatch loop inside each variant is
/// specialised for its cell type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyInterpreter {
    U8(Interpreter<u8>),
    U16(Interpreter<u16>),
    U32(Interpreter<u32>),
    U64(Interpreter<u64>),
}

/// Input/output usable with every supported cell width.
pub trait AnyCellInput:
    CellInput<u8> + CellInput<u16> + CellInput<u32> + CellInput<u64>
{
}

impl<T> AnyCellInput for T where
    T: CellInput<u8> + CellInput<u16> + CellInput<u32> + CellInput<u64>
{
}

pub trait AnyCellOutput:
    CellOutput<u8> + CellOutput<u16> + CellOutput<u32> + CellOutput<u64>
{
}

impl<T> AnyCellOutput for T where
    T: CellOutput<u8> + CellOutput<u16> + CellOutput<u32> + CellOutput<u64>
{
}

impl AnyInterpreter {
    /// Build a zeroed engine. Signed widths are refused.
    pub fn new(
        cell_width: CellWidth,
        memory_pointer: TapeAddr,
        instruction_pointer: usize,
    ) -> Result<Self, UnsupportedCellWidth> {
        Ok(match cell_width {
            CellWidth::U8 => Self::U8(Interpreter::with_state(
                Tape::new(),
                memory_pointer,
                instruction_pointer,
            )),
            CellWidth::U16 => Self::U16(Interpreter::with_state(
                Tape::new(),
                memory_pointer,
                instruction_pointer,
            )),
            CellWidth::U32 => Self::U32(Interpreter::with_state(
                Tape::new(),
                memory_pointer,
                instruction_pointer,
            )),
            CellWidth::U64 => Self::U64(Interpreter::with_state(
                Tape::new(),
                memory_pointer,
                instruction_pointer,
            )),
            CellWidth::I8 | CellWidth::I16 | CellWidth::I32 | CellWidth::I64 => {
                return Err(UnsupportedCellWidth(cell_width))
            }
        })
    }

    pub fn from_settings(settings: &MachineSettings) -> Result<Self, UnsupportedCellWidth> {
        Self::new(
            settings.cell_width,
            settings.memory_pointer,
            settings.instruction_pointer,
        )
    }

    pub fn cell_width(&self) -> CellWidth {
        match self {
            Self::U8(_) => CellWidth::U8,
            Self::U16(_) => CellWidth::U16,
            Self::U32(_) => CellWidth::U32,
            Self::U64(_) => CellWidth::U64,
        }
    }

    pub fn memory_pointer(&self) -> TapeAddr {
        match self {
            Self::U8(i) => i.memory_pointer(),
            Self::U16(i) => i.memory_pointer(),
            Self::U32(i) => i.memory_pointer(),
            Self::U64(i) => i.memory_pointer(),
        }
    }

    pub fn instruction_pointer(&self) -> usize {
        match self {
            Self::U8(i) => i.instruction_pointer(),
            Self::U16(i) => i.instruction_pointer(),
            Self::U32(i) => i.instruction_pointer(),
            Self::U64(i) => i.instruction_pointer(),
        }
    }

    pub fn rewind(&mut self) {
        match self {
            Self::U8(i) => i.rewind(),
            Self::U16(i) => i.rewind(),
            Self::U32(i) => i.rewind(),
            Self::U64(i) => i.rewind(),
        }
    }

    /// Run `program`, see [`Interpreter::run`].
    pub fn run(
        &mut self,
        program: &[u8],
        input: &mut impl AnyCellInput,
        output: &mut impl AnyCellOutput,
    ) -> Result<(), ExecutionError> {
        match self {
            Self::U8(i) => i.run(program, input, output),
            Self::U16(i) => i.run(program, input, output),
            Self::U32(i) => i.run(program, input, output),
            Self::U64(i) => i.run(program, input, output),
        }
    }
}

impl From<Interpreter<u8>> for AnyInterpreter {
    fn from(value: Interpreter<u8>) -> Self {
        Self::U8(value)
    }
}

impl From<Interpreter<u16>> for AnyInterpreter {
    fn from(value: Interpreter<u16>) -> Self {
        Self::U16(value)
    }
}

impl From<Interpreter<u32>> for AnyInterpreter {
    fn from(value: Interpreter<u32>) -> Self {
        Self::U32(value)
    }
}

impl From<Interpreter<u64>> for AnyInterpreter {
    fn from(value: Interpreter<u64>) -> Self {
        Self::U64(value)
    }
}
