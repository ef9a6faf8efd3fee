use thiserror::Error;
use tracing::{debug, warn};

use crate::brackets::{scan_backward_match, scan_forward_match, UnmatchedBracket};
use crate::io::{CallbackError, CellInput, CellOutput};
use crate::program::Opcode;
use crate::tape::Tape;
use crate::types::Cell;
use crate::TapeAddr;

/// Error type for execution
#[derive(Debug, Error, PartialEq)]
pub enum ExecutionError {
    /// A loop jump found no partner bracket.
    #[error("{0}")]
    UnmatchedBracket(#[from] UnmatchedBracket),
    /// The input or output callback failed.
    #[error("Callback failure: {0}")]
    CallbackFailure(#[from] CallbackError),
}

/// The execution engine for a single cell width.
///
/// Tape and both pointers persist between calls to [`Interpreter::run`], so
/// several programs can be run one after another against the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter<C: Cell> {
    tape: Tape<C>,
    memory_pointer: TapeAddr,
    instruction_pointer: usize,
}

impl<C: Cell> Interpreter<C> {
    /// Create an engine with a zeroed tape and both pointers at 0.
    pub fn new() -> Self {
        Self::with_state(Tape::new(), TapeAddr::default(), 0)
    }

    /// Create an engine from existing state.
    pub fn with_state(tape: Tape<C>, memory_pointer: TapeAddr, instruction_pointer: usize) -> Self {
        Self {
            tape,
            memory_pointer,
            instruction_pointer,
        }
    }

    pub fn tape(&self) -> &Tape<C> {
        &self.tape
    }

    pub fn into_tape(self) -> Tape<C> {
        self.tape
    }

    pub fn memory_pointer(&self) -> TapeAddr {
        self.memory_pointer
    }

    pub fn instruction_pointer(&self) -> usize {
        self.instruction_pointer
    }

    /// Value of the cell under the memory pointer.
    pub fn current_cell(&self) -> C {
        self.tape.get(self.memory_pointer)
    }

    /// Move the instruction pointer back to the start, for running another
    /// program against the current tape.
    pub fn rewind(&mut self) {
        self.instruction_pointer = 0;
    }

    /// Run `program` until the instruction pointer passes its end.
    ///
    /// Execution starts at the current instruction pointer. On error the
    /// pointers are left where the failure happened.
    pub fn run(
        &mut self,
        program: &[u8],
        input: &mut impl CellInput<C>,
        output: &mut impl CellOutput<C>,
    ) -> Result<(), ExecutionError> {
        debug!(
            width = %C::WIDTH,
            program_len = program.len(),
            instruction_pointer = self.instruction_pointer,
            memory_pointer = %self.memory_pointer,
            "run starting"
        );
        let result = self.dispatch(program, input, output);
        match result {
            Ok(()) => debug!(
                instruction_pointer = self.instruction_pointer,
                memory_pointer = %self.memory_pointer,
                "run finished"
            ),
            Err(ref err) => warn!(
                instruction_pointer = self.instruction_pointer,
                memory_pointer = %self.memory_pointer,
                error = %err,
                "run aborted"
            ),
        }
        result
    }

    fn dispatch(
        &mut self,
        program: &[u8],
        input: &mut impl CellInput<C>,
        output: &mut impl CellOutput<C>,
    ) -> Result<(), ExecutionError> {
        while let Some(&byte) = program.get(self.instruction_pointer) {
            match Opcode::decode(byte) {
                Some(Opcode::Increment) => self.tape.increment(self.memory_pointer),
                Some(Opcode::Decrement) => self.tape.decrement(self.memory_pointer),
                Some(Opcode::Right) => self.memory_pointer += TapeAddr(1),
                Some(Opcode::Left) => self.memory_pointer -= TapeAddr(1),
                Some(Opcode::BeginLoop) => {
                    if self.current_cell().is_zero() {
                        self.instruction_pointer =
                            scan_forward_match(program, self.instruction_pointer)?;
                    }
                }
                Some(Opcode::EndLoop) => {
                    if !self.current_cell().is_zero() {
                        self.instruction_pointer =
                            scan_backward_match(program, self.instruction_pointer)?;
                    }
                }
                Some(Opcode::Input) => {
                    output.flush()?;
                    let value = input.read_cell()?;
                    self.tape.set(self.memory_pointer, value);
                }
                Some(Opcode::Output) => output.write_cell(self.current_cell())?,
                None => (),
            }
            self.instruction_pointer += 1;
        }
        Ok(())
    }
}

impl<C: Cell> Default for Interpreter<C> {
    fn default() -> Self {
        Self::new()
    }
}
