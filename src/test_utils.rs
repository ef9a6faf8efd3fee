use std::io::Read;

use crate::{
    io::{ByteInput, ByteOutput},
    tape::Tape,
    ExecutionError, Interpreter, TapeAddr,
};

#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: Tape<u8>,
    pub tape_ptr: TapeAddr,
    pub instruction_ptr: usize,
    pub output: Vec<u8>,
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self {
            result: None,
            tape: Default::default(),
            tape_ptr: TapeAddr(0),
            instruction_ptr: 0,
            output: Default::default(),
        }
    }
}

/// Run `program` on a fresh byte cell engine, reading bytes from `input`.
pub fn test_execute(program: &[u8], input: impl Read) -> ExecutionState {
    let mut interp: Interpreter<u8> = Interpreter::new();
    let mut input = ByteInput::new(input);
    let mut output = ByteOutput::new(Vec::new());
    let result = interp.run(program, &mut input, &mut output);

    ExecutionState {
        result: Some(result),
        tape_ptr: interp.memory_pointer(),
        instruction_ptr: interp.instruction_pointer(),
        tape: interp.into_tape(),
        output: output.into_inner(),
    }
}
