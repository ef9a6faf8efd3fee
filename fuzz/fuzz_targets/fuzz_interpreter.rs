#![no_main]

use std::io::Read;

use brainfudge::io::{ByteInput, ByteOutput};
use brainfudge::{AnyInterpreter, ExecutionError, TapeAddr};
use brainfudge_fuzz::FuzzInputSrc;
use libfuzzer_sys::fuzz_target;

fn run(code: &[u8], data: &FuzzInputSrc) -> Option<(Result<(), ExecutionError>, Vec<u8>)> {
    let mut interp = AnyInterpreter::new(data.width, TapeAddr(0), 0).ok()?;
    let (front, back) = data.input.as_slices();
    let mut input = ByteInput::new(front.chain(back));
    let mut output = ByteOutput::new(Vec::new());
    let result = interp.run(code, &mut input, &mut output);
    Some((result, output.into_inner()))
}

fuzz_target!(|data: FuzzInputSrc| {
    let code = data.forward_only();
    let first = run(&code, &data);
    let second = run(&code, &data);
    if data.width.is_signed() {
        assert!(first.is_none());
        return;
    }
    match &first {
        Some((Ok(()), _)) => (),
        Some((Err(ExecutionError::UnmatchedBracket(_)), _)) => (),
        other => panic!("unexpected result {other:?}"),
    }
    assert_eq!(first, second);
});
