//! This runs all the programs in the programs directory.

use std::{env, error::Error, io::Read, path::PathBuf};

use brainfudge::{
    brackets::ScanDirection, test_utils::test_execute, ExecutionError, UnmatchedBracket,
};

fn find_programs() -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR")?.into();
    path.push("tests");
    path.push("programs");

    let mut results = vec![];
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some("b") = path.extension().and_then(|x| x.to_str()) {
            results.push(path);
        }
    }
    Ok(results)
}

fn load_file(path: &PathBuf) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut file = std::fs::File::open(path)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf)
}

fn run_program(
    program: &PathBuf,
    input: Option<PathBuf>,
    expected_output: PathBuf,
) -> Result<(), Box<dyn Error>> {
    let src = load_file(program)?;
    let out = load_file(&expected_output)?;
    let input = match input {
        Some(f) => load_file(&f)?,
        None => Vec::new(),
    };

    let exec1 = test_execute(&src, input.as_slice());
    let exec2 = test_execute(&src, input.as_slice());

    assert_eq!(exec1.result, Some(Ok(())));
    assert_eq!(exec1.output, out);
    assert_eq!(exec1.instruction_ptr, src.len());
    // Same program, same input: same everything.
    assert_eq!(exec1, exec2);

    Ok(())
}

#[test]
fn test_programs() {
    let programs = find_programs().unwrap();
    assert!(!programs.is_empty());
    for program in programs {
        let in_file = program.with_extension("in");
        let in_file = if in_file.exists() {
            Some(in_file)
        } else {
            None
        };
        let out_file = program.with_extension("out");
        match run_program(&program, in_file, out_file) {
            Ok(_) => (),
            Err(err) => panic!("{err:?} {program:?}"),
        }
    }
}

#[test]
fn test_unmatched_open_aborts() {
    let exec = test_execute(b"+[", &b""[..]);
    assert_eq!(exec.result, Some(Ok(())));

    let exec = test_execute(b"[", &b""[..]);
    assert_eq!(
        exec.result,
        Some(Err(ExecutionError::UnmatchedBracket(UnmatchedBracket {
            position: 0,
            direction: ScanDirection::Forward,
        })))
    );
    assert!(exec.output.is_empty());
    assert!(exec.tape.is_blank());
}

#[test]
fn test_unmatched_close_aborts() {
    let exec = test_execute(b"++.[-]+.]+.", &b""[..]);
    assert_eq!(
        exec.result,
        Some(Err(ExecutionError::UnmatchedBracket(UnmatchedBracket {
            position: 8,
            direction: ScanDirection::Backward,
        })))
    );
    assert_eq!(exec.output, vec![2, 1]);
    assert_eq!(exec.instruction_ptr, 8);
}
