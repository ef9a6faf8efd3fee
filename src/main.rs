#[cfg(target_os = "linux")]
use std::os::linux::fs::MetadataExt;

use std::{
    io::{self, BufRead, Read, Write},
    path::PathBuf,
    time::Instant,
};

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use brainfudge::{
    io::{ByteInput, ByteOutput, LineInput},
    settings::MachineSettings,
    AnyInterpreter, CellWidth, ExecutionError, Program, TapeAddr, UnsupportedCellWidth,
};
use clap::Parser;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("{0}")]
    ConfigError(#[from] UnsupportedCellWidth),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Brainfuck source file
    #[arg(required_unless_present = "interactive")]
    input_file: Option<PathBuf>,

    /// Read the program from a single line on standard input
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Integer width of each tape cell (u8, u16, u32 or u64)
    #[arg(short = 'w', long, value_name = "WIDTH", default_value_t = CellWidth::U8)]
    cell_width: CellWidth,

    /// Read program input one line at a time, using the first byte of each line
    #[arg(long, default_value_t = false)]
    line_input: bool,

    /// Print the elapsed run time when the program finishes
    #[arg(short = 't', long, default_value_t = false)]
    stopwatch: bool,

    /// Initial memory pointer
    #[arg(long, value_name = "ADDR", default_value_t = 0)]
    memory_pointer: u16,

    /// Initial instruction pointer
    #[arg(long, value_name = "OFFSET", default_value_t = 0)]
    instruction_pointer: usize,
}

impl Args {
    fn settings(&self) -> MachineSettings {
        MachineSettings::default()
            .with_cell_width(self.cell_width)
            .with_memory_pointer(TapeAddr(self.memory_pointer))
            .with_instruction_pointer(self.instruction_pointer)
    }
}

fn load_file(path: &PathBuf) -> Result<Program, ProgramError> {
    let mut file = std::fs::File::open(path)?;

    #[cfg(target_os = "linux")]
    let mut buf = Vec::with_capacity(file.metadata()?.st_size() as usize);
    #[cfg(not(target_os = "linux"))]
    let mut buf = Vec::new();

    file.read_to_end(&mut buf)?;
    info!(path = %path.display(), len = buf.len(), "program loaded");
    Ok(buf.into())
}

fn load_line(input: &mut impl BufRead) -> Result<Program, ProgramError> {
    let mut buf = Vec::new();
    input.read_until(b'\n', &mut buf)?;
    info!(len = buf.len(), "program read from standard input");
    Ok(buf.into())
}

fn main() -> Result<(), ProgramError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut interp = AnyInterpreter::from_settings(&args.settings())?;

    let mut stdin = io::stdin().lock();
    let program = match args.input_file {
        Some(ref path) if !args.interactive => load_file(path)?,
        _ => load_line(&mut stdin)?,
    };

    let mut output = ByteOutput::new(io::stdout().lock());
    let start = Instant::now();
    if args.line_input {
        interp.run(&program, &mut LineInput::new(&mut stdin), &mut output)?;
    } else {
        interp.run(&program, &mut ByteInput::new(&mut stdin), &mut output)?;
    }
    let elapsed = start.elapsed();

    let mut stdout = output.into_inner();
    writeln!(stdout)?;
    if args.stopwatch {
        writeln!(stdout, "Elapsed time: {elapsed:?}")?;
    }
    stdout.flush()?;

    Ok(())
}
