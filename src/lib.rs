//! # BrainFudge - A tape based virtual machine for Brainfuck
//!
//! The engine runs the eight instruction language directly on the program
//! bytes: no parsing pass, no optimisation. Bytes that are not instructions
//! are comments.
//!
//! The tape always has 65536 cells and the memory pointer is 16 bits wide, so
//! moving off either end wraps to the other end of the tape. Cells are
//! unsigned integers of a selectable width with wrapping arithmetic.

// Re-export some symbols.
pub use brackets::scan_backward_match;
pub use brackets::scan_forward_match;
pub use brackets::UnmatchedBracket;
pub use interpreter::ExecutionError;
pub use interpreter::Interpreter;
pub use io::CallbackError;
pub use machine::AnyCellInput;
pub use machine::AnyCellOutput;
pub use machine::AnyInterpreter;
pub use program::Opcode;
pub use program::Program;
pub use types::Cell;
pub use types::CellWidth;
pub use types::TapeAddr;
pub use types::UnsupportedCellWidth;

pub mod brackets;
mod interpreter;
pub mod io;
mod machine;
mod program;
pub mod settings;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
