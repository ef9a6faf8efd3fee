//! Settings defining how an engine is built

use crate::{CellWidth, TapeAddr};

/// Configuration for a new engine.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct MachineSettings {
    /// Integer width of each tape cell. Only unsigned widths can be built.
    pub cell_width: CellWidth,
    /// Where the memory pointer starts.
    pub memory_pointer: TapeAddr,
    /// Where the instruction pointer starts.
    pub instruction_pointer: usize,
}

impl MachineSettings {
    pub fn with_cell_width(mut self, cell_width: CellWidth) -> Self {
        self.cell_width = cell_width;
        self
    }

    pub fn with_memory_pointer(mut self, memory_pointer: TapeAddr) -> Self {
        self.memory_pointer = memory_pointer;
        self
    }

    pub fn with_instruction_pointer(mut self, instruction_pointer: usize) -> Self {
        self.instruction_pointer = instruction_pointer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::MachineSettings;
    use crate::{CellWidth, TapeAddr};

    #[test]
    fn test_defaults() {
        let settings = MachineSettings::default();
        assert_eq!(settings.cell_width, CellWidth::U8);
        assert_eq!(settings.memory_pointer, TapeAddr(0));
        assert_eq!(settings.instruction_pointer, 0);

        let settings = settings
            .with_cell_width(CellWidth::U32)
            .with_memory_pointer(TapeAddr(10))
            .with_instruction_pointer(2);
        assert_eq!(settings.cell_width, CellWidth::U32);
        assert_eq!(settings.memory_pointer, TapeAddr(10));
        assert_eq!(settings.instruction_pointer, 2);
    }
}
