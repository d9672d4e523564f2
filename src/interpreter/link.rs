use crate::ast::{Instruction, Program};
use crate::error::LinkError;

use tracing::debug;

use std::collections::HashMap;

/// Label name to instruction position, built once before execution.
#[derive(Debug, Default)]
pub struct LabelTable {
    positions: HashMap<String, usize>,
}

impl LabelTable {
    pub fn link(program: &Program) -> Result<Self, LinkError> {
        let mut positions = HashMap::new();

        for (pc, instr) in program.instructions.iter().enumerate() {
            let Instruction::Label(name) = instr else {
                continue;
            };
            if let Some(first) = positions.insert(name.clone(), pc) {
                return Err(LinkError::DuplicateLabel {
                    name: name.clone(),
                    first,
                    second: pc,
                });
            }
        }

        debug!(labels = positions.len(), "program linked");
        Ok(LabelTable { positions })
    }

    pub fn resolve(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
