//! Board structure and slot accessors

use super::{Cell, Player, SLOT_COUNT};

/// 3x3 game board, slots indexed 0-8 in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; SLOT_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SLOT_COUNT],
        }
    }

    /// Get the cell at a slot. Callers pass slots already known to be
    /// in range; use `in_range` / `is_empty_slot` to validate user input.
    #[inline]
    pub fn get(&self, slot: usize) -> Cell {
        self.cells[slot]
    }

    /// Write a mark into a slot (no legality checking)
    /// Use `Engine::play` for validated game moves
    #[inline]
    pub fn set(&mut self, slot: usize, player: Player) {
        self.cells[slot] = Cell::Mark(player);
    }

    /// Restore a slot to empty
    #[inline]
    pub fn clear(&mut self, slot: usize) {
        self.cells[slot] = Cell::Empty;
    }

    /// Check that a slot index lies on the board
    #[inline]
    pub fn in_range(slot: usize) -> bool {
        slot < SLOT_COUNT
    }

    /// Check if a slot is on the board and unoccupied
    #[inline]
    pub fn is_empty_slot(&self, slot: usize) -> bool {
        Self::in_range(slot) && self.cells[slot].is_empty()
    }

    /// Indices of all empty slots, ascending
    pub fn available_slots(&self) -> Vec<usize> {
        (0..SLOT_COUNT)
            .filter(|&slot| self.cells[slot].is_empty())
            .collect()
    }

    /// Total marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check if every slot is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check if no slot is occupied
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Reinitialize every slot to empty
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; SLOT_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, " ")?,
                    Cell::Mark(p) => write!(f, "{p}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
