use crate::game_state::chess_types::*;

/// Record of one applied move; enough to put the board back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub origin: Square,
    pub destination: Square,
    pub captured_piece: Option<Piece>,
}

/// Ordered move history. Records are only ever pushed on the end or popped
/// off it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[inline]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> + '_ {
        self.records.iter()
    }

    /// Drop every record, as when a new game starts.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
