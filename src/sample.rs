//! Sample save model
//!
//! The state a small demo game keeps between sessions. Every field has a
//! default, so older or partial saves still load.

use serde::{Deserialize, Serialize};

use crate::persistence::codec::{decode_value, encode_value};
use crate::persistence::{CodecError, SaveDocument};

/// Playfield width in pixels
pub const SCREEN_WIDTH: i32 = 160;
/// Playfield height in pixels
pub const SCREEN_HEIGHT: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Persisted game state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSnapshot {
    pub score: u64,
    pub player_position: Position,
    pub items: Vec<String>,
}

impl GameSnapshot {
    /// Fresh game: player centred, no score, starter items
    pub fn new_game() -> Self {
        Self {
            score: 0,
            player_position: Position {
                x: SCREEN_WIDTH / 2,
                y: SCREEN_HEIGHT / 2,
            },
            items: vec!["item_a".to_string(), "item_b".to_string()],
        }
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Move by (dx, dy), clamped to the playfield
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let pos = &mut self.player_position;
        pos.x = pos.x.saturating_add(dx).clamp(0, SCREEN_WIDTH - 1);
        pos.y = pos.y.saturating_add(dy).clamp(0, SCREEN_HEIGHT - 1);
    }

    pub fn to_document(&self) -> Result<SaveDocument, CodecError> {
        encode_value(self)
    }

    /// Read a snapshot, filling anything missing with defaults. `None` if a
    /// field is present with the wrong type.
    pub fn from_document(doc: &SaveDocument) -> Option<Self> {
        decode_value(doc.clone()).ok()
    }
}
