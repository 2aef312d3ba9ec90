pub mod store;
pub mod template;
pub mod validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── BoardConfig ───────────────────────────────────────────────────────────────

/// Pixel-space layout parameters for the board.
///
/// All coordinates stored in a [`SpaceCoordinateMap`] already include
/// `board_offset`; nothing in this crate reapplies it at resolve time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Pixel translation applied to the whole board when it was placed.
    pub board_offset: (i32, i32),
    /// Edge length of one track space in pixels. Always positive.
    pub space_size: u32,
    /// Width of the UI side panel; the board never extends under it.
    pub ui_panel_width: u32,
    /// Window dimensions in pixels. Both components positive.
    pub window_size: (u32, u32),
}

impl BoardConfig {
    pub const DEFAULT_OFFSET: (i32, i32) = (100, 100);
    pub const DEFAULT_SPACE_SIZE: u32 = 70;
    pub const DEFAULT_PANEL_WIDTH: u32 = 300;
    pub const DEFAULT_WINDOW: (u32, u32) = (1200, 800);
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            board_offset: Self::DEFAULT_OFFSET,
            space_size: Self::DEFAULT_SPACE_SIZE,
            ui_panel_width: Self::DEFAULT_PANEL_WIDTH,
            window_size: Self::DEFAULT_WINDOW,
        }
    }
}

// ── CoordinateConfig ──────────────────────────────────────────────────────────

/// Space index → pixel position. Ordered so serialization and iteration are
/// deterministic across runs.
pub type SpaceCoordinateMap = BTreeMap<u32, (i32, i32)>;

/// The full coordinate configuration: board parameters plus the per-space
/// pixel map.
///
/// Loaded (or generated) once at startup and treated as immutable for the
/// session; a reload builds a fresh value and swaps it in wholesale.
///
/// Serializes to the documented `coordinates.json` schema: the board
/// parameters live under the `config` key and space indices become decimal
/// string keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateConfig {
    #[serde(rename = "config")]
    pub board: BoardConfig,
    pub spaces: SpaceCoordinateMap,
}

impl CoordinateConfig {
    /// Pixel position of a space, or `None` when the index has no coordinate.
    ///
    /// Absence is a first-class outcome: the caller skips the draw rather
    /// than drawing at an undefined location. No default is ever substituted.
    pub fn position_of(&self, index: u32) -> Option<(i32, i32)> {
        self.spaces.get(&index).copied()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.spaces.contains_key(&index)
    }

    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
