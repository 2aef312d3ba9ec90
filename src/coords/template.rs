// ── TemplateGenerator ─────────────────────────────────────────────────────────
//
// Synthesizes a default coordinate configuration when none exists, and
// persists it under the template name only — a user's hand-edited
// `coordinates.json` is never clobbered.

use std::path::{Path, PathBuf};

use crate::error::{LayoutError, StoreError};
use crate::{CONFIG_FILE, TEMPLATE_FILE};

use super::store::{self, ConfigTarget};
use super::{BoardConfig, CoordinateConfig, SpaceCoordinateMap};

// ── TrackLayout ───────────────────────────────────────────────────────────────

/// Path shape used to lay out the track.
///
/// The hard contract is shared by every policy: indices `0..track_length` are
/// all present, consecutive indices sit exactly `space_size` pixels apart
/// along the path, and no coordinate leaves the window. The geometry itself
/// is a free choice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TrackLayout {
    /// Rows alternate direction, so the step from a row's last space to the
    /// next row's first is a single vertical `space_size` hop.
    #[default]
    Serpentine,
    /// One left-to-right row. Only fits short tracks.
    SingleRow,
}

impl TrackLayout {
    fn lay_out(
        self,
        track_length: u32,
        board: &BoardConfig,
    ) -> Result<SpaceCoordinateMap, LayoutError> {
        let grid = BoardGrid::of(board);
        let too_long = |rows| LayoutError::TrackDoesNotFit {
            track_length,
            cols: grid.cols,
            rows,
        };

        let mut spaces = SpaceCoordinateMap::new();
        match self {
            Self::Serpentine => {
                if grid.cols == 0 {
                    return Err(too_long(grid.rows));
                }
                let rows_needed = track_length.div_ceil(grid.cols);
                if rows_needed > grid.rows {
                    return Err(too_long(grid.rows));
                }
                for i in 0..track_length {
                    let row = i / grid.cols;
                    let col = i % grid.cols;
                    // Odd rows run right-to-left.
                    let col = if row % 2 == 1 { grid.cols - 1 - col } else { col };
                    spaces.insert(i, grid.cell(col, row));
                }
            }
            Self::SingleRow => {
                if track_length > grid.cols || grid.rows == 0 {
                    return Err(too_long(grid.rows.min(1)));
                }
                for i in 0..track_length {
                    spaces.insert(i, grid.cell(i, 0));
                }
            }
        }
        Ok(spaces)
    }
}

/// How many whole spaces fit between the board offset and the window edges,
/// keeping clear of the UI panel on the right.
struct BoardGrid {
    origin: (i32, i32),
    step: i32,
    cols: u32,
    rows: u32,
}

impl BoardGrid {
    fn of(board: &BoardConfig) -> Self {
        let (ox, oy) = board.board_offset;
        let step = board.space_size as i64;
        let usable_w = board.window_size.0.saturating_sub(board.ui_panel_width) as i64 - ox as i64;
        let usable_h = board.window_size.1 as i64 - oy as i64;
        let fit = |span: i64| {
            if step == 0 || ox < 0 || oy < 0 {
                0
            } else {
                (span / step).max(0) as u32
            }
        };
        Self { origin: (ox, oy), step: step as i32, cols: fit(usable_w), rows: fit(usable_h) }
    }

    fn cell(&self, col: u32, row: u32) -> (i32, i32) {
        (
            self.origin.0 + col as i32 * self.step,
            self.origin.1 + row as i32 * self.step,
        )
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

/// Produce a coordinate configuration for `track_length` spaces, using the
/// hinted board parameters or the documented defaults, laid out with the
/// default [`TrackLayout`].
pub fn generate(
    track_length: u32,
    hint: Option<BoardConfig>,
) -> Result<CoordinateConfig, LayoutError> {
    generate_with(track_length, hint, TrackLayout::default())
}

/// [`generate`] with an explicit layout policy.
pub fn generate_with(
    track_length: u32,
    hint: Option<BoardConfig>,
    layout: TrackLayout,
) -> Result<CoordinateConfig, LayoutError> {
    let board = hint.unwrap_or_default();
    let spaces = layout.lay_out(track_length, &board)?;
    Ok(CoordinateConfig { board, spaces })
}

/// Persist a generated config under the template name for manual editing.
///
/// The canonical `coordinates.json` is never written here; the user promotes
/// the template by renaming it.
pub fn write_template(dir: &Path, config: &CoordinateConfig) -> Result<PathBuf, StoreError> {
    let path = store::save(dir, config, ConfigTarget::Template)?;
    log::info!(
        "coordinate template saved as {TEMPLATE_FILE}; edit it and rename to {CONFIG_FILE} to activate"
    );
    Ok(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
