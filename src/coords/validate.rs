// ── ConfigValidator ───────────────────────────────────────────────────────────
//
// Semantic checks over raw JSON. Fails fast on the first violation and names
// the offending field, so the user gets an actionable message instead of a
// generic parse failure. Nothing is auto-repaired: silently "fixing" user
// coordinates could hide a real misconfiguration.

use serde_json::{Map, Value};

use crate::error::ValidationError;

use super::{BoardConfig, CoordinateConfig, SpaceCoordinateMap};

/// Validate a raw JSON document and convert it into a [`CoordinateConfig`].
///
/// Checks, in order: presence of `config` and `spaces`; `space_size > 0`;
/// positive `window_size`; well-formed `board_offset`; `ui_panel_width`
/// inside the window; every `spaces` entry a decimal index mapped to a
/// two-element integer pair inside window bounds.
pub fn validate(raw: &Value) -> Result<CoordinateConfig, ValidationError> {
    let root = raw
        .as_object()
        .ok_or_else(|| ValidationError::new("<root>", "expected a JSON object"))?;

    let config = require_object(root, "config")?;
    let spaces_obj = require_object(root, "spaces")?;

    let space_size = uint_field(config, "space_size")?;
    if space_size == 0 {
        return Err(ValidationError::new("config.space_size", "must be > 0"));
    }

    let window_size = uint_pair_field(config, "window_size")?;
    if window_size.0 == 0 || window_size.1 == 0 {
        return Err(ValidationError::new(
            "config.window_size",
            "both dimensions must be > 0",
        ));
    }

    let board_offset = int_pair_field(config, "board_offset")?;

    let ui_panel_width = uint_field(config, "ui_panel_width")?;
    if ui_panel_width >= window_size.0 {
        return Err(ValidationError::new(
            "config.ui_panel_width",
            format!("must be smaller than the window width ({})", window_size.0),
        ));
    }

    let mut spaces = SpaceCoordinateMap::new();
    for (key, value) in spaces_obj {
        let field = format!("spaces.{key}");
        let index: u32 = key
            .parse()
            .map_err(|_| ValidationError::new(&field, "key must be a non-negative integer"))?;
        let (x, y) = int_pair(value, &field)?;
        if x < 0 || y < 0 || x as i64 >= window_size.0 as i64 || y as i64 >= window_size.1 as i64 {
            return Err(ValidationError::new(
                &field,
                format!(
                    "coordinate ({x}, {y}) lies outside the {}x{} window",
                    window_size.0, window_size.1
                ),
            ));
        }
        spaces.insert(index, (x, y));
    }

    Ok(CoordinateConfig {
        board: BoardConfig { board_offset, space_size, ui_panel_width, window_size },
        spaces,
    })
}

// ── Field extraction helpers ──────────────────────────────────────────────────

fn require_object<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    let value = root
        .get(key)
        .ok_or_else(|| ValidationError::new(key, "missing required key"))?;
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(key, "expected an object"))
}

fn uint_field(config: &Map<String, Value>, key: &str) -> Result<u32, ValidationError> {
    let field = format!("config.{key}");
    let value = config
        .get(key)
        .ok_or_else(|| ValidationError::new(&field, "missing required key"))?;
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ValidationError::new(&field, "expected a non-negative integer"))
}

fn uint_pair_field(config: &Map<String, Value>, key: &str) -> Result<(u32, u32), ValidationError> {
    let field = format!("config.{key}");
    let (x, y) = int_pair(
        config
            .get(key)
            .ok_or_else(|| ValidationError::new(&field, "missing required key"))?,
        &field,
    )?;
    let x = u32::try_from(x)
        .map_err(|_| ValidationError::new(&field, "components must be non-negative"))?;
    let y = u32::try_from(y)
        .map_err(|_| ValidationError::new(&field, "components must be non-negative"))?;
    Ok((x, y))
}

fn int_pair_field(config: &Map<String, Value>, key: &str) -> Result<(i32, i32), ValidationError> {
    let field = format!("config.{key}");
    int_pair(
        config
            .get(key)
            .ok_or_else(|| ValidationError::new(&field, "missing required key"))?,
        &field,
    )
}

/// A two-element numeric array, e.g. `[100, 240]`.
fn int_pair(value: &Value, field: &str) -> Result<(i32, i32), ValidationError> {
    let arr = value
        .as_array()
        .ok_or_else(|| ValidationError::new(field, "expected a two-element array"))?;
    if arr.len() != 2 {
        return Err(ValidationError::new(
            field,
            format!("expected exactly 2 elements, found {}", arr.len()),
        ));
    }
    let x = int_component(&arr[0], field)?;
    let y = int_component(&arr[1], field)?;
    Ok((x, y))
}

fn int_component(value: &Value, field: &str) -> Result<i32, ValidationError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ValidationError::new(field, "expected an integer"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
