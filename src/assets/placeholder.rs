// ── PlaceholderFactory ────────────────────────────────────────────────────────
//
// Procedural stand-ins for missing art: a filled shape with a dark border,
// sized to the conventional dimensions of its category. Pure pixel work, no
// file I/O.

use image::{Rgba, RgbaImage};

use crate::coords::BoardConfig;

use super::{AssetCategory, Rgb, ShapeHint};

/// Conventional placeholder dimensions per category.
pub const RAT_SIZE: (u32, u32) = (40, 40);
pub const RESOURCE_SIZE: (u32, u32) = (30, 30);
pub const SHOP_SIZE: (u32, u32) = (60, 60);
pub const UI_SIZE: (u32, u32) = (64, 64);
pub const ICON_SIZE: (u32, u32) = (32, 32);

/// Border thickness in pixels.
const BORDER: i32 = 2;

/// Conventional drawable size for a category. Board backgrounds fill the
/// window; spaces are one `space_size` square; pieces use fixed sizes.
pub fn placeholder_size(category: AssetCategory, board: &BoardConfig) -> (u32, u32) {
    match category {
        AssetCategory::Board => board.window_size,
        AssetCategory::Space => (board.space_size, board.space_size),
        AssetCategory::PieceRat => RAT_SIZE,
        AssetCategory::PieceResource => RESOURCE_SIZE,
        AssetCategory::PieceShop => SHOP_SIZE,
        AssetCategory::Ui => UI_SIZE,
        AssetCategory::Icon => ICON_SIZE,
    }
}

/// Build a placeholder drawable: `color`-filled `shape` with a black border,
/// transparent outside the shape. Zero dimensions are clamped to 1×1.
pub fn build(shape: ShapeHint, color: Rgb, size: (u32, u32)) -> RgbaImage {
    let (w, h) = (size.0.max(1), size.1.max(1));
    let fill = Rgba([color.0, color.1, color.2, 255]);
    let border = Rgba([0, 0, 0, 255]);
    let mut img = RgbaImage::new(w, h);

    match shape {
        ShapeHint::Rect => {
            for y in 0..h {
                for x in 0..w {
                    let on_edge = (x as i32) < BORDER
                        || (y as i32) < BORDER
                        || x as i32 >= w as i32 - BORDER
                        || y as i32 >= h as i32 - BORDER;
                    img.put_pixel(x, y, if on_edge { border } else { fill });
                }
            }
        }
        ShapeHint::Circle => {
            let cx = w as i32 / 2;
            let cy = h as i32 / 2;
            let r = (w.min(h) as i32 / 2).max(1);
            let inner = (r - BORDER).max(0);
            for y in 0..h {
                for x in 0..w {
                    let dx = x as i32 - cx;
                    let dy = y as i32 - cy;
                    let d2 = dx * dx + dy * dy;
                    if d2 <= inner * inner {
                        img.put_pixel(x, y, fill);
                    } else if d2 <= r * r {
                        img.put_pixel(x, y, border);
                    }
                    // Outside the disc stays transparent.
                }
            }
        }
        ShapeHint::Diamond => {
            let cx = w as i32 / 2;
            let cy = h as i32 / 2;
            let r = (w.min(h) as i32 / 2).max(1);
            let inner = (r - BORDER).max(0);
            for y in 0..h {
                for x in 0..w {
                    let d = (x as i32 - cx).abs() + (y as i32 - cy).abs();
                    if d <= inner {
                        img.put_pixel(x, y, fill);
                    } else if d <= r {
                        img.put_pixel(x, y, border);
                    }
                }
            }
        }
    }

    img
}

/// HSV → RGB with `h` in degrees, `s` and `v` in `[0, 1]`.
pub(crate) fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let c = v * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    Rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
