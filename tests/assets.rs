use std::fs;
use std::path::Path;

use ratrack::assets::{
    placeholder, AssetCategory, AssetRequest, AssetResolver, ResolvedAsset, ShapeHint,
};
use ratrack::coords::BoardConfig;

/// Drop an empty marker file at `root/<rel>`, creating parent directories.
/// Only existence matters to the resolver; decoding is someone else's job.
fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

// ── Real vs placeholder resolution ────────────────────────────────────────────

#[test]
fn present_file_resolves_to_its_conventional_path() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "pieces/rats/player_1.png");

    let mut resolver = AssetResolver::new(dir.path());
    let got = resolver.resolve(&AssetRequest::new(AssetCategory::PieceRat, "player_1"));
    assert_eq!(
        got,
        ResolvedAsset::Real { path: dir.path().join("pieces/rats/player_1.png") }
    );
}

#[test]
fn missing_rat_sprite_yields_a_stable_circle_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let mut resolver = AssetResolver::new(dir.path());
    let req = AssetRequest::new(AssetCategory::PieceRat, "player_1");

    let first = resolver.resolve(&req);
    let ResolvedAsset::Placeholder { shape, color } = first.clone() else {
        panic!("expected Placeholder, got {first:?}");
    };
    assert_eq!(shape, ShapeHint::Circle);

    // Identical request, identical color — across calls and across resolvers.
    assert_eq!(resolver.resolve(&req), first);
    let mut fresh = AssetResolver::new(dir.path());
    let ResolvedAsset::Placeholder { color: again, .. } = fresh.resolve(&req) else {
        panic!("expected Placeholder from fresh resolver");
    };
    assert_eq!(again, color);
}

#[test]
fn mixed_tree_resolves_each_request_independently() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "board/background.png");
    touch(dir.path(), "ui/icons/cheese.png");

    let mut resolver = AssetResolver::new(dir.path());
    assert!(matches!(
        resolver.resolve(&AssetRequest::new(AssetCategory::Board, "background")),
        ResolvedAsset::Real { .. }
    ));
    assert!(matches!(
        resolver.resolve(&AssetRequest::new(AssetCategory::Icon, "cheese")),
        ResolvedAsset::Real { .. }
    ));
    assert!(matches!(
        resolver.resolve(&AssetRequest::new(AssetCategory::Space, "start")),
        ResolvedAsset::Placeholder { .. }
    ));
}

// ── Cache lifecycle ───────────────────────────────────────────────────────────

#[test]
fn file_added_at_runtime_is_seen_only_after_invalidation() {
    let dir = tempfile::tempdir().unwrap();
    let mut resolver = AssetResolver::new(dir.path());
    let req = AssetRequest::new(AssetCategory::PieceShop, "mole");

    assert!(matches!(resolver.resolve(&req), ResolvedAsset::Placeholder { .. }));

    // The user drops the file in while the session is running.
    touch(dir.path(), "pieces/shops/mole.png");

    // Cached result still answers until the explicit reload signal.
    assert!(matches!(resolver.resolve(&req), ResolvedAsset::Placeholder { .. }));
    resolver.invalidate_cache();
    assert!(matches!(resolver.resolve(&req), ResolvedAsset::Real { .. }));
}

// ── Inventory scan ────────────────────────────────────────────────────────────

#[test]
fn inventory_reports_names_per_category() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "board/background.png");
    touch(dir.path(), "board/spaces/start.png");
    touch(dir.path(), "board/spaces/launch.png");
    touch(dir.path(), "pieces/resources/cheese.png");
    touch(dir.path(), "pieces/resources/notes.txt"); // ignored, not a .png

    let resolver = AssetResolver::new(dir.path());
    let inventory = resolver.inventory();

    // Subdirectories are categories of their own: `board/spaces` must not
    // leak into the Board listing.
    assert_eq!(inventory[&AssetCategory::Board], vec!["background"]);
    assert_eq!(inventory[&AssetCategory::Space], vec!["launch", "start"]);
    assert_eq!(inventory[&AssetCategory::PieceResource], vec!["cheese"]);
    assert!(inventory[&AssetCategory::PieceRat].is_empty());
}

// ── Placeholder drawables ─────────────────────────────────────────────────────

#[test]
fn placeholder_drawable_matches_category_conventions() {
    let dir = tempfile::tempdir().unwrap();
    let mut resolver = AssetResolver::new(dir.path());
    let board = BoardConfig::default();

    let req = AssetRequest::new(AssetCategory::Space, "resource");
    let ResolvedAsset::Placeholder { shape, color } = resolver.resolve(&req) else {
        panic!("expected Placeholder");
    };

    let size = placeholder::placeholder_size(req.category, &board);
    let img = placeholder::build(shape, color, size);
    assert_eq!(img.dimensions(), (70, 70));
    // Filled with the derived color at the center, bordered at the edge.
    assert_eq!(img.get_pixel(35, 35).0, [color.0, color.1, color.2, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
}

#[test]
fn board_placeholder_fills_the_window() {
    let board = BoardConfig::default();
    let size = placeholder::placeholder_size(AssetCategory::Board, &board);
    assert_eq!(size, board.window_size);
}
