// ── Asset resolution ──────────────────────────────────────────────────────────
//
// Maps a (category, logical name) request onto the conventional asset
// directory tree. A missing file is a normal outcome, not an error: the
// request resolves to a deterministic placeholder instead, so the same
// missing asset renders identically across runs.

pub mod placeholder;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

// ── Categories and requests ───────────────────────────────────────────────────

/// Visual element kind, keyed to a subdirectory of the asset root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetCategory {
    Board,
    Space,
    PieceRat,
    PieceResource,
    PieceShop,
    Ui,
    Icon,
}

impl AssetCategory {
    pub const ALL: [Self; 7] = [
        Self::Board,
        Self::Space,
        Self::PieceRat,
        Self::PieceResource,
        Self::PieceShop,
        Self::Ui,
        Self::Icon,
    ];

    /// Subdirectory this category's files live in, relative to the asset
    /// root. This layout is the contract the resolver relies on.
    pub fn directory(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Space => "board/spaces",
            Self::PieceRat => "pieces/rats",
            Self::PieceResource => "pieces/resources",
            Self::PieceShop => "pieces/shops",
            Self::Ui => "ui",
            Self::Icon => "ui/icons",
        }
    }

    /// Placeholder silhouette for this category. Rats read as round tokens,
    /// resources as diamonds, everything else as tiles/panels.
    pub fn shape_hint(self) -> ShapeHint {
        match self {
            Self::PieceRat => ShapeHint::Circle,
            Self::PieceResource | Self::Icon => ShapeHint::Diamond,
            Self::Board | Self::Space | Self::PieceShop | Self::Ui => ShapeHint::Rect,
        }
    }

    /// Base hue in degrees. Each category owns a 60° band so placeholders
    /// from different categories never share a color.
    fn hue_base(self) -> u64 {
        match self {
            Self::Board => 120,
            Self::Space => 60,
            Self::PieceRat => 0,
            Self::PieceResource => 300,
            Self::PieceShop => 25,
            Self::Ui => 210,
            Self::Icon => 270,
        }
    }
}

/// One asset lookup. Immutable; built per draw call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetRequest {
    pub category: AssetCategory,
    pub name: String,
}

impl AssetRequest {
    pub fn new(category: AssetCategory, name: impl Into<String>) -> Self {
        Self { category, name: name.into() }
    }

    /// Expected file location relative to the asset root, e.g.
    /// `PieceRat` + `player_1` → `pieces/rats/player_1.png`.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.category.directory()).join(format!("{}.png", self.name))
    }
}

// ── Resolution outcomes ───────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Silhouette used when synthesizing a placeholder drawable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeHint {
    Rect,
    Circle,
    Diamond,
}

/// Outcome of an asset lookup. Exactly one variant per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedAsset {
    /// The file exists on disk; hand `path` to the image loader.
    Real { path: PathBuf },
    /// No file — render a procedural substitute via `assets::placeholder`.
    Placeholder { shape: ShapeHint, color: Rgb },
}

/// Stable placeholder color for a request: the category picks a hue band and
/// an FNV-1a hash of the name picks the hue within it. Pure — no randomness,
/// so visual output is reproducible across runs.
pub fn placeholder_color(category: AssetCategory, name: &str) -> Rgb {
    let hue = category.hue_base() + fnv1a(name.as_bytes()) % 60;
    placeholder::hsv_to_rgb((hue % 360) as f32, 0.55, 0.85)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

// ── File existence collaborator ───────────────────────────────────────────────

/// Seam for the file-existence check, so resolution stays testable without
/// touching a real filesystem.
pub trait FileChecker {
    fn exists(&self, path: &Path) -> bool;
}

/// Production checker backed by the real filesystem.
#[derive(Copy, Clone, Debug, Default)]
pub struct DiskChecker;

impl FileChecker for DiskChecker {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

// ── AssetResolver ─────────────────────────────────────────────────────────────

/// Resolves requests against the asset root, caching existence checks per
/// path for the session. The cache must be invalidated on an explicit reload
/// signal — users add files at runtime.
pub struct AssetResolver<C: FileChecker = DiskChecker> {
    root: PathBuf,
    checker: C,
    cache: HashMap<PathBuf, bool>,
}

impl AssetResolver<DiskChecker> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_checker(root, DiskChecker)
    }
}

impl<C: FileChecker> AssetResolver<C> {
    pub fn with_checker(root: impl Into<PathBuf>, checker: C) -> Self {
        Self { root: root.into(), checker, cache: HashMap::new() }
    }

    /// Resolve a request to a real path or a deterministic placeholder.
    pub fn resolve(&mut self, request: &AssetRequest) -> ResolvedAsset {
        let path = self.root.join(request.relative_path());
        let checker = &self.checker;
        let present = *self
            .cache
            .entry(path.clone())
            .or_insert_with(|| checker.exists(&path));

        if present {
            ResolvedAsset::Real { path }
        } else {
            ResolvedAsset::Placeholder {
                shape: request.category.shape_hint(),
                color: placeholder_color(request.category, &request.name),
            }
        }
    }

    /// Drop all cached existence results. Called on reload so files added
    /// since startup are picked up.
    pub fn invalidate_cache(&mut self) {
        log::debug!("asset existence cache cleared ({} entries)", self.cache.len());
        self.cache.clear();
    }

    /// Logical names with a real file on disk, per category.
    ///
    /// Scans each category directory non-recursively (subcategories like
    /// `board/spaces` are categories of their own) and reports `.png` file
    /// stems. Useful for startup logging and asset debugging.
    pub fn inventory(&self) -> BTreeMap<AssetCategory, Vec<String>> {
        let mut found = BTreeMap::new();
        for category in AssetCategory::ALL {
            let dir = self.root.join(category.directory());
            let mut names: Vec<String> = walkdir::WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("png"))
                .filter_map(|e| e.path().file_stem().and_then(|s| s.to_str()).map(String::from))
                .collect();
            names.sort();
            found.insert(category, names);
        }
        found
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
