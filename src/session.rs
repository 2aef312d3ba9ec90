// ── BoardSession ──────────────────────────────────────────────────────────────
//
// Startup orchestration and session-lifetime state: load → validate → fall
// back to a generated template, hold the active config behind an `Arc`, and
// swap it wholesale on reload so readers never see a half-updated map.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::{AssetRequest, AssetResolver, ResolvedAsset};
use crate::coords::{store, template, validate, CoordinateConfig};
use crate::error::{SessionError, StoreError};
use crate::CONFIG_FILE;

pub struct BoardSession {
    assets_dir: PathBuf,
    track_length: u32,
    config: Arc<CoordinateConfig>,
    resolver: AssetResolver,
    missing_warned: HashSet<u32>,
}

impl BoardSession {
    /// Load the coordinate config from `assets_dir`, falling back to a
    /// generated template when the file is absent, malformed, or invalid.
    ///
    /// The fallback is always a *freshly generated* config — never stale or
    /// partially parsed data. It is persisted under the template name for
    /// the user to edit; a failed template write is logged and ignored since
    /// the in-memory config remains usable.
    pub fn start(assets_dir: impl Into<PathBuf>, track_length: u32) -> Result<Self, SessionError> {
        let assets_dir = assets_dir.into();
        let config = load_or_template(&assets_dir, track_length)?;
        Ok(Self {
            resolver: AssetResolver::new(&assets_dir),
            assets_dir,
            track_length,
            config: Arc::new(config),
            missing_warned: HashSet::new(),
        })
    }

    /// Shared read-only handle to the active config. Holders keep a
    /// consistent snapshot across reloads.
    pub fn config(&self) -> Arc<CoordinateConfig> {
        Arc::clone(&self.config)
    }

    /// Rebuild the config from disk and swap it in atomically. Also drops
    /// the asset existence cache, since the user may have added files.
    pub fn reload(&mut self) -> Result<(), SessionError> {
        let fresh = load_or_template(&self.assets_dir, self.track_length)?;
        self.config = Arc::new(fresh);
        self.resolver.invalidate_cache();
        self.missing_warned.clear();
        log::info!("coordinate config reloaded ({} spaces)", self.config.space_count());
        Ok(())
    }

    /// Pixel position of a space. A missing index is logged once per session
    /// and returns `None`; the caller skips that draw.
    pub fn position_of(&mut self, index: u32) -> Option<(i32, i32)> {
        let pos = self.config.position_of(index);
        if pos.is_none() && self.missing_warned.insert(index) {
            log::warn!("no coordinate for space {index}; skipping its draw this session");
        }
        pos
    }

    pub fn resolve_asset(&mut self, request: &AssetRequest) -> ResolvedAsset {
        self.resolver.resolve(request)
    }

    pub fn assets(&mut self) -> &mut AssetResolver {
        &mut self.resolver
    }
}

fn load_or_template(dir: &Path, track_length: u32) -> Result<CoordinateConfig, SessionError> {
    match store::load_raw(dir) {
        Ok(raw) => match validate::validate(&raw) {
            Ok(config) => {
                log::info!("loaded {} spaces from {CONFIG_FILE}", config.space_count());
                return Ok(config);
            }
            Err(e) => log::warn!("{e}; generating a template instead"),
        },
        Err(StoreError::NotFound(path)) => {
            log::info!("no coordinate config at {}; generating a template", path.display());
        }
        Err(e @ StoreError::Parse(_)) => log::warn!("{e}; generating a template instead"),
        Err(e) => return Err(e.into()),
    }

    let config = template::generate(track_length, None)?;
    if let Err(e) = template::write_template(dir, &config) {
        log::warn!("could not persist coordinate template: {e}");
    }
    Ok(config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
