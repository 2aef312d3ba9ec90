// ── ConfigStore ───────────────────────────────────────────────────────────────
//
// File I/O for the coordinate config. Pure data access: parsing happens here,
// validation does not (see `coords::validate`).

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::{CONFIG_FILE, TEMPLATE_FILE};

use super::CoordinateConfig;

/// Which on-disk name a save writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigTarget {
    /// `coordinates.json` — the user's hand-edited file. Never overwritten
    /// silently.
    Canonical,
    /// `coordinates_template.json` — auto-generated, freely replaced.
    Template,
}

impl ConfigTarget {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Canonical => CONFIG_FILE,
            Self::Template => TEMPLATE_FILE,
        }
    }
}

/// Read and parse `coordinates.json` from `dir`.
///
/// Returns the raw JSON value; semantic checks are the validator's job.
/// `NotFound` when the file is absent, `Parse` (with line/column) when the
/// contents are not JSON.
pub fn load_raw(dir: &Path) -> Result<serde_json::Value, StoreError> {
    let path = dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path));
        }
        Err(e) => return Err(StoreError::Io(e)),
    };
    Ok(serde_json::from_str(&text)?)
}

/// Serialize `config` under `dir` as pretty-printed JSON.
///
/// Writing to [`ConfigTarget::Canonical`] fails with `WouldClobber` if the
/// file already exists — promoting a template over a user's config is an
/// explicit manual step, never something this crate does on its own.
pub fn save(
    dir: &Path,
    config: &CoordinateConfig,
    target: ConfigTarget,
) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(target.file_name());
    let text = serde_json::to_string_pretty(config)?;

    match target {
        ConfigTarget::Canonical => {
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .map_err(|e| {
                    if e.kind() == std::io::ErrorKind::AlreadyExists {
                        StoreError::WouldClobber(path.clone())
                    } else {
                        StoreError::Io(e)
                    }
                })?;
            file.write_all(text.as_bytes())?;
        }
        ConfigTarget::Template => fs::write(&path, &text)?,
    }

    log::info!("wrote {} ({} spaces)", path.display(), config.space_count());
    Ok(path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{BoardConfig, SpaceCoordinateMap};

    fn sample_config() -> CoordinateConfig {
        let mut spaces = SpaceCoordinateMap::new();
        spaces.insert(0, (100, 100));
        spaces.insert(1, (170, 100));
        CoordinateConfig { board: BoardConfig::default(), spaces }
    }

    #[test]
    fn load_absent_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match load_raw(dir.path()) {
            Err(StoreError::NotFound(path)) => {
                assert!(path.ends_with(CONFIG_FILE));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(matches!(load_raw(dir.path()), Err(StoreError::Parse(_))));
    }

    #[test]
    fn save_canonical_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config();
        save(dir.path(), &config, ConfigTarget::Canonical).unwrap();

        let raw = load_raw(dir.path()).unwrap();
        let loaded: CoordinateConfig = serde_json::from_value(raw).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn save_canonical_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config = sample_config();
        save(dir.path(), &config, ConfigTarget::Canonical).unwrap();
        let before = fs::read(dir.path().join(CONFIG_FILE)).unwrap();

        let mut edited = sample_config();
        edited.spaces.insert(2, (240, 100));
        match save(dir.path(), &edited, ConfigTarget::Canonical) {
            Err(StoreError::WouldClobber(path)) => assert!(path.ends_with(CONFIG_FILE)),
            other => panic!("expected WouldClobber, got {other:?}"),
        }

        // Original bytes untouched.
        let after = fs::read(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn save_template_overwrites_freely() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &sample_config(), ConfigTarget::Template).unwrap();

        let mut edited = sample_config();
        edited.spaces.insert(2, (240, 100));
        let path = save(dir.path(), &edited, ConfigTarget::Template).unwrap();
        assert!(path.ends_with(TEMPLATE_FILE));

        let text = fs::read_to_string(path).unwrap();
        let on_disk: CoordinateConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(on_disk, edited);
    }

    #[test]
    fn save_template_never_touches_canonical_name() {
        let dir = tempfile::tempdir().unwrap();
        save(dir.path(), &sample_config(), ConfigTarget::Template).unwrap();
        assert!(!dir.path().join(CONFIG_FILE).exists());
    }
}
