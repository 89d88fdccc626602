use crate::{ConfigError, ConfigResult};
use retune_model::ConfigurationDocument;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File extension of configuration documents.
pub const CONFIG_EXTENSION: &str = "toml";

/// Builds `<directory>/<identifier>.toml`.
pub fn config_path(identifier: &str, directory: &Path) -> PathBuf {
    directory.join(format!("{identifier}.{CONFIG_EXTENSION}"))
}

/// Parses a document from TOML text.
pub fn parse_document(text: &str) -> ConfigResult<ConfigurationDocument> {
    Ok(toml::from_str(text)?)
}

/// Reads and parses `<directory>/<identifier>.toml`.
pub fn try_load(identifier: &str, directory: &Path) -> ConfigResult<ConfigurationDocument> {
    let path = config_path(identifier, directory);
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_document(&contents)
}

/// Loads the document, logging and discarding any failure.
///
/// On success a copy is written to the OS temp directory for troubleshooting.
pub fn load(identifier: &str, directory: &Path) -> Option<ConfigurationDocument> {
    Loader::new(identifier, directory).load()
}

/// Writes `doc` as pretty TOML to `<directory>/<identifier>.toml`.
pub fn dump_document(
    doc: &ConfigurationDocument,
    directory: &Path,
    identifier: &str,
) -> ConfigResult<PathBuf> {
    let mut rendered = toml::to_string_pretty(doc)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    let path = config_path(identifier, directory);
    std::fs::write(&path, rendered).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Compares resolved paths, so aliases like `dir/sub/..` or a symlink match.
/// Falls back to a lexical comparison when either side cannot be resolved.
fn same_directory(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Fail-open document loader.
#[derive(Debug, Clone)]
pub struct Loader {
    identifier: String,
    directory: PathBuf,
    dump_dir: Option<PathBuf>,
}

impl Loader {
    /// Creates a loader that dumps to the OS temp directory after loading.
    pub fn new(identifier: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            identifier: identifier.into(),
            directory: directory.into(),
            dump_dir: Some(std::env::temp_dir()),
        }
    }

    /// Redirects the diagnostic dump.
    #[must_use]
    pub fn with_dump_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dump_dir = Some(dir.into());
        self
    }

    /// Disables the diagnostic dump.
    #[must_use]
    pub fn without_dump(mut self) -> Self {
        self.dump_dir = None;
        self
    }

    /// Path of the document this loader reads.
    pub fn path(&self) -> PathBuf {
        config_path(&self.identifier, &self.directory)
    }

    /// Reads the document. Returns `None` (after one warning) on any failure.
    pub fn load(&self) -> Option<ConfigurationDocument> {
        info!("Loading configuration from {:?}", self.path());

        let doc = match try_load(&self.identifier, &self.directory) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Cannot load configuration: {}", e);
                return None;
            }
        };

        info!(
            "Loaded configuration: {} options, {} defaults, {} entities",
            doc.options.as_ref().map_or(0, |o| o.params.len()),
            doc.defaults.as_ref().map_or(0, |d| d.params.len()),
            doc.entity_patches.len()
        );

        if let Some(dir) = &self.dump_dir {
            if same_directory(dir, &self.directory) {
                debug!("Dump directory is the source directory, skipping dump");
                return Some(doc);
            }
            match dump_document(&doc, dir, &self.identifier) {
                Ok(path) => debug!("Configuration dumped to {:?}", path),
                Err(e) => warn!("Cannot dump configuration: {}", e),
            }
        }

        Some(doc)
    }
}
