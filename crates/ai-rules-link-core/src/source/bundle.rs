//! Read-only rule bundles used as the last-resort source

use std::collections::BTreeMap;

use include_dir::{Dir, include_dir};

static BUNDLED_RULES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/rules");

/// Read-only lookup from file name to content
pub trait RuleBundle {
    /// Content of the named file, if bundled
    fn get(&self, file_name: &str) -> Option<&[u8]>;

    /// Names of all bundled files
    fn file_names(&self) -> Vec<String>;
}

/// Rules compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedRules {
    dir: &'static Dir<'static>,
}

impl Default for EmbeddedRules {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedRules {
    /// Access the bundled rules
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dir: &BUNDLED_RULES,
        }
    }
}

impl RuleBundle for EmbeddedRules {
    fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.dir.get_file(file_name).map(include_dir::File::contents)
    }

    fn file_names(&self) -> Vec<String> {
        self.dir
            .files()
            .filter_map(|file| file.path().file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

/// In-memory bundle
#[derive(Debug, Clone, Default)]
pub struct MapBundle {
    files: BTreeMap<String, Vec<u8>>,
}

impl MapBundle {
    /// Create an empty bundle
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style
    #[must_use]
    pub fn with(mut self, file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(file_name, content);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, file_name: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(file_name.into(), content.into());
    }
}

impl RuleBundle for MapBundle {
    fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files.get(file_name).map(Vec::as_slice)
    }

    fn file_names(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }
}
