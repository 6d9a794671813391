use std::fs;

use tempfile::TempDir;

use crate::{
    bundle::{MANIFEST_FILE, META_INF},
    manifest::Manifest,
};

/// Builder for manifests used in unit tests.
///
/// Panics on invalid header names or values, which is what a test wants.
#[derive(Default)]
pub struct ManifestBuilder {
    manifest: Manifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manifest carrying both bundle identity headers.
    pub fn bundle(symbolic_name: &str, version: &str) -> Self {
        Self::new()
            .header("Manifest-Version", "1.0")
            .header("Bundle-SymbolicName", symbolic_name)
            .header("Bundle-Version", version)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.manifest
            .main_attributes_mut()
            .insert(name, value)
            .unwrap();
        self
    }

    pub fn entry(mut self, entry: &str, name: &str, value: &str) -> Self {
        self.manifest.entry_mut(entry).insert(name, value).unwrap();
        self
    }

    pub fn build(self) -> Manifest {
        self.manifest
    }
}

// Helper function to create an exploded bundle folder holding `manifest` as its manifest
pub fn exploded_bundle(manifest: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let meta_inf = dir.path().join(META_INF);
    fs::create_dir(&meta_inf).unwrap();
    fs::write(meta_inf.join(MANIFEST_FILE), manifest).unwrap();
    dir
}
