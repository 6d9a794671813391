//! Integration tests for reading bundle identities from exploded bundle folders.
//!
//! Each test lays out one or more bundle folders in a temporary directory, the way a build or
//! an installation unpacks them, and reads them back through the public API.

use bundlescope::prelude::*;
use std::{fs, path::Path, sync::Arc};
use tempfile::TempDir;

/// Factory method that writes `manifest` to `<root>/<folder>/META-INF/MANIFEST.MF`.
fn factory_exploded_bundle(root: &Path, folder: &str, manifest: &str) -> std::path::PathBuf {
    let bundle = root.join(folder);
    fs::create_dir_all(bundle.join("META-INF")).unwrap();
    fs::write(bundle.join("META-INF").join("MANIFEST.MF"), manifest).unwrap();
    bundle
}

fn factory_plugins_folder() -> TempDir {
    let root = tempfile::tempdir().unwrap();

    factory_exploded_bundle(
        root.path(),
        "org.example.core_2.0.0",
        "Manifest-Version: 1.0\r\n\
         Bundle-SymbolicName: org.example.core;singleton:=true\r\n\
         Bundle-Version: 2.0.0\r\n",
    );
    factory_exploded_bundle(
        root.path(),
        "org.example.core_1.5.0",
        "Manifest-Version: 1.0\r\n\
         Bundle-SymbolicName: org.example.core\r\n\
         Bundle-Version: 1.5.0.v20240101\r\n",
    );
    factory_exploded_bundle(
        root.path(),
        "com.example.ui_1.0.0",
        "Manifest-Version: 1.0\n\
         Bundle-ManifestVersion: 2\n\
         Bundle-SymbolicName: com.example.ui\n\
         Bundle-Version: 1.0.0\n\
         Require-Bundle: org.example.core;bundle-version=\"[1.5.0,3.0.0)\",org.exam\n \
         ple.other\n\
         \n\
         Name: com/example/ui/Main.class\n\
         SHA-256-Digest: 47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=\n",
    );
    // A plain library jar unpacked next to the bundles.
    factory_exploded_bundle(
        root.path(),
        "commons-lang",
        "Manifest-Version: 1.0\nImplementation-Title: commons-lang\n",
    );
    // Not a bundle folder at all.
    fs::create_dir(root.path().join("docs")).unwrap();

    root
}

#[test]
fn scan_plugins_folder() {
    let root = factory_plugins_folder();

    let mut bundles = Vec::new();
    let mut not_exploded = Vec::new();
    let mut plain_jars = Vec::new();

    for entry in fs::read_dir(root.path()).unwrap() {
        let path = entry.unwrap().path();
        match read_manifest(&path) {
            Ok(manifest) if is_bundle(Some(&manifest)) => {
                bundles.push(BundleInfo::from_manifest(&manifest, Some(path)).unwrap());
            }
            Ok(_) => plain_jars.push(path),
            Err(Error::NotFound(folder)) => not_exploded.push(folder),
            Err(e) => panic!("unexpected error for {}: {}", path.display(), e),
        }
    }

    assert_eq!(plain_jars, [root.path().join("commons-lang")]);
    assert_eq!(not_exploded, [root.path().join("docs")]);

    bundles.sort();
    let identities: Vec<String> = bundles
        .iter()
        .map(|bundle| format!("{}:{}", bundle.symbolic_name(), bundle.version()))
        .collect();
    assert_eq!(
        identities,
        [
            "com.example.ui:1.0.0",
            "org.example.core:1.5.0.v20240101",
            "org.example.core:2.0.0",
        ]
    );

    // The context is the folder each bundle was read from.
    for bundle in &bundles {
        let folder = bundle.context().unwrap();
        assert!(folder.join("META-INF").is_dir());
    }
}

#[test]
fn read_bundle_with_entries_and_continuations() {
    let root = factory_plugins_folder();
    let folder = root.path().join("com.example.ui_1.0.0");

    let manifest = read_manifest(&folder).unwrap();
    assert_eq!(
        manifest.main_attributes().get("Require-Bundle"),
        Some("org.example.core;bundle-version=\"[1.5.0,3.0.0)\",org.example.other")
    );
    assert!(manifest.attributes("com/example/ui/Main.class").is_some());

    let bundle = read_exploded_bundle(&folder, Some("plugins")).unwrap();
    assert_eq!(bundle.to_string(), "com.example.ui:1.0.0:plugins");
}

#[test]
fn shared_context_between_bundles() {
    let root = factory_plugins_folder();
    let repository = Arc::new(String::from("local"));

    let core = read_exploded_bundle(
        root.path().join("org.example.core_2.0.0"),
        Some(Arc::clone(&repository)),
    )
    .unwrap();
    let ui = read_exploded_bundle(
        root.path().join("com.example.ui_1.0.0"),
        Some(Arc::clone(&repository)),
    )
    .unwrap();

    assert!(Arc::ptr_eq(core.context().unwrap(), ui.context().unwrap()));
    assert_eq!(core.to_string(), "org.example.core:2.0.0:local");
}

#[test]
fn same_bundle_in_two_locations_is_equal() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let manifest = "Bundle-SymbolicName: a\nBundle-Version: 1.0.0\n";

    let a = read_exploded_bundle(
        factory_exploded_bundle(first.path(), "a", manifest),
        Some("first"),
    )
    .unwrap();
    let b = read_exploded_bundle(
        factory_exploded_bundle(second.path(), "a", manifest),
        Some("second"),
    )
    .unwrap();

    assert_eq!(a, b);
    assert_ne!(a.to_string(), b.to_string());
}

#[test]
fn missing_meta_inf_reports_absolute_folder() {
    let root = tempfile::tempdir().unwrap();

    match read_exploded_bundle::<()>(root.path(), None) {
        Err(Error::NotFound(path)) => {
            assert!(path.is_absolute());
            assert!(path.ends_with(root.path().file_name().unwrap()));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn invalid_bundle_version() {
    let root = tempfile::tempdir().unwrap();
    let folder = factory_exploded_bundle(
        root.path(),
        "broken",
        "Bundle-SymbolicName: broken\nBundle-Version: 1.x\n",
    );

    let manifest = read_manifest(&folder).unwrap();
    assert!(is_bundle(Some(&manifest)));

    assert!(matches!(
        read_exploded_bundle::<()>(&folder, None),
        Err(Error::VersionFormat { .. })
    ));
}

#[test]
fn strict_reading_of_exploded_manifest() {
    let root = tempfile::tempdir().unwrap();
    let folder = factory_exploded_bundle(
        root.path(),
        "sloppy",
        "Bundle-SymbolicName: sloppy\nBundle-Version: 1.0.0",
    );
    let path = folder.join("META-INF").join("MANIFEST.MF");

    assert!(Manifest::from_file(&path).is_ok());
    assert!(matches!(
        Manifest::from_file_with_config(&path, &ManifestConfig::strict()),
        Err(Error::Malformed { .. })
    ));
}
