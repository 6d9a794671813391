#![no_main]

use bundlescope::{BundleInfo, Manifest, Version};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(manifest) = Manifest::from_mem(data.to_vec()) {
        let _ = BundleInfo::<()>::from_manifest(&manifest, None);

        // Whatever was parsed must survive a write and re-read unchanged
        let reparsed = Manifest::parse(&manifest.to_bytes()).unwrap();
        assert_eq!(manifest, reparsed);
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(version) = Version::parse(text) {
            assert_eq!(Version::parse(&version.to_string()).unwrap(), version);
        }
    }
});
