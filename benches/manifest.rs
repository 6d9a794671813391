#![allow(unused)]
extern crate bundlescope;

use bundlescope::{BundleInfo, Manifest, Version};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

/// Build a manifest the size of a typical framework bundle: a long wrapped `Export-Package`
/// header plus one digest entry per class.
fn sample_manifest(entries: usize) -> Vec<u8> {
    let mut manifest = Manifest::new();
    let main = manifest.main_attributes_mut();
    main.insert("Manifest-Version", "1.0").unwrap();
    main.insert("Bundle-ManifestVersion", "2").unwrap();
    main.insert("Bundle-SymbolicName", "org.example.framework;singleton:=true")
        .unwrap();
    main.insert("Bundle-Version", "3.18.0.v20240201-1200").unwrap();

    let exports: Vec<String> = (0..200)
        .map(|i| format!("org.example.framework.pkg{};version=\"3.18.0\"", i))
        .collect();
    main.insert("Export-Package", exports.join(",")).unwrap();

    for i in 0..entries {
        manifest
            .entry_mut(&format!("org/example/framework/pkg{}/Type{}.class", i % 200, i))
            .insert("SHA-256-Digest", "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=")
            .unwrap();
    }

    manifest.to_bytes()
}

/// Benchmark parsing a manifest and extracting the bundle identity from it
fn bench_parse_manifest(c: &mut Criterion) {
    let data = sample_manifest(2_000);

    println!(
        "Benchmarking manifest: {} bytes ({:.2} KB)",
        data.len(),
        data.len() as f64 / 1024.0
    );

    let mut group = c.benchmark_group("manifest");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("parse", |b| {
        b.iter(|| {
            let manifest = Manifest::parse(black_box(&data)).unwrap();
            black_box(manifest)
        });
    });
    group.bench_function("parse_bundle_info", |b| {
        b.iter(|| {
            let manifest = Manifest::parse(black_box(&data)).unwrap();
            black_box(BundleInfo::<()>::from_manifest(&manifest, None).unwrap())
        });
    });
    group.finish();
}

/// Benchmark sorting bundle identities, many versions of few names
fn bench_sort_bundles(c: &mut Criterion) {
    let bundles: Vec<BundleInfo<usize>> = (0..10_000u32)
        .map(|i| {
            let version =
                Version::parse(&format!("{}.{}.{}.v{}", i % 7, i % 13, i % 3, i)).unwrap();
            BundleInfo::new(format!("org.example.bundle{}", i % 50), version, Some(i as usize))
        })
        .collect();

    c.bench_function("sort_bundles", |b| {
        b.iter(|| {
            let mut sorted = bundles.clone();
            sorted.sort();
            black_box(sorted)
        });
    });
}

criterion_group!(benches, bench_parse_manifest, bench_sort_bundles);
criterion_main!(benches);
