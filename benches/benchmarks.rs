//! Performance benchmarks for heft

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use heft::test_utils::TestDir;
use heft::{
    ErrorPolicy, OutputConfig, ScanConfig, TreeBuilder, TreeFormatter, WalkEntry, WalkError,
    scan,
};

/// Synthetic walk: `dirs` directories spread over three levels, each holding
/// `files_per_dir` files.
fn synthetic_walk(dirs: usize, files_per_dir: usize) -> Vec<Result<WalkEntry, WalkError>> {
    let mut walk = vec![Ok(WalkEntry::dir("/bench"))];
    for d in 0..dirs {
        let dir = format!("/bench/g{}/p{}/d{}", d % 10, d % 100, d);
        walk.push(Ok(WalkEntry::dir(dir.clone())));
        for f in 0..files_per_dir {
            walk.push(Ok(WalkEntry::file(
                format!("{}/file{}.dat", dir, f),
                (d * 31 + f * 7) as u64,
            )));
        }
    }
    walk
}

fn bench_build(c: &mut Criterion) {
    let walk = synthetic_walk(1_000, 20);

    c.bench_function("build_20k_entries", |b| {
        b.iter(|| {
            let report = TreeBuilder::new("/bench").build(walk.clone(), ErrorPolicy::FailFast);
            black_box(report.tree.total())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let walk = synthetic_walk(1_000, 20);
    let formatter = TreeFormatter::new(OutputConfig::default());

    c.bench_function("build_and_render_20k_entries", |b| {
        b.iter(|| {
            let tree = TreeBuilder::new("/bench")
                .build(walk.clone(), ErrorPolicy::FailFast)
                .tree;
            black_box(formatter.format(&tree))
        })
    });
}

fn bench_scan_filesystem(c: &mut Criterion) {
    let dir = TestDir::new();
    for d in 0..50 {
        for f in 0..10 {
            dir.add_file(&format!("mod{}/sub{}/file{}.txt", d % 5, d, f), 256);
        }
    }
    let config = ScanConfig::default();

    c.bench_function("scan_500_files", |b| {
        b.iter(|| {
            let report = scan(black_box(dir.path()), &config);
            black_box(report.tree.total())
        })
    });
}

criterion_group!(benches, bench_build, bench_render, bench_scan_filesystem);
criterion_main!(benches);
