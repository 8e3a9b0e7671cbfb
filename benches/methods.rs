use std::fs::{self, File};
use std::hint::black_box;
use std::path::Path;

use criterion::{criterion_group, criterion_main, Criterion};
use env_logger;

use glob_bench::utils::cases::BenchmarkCase;
use glob_bench::utils::method::Method;
use glob_bench::utils::runner::Runner;
use glob_bench::utils::writer::BufferedWriter;

const FILES: &[&str] = &["Hello.swift", "Hello World.swift", "Hello.txt", "Hello World"];

fn populate(dir: &Path, depth: usize) {
    fs::create_dir_all(dir).unwrap();
    for file in FILES {
        File::create(dir.join(file)).unwrap();
    }
    if depth > 0 {
        let level = format!("level{}", depth);
        for sub in ["Hello", ".build", level.as_str()] {
            populate(&dir.join(sub), depth - 1);
        }
    }
}

fn methods(c: &mut Criterion) {
    let _ = env_logger::builder().try_init();
    let root = tempfile::tempdir().unwrap();
    populate(root.path(), 4);

    let cases = [
        BenchmarkCase::new("fixed", "level4/level3/level2/*"),
        BenchmarkCase::new("wildcards", "level*/level*/level*/*"),
        BenchmarkCase::new("class", "level[0-9]/level[0-9]/level[0-9]/*"),
    ];
    let writer = BufferedWriter::new();
    for method in [Method::Glob, Method::Walk] {
        let runner = Runner::new(root.path(), method, &writer);
        for case in &cases {
            c.bench_function(&format!("{}/{}", method, case.name), |b| {
                b.iter(|| runner.measure(black_box(case)))
            });
        }
    }
}

criterion_group!(benches, methods);
criterion_main!(benches);
