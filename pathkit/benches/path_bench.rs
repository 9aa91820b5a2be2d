use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathkit::path::{PathRelationship, PathResolver};
use pathkit::project::{Marker, MarkerSet, ProjectRootLocator};
use pathkit::{is_subpath, normalize, relative};
use std::fs;
use tempfile::TempDir;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    // Benchmark absolute path normalization
    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize(black_box("/absolute/path/to/file")));
    });

    // Benchmark relative path normalization
    group.bench_function("relative_path", |b| {
        b.iter(|| normalize(black_box("./relative/path")));
    });

    // Benchmark path with . and .. components
    group.bench_function("with_dots", |b| {
        b.iter(|| normalize(black_box("/a/b/../c/./d")));
    });

    // Benchmark path with many .. components
    group.bench_function("many_dots", |b| {
        b.iter(|| normalize(black_box("/a/b/c/d/../../e/f/../../../g")));
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = "/users/test/projects/pathkit";
    let descendant = "/users/test/projects/pathkit/src/path";
    let sibling = "/users/test/projects/pathkit-cli";

    group.bench_function("between_ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(descendant)));
    });

    group.bench_function("is_subpath_prefix_sibling", |b| {
        b.iter(|| is_subpath(black_box(ancestor), black_box(sibling)));
    });

    group.bench_function("relative", |b| {
        b.iter(|| relative(black_box(descendant), black_box(sibling)));
    });

    group.finish();
}

fn bench_path_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_depth");

    for depth in [1, 5, 10, 20, 50] {
        let path = (0..depth).fold(String::new(), |mut acc, i| {
            acc.push_str(&format!("/level{i}/."));
            acc
        });
        group.bench_with_input(BenchmarkId::new("normalize", depth), &path, |b, path| {
            b.iter(|| normalize(black_box(path)));
        });
    }

    group.finish();
}

fn bench_filesystem(c: &mut Criterion) {
    let mut group = c.benchmark_group("filesystem");

    let temp = TempDir::new().unwrap();
    let deep = temp.path().join("a/b/c/d/e");
    fs::create_dir_all(&deep).unwrap();
    fs::create_dir(temp.path().join("a/.bench-marker")).unwrap();
    let deep = deep.to_str().unwrap().to_string();
    let missing = format!("{deep}/not/created");

    let resolver = PathResolver::new();
    group.bench_function("resolve_existing", |b| {
        b.iter(|| resolver.resolve(black_box(&deep)));
    });
    group.bench_function("resolve_missing", |b| {
        b.iter(|| resolver.resolve(black_box(&missing)));
    });

    let locator = ProjectRootLocator::new(MarkerSet::new([Marker::directory(".bench-marker")]));
    group.bench_function("find_project_root", |b| {
        b.iter(|| locator.find(black_box(Some(deep.as_str()))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_relationship,
    bench_path_depth,
    bench_filesystem
);
criterion_main!(benches);
