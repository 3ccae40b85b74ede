//! # Coevo Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | cv-01 Protein Catalog | Constraint building and compilation |
//! | cv-01 Protein Catalog | Pagination over a result set |
//! | cv-02 Matrix Store | Sequence digest |
//! | cv-02 Matrix Store | Matrix decode and render |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use coevo_tests::fixtures::matrix_for;
use cv_01_protein_catalog::domain::{compile, ResultPage};
use cv_01_protein_catalog::ConstraintSetBuilder;
use cv_02_matrix_store::domain::{decode, encode};
use cv_02_matrix_store::{render, MatrixFormat, SequenceDigest};

// ============================================================================
// CV-01: Constraint compilation
// ============================================================================

fn bench_constraint_compilation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cv-01-compile");

    group.bench_function("build_and_compile_single", |b| {
        b.iter(|| {
            let constraints = ConstraintSetBuilder::new()
                .with("min_length", black_box("100"))
                .build()
                .unwrap();
            black_box(compile(&constraints))
        })
    });

    group.bench_function("build_and_compile_mixed", |b| {
        b.iter(|| {
            let constraints = ConstraintSetBuilder::new()
                .with("min_length", black_box("100"))
                .with("max_length", black_box(900))
                .with("organism", "Homo")
                .with("cath", "3.40.*")
                .with("enzyme", "3.4.21.5")
                .with("has_pdb", "yes")
                .with("cofactor", "Mg")
                .build()
                .unwrap();
            black_box(compile(&constraints))
        })
    });

    group.finish();
}

// ============================================================================
// CV-01: Pagination
// ============================================================================

fn bench_pagination(c: &mut Criterion) {
    let mut group = c.benchmark_group("cv-01-paginate");
    let rows: Vec<u64> = (0..10_000).collect();

    for per_page in [10usize, 100] {
        group.bench_with_input(
            BenchmarkId::new("middle_page", per_page),
            &per_page,
            |b, &n| b.iter(|| black_box(ResultPage::from_all(&rows, 50, n).unwrap())),
        );
    }

    group.finish();
}

// ============================================================================
// CV-02: Digest and decode
// ============================================================================

fn bench_sequence_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("cv-02-digest");

    for len in [100usize, 1_000, 10_000] {
        let sequence: String = "ACDEFGHIKLMNPQRSTVWY".chars().cycle().take(len).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("md5", len), &sequence, |b, s| {
            b.iter(|| black_box(SequenceDigest::of(s)))
        });
    }

    group.finish();
}

fn bench_matrix_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("cv-02-decode");

    for len in [50usize, 300] {
        let sequence = "M".repeat(len);
        let digest = SequenceDigest::of(&sequence);
        let bytes = encode(&matrix_for(&sequence)).unwrap();

        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::new("decode_nested", len), &bytes, |b, bytes| {
            b.iter(|| {
                let matrix = decode(&digest, bytes).unwrap();
                black_box(render(matrix, MatrixFormat::Json))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_constraint_compilation,
    bench_pagination,
    bench_sequence_digest,
    bench_matrix_decode,
);
criterion_main!(benches);
