//! # Shared Fixtures
//!
//! A small seeded catalogue and a matching on-disk matrix store. Five
//! entries across two organisms, with classification, disease and cofactor
//! links chosen so every parameter kind selects a distinct subset.
//!
//! | Entry | Length | Organism | CATH | Enzyme | Disease | Cofactor | Matrix |
//! |-------|--------|----------|------|--------|---------|----------|--------|
//! | P00001 | 5 | 9606 | 3.40.50.300 | 3.1.1.4 | DI-00001 | - | yes |
//! | P00002 | 8 | 562 | 3.30.70.10 | - | - | CHEBI:18420 | yes |
//! | P00003 | 16 | 9606 | - | 2.7.11.1 | - | - | no |
//! | P00004 | 12 | 9606 | 1.10.8.10 | 3.4.21.5 | DI-00002 | CHEBI:18420 | yes |
//! | P00005 | 3 | 562 | - | - | - | - | no |

use std::path::{Path, PathBuf};

use cv_02_matrix_store::domain::encode;
use cv_02_matrix_store::{DirectoryMatrixStore, SequenceDigest};
use rusqlite::Connection;
use shared_types::Matrix;

use cv_01_protein_catalog::adapters::FIXTURE_SCHEMA;

/// Sequences in entry order.
pub const SEQUENCES: [(&str, &str); 5] = [
    ("P00001", "MKVLA"),
    ("P00002", "MKVLAGHT"),
    ("P00003", "MKVLAGHTWYRRSTPA"),
    ("P00004", "GGSMKVLAGHTW"),
    ("P00005", "MKV"),
];

/// Entries with a stored matrix.
pub const WITH_MATRIX: [&str; 3] = ["P00001", "P00002", "P00004"];

const ROWS: &str = "
INSERT INTO organism VALUES (9606, 'Homo sapiens', 'Human', ':Eukaryota:Metazoa:Chordata:Mammalia:Primates:Homo:');
INSERT INTO organism VALUES (562, 'Escherichia coli', NULL, ':Bacteria:Proteobacteria:Gammaproteobacteria:Escherichia:');

INSERT INTO entry VALUES ('P00001', 'MKVLA', 5, 120.5, 9606, 0.4, 0.1, 0.2, 1, 0, 1, 1);
INSERT INTO entry VALUES ('P00002', 'MKVLAGHT', 8, NULL, 562, 0.1, 0.3, 0.5, 0, 1, 0, 0);
INSERT INTO entry VALUES ('P00003', 'MKVLAGHTWYRRSTPA', 16, 33.0, 9606, 0.7, 0.0, 0.1, 0, 0, 0, 0);
INSERT INTO entry VALUES ('P00004', 'GGSMKVLAGHTW', 12, 80.0, 9606, 0.25, 0.25, 0.25, 1, 1, 1, 1);
INSERT INTO entry VALUES ('P00005', 'MKV', 3, NULL, 562, NULL, NULL, NULL, 0, 0, 0, 0);

INSERT INTO cath_class VALUES ('P00001', 3, 40, 50, 300);
INSERT INTO cath_class VALUES ('P00002', 3, 30, 70, 10);
INSERT INTO cath_class VALUES ('P00004', 1, 10, 8, 10);

INSERT INTO enzyme_class VALUES ('P00001', 3, 1, 1, 4);
INSERT INTO enzyme_class VALUES ('P00003', 2, 7, 11, 1);
INSERT INTO enzyme_class VALUES ('P00004', 3, 4, 21, 5);

INSERT INTO disease VALUES ('DI-00001', 'Breast cancer');
INSERT INTO disease VALUES ('DI-00002', 'Hereditary pancreatitis');
INSERT INTO entry_disease VALUES ('P00001', 'DI-00001');
INSERT INTO entry_disease VALUES ('P00004', 'DI-00002');

INSERT INTO cofactor VALUES ('CHEBI:18420', 'Mg(2+)');
INSERT INTO cofactor VALUES ('CHEBI:29105', 'Zn(2+)');
INSERT INTO entry_cofactor VALUES ('P00002', 'CHEBI:18420');
INSERT INTO entry_cofactor VALUES ('P00004', 'CHEBI:18420');
";

/// Create and seed `<dir>/coevo.db`.
pub fn seed_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("coevo.db");
    let conn = Connection::open(&path).expect("open fixture database");
    conn.execute_batch(FIXTURE_SCHEMA).expect("create fixture schema");
    conn.execute_batch(ROWS).expect("insert fixture rows");
    path
}

/// Square matrix for a sequence: entry (i, j) is `1 / (1 + |i - j|)`.
pub fn matrix_for(sequence: &str) -> Matrix {
    let n = sequence.len();
    let values = (0..n * n)
        .map(|k| {
            let (i, j) = (k / n, k % n);
            1.0 / (1.0 + i.abs_diff(j) as f32)
        })
        .collect();
    Matrix::new(n, n, values).expect("square fixture matrix")
}

/// Create `<dir>/matrices` holding a matrix for every entry in [`WITH_MATRIX`].
pub fn seed_matrices(dir: &Path) -> PathBuf {
    let root = dir.join("matrices");
    std::fs::create_dir_all(&root).expect("create matrix root");
    let store = DirectoryMatrixStore::open(&root).expect("open matrix root");

    for (id, sequence) in SEQUENCES {
        if !WITH_MATRIX.contains(&id) {
            continue;
        }
        let path = store.path_for(&SequenceDigest::of(sequence));
        if let Some(shard) = path.parent() {
            std::fs::create_dir_all(shard).expect("create shard directory");
        }
        let bytes = encode(&matrix_for(sequence)).expect("encode fixture matrix");
        std::fs::write(path, bytes).expect("write fixture matrix");
    }
    root
}

/// Create `<dir>/aln` with one alignment file for P00001.
pub fn seed_alignments(dir: &Path) -> PathBuf {
    let root = dir.join("aln");
    std::fs::create_dir_all(&root).expect("create alignment root");
    std::fs::write(root.join("P00001.aln"), ">P00001\nMKVLA\n>homolog\nMRVLA\n")
        .expect("write fixture alignment");
    root
}
