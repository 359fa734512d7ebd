#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

pub const PEOPLE: &str = "\
id,name,score,active
1,ann,1.5,true
2,bob,2.25,false
3,cid,3,true
4,dee,-0.5,false
";

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

pub fn read_parquet(path: &Path) -> Vec<RecordBatch> {
    let file = File::open(path).unwrap();
    ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap()
        .map(|batch| batch.unwrap())
        .collect()
}

/// Reads the CSV directly through the Arrow reader with inference.
pub fn read_csv(path: &Path) -> Vec<RecordBatch> {
    let mut file = File::open(path).unwrap();
    let (schema, _) = arrow::csv::reader::infer_file_schema(&mut file, b',', None, true).unwrap();
    ReaderBuilder::new()
        .has_header(true)
        .with_schema(Arc::new(schema))
        .build(file)
        .unwrap()
        .map(|batch| batch.unwrap())
        .collect()
}

pub fn row_count(batches: &[RecordBatch]) -> usize {
    batches.iter().map(|b| b.num_rows()).sum()
}
