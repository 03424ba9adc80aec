use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error during marshal/unmarshal: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("unmarshal: short read at an entry boundary")]
    ShortRead,
    #[error(
        "unmarshal: width mismatch (stream has key={found_key}/value={found_value}, \
         table expects key={expected_key}/value={expected_value})"
    )]
    WidthMismatch {
        expected_key: usize,
        found_key: usize,
        expected_value: usize,
        found_value: usize,
    },
    #[error("unmarshal: corrupt header (bucket_capacity={bucket_capacity}, split_threshold={split_threshold})")]
    InvalidHeader {
        bucket_capacity: usize,
        split_threshold: f32,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
