use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompactError {
    #[error("Storage too short: size {size} exceeds {len} stored elements")]
    StorageTooShort { size: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, CompactError>;
