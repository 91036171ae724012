use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),
    
    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),
    
    #[error("Failed to decode image: {0}")]
    DecodeError(String),
    
    #[error("Failed to encode image: {0}")]
    EncodeError(String),
    
    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported channel count: {0} (expected 1 to 4)")]
    UnsupportedChannelCount(usize),
    
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
    
    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),
    
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
