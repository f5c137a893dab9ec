use thiserror::Error;

#[derive(Debug, Error)]
pub enum VmError {
    #[error("usage: lc3vm <image>")]
    MissingImage,

    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
