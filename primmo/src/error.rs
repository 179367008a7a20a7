use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Leptos configuration error {0}")]
    Config(String),
    #[error("Invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("IO Error {0}")]
    Io(#[from] std::io::Error),
}
