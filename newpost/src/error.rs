use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while locating or writing a post.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("unable to write post file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to resolve the program's own directory")]
    ProgramLocation(#[source] io::Error),
}
