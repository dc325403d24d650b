//! Output location for new posts.
//!
//! The posts directory sits next to the running executable. It is resolved
//! once at startup and handed to the writer, so tests can point it anywhere.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PostError;

/// Name of the posts directory, relative to the program's directory.
pub const POSTS_DIR_NAME: &str = "_posts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostConfig {
    pub posts_dir: PathBuf,
}

impl PostConfig {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    /// Resolve `<program dir>/_posts`.
    ///
    /// The directory is not checked for existence; a missing directory shows up
    /// as a write failure later.
    ///
    /// # Errors
    /// Returns [`PostError::ProgramLocation`] if the executable path cannot be
    /// determined.
    pub fn from_program_location() -> Result<Self, PostError> {
        Ok(Self::new(program_dir()?.join(POSTS_DIR_NAME)))
    }

    /// Full path of the Markdown file for `filename` (given without extension).
    pub fn post_path(&self, filename: &str) -> PathBuf {
        self.posts_dir.join(format!("{filename}.md"))
    }
}

/// Directory containing the currently running executable.
///
/// # Errors
/// Returns [`PostError::ProgramLocation`] if `current_exe` fails or has no parent.
pub fn program_dir() -> Result<PathBuf, PostError> {
    let exe_path = env::current_exe().map_err(PostError::ProgramLocation)?;
    exe_path.parent().map(Path::to_path_buf).ok_or_else(|| {
        PostError::ProgramLocation(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe_path.display()),
        ))
    })
}
