//! Dated post filenames and the new-post writer.

use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::config::PostConfig;
use crate::error::PostError;
use crate::slug::slugify_ascii;

/// Front matter written into every new post.
pub const ARTICLE_TEMPLATE: &str = "---
layout: post
title:  \"\"
excerpt_separator: <!--more-->
---

<!--more-->
";

/// Today's date in the local time zone.
///
/// Falls back to the UTC date when the local offset can't be determined
/// (e.g. on Unix once other threads are running).
pub fn today() -> Date {
    match OffsetDateTime::now_local() {
        Ok(now) => now.date(),
        Err(err) => {
            warn!("local UTC offset unavailable ({err}); using UTC date");
            OffsetDateTime::now_utc().date()
        },
    }
}

/// Render a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Build a post filename (without extension) for `date`.
///
/// A present title, even an empty one, is slugified and appended after a
/// hyphen. An absent title yields the bare date.
pub fn file_name_for_date(date: Date, title: Option<&str>) -> String {
    let date = format_date(date);
    match title {
        Some(title) => {
            let slug = slugify_ascii(title);
            debug!("slugified '{title}' -> '{slug}'");
            format!("{date}-{slug}")
        },
        None => date,
    }
}

/// Build a post filename (without extension) for today.
pub fn create_file_name(title: Option<&str>) -> String {
    let filename = file_name_for_date(today(), title);
    debug!("post filename: {filename}");
    filename
}

/// Write [`ARTICLE_TEMPLATE`] to `<posts_dir>/<filename>.md`.
///
/// An existing file of the same name is truncated and overwritten.
///
/// # Errors
/// Returns [`PostError::Write`] if the posts directory is missing or the file
/// cannot be written.
pub fn create_new_post_file(config: &PostConfig, filename: &str) -> Result<PathBuf, PostError> {
    let path = config.post_path(filename);
    fs::write(&path, ARTICLE_TEMPLATE).map_err(|source| PostError::Write {
        path: path.clone(),
        source,
    })?;
    info!("created {}", path.display());
    Ok(path)
}
