#![warn(clippy::pedantic)]
//! ** newpost **
//! Creates a dated Markdown post in `_posts/` next to the executable.
//!
//! Usage: `newpost "How to check whether a script has elevated privileges?"`

use newpost::{PostConfig, create_file_name, create_new_post_file};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

/// Everything on the command line is data: the first argument is the title,
/// and anything after it is ignored.
#[derive(Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(allow_hyphen_values = true)]
    title: Option<String>,
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config =
        PostConfig::from_program_location().context("while locating the posts directory")?;
    info!("posts directory: {}", config.posts_dir.display());

    let filename = create_file_name(cli.title.as_deref());
    create_new_post_file(&config, &filename)
        .with_context(|| format!("while creating post '{filename}'"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_and_version_flags_are_titles() -> Result<()> {
        for flag in ["-h", "--help", "-V", "--version"] {
            let cli = Cli::try_parse_from(["newpost", flag])?;
            assert_eq!(cli.title.as_deref(), Some(flag));
        }
        Ok(())
    }

    #[test]
    fn extra_arguments_are_ignored() -> Result<()> {
        let cli = Cli::try_parse_from(["newpost", "one", "two", "--three"])?;
        assert_eq!(cli.title.as_deref(), Some("one"));
        Ok(())
    }

    #[test]
    fn no_arguments_means_no_title() -> Result<()> {
        let cli = Cli::try_parse_from(["newpost"])?;
        assert_eq!(cli.title, None);
        Ok(())
    }

    #[test]
    fn empty_argument_is_a_present_title() -> Result<()> {
        let cli = Cli::try_parse_from(["newpost", ""])?;
        assert_eq!(cli.title.as_deref(), Some(""));
        Ok(())
    }
}
