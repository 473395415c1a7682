//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Per-page stylesheets, scripts, libraries and fonts for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: page-assets.toml)
    #[arg(short = 'C', long, default_value = "page-assets.toml")]
    pub config: PathBuf,

    /// Print every resolved tag and copied file
    #[arg(short, long)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// URL overrides for the `[site]` section
#[derive(clap::Args, Debug, Clone)]
pub struct SiteArgs {
    /// Override base URL for local asset links.
    ///
    /// Example: preview a production build from a local server:
    ///   page-assets inject --site-url "http://127.0.0.1:8000" post.json
    #[arg(long = "site-url")]
    pub site_url: Option<String>,

    /// Emit links relative to the page (`css/a.css`) instead of prefixing the site url
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub relative_urls: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve asset tags in metadata files and print the header/footer fragments
    Inject {
        #[command(flatten)]
        site: SiteArgs,

        /// Write `<stem>.json` for each input into this directory instead of printing
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Metadata files (.json or .toml)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Copy css/ and js/ files from the content directory into the output directory
    Copy {
        /// Content directory path (relative to project root)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copy every file even if the destination is up to date
        #[arg(long)]
        clean: bool,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_inject(&self) -> bool {
        matches!(self.command, Commands::Inject { .. })
    }
    pub const fn is_copy(&self) -> bool {
        matches!(self.command, Commands::Copy { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inject() {
        let cli = Cli::parse_from(["page-assets", "-v", "inject", "a.json", "b.toml"]);
        assert!(cli.verbose);
        assert!(cli.is_inject());
        match cli.command {
            Commands::Inject { site, out, files } => {
                assert_eq!(site.site_url, None);
                assert_eq!(site.relative_urls, None);
                assert_eq!(out, None);
                assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.toml")]);
            }
            Commands::Copy { .. } => panic!("expected inject"),
        }
    }

    #[test]
    fn test_parse_relative_urls_forms() {
        let cli = Cli::parse_from(["page-assets", "inject", "--relative-urls=false", "a.json"]);
        let Commands::Inject { site, .. } = cli.command else {
            panic!("expected inject");
        };
        assert_eq!(site.relative_urls, Some(false));

        let cli = Cli::parse_from(["page-assets", "inject", "--relative-urls", "a.json"]);
        let Commands::Inject { site, files, .. } = cli.command else {
            panic!("expected inject");
        };
        assert_eq!(site.relative_urls, Some(true));
        assert_eq!(files, vec![PathBuf::from("a.json")]);
    }

    #[test]
    fn test_inject_requires_files() {
        assert!(Cli::try_parse_from(["page-assets", "inject"]).is_err());
    }

    #[test]
    fn test_parse_copy() {
        let cli = Cli::parse_from(["page-assets", "-C", "site.toml", "copy", "--clean", "-o", "dist"]);
        assert!(cli.is_copy());
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Copy { content, output, clean } = cli.command else {
            panic!("expected copy");
        };
        assert_eq!(content, None);
        assert_eq!(output, Some(PathBuf::from("dist")));
        assert!(clean);
    }
}
