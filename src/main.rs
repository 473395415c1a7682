//! page-assets - resolve per-page asset tags and bundle page-local files.

use anyhow::{Context, Result, bail};
use clap::Parser;
use page_assets::{
    PageAssets, SiteHooks,
    cli::{Cli, Commands},
    config::SiteConfig,
    log, logger, meta,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Inject { out, files, .. } => inject_files(&config, files, out.as_deref()),
        Commands::Copy { clean, .. } => {
            let plugin = PageAssets::from_config(&config).with_clean(*clean);
            plugin
                .on_build_finalized(&config.build.content, &config.build.output)
                .map(|_| ())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Run the document hook over each metadata file
fn inject_files(config: &SiteConfig, files: &[PathBuf], out: Option<&Path>) -> Result<()> {
    let plugin = PageAssets::from_config(config);

    if let Some(out) = out {
        fs::create_dir_all(out)
            .with_context(|| format!("Failed to create `{}`", out.display()))?;
    }

    for file in files {
        let mut metadata = meta::from_path(file)
            .with_context(|| format!("Failed to load metadata from `{}`", file.display()))?;
        let fragments = plugin
            .on_document_metadata(&mut metadata)
            .with_context(|| format!("Failed to resolve assets of `{}`", file.display()))?;

        let json = serde_json::to_string_pretty(&metadata)?;
        let Some(out) = out else {
            println!("{json}");
            continue;
        };

        let Some(stem) = file.file_stem() else {
            bail!("`{}` has no file name", file.display());
        };
        let mut name = stem.to_os_string();
        name.push(".json");
        let dest = out.join(name);
        fs::write(&dest, json).with_context(|| format!("Failed to write `{}`", dest.display()))?;

        log!(
            "inject";
            "{} ({} header, {} footer)",
            dest.display(),
            fragments.header.len(),
            fragments.footer.len()
        );
    }

    Ok(())
}
