use anyhow::{Context, Result};
use folio::{Config, SiteOptions, generate_site};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);
    config.validate().context("Invalid configuration")?;

    let title = config
        .site_title()
        .context("Failed to determine site title")?;

    let site = generate_site(&SiteOptions {
        content_dir: &config.content,
        output_dir: &config.output,
        title: &title,
        script: config.script.as_deref(),
    })
    .context("Failed to generate site")?;

    println!(
        "Generated: {} ({} sections, {} palette items)",
        site.index_path.display(),
        site.section_count,
        site.palette_item_count
    );

    if !config.no_open
        && let Err(e) = open::that(&site.index_path)
    {
        warn!("Failed to open {}: {}", site.index_path.display(), e);
    }

    Ok(())
}
