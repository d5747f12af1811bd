use catalog::{load_categories, DirectorySource};
use clap::Parser;
use satview_lib::{
    config::{Config, Overrides, PlotFormat},
    view::{plot_records, write_listing},
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

/// List tracked objects from element catalogs and write their plot points
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// View configuration toml file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog category to load, may be given more than once.
    ///
    /// Replaces the configured categories (active and stations by default).
    #[arg(short = 'c', long = "category")]
    categories: Vec<String>,

    /// Only list objects whose name contains this text, ignoring case
    #[arg(short = 'f', long)]
    filter: Option<String>,

    /// Write the plot points of all loaded objects to this file
    #[arg(short = 'o', long)]
    plot: Option<PathBuf>,

    /// Plot output format
    #[arg(long, value_enum)]
    format: Option<PlotFormat>,

    /// Directory containing the <category>.txt element catalogs
    catalog_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let cfg = match opts.config.as_ref() {
        Some(path) => {
            info!(config = %path.display(), "Loading view from config file");
            Config::load(path)?
        }
        None => Config::default(),
    };
    let cfg = cfg.apply_overrides(Overrides {
        catalog_dir: opts.catalog_dir,
        categories: opts.categories,
        filter: opts.filter,
        plot_output: opts.plot,
        plot_format: opts.format,
    })?;

    if let Some(name) = cfg.name.as_ref() {
        info!(view = %name, "Loading view");
    }

    let mut source = DirectorySource::new(cfg.catalog_dir());
    let records = load_categories(&mut source, &cfg.categories)?;

    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), &records, cfg.filter.as_deref())?;

    if let Some(plot) = cfg.plot.as_ref() {
        let output = BufWriter::new(File::create(&plot.output)?);
        let mut sink = plot.format.sink(output);
        let num_points = plot_records(sink.as_mut(), &records)?;
        info!(
            output = %plot.output.display(),
            points = num_points,
            skipped = records.len() - num_points,
            "Wrote plot points"
        );
    }

    Ok(())
}
