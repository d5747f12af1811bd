use catalog::{derive_point, parse_catalog, CatalogSource, DirectorySource, SkipReason};
use clap::Parser;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::PathBuf;

/// Count the records, derivable points and skipped records of element catalogs
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Output file path to write, stdout when not provided
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Directory containing the <category>.txt element catalogs
    #[arg(short = 'd', long, default_value = ".")]
    catalog_dir: PathBuf,

    /// Catalog categories to summarize
    #[arg(required = true)]
    categories: Vec<String>,
}

#[derive(Debug, Default)]
struct CategoryStats {
    records: usize,
    points: usize,
    skipped: BTreeMap<SkipReason, usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let mut output: Box<dyn Write> = match opts.output.as_ref() {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    };

    let mut source = DirectorySource::new(opts.catalog_dir);

    for category in opts.categories.iter() {
        let text = source.fetch(category)?;
        let records = parse_catalog(&text);

        let mut stats = CategoryStats {
            records: records.len(),
            ..Default::default()
        };
        for record in records.iter() {
            match derive_point(record) {
                Ok(_) => stats.points += 1,
                Err(reason) => *stats.skipped.entry(reason).or_default() += 1,
            }
        }

        writeln!(
            &mut output,
            "{category}: {} records, {} points, {} skipped",
            stats.records,
            stats.points,
            stats.records - stats.points
        )?;
        for (reason, count) in stats.skipped.iter() {
            writeln!(&mut output, "  {count:>6}  {reason}")?;
        }
    }

    Ok(())
}
