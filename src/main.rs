use afmatch::{run, Config, OutputMode};
use clap::Parser;
use log::LevelFilter;
use mimalloc::MiMalloc;
use std::process;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Report the variants of one VCF found at positions of low allele-frequency
/// variants in another, optionally exporting them to CSV.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Gzipped VCF whose records are reported (e.g. NA12878.chr21.slice.vcf.gz)
    #[arg(long, visible_alias = "f1")]
    file1: String,

    /// Gzipped VCF filtered by AF (e.g. gnomad.chr21.slice.vcf.gz)
    #[arg(long, visible_alias = "f2")]
    file2: String,

    /// Output CSV path, `-` for stdout. Without it only the count is printed
    #[arg(short, long)]
    output: Option<String>,

    /// Allele frequency threshold; records of file2 with AF below it are kept
    #[arg(
        short = 't',
        long,
        visible_alias = "af",
        alias = "af_threshold",
        default_value_t = 0.01,
        allow_negative_numbers = true
    )]
    af_threshold: f64,

    /// Verbosity
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, default_value_t = 0)]
    verbosity: u8,
}

fn main() {
    let args = Args::parse();

    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let output = match args.output {
        Some(path) => OutputMode::Csv(path),
        None => OutputMode::Count,
    };

    let config = match Config::new(args.file1, args.file2, args.af_threshold, output) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let summary = match run(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    let report = format!(
        "{} variants in {} at positions with AF < {} in {}",
        summary.matched, config.query_vcf, config.af_threshold, config.reference_vcf
    );
    match &config.output {
        OutputMode::Count => println!("{}", report),
        // the table itself went to stdout
        OutputMode::Csv(path) if path == "-" => eprintln!("{}", report),
        OutputMode::Csv(path) => {
            println!("{}", report);
            println!("Filtered data written to {}", path);
        }
    }
}
