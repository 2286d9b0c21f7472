use clap::{Parser, Subcommand};
use toprank::{options::CommonOptions, sort::sort_records, top_k::top_records};

/// Priority ranking for newline-delimited scored records
#[derive(Debug, Parser)]
#[command(name = "toprank")]
#[command(about = "Sort scored records, or keep the top ranked ones.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sort records into non-decreasing priority order
    #[command(arg_required_else_help = true)]
    Sort {
        /// The output filename
        #[arg(short, long)]
        out: String,

        /// File of records to sort
        input: String,

        #[command(flatten)]
        common: CommonOptions,
    },

    /// Keep the k records with the highest priority, best first
    #[command(arg_required_else_help = true)]
    Top {
        /// How many records to keep
        #[arg(short, long, required = false, default_value = "10")]
        k: usize,

        /// The output filename
        #[arg(short, long)]
        out: String,

        /// File of records to select from
        input: String,

        #[command(flatten)]
        common: CommonOptions,
    },
}

fn init_logging(common: &CommonOptions) {
    let level = if common.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(level).init();
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort { out, input, common } => {
            init_logging(&common);
            sort_records(&input, &out)?;
        }
        Commands::Top {
            k,
            out,
            input,
            common,
        } => {
            init_logging(&common);
            top_records(&input, &out, k)?;
        }
    }
    Ok(())
}
