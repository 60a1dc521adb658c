use std::{
    io::{
        self,
        Write,
    },
    num::NonZeroUsize,
    path::PathBuf,
    process::ExitCode,
};

use clap::{
    Parser,
    Subcommand,
};
use env_logger::Builder;
use keyfind::{
    DEFAULT_CAPACITY,
    dataset::Dataset,
    driver::{
        self,
        DatasetSize,
        DriverConfig,
        StructureKind,
    },
};
use log::{
    LevelFilter,
    error,
};
use rand::{
    SeedableRng,
    rngs::StdRng,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert every id of one file, then look up every id of another.
    Run {
        /// Structure to store the ids in.
        #[arg(short, long, value_enum)]
        structure: StructureKind,

        /// File of ids to insert, one per line.
        #[arg(short, long)]
        ids: PathBuf,

        /// File of ids to look up, one per line.
        #[arg(short, long)]
        lookups: PathBuf,

        /// Bucket or slot count of the hash tables.
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
        capacity: NonZeroUsize,

        /// Print only the timing summary.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Write a random id file and lookup file.
    Generate {
        /// Dataset size.
        #[arg(short, long, value_enum)]
        size: DatasetSize,

        /// Directory to write the files into.
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn initialize_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();
    let _ = builder.try_init();
}

fn execute(command: Command) -> keyfind::Result<()> {
    match command {
        Command::Run {
            structure,
            ids,
            lookups,
            capacity,
            quiet,
        } => {
            let config = DriverConfig {
                table_capacity: capacity,
                print_results: !quiet,
            };
            let ids = driver::load_keys_from_path(ids)?;
            let lookups = driver::load_keys_from_path(lookups)?;
            let report = driver::run(&config, structure, &ids, &lookups)?;

            let mut out = io::stdout().lock();
            report.write_to(&mut out, &config)?;
            out.flush()?;
        }
        Command::Generate { size, dir, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            Dataset::generate(&mut rng, size.id_count()).write_to_dir(dir, size)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    initialize_logger();
    let args = Args::parse();

    match execute(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
