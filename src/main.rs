use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use arbor::collection::TreeCollection;
use arbor::csv;
use arbor::report;

#[derive(Debug, Parser)]
#[clap(version, about = "Interactive species queries over the NYC street tree census")]
struct Opts {
    /// Path to the street tree census CSV file
    file: PathBuf,

    /// Log skipped lines while loading the dataset
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let opts = Opts::parse();

    let level = if opts.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simple_logger::SimpleLogger::new().with_level(level).init().unwrap();

    let file = match File::open(&opts.file) {
        Ok(file) => file,
        Err(_) => {
            eprintln!(
                "Error: the file '{}' does not exist or cannot be opened.",
                opts.file.display()
            );
            process::exit(1);
        }
    };

    let mut collection = TreeCollection::new();
    let stats = match csv::read_census(BufReader::new(file), &mut collection) {
        Ok(stats) => stats,
        Err(error) => {
            eprintln!("Error: failed reading '{}': {}", opts.file.display(), error);
            process::exit(1);
        }
    };
    info!(
        "loaded {} of {} lines ({} skipped, {} duplicates, {} integrity violations)",
        stats.loaded, stats.lines, stats.skipped, stats.duplicates, stats.integrity_errors
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nEnter a tree species to learn more about it (\"quit\" to stop): ");
        io::stdout().flush().unwrap();

        let choice = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        if choice.eq_ignore_ascii_case("quit") {
            break;
        }

        let matches = collection.matching_species(&choice);
        if matches.is_empty() {
            println!("\nThere are no records of '{}' on NYC streets.", choice);
        } else {
            let stdout = io::stdout();
            report::write_report(&mut stdout.lock(), &collection, &choice, &matches).unwrap();
        }
    }
    println!("\nEnd of Program.");
}
