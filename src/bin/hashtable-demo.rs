//! Populate a table, query it, and print what was found.

use chained_hashtable::HashTable;
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "hashtable-demo", about = "Exercise a chained hash table")]
struct Args {
    /// Number of buckets.
    #[arg(long, default_value_t = 50)]
    capacity: usize,

    /// Entry to insert, as `key=value`. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_pair)]
    sets: Vec<(String, i32)>,

    /// Key to look up. Repeatable.
    #[arg(long = "get", value_name = "KEY")]
    gets: Vec<String>,
}

fn parse_pair(s: &str) -> Result<(String, i32), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {:?}", s))?;
    let v = v
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid value for {:?}: {}", k, e))?;
    Ok((k.to_string(), v))
}

fn init_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();
    let _ = builder.try_init();
}

fn main() -> ExitCode {
    init_logger();
    let mut args = Args::parse();
    if args.sets.is_empty() {
        args.sets = vec![
            ("apple".to_string(), 100),
            ("banana".to_string(), 200),
            ("orange".to_string(), 300),
        ];
    }
    if args.gets.is_empty() {
        args.gets = ["apple", "banana", "grape"].map(String::from).to_vec();
    }

    let mut table = match HashTable::new(args.capacity) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for (k, v) in &args.sets {
        table.set(k, *v);
    }
    info!("inserted {} entries: {:?}", args.sets.len(), table);

    for k in &args.gets {
        match table.get(k) {
            Some(v) => println!("Key '{}' has value {}", k, v),
            None => println!("Key '{}' was not found", k),
        }
    }

    let released = table.destroy();
    info!("released {} entries", released);
    ExitCode::SUCCESS
}
