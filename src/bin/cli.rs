//! RosterDB CLI
//!
//! Runs the demonstration scenario or a line-protocol REPL over stdin.

use std::io::{self, BufWriter};

use clap::{Parser, Subcommand};
use rosterdb::protocol::{read_command, write_response, Response};
use rosterdb::{Config, IndexedStore, Record, StoreError};
use tracing_subscriber::{fmt, EnvFilter};

/// RosterDB CLI
#[derive(Parser, Debug)]
#[command(name = "rosterdb-cli")]
#[command(about = "In-memory record store with secondary indexes")]
#[command(version)]
struct Args {
    /// Number of key slots (valid keys are 0..capacity)
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Treat name prefixes case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Populate a sample roster and run every kind of query
    Demo,

    /// Read protocol commands from stdin, one per line
    Repl,
}

fn main() {
    // Initialize tracing/logging; keep stdout for results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rosterdb=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("RosterDB CLI v{}", rosterdb::VERSION);

    let config = Config::builder()
        .capacity(args.capacity)
        .fold_name_case(!args.case_sensitive)
        .build();

    let store = match IndexedStore::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Commands::Demo => {
            run_demo(store);
            Ok(())
        }
        Commands::Repl => run_repl(store),
    };

    if let Err(e) = result {
        tracing::error!("CLI error: {}", e);
        std::process::exit(1);
    }
}

/// Read commands until end of input, answering each one
fn run_repl(mut store: IndexedStore) -> rosterdb::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = BufWriter::new(io::stdout().lock());

    loop {
        let response = match read_command(&mut reader) {
            Ok(Some(command)) => store.execute(command),
            Ok(None) => break,
            Err(StoreError::Io(e)) => return Err(e.into()),
            Err(e) => Response::error(e.to_string()),
        };
        write_response(&mut writer, &response)?;
    }
    Ok(())
}

fn run_demo(mut store: IndexedStore) {
    println!("--- Populating ---");
    let roster = [
        Record::new(5, "Eve", "Engineering", 150000.0),
        Record::new(2, "Bob", "Marketing", 95000.0),
        Record::new(3, "Charlie", "Engineering", 90000.0),
        Record::new(1, "Alice", "Engineering", 120000.0),
        Record::new(4, "David", "HR", 110000.0),
        Record::new(6, "Alicia", "Sales", 85000.0),
    ];
    for record in roster {
        store.put(record.id, record);
    }
    println!("{} records stored", store.len());

    println!("\n--- Core operations ---");
    print_lookup(&store, 3);
    println!("Updating Bob (2)...");
    store.put(2, Record::new(2, "Bob", "Marketing", 105000.0));
    print_lookup(&store, 2);
    println!("Deleting Alicia (6)...");
    store.delete(6);
    print_lookup(&store, 6);

    println!("\n--- Sorting ---");
    let mut all: Vec<Record> = store.get_all().into_iter().cloned().collect();
    println!("By id:");
    all.sort_by(Record::cmp_by_id);
    print_records(&all);
    println!("By name:");
    all.sort_by(|a, b| a.name.cmp(&b.name));
    print_records(&all);
    println!("By value, descending:");
    all.sort_by(|a, b| b.value.total_cmp(&a.value));
    print_records(&all);

    println!("\n--- Index queries ---");
    println!("Category 'Engineering':");
    print_records(store.find_by_category("Engineering"));
    println!("Value range [100000, 130000]:");
    print_records(store.find_by_value_range(100000.0, 130000.0));

    store.put(7, Record::new(7, "Allison", "Marketing", 115000.0));
    println!("Name prefix 'ali':");
    print_records(store.find_by_name_prefix("ali"));

    // Bob (105000) + Charlie (90000) + David (110000)
    println!("Value sum for keys [2, 4]: {:.0}", store.value_sum_for_range(2, 4));
}

fn print_lookup(store: &IndexedStore, key: rosterdb::Key) {
    match store.get(key) {
        Some(record) => println!("get({}) = {}", key, record),
        None => println!("get({}) = <none>", key),
    }
}

fn print_records<'a>(records: impl IntoIterator<Item = &'a Record>) {
    for record in records {
        println!("  {}", record);
    }
}
