//! Binary entry point that glues the SQLite-backed course store to the three
//! command modes: provision the table, seed the catalog, or run the
//! interactive search loop.
//!
//! Mode selection is a membership test over the raw argument list rather
//! than strict positional parsing, and exactly one branch runs per
//! invocation. The create-tables and insert-data branches propagate store
//! failures through the `Result` return; the search branch swallows store
//! failures internally and only ever reports them as "No results found".
use std::env;
use std::io;

use course_catalog::{run_search_loop, seed_catalog, CourseStore, SqliteStore};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--create-tables") {
        let store = SqliteStore::open()?;
        store.create_table()?;
    } else if args.iter().any(|arg| arg == "--insert-data") {
        let store = SqliteStore::open()?;
        seed_catalog(&store)?;
    } else {
        println!("--No command line option chosen, search function automatically selected--");
        let store = SqliteStore::open()?;
        let stdin = io::stdin();
        run_search_loop(&store, &mut stdin.lock(), &mut io::stdout())?;
    }

    Ok(())
}
