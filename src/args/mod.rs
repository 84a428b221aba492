pub mod database;
pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use clap::Parser;

/// Parse, validate, and flatten the CLI arguments, reading any startup
/// scripts into one combined batch.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let mut args = Args::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let combined_sql_script = args.db_startup_script.as_deref().map_or_else(
        String::new,
        |files| {
            files
                .split(';')
                .filter_map(|f| std::fs::read_to_string(f).ok())
                .collect::<Vec<_>>()
                .join("\n")
        },
    );

    CleanArgs {
        db_type: args.db_type,
        db_host: args.db_host,
        db_port: args.db_port,
        db_user: args.db_user,
        db_password: args.db_password,
        db_name: args.db_name,
        db_startup_script: args.db_startup_script,
        db_populate_json: args.db_populate_json,
        bind_addr: args.bind_addr,
        combined_sql_script,
    }
}
