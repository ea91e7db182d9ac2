use sqlhelper::core::db::StatementType;
use sqlhelper::{config, SqlHelper};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: sqlhelper <config.toml> <sql>");
        eprintln!("SELECT, WITH, PRAGMA, EXPLAIN and VALUES print JSON rows; other statements print the affected count.");
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &str, sql: &str) -> sqlhelper::Result<String> {
    let config = config::load_config(config_path)?;
    info!("Connecting to {}", config.connection_url());
    let helper = SqlHelper::new(config)?;

    if StatementType::returns_rows(sql) {
        helper.exec_query(sql)
    } else {
        helper.exec_update(sql).map(|affected| affected.to_string())
    }
}
