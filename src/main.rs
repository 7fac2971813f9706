use std::process::ExitCode;

use clap::Parser;

use haulplan::cli::{self, command::Cli, output};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(e);
            ExitCode::from(2)
        }
    }
}
