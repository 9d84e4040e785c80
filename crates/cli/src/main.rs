use std::io::Write;

use clap::Parser;

use primecity_observability::LogFormat;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    if cli.json_logs {
        primecity_observability::init();
    } else {
        primecity_observability::tracing::init(LogFormat::Pretty);
    }

    let mut stdout = std::io::stdout().lock();
    let code = commands::run(&cli, &mut stdout)?;
    stdout.flush()?;
    drop(stdout);

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
