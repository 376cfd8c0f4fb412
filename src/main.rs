use clap::Parser;
use ghwhoami::gh::SystemRunner;
use ghwhoami::prompt::StdinConfirm;
use ghwhoami::{Config, Outcome};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghwhoami")]
#[command(about = "Show which GitHub account gh is logged in as and list its repositories", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = Config::default();
    let mut stdout = io::stdout();

    match ghwhoami::run(&config, &SystemRunner, &StdinConfirm, &mut stdout) {
        Ok(Outcome::Listed { login, summary }) => {
            debug!(%login, total = summary.total, "Done");
        }
        Ok(Outcome::Declined) => std::process::exit(0),
        Err(e) => {
            let _ = e.report(&mut stdout);
            std::process::exit(e.exit_code());
        }
    }
}
