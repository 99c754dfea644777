use clap::Parser;
use cuelist::cli::Cli;

fn main() {
    // Failures are reported but the exit status stays zero.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version land on stdout, argument errors on stderr.
            let _ = e.print();
            return;
        }
    };

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
    }
}
