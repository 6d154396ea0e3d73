use sbomgen::application::dispatcher::ModeDispatcher;
use sbomgen::cli::Args;
use sbomgen::shared::error::ExitCode;
use sbomgen::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let current_dir = std::env::current_dir()?;
    let config_file = ModeDispatcher::load_config_file(&args, &current_dir)?;
    let config = ModeDispatcher::resolve(&args, config_file)?;

    ModeDispatcher::dispatch(&config)?;
    Ok(())
}
