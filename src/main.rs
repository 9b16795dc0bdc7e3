use clap::Parser;

use image_to_ascii::cli::{self, Args, CliError, Command};

fn main() {
    // Logs go to stderr so stdout carries only the art. RUST_LOG overrides.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = match args.command {
        Some(Command::Config { ref action }) => cli::handle_config_action(action.clone()),
        None => run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Drive the conversion on a single-threaded runtime; the image load is the
/// only await point.
fn run(args: &Args) -> Result<(), CliError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    rt.block_on(cli::run_convert(args))
}
