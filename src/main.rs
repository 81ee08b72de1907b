use clap::Parser;
use owo_colors::OwoColorize;
use ruso::cli::{self, Args, Commands};
use ruso::config::AppConfig;
use ruso::interpreter::Interpreter;
use ruso::logging;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();

    if let Some(Commands::Completions { shell }) = &args.command {
        cli::generate_completions(*shell, &mut std::io::stdout());
        return;
    }

    let config = AppConfig::from_args(&args);
    logging::init_tracing(config.verbose);

    let Some(path) = args.script.as_deref() else {
        report(&config, "Error: No input file specified.");
        process::exit(1);
    };

    let file = match open_script(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not open script");
            report(&config, &format!("Error: Failed to open file '{}'.", path.display()));
            process::exit(1);
        }
    };

    debug!(path = %path.display(), "running script");
    let mut interpreter = Interpreter::stdio();
    if let Err(e) = interpreter.run(BufReader::new(file)) {
        error_message(&config, &format!("Error: {}", e));
    }
}

fn open_script(path: &Path) -> std::io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "is a directory",
        ));
    }
    Ok(file)
}

/// Front-end failures go to stdout.
fn report(config: &AppConfig, message: &str) {
    if config.color_enabled {
        println!("{}", message.red().bold());
    } else {
        println!("{}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
