// src/main.rs

use env_logger::Env;
use polyarith::cli;
use polyarith::config::PolyConfig;

fn main() {
    let config = PolyConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration, using defaults: {}", e);
        PolyConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("POLYARITH_LOG", config.log_level.as_str())
        .write_style_or("POLYARITH_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cli::execute(&args, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            if let cli::CliError::Usage(_) = e {
                eprintln!("usage: {}", cli::USAGE);
            }
            std::process::exit(e.exit_code());
        }
    }
}
