use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use traffic_desk::{Desk, DeskConfig, Shell};

fn init_tracing(config: &DeskConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so command output stays clean on stdout
    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() -> ExitCode {
    let config = match DeskConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let mut desk = if config.seed_demo_data {
        match Desk::with_demo_data() {
            Ok(desk) => desk,
            Err(e) => {
                error!(error = %e, "failed to seed demo data");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Desk::new()
    };
    info!(format = ?config.output_format, "traffic desk ready");

    println!("🚦 Traffic desk ready. Type HELP for commands, EXIT to quit.");
    let mut shell = Shell::new(&mut desk).with_recent_limit(config.recent_limit);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if let Err(e) = stdout.flush() {
            error!(error = %e, "failed to flush output");
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "failed to read input");
                return ExitCode::FAILURE;
            }
        }

        let input = line.trim_end_matches(&['\n', '\r'][..]);
        if input.trim().is_empty() {
            continue;
        }
        if matches!(input.trim().to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        match shell.execute(input, Some(config.output_format)) {
            Ok(output) => println!("{}", output),
            Err(e) => println!("❌ {}", e),
        }
    }

    ExitCode::SUCCESS
}
