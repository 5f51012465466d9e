use std::process::ExitCode;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nearby_stops::pipeline::LookupPipeline;
use nearby_stops::settings::Settings;

/// Exit status when settings are missing or invalid.
const EXIT_CONFIG: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the prompt and stop names
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Fail before prompting if credentials are missing
    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("Set TFL_APP_ID and TFL_APP_KEY (environment or nearby-stops.yml).");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let pipeline = match LookupPipeline::new(&settings) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("Failed to create HTTP clients: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = tokio::io::stdout();
    match pipeline
        .run(BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
    {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
