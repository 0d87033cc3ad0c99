use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use uuid::Uuid;

use vitalscope::assessment::{self, AssessmentError};
use vitalscope::config::{Config, ConfigError};
use vitalscope::dashboard::{Command, Dashboard, Outcome};
use vitalscope::navigator::{LayerNavigator, Session, TracingObserver};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    // Logs go to stderr; stdout carries the rendered dashboard.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dashboard failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let period = config.tick_period()?;
    let record = match &config.assessment {
        Some(path) => assessment::load_assessment(path)?,
        None => assessment::demo_assessment(),
    };

    let session_id = Uuid::new_v4();
    let navigator = LayerNavigator::new(session_id, Arc::new(TracingObserver::new(session_id)));
    let session = match period {
        Some(period) => Session::mount(navigator, period),
        None => Session::detached(navigator),
    };
    info!(%session_id, assessment_id = %record.id, ticking = session.is_ticking(), "session started");

    let mut dashboard = Dashboard::new(record, session);
    println!("{}", dashboard.render_current());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>().and_then(|c| dashboard.execute(c)) {
            Ok(Outcome::Output(text)) => println!("{text}"),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                warn!(error = %e, "command rejected");
                println!("error: {e}");
            }
        }
    }

    let last = dashboard.close();
    info!(
        %session_id,
        elapsed_secs = last.elapsed_secs,
        completed = last.completed_layers.len(),
        achievements = last.achievements.len(),
        "session closed"
    );
    Ok(())
}
