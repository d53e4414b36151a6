use society_engine::args::{self, OutputFormat, Task};
use society_engine::input::{load_history, load_roster};
use society_engine::standings::compute_order_of_merit;
use society_engine::tee_sheet::build_tee_sheet;
use society_engine::view::{render_order_of_merit, render_tee_sheet};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::args_checks();

    let output = match args.task {
        Task::TeeSheet { input, options } => {
            let snapshot = load_roster(&input).await?;
            let sheet = build_tee_sheet(&snapshot, &options)?;
            tracing::info!(
                players = snapshot.players.len(),
                groups = sheet.group_count(),
                "built tee sheet"
            );
            match args.format {
                OutputFormat::Json => serde_json::to_string_pretty(&sheet)?,
                OutputFormat::Text => render_tee_sheet(&sheet),
            }
        }
        Task::Standings { input } => {
            let history = load_history(&input).await?;
            let standings = compute_order_of_merit(&history);
            tracing::info!(
                events = history.len(),
                members = standings.len(),
                "computed standings"
            );
            match args.format {
                OutputFormat::Json => serde_json::to_string_pretty(&standings)?,
                OutputFormat::Text => render_order_of_merit(&standings),
            }
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
