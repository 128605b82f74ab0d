use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use boatwatch::bus::MessageBus;
use boatwatch::config::Config;
use boatwatch::gateway::FixtureGateway;
use boatwatch::logging::init_tracing;
use boatwatch::model::{BoatTypeFilter, DraftEdit, RecordId, SimilarBy};
use boatwatch::platform::{FixedPosition, NavigationLog, ToastLog};
use boatwatch::ui::context::ViewContext;
use boatwatch::ui::controller::BoatViewController;

/// Mount the boat views against a fixture data set and print their state.
#[derive(Debug, Parser)]
#[command(name = "boatwatch", version)]
struct Cli {
    /// Config file (default: ~/.config/boatwatch/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON data set, overrides `data.fixture` from the config
    #[arg(long)]
    data: Option<PathBuf>,

    /// Boat type filter for search results and the map ("" for all)
    #[arg(long)]
    boat_type: Option<String>,

    /// Boat record shown in the reviews and similar boats views
    #[arg(long)]
    boat: Option<String>,

    /// Similarity criterion, overrides `views.similar_by`
    #[arg(long)]
    similar_by: Option<String>,

    /// Select a row in the search results and propagate it
    #[arg(long)]
    select: Option<String>,

    /// JSON file with a list of draft edits to save
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let data_path = cli
        .data
        .clone()
        .or_else(|| config.data.fixture.clone())
        .context("no data set given: pass --data or set data.fixture in the config")?;
    let gateway = Arc::new(FixtureGateway::load(&data_path)?);

    let toasts = Arc::new(ToastLog::new());
    let ctx = ViewContext::new(
        gateway,
        Arc::new(MessageBus::new(config.bus.capacity)),
        toasts.clone(),
        Arc::new(NavigationLog::new()),
        Arc::new(FixedPosition::new(config.location.position())),
    );

    let mut settings = config.views.settings();
    if let Some(criterion) = cli.similar_by.as_deref() {
        settings.similar_by = Some(SimilarBy::new(criterion));
    }

    let mut controller = BoatViewController::new(ctx, settings);
    controller.mount().await;

    if let Some(boat_type) = cli.boat_type.as_deref() {
        controller
            .set_boat_type(BoatTypeFilter::from_input(boat_type))
            .await;
    }
    if let Some(boat) = cli.boat.as_deref() {
        controller.set_record(Some(RecordId::new(boat))).await;
    }
    if let Some(selected) = cli.select.as_deref() {
        controller.search().select_boat(RecordId::new(selected));
        controller.sync_selection().await;
    }
    if let Some(path) = &cli.save {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read drafts from {}", path.display()))?;
        let drafts: Vec<DraftEdit> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse drafts in {}", path.display()))?;
        controller.search().handle_save(drafts).await;
    }

    if controller.poll_lifecycle() {
        tracing::warn!(
            components = ?controller.loading_components(),
            "Some views are still loading"
        );
    }

    let output = serde_json::json!({
        "views": controller.snapshot(),
        "toasts": toasts.toasts(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    controller.unmount();
    Ok(())
}
