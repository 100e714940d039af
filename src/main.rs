use listing_browser::fetch::{FetchTask, HttpListingSource, DEFAULT_ENDPOINT};
use listing_browser::pipeline::{Action, SortOption, ViewMode, ViewState};
use listing_browser::render;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Browser");
    info!("==================");
    info!("");

    let endpoint =
        std::env::var("LISTINGS_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let source = HttpListingSource::with_endpoint(&endpoint)?;

    info!("Loading property collection from {}...", endpoint);
    let task = FetchTask::spawn(source);
    let properties = task.join().await?;

    info!("✅ Loaded {} properties", properties.len());
    info!("");

    let mut state = ViewState::new(properties);

    // Filter and sort settings come in as raw text, the same way the
    // filter panel would hand them over.
    if let Ok(raw) = std::env::var("MIN_PRICE") {
        state = state.apply(Action::SetMinPrice(raw));
    }
    if let Ok(raw) = std::env::var("MAX_PRICE") {
        state = state.apply(Action::SetMaxPrice(raw));
    }
    if let Ok(raw) = std::env::var("SORT") {
        if let Some(option) = SortOption::from_label(&raw) {
            state = state.apply(Action::SetSort(option));
        }
    }
    if let Ok(raw) = std::env::var("VIEW") {
        if raw == "list" {
            state = state.apply(Action::SetViewMode(ViewMode::List));
        }
    }

    let visible = state.visible();
    info!(
        "Showing {} of {} properties (page {} of {})",
        visible.len(),
        state.filtered_count(),
        state.page.current(),
        state.total_pages()
    );

    println!("{}", render::render_page(&visible, state.mode));

    Ok(())
}
