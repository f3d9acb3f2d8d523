use gymfloor::{
    default_config_path, full_view, init_logging, Config, EditingSession, JsonDirectoryStore,
    LayoutLibrary, BUILD_DATE, VERSION,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Headless entry point: load the configuration and the layout collection,
/// then print each layout with its full-view window.
///
/// Usage: `gymfloor [config.toml|config.json]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("gymfloor {} (built {})", VERSION, BUILD_DATE);

    let config_path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => default_config_path()?,
    };
    let config = Config::load_or_default(&config_path);
    tracing::debug!("Layouts directory: {}", config.storage.layouts_dir.display());

    let store = JsonDirectoryStore::new(config.storage.layouts_dir.clone());
    let session = EditingSession::open(LayoutLibrary::new(Arc::new(store)), &config).await;

    for layout in session.layouts() {
        let window = full_view(layout, &config.viewport);
        let marker = if layout.id == session.active_id() { "*" } else { " " };
        println!(
            "{} {:<24} {:>3} zones {:>2} annexes  room {}×{}  view {}",
            marker,
            layout.name,
            layout.zones.len(),
            layout.annexes.len(),
            layout.dimensions.width,
            layout.dimensions.height,
            window
        );
    }

    Ok(())
}
