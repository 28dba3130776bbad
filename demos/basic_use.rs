use image_inspector::MetadataViewer;
use std::path::PathBuf;

/// Inspect one photo and print the result as text and as JSON.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("assets/sunset.jpg"), PathBuf::from);
    let viewer = MetadataViewer::builder().build()?;
    let metadata = viewer.open_and_process(&path).await?;
    println!("{metadata}");
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
