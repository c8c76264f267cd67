//! Generates the app icon set with Gemini.
//!
//! Configuration comes from the environment:
//! `GEMINI_API_KEY` (or `~/.config/mojimix/api_key`), `GENICON_OUTPUT_DIR`,
//! `GENICON_MODEL`, `GENICON_MAX_ATTEMPTS`, `GENICON_MACOS_ICON` and
//! `RUST_LOG`.

use genicon::{
    CredentialResolver, GeminiProvider, GenerationRequest, IconPipeline, Settings,
    DEFAULT_ICON_PROMPT,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("genicon=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env()?;
    let api_key = CredentialResolver::default_chain().resolve()?;
    let provider = GeminiProvider::builder()
        .api_key(api_key)
        .model(settings.model)
        .build()?;

    println!("Generating app icon with Gemini ({})...", settings.model.as_str());

    let written = genicon::generate_icon_set(
        &provider,
        &GenerationRequest::new(DEFAULT_ICON_PROMPT),
        &settings.retry,
        &IconPipeline::new(settings.pipeline.clone()),
        &settings.output_dir,
    )
    .await?;

    for path in &written {
        println!("  Created {}", path.display());
    }
    println!(
        "\nDone! Icons saved to {}/",
        settings.output_dir.display()
    );

    Ok(())
}
