//! Headless CV generation: reads the job description from a file, loads the
//! saved user profile and section configuration, asks the model for
//! narrative content, and writes the merged document.
//!
//! Usage: `smartcv <job-description.txt> <output.docx> [template]`
//! where `template` is `modern` (default) or `professional`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartcv::generation::pipeline::GenerationRequest;
use smartcv::llm_client::{ChatClient, ChatCompleter};
use smartcv::sections::sync_section_order;
use smartcv::{spawn_generation, validate_request, write_document, Config, SettingsStore, Template};

const APP_NAME: &str = "SmartCVAssistant";

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SmartCV v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("usage: smartcv <job-description.txt> <output.docx> [modern|professional]");
        std::process::exit(2);
    }
    let job_description_path = PathBuf::from(&args[0]);
    let output_path = PathBuf::from(&args[1]);

    let store = SettingsStore::open(APP_NAME)?;
    info!("Settings directory: {}", store.dir().display());

    let user = store.load_user_record();
    let sections = store.load_registry();
    let order = sync_section_order(&store.load_order(), &sections);
    store.save_order(&order)?;

    let template = match args.get(2) {
        Some(name) => name
            .parse::<Template>()
            .map_err(|e| anyhow!("{e} (expected 'modern' or 'professional')"))?,
        None => store.load_template(),
    };

    let job_description = std::fs::read_to_string(&job_description_path)?;

    validate_request(&user.name, &job_description, &config.api_key, &config.model)?;

    let client: Arc<dyn ChatCompleter> = Arc::new(ChatClient::new(&config)?);
    info!(
        "Requesting content from {:?} (model: {})",
        config.provider, config.model
    );

    // The model call runs on a worker task; the result comes back through a
    // one-shot channel, mirroring how an interactive shell would poll it.
    let receiver = spawn_generation(
        client,
        GenerationRequest {
            job_description,
            excluded_terms: config.excluded_terms.clone(),
            sections: sections.clone(),
        },
    );
    let generated = receiver
        .await
        .map_err(|_| anyhow!("generation worker dropped before sending a result"))??;

    write_document(&output_path, &user, &generated, &sections, &order, template)?;
    info!("CV written to {}", output_path.display());

    Ok(())
}
