use clap::Parser;
use word_ingest::config::{env, toml_config::TomlConfig};
use word_ingest::utils::logger;
use word_ingest::{
    CliConfig, Command, ConvexClient, EtlEngine, IngestSettings, LocalStorage, PageReader,
    SettingsLayer, WordIngestor,
};

fn resolve_settings(config: &CliConfig) -> word_ingest::Result<IngestSettings> {
    env::load_env(&config.env_file);

    let file_layer = match &config.config {
        Some(path) => {
            tracing::debug!("Reading config file {}", path.display());
            TomlConfig::from_file(path)?.into_layer()
        }
        None => SettingsLayer::default(),
    };

    IngestSettings::from_layers(&[
        config.overrides(),
        SettingsLayer::from_convex_url(env::convex_url_from_env()),
        file_layer,
    ])
}

async fn run(config: CliConfig) -> word_ingest::Result<()> {
    // 所有設定在送出任何請求前解析並驗證
    let settings = resolve_settings(&config)?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = ConvexClient::new(settings.convex_url.clone()).with_timeout(settings.timeout());

    match config.selected_command() {
        Command::Ingest => {
            tracing::info!(
                "Inserting {} into {} via {}",
                settings.words_file,
                client.deployment_url(),
                settings.mutation
            );
            let storage = LocalStorage::new(".");
            let ingestor = WordIngestor::new(storage, settings, client);
            let engine = EtlEngine::new_with_monitoring(ingestor, config.monitor);

            let summary = engine.run().await?;
            println!("✅ Inserted {} words", summary.submitted);
        }
        Command::Pages => match PageReader::new(client).page_count().await? {
            Some(count) => println!("{}", count),
            None => println!("Pages have not been computed yet"),
        },
        Command::Page { index } => {
            for stored in PageReader::new(client).page_of_words(index).await? {
                println!("{}", stored.word);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
