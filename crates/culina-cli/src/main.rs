use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;

use culina_cli::{
    cli::{Cli, Commands, SavedCommands},
    commands,
    config::CliConfig,
    session::SearchSession,
};
use culina_store::{JsonFileStorage, RecipeBook};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Logs go to stderr so recipe output stays pipeable.
    let level: LevelFilter = match (cli.log_level, cli.verbose) {
        (Some(level), _) => level.into(),
        (None, true) => LevelFilter::DEBUG,
        (None, false) => LevelFilter::WARN,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load(cli.config.clone())?;
    let storage = Arc::new(JsonFileStorage::new(config.data_dir(cli.data_dir.clone())));
    let mut book = RecipeBook::load(storage).await?;

    match cli.command {
        Commands::Recipe { ref dish, save } => {
            let provider = culina_llm::create_provider(config.gemini_config())?;
            let mut session = SearchSession::new(provider);
            commands::recipe::execute(&mut session, &mut book, dish, save, cli.format).await
        }
        Commands::Ingredients {
            ref ingredients,
            full,
        } => {
            let provider = culina_llm::create_provider(config.gemini_config())?;
            let mut session = SearchSession::new(provider);
            commands::suggest::execute(
                &mut session,
                &mut book,
                commands::suggest::SuggestMode::Ingredients,
                &ingredients.join(", "),
                full,
                cli.format,
            )
            .await
        }
        Commands::Mood { ref mood, full } => {
            let provider = culina_llm::create_provider(config.gemini_config())?;
            let mut session = SearchSession::new(provider);
            commands::suggest::execute(
                &mut session,
                &mut book,
                commands::suggest::SuggestMode::Mood,
                mood,
                full,
                cli.format,
            )
            .await
        }
        Commands::Saved { command } => match command {
            SavedCommands::List => {
                commands::saved::list(&book);
                Ok(())
            }
            SavedCommands::View { ref id } => commands::saved::view(&book, id, cli.format),
            SavedCommands::Delete { ref id } => commands::saved::delete(&mut book, id).await,
        },
    }
}
