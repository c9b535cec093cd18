use anyhow::Context;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use verse_search::{
    cli::{Cli, Commands},
    config::Config,
    export::write_export,
    loader::load_corpus,
    logging,
    server::VerseServer,
    tools::{
        NOTHING_TO_EXPORT_MESSAGE, ReadChapterRequest, SearchRequest, export_text,
        handle_list_books, handle_read_chapter, handle_search, run_search,
    },
    worker::{CorpusState, spawn_load},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());
    let mut config = match &config_path {
        Some(path) => Config::load_file(path).context("Failed to load configuration")?,
        None => Config::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // Logs go to stderr so they never interleave with MCP traffic on stdout
    logging::init(config.log_format);
    match &config_path {
        Some(path) => tracing::debug!("Loaded config from {}", path.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Search {
            query,
            book,
            whole_word,
            limit,
        } => {
            let state = loaded_state(config).await;
            let request = SearchRequest {
                query,
                book,
                whole_word: whole_word.then_some(true),
                limit,
            };
            println!("{}", handle_search(&state, &request));
        }
        Commands::Chapter {
            book,
            chapter,
            verse,
            query,
        } => {
            let state = loaded_state(config).await;
            let request = ReadChapterRequest {
                book,
                chapter,
                verse,
                query,
            };
            println!("{}", handle_read_chapter(&state, request));
        }
        Commands::Books => {
            let state = loaded_state(config).await;
            print!("{}", handle_list_books(&state));
        }
        Commands::Export {
            query,
            book,
            whole_word,
            output,
        } => {
            let state = loaded_state(config).await;
            let request = SearchRequest {
                query,
                book,
                whole_word: whole_word.then_some(true),
                limit: None,
            };
            let corpus = state.corpus();
            let outcome = run_search(corpus.as_deref(), &request, &state.config().search);
            match export_text(&outcome) {
                Some(text) => {
                    write_export(&output, &text).await?;
                    println!("{} Exported to {}", outcome.status(), output.display());
                }
                None => println!("{}", NOTHING_TO_EXPORT_MESSAGE),
            }
        }
    }

    Ok(())
}

async fn loaded_state(config: Config) -> CorpusState {
    let corpus = load_corpus(&config).await;
    CorpusState::with_corpus(config, corpus)
}

async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting verse-search MCP server");

    // Answer tool calls right away; handlers report "loading" until the corpus is in
    let state = Arc::new(CorpusState::new(config));
    spawn_load(state.clone());

    let service = VerseServer::new(state)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
