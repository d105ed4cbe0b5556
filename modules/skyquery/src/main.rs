use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemini_client::GeminiClient;
use skyquery::config::Config;
use skyquery::{FlightStore, QueryPipeline};

#[derive(Parser)]
#[command(name = "skyquery", about = "Natural-language flight status assistant")]
struct Args {
    /// The flight query. Prompted for on stdin when omitted.
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("skyquery=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    info!(model = config.gemini_model.as_str(), "SkyQuery starting");

    let model = GeminiClient::new(&config.gemini_api_key, &config.gemini_model);
    let pipeline = QueryPipeline::new(Arc::new(model), FlightStore::fixture());

    let query = match args.query {
        Some(query) => query,
        None => prompt_for_query()?,
    };

    match pipeline.answer(&query).await {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("An error has occurred: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn prompt_for_query() -> Result<String> {
    print!("Enter your flight query: ");
    io::stdout().flush()?;

    let mut query = String::new();
    io::stdin().lock().read_line(&mut query)?;
    Ok(query.trim().to_string())
}
