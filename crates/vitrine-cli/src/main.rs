#![forbid(unsafe_code)]

//! Vitrine CLI
//!
//! Scheduled profile-README refresher. One invocation fetches prices and
//! article summaries, renders the README template, and overwrites the
//! output file; the hosting platform commits the result downstream.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vitrine_cli::workflow::{RefreshInput, RefreshWorkflow};
use vitrine_core::config::{parse_currencies, PromptTemplate};
use vitrine_core::Error;
use vitrine_llm::{GeminiProvider, LlmProvider, RetryProvider, Summarizer};
use vitrine_render::update_price_cells;
use vitrine_sources::{wikipedia, CmcPriceSource, CromScpSource, PriceSource};

/// Vitrine - scheduled profile README refresher
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version, about = "Fetch fresh content and re-render the profile README", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch articles and quotes, render the template, overwrite the output
    Refresh(RefreshArgs),
    /// Update only the price cells of an existing README in place
    Prices(PricesArgs),
}

#[derive(Args, Debug)]
struct RefreshArgs {
    /// Gemini API key
    #[arg(long, env = "VITRINE_GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Gemini model used for summarization
    #[arg(long, short = 'm', env = "VITRINE_MODEL", default_value = vitrine_llm::gemini::DEFAULT_MODEL)]
    model: String,

    /// User prompt for SCP summaries; must contain `{url}`
    #[arg(long, env = "VITRINE_SCP_PROMPT")]
    scp_prompt: String,

    /// User prompt for Wikipedia summaries; must contain `{url}`
    #[arg(long, env = "VITRINE_WIKIPEDIA_PROMPT")]
    wikipedia_prompt: String,

    /// Optional system prompt for SCP summaries
    #[arg(long, env = "VITRINE_SCP_SYSTEM_PROMPT")]
    scp_system_prompt: Option<String>,

    /// Optional system prompt for Wikipedia summaries
    #[arg(long, env = "VITRINE_WIKIPEDIA_SYSTEM_PROMPT")]
    wikipedia_system_prompt: Option<String>,

    /// Comma-separated currency symbols for the price table
    #[arg(long, env = "VITRINE_CURRENCIES")]
    currencies: Option<String>,

    /// CoinMarketCap API key; required when currencies are configured
    #[arg(long, env = "VITRINE_CMC_API_KEY", hide_env_values = true)]
    cmc_api_key: Option<String>,

    /// Maximum retries for transient API failures
    #[arg(long, short = 'r', default_value_t = 3)]
    max_retries: usize,

    /// Path to the README template
    #[arg(long, short = 't', default_value = "./README_TEMPLATE.md")]
    template: PathBuf,

    /// Path to the line-separated Wikipedia URL list
    #[arg(long, short = 'w', default_value = "./wikipedia_urls.txt")]
    wikipedia_urls: PathBuf,

    /// Path of the rendered output file
    #[arg(long, short = 'o', default_value = "./README.md")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct PricesArgs {
    /// CoinMarketCap API key
    #[arg(long, env = "VITRINE_CMC_API_KEY", hide_env_values = true)]
    cmc_api_key: String,

    /// Comma-separated currency symbols to update
    #[arg(long, env = "VITRINE_CURRENCIES")]
    currencies: String,

    /// README whose price cells are updated in place
    #[arg(long, default_value = "./README.md")]
    readme: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vitrine=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Refresh(args) => refresh(args).await,
        Command::Prices(args) => prices(args).await,
    }
}

async fn refresh(args: RefreshArgs) -> Result<()> {
    let scp_prompt = PromptTemplate::new(args.scp_prompt)?;
    let wikipedia_prompt = PromptTemplate::new(args.wikipedia_prompt)?;

    let currencies = match args.currencies.as_deref() {
        Some(raw) => parse_currencies(raw)?,
        None => Vec::new(),
    };
    if !currencies.is_empty() && args.cmc_api_key.is_none() {
        return Err(Error::config(
            "VITRINE_CMC_API_KEY is required when currencies are configured",
        )
        .into());
    }

    let gemini = GeminiProvider::new(args.gemini_api_key, args.model);
    let provider: Arc<dyn LlmProvider> =
        Arc::new(RetryProvider::new(Arc::new(gemini)).with_max_retries(args.max_retries));
    let summarizer = Summarizer::new(provider).with_max_retries(args.max_retries as u32);

    let scp_source = Arc::new(CromScpSource::new().with_max_retries(args.max_retries));
    let price_source: Arc<dyn PriceSource> = Arc::new(CmcPriceSource::new(
        args.cmc_api_key.unwrap_or_default(),
    ));

    let template = std::fs::read_to_string(&args.template)?;
    let wikipedia_url = wikipedia::pick_random_url(&args.wikipedia_urls)?;

    let mut input = RefreshInput::new(currencies, scp_prompt, wikipedia_prompt);
    if let Some(prompt) = args.scp_system_prompt {
        input = input.with_scp_system_prompt(prompt);
    }
    if let Some(prompt) = args.wikipedia_system_prompt {
        input = input.with_wikipedia_system_prompt(prompt);
    }

    let workflow = RefreshWorkflow::new(scp_source, price_source, summarizer);

    match workflow.run(&input, &template, wikipedia_url).await {
        Ok(rendered) => {
            // The single side effect of a successful run.
            std::fs::write(&args.output, &rendered)?;
            tracing::info!(
                output = %args.output.display(),
                bytes = rendered.len(),
                "README refreshed"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Refresh failed, output file left untouched");
            Err(e.into())
        }
    }
}

async fn prices(args: PricesArgs) -> Result<()> {
    let currencies = parse_currencies(&args.currencies)?;
    let source = CmcPriceSource::new(args.cmc_api_key);

    let readme = std::fs::read_to_string(&args.readme)?;

    let mut quotes = Vec::with_capacity(currencies.len());
    for symbol in &currencies {
        let quote = source.quote(symbol).await?;
        quotes.push((symbol.clone(), quote.formatted()));
    }

    let updated = update_price_cells(&readme, &quotes)?;
    std::fs::write(&args.readme, &updated)?;

    tracing::info!(
        readme = %args.readme.display(),
        symbols = currencies.len(),
        "Price cells updated"
    );
    Ok(())
}
