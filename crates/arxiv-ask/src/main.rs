//! arxiv-ask - Entry Point
//!
//! Searches the ask-about-papers service, normalizes offline responses and
//! chats about a single paper.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_ask::config::{BASE_URL_ENV, Config, api};
use arxiv_ask::formatters;
use arxiv_ask::models::{Paper, ResponseFormat, SortBy, SortOrder};
use arxiv_ask::{AskClient, ChatSession, PaperSearch, ResultView, group_by_year, normalize_response};

#[derive(Parser, Debug)]
#[command(name = "arxiv-ask")]
#[command(about = "Search papers through an ask-about-papers service")]
#[command(version)]
struct Cli {
    /// Base URL of the service
    #[arg(long, env = BASE_URL_ENV, default_value = api::DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for papers and print the normalized results
    Search {
        /// Search question
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Normalize a saved service response (file or stdin)
    Normalize {
        /// JSON file to read; stdin when omitted
        input: Option<PathBuf>,

        #[command(flatten)]
        view: ViewArgs,
    },
    /// Ask questions about one paper, one question per stdin line
    Chat {
        /// Paper identifier (e.g. 2006.08233v3)
        #[arg(long)]
        paper_id: String,

        /// Title shown in the greeting
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ResponseFormat::Markdown)]
    format: ResponseFormat,

    /// Earliest publication year (inclusive)
    #[arg(long)]
    year_from: Option<i32>,

    /// Latest publication year (inclusive)
    #[arg(long)]
    year_to: Option<i32>,

    /// Sort key
    #[arg(long, value_enum, default_value_t = SortBy::Relevance)]
    sort: SortBy,

    /// Sort direction for date sorting
    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    order: SortOrder,

    /// Group results by publication year
    #[arg(long)]
    group: bool,
}

impl ViewArgs {
    fn result_view(&self) -> ResultView {
        ResultView {
            year_from: self.year_from,
            year_to: self.year_to,
            sort_by: self.sort,
            sort_order: self.order,
        }
    }

    fn render(&self, papers: &[Paper]) -> anyhow::Result<String> {
        let papers = self.result_view().apply(papers);

        if self.format.is_json() {
            let value = if self.group {
                formatters::groups_json(&group_by_year(&papers))
            } else {
                formatters::papers_json(&papers)
            };
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(if self.group {
            formatters::format_groups_markdown(&group_by_year(&papers))
        } else {
            formatters::format_papers_markdown(&papers)
        })
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

async fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await.context("reading stdin")?;
            Ok(buf)
        }
    }
}

async fn run_chat(client: AskClient, paper_id: String, title: Option<String>) -> anyhow::Result<()> {
    let title = title.unwrap_or_else(|| format!("arXiv:{paper_id}"));
    let mut session = ChatSession::new(Arc::new(client));
    session.select_paper(Paper::bare(title, paper_id));

    if let Some(greeting) = session.history().last() {
        println!("{}", greeting.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = session.send(&line).await {
            println!("{}\n", reply.text);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %cli.base_url,
        "Starting arxiv-ask"
    );

    match cli.command {
        Command::Search { query, view } => {
            let client = AskClient::new(Config::new(cli.base_url))?;
            let search = PaperSearch::new(Arc::new(client));
            let papers = search.search_papers(&query.join(" ")).await;
            println!("{}", view.render(&papers)?);
        }
        Command::Normalize { input, view } => {
            let text = read_input(input.as_ref()).await?;
            let raw: serde_json::Value =
                serde_json::from_str(&text).context("input is not valid JSON")?;
            println!("{}", view.render(&normalize_response(&raw))?);
        }
        Command::Chat { paper_id, title } => {
            let client = AskClient::new(Config::new(cli.base_url))?;
            run_chat(client, paper_id, title).await?;
        }
    }

    Ok(())
}
