//! Babel library CLI
//!
//! Usage:
//!   babel page <address> <page>
//!   babel book <address> --json
//!   babel --local search "hello world"

use std::time::Duration;

use anyhow::Result;
use babel_client::BabelClient;
use babel_core::{generate_book, generate_page, Address, Book, Page, PageNumber, SearchResponse};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "babel")]
#[command(about = "Read books from the Babel library")]
struct Args {
    /// Library server URL
    #[arg(long, env = "BABEL_SERVER_URL", default_value = "http://localhost:8000")]
    server: String,

    /// Request timeout in seconds
    #[arg(long, env = "BABEL_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    /// Generate locally instead of asking a server
    #[arg(long)]
    local: bool,

    /// Print raw JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a whole book
    Book { address: String },

    /// Print one page of a book
    Page {
        address: String,
        #[arg(allow_negative_numbers = true)]
        page: i64,
    },

    /// Compute the address for a piece of text
    Search { text: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;
    let client = BabelClient::with_client(http, args.server.clone());

    match args.command {
        Command::Book { address } => {
            let address = Address::parse(&address)?;
            let book = if args.local {
                generate_book(&address)
            } else {
                client.fetch_book(&address).await?
            };
            print_book(&book, args.json)?;
        }
        Command::Page { address, page } => {
            let address = Address::parse(&address)?;
            let page = PageNumber::new(page)?;
            let page = if args.local {
                generate_page(&address, page)
            } else {
                client.fetch_page(&address, page).await?
            };
            print_page(&page, args.json)?;
        }
        Command::Search { text } => {
            let response = if args.local {
                SearchResponse::for_text(text)?
            } else {
                client.search(&text).await?
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.address_hash);
            }
        }
    }

    Ok(())
}

fn print_book(book: &Book, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
        return Ok(());
    }
    println!("book {}", book.address_hash);
    for page in &book.content {
        println!();
        print_page(page, false)?;
    }
    Ok(())
}

fn print_page(page: &Page, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }
    println!("-- page {} --", page.page_number);
    for line in &page.lines {
        println!("{line}");
    }
    Ok(())
}
