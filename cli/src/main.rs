//! Ammswap CLI - local simulator for the constant-product swap module
//!
//! Keeps a ledger snapshot on disk and runs every message through the same
//! handler a host chain would use, so pools, balances and events can be
//! explored from the shell.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod config;
mod pool;
mod query;
mod state;
mod swap;
mod token;

use ammswap::{Dec, DecCoin, Event};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "ammswap")]
#[command(about = "Ammswap CLI - simulate constant-product token swaps", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ledger snapshot file (overrides the config)
    #[arg(short, long)]
    state: Option<PathBuf>,

    /// Block time as a unix timestamp (defaults to now)
    #[arg(long)]
    time: Option<i64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty ledger
    Init {
        /// Protocol fee rate (e.g. 0.003)
        #[arg(long)]
        fee_rate: Option<String>,

        /// Overwrite an existing ledger
        #[arg(long)]
        force: bool,
    },

    /// Token registry operations
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Show every balance held by an address
    Balance {
        /// Account address
        address: String,
    },

    /// Create an empty pool for a base/quote pair
    CreatePool {
        /// Base token (must sort before quote)
        base: String,

        /// Quote token
        quote: String,

        /// Sender address
        #[arg(long)]
        sender: String,
    },

    /// Deposit liquidity into a pool, creating it if needed
    AddLiquidity {
        /// Maximum base amount, e.g. 50atom
        max_base: String,

        /// Exact quote amount, e.g. 100btc
        quote: String,

        /// Minimum pool shares to accept
        #[arg(long, default_value = "0")]
        min_liquidity: String,

        /// Sender address
        #[arg(long)]
        sender: String,

        /// Deadline as a unix timestamp
        #[arg(long)]
        deadline: Option<i64>,
    },

    /// Burn pool shares for both reserves
    RemoveLiquidity {
        /// Shares to burn
        liquidity: String,

        /// Minimum base amount to accept, e.g. 10atom
        min_base: String,

        /// Minimum quote amount to accept, e.g. 20btc
        min_quote: String,

        /// Sender address
        #[arg(long)]
        sender: String,

        /// Deadline as a unix timestamp
        #[arg(long)]
        deadline: Option<i64>,
    },

    /// Sell an exact amount, optionally routed through other tokens
    Swap {
        /// Amount to sell, e.g. 100atom
        sold: String,

        /// Minimum amount to receive, e.g. 90btc
        min_bought: String,

        /// Intermediate tokens, comma separated
        #[arg(long, value_delimiter = ',')]
        via: Vec<String>,

        /// Sender address
        #[arg(long)]
        sender: String,

        /// Recipient address (defaults to the sender)
        #[arg(long)]
        recipient: Option<String>,

        /// Deadline as a unix timestamp
        #[arg(long)]
        deadline: Option<i64>,
    },

    /// Read-only queries
    Query {
        #[command(subcommand)]
        command: QueryCommands,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// Issue a new token and credit its initial supply
    Issue {
        /// Token denomination
        denom: String,

        /// Initial supply (decimal)
        amount: String,

        /// Owner receiving the supply
        #[arg(long)]
        owner: String,

        /// Free-form description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List issued tokens
    List,
}

#[derive(Subcommand)]
enum QueryCommands {
    /// Show one pool
    Pool { base: String, quote: String },

    /// List every pool
    Pools,

    /// Show module parameters
    Params,

    /// Amounts returned for burning pool shares
    Redeemable {
        base: String,
        quote: String,
        liquidity: String,
    },

    /// Quote selling an amount for another token
    BuyAmount {
        /// Amount to sell, e.g. 100atom
        sold: String,

        /// Token to buy
        token: String,
    },
}

pub(crate) fn parse_dec(s: &str) -> anyhow::Result<Dec> {
    s.parse()
        .map_err(|e| anyhow::anyhow!("Invalid amount {s:?}: {e}"))
}

pub(crate) fn parse_coin(s: &str) -> anyhow::Result<DecCoin> {
    Ok(s.parse()?)
}

/// Print the events of a committed message
pub(crate) fn print_events(events: &[Event]) {
    for event in events {
        println!("  {} {}", "event".bright_magenta(), event.kind.bold());
        for attr in event.attributes.iter().filter(|a| a.key != "module") {
            println!("    {:<20} {}", attr.key.bright_cyan(), attr.value);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(state) = cli.state {
        config.state_path = state;
    }
    let block_time = cli.time.unwrap_or_else(|| chrono::Utc::now().timestamp());

    if cli.verbose {
        println!("{} {}", "Ledger:".bright_cyan(), config.state_path.display());
        println!("{} {}", "Block time:".bright_cyan(), block_time);
    }

    match cli.command {
        Commands::Init { fee_rate, force } => {
            token::init_ledger(&config, fee_rate, force)?;
        }
        Commands::Token { command } => match command {
            TokenCommands::Issue {
                denom,
                amount,
                owner,
                description,
            } => {
                token::issue_token(&config, block_time, denom, amount, owner, description)?;
            }
            TokenCommands::List => {
                token::list_tokens(&config, block_time)?;
            }
        },
        Commands::Balance { address } => {
            token::show_balance(&config, block_time, address)?;
        }
        Commands::CreatePool { base, quote, sender } => {
            pool::create_pool(&config, block_time, base, quote, sender)?;
        }
        Commands::AddLiquidity {
            max_base,
            quote,
            min_liquidity,
            sender,
            deadline,
        } => {
            pool::add_liquidity(
                &config,
                block_time,
                max_base,
                quote,
                min_liquidity,
                sender,
                deadline,
            )?;
        }
        Commands::RemoveLiquidity {
            liquidity,
            min_base,
            min_quote,
            sender,
            deadline,
        } => {
            pool::remove_liquidity(
                &config,
                block_time,
                liquidity,
                min_base,
                min_quote,
                sender,
                deadline,
            )?;
        }
        Commands::Swap {
            sold,
            min_bought,
            via,
            sender,
            recipient,
            deadline,
        } => {
            swap::swap_tokens(
                &config,
                block_time,
                sold,
                min_bought,
                via,
                sender,
                recipient,
                deadline,
            )?;
        }
        Commands::Query { command } => match command {
            QueryCommands::Pool { base, quote } => {
                query::show_pool(&config, block_time, base, quote)?
            }
            QueryCommands::Pools => query::list_pools(&config, block_time)?,
            QueryCommands::Params => query::show_params(&config, block_time)?,
            QueryCommands::Redeemable {
                base,
                quote,
                liquidity,
            } => query::show_redeemable(&config, block_time, base, quote, liquidity)?,
            QueryCommands::BuyAmount { sold, token } => {
                query::show_buy_amount(&config, block_time, sold, token)?
            }
        },
    }

    Ok(())
}
