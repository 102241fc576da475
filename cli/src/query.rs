//! Read-only queries against the ledger snapshot

use ammswap::SwapTokenPair;
use anyhow::Result;
use colored::Colorize;

use crate::config::CliConfig;
use crate::state::Session;
use crate::{parse_coin, parse_dec};

fn print_pool(pair: &SwapTokenPair, supply: impl std::fmt::Display) {
    println!("{}", pair.token_pair_name().bold());
    println!("  {:<12} {}", "base".bright_cyan(), pair.base_pooled_coin);
    println!("  {:<12} {}", "quote".bright_cyan(), pair.quote_pooled_coin);
    println!("  {:<12} {} ({})", "shares".bright_cyan(), supply, pair.pool_token_name);
}

pub fn show_pool(config: &CliConfig, block_time: i64, base: String, quote: String) -> Result<()> {
    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let keeper = session.handler.keeper();
    let pair = keeper.query_swap_token_pair(&base, &quote)?;
    print_pool(&pair, keeper.pool_token_supply(&pair.pool_token_name)?);
    Ok(())
}

pub fn list_pools(config: &CliConfig, block_time: i64) -> Result<()> {
    println!("{}", "=== Pools ===".bright_green().bold());

    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let keeper = session.handler.keeper();
    let pairs = keeper.query_swap_token_pairs()?;
    if pairs.is_empty() {
        println!("{}", "No pools".dimmed());
    }
    for pair in &pairs {
        print_pool(pair, keeper.pool_token_supply(&pair.pool_token_name)?);
    }
    Ok(())
}

pub fn show_params(config: &CliConfig, block_time: i64) -> Result<()> {
    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let params = session.handler.keeper().query_params();
    println!("{} {}", "Fee rate:".bright_cyan(), params.fee_rate);
    println!(
        "{} {}",
        "Max route hops:".bright_cyan(),
        config.engine.max_route_hops
    );
    Ok(())
}

pub fn show_redeemable(
    config: &CliConfig,
    block_time: i64,
    base: String,
    quote: String,
    liquidity: String,
) -> Result<()> {
    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let (base_out, quote_out) = session
        .handler
        .keeper()
        .query_redeemable_assets(&base, &quote, parse_dec(&liquidity)?)?;
    println!("{} {}", "Base:".bright_cyan(), base_out);
    println!("{} {}", "Quote:".bright_cyan(), quote_out);
    Ok(())
}

pub fn show_buy_amount(
    config: &CliConfig,
    block_time: i64,
    sold: String,
    token: String,
) -> Result<()> {
    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let sold = parse_coin(&sold)?;
    let bought = session.handler.keeper().query_buy_amount(&sold, &token)?;
    println!("{} {}", "Selling:".bright_cyan(), sold);
    println!("{} {}", "Buys:".bright_cyan(), bought);
    Ok(())
}
