//! Ledger setup, token issuance and balances

use ammswap::types::validate_swap_token_name;
use anyhow::{Context, Result};
use ammswap::{AccAddress, DecCoin, Params};
use colored::Colorize;

use crate::config::CliConfig;
use crate::parse_dec;
use crate::state::{LedgerState, Session};

pub fn init_ledger(config: &CliConfig, fee_rate: Option<String>, force: bool) -> Result<()> {
    println!("{}", "=== Initialize Ledger ===".bright_green().bold());

    let path = &config.state_path;
    if path.exists() && !force {
        anyhow::bail!(
            "Ledger already exists: {}\n\
             Pass --force to overwrite it",
            path.display()
        );
    }

    let mut params: Params = config.engine.default_params;
    if let Some(rate) = fee_rate {
        params.fee_rate = parse_dec(&rate)?;
    }
    params.validate().context("Invalid fee rate")?;

    LedgerState::new(params).save(path)?;
    println!("{} {}", "Ledger:".bright_cyan(), path.display());
    println!("{} {}", "Fee rate:".bright_cyan(), params.fee_rate);
    println!("\n{}", "Ledger initialized".green());
    Ok(())
}

pub fn issue_token(
    config: &CliConfig,
    block_time: i64,
    denom: String,
    amount: String,
    owner: String,
    description: String,
) -> Result<()> {
    println!("{}", "=== Issue Token ===".bright_green().bold());

    validate_swap_token_name(&denom)?;
    let supply = DecCoin::new(denom.clone(), parse_dec(&amount)?);
    let owner = AccAddress::new(owner);

    let mut session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let keeper = session.handler.keeper_mut();
    if !keeper.tokens_mut().issue(&denom, &owner, &description) {
        anyhow::bail!("Token {} already exists", denom);
    }
    keeper
        .bank_mut()
        .credit(&owner, &supply)
        .with_context(|| format!("Failed to credit {supply} to {owner}"))?;
    session.persist()?;

    println!("{} {}", "Token:".bright_cyan(), denom);
    println!("{} {}", "Owner:".bright_cyan(), owner);
    println!("{} {}", "Supply:".bright_cyan(), supply);
    println!("\n{}", "Token issued".green());
    Ok(())
}

pub fn list_tokens(config: &CliConfig, block_time: i64) -> Result<()> {
    println!("{}", "=== Tokens ===".bright_green().bold());

    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let keeper = session.handler.keeper();
    let mut any = false;
    for (denom, info) in keeper.tokens().tokens() {
        any = true;
        println!(
            "{:<20} {} {:<16} {} {}",
            denom.bold(),
            "owner".dimmed(),
            info.owner,
            "supply".dimmed(),
            keeper.bank().supply_of(denom)
        );
    }
    if !any {
        println!("{}", "No tokens issued".dimmed());
    }
    Ok(())
}

pub fn show_balance(config: &CliConfig, block_time: i64, address: String) -> Result<()> {
    println!("{}", "=== Balance ===".bright_green().bold());

    let session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    let address = AccAddress::new(address);
    let balances = session.handler.keeper().bank().balances(&address);

    println!("{} {}", "Address:".bright_cyan(), address);
    if balances.is_empty() {
        println!("{}", "No balances".dimmed());
    }
    for coin in balances {
        println!("  {:<24} {}", coin.denom, coin.amount);
    }
    Ok(())
}
