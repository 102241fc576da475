//! Pool creation and liquidity provision

use ammswap::{
    AccAddress, Msg, MsgAddLiquidity, MsgCreateExchange, MsgRemoveLiquidity, TxResponse,
};
use anyhow::Result;
use colored::Colorize;
use log::debug;

use crate::config::CliConfig;
use crate::state::Session;
use crate::{parse_coin, parse_dec, print_events};

/// Deliver one message, persisting the ledger only if it commits
pub(crate) fn submit(config: &CliConfig, block_time: i64, msg: Msg) -> Result<TxResponse> {
    let mut session = Session::open(&config.state_path, config.engine.clone(), block_time)?;
    debug!("delivering {:?} at block time {}", msg, block_time);
    match session.handler.deliver(&msg) {
        Ok(resp) => {
            session.persist()?;
            println!("\n{} {}", "Committed".green().bold(), msg.name());
            print_events(&resp.events);
            Ok(resp)
        }
        Err(err) => {
            println!("\n{} {}", "Rejected".red().bold(), msg.name());
            anyhow::bail!("{} (code {})", err, err.code())
        }
    }
}

pub fn create_pool(
    config: &CliConfig,
    block_time: i64,
    base: String,
    quote: String,
    sender: String,
) -> Result<()> {
    println!("{}", "=== Create Pool ===".bright_green().bold());
    println!("{} {}/{}", "Pair:".bright_cyan(), base, quote);

    let msg = MsgCreateExchange::new(base, quote, AccAddress::new(sender));
    submit(config, block_time, Msg::CreateExchange(msg))?;
    Ok(())
}

pub fn add_liquidity(
    config: &CliConfig,
    block_time: i64,
    max_base: String,
    quote: String,
    min_liquidity: String,
    sender: String,
    deadline: Option<i64>,
) -> Result<()> {
    println!("{}", "=== Add Liquidity ===".bright_green().bold());

    let msg = MsgAddLiquidity {
        min_liquidity: parse_dec(&min_liquidity)?,
        max_base_amount: parse_coin(&max_base)?,
        quote_amount: parse_coin(&quote)?,
        deadline: config.deadline(block_time, deadline),
        sender: AccAddress::new(sender),
    };
    println!("{} {}", "Max base:".bright_cyan(), msg.max_base_amount);
    println!("{} {}", "Quote:".bright_cyan(), msg.quote_amount);
    println!("{} {}", "Deadline:".bright_cyan(), msg.deadline);

    submit(config, block_time, Msg::AddLiquidity(msg))?;
    Ok(())
}

pub fn remove_liquidity(
    config: &CliConfig,
    block_time: i64,
    liquidity: String,
    min_base: String,
    min_quote: String,
    sender: String,
    deadline: Option<i64>,
) -> Result<()> {
    println!("{}", "=== Remove Liquidity ===".bright_green().bold());

    let msg = MsgRemoveLiquidity {
        liquidity: parse_dec(&liquidity)?,
        min_base_amount: parse_coin(&min_base)?,
        min_quote_amount: parse_coin(&min_quote)?,
        deadline: config.deadline(block_time, deadline),
        sender: AccAddress::new(sender),
    };
    println!("{} {}", "Shares:".bright_cyan(), msg.liquidity);
    println!("{} {}", "Deadline:".bright_cyan(), msg.deadline);

    submit(config, block_time, Msg::RemoveLiquidity(msg))?;
    Ok(())
}
