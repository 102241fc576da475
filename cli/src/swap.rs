//! Token swaps

use ammswap::{AccAddress, Msg, MsgTokenToToken};
use anyhow::Result;
use colored::Colorize;

use crate::config::CliConfig;
use crate::parse_coin;
use crate::pool::submit;

#[allow(clippy::too_many_arguments)]
pub fn swap_tokens(
    config: &CliConfig,
    block_time: i64,
    sold: String,
    min_bought: String,
    via: Vec<String>,
    sender: String,
    recipient: Option<String>,
    deadline: Option<i64>,
) -> Result<()> {
    println!("{}", "=== Swap ===".bright_green().bold());

    let sender = AccAddress::new(sender);
    let msg = MsgTokenToToken {
        sold_token_amount: parse_coin(&sold)?,
        token_route: via,
        min_bought_token_amount: parse_coin(&min_bought)?,
        deadline: config.deadline(block_time, deadline),
        recipient: recipient.map(AccAddress::new).unwrap_or_else(|| sender.clone()),
        sender,
    };
    println!("{} {}", "Selling:".bright_cyan(), msg.sold_token_amount);
    println!("{} {}", "Route:".bright_cyan(), msg.path().join(" -> "));
    println!("{} {}", "Minimum:".bright_cyan(), msg.min_bought_token_amount);

    submit(config, block_time, Msg::TokenToToken(msg))?;
    Ok(())
}
