//! Shared fixtures for the integration tests

#![allow(dead_code)]

use ammswap::memory::{memory_handler, MemoryHandler};
use ammswap::*;

pub const NOW: i64 = 1_700_000_000;
pub const LATER: i64 = NOW + 3_600;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dec(units: u64) -> Dec {
    Dec::from_int(units)
}

pub fn coin(denom: &str, units: u64) -> DecCoin {
    DecCoin::new(denom, dec(units))
}

pub fn addr(name: &str) -> AccAddress {
    AccAddress::new(name)
}

/// Handler with `denoms` issued and `funds` of each credited to alice and bob
pub fn setup(denoms: &[&str], funds: u64) -> MemoryHandler {
    init_logger();
    let mut handler = memory_handler(EngineConfig::default(), NOW);
    let keeper = handler.keeper_mut();
    for denom in denoms {
        keeper.tokens_mut().issue(denom, &addr("issuer"), denom);
        for who in ["alice", "bob"] {
            keeper
                .bank_mut()
                .credit(&addr(who), &coin(denom, funds))
                .unwrap();
        }
    }
    handler
}

pub fn add_liquidity(base: DecCoin, quote: DecCoin, sender: &str) -> Msg {
    Msg::AddLiquidity(MsgAddLiquidity {
        min_liquidity: Dec::ZERO,
        max_base_amount: base,
        quote_amount: quote,
        deadline: LATER,
        sender: addr(sender),
    })
}

pub fn remove_liquidity(liquidity: Dec, base: &str, quote: &str, sender: &str) -> Msg {
    Msg::RemoveLiquidity(MsgRemoveLiquidity {
        liquidity,
        min_base_amount: DecCoin::zero(base),
        min_quote_amount: DecCoin::zero(quote),
        deadline: LATER,
        sender: addr(sender),
    })
}

pub fn swap(
    sold: DecCoin,
    route: &[&str],
    min_bought: DecCoin,
    sender: &str,
    recipient: &str,
) -> Msg {
    Msg::TokenToToken(MsgTokenToToken {
        sold_token_amount: sold,
        token_route: route.iter().map(|s| s.to_string()).collect(),
        min_bought_token_amount: min_bought,
        deadline: LATER,
        recipient: addr(recipient),
        sender: addr(sender),
    })
}

/// Seed a pool at the given reserves through the normal message path
pub fn seed_pool(handler: &mut MemoryHandler, base: DecCoin, quote: DecCoin) {
    handler.deliver(&add_liquidity(base, quote, "alice")).unwrap();
}

pub fn balance(handler: &MemoryHandler, who: &str, denom: &str) -> Dec {
    handler.keeper().bank().balance_of(&addr(who), denom)
}

pub fn pool(handler: &MemoryHandler, base: &str, quote: &str) -> SwapTokenPair {
    handler.keeper().query_swap_token_pair(base, quote).unwrap()
}
