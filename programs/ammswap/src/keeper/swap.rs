//! Swap router: exact-input swaps through one pool or a route of pools

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use amm_model::{quote_exact_in, Dec};
use log::{debug, info};

use super::Keeper;
use crate::error::SwapError;
use crate::host::{Bank, Clock, KvStore, ParamSource, TokenRegistry};
use crate::types::events::{
    ATTRIBUTE_KEY_BOUGHT_AMOUNT, ATTRIBUTE_KEY_RECIPIENT, ATTRIBUTE_KEY_SOLD_AMOUNT,
    EVENT_TYPE_SWAP_TOKEN,
};
use crate::types::{
    coin_sort, pair_name, AccAddress, DecCoin, Event, EventManager, MsgTokenToToken,
    SwapTokenPair,
};

/// Price selling `sold` into `pair` for `bought_denom`
///
/// A zero result means the input is too small; callers must reject it.
pub fn price_out(
    pair: &SwapTokenPair,
    sold: &DecCoin,
    bought_denom: &str,
    fee_rate: Dec,
) -> Result<DecCoin, SwapError> {
    let reserves = (pair.reserve_of(&sold.denom), pair.reserve_of(bought_denom));
    let (reserve_in, reserve_out) = match reserves {
        (Some(r_in), Some(r_out)) if sold.denom != bought_denom => (r_in, r_out),
        _ => {
            return Err(SwapError::InternalInvariantViolation {
                reason: format!(
                    "pool {} cannot price {} for {}",
                    pair.token_pair_name(),
                    sold.denom,
                    bought_denom
                ),
            })
        }
    };
    let quote = quote_exact_in(reserve_in, reserve_out, fee_rate, sold.amount)?;
    Ok(DecCoin::new(bought_denom, quote.amount_out))
}

/// Book a priced swap against the pool's reserves
///
/// The sold side is found by comparing denominations in canonical order, so
/// a sale of the larger denomination credits the quote side.
fn apply_swap(pair: &mut SwapTokenPair, sold: &DecCoin, bought: &DecCoin) -> Result<(), SwapError> {
    if sold.denom < bought.denom {
        pair.base_pooled_coin = pair.base_pooled_coin.checked_add(sold.amount)?;
        pair.quote_pooled_coin = pair.quote_pooled_coin.checked_sub(bought.amount)?;
    } else {
        pair.quote_pooled_coin = pair.quote_pooled_coin.checked_add(sold.amount)?;
        pair.base_pooled_coin = pair.base_pooled_coin.checked_sub(bought.amount)?;
    }
    Ok(())
}

fn swap_event(sold: &DecCoin, bought: &DecCoin, recipient: &AccAddress) -> Event {
    Event::new(EVENT_TYPE_SWAP_TOKEN)
        .attr(ATTRIBUTE_KEY_SOLD_AMOUNT, sold)
        .attr(ATTRIBUTE_KEY_BOUGHT_AMOUNT, bought)
        .attr(ATTRIBUTE_KEY_RECIPIENT, recipient)
}

impl<S, B, T, P, C> Keeper<S, B, T, P, C>
where
    S: KvStore,
    B: Bank,
    T: TokenRegistry,
    P: ParamSource,
    C: Clock,
{
    /// Sell exactly `sold` through the one pool pairing it with `bought_denom`
    pub fn swap_exact_in(
        &mut self,
        sold: &DecCoin,
        bought_denom: &str,
        min_bought: Dec,
        sender: &AccAddress,
        recipient: &AccAddress,
        events: &mut EventManager,
    ) -> Result<DecCoin, SwapError> {
        self.ensure_balance(sender, sold)?;

        let mut pair = self.get_swap_token_pair(&pair_name(&sold.denom, bought_denom))?;
        let bought = price_out(&pair, sold, bought_denom, self.params.current_fee_rate())?;
        if bought.is_zero() {
            return Err(SwapError::InsufficientInput { sold: sold.clone() });
        }
        if bought.amount < min_bought {
            return Err(SwapError::SlippageExceeded {
                minimum: DecCoin::new(bought_denom, min_bought),
                actual: bought,
            });
        }

        self.bank.transfer_to_pool(sender, &coin_sort(vec![sold.clone()]))?;
        self.bank.transfer_from_pool(recipient, &coin_sort(vec![bought.clone()]))?;

        apply_swap(&mut pair, sold, &bought)?;
        self.set_swap_token_pair(&pair)?;

        info!("{} swapped {} for {} to {}", sender, sold, bought, recipient);
        events.emit(swap_event(sold, &bought, recipient));
        Ok(bought)
    }

    /// Execute a swap intent, routed through every denomination in
    /// `token_route`; returns the amount delivered to the recipient
    ///
    /// The whole route is priced against working copies of the pools it
    /// touches before anything moves. Intermediate amounts stay in pool
    /// custody, so the caller sees exactly two transfers: the sold amount in
    /// and the final amount out.
    pub fn swap_route(
        &mut self,
        msg: &MsgTokenToToken,
        events: &mut EventManager,
    ) -> Result<DecCoin, SwapError> {
        self.check_deadline(msg.deadline)?;

        if msg.token_route.is_empty() {
            return self.swap_exact_in(
                &msg.sold_token_amount,
                &msg.min_bought_token_amount.denom,
                msg.min_bought_token_amount.amount,
                &msg.sender,
                &msg.recipient,
                events,
            );
        }

        let path = msg.path();
        let mut working: BTreeMap<String, SwapTokenPair> = BTreeMap::new();
        for hop in path.windows(2) {
            if let Entry::Vacant(e) = working.entry(pair_name(hop[0], hop[1])) {
                let pair = self.get_swap_token_pair(e.key())?;
                e.insert(pair);
            }
        }
        self.ensure_balance(&msg.sender, &msg.sold_token_amount)?;

        let fee_rate = self.params.current_fee_rate();
        let custody = self.custody_address();
        let last_hop = path.len() - 2;
        let mut hop_events = Vec::with_capacity(path.len() - 1);
        let mut sold = msg.sold_token_amount.clone();

        for (i, hop) in path.windows(2).enumerate() {
            let pair = working
                .get_mut(&pair_name(hop[0], hop[1]))
                .ok_or_else(|| SwapError::InternalInvariantViolation {
                    reason: format!("route pool {}/{} was not loaded", hop[0], hop[1]),
                })?;
            let bought = price_out(pair, &sold, hop[1], fee_rate)?;
            if bought.is_zero() {
                return Err(SwapError::InsufficientInput { sold });
            }
            apply_swap(pair, &sold, &bought)?;
            debug!("route hop {}: {} -> {}", i + 1, sold, bought);

            let hop_recipient = if i == last_hop { &msg.recipient } else { &custody };
            hop_events.push(swap_event(&sold, &bought, hop_recipient));
            sold = bought;
        }

        let bought = sold;
        if bought.amount < msg.min_bought_token_amount.amount {
            return Err(SwapError::SlippageExceeded {
                minimum: msg.min_bought_token_amount.clone(),
                actual: bought,
            });
        }

        self.bank
            .transfer_to_pool(&msg.sender, &coin_sort(vec![msg.sold_token_amount.clone()]))?;
        self.bank
            .transfer_from_pool(&msg.recipient, &coin_sort(vec![bought.clone()]))?;
        for pair in working.values() {
            self.set_swap_token_pair(pair)?;
        }

        info!(
            "{} routed {} through {} pools for {} to {}",
            msg.sender,
            msg.sold_token_amount,
            msg.hop_count(),
            bought,
            msg.recipient
        );
        for event in hop_events {
            events.emit(event);
        }
        Ok(bought)
    }
}
