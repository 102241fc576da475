//! End-to-end scenarios against the in-memory host
//! Run with: cargo test -p ammswap

mod common;

use ammswap::memory::MemBank;
use ammswap::types::events::*;
use ammswap::*;
use common::*;

// ============================================================================
// Pool registry
// ============================================================================

#[test]
fn test_create_exchange_registers_pool_and_share_token() {
    let mut h = setup(&["atom", "btc"], 1_000);
    let resp = h
        .deliver(&Msg::CreateExchange(MsgCreateExchange::new("atom", "btc", addr("alice"))))
        .unwrap();

    let pair = pool(&h, "atom", "btc");
    assert!(pair.is_empty());
    assert_eq!(pair.pool_token_name, "ammswap_atom_btc");
    assert_eq!(h.keeper().pool_token_supply("ammswap_atom_btc").unwrap(), Dec::ZERO);

    assert_eq!(resp.events.len(), 1);
    assert_eq!(resp.events[0].kind, EVENT_TYPE_CREATE_EXCHANGE);
    assert_eq!(resp.events[0].get(ATTRIBUTE_KEY_MODULE), Some(MODULE_NAME));
    assert_eq!(resp.events[0].get(ATTRIBUTE_KEY_TOKEN_PAIR), Some("atom_btc"));
    assert_eq!(h.sink().events, resp.events);
}

#[test]
fn test_create_exchange_twice_rejected() {
    let mut h = setup(&["atom", "btc"], 1_000);
    let msg = Msg::CreateExchange(MsgCreateExchange::new("atom", "btc", addr("alice")));
    h.deliver(&msg).unwrap();

    let err = h.deliver(&msg).unwrap_err();
    assert!(matches!(
        err,
        SwapError::AlreadyExists { kind: ExistingRecord::SwapTokenPair, .. }
    ));
    assert_eq!(h.sink().events.len(), 1);
}

#[test]
fn test_create_exchange_requires_issued_tokens() {
    let mut h = setup(&["atom"], 1_000);
    let err = h
        .deliver(&Msg::CreateExchange(MsgCreateExchange::new("atom", "btc", addr("alice"))))
        .unwrap_err();
    assert_eq!(err, SwapError::UnknownToken { denom: "btc".into() });
    assert!(h.keeper().query_swap_token_pairs().unwrap().is_empty());
}

#[test]
fn test_create_exchange_rejects_unordered_pair() {
    let mut h = setup(&["atom", "btc"], 1_000);
    let err = h
        .deliver(&Msg::CreateExchange(MsgCreateExchange::new("btc", "atom", addr("alice"))))
        .unwrap_err();
    assert!(matches!(err, SwapError::InvalidDenom { .. }));
}

#[test]
fn test_pools_listed_in_key_order() {
    let mut h = setup(&["atom", "btc", "eth"], 1_000);
    for (base, quote) in [("btc", "eth"), ("atom", "eth"), ("atom", "btc")] {
        h.deliver(&Msg::CreateExchange(MsgCreateExchange::new(base, quote, addr("alice"))))
            .unwrap();
    }
    let names: Vec<String> = h
        .keeper()
        .query_swap_token_pairs()
        .unwrap()
        .iter()
        .map(SwapTokenPair::token_pair_name)
        .collect();
    assert_eq!(names, vec!["atom_btc", "atom_eth", "btc_eth"]);
}

// ============================================================================
// Liquidity
// ============================================================================

#[test]
fn test_bootstrap_liquidity() {
    let mut h = setup(&["atom", "btc"], 1_000);
    let resp = h
        .deliver(&add_liquidity(coin("atom", 50), coin("btc", 100), "alice"))
        .unwrap();

    let pair = pool(&h, "atom", "btc");
    assert_eq!(pair.base_pooled_coin.amount, dec(50));
    assert_eq!(pair.quote_pooled_coin.amount, dec(100));
    assert_eq!(h.keeper().pool_token_supply(&pair.pool_token_name).unwrap(), Dec::ONE);
    assert_eq!(balance(&h, "alice", &pair.pool_token_name), Dec::ONE);
    assert_eq!(balance(&h, "alice", "atom"), dec(950));
    assert_eq!(balance(&h, "alice", "btc"), dec(900));
    assert_eq!(h.keeper().bank().balance_of(&MemBank::custody(), "atom"), dec(50));

    // auto-created pool, then the deposit
    let kinds: Vec<&str> = resp.events.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec![EVENT_TYPE_CREATE_EXCHANGE, EVENT_TYPE_ADD_LIQUIDITY]);
    let added = &resp.events[1];
    assert_eq!(added.get(ATTRIBUTE_KEY_LIQUIDITY), Some(Dec::ONE.to_string().as_str()));
    assert_eq!(
        added.get(ATTRIBUTE_KEY_BASE_AMOUNT),
        Some(coin("atom", 50).to_string().as_str())
    );
}

#[test]
fn test_funded_deposit_is_proportional() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 200), coin("btc", 100));

    h.deliver(&add_liquidity(coin("atom", 1_000), coin("btc", 50), "bob"))
        .unwrap();

    let pair = pool(&h, "atom", "btc");
    assert_eq!(pair.base_pooled_coin.amount, dec(300));
    assert_eq!(pair.quote_pooled_coin.amount, dec(150));
    // 50 / 100 of the existing single share
    assert_eq!(balance(&h, "bob", &pair.pool_token_name), "0.5".parse().unwrap());
    assert_eq!(
        h.keeper().pool_token_supply(&pair.pool_token_name).unwrap(),
        "1.5".parse().unwrap()
    );
    assert_eq!(balance(&h, "bob", "atom"), dec(9_900));
}

#[test]
fn test_deposit_above_max_base_rejected() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 200), coin("btc", 100));

    let err = h
        .deliver(&add_liquidity(coin("atom", 99), coin("btc", 50), "bob"))
        .unwrap_err();
    assert_eq!(
        err,
        SwapError::ExcessiveInput {
            required: coin("atom", 100),
            max: coin("atom", 99),
        }
    );
    assert_eq!(balance(&h, "bob", "btc"), dec(10_000));
}

#[test]
fn test_deposit_below_min_liquidity_rejected() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 200), coin("btc", 100));

    let mut msg = add_liquidity(coin("atom", 1_000), coin("btc", 50), "bob");
    if let Msg::AddLiquidity(m) = &mut msg {
        m.min_liquidity = Dec::ONE;
    }
    let err = h.deliver(&msg).unwrap_err();
    assert!(matches!(err, SwapError::SlippageExceeded { .. }));
    assert_eq!(pool(&h, "atom", "btc").quote_pooled_coin.amount, dec(100));
}

#[test]
fn test_remove_liquidity_returns_share_of_reserves() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 200), coin("btc", 100));
    h.deliver(&add_liquidity(coin("atom", 1_000), coin("btc", 100), "bob"))
        .unwrap();

    let resp = h
        .deliver(&remove_liquidity(Dec::ONE, "atom", "btc", "bob"))
        .unwrap();

    assert_eq!(balance(&h, "bob", "atom"), dec(10_000));
    assert_eq!(balance(&h, "bob", "btc"), dec(10_000));
    assert_eq!(balance(&h, "bob", "ammswap_atom_btc"), Dec::ZERO);
    let pair = pool(&h, "atom", "btc");
    assert_eq!(pair.base_pooled_coin.amount, dec(200));
    assert_eq!(h.keeper().pool_token_supply("ammswap_atom_btc").unwrap(), Dec::ONE);
    assert_eq!(resp.events[0].kind, EVENT_TYPE_REMOVE_LIQUIDITY);
}

#[test]
fn test_remove_all_liquidity_empties_pool() {
    let mut h = setup(&["atom", "btc"], 1_000);
    seed_pool(&mut h, coin("atom", 50), coin("btc", 100));
    h.deliver(&remove_liquidity(Dec::ONE, "atom", "btc", "alice"))
        .unwrap();

    let pair = pool(&h, "atom", "btc");
    assert!(pair.is_empty());
    assert_eq!(balance(&h, "alice", "atom"), dec(1_000));

    // an empty pool bootstraps again at a new price
    seed_pool(&mut h, coin("atom", 10), coin("btc", 20));
    assert_eq!(pool(&h, "atom", "btc").base_pooled_coin.amount, dec(10));
}

#[test]
fn test_remove_more_than_supply_rejected() {
    let mut h = setup(&["atom", "btc"], 1_000);
    seed_pool(&mut h, coin("atom", 50), coin("btc", 100));
    let err = h
        .deliver(&remove_liquidity(dec(2), "atom", "btc", "alice"))
        .unwrap_err();
    assert_eq!(
        err,
        SwapError::InsufficientShares {
            requested: dec(2),
            supply: Dec::ONE,
        }
    );
}

#[test]
fn test_remove_without_holding_shares_rejected() {
    let mut h = setup(&["atom", "btc"], 1_000);
    seed_pool(&mut h, coin("atom", 50), coin("btc", 100));
    let err = h
        .deliver(&remove_liquidity(Dec::ONE, "atom", "btc", "bob"))
        .unwrap_err();
    assert!(matches!(err, SwapError::InsufficientFunds { .. }));
    assert_eq!(pool(&h, "atom", "btc").base_pooled_coin.amount, dec(50));
}

#[test]
fn test_remove_below_minimum_rejected() {
    let mut h = setup(&["atom", "btc"], 1_000);
    seed_pool(&mut h, coin("atom", 50), coin("btc", 100));
    let mut msg = remove_liquidity(Dec::ONE, "atom", "btc", "alice");
    if let Msg::RemoveLiquidity(m) = &mut msg {
        m.min_quote_amount = coin("btc", 101);
    }
    let err = h.deliver(&msg).unwrap_err();
    assert!(matches!(err, SwapError::SlippageExceeded { .. }));
    assert_eq!(balance(&h, "alice", "ammswap_atom_btc"), Dec::ONE);
}

#[test]
fn test_remove_from_unknown_pool() {
    let mut h = setup(&["atom", "btc"], 1_000);
    let err = h
        .deliver(&remove_liquidity(Dec::ONE, "atom", "btc", "alice"))
        .unwrap_err();
    assert_eq!(err, SwapError::UnknownPair { pair: "atom_btc".into() });
}

// ============================================================================
// Swaps
// ============================================================================

#[test]
fn test_priced_swap() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));

    let resp = h
        .deliver(&swap(coin("atom", 100), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap();

    let bought = Dec::from_raw(90_661_089_388_014_913_158);
    assert!(bought < dec(100));
    assert_eq!(balance(&h, "bob", "btc"), dec(10_000).checked_add(bought).unwrap());
    assert_eq!(balance(&h, "bob", "atom"), dec(9_900));

    let pair = pool(&h, "atom", "btc");
    assert_eq!(pair.base_pooled_coin.amount, dec(1_100));
    assert_eq!(pair.quote_pooled_coin.amount, dec(1_000).checked_sub(bought).unwrap());

    assert_eq!(resp.events.len(), 1);
    let event = &resp.events[0];
    assert_eq!(event.kind, EVENT_TYPE_SWAP_TOKEN);
    assert_eq!(
        event.get(ATTRIBUTE_KEY_BOUGHT_AMOUNT),
        Some(DecCoin::new("btc", bought).to_string().as_str())
    );
    assert_eq!(event.get(ATTRIBUTE_KEY_RECIPIENT), Some("bob"));
}

#[test]
fn test_swap_larger_denom_credits_quote_side() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));

    h.deliver(&swap(coin("btc", 100), &[], DecCoin::zero("atom"), "bob", "carol"))
        .unwrap();

    let bought = Dec::from_raw(90_661_089_388_014_913_158);
    let pair = pool(&h, "atom", "btc");
    assert_eq!(pair.quote_pooled_coin.amount, dec(1_100));
    assert_eq!(pair.base_pooled_coin.amount, dec(1_000).checked_sub(bought).unwrap());
    assert_eq!(balance(&h, "carol", "atom"), bought);
}

#[test]
fn test_slippage_rejection_leaves_state_unchanged() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));
    let before = pool(&h, "atom", "btc");

    let quoted = h
        .keeper()
        .query_buy_amount(&coin("atom", 100), "btc")
        .unwrap();
    let min = DecCoin::new("btc", quoted.amount.checked_add(Dec::from_raw(1)).unwrap());
    let err = h
        .deliver(&swap(coin("atom", 100), &[], min, "bob", "bob"))
        .unwrap_err();

    assert!(matches!(err, SwapError::SlippageExceeded { .. }));
    assert_eq!(pool(&h, "atom", "btc"), before);
    assert_eq!(balance(&h, "bob", "atom"), dec(10_000));

    // exactly the quoted amount passes
    h.deliver(&swap(coin("atom", 100), &[], quoted.clone(), "bob", "bob"))
        .unwrap();
    assert_eq!(balance(&h, "bob", "btc"), dec(10_000).checked_add(quoted.amount).unwrap());
}

#[test]
fn test_past_deadline_rejects_without_transfer() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));

    let mut msgs = [
        swap(coin("atom", 100), &[], DecCoin::zero("btc"), "bob", "bob"),
        add_liquidity(coin("atom", 100), coin("btc", 100), "bob"),
        remove_liquidity(Dec::ONE, "atom", "btc", "alice"),
    ];
    for msg in &mut msgs {
        match msg {
            Msg::TokenToToken(m) => m.deadline = NOW - 1,
            Msg::AddLiquidity(m) => m.deadline = NOW - 1,
            Msg::RemoveLiquidity(m) => m.deadline = NOW - 1,
            Msg::CreateExchange(_) => unreachable!(),
        }
    }

    for msg in &msgs {
        let err = h.deliver(msg).unwrap_err();
        assert_eq!(
            err,
            SwapError::DeadlineExceeded {
                deadline: NOW - 1,
                block_time: NOW,
            }
        );
    }
    assert_eq!(balance(&h, "bob", "atom"), dec(10_000));
    assert_eq!(balance(&h, "bob", "btc"), dec(10_000));
    assert_eq!(balance(&h, "alice", "ammswap_atom_btc"), Dec::ONE);
}

#[test]
fn test_deadline_equal_to_block_time_accepted() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));
    let mut msg = swap(coin("atom", 1), &[], DecCoin::zero("btc"), "bob", "bob");
    if let Msg::TokenToToken(m) = &mut msg {
        m.deadline = NOW;
    }
    assert!(h.deliver(&msg).is_ok());
}

#[test]
fn test_dust_input_rejected() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));
    let dust = DecCoin::new("atom", Dec::from_raw(1));
    let err = h
        .deliver(&swap(dust.clone(), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap_err();
    assert_eq!(err, SwapError::InsufficientInput { sold: dust });
}

#[test]
fn test_swap_into_empty_pool_rejected() {
    let mut h = setup(&["atom", "btc"], 10_000);
    h.deliver(&Msg::CreateExchange(MsgCreateExchange::new("atom", "btc", addr("alice"))))
        .unwrap();
    let err = h
        .deliver(&swap(coin("atom", 10), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap_err();
    assert!(matches!(err, SwapError::InsufficientInput { .. }));
}

#[test]
fn test_swap_without_funds_fails_fast() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));
    let err = h
        .deliver(&swap(coin("atom", 10), &[], DecCoin::zero("btc"), "carol", "carol"))
        .unwrap_err();
    assert_eq!(
        err,
        SwapError::InsufficientFunds {
            address: addr("carol"),
            required: coin("atom", 10),
            available: Dec::ZERO,
        }
    );
}

#[test]
fn test_swap_through_unknown_pool() {
    let mut h = setup(&["atom", "btc"], 10_000);
    let err = h
        .deliver(&swap(coin("atom", 10), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap_err();
    assert_eq!(err, SwapError::UnknownPair { pair: "atom_btc".into() });
}

// ============================================================================
// Routes
// ============================================================================

fn routed_setup() -> ammswap::memory::MemoryHandler {
    let mut h = setup(&["atom", "btc", "eth"], 100_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 2_000));
    seed_pool(&mut h, coin("btc", 5_000), coin("eth", 500));
    h
}

#[test]
fn test_multi_hop_matches_manual_chaining() {
    let mut routed = routed_setup();
    let resp = routed
        .deliver(&swap(coin("atom", 100), &["btc"], DecCoin::zero("eth"), "bob", "bob"))
        .unwrap();

    let mut manual = routed_setup();
    manual
        .deliver(&swap(coin("atom", 100), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap();
    let mid = balance(&manual, "bob", "btc").checked_sub(dec(100_000)).unwrap();
    manual
        .deliver(&swap(DecCoin::new("btc", mid), &[], DecCoin::zero("eth"), "bob", "bob"))
        .unwrap();

    for denom in ["atom", "btc", "eth"] {
        assert_eq!(balance(&routed, "bob", denom), balance(&manual, "bob", denom));
    }
    assert_eq!(pool(&routed, "atom", "btc"), pool(&manual, "atom", "btc"));
    assert_eq!(pool(&routed, "btc", "eth"), pool(&manual, "btc", "eth"));

    // one event per hop, the first names the custody account
    assert_eq!(resp.events.len(), 2);
    assert_eq!(
        resp.events[0].get(ATTRIBUTE_KEY_RECIPIENT),
        Some(MemBank::custody().as_str())
    );
    assert_eq!(resp.events[1].get(ATTRIBUTE_KEY_RECIPIENT), Some("bob"));
}

#[test]
fn test_route_delivers_to_recipient() {
    let mut h = routed_setup();
    h.deliver(&swap(coin("atom", 100), &["btc"], DecCoin::zero("eth"), "bob", "carol"))
        .unwrap();
    assert!(balance(&h, "carol", "eth").is_positive());
    assert_eq!(balance(&h, "bob", "eth"), dec(100_000));
    assert_eq!(balance(&h, "carol", "btc"), Dec::ZERO);
}

#[test]
fn test_route_with_missing_pool_moves_nothing() {
    let mut h = routed_setup();
    let err = h
        .deliver(&swap(coin("atom", 100), &["btc", "eth"], DecCoin::zero("usdt"), "bob", "bob"))
        .unwrap_err();
    assert!(matches!(err, SwapError::InvalidDenom { .. } | SwapError::UnknownPair { .. }));

    let err = h
        .deliver(&swap(coin("atom", 100), &["eth"], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap_err();
    assert_eq!(err, SwapError::UnknownPair { pair: "atom_eth".into() });
    assert_eq!(balance(&h, "bob", "atom"), dec(100_000));
    assert_eq!(pool(&h, "atom", "btc").base_pooled_coin.amount, dec(1_000));
}

#[test]
fn test_route_final_slippage_reverts_every_hop() {
    let mut h = routed_setup();
    let before = (pool(&h, "atom", "btc"), pool(&h, "btc", "eth"));
    let err = h
        .deliver(&swap(coin("atom", 100), &["btc"], coin("eth", 1_000), "bob", "bob"))
        .unwrap_err();
    assert!(matches!(err, SwapError::SlippageExceeded { .. }));
    assert_eq!((pool(&h, "atom", "btc"), pool(&h, "btc", "eth")), before);
    assert_eq!(balance(&h, "bob", "atom"), dec(100_000));
}

#[test]
fn test_route_revisiting_a_pool_sees_updated_reserves() {
    // atom -> btc -> eth -> btc crosses btc_eth twice
    let mut routed = routed_setup();
    let resp = routed
        .deliver(&swap(coin("atom", 100), &["btc", "eth"], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap();
    assert_eq!(resp.events.len(), 3);

    let mut manual = routed_setup();
    manual
        .deliver(&swap(coin("atom", 100), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap();
    let first = balance(&manual, "bob", "btc").checked_sub(dec(100_000)).unwrap();
    manual
        .deliver(&swap(DecCoin::new("btc", first), &[], DecCoin::zero("eth"), "bob", "bob"))
        .unwrap();
    let second = balance(&manual, "bob", "eth").checked_sub(dec(100_000)).unwrap();
    manual
        .deliver(&swap(DecCoin::new("eth", second), &[], DecCoin::zero("btc"), "bob", "bob"))
        .unwrap();

    for denom in ["atom", "btc", "eth"] {
        assert_eq!(balance(&routed, "bob", denom), balance(&manual, "bob", denom));
    }
    assert_eq!(balance(&routed, "bob", "eth"), dec(100_000));
    assert_eq!(pool(&routed, "atom", "btc"), pool(&manual, "atom", "btc"));
    assert_eq!(pool(&routed, "btc", "eth"), pool(&manual, "btc", "eth"));
}

#[test]
fn test_route_with_zero_intermediate_moves_nothing() {
    let mut h = routed_setup();
    let before = (pool(&h, "atom", "btc"), pool(&h, "btc", "eth"));

    // 2e-18 atom buys 1e-18 btc, which is worth nothing after the fee
    let sold = DecCoin::new("atom", Dec::from_raw(2));
    let err = h
        .deliver(&swap(sold, &["btc"], DecCoin::zero("eth"), "bob", "bob"))
        .unwrap_err();
    assert_eq!(
        err,
        SwapError::InsufficientInput {
            sold: DecCoin::new("btc", Dec::from_raw(1)),
        }
    );

    assert_eq!((pool(&h, "atom", "btc"), pool(&h, "btc", "eth")), before);
    for denom in ["atom", "btc", "eth"] {
        assert_eq!(balance(&h, "bob", denom), dec(100_000));
    }
    assert!(h.sink().events.iter().all(|e| e.kind != EVENT_TYPE_SWAP_TOKEN));
}

#[test]
fn test_route_too_long_rejected() {
    let mut h = routed_setup();
    let route = ["btc", "eth", "btc", "eth", "btc", "eth", "btc", "eth"];
    let err = h
        .deliver(&swap(coin("atom", 100), &route, DecCoin::zero("btc"), "bob", "bob"))
        .unwrap_err();
    assert!(matches!(err, SwapError::InvalidInput { .. }));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_redeemable_assets() {
    let mut h = setup(&["atom", "btc"], 1_000);
    seed_pool(&mut h, coin("atom", 50), coin("btc", 100));
    let (base, quote) = h
        .keeper()
        .query_redeemable_assets("atom", "btc", "0.5".parse().unwrap())
        .unwrap();
    assert_eq!(base, coin("atom", 25));
    assert_eq!(quote, coin("btc", 50));

    assert!(matches!(
        h.keeper().query_redeemable_assets("atom", "btc", dec(2)),
        Err(SwapError::InsufficientShares { .. })
    ));
}

#[test]
fn test_query_params_and_buy_amount() {
    let mut h = setup(&["atom", "btc"], 10_000);
    seed_pool(&mut h, coin("atom", 1_000), coin("btc", 1_000));
    assert_eq!(h.keeper().query_params().fee_rate, "0.003".parse().unwrap());
    assert_eq!(
        h.keeper().query_buy_amount(&coin("atom", 100), "btc").unwrap(),
        DecCoin::new("btc", Dec::from_raw(90_661_089_388_014_913_158))
    );
    assert!(h.keeper().query_buy_amount(&coin("atom", 1), "atom").is_err());
}
