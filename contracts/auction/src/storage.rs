use crate::types::{Auction, DataKey};
use soroban_sdk::{Address, BytesN, Env};

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn settle_after_deadline(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::SettleAfterDeadline)
        .unwrap_or(false)
}

pub fn set_settle_after_deadline(env: &Env, gated: bool) {
    env.storage()
        .instance()
        .set(&DataKey::SettleAfterDeadline, &gated);
}

pub fn has_auction(env: &Env, auction_id: &BytesN<32>) -> bool {
    let key = DataKey::Auction(auction_id.clone());
    env.storage().persistent().has(&key)
}

pub fn get_auction(env: &Env, auction_id: &BytesN<32>) -> Option<Auction> {
    let key = DataKey::Auction(auction_id.clone());
    env.storage().persistent().get(&key)
}

pub fn save_auction(env: &Env, auction_id: &BytesN<32>, auction: &Auction) {
    let key = DataKey::Auction(auction_id.clone());
    env.storage().persistent().set(&key, auction);
}

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().set(&key, &amount);
}

pub fn credit_balance(env: &Env, account: &Address, amount: i128) {
    set_balance(env, account, get_balance(env, account) + amount);
}
