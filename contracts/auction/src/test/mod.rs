
use crate::{AuctionContract, AuctionContractClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, BytesN, Env, String, Val, Vec,
};

pub fn setup_test() -> (
    Env,
    AuctionContractClient<'static>,
    Address,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    setup_with_policy(false)
}

pub fn setup_with_policy(
    settle_after_deadline: bool,
) -> (
    Env,
    AuctionContractClient<'static>,
    Address,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionContract, ());
    let client = AuctionContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let initiator = Address::generate(&env);
    let bidder_a = Address::generate(&env);
    let bidder_b = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&bidder_a, &10_000);
    token_admin_client.mint(&bidder_b, &10_000);

    client.initialize(&admin, &token_address, &settle_after_deadline);

    (
        env,
        client,
        contract_id,
        initiator,
        bidder_a,
        bidder_b,
        token_client,
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// Events published by the auction contract during the last invocation,
/// leaving out anything the token contract emitted along the way.
pub fn contract_events(env: &Env, contract_id: &Address) -> Vec<(Address, Vec<Val>, Val)> {
    let mut published = vec![env];
    for (emitter, topics, data) in env.events().all().iter() {
        if &emitter == contract_id {
            published.push_back((emitter, topics, data));
        }
    }
    published
}

/// Register an auction with fixed metadata and the given floor and deadline.
pub fn open_auction(
    env: &Env,
    client: &AuctionContractClient<'static>,
    initiator: &Address,
    floor: i128,
    deadline: u64,
) -> BytesN<32> {
    client.start_auction(
        initiator,
        &String::from_str(env, "Vintage synthesizer"),
        &String::from_str(env, "cdn.example/synth.png"),
        &String::from_str(env, "One careful owner"),
        &floor,
        &deadline,
    )
}
