use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Payload published when a new auction is registered.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    pub auction_id: BytesN<32>,
    pub initiator: Address,
    pub name: String,
    pub floor: i128,
    pub deadline: u64,
}

/// Payload published for each accepted bid.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidEventData {
    pub auction_id: BytesN<32>,
    pub bidder: Address,
    pub amount: i128,
}

pub fn emit_auction_started(
    env: &Env,
    auction_id: BytesN<32>,
    initiator: Address,
    name: String,
    floor: i128,
    deadline: u64,
) {
    let event = AuctionStartedEventData {
        auction_id: auction_id.clone(),
        initiator,
        name,
        floor,
        deadline,
    };
    env.events().publish(("auction_started", auction_id), event);
}

pub fn emit_bid(env: &Env, auction_id: BytesN<32>, bidder: Address, amount: i128) {
    let event = BidEventData {
        auction_id: auction_id.clone(),
        bidder,
        amount,
    };
    env.events().publish(("bid", auction_id), event);
}
