use soroban_sdk::{contracttype, Address, BytesN, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Open = 0,
    Closed = 1,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub initiator: Address,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub floor: i128,
    pub deadline: u64,
    pub status: AuctionStatus,
    pub current_bidder: Option<Address>,
    pub current_bid: i128,
    pub escrowed: i128,
}

/// Defining tuple of an auction. Its XDR serialization is hashed into the
/// auction id, so two auctions with identical tuples collide by construction.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AuctionKey {
    pub initiator: Address,
    pub deadline: u64,
    pub name: String,
    pub image_url: String,
    pub description: String,
}

#[contracttype]
pub enum DataKey {
    Token,
    SettleAfterDeadline,
    Auction(BytesN<32>),
    Balance(Address),
}
