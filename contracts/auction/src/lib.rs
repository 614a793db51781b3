#![no_std]

mod events;
mod storage;
mod types;

use soroban_sdk::{
    contract, contracterror, contractimpl, token, xdr::ToXdr, Address, BytesN, Env, String,
};

use events::{emit_auction_started, emit_bid};
use types::{Auction, AuctionKey, AuctionStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    DuplicateAuction = 3,
    AuctionNotFound = 4,
    AuctionClosed = 5,
    AuctionExpired = 6,
    BidTooLow = 7,
    InsufficientBalance = 8,
    NotInitiator = 9,
    AlreadySettled = 10,
    DeadlineNotReached = 11,
    InvalidAmount = 12,
}

/// How an accepted bid is funded.
enum Funding {
    /// Tokens are transferred from the bidder within the call.
    Direct,
    /// The amount is debited from the bidder's pre-funded free balance.
    Ledger,
}

#[contract]
pub struct AuctionContract;

#[contractimpl]
impl AuctionContract {
    /// One-time setup by the deploying party: the token all escrow accounting
    /// is denominated in and whether settlement is gated on the auction
    /// deadline having passed. The configurer holds no ongoing role.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        settle_after_deadline: bool,
    ) -> Result<(), Error> {
        admin.require_auth();

        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_token(&env, &token);
        storage::set_settle_after_deadline(&env, settle_after_deadline);
        Ok(())
    }

    /// Derive the id an auction with these attributes would be stored under.
    pub fn get_auction_id(
        env: Env,
        initiator: Address,
        deadline: u64,
        name: String,
        image_url: String,
        description: String,
    ) -> BytesN<32> {
        derive_auction_id(
            &env,
            AuctionKey {
                initiator,
                deadline,
                name,
                image_url,
                description,
            },
        )
    }

    /// Register a new auction. The id is derived from the defining attributes,
    /// so starting the same auction twice fails regardless of the status of
    /// the first one. No funds move.
    pub fn start_auction(
        env: Env,
        initiator: Address,
        name: String,
        image_url: String,
        description: String,
        floor: i128,
        deadline: u64,
    ) -> Result<BytesN<32>, Error> {
        initiator.require_auth();

        if floor < 0 {
            return Err(Error::InvalidAmount);
        }

        let auction_id = derive_auction_id(
            &env,
            AuctionKey {
                initiator: initiator.clone(),
                deadline,
                name: name.clone(),
                image_url: image_url.clone(),
                description: description.clone(),
            },
        );

        if storage::has_auction(&env, &auction_id) {
            return Err(Error::DuplicateAuction);
        }

        let auction = Auction {
            initiator: initiator.clone(),
            name: name.clone(),
            image_url,
            description,
            floor,
            deadline,
            status: AuctionStatus::Open,
            current_bidder: None,
            current_bid: 0,
            escrowed: 0,
        };
        storage::save_auction(&env, &auction_id, &auction);

        emit_auction_started(&env, auction_id.clone(), initiator, name, floor, deadline);

        Ok(auction_id)
    }

    pub fn get_auction(env: Env, auction_id: BytesN<32>) -> Result<Auction, Error> {
        storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)
    }

    /// Credit the caller's free balance by transferring tokens into escrow.
    /// A zero amount is a no-op, not an error.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount == 0 {
            return Ok(());
        }

        let token = storage::get_token(&env).ok_or(Error::NotInitialized)?;
        token::TokenClient::new(&env, &token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );
        storage::credit_balance(&env, &from, amount);
        Ok(())
    }

    /// Pay out part of the caller's free balance. Funds escrowed against an
    /// open bid are not withdrawable until that bid is displaced.
    pub fn withdraw(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        if amount == 0 {
            return Ok(());
        }

        let balance = storage::get_balance(&env, &from);
        if balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let token = storage::get_token(&env).ok_or(Error::NotInitialized)?;
        storage::set_balance(&env, &from, balance - amount);
        token::TokenClient::new(&env, &token).transfer(
            &env.current_contract_address(),
            &from,
            &amount,
        );
        Ok(())
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }

    /// Bid with funds attached: the full amount is transferred from the bidder
    /// into escrow within this call.
    pub fn bid(env: Env, auction_id: BytesN<32>, bidder: Address, amount: i128) -> Result<(), Error> {
        place_bid(&env, auction_id, bidder, amount, Funding::Direct)
    }

    /// Bid funded from the bidder's pre-deposited free balance.
    pub fn bid_from_balance(
        env: Env,
        auction_id: BytesN<32>,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        place_bid(&env, auction_id, bidder, amount, Funding::Ledger)
    }

    /// Close an auction and pay the escrowed winning bid to the initiator.
    /// Only the initiator may settle, and only once.
    pub fn settle(env: Env, auction_id: BytesN<32>, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction =
            storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;

        if caller != auction.initiator {
            return Err(Error::NotInitiator);
        }
        if auction.status == AuctionStatus::Closed {
            return Err(Error::AlreadySettled);
        }
        if storage::settle_after_deadline(&env) && env.ledger().timestamp() < auction.deadline {
            return Err(Error::DeadlineNotReached);
        }

        // Winning bidder and bid are kept on the closed record for audit.
        if auction.current_bidder.is_some() {
            let token = storage::get_token(&env).ok_or(Error::NotInitialized)?;
            token::TokenClient::new(&env, &token).transfer(
                &env.current_contract_address(),
                &auction.initiator,
                &auction.escrowed,
            );
            auction.escrowed = 0;
        }

        auction.status = AuctionStatus::Closed;
        storage::save_auction(&env, &auction_id, &auction);
        Ok(())
    }
}

fn derive_auction_id(env: &Env, key: AuctionKey) -> BytesN<32> {
    env.crypto().sha256(&key.to_xdr(env)).to_bytes()
}

/// Shared admission and acceptance path for both funding modes. The displaced
/// bidder, if any, gets their full previous bid credited back to their free
/// balance.
fn place_bid(
    env: &Env,
    auction_id: BytesN<32>,
    bidder: Address,
    amount: i128,
    funding: Funding,
) -> Result<(), Error> {
    bidder.require_auth();

    let mut auction = storage::get_auction(env, &auction_id).ok_or(Error::AuctionNotFound)?;

    if auction.status != AuctionStatus::Open {
        return Err(Error::AuctionClosed);
    }
    if env.ledger().timestamp() >= auction.deadline {
        return Err(Error::AuctionExpired);
    }

    // A first bid must strictly clear the floor; every later bid must strictly
    // exceed the current highest, including a bidder raising their own stake.
    let threshold = if auction.current_bid > auction.floor {
        auction.current_bid
    } else {
        auction.floor
    };
    if amount <= threshold {
        return Err(Error::BidTooLow);
    }

    match funding {
        Funding::Direct => {
            let token = storage::get_token(env).ok_or(Error::NotInitialized)?;
            token::TokenClient::new(env, &token).transfer(
                &bidder,
                &env.current_contract_address(),
                &amount,
            );
        }
        Funding::Ledger => {
            let balance = storage::get_balance(env, &bidder);
            if balance < amount {
                return Err(Error::InsufficientBalance);
            }
            storage::set_balance(env, &bidder, balance - amount);
        }
    }

    if let Some(previous_bidder) = auction.current_bidder.take() {
        storage::credit_balance(env, &previous_bidder, auction.current_bid);
    }

    auction.current_bidder = Some(bidder.clone());
    auction.current_bid = amount;
    auction.escrowed = amount;
    storage::save_auction(env, &auction_id, &auction);

    emit_bid(env, auction_id, bidder, amount);

    Ok(())
}

#[cfg(test)]
mod test;
