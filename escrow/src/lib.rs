#![no_std]

mod events;
mod storage;
mod utils;

use common::escrow::{
    interface::EscrowCoordinatorTrait,
    types::{
        EscrowError as Error, Listing, ListingStatus, INSPECTOR, LENDER, PAYMENT_TOKEN,
        REGISTRY_CONTRACT, SELLER,
    },
};
use events::CoordinatorEvent;
use soroban_sdk::{contract, contractimpl, log, Address, Env, Map};
use storage::{get_listing, get_open_listing, get_party, has_data, store_data, store_listing};
use utils::{
    credit, get_token_client, pull_funds, release_asset, release_funds, require_role,
    take_custody,
};

#[contract]
pub struct EscrowCoordinatorContract;

#[contractimpl]
impl EscrowCoordinatorTrait for EscrowCoordinatorContract {
    // The parties and collaborators are fixed for the lifetime of the contract
    fn initialize(
        env: Env,
        seller: Address,
        registry: Address,
        lender: Address,
        inspector: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        seller.require_auth();
        if has_data(&env, &SELLER) {
            return Err(Error::AlreadyInitialized);
        }
        if seller == lender || seller == inspector || lender == inspector {
            return Err(Error::InvalidParty);
        }

        store_data(&env, &SELLER, &seller);
        store_data(&env, &REGISTRY_CONTRACT, &registry);
        store_data(&env, &LENDER, &lender);
        store_data(&env, &INSPECTOR, &inspector);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);

        CoordinatorEvent::Initialized(seller, registry, lender, inspector).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn list(
        env: Env,
        caller: Address,
        asset_id: u64,
        buyer: Address,
        purchase_price: i128,
        escrow_amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        let seller: Address = get_party(&env, &SELLER)?;
        require_role(&caller, &seller)?;

        if purchase_price <= 0 || escrow_amount <= 0 || escrow_amount > purchase_price {
            return Err(Error::InvalidAmount);
        }
        if buyer == seller
            || buyer == get_party(&env, &LENDER)?
            || buyer == get_party(&env, &INSPECTOR)?
        {
            return Err(Error::InvalidParty);
        }

        // An open listing may only be replaced while it holds no funds
        if let Some(existing) = get_listing(&env, asset_id) {
            if existing.is_listed() && existing.balance > 0 {
                return Err(Error::AlreadyListed);
            }
        }

        take_custody(&env, &seller, asset_id)?;

        let listing: Listing = Listing {
            asset_id,
            buyer: buyer.clone(),
            purchase_price,
            escrow_amount,
            inspection_passed: false,
            approvals: Map::new(&env),
            contributions: Map::new(&env),
            balance: 0,
            status: ListingStatus::Open,
        };
        store_listing(&env, &listing);

        CoordinatorEvent::Listed(asset_id, buyer, purchase_price, escrow_amount).publish(&env);
        Ok(())
    }

    fn deposit_earnest(env: Env, caller: Address, asset_id: u64, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut listing: Listing = get_open_listing(&env, asset_id)?;
        require_role(&caller, &listing.buyer)?;

        if amount < listing.escrow_amount {
            return Err(Error::InsufficientFunds);
        }

        pull_funds(&env, &caller, amount)?;
        credit(&mut listing, &caller, amount)?;
        store_listing(&env, &listing);

        CoordinatorEvent::EarnestDeposited(asset_id, caller, amount).publish(&env);
        Ok(())
    }

    // Open to any address; this is how the lender tops up the purchase price
    fn contribute_funds(env: Env, caller: Address, asset_id: u64, amount: i128) -> Result<(), Error> {
        caller.require_auth();
        let mut listing: Listing = get_open_listing(&env, asset_id)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        pull_funds(&env, &caller, amount)?;
        credit(&mut listing, &caller, amount)?;
        store_listing(&env, &listing);

        CoordinatorEvent::FundsContributed(asset_id, caller, amount).publish(&env);
        Ok(())
    }

    fn update_inspection_status(
        env: Env,
        caller: Address,
        asset_id: u64,
        passed: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        let inspector: Address = get_party(&env, &INSPECTOR)?;
        require_role(&caller, &inspector)?;

        let mut listing: Listing = get_open_listing(&env, asset_id)?;
        listing.inspection_passed = passed;
        store_listing(&env, &listing);

        CoordinatorEvent::InspectionUpdated(asset_id, passed).publish(&env);
        Ok(())
    }

    fn approve_sale(env: Env, caller: Address, asset_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let mut listing: Listing = get_open_listing(&env, asset_id)?;

        let seller: Address = get_party(&env, &SELLER)?;
        let lender: Address = get_party(&env, &LENDER)?;
        if caller != listing.buyer && caller != seller && caller != lender {
            return Err(Error::Unauthorized);
        }

        if !listing.approved_by(&caller) {
            listing.approvals.set(caller.clone(), true);
            store_listing(&env, &listing);
        }

        CoordinatorEvent::SaleApproved(asset_id, caller).publish(&env);
        Ok(())
    }

    fn finalize_sale(env: Env, caller: Address, asset_id: u64) -> Result<i128, Error> {
        caller.require_auth();
        let seller: Address = get_party(&env, &SELLER)?;
        require_role(&caller, &seller)?;
        let lender: Address = get_party(&env, &LENDER)?;

        let mut listing: Listing = get_open_listing(&env, asset_id)?;
        if !listing.inspection_passed {
            return Err(Error::InspectionNotPassed);
        }
        if !listing.approved_by(&listing.buyer) {
            return Err(Error::BuyerNotApproved);
        }
        if !listing.approved_by(&seller) {
            return Err(Error::SellerNotApproved);
        }
        if !listing.approved_by(&lender) {
            return Err(Error::LenderNotApproved);
        }
        if listing.balance < listing.purchase_price {
            return Err(Error::InsufficientEscrowBalance);
        }

        // Close the listing before any value leaves the contract
        let payout: i128 = listing.balance;
        listing.balance = 0;
        listing.status = ListingStatus::Finalized;
        store_listing(&env, &listing);

        log!(&env, "finalize_sale: asset {} settles for {}", asset_id, payout);
        release_funds(&env, &seller, payout)?;
        release_asset(&env, &listing.buyer, asset_id)?;

        CoordinatorEvent::SaleFinalized(asset_id, seller, listing.buyer, payout).publish(&env);
        Ok(payout)
    }

    fn cancel_sale(env: Env, caller: Address, asset_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let seller: Address = get_party(&env, &SELLER)?;

        let mut listing: Listing = get_open_listing(&env, asset_id)?;
        if caller != seller && caller != listing.buyer {
            return Err(Error::Unauthorized);
        }

        // A buyer walking away after a passed inspection forfeits their earnest.
        // A seller walking away refunds everyone.
        let forfeit: bool = listing.inspection_passed && caller == listing.buyer;
        let contributions: Map<Address, i128> = listing.contributions.clone();
        listing.balance = 0;
        listing.status = ListingStatus::Cancelled;
        store_listing(&env, &listing);

        log!(&env, "cancel_sale: asset {} forfeit {}", asset_id, forfeit);
        for (party, amount) in contributions.iter() {
            let recipient: Address = if forfeit && party == listing.buyer {
                seller.clone()
            } else {
                party
            };
            release_funds(&env, &recipient, amount)?;
        }
        release_asset(&env, &seller, asset_id)?;

        CoordinatorEvent::SaleCancelled(asset_id, caller, forfeit).publish(&env);
        Ok(())
    }

    fn get_listing(env: Env, asset_id: u64) -> Result<Listing, Error> {
        get_listing(&env, asset_id).ok_or(Error::NotListed)
    }

    fn is_listed(env: Env, asset_id: u64) -> bool {
        get_listing(&env, asset_id).is_some_and(|listing| listing.is_listed())
    }

    fn buyer(env: Env, asset_id: u64) -> Result<Address, Error> {
        Ok(Self::get_listing(env, asset_id)?.buyer)
    }

    fn purchase_price(env: Env, asset_id: u64) -> Result<i128, Error> {
        Ok(Self::get_listing(env, asset_id)?.purchase_price)
    }

    fn escrow_amount(env: Env, asset_id: u64) -> Result<i128, Error> {
        Ok(Self::get_listing(env, asset_id)?.escrow_amount)
    }

    fn inspection_passed(env: Env, asset_id: u64) -> Result<bool, Error> {
        Ok(Self::get_listing(env, asset_id)?.inspection_passed)
    }

    fn approval(env: Env, asset_id: u64, party: Address) -> bool {
        get_listing(&env, asset_id).is_some_and(|listing| listing.approved_by(&party))
    }

    fn contribution(env: Env, asset_id: u64, party: Address) -> i128 {
        get_listing(&env, asset_id).map_or(0, |listing| listing.contribution_of(&party))
    }

    fn listing_balance(env: Env, asset_id: u64) -> Result<i128, Error> {
        Ok(Self::get_listing(env, asset_id)?.balance)
    }

    fn get_balance(env: Env) -> Result<i128, Error> {
        Ok(get_token_client(&env)?.balance(&env.current_contract_address()))
    }

    fn seller(env: Env) -> Result<Address, Error> {
        get_party(&env, &SELLER)
    }

    fn lender(env: Env) -> Result<Address, Error> {
        get_party(&env, &LENDER)
    }

    fn inspector(env: Env) -> Result<Address, Error> {
        get_party(&env, &INSPECTOR)
    }

    fn registry(env: Env) -> Result<Address, Error> {
        get_party(&env, &REGISTRY_CONTRACT)
    }

    fn payment_token(env: Env) -> Result<Address, Error> {
        get_party(&env, &PAYMENT_TOKEN)
    }
}
