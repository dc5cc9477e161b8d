use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Map, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InsufficientFunds = 4,
    NotListed = 5,
    AlreadySettled = 6,
    // Finalize gates, reported in the order they are checked
    InspectionNotPassed = 7,
    BuyerNotApproved = 8,
    SellerNotApproved = 9,
    LenderNotApproved = 10,
    InsufficientEscrowBalance = 11,
    InvalidAmount = 12,
    AlreadyListed = 13,
    AssetNotInCustody = 14,
    InvalidParty = 15,
}

#[contracttype]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Open = 1,
    Finalized = 2,
    Cancelled = 3,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub asset_id: u64,
    pub buyer: Address,
    pub purchase_price: i128,
    pub escrow_amount: i128,
    pub inspection_passed: bool,
    pub approvals: Map<Address, bool>,
    pub contributions: Map<Address, i128>, // Funds supplied per address, drives refunds on cancel
    pub balance: i128,                     // Custodial balance held for this listing
    pub status: ListingStatus,
}

impl Listing {
    pub fn is_listed(&self) -> bool {
        self.status == ListingStatus::Open
    }

    pub fn approved_by(&self, party: &Address) -> bool {
        self.approvals.get(party.clone()).unwrap_or(false)
    }

    pub fn contribution_of(&self, party: &Address) -> i128 {
        self.contributions.get(party.clone()).unwrap_or(0)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EscrowDataKey {
    Listing(u64), // Listing record keyed by asset id
}

pub const SELLER: Symbol = symbol_short!("SELLER");
pub const LENDER: Symbol = symbol_short!("LENDER");
pub const INSPECTOR: Symbol = symbol_short!("INSPECTOR");
pub const REGISTRY_CONTRACT: Symbol = symbol_short!("REG_CA");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
