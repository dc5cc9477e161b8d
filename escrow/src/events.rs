use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum CoordinatorEvent {
    Initialized(Address, Address, Address, Address),
    Listed(u64, Address, i128, i128),
    EarnestDeposited(u64, Address, i128),
    FundsContributed(u64, Address, i128),
    InspectionUpdated(u64, bool),
    SaleApproved(u64, Address),
    SaleFinalized(u64, Address, Address, i128),
    SaleCancelled(u64, Address, bool),
}

impl CoordinatorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CoordinatorEvent::Initialized(..) => stringify!(Initialized),
            CoordinatorEvent::Listed(..) => stringify!(Listed),
            CoordinatorEvent::EarnestDeposited(..) => stringify!(EarnestDeposited),
            CoordinatorEvent::FundsContributed(..) => stringify!(FundsContributed),
            CoordinatorEvent::InspectionUpdated(..) => stringify!(InspectionUpdated),
            CoordinatorEvent::SaleApproved(..) => stringify!(SaleApproved),
            CoordinatorEvent::SaleFinalized(..) => stringify!(SaleFinalized),
            CoordinatorEvent::SaleCancelled(..) => stringify!(SaleCancelled),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            CoordinatorEvent::Initialized(seller, registry, lender, inspector) => {
                v.push_back(seller.into_val(env));
                v.push_back(registry.into_val(env));
                v.push_back(lender.into_val(env));
                v.push_back(inspector.into_val(env));
            }
            CoordinatorEvent::Listed(asset_id, buyer, purchase_price, escrow_amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(purchase_price.into_val(env));
                v.push_back(escrow_amount.into_val(env));
            }
            CoordinatorEvent::EarnestDeposited(asset_id, buyer, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            CoordinatorEvent::FundsContributed(asset_id, from, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(amount.into_val(env));
            }
            CoordinatorEvent::InspectionUpdated(asset_id, passed) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(passed.into_val(env));
            }
            CoordinatorEvent::SaleApproved(asset_id, party) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(party.into_val(env));
            }
            CoordinatorEvent::SaleFinalized(asset_id, seller, buyer, amount) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount.into_val(env));
            }
            CoordinatorEvent::SaleCancelled(asset_id, caller, inspection_passed) => {
                v.push_back(asset_id.into_val(env));
                v.push_back(caller.into_val(env));
                v.push_back(inspection_passed.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
