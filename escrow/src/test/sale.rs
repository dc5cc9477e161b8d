#![cfg(test)]

use super::{tokens, EscrowTest, Gate};
use common::escrow::types::{EscrowError, ListingStatus};
use soroban_sdk::testutils::Events;

fn assert_gate(skip: Gate, expected: EscrowError) {
    let test = EscrowTest::setup();
    test.prepare_sale(skip);

    assert_eq!(
        test.escrow.try_finalize_sale(&test.seller, &test.asset_id),
        Err(Ok(expected))
    );
    // Nothing moved
    assert!(test.escrow.is_listed(&test.asset_id));
    assert_eq!(test.registry.owner_of(&test.asset_id), test.escrow.address);
    assert_eq!(test.token.balance(&test.seller), 0);
}

#[test]
fn test_completes_sale() {
    let test = EscrowTest::setup();
    test.prepare_sale(Gate::None);
    assert_eq!(test.escrow.get_balance(), tokens(10));

    let paid: i128 = test.escrow.finalize_sale(&test.seller, &test.asset_id);
    assert!(!test.env.events().all().is_empty(), "settlement event not published");

    assert_eq!(paid, tokens(10));
    assert_eq!(test.escrow.get_balance(), 0);
    assert_eq!(test.token.balance(&test.seller), tokens(10));
    assert_eq!(test.registry.owner_of(&test.asset_id), test.buyer);
    assert!(!test.escrow.is_listed(&test.asset_id));
    assert_eq!(
        test.escrow.get_listing(&test.asset_id).status,
        ListingStatus::Finalized
    );
    assert_eq!(test.escrow.listing_balance(&test.asset_id), 0);
}

#[test]
fn test_pays_out_full_balance() {
    let test = EscrowTest::setup();
    test.prepare_sale(Gate::None);
    test.escrow
        .contribute_funds(&test.lender, &test.asset_id, &tokens(2));

    assert_eq!(
        test.escrow.finalize_sale(&test.seller, &test.asset_id),
        tokens(12)
    );
    assert_eq!(test.token.balance(&test.seller), tokens(12));
    assert_eq!(test.escrow.get_balance(), 0);
}

#[test]
fn test_rejects_non_seller() {
    let test = EscrowTest::setup();
    test.prepare_sale(Gate::None);

    assert_eq!(
        test.escrow.try_finalize_sale(&test.buyer, &test.asset_id),
        Err(Ok(EscrowError::Unauthorized))
    );
    assert_eq!(
        test.escrow.try_finalize_sale(&test.lender, &test.asset_id),
        Err(Ok(EscrowError::Unauthorized))
    );
    assert!(test.escrow.is_listed(&test.asset_id));
}

#[test]
fn test_requires_inspection() {
    assert_gate(Gate::Inspection, EscrowError::InspectionNotPassed);
}

#[test]
fn test_requires_buyer_approval() {
    assert_gate(Gate::BuyerApproval, EscrowError::BuyerNotApproved);
}

#[test]
fn test_requires_seller_approval() {
    assert_gate(Gate::SellerApproval, EscrowError::SellerNotApproved);
}

#[test]
fn test_requires_lender_approval() {
    assert_gate(Gate::LenderApproval, EscrowError::LenderNotApproved);
}

#[test]
fn test_requires_full_price() {
    assert_gate(Gate::Balance, EscrowError::InsufficientEscrowBalance);
}

#[test]
fn test_failed_inspection_blocks_sale() {
    let test = EscrowTest::setup();
    test.prepare_sale(Gate::None);
    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &false);

    assert_eq!(
        test.escrow.try_finalize_sale(&test.seller, &test.asset_id),
        Err(Ok(EscrowError::InspectionNotPassed))
    );
}

#[test]
fn test_gates_reported_in_order() {
    let test = EscrowTest::setup();
    // Nothing done yet: inspection is reported before any approval
    assert_eq!(
        test.escrow.try_finalize_sale(&test.seller, &test.asset_id),
        Err(Ok(EscrowError::InspectionNotPassed))
    );

    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &true);
    test.escrow.approve_sale(&test.lender, &test.asset_id);
    assert_eq!(
        test.escrow.try_finalize_sale(&test.seller, &test.asset_id),
        Err(Ok(EscrowError::BuyerNotApproved))
    );
}

#[test]
fn test_settled_listing_is_terminal() {
    let test = EscrowTest::setup();
    test.prepare_sale(Gate::None);
    test.escrow.finalize_sale(&test.seller, &test.asset_id);

    assert_eq!(
        test.escrow.try_finalize_sale(&test.seller, &test.asset_id),
        Err(Ok(EscrowError::AlreadySettled))
    );
    assert_eq!(
        test.escrow
            .try_deposit_earnest(&test.buyer, &test.asset_id, &tokens(5)),
        Err(Ok(EscrowError::AlreadySettled))
    );
    assert_eq!(
        test.escrow
            .try_update_inspection_status(&test.inspector, &test.asset_id, &false),
        Err(Ok(EscrowError::AlreadySettled))
    );
    assert_eq!(
        test.escrow.try_approve_sale(&test.lender, &test.asset_id),
        Err(Ok(EscrowError::AlreadySettled))
    );
    assert_eq!(
        test.escrow.try_cancel_sale(&test.seller, &test.asset_id),
        Err(Ok(EscrowError::AlreadySettled))
    );
    // The title left custody, so it cannot be listed again by the seller
    assert_eq!(
        test.escrow.try_list(
            &test.seller,
            &test.asset_id,
            &test.buyer,
            &tokens(10),
            &tokens(5)
        ),
        Err(Ok(EscrowError::AssetNotInCustody))
    );
}
