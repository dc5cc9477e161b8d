#![cfg(test)]

use super::EscrowTest;
use common::escrow::types::EscrowError;

#[test]
fn test_updates_approval_status() {
    let test = EscrowTest::setup();
    test.escrow.approve_sale(&test.buyer, &test.asset_id);
    test.escrow.approve_sale(&test.seller, &test.asset_id);
    test.escrow.approve_sale(&test.lender, &test.asset_id);

    assert!(test.escrow.approval(&test.asset_id, &test.buyer));
    assert!(test.escrow.approval(&test.asset_id, &test.seller));
    assert!(test.escrow.approval(&test.asset_id, &test.lender));
}

#[test]
fn test_approval_is_per_party() {
    let test = EscrowTest::setup();
    test.escrow.approve_sale(&test.lender, &test.asset_id);

    assert!(test.escrow.approval(&test.asset_id, &test.lender));
    assert!(!test.escrow.approval(&test.asset_id, &test.buyer));
    assert!(!test.escrow.approval(&test.asset_id, &test.seller));
}

#[test]
fn test_approval_is_idempotent() {
    let test = EscrowTest::setup();
    test.escrow.approve_sale(&test.buyer, &test.asset_id);
    test.escrow.approve_sale(&test.buyer, &test.asset_id);

    assert!(test.escrow.approval(&test.asset_id, &test.buyer));
}

#[test]
fn test_rejects_outsider() {
    let test = EscrowTest::setup();
    assert_eq!(
        test.escrow.try_approve_sale(&test.inspector, &test.asset_id),
        Err(Ok(EscrowError::Unauthorized))
    );
    assert!(!test.escrow.approval(&test.asset_id, &test.inspector));
}
