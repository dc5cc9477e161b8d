#![cfg(test)]

use super::EscrowTest;
use common::escrow::types::EscrowError;

#[test]
fn test_rejects_non_inspector() {
    let test = EscrowTest::setup();
    assert_eq!(
        test.escrow
            .try_update_inspection_status(&test.seller, &test.asset_id, &true),
        Err(Ok(EscrowError::Unauthorized))
    );
    assert!(!test.escrow.inspection_passed(&test.asset_id));
}

#[test]
fn test_updates_inspection_status() {
    let test = EscrowTest::setup();
    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &true);
    assert!(test.escrow.inspection_passed(&test.asset_id));
}

#[test]
fn test_last_verdict_wins() {
    let test = EscrowTest::setup();
    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &true);
    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &false);
    assert!(!test.escrow.inspection_passed(&test.asset_id));

    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &true);
    test.escrow
        .update_inspection_status(&test.inspector, &test.asset_id, &true);
    assert!(test.escrow.inspection_passed(&test.asset_id));
}
