//! # Name Lifecycle
//!
//! Expiry, re-registration by a competing claimant, consumed claims and
//! chain reorganisation across the engine, pool and ledger.

#[cfg(test)]
mod tests {
    use crate::fixtures::{engine_at_start, history, key, ALICE, BOB};
    use name_node::{NameEngine, NodeConfig};
    use nc_04_name_mempool::MempoolConfig;
    use nc_05_name_lifecycle::NameStatus;
    use shared_types::{ConflictReason, NameError, NameParams, RejectKind};

    /// Registers `name` for `owner` and returns the registration height.
    fn register(engine: &NameEngine, name: &str, value: &[u8], owner: [u8; 20]) -> u64 {
        let handle = engine.submit_claim_with_random_salt(&key(name), owner).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&handle, value, owner).unwrap();
        engine.generate(1).unwrap();
        engine.tip_height()
    }

    #[test]
    fn test_competing_claim_waits_for_expiry() {
        let engine = engine_at_start();
        let alice = engine.submit_claim_with_random_salt(&key("contested"), ALICE).unwrap();
        let bob = engine.submit_claim_with_random_salt(&key("contested"), BOB).unwrap();
        engine.generate(12).unwrap();

        engine.submit_reveal(&alice, b"first", ALICE).unwrap();
        let err = engine.submit_reveal(&bob, b"second", BOB).unwrap_err();
        assert_eq!(
            err,
            NameError::conflict(&key("contested"), ConflictReason::PendingRegistration)
        );

        engine.generate(1).unwrap();
        let err = engine.submit_reveal(&bob, b"second", BOB).unwrap_err();
        assert_eq!(err, NameError::conflict(&key("contested"), ConflictReason::NameActive));

        // The losing claim stays valid and takes over once the name lapses.
        engine.generate(30).unwrap();
        let info = engine.query_name(&key("contested")).unwrap().unwrap();
        assert_eq!(info.status, NameStatus::Expired);

        engine.submit_reveal(&bob, b"second", BOB).unwrap();
        engine.generate(1).unwrap();

        let info = engine.query_name(&key("contested")).unwrap().unwrap();
        assert_eq!(info.owner, BOB);
        assert_eq!(info.value, b"second");
        assert_eq!(info.status, NameStatus::Active { remaining: 30 });
        assert_eq!(history(&engine, "contested"), vec!["first", "second"]);
    }

    #[test]
    fn test_consumed_claim_cannot_register_again() {
        let engine = engine_at_start();
        let handle = engine.submit_claim_with_random_salt(&key("once"), ALICE).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&handle, b"v1", ALICE).unwrap();
        engine.generate(31).unwrap();

        assert!(engine.query_name(&key("once")).unwrap().unwrap().expired);
        let err = engine.submit_reveal(&handle, b"v2", ALICE).unwrap_err();
        assert_eq!(err, NameError::conflict(&key("once"), ConflictReason::ClaimAlreadyRevealed));
    }

    #[test]
    fn test_updates_renew_the_window() {
        let engine = engine_at_start();
        let registered_at = register(&engine, "renewed", b"v0", ALICE);

        for round in 1..=3u8 {
            engine.generate(20).unwrap();
            engine
                .submit_update(&key("renewed"), Some(&[round]), None, ALICE)
                .unwrap();
            engine.generate(1).unwrap();
            assert_eq!(
                engine.query_name(&key("renewed")).unwrap().unwrap().expires_in,
                30
            );
        }

        let info = engine.query_name(&key("renewed")).unwrap().unwrap();
        assert_eq!(info.registered_at, registered_at);
        assert_eq!(info.height, registered_at + 63);
        assert_eq!(history(&engine, "renewed").len(), 4);
    }

    #[test]
    fn test_owner_only_update_keeps_value() {
        let engine = engine_at_start();
        register(&engine, "kept", b"payload", ALICE);

        engine.submit_update(&key("kept"), None, Some(BOB), ALICE).unwrap();
        engine.generate(1).unwrap();

        let info = engine.query_name(&key("kept")).unwrap().unwrap();
        assert_eq!(info.value, b"payload");
        assert_eq!(info.owner, BOB);

        let entries = engine.query_history(&key("kept")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].owner, ALICE);
        assert_eq!(entries[1].owner, BOB);
        assert_eq!(entries[1].value, b"payload");
    }

    #[test]
    fn test_history_disabled_node() {
        let engine = NameEngine::new(NameParams::regtest(), MempoolConfig::default(), false);
        register(&engine, "quiet", b"v", ALICE);

        assert!(engine.query_name(&key("quiet")).unwrap().is_some());
        let err = engine.query_history(&key("quiet")).unwrap_err();
        assert_eq!(err.kind(), RejectKind::FeatureDisabled);
    }

    #[test]
    fn test_engine_from_config() {
        let mut config = NodeConfig::regtest();
        config.names.claim_maturity = 2;
        config.names.expiry_window = 5;
        let engine = NameEngine::from_config(&config).unwrap();

        let handle = engine.submit_claim_with_random_salt(&key("short"), ALICE).unwrap();
        engine.generate(2).unwrap();
        engine.submit_reveal(&handle, b"v", ALICE).unwrap();
        engine.generate(1).unwrap();
        assert_eq!(engine.query_name(&key("short")).unwrap().unwrap().expires_in, 5);

        engine.generate(5).unwrap();
        assert!(engine.query_name(&key("short")).unwrap().unwrap().expired);
    }

    #[test]
    fn test_reorg_of_reregistration_restores_expired_record() {
        let engine = engine_at_start();
        let alice = engine.submit_claim_with_random_salt(&key("swing"), ALICE).unwrap();
        let bob = engine.submit_claim_with_random_salt(&key("swing"), BOB).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&alice, b"alice", ALICE).unwrap();
        engine.generate(31).unwrap();

        let reveal = engine.submit_reveal(&bob, b"bob", BOB).unwrap();
        engine.generate(1).unwrap();
        assert_eq!(engine.query_name(&key("swing")).unwrap().unwrap().owner, BOB);

        let block = engine.disconnect_tip().unwrap().unwrap();
        assert_eq!(block.transactions.len(), 1);

        let info = engine.query_name(&key("swing")).unwrap().unwrap();
        assert_eq!(info.owner, ALICE);
        assert!(info.expired);
        assert_eq!(history(&engine, "swing"), vec!["alice"]);
        assert!(engine.is_pooled(&reveal));

        engine.generate(1).unwrap();
        assert_eq!(engine.query_name(&key("swing")).unwrap().unwrap().owner, BOB);
        assert_eq!(history(&engine, "swing"), vec!["alice", "bob"]);
    }

    #[test]
    fn test_reorg_keeps_pooled_update_on_top_of_reveal() {
        let engine = engine_at_start();
        register(&engine, "stacked", b"v0", ALICE);
        let update = engine
            .submit_update(&key("stacked"), Some(b"v1"), None, ALICE)
            .unwrap();

        engine.disconnect_tip().unwrap().unwrap();
        engine.generate(2).unwrap();

        assert!(!engine.is_pooled(&update));
        let info = engine.query_name(&key("stacked")).unwrap().unwrap();
        assert_eq!(info.value, b"v1");
        assert_eq!(info.registered_at, 213);
        assert_eq!(history(&engine, "stacked"), vec!["v0", "v1"]);
    }
}
