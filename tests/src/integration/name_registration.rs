//! # Name Registration Walk
//!
//! One chain taken through every operation in sequence:
//!
//! ```text
//! 200  claims (node-0 x2, node-1, 255-byte name)
//! 212  reveals node-0 / node-1        ──▶ 213 registered, expires_in 30
//! 225  reveal test-name               ──▶ 226
//! 242  steal attempt while active     ──▶ Conflict
//! 243  steal after expiry             ──▶ 244 "stolen"
//! 244+ updates, transfers, re-registration of node-1
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::{engine_at_start, history, key, ALICE, BOB};
    use name_node::NameEngine;
    use shared_types::{
        ConflictReason, NameError, NameKey, NameOperation, NameTransaction, RejectKind,
    };

    fn value(engine: &NameEngine, name: &str) -> Vec<u8> {
        engine
            .query_name(&key(name))
            .unwrap()
            .expect("name is registered")
            .value
    }

    fn expires_in(engine: &NameEngine, name: &str) -> i64 {
        engine
            .query_name(&key(name))
            .unwrap()
            .expect("name is registered")
            .expires_in
    }

    #[test]
    fn test_full_registration_walk() {
        let engine = engine_at_start();
        let x520 = "x".repeat(520);
        let x521 = "x".repeat(521);

        // --- claims ---------------------------------------------------------
        let new_a = engine.submit_claim_with_random_salt(&key("node-0"), ALICE).unwrap();
        let new_a_conflict = engine.submit_claim_with_random_salt(&key("node-0"), BOB).unwrap();
        let new_b = engine.submit_claim_with_random_salt(&key("node-1"), BOB).unwrap();

        let longest = NameKey::new(vec![b'x'; 255]);
        engine.submit_claim_with_random_salt(&longest, ALICE).unwrap();
        let too_long = NameKey::new(vec![b'x'; 256]);
        let err = engine.submit_claim_with_random_salt(&too_long, ALICE).unwrap_err();
        assert_eq!(err.kind(), RejectKind::TooLong);

        engine.generate(12).unwrap();
        assert_eq!(engine.tip_height(), 212);

        // --- first registrations -------------------------------------------
        engine.submit_reveal(&new_a, b"value-0", ALICE).unwrap();
        let err = engine.submit_reveal(&new_b, x521.as_bytes(), BOB).unwrap_err();
        assert!(matches!(err, NameError::ValueTooLong { len: 521, max: 520 }));
        engine.submit_reveal(&new_b, x520.as_bytes(), BOB).unwrap();

        let err = engine.submit_reveal(&new_a_conflict, b"stolen", BOB).unwrap_err();
        assert_eq!(
            err,
            NameError::conflict(&key("node-0"), ConflictReason::PendingRegistration)
        );

        assert!(engine.query_name(&key("node-0")).unwrap().is_none());
        assert!(history(&engine, "node-0").is_empty());

        engine.generate(1).unwrap();
        let info = engine.query_name(&key("node-0")).unwrap().unwrap();
        assert_eq!(info.value, b"value-0");
        assert_eq!(info.owner, ALICE);
        assert_eq!(info.height, 213);
        assert_eq!(info.expires_in, 30);
        assert!(!info.expired);
        assert_eq!(history(&engine, "node-0"), vec!["value-0"]);
        assert_eq!(history(&engine, "node-1"), vec![x520.clone()]);

        // --- reveal errors --------------------------------------------------
        let new_test = engine.submit_claim_with_random_salt(&key("test-name"), ALICE).unwrap();
        engine.generate(12).unwrap();
        assert_eq!(engine.tip_height(), 225);

        let mut wrong_name = new_test.clone();
        wrong_name.name = key("test-name-wrong");
        let err = engine.submit_reveal(&wrong_name, b"test-value", ALICE).unwrap_err();
        assert_eq!(err.kind(), RejectKind::BadCommitment);

        let mut wrong_claimant = new_test.clone();
        wrong_claimant.claimant = BOB;
        let err = engine.submit_reveal(&wrong_claimant, b"test-value", BOB).unwrap_err();
        assert_eq!(err.kind(), RejectKind::NotOwner);

        engine.submit_reveal(&new_test, b"test-value", ALICE).unwrap();

        // --- stealing an expired name ---------------------------------------
        let new_steal = engine.submit_claim_with_random_salt(&key("node-0"), BOB).unwrap();
        let new_steal2 = engine.submit_claim_with_random_salt(&key("node-0"), BOB).unwrap();
        engine.generate(17).unwrap();
        assert_eq!(engine.tip_height(), 242);
        assert_eq!(expires_in(&engine, "node-0"), 1);

        let err = engine.submit_reveal(&new_steal, b"stolen", BOB).unwrap_err();
        assert_eq!(err, NameError::conflict(&key("node-0"), ConflictReason::NameActive));

        engine.generate(1).unwrap();
        engine.submit_reveal(&new_steal, b"stolen", BOB).unwrap();

        let info = engine.query_name(&key("node-0")).unwrap().unwrap();
        assert_eq!(info.value, b"value-0");
        assert_eq!(info.expires_in, 0);
        assert!(info.expired);

        engine.generate(1).unwrap();
        let info = engine.query_name(&key("node-0")).unwrap().unwrap();
        assert_eq!(info.value, b"stolen");
        assert_eq!(info.owner, BOB);
        assert_eq!(info.expires_in, 30);
        assert!(!info.expired);
        assert_eq!(history(&engine, "node-0"), vec!["value-0", "stolen"]);

        // A reveal pushed straight into the pool still meets pool policy.
        let steal_again = NameTransaction::new(
            NameOperation::Reveal {
                name: key("node-0"),
                salt: new_steal2.salt,
                value: b"unstolen".to_vec(),
                owner: BOB,
            },
            BOB,
            u64::MAX,
        );
        let err = engine.inject_transaction(steal_again).unwrap_err();
        assert_eq!(err, NameError::conflict(&key("node-0"), ConflictReason::NameActive));
        assert_eq!(engine.pool_status().pending_count, 0);
        assert_eq!(value(&engine, "node-0"), b"stolen");

        // --- updates ---------------------------------------------------------
        let test_name = key("test-name");
        assert_eq!(value(&engine, "test-name"), b"test-value");

        let err = engine
            .submit_update(&test_name, Some(x521.as_bytes()), None, ALICE)
            .unwrap_err();
        assert_eq!(err.kind(), RejectKind::TooLong);
        engine
            .submit_update(&test_name, Some(x520.as_bytes()), None, ALICE)
            .unwrap();
        assert_eq!(value(&engine, "test-name"), b"test-value");

        engine.generate(1).unwrap();
        assert_eq!(value(&engine, "test-name"), x520.as_bytes());
        assert_eq!(expires_in(&engine, "test-name"), 30);
        assert_eq!(history(&engine, "test-name"), vec!["test-value".to_string(), x520.clone()]);

        // Transfer, then the new owner updates.
        engine
            .submit_update(&test_name, Some(b"sent"), Some(BOB), ALICE)
            .unwrap();
        engine.generate(1).unwrap();
        let info = engine.query_name(&test_name).unwrap().unwrap();
        assert_eq!(info.value, b"sent");
        assert_eq!(info.owner, BOB);

        engine
            .submit_update(&test_name, Some(b"updated"), None, BOB)
            .unwrap();
        engine.generate(1).unwrap();
        assert_eq!(value(&engine, "test-name"), b"updated");
        assert_eq!(
            history(&engine, "test-name"),
            vec!["test-value".to_string(), x520.clone(), "sent".into(), "updated".into()]
        );

        // --- update errors ---------------------------------------------------
        let err = engine
            .submit_update(&key("wrong-name"), Some(b"foo"), None, BOB)
            .unwrap_err();
        assert_eq!(err.kind(), RejectKind::NotActive);

        let err = engine
            .submit_update(&test_name, Some(b"stolen?"), None, ALICE)
            .unwrap_err();
        assert_eq!(err.kind(), RejectKind::NotOwner);

        engine.submit_update(&test_name, Some(b"value"), None, BOB).unwrap();
        let err = engine
            .submit_update(&test_name, Some(b"new value"), None, BOB)
            .unwrap_err();
        assert_eq!(err, NameError::conflict(&test_name, ConflictReason::PendingUpdate));

        engine.generate(1).unwrap();
        assert_eq!(engine.tip_height(), 248);
        assert_eq!(value(&engine, "test-name"), b"value");
        assert_eq!(history(&engine, "test-name").len(), 5);

        // --- re-registration of an expired name ------------------------------
        let node1 = key("node-1");
        let info = engine.query_name(&node1).unwrap().unwrap();
        assert!(info.expired);
        let err = engine
            .submit_update(&node1, Some(b"updated value"), None, BOB)
            .unwrap_err();
        assert_eq!(err.kind(), RejectKind::NotActive);

        let new_b2 = engine.submit_claim_with_random_salt(&node1, ALICE).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&new_b2, b"reregistered", ALICE).unwrap();
        engine.generate(1).unwrap();
        assert_eq!(expires_in(&engine, "node-1"), 30);
        engine.generate(7).unwrap();

        let info = engine.query_name(&node1).unwrap().unwrap();
        assert_eq!(info.value, b"reregistered");
        assert_eq!(info.owner, ALICE);
        assert_eq!(info.registered_at, 261);
        assert_eq!(info.expires_in, 23);
        assert_eq!(
            history(&engine, "node-1"),
            vec![x520, "reregistered".to_string()]
        );

        // Transfer with the value left unchanged, then update.
        engine.submit_update(&node1, None, Some(BOB), ALICE).unwrap();
        engine.generate(1).unwrap();
        let info = engine.query_name(&node1).unwrap().unwrap();
        assert_eq!(info.value, b"reregistered");
        assert_eq!(info.owner, BOB);

        engine.submit_update(&node1, Some(b"new value"), None, BOB).unwrap();
        engine.generate(1).unwrap();
        assert_eq!(value(&engine, "node-1"), b"new value");
    }

    #[test]
    fn test_longest_name_registers() {
        let engine = engine_at_start();
        let longest = NameKey::new(vec![b'x'; 255]);
        let handle = engine.submit_claim_with_random_salt(&longest, ALICE).unwrap();
        engine.generate(12).unwrap();

        engine.submit_reveal(&handle, &[b'v'; 520], ALICE).unwrap();
        engine.generate(1).unwrap();

        let info = engine.query_name(&longest).unwrap().unwrap();
        assert_eq!(info.value.len(), 520);
        assert_eq!(info.registered_at, 213);
    }
}
