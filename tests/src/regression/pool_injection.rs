//! # Pool Injection
//!
//! Transactions pushed straight into the pool skip ledger validation at
//! admission. Pool policy still applies, and whatever slips through is
//! either deferred or evicted when a block is assembled, never confirmed.

#[cfg(test)]
mod tests {
    use crate::fixtures::{engine_at_start, history, key, ALICE, BOB};
    use nc_01_commitment::{commit, random_salt};
    use shared_types::{
        ConflictReason, NameError, NameOperation, NameTransaction, RejectKind, Salt,
    };

    fn reveal(
        name: &str,
        salt: Salt,
        value: &[u8],
        authorizer: [u8; 20],
        nonce: u64,
    ) -> NameTransaction {
        NameTransaction::new(
            NameOperation::Reveal {
                name: key(name),
                salt,
                value: value.to_vec(),
                owner: authorizer,
            },
            authorizer,
            nonce,
        )
    }

    fn claim(name: &str, salt: Salt, authorizer: [u8; 20], nonce: u64) -> NameTransaction {
        NameTransaction::new(
            NameOperation::Claim {
                commitment: commit(&key(name), &salt),
            },
            authorizer,
            nonce,
        )
    }

    #[test]
    fn test_injected_reveal_of_active_name_rejected() {
        let engine = engine_at_start();
        let handle = engine.submit_claim_with_random_salt(&key("held"), ALICE).unwrap();
        let rival = random_salt();
        engine.inject_transaction(claim("held", rival, BOB, 1)).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&handle, b"alice", ALICE).unwrap();
        engine.generate(1).unwrap();

        let err = engine
            .inject_transaction(reveal("held", rival, b"bob", BOB, 2))
            .unwrap_err();

        assert_eq!(err, NameError::conflict(&key("held"), ConflictReason::NameActive));
        assert_eq!(engine.pool_status().pending_count, 0);
        assert_eq!(history(&engine, "held"), vec!["alice"]);
    }

    #[test]
    fn test_injected_reveal_without_claim_evicted() {
        let engine = engine_at_start();
        let tx = reveal("ghost", random_salt(), b"boo", BOB, 1);
        let txid = engine.inject_transaction(tx).unwrap();
        assert!(engine.is_pooled(&txid));

        let block = engine.generate(1).unwrap().remove(0);

        assert!(block.transactions.is_empty());
        assert!(!engine.is_pooled(&txid));
        assert!(engine.query_name(&key("ghost")).unwrap().is_none());
    }

    #[test]
    fn test_injected_reveal_deferred_until_claim_matures() {
        let engine = engine_at_start();
        let salt = random_salt();
        engine.inject_transaction(claim("patient", salt, ALICE, 1)).unwrap();
        let txid = engine
            .inject_transaction(reveal("patient", salt, b"later", ALICE, 2))
            .unwrap();

        // Claim confirms at 201; the reveal waits in the pool until 213.
        let blocks = engine.generate(12).unwrap();
        assert_eq!(blocks[0].transactions.len(), 1);
        assert!(blocks.iter().skip(1).all(|block| block.transactions.is_empty()));
        assert!(engine.is_pooled(&txid));
        assert!(engine.query_name(&key("patient")).unwrap().is_none());

        engine.generate(1).unwrap();
        assert!(!engine.is_pooled(&txid));
        let info = engine.query_name(&key("patient")).unwrap().unwrap();
        assert_eq!(info.registered_at, 213);
        assert_eq!(info.value, b"later");
    }

    #[test]
    fn test_injected_update_from_non_owner_never_confirms() {
        let engine = engine_at_start();
        let handle = engine.submit_claim_with_random_salt(&key("guarded"), ALICE).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&handle, b"mine", ALICE).unwrap();
        engine.generate(1).unwrap();

        let forged = NameTransaction::new(
            NameOperation::Update {
                name: key("guarded"),
                value: Some(b"yours".to_vec()),
                owner: Some(BOB),
            },
            BOB,
            7,
        );
        let txid = engine.inject_transaction(forged).unwrap();
        engine.generate(1).unwrap();

        assert!(!engine.is_pooled(&txid));
        let info = engine.query_name(&key("guarded")).unwrap().unwrap();
        assert_eq!(info.owner, ALICE);
        assert_eq!(info.value, b"mine");

        // The slot is free again for the real owner.
        engine
            .submit_update(&key("guarded"), Some(b"still mine"), None, ALICE)
            .unwrap();
    }

    #[test]
    fn test_injected_oversized_operations_refused() {
        let engine = engine_at_start();
        let handle = engine.submit_claim_with_random_salt(&key("sized"), ALICE).unwrap();
        engine.generate(12).unwrap();
        engine.submit_reveal(&handle, b"ok", ALICE).unwrap();
        engine.generate(1).unwrap();

        let err = engine
            .inject_transaction(reveal("free", random_salt(), &[b'x'; 521], BOB, 1))
            .unwrap_err();
        assert_eq!(err.kind(), RejectKind::TooLong);

        let oversized_update = NameTransaction::new(
            NameOperation::Update {
                name: key("sized"),
                value: Some(vec![b'x'; 521]),
                owner: None,
            },
            ALICE,
            2,
        );
        let err = engine.inject_transaction(oversized_update).unwrap_err();
        assert_eq!(err, NameError::ValueTooLong { len: 521, max: 520 });

        assert_eq!(engine.pool_status().pending_count, 0);
        assert_eq!(history(&engine, "sized"), vec!["ok"]);
    }
}
