use proptest::prelude::*;

use hushh_proofs::{classify, ProofError, ProofRegistry, BANDS};
use hushh_types::{Address, Timestamp};

proptest! {
    /// Every valid score lands in the single band whose range contains it.
    #[test]
    fn classify_matches_band_table(score in 0u64..=1000) {
        let band = classify(score).unwrap();
        prop_assert!(band.contains(score as u16));
        let matching = BANDS.iter().filter(|b| b.contains(score as u16)).count();
        prop_assert_eq!(matching, 1);
    }

    /// Scores above 1000 are always rejected.
    #[test]
    fn classify_rejects_above_max(score in 1001u64..) {
        prop_assert_eq!(classify(score), Err(ProofError::OutOfRange { score }));
    }

    /// N sequential issues yield ids 1..=N and total_proofs == N.
    #[test]
    fn sequential_ids_are_dense(scores in prop::collection::vec(0u64..=1000, 0..64)) {
        let mut reg = ProofRegistry::new(Address::derive("owner"));
        let prover = Address::derive("user1");
        for (i, &score) in scores.iter().enumerate() {
            let out = reg.generate_proof(prover, score, Timestamp::new(i as u64)).unwrap();
            prop_assert_eq!(out.value.id, i as u64 + 1);
        }
        prop_assert_eq!(reg.total_proofs(), scores.len() as u64);
        let expected: Vec<u64> = (1..=scores.len() as u64).collect();
        prop_assert_eq!(reg.get_user_proofs(&prover), expected.as_slice());
    }

    /// A batch either issues every score or none of them.
    #[test]
    fn batch_is_atomic(scores in prop::collection::vec(0u64..1200, 0..32)) {
        let mut reg = ProofRegistry::new(Address::derive("owner"));
        let prover = Address::derive("user1");
        let result = reg.batch_generate_proofs(prover, &scores, Timestamp::new(1));
        if scores.iter().all(|&s| s <= 1000) {
            let out = result.unwrap();
            prop_assert_eq!(out.value.len(), scores.len());
            prop_assert_eq!(reg.total_proofs(), scores.len() as u64);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(reg.total_proofs(), 0);
            prop_assert!(reg.get_user_proofs(&prover).is_empty());
        }
    }

    /// Every indexed id points at a record proven by that identity.
    #[test]
    fn user_index_points_at_own_records(
        provers in prop::collection::vec(0usize..4, 1..48),
    ) {
        let names = ["a", "b", "c", "d"];
        let mut reg = ProofRegistry::new(Address::derive("owner"));
        for (i, &p) in provers.iter().enumerate() {
            reg.generate_proof(Address::derive(names[p]), 500, Timestamp::new(i as u64)).unwrap();
        }
        let mut indexed = 0;
        for name in names {
            let who = Address::derive(name);
            let ids = reg.get_user_proofs(&who);
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            for &id in ids {
                prop_assert_eq!(reg.get_proof(id).unwrap().prover, who);
            }
            indexed += ids.len();
        }
        prop_assert_eq!(indexed as u64, reg.total_proofs());
    }
}
