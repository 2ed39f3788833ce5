//! Property tests for identity tokens, password digests and ownership rules

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use socialnet::backend::auth::credentials::{hash_password, verify_password, CredentialError, MIN_COST};
use socialnet::backend::auth::policy::{authorize, OwnershipRule};
use socialnet::backend::auth::sessions::{TokenError, TokenService, TOKEN_LIFETIME_HOURS};
use socialnet::shared::SecretKey;

fn service(secret: &str) -> TokenService {
    TokenService::new(&SecretKey::new(secret))
}

fn instant(seconds: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().unwrap()
}

proptest! {
    #[test]
    fn issued_tokens_verify_to_their_subject(subject in any::<u64>()) {
        let tokens = service("property-secret");
        let token = tokens.issue(subject).unwrap();
        prop_assert_eq!(tokens.verify(&token), Ok(subject));
    }

    #[test]
    fn tokens_expire_exactly_at_lifetime(
        subject in any::<u64>(),
        issued in 1_000_000_000i64..2_000_000_000i64,
        elapsed in 0i64..(2 * TOKEN_LIFETIME_HOURS * 3600),
    ) {
        let tokens = service("property-secret");
        let token = tokens.issue_at(subject, instant(issued)).unwrap();
        let result = tokens.verify_at(&token, instant(issued) + Duration::seconds(elapsed));

        if elapsed < TOKEN_LIFETIME_HOURS * 3600 {
            prop_assert_eq!(result, Ok(subject));
        } else {
            prop_assert_eq!(result, Err(TokenError::Expired));
        }
    }

    #[test]
    fn other_secrets_never_verify(
        subject in any::<u64>(),
        first in "[a-z0-9]{1,24}",
        second in "[a-z0-9]{1,24}",
    ) {
        prop_assume!(first != second);
        let token = service(&first).issue(subject).unwrap();
        prop_assert_eq!(service(&second).verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn garbage_never_verifies(input in "\\PC{0,64}") {
        prop_assert!(service("property-secret").verify(&input).is_err());
    }

    #[test]
    fn self_mutation_and_anti_reflexive_are_opposites(subject in any::<u64>(), target in any::<u64>()) {
        let self_mutation = authorize(OwnershipRule::SelfMutation, subject, target).is_ok();
        let authorship = authorize(OwnershipRule::Authorship, subject, target).is_ok();
        let follow = authorize(OwnershipRule::AntiReflexive, subject, target).is_ok();

        prop_assert_eq!(self_mutation, subject == target);
        prop_assert_eq!(authorship, subject == target);
        prop_assert_eq!(follow, subject != target);
    }
}

proptest! {
    // bcrypt is slow even at the minimum cost
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn digests_verify_their_plaintext(password in "[a-zA-Z0-9 !?]{1,32}") {
        let first = hash_password(&password, MIN_COST).unwrap();
        let second = hash_password(&password, MIN_COST).unwrap();

        prop_assert_ne!(&first, &second);
        prop_assert!(verify_password(&first, &password).is_ok());
        prop_assert!(verify_password(&second, &password).is_ok());
    }

    #[test]
    fn digests_reject_other_plaintexts(
        password in "[a-zA-Z0-9]{1,32}",
        other in "[a-zA-Z0-9]{1,32}",
    ) {
        prop_assume!(password != other);
        let digest = hash_password(&password, MIN_COST).unwrap();
        prop_assert_eq!(verify_password(&digest, &other), Err(CredentialError::Mismatch));
    }
}
