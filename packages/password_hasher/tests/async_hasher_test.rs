//! Async wrappers resolve to the same outcomes as the synchronous hasher

use password_hasher::{HashAlgorithmKind, HasherFactory, HasherOptions, logging};

fn factory(algorithm: HashAlgorithmKind) -> HasherFactory {
    HasherFactory::with_options(HasherOptions::new(algorithm).with_iterations(16))
}

#[tokio::test]
async fn test_async_round_trip_all_algorithms() {
    logging::init_test();

    for algorithm in HashAlgorithmKind::ALL {
        let hasher = factory(algorithm).build_async().expect("valid options");
        let hashed = hasher
            .hash_password("password 1")
            .await
            .expect("hashing should succeed");

        assert_eq!(hashed.len(), hasher.hasher().encoded_len());
        assert!(hasher.verify_hashed_password(hashed.clone(), "password 1").await.unwrap());
        assert!(!hasher.verify_hashed_password(hashed, "password 2").await.unwrap());
    }
}

#[tokio::test]
async fn test_async_matches_sync_verification() {
    let hasher = factory(HashAlgorithmKind::Sha256).build_async().unwrap();
    let stored = hasher.hasher().hash_password("shared secret");

    assert!(hasher.verify_hashed_password(stored.as_str(), "shared secret").await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_async_calls() {
    let hasher = factory(HashAlgorithmKind::Sha512).build_async().unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let hasher = hasher.clone();
            tokio::spawn(async move {
                let password = format!("password {i}");
                let hashed = hasher.hash_password(password.clone()).await?;
                hasher.verify_hashed_password(hashed, password).await
            })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap().unwrap());
    }
}

#[tokio::test]
async fn test_async_malformed_hash_error() {
    let hasher = factory(HashAlgorithmKind::Sha1).build_async().unwrap();
    let err = hasher
        .verify_hashed_password("@@not-base64@@", "password 1")
        .await
        .unwrap_err();
    assert!(err.is_malformed_input());
}
