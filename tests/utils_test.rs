use chrono::{DateTime, Utc};
use dailyspin::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_lookback_start_is_24_hours_before_now() {
    let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    assert_eq!(lookback_start(now), 1_700_000_000 - 24 * 60 * 60);
}

#[test]
fn test_lookback_start_clamps_at_epoch() {
    // A clock within the first day of the epoch must not underflow
    let now = DateTime::<Utc>::from_timestamp(3600, 0).unwrap();
    assert_eq!(lookback_start(now), 0);
}

#[test]
fn test_lookback_start_is_deterministic() {
    let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    assert_eq!(lookback_start(now), lookback_start(now));
}
