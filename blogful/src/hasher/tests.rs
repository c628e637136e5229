use argon2::password_hash::PasswordHashString;
use super::*;

pub fn make_test_hasher() -> ProductionHasher {
    ProductionHasher::new(
        ProductionHasherConfig::new(
            argon2::Params::new(8, 1, 1, Some(32))
                .expect("invalid test params"),
        )
    )
}

#[test]
fn hash_then_check() {
    let hasher = make_test_hasher();
    let hash = hasher.generate_hash("test").unwrap();
    assert!(hash.starts_with("$argon2id$"));
    let hash = PasswordHashString::new(&hash).unwrap();
    assert!(hasher.check_hash(hash.password_hash(), "test").unwrap());
    assert!(!hasher.check_hash(hash.password_hash(), "tset").unwrap());
}

#[test]
fn salts_differ() {
    let hasher = make_test_hasher();
    assert_ne!(
        hasher.generate_hash("test").unwrap(),
        hasher.generate_hash("test").unwrap(),
    );
}

#[test]
fn check_uses_params_from_hash() {
    let old_hasher = make_test_hasher();
    let hash = old_hasher.generate_hash("test").unwrap();
    let new_hasher = ProductionHasher::new(
        ProductionHasherConfig::new(
            argon2::Params::new(16, 2, 1, Some(32)).unwrap(),
        )
    );
    let hash = PasswordHashString::new(&hash).unwrap();
    assert!(new_hasher.check_hash(hash.password_hash(), "test").unwrap());
}
