use ed25519_dalek::SigningKey;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Hex-encoded ed25519 key pair. Generated fresh for every deployment and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: String,
    pub secret: String,
}

/// Generates a random ed25519 signing key pair.
pub fn generate_random_sign_keys() -> KeyPair {
    let mut secret = [0u8; 32];
    rand::rng().fill_bytes(&mut secret);

    let signing_key = SigningKey::from_bytes(&secret);
    KeyPair {
        public: hex::encode(signing_key.verifying_key().to_bytes()),
        secret: hex::encode(secret),
    }
}
