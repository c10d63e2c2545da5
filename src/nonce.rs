use rand::{distributions::Alphanumeric, Rng};

const NONCE_LEN: usize = 8;

/// Generate the random suffix that keeps concurrent log streams apart.
/// Not meant to be a secret, any source of randomness works.
pub fn generate<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect()
}

/// Name of the log stream that one invocation writes into.
pub fn stream_name(prefix: &str, nonce: &str) -> String {
    format!("{prefix}-{nonce}")
}
