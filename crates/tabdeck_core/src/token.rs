//! Random opaque token generation for mock records.

use rand::Rng;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 7;

/// Generate a short base-36 token used as a mock request identifier.
///
/// # Returns
/// A lowercase alphanumeric string of fixed length.
pub fn request_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{request_token, TOKEN_LEN};

    #[test]
    fn request_token_has_expected_shape() {
        let token = request_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn request_tokens_vary() {
        let tokens: std::collections::HashSet<String> =
            (0..16).map(|_| request_token()).collect();
        // 36^7 values; sixteen draws all colliding would mean a broken RNG wire-up.
        assert!(tokens.len() > 1);
    }
}
