//! Content hashing and render identifiers.
//!
//! Rendered audio is identified by the BLAKE3 hash of its bytes, so the same
//! request against the same sample bank always gets the same identifier.

/// Number of hex characters kept in a render identifier.
pub const RENDER_ID_HEX_LEN: usize = 12;

/// Full BLAKE3 hash of `data` as 64 lowercase hex characters.
pub fn content_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Builds a render identifier of the form `{prefix}_{12 hex chars}`.
pub fn render_id(prefix: &str, data: &[u8]) -> String {
    let hash = content_hash(data);
    format!("{}_{}", prefix, &hash[..RENDER_ID_HEX_LEN])
}

/// Checks that an identifier only uses characters safe for file names.
pub fn is_valid_render_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_length() {
        let hash = content_hash(b"RIFF");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_render_id_is_stable() {
        let a = render_id("offline", b"same bytes");
        let b = render_id("offline", b"same bytes");
        assert_eq!(a, b);
        assert_eq!(a.len(), "offline_".len() + RENDER_ID_HEX_LEN);
        assert!(a.starts_with("offline_"));
    }

    #[test]
    fn test_render_id_differs_by_content() {
        assert_ne!(render_id("offline", b"one"), render_id("offline", b"two"));
    }

    #[test]
    fn test_valid_render_id() {
        assert!(is_valid_render_id(&render_id("offline", b"x")));
        assert!(!is_valid_render_id("../etc/passwd"));
        assert!(!is_valid_render_id(""));
    }
}
