//! Segmented RSA: private-key encryption and public-key decryption.
//!
//! A single PKCS#1 v1.5 operation on a 2048-bit key carries at most 245 bytes,
//! so payloads are processed in fixed-size segments. The segment sizes are
//! part of the wire format shared with the platform and the other SDKs of
//! this protocol family, and are not derived from the key at runtime:
//!
//! - encryption splits plaintext bytes into 234-byte chunks, each producing
//!   one 256-byte block (block type 1 padding, as OpenSSL's
//!   `RSA_private_encrypt`);
//! - decryption splits the decoded ciphertext into 256-byte blocks and strips
//!   the type 1 padding after the public-key operation.
//!
//! Any failing segment fails the whole operation.

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};

use crate::crypto::base64_url;
use crate::error::CryptoError;

/// Plaintext bytes per encrypted segment.
pub const MAX_ENCRYPT_BLOCK: usize = 234;

/// Ciphertext bytes per decrypted segment (2048-bit modulus).
pub const MAX_DECRYPT_BLOCK: usize = 256;

/// Minimum number of `0xff` filler bytes in a type 1 padded block.
const MIN_PADDING_LEN: usize = 8;

/// Encrypt `plaintext` segment by segment with the private key and return the
/// concatenated blocks as URL-safe Base64.
///
/// Empty input produces an empty string.
pub fn encrypt_with_private_key(
    plaintext: &[u8],
    key: &RsaPrivateKey,
) -> Result<String, CryptoError> {
    let mut encrypted =
        Vec::with_capacity(plaintext.len().div_ceil(MAX_ENCRYPT_BLOCK) * MAX_DECRYPT_BLOCK);

    for chunk in plaintext.chunks(MAX_ENCRYPT_BLOCK) {
        let block = key
            .sign(Pkcs1v15Sign::new_unprefixed(), chunk)
            .map_err(|e| CryptoError::Encrypt(e.to_string()))?;
        encrypted.extend_from_slice(&block);
    }

    Ok(base64_url::encode(&encrypted))
}

/// Decode URL-safe Base64 ciphertext and decrypt it block by block with the
/// public key.
pub fn decrypt_with_public_key(
    ciphertext: &str,
    key: &RsaPublicKey,
) -> Result<Vec<u8>, CryptoError> {
    let encrypted = base64_url::decode(ciphertext)?;
    let mut plaintext = Vec::with_capacity(encrypted.len());

    for (index, block) in encrypted.chunks(MAX_DECRYPT_BLOCK).enumerate() {
        let chunk = decrypt_block(block, key).map_err(|reason| CryptoError::InvalidBlock {
            offset: index * MAX_DECRYPT_BLOCK,
            reason,
        })?;
        plaintext.extend_from_slice(&chunk);
    }

    Ok(plaintext)
}

fn decrypt_block(block: &[u8], key: &RsaPublicKey) -> Result<Vec<u8>, String> {
    let size = key.size();
    if block.len() != size {
        return Err(format!(
            "block is {} bytes, key modulus is {} bytes",
            block.len(),
            size
        ));
    }

    let c = BigUint::from_bytes_be(block);
    if &c >= key.n() {
        return Err("block is not smaller than the modulus".to_string());
    }

    let m = c.modpow(key.e(), key.n()).to_bytes_be();
    let mut em = vec![0u8; size - m.len()];
    em.extend_from_slice(&m);

    unpad_type1(&em).map(<[u8]>::to_vec)
}

/// Strip PKCS#1 v1.5 block type 1 padding: `00 01 ff..ff 00 data`.
fn unpad_type1(em: &[u8]) -> Result<&[u8], String> {
    if em.len() < MIN_PADDING_LEN + 3 || em[0] != 0x00 || em[1] != 0x01 {
        return Err("invalid padding header".to_string());
    }

    let filler = em[2..].iter().take_while(|&&b| b == 0xff).count();
    let separator = 2 + filler;
    if filler < MIN_PADDING_LEN || em.get(separator) != Some(&0x00) {
        return Err("invalid padding".to_string());
    }

    Ok(&em[separator + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::{parse_private_key, parse_public_key};
    use rand::RngCore;

    const MERCHANT_PRIVATE: &str = include_str!("../../tests/fixtures/merchant_private.pem");
    const MERCHANT_PUBLIC: &str = include_str!("../../tests/fixtures/merchant_public.pem");
    const PLATFORM_PRIVATE: &str = include_str!("../../tests/fixtures/platform_private.pem");
    const PLATFORM_PUBLIC: &str = include_str!("../../tests/fixtures/platform_public.pem");
    const SEGMENTED_CIPHER: &str = include_str!("../../tests/fixtures/platform_segmented.cipher");
    const SEGMENTED_PLAIN: &[u8] = include_bytes!("../../tests/fixtures/platform_segmented.plain");

    fn merchant_keys() -> (RsaPrivateKey, RsaPublicKey) {
        (
            parse_private_key(MERCHANT_PRIVATE).unwrap(),
            parse_public_key(MERCHANT_PUBLIC).unwrap(),
        )
    }

    fn random_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    }

    #[test]
    fn test_round_trip_across_segment_boundaries() {
        let (private, public) = merchant_keys();
        for len in [0, 1, 233, 234, 235, 468, 10_000] {
            let plaintext = random_bytes(len);
            let ciphertext = encrypt_with_private_key(&plaintext, &private).unwrap();
            let decrypted = decrypt_with_public_key(&ciphertext, &public).unwrap();
            assert_eq!(decrypted, plaintext, "round trip failed for {} bytes", len);
        }
    }

    #[test]
    fn test_ciphertext_length_is_one_block_per_segment() {
        let (private, _) = merchant_keys();
        for len in [1, 233, 234, 235, 468, 469, 10_000] {
            let ciphertext = encrypt_with_private_key(&random_bytes(len), &private).unwrap();
            let raw = base64_url::decode(&ciphertext).unwrap();
            assert_eq!(raw.len(), len.div_ceil(MAX_ENCRYPT_BLOCK) * MAX_DECRYPT_BLOCK);
        }
    }

    #[test]
    fn test_empty_plaintext_has_no_blocks() {
        let (private, public) = merchant_keys();
        let ciphertext = encrypt_with_private_key(b"", &private).unwrap();
        assert_eq!(ciphertext, "");
        assert!(decrypt_with_public_key(&ciphertext, &public).unwrap().is_empty());
    }

    #[test]
    fn test_multibyte_text_is_split_on_bytes() {
        let (private, public) = merchant_keys();
        // 3-byte code points straddle the 234-byte boundary.
        let text = "钱包".repeat(100);
        let ciphertext = encrypt_with_private_key(text.as_bytes(), &private).unwrap();
        let decrypted = decrypt_with_public_key(&ciphertext, &public).unwrap();
        assert_eq!(String::from_utf8(decrypted).unwrap(), text);
    }

    #[test]
    fn test_decrypts_openssl_segmented_fixture() {
        let public = parse_public_key(PLATFORM_PUBLIC).unwrap();
        let decrypted = decrypt_with_public_key(SEGMENTED_CIPHER.trim(), &public).unwrap();
        assert_eq!(decrypted, SEGMENTED_PLAIN);
    }

    #[test]
    fn test_encryption_matches_openssl_byte_for_byte() {
        // Block type 1 padding is deterministic.
        let private = parse_private_key(PLATFORM_PRIVATE).unwrap();
        let ciphertext = encrypt_with_private_key(SEGMENTED_PLAIN, &private).unwrap();
        assert_eq!(ciphertext, SEGMENTED_CIPHER.trim());
    }

    #[test]
    fn test_wrong_public_key_fails() {
        let (private, _) = merchant_keys();
        let platform_public = parse_public_key(PLATFORM_PUBLIC).unwrap();
        let ciphertext = encrypt_with_private_key(b"{\"code\":0}", &private).unwrap();
        assert!(matches!(
            decrypt_with_public_key(&ciphertext, &platform_public),
            Err(CryptoError::InvalidBlock { offset: 0, .. })
        ));
    }

    #[test]
    fn test_truncated_final_block_fails() {
        let (private, public) = merchant_keys();
        let ciphertext = encrypt_with_private_key(&random_bytes(300), &private).unwrap();
        let mut raw = base64_url::decode(&ciphertext).unwrap();
        raw.truncate(raw.len() - 10);
        let truncated = base64_url::encode(&raw);
        assert!(matches!(
            decrypt_with_public_key(&truncated, &public),
            Err(CryptoError::InvalidBlock { offset: 256, .. })
        ));
    }

    #[test]
    fn test_corrupted_block_fails() {
        let (private, public) = merchant_keys();
        let ciphertext = encrypt_with_private_key(b"hello", &private).unwrap();
        let mut raw = base64_url::decode(&ciphertext).unwrap();
        raw[100] ^= 0x5a;
        assert!(decrypt_with_public_key(&base64_url::encode(&raw), &public).is_err());
    }

    #[test]
    fn test_invalid_base64_fails() {
        let (_, public) = merchant_keys();
        assert!(matches!(
            decrypt_with_public_key("***", &public),
            Err(CryptoError::Base64(_))
        ));
    }

    #[test]
    fn test_unpad_type1() {
        let mut em = vec![0x00, 0x01];
        em.extend([0xff; 8]);
        em.push(0x00);
        em.extend(b"abc");
        assert_eq!(unpad_type1(&em).unwrap(), b"abc");

        let mut short_filler = vec![0x00, 0x01];
        short_filler.extend([0xff; 7]);
        short_filler.push(0x00);
        short_filler.extend(b"abcd");
        assert!(unpad_type1(&short_filler).is_err());

        let mut type2 = em.clone();
        type2[1] = 0x02;
        assert!(unpad_type1(&type2).is_err());
    }
}
