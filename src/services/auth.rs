//! Password digests and stateless bearer tokens.
//!
//! A token is `<hex signature>:<email>`. The signature is an HMAC-SHA256,
//! keyed by the server secret, over the email and the password digest on
//! file when the token was issued. Tokens never expire; they stop
//! verifying as soon as either the password or the server secret changes.

use std::fmt;
use std::str::FromStr;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_LEN: usize = 32;

/// Hex SHA-256 of the password.
///
/// Unsalted and fast: identical passwords share a digest and the digest is
/// cheap to brute-force. Kept for compatibility with existing accounts.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has no ':' separator")]
    MissingSeparator,

    #[error("token signature is not {} hex bytes", SIGNATURE_LEN)]
    MalformedSignature,

    #[error("token carries no email")]
    MissingEmail,

    #[error("server secret cannot key the token MAC")]
    InvalidSecret,
}

#[derive(Clone, PartialEq, Eq)]
pub struct SignedToken {
    signature: Vec<u8>,
    email: String,
}

impl SignedToken {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn encode(&self) -> String {
        format!("{}:{}", hex::encode(&self.signature), self.email)
    }

    /// Splits on the first ':' only; the hex signature never contains one,
    /// so emails with ':' survive intact.
    pub fn decode(raw: &str) -> Result<Self, TokenError> {
        let (signature, email) = raw.split_once(':').ok_or(TokenError::MissingSeparator)?;
        let signature = hex::decode(signature).map_err(|_| TokenError::MalformedSignature)?;
        if signature.len() != SIGNATURE_LEN {
            return Err(TokenError::MalformedSignature);
        }
        if email.is_empty() {
            return Err(TokenError::MissingEmail);
        }
        Ok(Self {
            signature,
            email: email.to_string(),
        })
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

// Keeps signatures out of logs.
impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedToken")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl FromStr for SignedToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// Issues and checks tokens with the process-wide secret.
#[derive(Clone)]
pub struct TokenSigner {
    keyed: HmacSha256,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        let keyed = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| TokenError::InvalidSecret)?;
        Ok(Self { keyed })
    }

    fn mac(&self, email: &str, password_hash: &str) -> HmacSha256 {
        let mut mac = self.keyed.clone();
        mac.update(email.as_bytes());
        mac.update(b":");
        mac.update(password_hash.as_bytes());
        mac
    }

    pub fn issue(&self, email: &str, password_hash: &str) -> SignedToken {
        SignedToken {
            signature: self.mac(email, password_hash).finalize().into_bytes().to_vec(),
            email: email.to_string(),
        }
    }

    /// Constant-time check of `token` against the digest currently on file.
    pub fn verify(&self, token: &SignedToken, password_hash: &str) -> bool {
        self.mac(&token.email, password_hash)
            .verify_slice(&token.signature)
            .is_ok()
    }
}
