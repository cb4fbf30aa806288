//! Credential checking for the forecast API.
//!
//! Authorization is a pure function of the presented credentials and the
//! stored credential: there is no session and no ambient "logged in" flag.
//! Passwords are stored as lowercase hex SHA-256 digests.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Username and plain-text password presented by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The presented username.
    pub username: String,
    /// The presented password.
    pub password: String,
}

/// A stored account: username plus hex SHA-256 of the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    /// The account username.
    pub username: String,
    /// Lowercase hex SHA-256 digest of the password.
    pub password_sha256: String,
}

/// Hashes a password to lowercase hex SHA-256.
///
/// # Examples
///
/// ```
/// use grant_forecast::auth::hash_password;
///
/// assert_eq!(
///     hash_password("laredo123"),
///     "893a5ae88a0b5bc8551009ea6bb9211cc307ac4563bde02fb823bf48a985407b"
/// );
/// ```
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns true when the credentials match the stored account.
pub fn verify_credentials(credentials: &Credentials, stored: &StoredCredential) -> bool {
    credentials.username == stored.username
        && hash_password(&credentials.password).eq_ignore_ascii_case(&stored.password_sha256)
}
