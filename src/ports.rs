use crate::user::User;

/// Port for user lookup, backed by whatever persistence the host provides.
///
/// Synchronous by contract; implementations that block on I/O govern their
/// own deadlines. Must be callable concurrently.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    /// Retrieve a user by numeric identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// The user, or None if no user has this id
    fn find_by_id(&self, id: i64) -> Option<User>;

    /// Retrieve a user whose username matches the first argument or whose
    /// email matches the second. Either field may match either argument.
    ///
    /// # Arguments
    /// * `username` - Candidate username
    /// * `email` - Candidate email address
    ///
    /// # Returns
    /// The matching user, or None
    fn find_by_username_or_email(&self, username: &str, email: &str) -> Option<User>;
}

/// Port for password verification.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync {
    /// Check a plaintext candidate against a stored hash.
    ///
    /// Implementations must compare in constant time; a malformed stored
    /// hash is a plain mismatch, not an error.
    ///
    /// # Arguments
    /// * `plaintext` - Candidate password
    /// * `hash` - Stored password hash
    ///
    /// # Returns
    /// True if the candidate matches the hash
    fn matches(&self, plaintext: &str, hash: &str) -> bool;
}
