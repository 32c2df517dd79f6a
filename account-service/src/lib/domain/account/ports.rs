use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::SignupCommand;
use crate::domain::account::models::TokenPair;

/// Port for session and account operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Checks password confirmation and strength policy, hashes the
    /// password, and persists the credential.
    ///
    /// # Errors
    /// * `PasswordMismatch` - Password and confirmation differ
    /// * `WeakPassword` - Password fails the strength policy
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: SignupCommand) -> Result<Account, AccountError>;

    /// Verify credentials and mint an access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    ///   (indistinguishable from the error alone)
    /// * `Token` - Token minting failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AccountError>;

    /// Rotate tokens: consume a valid refresh token and mint a fresh pair.
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if present
    ///
    /// # Errors
    /// * `Credential` - Missing/malformed header, bad signature, expired
    ///   token, or a non-refresh token presented
    /// * `Token` - Token minting failed
    async fn refresh(&self, authorization: Option<&str>) -> Result<TokenPair, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Account does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account and return it with its assigned identifier.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve an account by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;

    /// Retrieve an account by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
