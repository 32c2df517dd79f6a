use std::sync::Arc;

use async_trait::async_trait;
use auth::policy;
use auth::AuthGate;
use auth::PasswordHasher;
use auth::TokenClass;
use auth::TokenCodec;
use chrono::Duration;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::NewAccount;
use crate::domain::account::models::SignupCommand;
use crate::domain::account::models::TokenPair;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::SessionServicePort;

/// Domain service for credential checks and token issuance.
///
/// Orchestrates the password hasher, token codec, and auth gate over
/// the injected repository. Stateless: nothing is tracked between
/// calls, which also means a rotated-away refresh token stays valid
/// until its own expiry (there is no server-side revocation list).
pub struct SessionService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    auth_gate: AuthGate,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<AR> SessionService<AR>
where
    AR: AccountRepository,
{
    /// Create a new session service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `token_codec` - Codec configured with the signing secret
    /// * `access_ttl` - Access token lifetime
    /// * `refresh_ttl` - Refresh token lifetime
    pub fn new(
        repository: Arc<AR>,
        token_codec: TokenCodec,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            auth_gate: AuthGate::new(token_codec.clone()),
            token_codec,
            access_ttl,
            refresh_ttl,
        }
    }

    fn mint_pair(&self, account_id: AccountId) -> Result<TokenPair, AccountError> {
        let access_token =
            self.token_codec
                .encode(account_id.0, TokenClass::Access, self.access_ttl)?;
        let refresh_token =
            self.token_codec
                .encode(account_id.0, TokenClass::Refresh, self.refresh_ttl)?;

        Ok(TokenPair {
            account_id,
            access_token,
            refresh_token,
        })
    }
}

#[async_trait]
impl<AR> SessionServicePort for SessionService<AR>
where
    AR: AccountRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<Account, AccountError> {
        if command.password != command.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }

        policy::validate(&command.password)?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = self
            .repository
            .insert(NewAccount {
                first_name: command.first_name,
                last_name: command.last_name,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, "Account registered");

        Ok(account)
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AccountError> {
        // Unknown email and wrong password surface the same error
        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &account.password_hash) {
            return Err(AccountError::InvalidCredentials);
        }

        self.mint_pair(account.id)
    }

    async fn refresh(&self, authorization: Option<&str>) -> Result<TokenPair, AccountError> {
        let claims = self
            .auth_gate
            .authorize(authorization, TokenClass::Refresh)?;

        // The consumed refresh token is not revoked; it remains valid
        // until its own expiry.
        self.mint_pair(AccountId(claims.sub))
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use auth::GateError;
    use auth::PolicyViolation;
    use auth::TokenError;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::EmailAddress;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn insert(&self, account: NewAccount) -> Result<Account, AccountError>;
            async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
        }
    }

    fn service(repository: MockTestAccountRepository) -> SessionService<MockTestAccountRepository> {
        SessionService::new(
            Arc::new(repository),
            TokenCodec::new(SECRET),
            Duration::minutes(15),
            Duration::minutes(4320),
        )
    }

    fn account_with_hash(id: i64, email: &str, password_hash: String) -> Account {
        Account {
            id: AccountId(id),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn signup_command(password: &str, confirm: &str) -> SignupCommand {
        SignupCommand {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: EmailAddress::new("ada@example.com".to_string()).unwrap(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_signup_success() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_insert()
            .withf(|account| {
                account.email.as_str() == "ada@example.com"
                    && account.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|account| {
                Ok(Account {
                    id: AccountId(1),
                    first_name: account.first_name,
                    last_name: account.last_name,
                    email: account.email,
                    password_hash: account.password_hash,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
            });

        let service = service(repository);

        let result = service.signup(signup_command("Str0ng_pass!", "Str0ng_pass!")).await;
        assert!(result.is_ok());

        let account = result.unwrap();
        assert_eq!(account.id, AccountId(1));
        // Plaintext is never stored
        assert!(account.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_signup_password_mismatch() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_insert().times(0);

        let service = service(repository);

        let result = service.signup(signup_command("Str0ng_pass!", "different")).await;
        assert!(matches!(result, Err(AccountError::PasswordMismatch)));
    }

    #[tokio::test]
    async fn test_signup_weak_password() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_insert().times(0);

        let service = service(repository);

        let result = service.signup(signup_command("alllowercase1!", "alllowercase1!")).await;
        assert!(matches!(
            result,
            Err(AccountError::WeakPassword(PolicyViolation::MissingUppercase))
        ));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let mut repository = MockTestAccountRepository::new();

        repository.expect_insert().times(1).returning(|account| {
            Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ))
        });

        let service = service(repository);

        let result = service.signup(signup_command("Str0ng_pass!", "Str0ng_pass!")).await;
        assert!(matches!(result, Err(AccountError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success_mints_decodable_pair() {
        let mut repository = MockTestAccountRepository::new();

        let hash = PasswordHasher::new().hash("Str0ng_pass!").unwrap();
        let account = account_with_hash(7, "ada@example.com", hash);
        repository
            .expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = service(repository);

        let pair = service
            .login("ada@example.com", "Str0ng_pass!")
            .await
            .expect("Login failed");

        assert_eq!(pair.account_id, AccountId(7));

        // Both tokens decode and carry the same subject with their own class
        let codec = TokenCodec::new(SECRET);
        let access = codec.decode(&pair.access_token).unwrap();
        let refresh = codec.decode(&pair.refresh_token).unwrap();
        assert_eq!(access.sub, 7);
        assert_eq!(refresh.sub, 7);
        assert_eq!(access.token_class, TokenClass::Access);
        assert_eq!(refresh.token_class, TokenClass::Refresh);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let result = service.login("nobody@example.com", "Str0ng_pass!").await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestAccountRepository::new();

        let hash = PasswordHasher::new().hash("Str0ng_pass!").unwrap();
        let account = account_with_hash(7, "ada@example.com", hash);
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = service(repository);

        // Same error as an unknown email
        let result = service.login("ada@example.com", "wrong_password").await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_mints_new_pair() {
        let service = service(MockTestAccountRepository::new());

        let codec = TokenCodec::new(SECRET);
        let refresh_token = codec
            .encode(7, TokenClass::Refresh, Duration::days(3))
            .unwrap();
        let header = format!("Bearer {refresh_token}");

        let pair = service
            .refresh(Some(&header))
            .await
            .expect("Refresh failed");

        assert_eq!(pair.account_id, AccountId(7));
        let access = codec.decode(&pair.access_token).unwrap();
        assert_eq!(access.sub, 7);
        assert_eq!(access.token_class, TokenClass::Access);
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token() {
        let service = service(MockTestAccountRepository::new());

        let codec = TokenCodec::new(SECRET);
        let access_token = codec
            .encode(7, TokenClass::Access, Duration::minutes(15))
            .unwrap();
        let header = format!("Bearer {access_token}");

        let result = service.refresh(Some(&header)).await;
        assert!(matches!(
            result,
            Err(AccountError::Credential(GateError::WrongTokenClass {
                expected: TokenClass::Refresh
            }))
        ));
    }

    #[tokio::test]
    async fn test_refresh_rejects_expired_token() {
        let service = service(MockTestAccountRepository::new());

        let codec = TokenCodec::new(SECRET);
        let refresh_token = codec
            .encode(7, TokenClass::Refresh, Duration::minutes(-5))
            .unwrap();
        let header = format!("Bearer {refresh_token}");

        let result = service.refresh(Some(&header)).await;
        assert!(matches!(
            result,
            Err(AccountError::Credential(GateError::Token(
                TokenError::Expired
            )))
        ));
    }

    #[tokio::test]
    async fn test_refresh_missing_header() {
        let service = service(MockTestAccountRepository::new());

        let result = service.refresh(None).await;
        assert!(matches!(
            result,
            Err(AccountError::Credential(GateError::MissingCredential))
        ));
    }

    #[tokio::test]
    async fn test_get_account_success() {
        let mut repository = MockTestAccountRepository::new();

        let account = account_with_hash(7, "ada@example.com", "$argon2id$test_hash".to_string());
        let account_id = account.id;
        repository
            .expect_find_by_id()
            .withf(move |id| *id == account_id)
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = service(repository);

        let result = service.get_account(&AccountId(7)).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().email.as_str(), "ada@example.com");
    }

    #[tokio::test]
    async fn test_get_account_not_found() {
        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let result = service.get_account(&AccountId(404)).await;
        assert!(matches!(result, Err(AccountError::NotFound(_))));
    }
}
