use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use jsonwebtoken::{encode, EncodingKey, Header as JwtHeader};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use models::user::{validate_email, validate_national_id, Account, AccountRole};

use super::domain::{AuthProfile, AuthSession, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: u64,
}

/// Token claims carried by the issued JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub role: AccountRole,
    pub exp: usize,
}

/// Auth business service independent of the web framework.
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self {
        Self { repo, cfg }
    }

    /// Register a new account with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AuthService, service::AuthConfig};
    /// use service::auth::domain::RegisterInput;
    /// use service::auth::repository::in_memory::InMemoryAccounts;
    /// use models::user::AccountRole;
    ///
    /// let repo = Arc::new(InMemoryAccounts::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 12 });
    /// let input = RegisterInput {
    ///     name: "Test".into(),
    ///     email: "user@example.com".into(),
    ///     national_id: "000.000.000-00".into(),
    ///     password: "Secret123".into(),
    ///     role: AccountRole::Adopter,
    /// };
    /// tokio_test::block_on(svc.register(input)).unwrap();
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<(), AuthError> {
        if let Some(existing) = self.repo.find_by_email(&input.email).await? {
            debug!("email taken: {}", existing.email);
            return Err(AuthError::Conflict);
        }
        validate_email(&input.email).map_err(|e| AuthError::Validation(e.to_string()))?;
        if input.role == AccountRole::Adopter {
            validate_national_id(&input.national_id)
                .map_err(|e| AuthError::Validation(e.to_string()))?;
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();

        let account = Account {
            name: input.name,
            email: input.email,
            national_id: input.national_id,
            password_hash: hash,
            role: input.role,
        };
        self.repo.insert(account.clone()).await?;
        info!(email = %account.email, role = ?account.role, "account_registered");
        Ok(())
    }

    /// Authenticate and issue a signed token.
    ///
    /// Any mismatch, wrong email or wrong password, yields the same
    /// `Unauthorized` error so callers cannot probe which field failed.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let account = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&account.password_hash)
            .map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::Unauthorized);
        }

        let exp = (chrono::Utc::now() + chrono::Duration::hours(self.cfg.token_ttl_hours as i64))
            .timestamp() as usize;
        let claims = Claims {
            sub: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
            exp,
        };
        let token = encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;

        info!(email = %account.email, "login_ok");
        Ok(AuthSession {
            profile: AuthProfile {
                name: account.name,
                email: account.email,
                role: account.role,
            },
            token,
        })
    }

    /// Whether an account exists for the email. No mail is sent; delivery
    /// is outside this system's boundary.
    pub async fn recover_password(&self, email: &str) -> Result<bool, AuthError> {
        Ok(self.repo.find_by_email(email).await?.is_some())
    }

    /// Seed the two demo accounts the app ships with. Idempotent:
    /// conflicts on re-seeding are ignored.
    pub async fn seed_demo_accounts(&self) -> Result<(), AuthError> {
        let demos = [
            RegisterInput {
                name: "Tutor Mock".into(),
                email: "tutor@adopetme.com".into(),
                national_id: "000.000.000-00".into(),
                password: "admin123".into(),
                role: AccountRole::Adopter,
            },
            RegisterInput {
                name: "ONG Mock".into(),
                email: "ong@adopetme.com".into(),
                national_id: "00.000.000/0000-00".into(),
                password: "admin123".into(),
                role: AccountRole::Shelter,
            },
        ];
        for input in demos {
            match self.register(input).await {
                Ok(()) | Err(AuthError::Conflict) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
