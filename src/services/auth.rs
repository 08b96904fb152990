//! Authentication service: password hashing, JWT issuance, login, and
//! registration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::admin::{Admin, RegisterAdmin};

/// Maximum failed login attempts before account lockout.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Lockout duration in minutes after exceeding max failed attempts.
const LOCKOUT_DURATION_MINUTES: i64 = 15;

/// JWT claims embedded in access and refresh tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub admin_id: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token pair returned on successful login.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Hash a plaintext password with argon2id.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// Verify a plaintext password against a stored hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::Internal(format!("Invalid hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate a JWT token pair (access + refresh).
pub fn generate_tokens(
    admin: &Admin,
    jwt_secret: &str,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
) -> Result<TokenPair, AppError> {
    let now = Utc::now();
    let encoding_key = EncodingKey::from_secret(jwt_secret.as_bytes());

    let access_claims = Claims {
        sub: admin.email.clone(),
        admin_id: admin.id.to_string(),
        token_type: "access".to_string(),
        exp: (now + Duration::seconds(access_expiry_secs)).timestamp(),
        iat: now.timestamp(),
    };

    let refresh_claims = Claims {
        token_type: "refresh".to_string(),
        exp: (now + Duration::seconds(refresh_expiry_secs)).timestamp(),
        ..access_claims.clone()
    };

    let access_token = jsonwebtoken::encode(&Header::default(), &access_claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    let refresh_token = jsonwebtoken::encode(&Header::default(), &refresh_claims, &encoding_key)
        .map_err(|e| AppError::Internal(format!("Token generation failed: {e}")))?;

    Ok(TokenPair {
        access_token,
        refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: access_expiry_secs,
    })
}

/// Validate a JWT and return the claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let decoding_key = DecodingKey::from_secret(jwt_secret.as_bytes());
    let validation = Validation::default();

    jsonwebtoken::decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Authenticate an admin by email and password, returning a token pair.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &str,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
) -> Result<TokenPair, AppError> {
    let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::Unauthorized)?;

    // Check account lockout
    if let Some(locked_until) = admin.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Unauthorized);
        }
    }

    // Verify password
    if !verify_password(password, &admin.password_hash)? {
        let new_attempts = admin.failed_login_attempts + 1;
        if new_attempts >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + Duration::minutes(LOCKOUT_DURATION_MINUTES);
            sqlx::query(
                "UPDATE admins SET failed_login_attempts = $1, locked_until = $2 WHERE id = $3",
            )
            .bind(new_attempts)
            .bind(lock_until)
            .bind(admin.id)
            .execute(pool)
            .await?;
        } else {
            sqlx::query("UPDATE admins SET failed_login_attempts = $1 WHERE id = $2")
                .bind(new_attempts)
                .bind(admin.id)
                .execute(pool)
                .await?;
        }
        return Err(AppError::Unauthorized);
    }

    // Reset failed attempts on successful login
    sqlx::query(
        "UPDATE admins SET failed_login_attempts = 0, locked_until = NULL WHERE id = $1",
    )
    .bind(admin.id)
    .execute(pool)
    .await?;

    generate_tokens(&admin, jwt_secret, access_expiry_secs, refresh_expiry_secs)
}

/// Refresh an access token using a valid refresh token.
pub async fn refresh_token(
    pool: &PgPool,
    refresh_token_str: &str,
    jwt_secret: &str,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
) -> Result<TokenPair, AppError> {
    let claims = validate_token(refresh_token_str, jwt_secret)?;

    if claims.token_type != "refresh" {
        return Err(AppError::Unauthorized);
    }

    let admin_id: Uuid = claims.admin_id.parse().map_err(|_| AppError::Unauthorized)?;

    let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
        .bind(admin_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::Unauthorized)?;

    generate_tokens(&admin, jwt_secret, access_expiry_secs, refresh_expiry_secs)
}

/// Register a new admin account, gated by the primary admin's
/// `allow_registration` toggle.
pub async fn register(pool: &PgPool, input: &RegisterAdmin) -> Result<Admin, AppError> {
    let registration_open: Option<bool> = sqlx::query_scalar(
        "SELECT allow_registration FROM admins WHERE is_primary = true LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    // First admin ever becomes the primary; afterwards the toggle decides.
    let is_first = registration_open.is_none();
    if !is_first && registration_open != Some(true) {
        return Err(AppError::Forbidden(
            "Registration is currently disabled".to_string(),
        ));
    }

    let password_hash = hash_password(&input.password)?;

    let admin = sqlx::query_as::<_, Admin>(
        r#"
        INSERT INTO admins (name, email, password_hash, is_primary)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(input.name.trim())
    .bind(&input.email)
    .bind(&password_hash)
    .bind(is_first)
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email is already in use".to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(admin)
}

/// Find an admin by ID.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Admin, AppError> {
    sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_admin() -> Admin {
        Admin {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@dashboard.com".to_string(),
            password_hash: "hash".to_string(),
            is_primary: true,
            allow_registration: false,
            failed_login_attempts: 0,
            locked_until: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn password_hash_and_verify() {
        let password = "SecurePassword123!";
        let hash = hash_password(password).unwrap();
        assert_ne!(hash, password);
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("WrongPassword", &hash).unwrap());
    }

    #[test]
    fn token_generation_and_validation() {
        let admin = sample_admin();
        let secret = "test-secret-key-for-jwt";
        let tokens = generate_tokens(&admin, secret, 900, 604800).unwrap();
        assert_eq!(tokens.token_type, "Bearer");
        assert_eq!(tokens.expires_in, 900);

        let claims = validate_token(&tokens.access_token, secret).unwrap();
        assert_eq!(claims.sub, "admin@dashboard.com");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.admin_id, admin.id.to_string());

        let refresh_claims = validate_token(&tokens.refresh_token, secret).unwrap();
        assert_eq!(refresh_claims.token_type, "refresh");
    }

    #[test]
    fn invalid_token_rejected() {
        let result = validate_token("garbage.token.here", "secret");
        assert!(result.is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let admin = sample_admin();
        let secret = "test-secret";
        // Generate a token that expired well beyond the leeway window
        let tokens = generate_tokens(&admin, secret, -3600, -3600).unwrap();
        let result = validate_token(&tokens.access_token, secret);
        assert!(result.is_err());
    }

    #[test]
    fn token_pair_serializes_camel_case() {
        let admin = sample_admin();
        let tokens = generate_tokens(&admin, "secret", 900, 1800).unwrap();
        let json = serde_json::to_value(&tokens).unwrap();
        assert!(json.get("accessToken").is_some());
        assert!(json.get("refreshToken").is_some());
        assert_eq!(json["expiresIn"], 900);
    }
}
