// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies sealed biscuit tokens signed with the service's
/// Ed25519 root key. Tokens carry the identity, its role, and a validity
/// window enforced by embedded time checks.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (&'static str, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.id).into());
    params.insert("uname".to_string(), subject.name.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let code = r#"
        user({uid}, {uname});
        role({urole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        token_type("access");
        check if token_type("access");
    "#;

    (code, params)
}

fn seal_and_serialize(token: Biscuit) -> Result<String, ApplicationError> {
    let sealed = token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    sealed
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
        .num_seconds()
        .max(0)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let builder = Biscuit::builder()
            .code_with_params(code, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let token = builder
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let serialized = seal_and_serialize(token)?;

        Ok(AuthTokenDto {
            token: serialized,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        // Enforce the checks embedded in the token, including the validity window.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        super::claims::parse_claims(facts)
    }
}
