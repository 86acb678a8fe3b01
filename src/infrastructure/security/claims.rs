// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::identity::{IdentityId, Role};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Rebuild the acting identity from the fact dump of a verified token.
/// Every claim is mandatory; a token missing one was not issued by us.
pub fn parse_claims(
    facts: Vec<biscuit_auth::builder::Fact>,
) -> ApplicationResult<AuthenticatedUser> {
    let ctx = ClaimsContext::from_facts(facts);

    let id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let id = IdentityId::new(id).map_err(ApplicationError::from)?;
    let name = ctx
        .name
        .ok_or_else(|| ApplicationError::unauthorized("missing user name"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    Ok(AuthenticatedUser {
        id,
        name,
        role,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    name: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<biscuit_auth::builder::Fact>) -> Self {
        let mut ctx = ClaimsContext::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx
    }

    fn apply_predicate(&mut self, predicate: biscuit_auth::builder::Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(&predicate),
            "role" => self.handle_role(&predicate),
            "issued_at" => self.issued_at = date_term(&predicate),
            "expires_at" => self.expires_at = date_term(&predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if predicate.terms.len() == 2 {
            if let biscuit_auth::builder::Term::Integer(id) = predicate.terms[0] {
                self.user_id = Some(id);
            }
            if let biscuit_auth::builder::Term::Str(name) = predicate.terms[1].clone() {
                self.name = Some(name);
            }
        }
    }

    fn handle_role(&mut self, predicate: &biscuit_auth::builder::Predicate) {
        if let Some(biscuit_auth::builder::Term::Str(role_name)) = predicate.terms.first() {
            if let Ok(parsed) = role_name.parse() {
                self.role = Some(parsed);
            }
        }
    }
}

fn date_term(predicate: &biscuit_auth::builder::Predicate) -> Option<SystemTime> {
    match predicate.terms.first() {
        Some(biscuit_auth::builder::Term::Date(seconds)) => {
            Some(UNIX_EPOCH + Duration::from_secs(*seconds))
        }
        _ => None,
    }
}
