use std::sync::Arc;

use actix_web::web;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

// ============================================================
// TokenProvider Stub
// ============================================================

/// Accepts any bearer token and attributes it to a fixed user.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: i64,
    token_type: &'static str,
    reject: bool,
}

impl StubTokenProvider {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            token_type: "access",
            reject: false,
        }
    }

    pub fn with_token_type(user_id: i64, token_type: &'static str) -> Self {
        Self {
            user_id,
            token_type,
            reject: false,
        }
    }

    pub fn rejecting() -> Self {
        Self {
            user_id: 0,
            token_type: "access",
            reject: true,
        }
    }

    pub fn into_app_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        if self.reject {
            return Err(TokenError::InvalidSignature);
        }

        Ok(TokenClaims {
            sub: UserId::from(self.user_id),
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "test".to_string(),
            token_type: self.token_type.to_string(),
        })
    }
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

pub fn background() -> (&'static str, &'static str) {
    ("X-Requested-With", "XMLHttpRequest")
}
