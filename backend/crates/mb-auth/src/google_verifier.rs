use crate::{AuthError, GOOGLE_ISSUERS, GoogleClaims, JwksCache, OAUTH_SCOPES, Result as AuthErrorResult};

use mb_core::{
    BridgeError, CodeExchange, IdentityVerifier, Result as BridgeResult, VerifiedIdentity,
};

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, Validation, decode, decode_header};
use log::{info, warn};
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::{Url, form_urlencoded};

/// Google OAuth client settings
#[derive(Debug, Clone)]
pub struct GoogleVerifierConfig {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub jwks_url: String,
    pub jwks_cache_ttl: Duration,
    /// Shortest gap between refetches caused by an unknown `kid`
    pub jwks_min_refetch: Duration,
    pub http_timeout: Duration,
}

#[derive(Deserialize)]
struct TokenEndpointResponse {
    id_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Verifies Google ID tokens locally against Google's published keys
pub struct GoogleVerifier {
    config: GoogleVerifierConfig,
    validation: Validation,
    jwks: JwksCache,
    client: ReqwestClient,
}

impl GoogleVerifier {
    pub fn new(config: GoogleVerifierConfig) -> AuthErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(AuthError::from_reqwest)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_audience(&[config.client_id.as_str()]);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let jwks = JwksCache::new(
            config.jwks_url.clone(),
            config.jwks_cache_ttl,
            config.jwks_min_refetch,
            client.clone(),
        );

        Ok(Self {
            config,
            validation,
            jwks,
            client,
        })
    }

    /// Validate an ID token and return its claims
    pub async fn validate(&self, id_token: &str) -> AuthErrorResult<GoogleClaims> {
        let header = decode_header(id_token).map_err(AuthError::from_jwt)?;
        let kid = header.kid.ok_or_else(AuthError::missing_key_id)?;
        let key = self.jwks.decoding_key(&kid).await?;

        let token_data =
            decode::<GoogleClaims>(id_token, &key, &self.validation).map_err(AuthError::from_jwt)?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Trade an authorization code for tokens and return the raw ID token
    pub async fn redeem_code(&self, code: &str) -> AuthErrorResult<String> {
        let client_secret = self
            .config
            .client_secret
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AuthError::not_configured("client secret is required for the code flow"))?;

        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("code", code)
            .append_pair("client_id", &self.config.client_id)
            .append_pair("client_secret", client_secret)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("grant_type", "authorization_code")
            .finish();

        let response = self
            .client
            .post(&self.config.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let parsed: TokenEndpointResponse = serde_json::from_str(&text).map_err(|e| {
            AuthError::upstream(format!("token endpoint answered HTTP {}: {}", status, e))
        })?;

        if let Some(error) = parsed.error {
            let detail = parsed.error_description.unwrap_or_default();
            return Err(AuthError::code_rejected(format!("{} {}", error, detail).trim().to_string()));
        }

        parsed
            .id_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::upstream("token endpoint returned no id_token"))
    }

    /// Consent screen URL with `openid email profile` scopes
    pub fn consent_url(&self) -> AuthErrorResult<String> {
        let mut url = Url::parse(&self.config.auth_url)
            .map_err(|e| AuthError::not_configured(format!("auth_url: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", OAUTH_SCOPES)
            .append_pair("access_type", "offline")
            .append_pair("prompt", "select_account");

        Ok(url.into())
    }
}

#[async_trait]
impl IdentityVerifier for GoogleVerifier {
    fn authorization_url(&self) -> BridgeResult<String> {
        Ok(self.consent_url()?)
    }

    async fn verify_token(&self, id_token: &str) -> BridgeResult<VerifiedIdentity> {
        match self.validate(id_token).await {
            Ok(claims) => {
                let identity = claims.into_identity();
                info!("Google identity verified: {}", identity.email);
                Ok(identity)
            }
            Err(e) => {
                warn!("Google ID token rejected: {}", e);
                Err(BridgeError::from(e))
            }
        }
    }

    async fn exchange_code(&self, code: &str) -> BridgeResult<CodeExchange> {
        let id_token = self.redeem_code(code).await.map_err(|e| {
            warn!("Google code exchange failed: {}", e);
            BridgeError::from(e)
        })?;

        let identity = self.verify_token(&id_token).await?;

        Ok(CodeExchange { identity, id_token })
    }
}
