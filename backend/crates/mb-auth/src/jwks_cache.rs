use crate::{AuthError, Result as AuthErrorResult};

use std::time::{Duration, Instant};

use jsonwebtoken::DecodingKey;
use jsonwebtoken::jwk::JwkSet;
use log::{debug, info};
use reqwest::Client as ReqwestClient;
use tokio::sync::RwLock;

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

enum Lookup {
    Found(DecodingKey),
    Unknown,
    Refetch,
}

/// Google's signing keys, fetched over HTTP and kept for `ttl`.
///
/// A `kid` missing from a fresh cache triggers a refetch to pick up key
/// rotation, but at most once per `min_refetch`. Inside that window unknown
/// keys fail without touching the network.
pub struct JwksCache {
    url: String,
    ttl: Duration,
    min_refetch: Duration,
    client: ReqwestClient,
    cached: RwLock<Option<CachedKeys>>,
}

impl JwksCache {
    pub fn new(
        url: impl Into<String>,
        ttl: Duration,
        min_refetch: Duration,
        client: ReqwestClient,
    ) -> Self {
        Self {
            url: url.into(),
            ttl,
            min_refetch,
            client,
            cached: RwLock::new(None),
        }
    }

    /// Decoding key for `kid`, refreshing the set when stale or missing the key
    pub async fn decoding_key(&self, kid: &str) -> AuthErrorResult<DecodingKey> {
        match self.lookup(&*self.cached.read().await, kid)? {
            Lookup::Found(key) => return Ok(key),
            Lookup::Unknown => return Err(AuthError::unknown_key(kid)),
            Lookup::Refetch => {}
        }

        let mut cached = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock
        match self.lookup(&cached, kid)? {
            Lookup::Found(key) => return Ok(key),
            Lookup::Unknown => return Err(AuthError::unknown_key(kid)),
            Lookup::Refetch => {}
        }

        let keys = self.fetch().await?;
        let key = match keys.find(kid) {
            Some(jwk) => DecodingKey::from_jwk(jwk).map_err(AuthError::from_jwt),
            None => Err(AuthError::unknown_key(kid)),
        };
        *cached = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });
        key
    }

    fn lookup(&self, cached: &Option<CachedKeys>, kid: &str) -> AuthErrorResult<Lookup> {
        let Some(entry) = cached else {
            return Ok(Lookup::Refetch);
        };

        let age = entry.fetched_at.elapsed();
        if age >= self.ttl {
            return Ok(Lookup::Refetch);
        }

        match entry.keys.find(kid) {
            Some(jwk) => Ok(Lookup::Found(
                DecodingKey::from_jwk(jwk).map_err(AuthError::from_jwt)?,
            )),
            None if age < self.min_refetch => {
                debug!("Unknown key id {}, keys refreshed {}s ago", kid, age.as_secs());
                Ok(Lookup::Unknown)
            }
            None => Ok(Lookup::Refetch),
        }
    }

    async fn fetch(&self) -> AuthErrorResult<JwkSet> {
        debug!("Fetching Google JWKS from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::upstream(format!("JWKS endpoint answered HTTP {}", status)));
        }

        let keys: JwkSet = response.json().await?;
        info!("Loaded {} Google signing key(s)", keys.keys.len());
        Ok(keys)
    }
}
