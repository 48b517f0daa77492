use crate::{
    FORM_CONTENT_TYPE, MoodleError, MoodleResult, REST_FORMAT, REST_PATH, RpcOutcome, RpcParams,
    SiteInfo, TOKEN_PATH,
};

use mb_core::SessionToken;

use std::fmt;
use std::io;
use std::time::Duration;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Response};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// Connection settings for [`MoodleClient`]
#[derive(Debug, Clone)]
pub struct MoodleClientConfig {
    pub base_url: String,
    /// Web-service name for `/login/token.php`
    pub service: String,
    pub rpc_timeout: Duration,
    pub file_timeout: Duration,
}

/// A proxied file: the headers Moodle reported and the body as it arrives
pub struct FileDownload {
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub body: BoxStream<'static, io::Result<Bytes>>,
}

impl fmt::Debug for FileDownload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileDownload")
            .field("content_type", &self.content_type)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// `/login/token.php` error codes that mean the username/password was refused.
/// Anything else (maintenance, disabled service) says nothing about the password.
const CREDENTIAL_ERROR_CODES: &[&str] = &["invalidlogin"];

#[derive(Deserialize)]
struct TokenResponse {
    token: Option<String>,
    error: Option<String>,
    errorcode: Option<String>,
}

/// HTTP client for the Moodle REST web services.
///
/// One call in, one decoded outcome out. No retries.
pub struct MoodleClient {
    base_url: Url,
    service: String,
    file_timeout: Duration,
    client: ReqwestClient,
}

impl MoodleClient {
    pub fn new(config: MoodleClientConfig) -> MoodleResult<Self> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| MoodleError::invalid_url(format!("moodle base URL: {}", e)))?;

        let client = ReqwestClient::builder()
            .timeout(config.rpc_timeout)
            .build()
            .map_err(MoodleError::from_reqwest)?;

        Ok(Self {
            base_url,
            service: config.service,
            file_timeout: config.file_timeout,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Invoke a web-service function with the caller's session token.
    ///
    /// A blank token fails before any network I/O.
    pub async fn call(&self, token: &str, function: &str, params: RpcParams) -> MoodleResult<Value> {
        let token = token.trim();
        if token.is_empty() {
            return Err(MoodleError::missing_token());
        }

        debug!("Moodle RPC {} ({} params)", function, params.len());

        let body = params.encode_with(&[
            ("wstoken", token),
            ("wsfunction", function),
            ("moodlewsrestformat", REST_FORMAT),
        ]);

        let response = self
            .client
            .post(self.endpoint(REST_PATH))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let value = Self::read_json(response).await?;
        RpcOutcome::from_value(value).into_result()
    }

    /// `core_webservice_get_site_info` for the token's owner
    pub async fn site_info(&self, token: &str) -> MoodleResult<SiteInfo> {
        let value = self
            .call(token, "core_webservice_get_site_info", RpcParams::new())
            .await?;
        serde_json::from_value(value).map_err(|e| MoodleError::decode(format!("site info: {}", e)))
    }

    /// Trade username/password for a session token via `/login/token.php`.
    ///
    /// Sent as a POST form so credentials stay out of URLs and access logs.
    pub async fn request_token(&self, username: &str, password: &str) -> MoodleResult<SessionToken> {
        let body = RpcParams::new().encode_with(&[
            ("username", username),
            ("password", password),
            ("service", self.service.as_str()),
        ]);

        let response = self
            .client
            .post(self.endpoint(TOKEN_PATH))
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let value = Self::read_json(response).await?;
        let parsed: TokenResponse = serde_json::from_value(value)
            .map_err(|e| MoodleError::decode(format!("token response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(match parsed.errorcode.as_deref() {
                Some(code) if CREDENTIAL_ERROR_CODES.contains(&code) => {
                    MoodleError::invalid_credentials(error)
                }
                _ => MoodleError::remote(error, parsed.errorcode),
            });
        }

        match parsed.token {
            Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
            _ => Err(MoodleError::decode("token response carried neither token nor error")),
        }
    }

    /// Parse and check a file URL supplied by a client.
    ///
    /// Only URLs on the Moodle origin are accepted, since the session token
    /// gets attached to them.
    pub fn resolve_file_url(&self, raw: &str) -> MoodleResult<Url> {
        let url = Url::parse(raw.trim())
            .map_err(|e| MoodleError::invalid_url(format!("file URL: {}", e)))?;

        if url.origin() != self.base_url.origin() {
            return Err(MoodleError::invalid_url(
                "file URL must be on the Moodle site",
            ));
        }

        Ok(url)
    }

    /// Start downloading a Moodle file on behalf of the token's owner.
    ///
    /// Returns once the headers arrive; the body is read as the caller polls it.
    pub async fn download(&self, token: &str, raw_url: &str) -> MoodleResult<FileDownload> {
        let token = token.trim();
        if token.is_empty() {
            return Err(MoodleError::missing_token());
        }

        let mut url = self.resolve_file_url(raw_url)?;
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != "token")
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("token", token);

        debug!("Moodle file download {}", url.path());

        // reqwest errors carry the URL, which now holds the token
        let response = self
            .client
            .get(url)
            .timeout(self.file_timeout)
            .send()
            .await
            .map_err(|e| MoodleError::from_reqwest(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MoodleError::status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let content_length = response.content_length();
        let body = response
            .bytes_stream()
            .map_err(|e| io::Error::other(e.without_url()))
            .boxed();

        Ok(FileDownload {
            content_type,
            content_length,
            body,
        })
    }

    /// Read a JSON body. Moodle answers void functions with an empty body or `null`.
    async fn read_json(response: Response) -> MoodleResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if text.trim().is_empty() {
            return if status.is_success() {
                Ok(Value::Null)
            } else {
                Err(MoodleError::status(status.as_u16()))
            };
        }

        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(MoodleError::status(status.as_u16())),
            Err(e) => Err(MoodleError::decode(e.to_string())),
        }
    }
}
