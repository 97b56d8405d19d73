//! Typed client for the CMS REST backend.
//!
//! One configured [`ApiClient`] is shared by every controller and display
//! component. Once a token is set it is sent as `Authorization: Bearer`.

mod auth;
pub mod envelope;
mod payload;

pub use auth::*;
pub use payload::*;

use std::sync::{Arc, RwLock};

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::common::{ApiError, AppConfig};
use crate::models::Resource;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(config.http_timeout)
            .user_agent(concat!("affpress/", env!("CARGO_PKG_VERSION")));
        let http = builder.build()?;

        Ok(Self {
            http,
            base: config.api_url.clone(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Client against `base` with default settings.
    pub fn with_base(base: &str) -> Result<Self, ApiError> {
        Self::new(&AppConfig::with_api_url(Url::parse(base)?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = token.filter(|t| !t.is_empty());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Absolute URL for an `/api/...` path, keeping any path prefix of the base.
    pub fn url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Resolve an uploaded-file URL for `<img src>`: absolute URLs pass
    /// through, backend-relative ones are joined to the API origin.
    pub fn asset_url(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty()
            || raw.starts_with("http://")
            || raw.starts_with("https://")
            || raw.starts_with("data:")
            || raw.starts_with("blob:")
        {
            return raw.to_string();
        }
        self.url(raw).map(|u| u.to_string()).unwrap_or_else(|_| raw.to_string())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.url(path)?;
        let mut rb = self.http.request(method, url);
        if let Some(token) = self.token() {
            rb = rb.bearer_auth(token);
        }
        Ok(rb)
    }

    async fn execute(&self, rb: RequestBuilder) -> Result<Response, ApiError> {
        let response = rb.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = envelope::extract_message(&body);
        log::warn!("API request failed with {}: {:?}", status, message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Body as JSON; an empty body reads as `null`.
    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.execute(self.request(Method::GET, path)?).await?;
        Self::read_json(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Ok(serde_json::from_value(self.get_value(path).await?)?)
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(self.request(method, path)?.json(body)).await?;
        Ok(serde_json::from_value(Self::read_json(response).await?)?)
    }

    /// Send a JSON or multipart payload, returning the raw JSON answer.
    pub async fn send_payload(&self, method: Method, path: &str, payload: Payload) -> Result<Value, ApiError> {
        let rb = self.request(method, path)?;
        let rb = match payload {
            Payload::Json(value) => rb.json(&value),
            Payload::Multipart(body) => rb.multipart(body.into_form()?),
        };
        let response = self.execute(rb).await?;
        Self::read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, path)?).await?;
        Ok(())
    }

    /// Current singleton document, `None` while it was never saved.
    pub async fn fetch_document<R: Resource>(&self, path: &str) -> Result<Option<R>, ApiError> {
        decode_document(self.get_value(path).await?)
    }

    /// Every document of a collection, in fetch order.
    pub async fn fetch_list<R: Resource>(&self, path: &str) -> Result<Vec<R>, ApiError> {
        decode_list(self.get_value(path).await?)
    }

    /// POST to `path`, returning the created document.
    pub async fn create<R: Resource>(&self, path: &str, payload: Payload) -> Result<R, ApiError> {
        let body = self.send_payload(Method::POST, path, payload).await?;
        let doc = envelope::extract_document(body).unwrap_or(Value::Null);
        Ok(serde_json::from_value::<Option<R>>(doc)?.unwrap_or_default())
    }

    /// PUT to `path`, returning the updated document when the backend echoes it.
    pub async fn update<R: Resource>(&self, path: &str, payload: Payload) -> Result<Option<R>, ApiError> {
        decode_document(self.send_payload(Method::PUT, path, payload).await?)
    }

    /// Upload files to `<base>/upload`; the backend answers `{url}`.
    pub async fn upload(&self, base: &str, files: Vec<FilePart>) -> Result<String, ApiError> {
        let path = format!("{}/upload", base.trim_end_matches('/'));
        let body = self
            .send_payload(Method::POST, &path, Payload::Multipart(MultipartBody::files_only(files)))
            .await?;
        envelope::extract_upload_url(&body).ok_or(ApiError::MissingUploadUrl)
    }
}

/// Saved document in a response body; `None` for `{}`, `null` or no `_id`.
pub fn decode_document<R: Resource>(body: Value) -> Result<Option<R>, ApiError> {
    let Some(doc) = envelope::extract_document(body) else {
        return Ok(None);
    };
    let doc: R = serde_json::from_value(doc)?;
    Ok(doc.exists().then_some(doc))
}

pub fn decode_list<R: Resource>(body: Value) -> Result<Vec<R>, ApiError> {
    envelope::extract_list(body)
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(ApiError::from))
        .collect()
}

/// `<base>/<id>`.
pub fn item_path(base: &str, id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_keeps_base_prefix() {
        let client = ApiClient::with_base("https://cms.example.com/backend/").unwrap();
        assert_eq!(
            client.url("/api/aff-notice").unwrap().as_str(),
            "https://cms.example.com/backend/api/aff-notice"
        );
    }

    #[test]
    fn asset_url_resolves_relative_uploads() {
        let client = ApiClient::with_base("https://cms.example.com").unwrap();
        assert_eq!(client.asset_url("/uploads/a.png"), "https://cms.example.com/uploads/a.png");
        assert_eq!(client.asset_url("https://cdn.x/a.png"), "https://cdn.x/a.png");
        assert_eq!(client.asset_url(""), "");
    }

    #[test]
    fn token_is_shared_between_clones() {
        let client = ApiClient::with_base("http://localhost:5000").unwrap();
        let clone = client.clone();
        client.set_token(Some("abc".into()));
        assert_eq!(clone.token().as_deref(), Some("abc"));
        clone.set_token(Some(String::new()));
        assert_eq!(client.token(), None);
    }

    #[test]
    fn item_path_joins_id() {
        assert_eq!(item_path("/api/promotions/", "42"), "/api/promotions/42");
    }
}
