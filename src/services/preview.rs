//! Preview-before-upload handles.
//!
//! A preview URL is a browser resource handle: every one created must be
//! revoked exactly once, when a newer file replaces it or when the owning
//! component goes away. [`PreviewSlot`] owns at most one live URL and
//! releases it on replacement, on `clear` and on drop.

/// Creates and revokes object URLs for a file source.
pub trait ObjectUrls {
    type Source: ?Sized;

    fn create(&self, source: &Self::Source) -> Option<String>;
    fn revoke(&self, url: &str);
}

pub struct PreviewSlot<U: ObjectUrls> {
    urls: U,
    current: Option<String>,
}

impl<U: ObjectUrls> PreviewSlot<U> {
    pub fn new(urls: U) -> Self {
        Self { urls, current: None }
    }

    /// Revoke the previous preview, then create one for `source`.
    pub fn replace(&mut self, source: &U::Source) -> Option<&str> {
        self.clear();
        self.current = self.urls.create(source);
        self.current.as_deref()
    }

    pub fn clear(&mut self) {
        if let Some(url) = self.current.take() {
            self.urls.revoke(&url);
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

impl<U: ObjectUrls> Drop for PreviewSlot<U> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<U: ObjectUrls> std::fmt::Debug for PreviewSlot<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSlot")
            .field("current", &self.current)
            .finish()
    }
}

/// Object URLs in the browser (`URL.createObjectURL`).
#[cfg(feature = "csr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObjectUrls;

#[cfg(feature = "csr")]
impl ObjectUrls for BrowserObjectUrls {
    type Source = web_sys::Blob;

    fn create(&self, source: &web_sys::Blob) -> Option<String> {
        web_sys::Url::create_object_url_with_blob(source).ok()
    }

    fn revoke(&self, url: &str) {
        if web_sys::Url::revoke_object_url(url).is_err() {
            log::warn!("could not revoke preview url {}", url);
        }
    }
}
