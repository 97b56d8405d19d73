//! Form-to-resource binders.
//!
//! [`CrudBinder`] drives a singleton config document: GET on mount, POST on
//! the first save, PUT to `<path>/<id>` afterwards, DELETE to forget it.
//! [`CollectionBinder`] does the same per element of a list resource.
//! Every operation reports through the shared [`Notifier`]; a failure leaves
//! the caller's form state untouched.

use std::marker::PhantomData;

use crate::api::{item_path, ApiClient, FilePart, Payload};
use crate::common::{ApiError, GENERIC_FAILURE};
use crate::log_api_err;
use crate::models::Resource;
use crate::services::notify::Notifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created { id: String },
    Updated { id: String },
}

impl SaveOutcome {
    pub fn id(&self) -> &str {
        match self {
            Self::Created { id } | Self::Updated { id } => id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    pub fn message(&self, label: &str) -> String {
        match self {
            Self::Created { .. } => format!("{label} created successfully"),
            Self::Updated { .. } => format!("{label} updated successfully"),
        }
    }
}

/// Body of a save: the document without its `_id`, JSON or multipart.
fn body_of<R: Resource>(doc: &R, files: Vec<FilePart>) -> Result<Payload, ApiError> {
    let mut doc = doc.clone();
    doc.set_id(None);
    Payload::document(&doc, files)
}

/// POST `files` to `<base>/upload`; failures are logged and toasted.
pub async fn upload_to(
    client: &ApiClient,
    notifier: &Notifier,
    base: &str,
    files: Vec<FilePart>,
) -> Result<String, ApiError> {
    let fields: Vec<String> = files.iter().map(|f| f.field.clone()).collect();
    match client.upload(base, files).await {
        Ok(url) => Ok(url),
        Err(e) => {
            log_api_err!(format!("uploading to {}", base), &e, fields);
            notifier.error(e.user_message("Upload failed"));
            Err(e)
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrudBinder<R: Resource> {
    client: ApiClient,
    notifier: Notifier,
    path: String,
    doc_id: Option<String>,
    loading: bool,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CrudBinder<R> {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        Self::at(client, notifier, R::PATH)
    }

    /// Binder for a resource sharing `R`'s shape under another path.
    pub fn at(client: ApiClient, notifier: Notifier, path: impl Into<String>) -> Self {
        Self {
            client,
            notifier,
            path: path.into(),
            doc_id: None,
            loading: false,
            _resource: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Id of the saved document; `None` until the first successful save.
    pub fn doc_id(&self) -> Option<&str> {
        self.doc_id.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Current document, or `R::default()` when none was saved yet.
    pub async fn load(&mut self) -> Result<R, ApiError> {
        self.loading = true;
        let result = self.client.fetch_document::<R>(&self.path).await;
        self.loading = false;

        match result {
            Ok(Some(doc)) => {
                self.doc_id = doc.id().map(str::to_string);
                Ok(doc)
            }
            Ok(None) => {
                self.doc_id = None;
                Ok(R::default())
            }
            Err(e) => {
                log_api_err!(format!("loading {}", self.path), &e);
                self.notifier
                    .error(e.user_message(&format!("Failed to load {}", R::LABEL.to_lowercase())));
                Err(e)
            }
        }
    }

    /// Create on the first save, update the same id afterwards.
    pub async fn save(&mut self, doc: &R, files: Vec<FilePart>) -> Result<SaveOutcome, ApiError> {
        self.loading = true;
        let result = self.send(doc, files).await;
        self.loading = false;

        match &result {
            Ok(outcome) => {
                log::info!("{} {}", self.path, if outcome.is_created() { "created" } else { "updated" });
                self.notifier.success(outcome.message(R::LABEL));
            }
            Err(e) => {
                log_api_err!(format!("saving {}", self.path), e);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
            }
        }
        result
    }

    async fn send(&mut self, doc: &R, files: Vec<FilePart>) -> Result<SaveOutcome, ApiError> {
        let payload = body_of(doc, files)?;
        match self.doc_id.clone() {
            Some(id) => {
                self.client
                    .update::<R>(&item_path(&self.path, &id), payload)
                    .await?;
                Ok(SaveOutcome::Updated { id })
            }
            None => {
                let created = self.client.create::<R>(&self.path, payload).await?;
                match created.id().filter(|id| !id.is_empty()) {
                    Some(id) => {
                        self.doc_id = Some(id.to_string());
                        Ok(SaveOutcome::Created { id: id.to_string() })
                    }
                    None => {
                        log::warn!("{} create answered without an _id", self.path);
                        Ok(SaveOutcome::Created { id: String::new() })
                    }
                }
            }
        }
    }

    /// Delete the saved document and go back to "not yet created".
    pub async fn delete(&mut self) -> Result<(), ApiError> {
        let Some(id) = self.doc_id.clone() else {
            self.notifier.info(format!("{} has not been saved yet", R::LABEL));
            return Ok(());
        };

        self.loading = true;
        let result = self.client.delete(&item_path(&self.path, &id)).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.doc_id = None;
                self.notifier.success(format!("{} deleted", R::LABEL));
                Ok(())
            }
            Err(e) => {
                log_api_err!(format!("deleting {}", self.path), &e);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
                Err(e)
            }
        }
    }

    /// Upload files to `<path>/upload` and return the stored URL.
    pub async fn upload(&self, files: Vec<FilePart>) -> Result<String, ApiError> {
        upload_to(&self.client, &self.notifier, &self.path, files).await
    }
}

/// Binder for list resources (promotions, sliders, floating social items).
#[derive(Debug, Clone)]
pub struct CollectionBinder<R: Resource> {
    client: ApiClient,
    notifier: Notifier,
    path: String,
    items: Vec<R>,
    loading: bool,
}

impl<R: Resource> CollectionBinder<R> {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        Self::at(client, notifier, R::PATH)
    }

    pub fn at(client: ApiClient, notifier: Notifier, path: impl Into<String>) -> Self {
        Self {
            client,
            notifier,
            path: path.into(),
            items: Vec::new(),
            loading: false,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load(&mut self) -> Result<&[R], ApiError> {
        self.loading = true;
        let result = self.client.fetch_list::<R>(&self.path).await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.items = items;
                Ok(&self.items)
            }
            Err(e) => {
                log_api_err!(format!("loading {}", self.path), &e);
                self.notifier
                    .error(e.user_message(&format!("Failed to load {}", R::LABEL.to_lowercase())));
                Err(e)
            }
        }
    }

    /// POST a new item or PUT an existing one, keeping the local list in step.
    pub async fn save_item(&mut self, item: &R, files: Vec<FilePart>) -> Result<SaveOutcome, ApiError> {
        self.loading = true;
        let result = self.send(item, files).await;
        self.loading = false;

        match &result {
            Ok(outcome) => {
                self.notifier.success(outcome.message(R::LABEL));
            }
            Err(e) => {
                log_api_err!(format!("saving item of {}", self.path), e);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
            }
        }
        result
    }

    async fn send(&mut self, item: &R, files: Vec<FilePart>) -> Result<SaveOutcome, ApiError> {
        let payload = body_of(item, files)?;
        match item.id().filter(|id| !id.is_empty()).map(str::to_string) {
            Some(id) => {
                let echoed = self
                    .client
                    .update::<R>(&item_path(&self.path, &id), payload)
                    .await?;
                let mut updated = echoed.unwrap_or_else(|| item.clone());
                updated.set_id(Some(id.clone()));
                match self.items.iter_mut().find(|i| i.id() == Some(id.as_str())) {
                    Some(slot) => *slot = updated,
                    None => self.items.push(updated),
                }
                Ok(SaveOutcome::Updated { id })
            }
            None => {
                let created = self.client.create::<R>(&self.path, payload).await?;
                let id = created.id().unwrap_or_default().to_string();
                self.items.push(created);
                Ok(SaveOutcome::Created { id })
            }
        }
    }

    pub async fn delete_item(&mut self, id: &str) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.client.delete(&item_path(&self.path, id)).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.items.retain(|i| i.id() != Some(id));
                self.notifier.success(format!("{} deleted", R::LABEL));
                Ok(())
            }
            Err(e) => {
                log_api_err!(format!("deleting {}/{}", self.path, id), &e);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
                Err(e)
            }
        }
    }

    pub async fn upload(&self, files: Vec<FilePart>) -> Result<String, ApiError> {
        upload_to(&self.client, &self.notifier, &self.path, files).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AffNotice;

    #[test]
    fn outcome_messages() {
        let created = SaveOutcome::Created { id: "1".into() };
        let updated = SaveOutcome::Updated { id: "1".into() };
        assert_eq!(created.message("Notice"), "Notice created successfully");
        assert_eq!(updated.message("Notice"), "Notice updated successfully");
        assert_eq!(updated.id(), "1");
    }

    #[test]
    fn save_body_never_carries_the_id() {
        let doc = AffNotice {
            id: Some("66ff".into()),
            text_en: "Hi".into(),
            ..Default::default()
        };
        let Payload::Json(body) = body_of(&doc, vec![]).unwrap() else {
            panic!("expected json");
        };
        assert!(body.get("_id").is_none());
        assert_eq!(body["textEn"], "Hi");
    }
}
