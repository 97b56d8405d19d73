use crate::api::ApiClient;
use crate::common::{ApiError, ValidationErrors, GENERIC_FAILURE};
use crate::log_api_err;
use crate::models::{Admin, AdminCreate, AdminUpdate, ProfileUpdate};
use crate::services::notify::Notifier;
use crate::services::session::Session;
use crate::services::validation::Validate;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Admin management for the mother account.
#[derive(Debug, Clone)]
pub struct AdminDirectory {
    client: ApiClient,
    notifier: Notifier,
    admins: Vec<Admin>,
}

impl AdminDirectory {
    pub fn new(client: ApiClient, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            admins: Vec::new(),
        }
    }

    pub fn admins(&self) -> &[Admin] {
        &self.admins
    }

    pub async fn load(&mut self) -> Result<&[Admin], ApiError> {
        match self.client.list_admins().await {
            Ok(admins) => {
                self.admins = admins;
                Ok(&self.admins)
            }
            Err(e) => {
                log_api_err!("listing admins", &e);
                self.notifier.error(e.user_message("Failed to load admins"));
                Err(e)
            }
        }
    }

    pub async fn create(&mut self, create: &AdminCreate) -> Result<Admin, FormError> {
        create.validate()?;
        match self.client.create_admin(create).await {
            Ok(admin) => {
                log::info!("Created {} admin {}", admin.role, admin.email);
                self.notifier.success("Admin created successfully");
                self.admins.push(admin.clone());
                Ok(admin)
            }
            Err(e) => {
                log_api_err!("creating admin", &e, &create.email);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
                Err(e.into())
            }
        }
    }

    pub async fn update(&mut self, id: &str, update: &AdminUpdate) -> Result<Admin, FormError> {
        update.validate()?;
        match self.client.update_admin(id, update).await {
            Ok(mut admin) => {
                if admin.id.is_none() {
                    admin.id = Some(id.to_string());
                }
                if let Some(slot) = self.admins.iter_mut().find(|a| a.id.as_deref() == Some(id)) {
                    *slot = admin.clone();
                }
                self.notifier.success("Admin updated successfully");
                Ok(admin)
            }
            Err(e) => {
                log_api_err!("updating admin", &e, id);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
                Err(e.into())
            }
        }
    }

    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        match self.client.delete_admin(id).await {
            Ok(()) => {
                self.admins.retain(|a| a.id.as_deref() != Some(id));
                self.notifier.success("Admin deleted");
                Ok(())
            }
            Err(e) => {
                log_api_err!("deleting admin", &e, id);
                self.notifier.error(e.user_message(GENERIC_FAILURE));
                Err(e)
            }
        }
    }
}

/// Save the logged-in admin's profile and refresh the cached admin.
pub async fn save_profile(
    session: &mut Session,
    client: &ApiClient,
    notifier: &Notifier,
    update: &ProfileUpdate,
) -> Result<Admin, FormError> {
    update.validate()?;
    if update.is_empty() {
        notifier.info("Nothing to update");
        return Ok(session.admin().cloned().unwrap_or_default());
    }

    match client.update_profile(update).await {
        Ok(admin) => {
            let admin = if admin.has_email() {
                admin
            } else {
                let mut current = session.admin().cloned().unwrap_or_default();
                if let Some(email) = &update.email {
                    current.email = email.trim().to_string();
                }
                current
            };
            session.set_admin(admin.clone());
            notifier.success("Profile updated successfully");
            Ok(admin)
        }
        Err(e) => {
            log_api_err!("updating profile", &e);
            notifier.error(e.user_message(GENERIC_FAILURE));
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[tokio::test]
    async fn invalid_create_never_reaches_the_network() {
        // Nothing listens on port 9; only validation can make this return quickly.
        let client = ApiClient::with_base("http://127.0.0.1:9").unwrap();
        let mut directory = AdminDirectory::new(client, Notifier::new());
        let create = AdminCreate {
            email: "not-an-email".into(),
            password: "secret123".into(),
            role: Role::Sub,
            permissions: vec![],
        };
        let err = directory.create(&create).await.unwrap_err();
        assert!(matches!(err, FormError::Invalid(ref v) if v.get("email").is_some()));
        assert!(directory.admins().is_empty());
    }
}
