use crate::common::ValidationErrors;
use crate::models::{AdminCreate, AdminUpdate, AffCommissionConfig, AffNotice, FloatingSocialItem, LoginRequest, ProfileUpdate, Promotion};
use crate::services::permissions::keys;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_NOTICE_SPEED_SEC: u32 = 300;

/// Client-side form checks; failures are shown next to the field and never sent.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > 64 || domain.is_empty() {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    Ok(())
}

/// Absolute http(s) link or a site-relative path.
pub fn validate_link(link: &str) -> bool {
    let link = link.trim();
    if link.starts_with('/') {
        return !link.starts_with("//");
    }
    url::Url::parse(link).is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
}

fn require(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} is required"));
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !validate_email(&self.email) {
            errors.add("email", "Enter a valid email address");
        }
        require(&mut errors, "password", &self.password, "Password");
        errors.into_result()
    }
}

impl Validate for AdminCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !validate_email(&self.email) {
            errors.add("email", "Enter a valid email address");
        }
        if let Err(msg) = validate_password(&self.password) {
            errors.add("password", msg);
        }
        if let Some(unknown) = self.permissions.iter().find(|p| !keys::ALL.contains(&p.as_str())) {
            errors.add("permissions", format!("Unknown permission '{unknown}'"));
        }
        errors.into_result()
    }
}

impl Validate for AdminUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.email.as_deref().is_some_and(|e| !validate_email(e)) {
            errors.add("email", "Enter a valid email address");
        }
        if let Some(password) = &self.password {
            if let Err(msg) = validate_password(password) {
                errors.add("password", msg);
            }
        }
        if let Some(unknown) = self
            .permissions
            .iter()
            .flatten()
            .find(|p| !keys::ALL.contains(&p.as_str()))
        {
            errors.add("permissions", format!("Unknown permission '{unknown}'"));
        }
        errors.into_result()
    }
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.email.as_deref().is_some_and(|e| !validate_email(e)) {
            errors.add("email", "Enter a valid email address");
        }
        if let Some(new_password) = &self.new_password {
            if let Err(msg) = validate_password(new_password) {
                errors.add("newPassword", msg);
            }
            if self.current_password.as_deref().map_or(true, str::is_empty) {
                errors.add("currentPassword", "Current password is required");
            }
        }
        errors.into_result()
    }
}

impl Validate for AffNotice {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "textBn", &self.text_bn, "Bengali text");
        require(&mut errors, "textEn", &self.text_en, "English text");
        if self.speed_sec == 0 || self.speed_sec > MAX_NOTICE_SPEED_SEC {
            errors.add("speedSec", format!("Speed must be between 1 and {MAX_NOTICE_SPEED_SEC} seconds"));
        }
        errors.into_result()
    }
}

impl Validate for Promotion {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "category", &self.category, "Category");
        require(&mut errors, "title.bn", &self.title.bn, "Bengali title");
        require(&mut errors, "title.en", &self.title.en, "English title");
        errors.into_result()
    }
}

impl Validate for FloatingSocialItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !validate_link(&self.link_url) {
            errors.add("linkUrl", "Enter a valid link");
        }
        if self.order < 0 {
            errors.add("order", "Order cannot be negative");
        }
        errors.into_result()
    }
}

impl Validate for AffCommissionConfig {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "name", &self.name, "Config name");
        for (i, row) in self.rows.iter().enumerate() {
            require(&mut errors, &format!("rows.{i}.level"), &row.level, "Level");
        }
        errors.into_result()
    }
}
