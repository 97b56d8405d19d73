use serde::de::DeserializeOwned;
use serde::Serialize;

/// A backend-owned document reachable under a fixed REST path.
///
/// `PATH` is the base collection URL (`/api/aff-notice`). Updates and
/// deletes go to `PATH/<id>`, uploads to `PATH/upload`.
pub trait Resource: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static {
    const PATH: &'static str;
    /// Human label used in notifications ("Notice saved").
    const LABEL: &'static str;

    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: Option<String>);

    /// The backend answers `{}` for a singleton that was never saved.
    fn exists(&self) -> bool {
        self.id().is_some_and(|id| !id.is_empty())
    }
}

/// Items carrying a numeric display `order`.
pub trait Ordered {
    fn order(&self) -> i64;
}

/// Items the public site hides unless flagged active.
pub trait Activatable {
    fn is_active(&self) -> bool;
}

#[macro_export]
macro_rules! impl_resource {
    ($ty:ty, $path:expr, $label:expr) => {
        impl $crate::models::Resource for $ty {
            const PATH: &'static str = $path;
            const LABEL: &'static str = $label;

            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }

            fn set_id(&mut self, id: Option<String>) {
                self.id = id;
            }
        }
    };
}
