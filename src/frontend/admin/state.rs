//! Reactive wrappers around the CRUD binders.
//!
//! The binder lives in a `StoredValue`; each async operation takes a copy,
//! awaits it and writes the copy back, so the tracked `_id` survives.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::common::ValidationErrors;
use crate::frontend::{use_app, AppContext};
use crate::models::Resource;
use crate::services::{CollectionBinder, CrudBinder};

pub type Check<R> = fn(&R) -> Result<(), ValidationErrors>;

/// Run `check` and publish its errors; true when the value may be sent.
pub fn passes<R>(check: Option<Check<R>>, value: &R, errors: RwSignal<ValidationErrors>) -> bool {
    match check.map_or(Ok(()), |f| f(value)) {
        Ok(()) => {
            errors.set(ValidationErrors::new());
            true
        }
        Err(found) => {
            errors.set(found);
            false
        }
    }
}

pub fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

/// One singleton config document being edited.
pub struct DocState<R: Resource> {
    app: AppContext,
    binder: StoredValue<CrudBinder<R>>,
    pub doc: RwSignal<R>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub saved: RwSignal<bool>,
    pub errors: RwSignal<ValidationErrors>,
}

impl<R: Resource> Clone for DocState<R> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            ..*self
        }
    }
}

impl<R: Resource> DocState<R> {
    /// Bind to `path` and start loading.
    pub fn mount(path: &str) -> Self {
        let app = use_app();
        let binder = CrudBinder::<R>::at(app.client.clone(), app.notifier.clone(), path);
        let state = Self {
            app,
            binder: StoredValue::new(binder),
            doc: RwSignal::new(R::default()),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            saved: RwSignal::new(false),
            errors: RwSignal::new(ValidationErrors::new()),
        };
        state.reload();
        state
    }

    pub fn path(&self) -> String {
        self.binder.with_value(|b| b.path().to_string())
    }

    pub fn reload(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.loading.set(true);
            let mut binder = state.binder.get_value();
            if let Ok(doc) = binder.load().await {
                state.doc.set(doc);
            }
            state.saved.set(binder.doc_id().is_some());
            state.binder.set_value(binder);
            state.loading.set(false);
            state.app.sync_toasts();
        });
    }

    /// Validate, then POST or PUT the current document and refetch.
    pub fn save(&self, check: Option<Check<R>>) {
        let doc = self.doc.get_untracked();
        if !passes(check, &doc, self.errors) {
            self.app.notifier.error("Please fix the highlighted fields");
            self.app.sync_toasts();
            return;
        }
        let state = self.clone();
        spawn_local(async move {
            state.saving.set(true);
            let mut binder = state.binder.get_value();
            let result = binder.save(&doc, Vec::new()).await;
            state.binder.set_value(binder);
            state.saving.set(false);
            state.app.sync_toasts();
            if result.is_ok() {
                state.reload();
            }
        });
    }

    pub fn delete(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.saving.set(true);
            let mut binder = state.binder.get_value();
            if binder.delete().await.is_ok() && binder.doc_id().is_none() {
                state.doc.set(R::default());
                state.saved.set(false);
            }
            state.binder.set_value(binder);
            state.saving.set(false);
            state.app.sync_toasts();
        });
    }
}

/// A list resource being edited item by item.
pub struct ListState<R: Resource> {
    app: AppContext,
    list: StoredValue<CollectionBinder<R>>,
    pub items: RwSignal<Vec<R>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub errors: RwSignal<ValidationErrors>,
    sort: Option<fn(&mut [R])>,
}

impl<R: Resource> Clone for ListState<R> {
    fn clone(&self) -> Self {
        Self {
            app: self.app.clone(),
            ..*self
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn mount(path: &str, sort: Option<fn(&mut [R])>) -> Self {
        let app = use_app();
        let list = CollectionBinder::<R>::at(app.client.clone(), app.notifier.clone(), path);
        let state = Self {
            app,
            list: StoredValue::new(list),
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            errors: RwSignal::new(ValidationErrors::new()),
            sort,
        };
        state.reload();
        state
    }

    pub fn path(&self) -> String {
        self.list.with_value(|l| l.path().to_string())
    }

    fn publish(&self, list: &CollectionBinder<R>) {
        let mut items = list.items().to_vec();
        if let Some(sort) = self.sort {
            sort(&mut items);
        }
        self.items.set(items);
    }

    pub fn reload(&self) {
        let state = self.clone();
        spawn_local(async move {
            state.loading.set(true);
            let mut list = state.list.get_value();
            let _ = list.load().await;
            state.publish(&list);
            state.list.set_value(list);
            state.loading.set(false);
            state.app.sync_toasts();
        });
    }

    /// Validate and save one item; `done` runs after a successful save.
    pub fn save_item(&self, item: R, check: Option<Check<R>>, done: impl FnOnce() + 'static) {
        if !passes(check, &item, self.errors) {
            self.app.notifier.error("Please fix the highlighted fields");
            self.app.sync_toasts();
            return;
        }
        let state = self.clone();
        spawn_local(async move {
            state.saving.set(true);
            let mut list = state.list.get_value();
            let result = list.save_item(&item, Vec::new()).await;
            state.publish(&list);
            state.list.set_value(list);
            state.saving.set(false);
            state.app.sync_toasts();
            if result.is_ok() {
                done();
                state.reload();
            }
        });
    }

    /// Save several items in sequence, as after a reorder.
    pub fn save_all(&self, changed: Vec<R>) {
        let state = self.clone();
        spawn_local(async move {
            state.saving.set(true);
            let mut list = state.list.get_value();
            for item in &changed {
                if list.save_item(item, Vec::new()).await.is_err() {
                    break;
                }
            }
            state.list.set_value(list);
            state.saving.set(false);
            state.app.sync_toasts();
            state.reload();
        });
    }

    pub fn delete_item(&self, id: String) {
        let state = self.clone();
        spawn_local(async move {
            state.saving.set(true);
            let mut list = state.list.get_value();
            let _ = list.delete_item(&id).await;
            state.publish(&list);
            state.list.set_value(list);
            state.saving.set(false);
            state.app.sync_toasts();
        });
    }
}
