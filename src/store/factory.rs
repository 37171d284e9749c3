//! Generic CRUD Store
//!
//! One factory for the list/get/create/update/delete/toggle pattern every
//! entity store shares, so the loading/error/merge discipline lives in one
//! place instead of being duplicated per entity.

use std::future::Future;
use std::pin::Pin;

use gloo_storage::{LocalStorage, Storage};
use gymdesk_core::models::Page;
use gymdesk_core::{Collection, Entity, Pagination, Params};
use leptos::prelude::*;

use crate::api::ApiError;

pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

/// Backend-call bindings for one entity.
pub struct EntityApi<T: 'static, P: 'static> {
    pub list: fn(Params) -> ApiFuture<Page<T>>,
    pub get: fn(u64) -> ApiFuture<T>,
    pub create: fn(P) -> ApiFuture<T>,
    pub update: fn(u64, P) -> ApiFuture<T>,
    pub delete: fn(u64) -> ApiFuture<()>,
    pub toggle_status: Option<fn(u64) -> ApiFuture<T>>,
}

impl<T: 'static, P: 'static> Clone for EntityApi<T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, P: 'static> Copy for EntityApi<T, P> {}

/// Reactive store over one entity collection.
///
/// Actions set `loading` synchronously before the network call and apply the
/// response when it resolves. Nothing sequences concurrent actions: responses
/// land in resolution order, so two racing updates on the same id resolve
/// last-write-wins.
pub struct EntityStore<T: Entity + Send + Sync + 'static, P: 'static> {
    state: RwSignal<Collection<T>>,
    filters: RwSignal<Params>,
    api: EntityApi<T, P>,
    storage_key: &'static str,
    default_filters: fn() -> Params,
}

impl<T: Entity + Send + Sync + 'static, P: 'static> Clone for EntityStore<T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity + Send + Sync + 'static, P: 'static> Copy for EntityStore<T, P> {}

impl<T: Entity + Send + Sync + 'static, P: 'static> EntityStore<T, P> {
    pub fn new(
        storage_key: &'static str,
        default_filters: fn() -> Params,
        api: EntityApi<T, P>,
    ) -> Self {
        Self {
            state: RwSignal::new(Collection::default()),
            filters: RwSignal::new(default_filters()),
            api,
            storage_key,
            default_filters,
        }
    }

    /// Reactive snapshot of the collection.
    pub fn collection(&self) -> RwSignal<Collection<T>> {
        self.state
    }

    pub fn filters(&self) -> RwSignal<Params> {
        self.filters
    }

    /// Restore the persisted filter slice. Collections are not persisted;
    /// the caller re-triggers the initial fetch afterwards.
    pub fn rehydrate(&self) {
        if let Ok(saved) = LocalStorage::get::<Params>(self.storage_key) {
            self.filters.set(saved);
        }
    }

    pub fn set_filter(&self, key: &str, value: &str) {
        self.filters.update(|f| {
            f.insert(key.to_string(), value.to_string());
        });
        self.persist_filters();
    }

    pub fn set_page(&self, page: u32) {
        self.set_filter("page", &page.to_string());
    }

    /// Back to the fixed default filter set.
    pub fn reset_filters(&self) {
        self.filters.set((self.default_filters)());
        self.persist_filters();
    }

    fn persist_filters(&self) {
        let _ = LocalStorage::set(self.storage_key, &self.filters.get_untracked());
    }

    /// Fetch the list for the active filters; replaces the whole collection.
    pub async fn list(&self) {
        self.begin();
        match (self.api.list)(self.filters.get_untracked()).await {
            Ok(page) => self.accept_list(page),
            Err(err) => self.fail(err.message),
        }
    }

    /// Enter the loading window without issuing the fetch; for reads that go
    /// through the query cache instead of the store's own binding.
    pub fn begin(&self) {
        self.state.update(|c| c.begin());
    }

    /// Apply an externally-fetched list envelope with the same merge policy
    /// as [`Self::list`].
    pub fn accept_list(&self, page: Page<T>) {
        let pagination = Pagination::from_page(&page);
        self.state.update(|c| c.finish_list(page.items, pagination));
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.state.update(|c| c.fail(message));
    }

    /// Fetch a single record into the `current` pointer.
    pub async fn get(&self, id: u64) {
        self.state.update(|c| c.begin());
        match (self.api.get)(id).await {
            Ok(item) => self.state.update(|c| c.finish_current(item)),
            Err(err) => self.state.update(|c| c.fail(err.message)),
        }
    }

    /// On success the new record is prepended and returned; on failure the
    /// collection is untouched and `None` lets the caller branch without
    /// reading the error field.
    pub async fn create(&self, payload: P) -> Option<T> {
        self.state.update(|c| c.begin());
        match (self.api.create)(payload).await {
            Ok(item) => {
                self.state.update(|c| c.finish_prepend(item.clone()));
                Some(item)
            }
            Err(err) => {
                self.state.update(|c| c.fail(err.message));
                None
            }
        }
    }

    /// Map-replace by id on success; `None` on failure.
    pub async fn update(&self, id: u64, payload: P) -> Option<T> {
        self.state.update(|c| c.begin());
        match (self.api.update)(id, payload).await {
            Ok(item) => {
                self.state.update(|c| c.finish_replace(item.clone()));
                Some(item)
            }
            Err(err) => {
                self.state.update(|c| c.fail(err.message));
                None
            }
        }
    }

    /// Filter-out by id on success; `false` on failure.
    pub async fn delete(&self, id: u64) -> bool {
        self.state.update(|c| c.begin());
        match (self.api.delete)(id).await {
            Ok(()) => {
                self.state.update(|c| c.finish_remove(id));
                true
            }
            Err(err) => {
                self.state.update(|c| c.fail(err.message));
                false
            }
        }
    }

    /// Status toggles reconcile like updates. `None` when the entity has no
    /// toggle endpoint or the call failed.
    pub async fn toggle_status(&self, id: u64) -> Option<T> {
        let toggle = self.api.toggle_status?;
        self.state.update(|c| c.begin());
        match toggle(id).await {
            Ok(item) => {
                self.state.update(|c| c.finish_replace(item.clone()));
                Some(item)
            }
            Err(err) => {
                self.state.update(|c| c.fail(err.message));
                None
            }
        }
    }

    /// Drop local state and filters (logout).
    pub fn dispose(&self) {
        self.state.update(|c| c.clear());
        self.filters.set((self.default_filters)());
    }
}
