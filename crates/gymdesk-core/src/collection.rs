//! Collection Reconciliation
//!
//! The synchronous snapshot of one entity collection, and the merge policies
//! used when an asynchronous backend call settles: replace the whole list,
//! prepend a created item, map-replace by id, or filter out by id. Failures
//! record an error string and leave the collection untouched.

use crate::pagination::Pagination;

/// Anything with a numeric identifier unique within its collection.
pub trait Entity: Clone {
    fn id(&self) -> u64;
}

/// Snapshot of one backend resource collection as the UI observes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Entity> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            pagination: Pagination::default(),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Enter the loading window. Reads during this window see the previous
    /// items with `loading == true`.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// List fetch succeeded: replace the whole list.
    pub fn finish_list(&mut self, items: Vec<T>, pagination: Pagination) {
        self.items = items;
        self.pagination = pagination;
        self.loading = false;
    }

    /// Single fetch succeeded: point `current` at the result.
    pub fn finish_current(&mut self, item: T) {
        self.current = Some(item);
        self.loading = false;
    }

    /// Create succeeded: prepend the new record.
    pub fn finish_prepend(&mut self, item: T) {
        self.items.insert(0, item);
        self.loading = false;
    }

    /// Update or status toggle succeeded: map-replace every record with the
    /// matching id, and the `current` pointer if it matches.
    pub fn finish_replace(&mut self, item: T) {
        for existing in self.items.iter_mut() {
            if existing.id() == item.id() {
                *existing = item.clone();
            }
        }
        if let Some(current) = &self.current {
            if current.id() == item.id() {
                self.current = Some(item);
            }
        }
        self.loading = false;
    }

    /// Delete succeeded: filter out every record with the id.
    pub fn finish_remove(&mut self, id: u64) {
        self.items.retain(|item| item.id() != id);
        if self.current.as_ref().is_some_and(|c| c.id() == id) {
            self.current = None;
        }
        self.loading = false;
    }

    /// Backend call failed: record the message, leave items untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Back to the initial state (used on logout).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Member {
        id: u64,
        name: String,
    }

    impl Entity for Member {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn member(id: u64, name: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
        }
    }

    fn seeded() -> Collection<Member> {
        let mut c = Collection::default();
        c.finish_list(
            vec![member(1, "a"), member(5, "b"), member(9, "c")],
            Pagination::new(1, 10, 3),
        );
        c
    }

    #[test]
    fn begin_keeps_previous_items_visible() {
        let mut c = seeded();
        c.fail("boom");
        c.begin();
        assert!(c.loading);
        assert_eq!(c.error, None);
        assert_eq!(c.items.len(), 3);
    }

    #[test]
    fn prepend_puts_new_record_at_head_exactly_once() {
        let mut c = seeded();
        c.begin();
        c.finish_prepend(member(42, "new"));
        assert_eq!(c.items[0].id, 42);
        assert_eq!(c.items.iter().filter(|m| m.id == 42).count(), 1);
        assert!(!c.loading);
    }

    #[test]
    fn replace_touches_only_matching_records_and_current() {
        let mut c = seeded();
        c.finish_current(member(5, "b"));
        c.begin();
        c.finish_replace(member(5, "renamed"));
        assert_eq!(c.items[1].name, "renamed");
        assert_eq!(c.items[0].name, "a");
        assert_eq!(c.items[2].name, "c");
        assert_eq!(c.current.as_ref().unwrap().name, "renamed");
    }

    #[test]
    fn replace_leaves_unrelated_current_alone() {
        let mut c = seeded();
        c.finish_current(member(1, "a"));
        c.finish_replace(member(5, "renamed"));
        assert_eq!(c.current.as_ref().unwrap().id, 1);
    }

    #[test]
    fn remove_drops_every_matching_record() {
        let mut c = seeded();
        c.finish_current(member(5, "b"));
        c.begin();
        c.finish_remove(5);
        assert!(c.items.iter().all(|m| m.id != 5));
        assert_eq!(c.current, None);
        assert!(!c.loading);
    }

    #[test]
    fn fail_records_message_and_leaves_items_untouched() {
        let mut c = seeded();
        c.begin();
        c.fail("backend unavailable");
        assert_eq!(c.error.as_deref(), Some("backend unavailable"));
        assert_eq!(c.items.len(), 3);
        assert!(!c.loading);
    }
}
