/// The link list: ordered items, a capacity, and their persisted mirror
use crate::classifier::is_valid_url;
use crate::config::{Capacity, CapturePolicy, StoreConfig};
use crate::error::{LoadError, PersistenceError, StoreError};
use crate::link_data::{CapturePayload, ItemId, LinkItem, RenderSnapshot};
use crate::sanitize::escape_html;
use crate::storage::StorageBackend;
use serde_json::Value;

/// A mutation that was applied in memory, plus the write failure if
/// persisting it did not go through
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<PersistenceError>,
}

impl<T> Outcome<T> {
    fn new(value: T, warning: Option<PersistenceError>) -> Self {
        Outcome { value, warning }
    }

    pub fn is_persisted(&self) -> bool {
        self.warning.is_none()
    }
}

/// Owns the list and mediates every change to it
///
/// In-memory state is the source of truth for the session; every mutation
/// is written through to the backend, and a failed write never undoes it.
pub struct LinkListStore<B: StorageBackend> {
    backend: B,
    config: StoreConfig,
    items: Vec<LinkItem>,
    capacity: Capacity,
}

impl<B: StorageBackend> LinkListStore<B> {
    /// Read persisted state, falling back to an empty list and the default
    /// capacity for anything missing or unreadable
    pub fn load(backend: B, config: StoreConfig) -> Self {
        let capacity = match read_capacity(&backend, &config.capacity_key) {
            Ok(Some(capacity)) => capacity,
            Ok(None) => config.default_capacity,
            Err(e) => {
                log::warn!("{}; using default capacity", e);
                config.default_capacity
            }
        };

        let items = match read_items(&backend, &config.list_key) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("{}; starting with an empty list", e);
                Vec::new()
            }
        };

        log::info!("loaded {} items, capacity {}", items.len(), capacity.get());

        let mut store = LinkListStore {
            backend,
            config,
            items,
            capacity,
        };

        // a capacity change whose list write failed leaves a longer list behind
        if store.items.len() > capacity.get()
            && store.config.capture_policy != CapturePolicy::Exempt
        {
            let dropped = store.items.split_off(capacity.get());
            log::warn!(
                "dropped {} stored items over capacity {}",
                dropped.len(),
                capacity.get()
            );
            // a failed write is already logged; the next mutation retries it
            let _ = store.persist_items();
        }

        store
    }

    pub fn items(&self) -> &[LinkItem] {
        &self.items
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn max_items(&self) -> usize {
        self.capacity.get()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_items()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Copy of the current list for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            items: self.items.clone(),
            max_items: self.max_items(),
        }
    }

    /// Change the capacity, dropping the most recently added items if the
    /// list no longer fits. Returns the dropped items.
    pub fn set_capacity(&mut self, max: u32) -> Result<Outcome<Vec<LinkItem>>, StoreError> {
        let capacity = Capacity::try_from(max).inspect_err(|e| log::warn!("{}", e))?;

        if capacity == self.capacity {
            return Ok(Outcome::new(Vec::new(), None));
        }

        self.capacity = capacity;
        log::info!("capacity set to {}", capacity.get());
        let mut warning = self.persist_capacity();

        let dropped = if self.items.len() > capacity.get() {
            let dropped = self.items.split_off(capacity.get());
            log::debug!("dropped {} items over capacity", dropped.len());
            warning = self.persist_items().or(warning);
            dropped
        } else {
            Vec::new()
        };

        Ok(Outcome::new(dropped, warning))
    }

    /// Add a manually typed entry. Manual entries are never turned into
    /// links, even when the text is a URL.
    pub fn add_from_text(&mut self, raw_text: &str) -> Result<Outcome<LinkItem>, StoreError> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyInput);
        }
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                max: self.max_items(),
            });
        }

        let item = LinkItem::new(escape_html(text), String::new());
        Ok(self.append(item))
    }

    /// Add an entry from a context-menu capture
    ///
    /// Display text and link come from, in order: the selection (linked to
    /// itself when it is a URL, otherwise to the page), the link under the
    /// cursor, and the page itself. A full list is handled according to
    /// the configured `CapturePolicy`.
    pub fn add_from_capture(
        &mut self,
        capture: &CapturePayload,
    ) -> Result<Outcome<LinkItem>, StoreError> {
        let selection = capture
            .selection_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let link_url = capture.link_url.as_deref().filter(|s| !s.is_empty());

        let (text, link) = match (selection, link_url) {
            (Some(selection), _) => {
                let link = if is_valid_url(selection) {
                    selection.to_string()
                } else {
                    log::debug!("selection is not a URL, linking to the page instead");
                    capture.page_url.clone()
                };
                (selection, link)
            }
            (None, Some(link_url)) => (link_url, link_url.to_string()),
            (None, None) => (capture.page_url.as_str(), capture.page_url.clone()),
        };

        if text.trim().is_empty() {
            return Err(StoreError::EmptyInput);
        }

        if self.is_full() {
            match self.config.capture_policy {
                CapturePolicy::Reject => {
                    log::warn!("capture rejected, list is full");
                    return Err(StoreError::CapacityExceeded {
                        max: self.max_items(),
                    });
                }
                CapturePolicy::EvictOldest => {
                    let excess = self.items.len() + 1 - self.max_items();
                    let evicted: Vec<LinkItem> = self.items.drain(..excess).collect();
                    log::debug!("evicted {} oldest items for capture", evicted.len());
                }
                CapturePolicy::Exempt => {}
            }
        }

        let item = LinkItem::new(escape_html(text), link);
        Ok(self.append(item))
    }

    /// Remove an item. Missing ids are ignored and nothing is written.
    pub fn remove(&mut self, id: ItemId) -> Outcome<bool> {
        let original_len = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == original_len {
            return Outcome::new(false, None);
        }

        log::debug!("removed item {}", id);
        let warning = self.persist_items();
        Outcome::new(true, warning)
    }

    /// Set the checked flag of an item. Missing ids are ignored and
    /// nothing is written.
    pub fn toggle_checked(&mut self, id: ItemId, checked: bool) -> Outcome<bool> {
        let found = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .map(|item| {
                item.is_checked = checked;
            })
            .is_some();

        if !found {
            return Outcome::new(false, None);
        }

        let warning = self.persist_items();
        Outcome::new(true, warning)
    }

    fn append(&mut self, item: LinkItem) -> Outcome<LinkItem> {
        self.items.push(item.clone());
        log::debug!("added item {} ({} of {})", item.id, self.items.len(), self.max_items());
        let warning = self.persist_items();
        Outcome::new(item, warning)
    }

    fn persist_items(&mut self) -> Option<PersistenceError> {
        let key = self.config.list_key.clone();
        let result = serde_json::to_string(&self.items)
            .map_err(|e| PersistenceError::Encode {
                key: key.clone(),
                message: e.to_string(),
            })
            .and_then(|json| self.backend.write(&key, Value::String(json)));

        result.inspect_err(|e| log::warn!("{}", e)).err()
    }

    fn persist_capacity(&mut self) -> Option<PersistenceError> {
        let key = self.config.capacity_key.clone();
        let value = Value::from(u32::from(self.capacity));

        self.backend
            .write(&key, value)
            .inspect_err(|e| log::warn!("{}", e))
            .err()
    }
}

fn read_capacity<B: StorageBackend>(backend: &B, key: &str) -> Result<Option<Capacity>, LoadError> {
    let Some(value) = backend.read(key)? else {
        return Ok(None);
    };

    let raw = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    raw.and_then(|n| u32::try_from(n).ok())
        .and_then(|n| Capacity::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| LoadError::Malformed {
            key: key.to_string(),
            message: format!("unsupported capacity {}", value),
        })
}

fn read_items<B: StorageBackend>(backend: &B, key: &str) -> Result<Vec<LinkItem>, LoadError> {
    let malformed = |message: String| LoadError::Malformed {
        key: key.to_string(),
        message,
    };

    match backend.read(key)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(json)) => {
            serde_json::from_str(&json).map_err(|e| malformed(e.to_string()))
        }
        Some(value @ Value::Array(_)) => {
            serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
        }
        Some(other) => Err(malformed(format!("expected a JSON array, found {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    const LIST_KEY: &str = "linkList_123";
    const CAPACITY_KEY: &str = "maxTasks";

    /// Backend whose writes always fail
    #[derive(Default)]
    struct FailingStorage {
        attempts: usize,
    }

    impl StorageBackend for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<Value>, PersistenceError> {
            Ok(None)
        }

        fn write(&mut self, key: &str, _value: Value) -> Result<(), PersistenceError> {
            self.attempts += 1;
            Err(PersistenceError::Write {
                key: key.to_string(),
                message: "QUOTA_BYTES_PER_ITEM quota exceeded".to_string(),
            })
        }
    }

    fn create_test_store() -> LinkListStore<MemoryStorage> {
        LinkListStore::load(MemoryStorage::new(), StoreConfig::default())
    }

    fn create_test_store_with(capacity: u32, tasks: &[&str]) -> LinkListStore<MemoryStorage> {
        let items: Vec<Value> = tasks
            .iter()
            .map(|task| json!({"task": task, "link": "", "isChecked": false}))
            .collect();
        let storage = MemoryStorage::new()
            .with_value(CAPACITY_KEY, json!(capacity))
            .with_value(LIST_KEY, Value::String(Value::Array(items).to_string()));

        LinkListStore::load(storage, StoreConfig::default())
    }

    fn capture(page_url: &str, selection: Option<&str>, link_url: Option<&str>) -> CapturePayload {
        CapturePayload {
            page_url: page_url.to_string(),
            selection_text: selection.map(str::to_string),
            link_url: link_url.map(str::to_string),
        }
    }

    fn tasks(store: &LinkListStore<MemoryStorage>) -> Vec<String> {
        store.items().iter().map(|item| item.task.clone()).collect()
    }

    fn persisted_tasks(store: &LinkListStore<MemoryStorage>) -> Vec<String> {
        let Some(Value::String(json)) = store.backend().value(LIST_KEY) else {
            panic!("list was never persisted as a JSON string");
        };
        let items: Vec<LinkItem> = serde_json::from_str(json).unwrap();
        items.into_iter().map(|item| item.task).collect()
    }

    #[test]
    fn test_load_empty() {
        let store = create_test_store();

        assert!(store.items().is_empty());
        assert_eq!(store.max_items(), 3);
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_load_persisted_state() {
        let store = create_test_store_with(5, &["one", "two"]);

        assert_eq!(store.max_items(), 5);
        assert_eq!(tasks(&store), vec!["one", "two"]);
        assert_ne!(store.items()[0].id, store.items()[1].id);
    }

    #[test]
    fn test_load_raw_array() {
        let storage = MemoryStorage::new()
            .with_value(LIST_KEY, json!([{"task": "docs", "link": "https://docs.rs", "isChecked": true}]));

        let store = LinkListStore::load(storage, StoreConfig::default());

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].link, "https://docs.rs");
        assert!(store.items()[0].is_checked);
    }

    #[test]
    fn test_load_malformed_list_falls_back_to_empty() {
        let storage = MemoryStorage::new()
            .with_value(LIST_KEY, json!("[{\"task\": oops"))
            .with_value(CAPACITY_KEY, json!(7));

        let store = LinkListStore::load(storage, StoreConfig::default());

        assert!(store.items().is_empty());
        assert_eq!(store.max_items(), 7);
    }

    #[test]
    fn test_load_wrong_shape_falls_back_to_empty() {
        let storage = MemoryStorage::new().with_value(LIST_KEY, json!({"task": "not a list"}));

        let store = LinkListStore::load(storage, StoreConfig::default());

        assert!(store.items().is_empty());
    }

    #[test]
    fn test_load_bad_capacity_falls_back_to_default() {
        let storage = MemoryStorage::new().with_value(CAPACITY_KEY, json!(4));
        assert_eq!(LinkListStore::load(storage, StoreConfig::default()).max_items(), 3);

        let storage = MemoryStorage::new().with_value(CAPACITY_KEY, json!("5"));
        assert_eq!(LinkListStore::load(storage, StoreConfig::default()).max_items(), 5);
    }

    #[test]
    fn test_load_over_capacity_truncates() {
        let store = create_test_store_with(3, &["1", "2", "3", "4", "5", "6", "7"]);

        assert_eq!(store.max_items(), 3);
        assert_eq!(tasks(&store), vec!["1", "2", "3"]);
        assert_eq!(persisted_tasks(&store), vec!["1", "2", "3"]);
        assert_eq!(store.backend().writes().len(), 1);
    }

    #[test]
    fn test_load_over_capacity_kept_when_captures_exempt() {
        let items = json!([{"task": "1"}, {"task": "2"}, {"task": "3"}, {"task": "4"}]);
        let storage = MemoryStorage::new().with_value(LIST_KEY, items);
        let config = StoreConfig::default().with_capture_policy(CapturePolicy::Exempt);

        let store = LinkListStore::load(storage, config);

        assert_eq!(store.items().len(), 4);
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_add_from_text() {
        let mut store = create_test_store();

        let outcome = store.add_from_text("buy milk").unwrap();

        assert!(outcome.is_persisted());
        assert_eq!(outcome.value.task, "buy milk");
        assert_eq!(outcome.value.link, "");
        assert!(!outcome.value.is_checked);
        assert_eq!(store.items(), &[outcome.value.clone()]);
        assert_eq!(persisted_tasks(&store), vec!["buy milk"]);
    }

    #[test]
    fn test_add_from_text_never_links() {
        let mut store = create_test_store();

        let item = store.add_from_text("https://example.com").unwrap().value;

        assert_eq!(item.task, "https://example.com");
        assert!(!item.has_link());
    }

    #[test]
    fn test_add_from_text_escapes_and_trims() {
        let mut store = create_test_store();

        let item = store.add_from_text("  <b>bold</b> & \"quoted\"  ").unwrap().value;

        assert_eq!(item.task, "&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;");
    }

    #[test]
    fn test_add_from_text_empty_input() {
        let mut store = create_test_store();

        assert_eq!(store.add_from_text("   \t").unwrap_err(), StoreError::EmptyInput);
        assert_eq!(store.add_from_text("").unwrap_err(), StoreError::EmptyInput);
        assert!(store.items().is_empty());
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_add_from_text_capacity_exceeded() {
        let mut store = create_test_store();
        store.add_from_text("buy milk").unwrap();
        store.add_from_text("https://example.com").unwrap();
        store.add_from_text("call mom").unwrap();
        let writes_before = store.backend().writes().len();

        let err = store.add_from_text("one too many").unwrap_err();

        assert_eq!(err, StoreError::CapacityExceeded { max: 3 });
        assert_eq!(store.items().len(), 3);
        assert_eq!(store.backend().writes().len(), writes_before);
    }

    #[test]
    fn test_empty_input_checked_before_capacity() {
        let mut store = create_test_store_with(3, &["a", "b", "c"]);
        assert_eq!(store.add_from_text(" ").unwrap_err(), StoreError::EmptyInput);
    }

    #[test]
    fn test_add_then_remove_restores_state() {
        let mut store = create_test_store_with(5, &["one", "two"]);
        let before = store.items().to_vec();

        let item = store.add_from_text("three").unwrap().value;
        let removed = store.remove(item.id);

        assert!(removed.value);
        assert_eq!(store.items(), before.as_slice());
        assert_eq!(persisted_tasks(&store), vec!["one", "two"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = create_test_store_with(3, &["one"]);

        let outcome = store.remove(ItemId::new());

        assert!(!outcome.value);
        assert!(outcome.is_persisted());
        assert_eq!(store.items().len(), 1);
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_remove_targets_one_of_duplicates() {
        let mut store = create_test_store_with(5, &["same", "same"]);
        let second = store.items()[1].id;

        assert!(store.remove(second).value);

        assert_eq!(store.items().len(), 1);
        assert_ne!(store.items()[0].id, second);
    }

    #[test]
    fn test_toggle_checked() {
        let mut store = create_test_store_with(3, &["one", "two"]);
        let id = store.items()[1].id;

        let outcome = store.toggle_checked(id, true);

        assert!(outcome.value);
        assert!(store.items()[1].is_checked);
        assert!(!store.items()[0].is_checked);
        assert_eq!(store.backend().writes().len(), 1);

        let json = match store.backend().value(LIST_KEY) {
            Some(Value::String(json)) => json.clone(),
            other => panic!("unexpected list value {:?}", other),
        };
        let persisted: Vec<LinkItem> = serde_json::from_str(&json).unwrap();
        assert!(persisted[1].is_checked);

        assert!(store.toggle_checked(id, false).value);
        assert!(!store.items()[1].is_checked);
    }

    #[test]
    fn test_toggle_checked_missing_is_noop() {
        let mut store = create_test_store_with(3, &["one"]);

        let outcome = store.toggle_checked(ItemId::new(), true);

        assert!(!outcome.value);
        assert!(!store.items()[0].is_checked);
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_set_capacity_truncates_from_end() {
        let mut store = create_test_store_with(5, &["1", "2", "3", "4", "5"]);

        let outcome = store.set_capacity(3).unwrap();

        let dropped: Vec<&str> = outcome.value.iter().map(|item| item.task.as_str()).collect();
        assert_eq!(dropped, vec!["4", "5"]);
        assert_eq!(tasks(&store), vec!["1", "2", "3"]);
        assert_eq!(persisted_tasks(&store), vec!["1", "2", "3"]);
        assert_eq!(store.backend().value(CAPACITY_KEY), Some(&json!(3)));
        assert_eq!(store.max_items(), 3);
    }

    #[test]
    fn test_set_capacity_grow_keeps_items() {
        let mut store = create_test_store_with(3, &["1", "2", "3"]);

        let outcome = store.set_capacity(7).unwrap();

        assert!(outcome.value.is_empty());
        assert_eq!(store.items().len(), 3);
        // only the capacity key is written
        assert_eq!(store.backend().writes(), &[(CAPACITY_KEY.to_string(), json!(7))]);
        store.add_from_text("4").unwrap();
    }

    #[test]
    fn test_set_capacity_same_value_is_noop() {
        let mut store = create_test_store_with(5, &["1"]);

        let outcome = store.set_capacity(5).unwrap();

        assert!(outcome.value.is_empty());
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_set_capacity_rejects_unlisted_value() {
        let mut store = create_test_store();

        assert_eq!(store.set_capacity(10).unwrap_err(), StoreError::InvalidCapacity(10));
        assert_eq!(store.max_items(), 3);
        assert!(store.backend().writes().is_empty());
    }

    #[test]
    fn test_capture_selection_url_links_to_itself() {
        let mut store = create_test_store();

        let item = store
            .add_from_capture(&capture("https://page.example", Some(" https://docs.rs/regex "), None))
            .unwrap()
            .value;

        assert_eq!(item.task, "https://docs.rs/regex");
        assert_eq!(item.link, "https://docs.rs/regex");
    }

    #[test]
    fn test_capture_selection_text_links_to_page() {
        let mut store = create_test_store();

        let item = store
            .add_from_capture(&capture("https://page.example/a", Some("Fish & Chips"), None))
            .unwrap()
            .value;

        assert_eq!(item.task, "Fish &amp; Chips");
        assert_eq!(item.link, "https://page.example/a");
    }

    #[test]
    fn test_capture_link_url() {
        let mut store = create_test_store();

        let item = store
            .add_from_capture(&capture("https://page.example", None, Some("https://target.example/x")))
            .unwrap()
            .value;

        assert_eq!(item.task, "https://target.example/x");
        assert_eq!(item.link, "https://target.example/x");
    }

    #[test]
    fn test_capture_page_only() {
        let mut store = create_test_store();

        let item = store
            .add_from_capture(&capture("https://page.example/?a=1&b=2", Some(""), None))
            .unwrap()
            .value;

        assert_eq!(item.task, "https://page.example/?a=1&amp;b=2");
        assert_eq!(item.link, "https://page.example/?a=1&b=2");
        assert_eq!(persisted_tasks(&store), vec!["https://page.example/?a=1&amp;b=2"]);
    }

    #[test]
    fn test_capture_empty_payload() {
        let mut store = create_test_store();

        let err = store.add_from_capture(&CapturePayload::default()).unwrap_err();

        assert_eq!(err, StoreError::EmptyInput);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_capture_rejected_when_full() {
        let mut store = create_test_store_with(3, &["1", "2", "3"]);

        let err = store
            .add_from_capture(&capture("https://page.example", None, None))
            .unwrap_err();

        assert_eq!(err, StoreError::CapacityExceeded { max: 3 });
        assert_eq!(tasks(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_capture_evicts_oldest_when_full() {
        let mut store = create_test_store_with(3, &["1", "2", "3"]);
        store.config.capture_policy = CapturePolicy::EvictOldest;

        store
            .add_from_capture(&capture("https://page.example", None, None))
            .unwrap();

        assert_eq!(tasks(&store), vec!["2", "3", "https://page.example"]);
        assert_eq!(persisted_tasks(&store), vec!["2", "3", "https://page.example"]);
    }

    #[test]
    fn test_capture_exempt_appends_over_capacity() {
        let storage = MemoryStorage::new();
        let config = StoreConfig::default().with_capture_policy(CapturePolicy::Exempt);
        let mut store = LinkListStore::load(storage, config);
        for task in ["1", "2", "3"] {
            store.add_from_text(task).unwrap();
        }

        store
            .add_from_capture(&capture("https://page.example", None, None))
            .unwrap();

        assert_eq!(store.items().len(), 4);
        assert_eq!(
            store.add_from_text("5").unwrap_err(),
            StoreError::CapacityExceeded { max: 3 }
        );
    }

    #[test]
    fn test_capacity_invariant_over_mixed_operations() {
        let mut store = create_test_store();

        for i in 0..10 {
            let _ = store.add_from_text(&format!("task {}", i));
            assert!(store.items().len() <= store.max_items());
            let _ = store.add_from_capture(&capture("https://page.example", Some("sel"), None));
            assert!(store.items().len() <= store.max_items());
            let _ = store.set_capacity([3, 5, 7][i % 3]);
            assert!(store.items().len() <= store.max_items());
        }
    }

    #[test]
    fn test_persistence_failure_keeps_mutation() {
        let mut store = LinkListStore::load(FailingStorage::default(), StoreConfig::default());

        let outcome = store.add_from_text("buy milk").unwrap();

        assert!(matches!(outcome.warning, Some(PersistenceError::Write { .. })));
        assert_eq!(store.items().len(), 1);

        let id = store.items()[0].id;
        let toggled = store.toggle_checked(id, true);
        assert!(toggled.value);
        assert!(!toggled.is_persisted());
        assert!(store.items()[0].is_checked);
        assert_eq!(store.backend().attempts, 2);
    }

    #[test]
    fn test_snapshot() {
        let mut store = create_test_store_with(5, &["one"]);
        store.add_from_text("two").unwrap();

        let snapshot = store.snapshot();

        assert_eq!(snapshot.max_items, 5);
        assert_eq!(snapshot.items, store.items());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["maxItems"], 5);
        assert_eq!(json["items"][1]["task"], "two");
    }

    #[test]
    fn test_scenario_from_empty_storage() {
        let mut store = create_test_store();
        assert!(store.items().is_empty());
        assert_eq!(store.max_items(), 3);

        let first = store.add_from_text("buy milk").unwrap().value;
        assert_eq!((first.task.as_str(), first.link.as_str(), first.is_checked), ("buy milk", "", false));

        let second = store.add_from_text("https://example.com").unwrap().value;
        assert_eq!(second.link, "");

        store.add_from_text("third").unwrap();
        assert_eq!(
            store.add_from_text("fourth").unwrap_err(),
            StoreError::CapacityExceeded { max: 3 }
        );
        assert_eq!(store.items().len(), 3);
    }
}
