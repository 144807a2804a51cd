/// List capacity and storage settings
use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Capacities the side panel offers
pub const ALLOWED_CAPACITIES: [u32; 3] = [3, 5, 7];

/// chrome.storage.sync key holding the JSON-encoded item array
pub const DEFAULT_LIST_KEY: &str = "linkList_123";

/// chrome.storage.sync key holding the capacity number
pub const DEFAULT_CAPACITY_KEY: &str = "maxTasks";

/// Maximum number of items the list may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = Capacity> {
        ALLOWED_CAPACITIES.into_iter().map(Capacity)
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity(3)
    }
}

impl TryFrom<u32> for Capacity {
    type Error = StoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if ALLOWED_CAPACITIES.contains(&value) {
            Ok(Capacity(value))
        } else {
            Err(StoreError::InvalidCapacity(value))
        }
    }
}

impl From<Capacity> for u32 {
    fn from(capacity: Capacity) -> u32 {
        capacity.0
    }
}

/// What a capture does when the list is already full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturePolicy {
    /// Fail with `CapacityExceeded`, same as a manual add
    #[default]
    Reject,
    /// Drop the oldest item to make room
    EvictOldest,
    /// Append regardless of capacity
    Exempt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub list_key: String,
    pub capacity_key: String,
    pub default_capacity: Capacity,
    pub capture_policy: CapturePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            list_key: DEFAULT_LIST_KEY.to_string(),
            capacity_key: DEFAULT_CAPACITY_KEY.to_string(),
            default_capacity: Capacity::default(),
            capture_policy: CapturePolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_capture_policy(mut self, policy: CapturePolicy) -> Self {
        self.capture_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_allowed_values() {
        assert_eq!(Capacity::try_from(3).unwrap().get(), 3);
        assert_eq!(Capacity::try_from(5).unwrap().get(), 5);
        assert_eq!(Capacity::try_from(7).unwrap().get(), 7);
        assert_eq!(Capacity::try_from(4), Err(StoreError::InvalidCapacity(4)));
        assert_eq!(Capacity::try_from(0), Err(StoreError::InvalidCapacity(0)));
    }

    #[test]
    fn test_capacity_default_and_all() {
        assert_eq!(Capacity::default().get(), 3);
        let all: Vec<usize> = Capacity::all().map(Capacity::get).collect();
        assert_eq!(all, vec![3, 5, 7]);
    }

    #[test]
    fn test_capacity_serde() {
        assert_eq!(serde_json::to_string(&Capacity::try_from(5).unwrap()).unwrap(), "5");
        assert!(serde_json::from_str::<Capacity>("7").is_ok());
        assert!(serde_json::from_str::<Capacity>("9").is_err());
    }

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.list_key, "linkList_123");
        assert_eq!(config.capacity_key, "maxTasks");
        assert_eq!(config.capture_policy, CapturePolicy::Reject);
    }

    #[test]
    fn test_store_config_partial_json() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"capturePolicy": "evict_oldest", "defaultCapacity": 5}"#).unwrap();

        assert_eq!(config.capture_policy, CapturePolicy::EvictOldest);
        assert_eq!(config.default_capacity.get(), 5);
        assert_eq!(config.list_key, "linkList_123");
    }
}
