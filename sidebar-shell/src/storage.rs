use std::collections::HashMap;

use crate::error::ShellError;

/// String key/value persistence, shaped after `window.localStorage`.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError>;
}

/// The one persisted flag. Stored as the literal `"true"` / `"false"`;
/// anything other than exactly `"true"` reads back as expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapsedState(pub bool);

impl CollapsedState {
    pub fn decode(raw: Option<&str>) -> Self {
        CollapsedState(raw == Some("true"))
    }

    pub fn encode(self) -> &'static str {
        if self.0 {
            "true"
        } else {
            "false"
        }
    }

    pub fn load<S: FlagStore + ?Sized>(store: &S, key: &str) -> Self {
        Self::decode(store.get(key).as_deref())
    }

    pub fn save<S: FlagStore + ?Sized>(self, store: &mut S, key: &str) -> Result<(), ShellError> {
        store.set(key, self.encode())
    }
}

/// Process-local store for non-browser hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShellError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_decodes_collapsed() {
        assert!(CollapsedState::decode(Some("true")).0);
        for raw in [None, Some("false"), Some("TRUE"), Some("1"), Some(" true"), Some("")] {
            assert!(!CollapsedState::decode(raw).0, "{raw:?}");
        }
    }

    #[test]
    fn save_writes_literal_strings() {
        let mut store = MemoryStore::new();
        CollapsedState(true).save(&mut store, "k").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("true"));
        CollapsedState(false).save(&mut store, "k").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("false"));
        assert_eq!(CollapsedState::load(&store, "k"), CollapsedState(false));
    }
}
