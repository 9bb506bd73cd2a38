use super::Storage;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// In-process storage backed by a shared map.
///
/// Clones share the same map, so two stores built from clones of one
/// `MemoryStorage` behave like two browser tabs over the same origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
