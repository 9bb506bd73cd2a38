use super::Storage;
use crate::error::Result;

/// Storage for contexts with no persistence medium.
///
/// Every read finds nothing and every write is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl Storage for NullStorage {
    fn get_item(&self, _: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _: &str, _: &str) -> Result<()> {
        Ok(())
    }

    fn remove_item(&self, _: &str) -> Result<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}
