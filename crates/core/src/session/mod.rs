//! User session: the credential slot and the signed-in user

pub mod context;
pub mod ports;
pub mod service;

pub use context::SessionContext;
pub use service::{SessionError, SessionService};

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;

    use labelprint_domain::Result;
    use parking_lot::RwLock;

    use super::ports::KeyValueStore;

    /// Minimal in-memory store for unit tests
    #[derive(Default)]
    pub struct MemoryStore {
        values: RwLock<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.read().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.values.write().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.values.write().remove(key);
            Ok(())
        }
    }
}
