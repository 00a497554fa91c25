//! Cart store adapters.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{CartStore, CartStoreError};
use crate::domain::cart::CartLine;
use crate::domain::shared::TenantId;

/// In-memory implementation of [`CartStore`], for tests and ephemeral
/// deployments.
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<String, Vec<CartLine>>>,
}

impl InMemoryCartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self, tenant_id: &TenantId) -> Result<Vec<CartLine>, CartStoreError> {
        let carts = self
            .carts
            .read()
            .map_err(|_| CartStoreError::Io(std::io::Error::other("cart lock poisoned")))?;
        Ok(carts.get(tenant_id.as_str()).cloned().unwrap_or_default())
    }

    async fn store(&self, tenant_id: &TenantId, lines: &[CartLine]) -> Result<(), CartStoreError> {
        let mut carts = self
            .carts
            .write()
            .map_err(|_| CartStoreError::Io(std::io::Error::other("cart lock poisoned")))?;
        carts.insert(tenant_id.to_string(), lines.to_vec());
        Ok(())
    }

    async fn clear(&self, tenant_id: &TenantId) -> Result<(), CartStoreError> {
        let mut carts = self
            .carts
            .write()
            .map_err(|_| CartStoreError::Io(std::io::Error::other("cart lock poisoned")))?;
        carts.remove(tenant_id.as_str());
        Ok(())
    }
}

/// File-backed implementation of [`CartStore`].
///
/// Persists each tenant's cart as a JSON file under a cache directory,
/// so an in-progress cart survives process restarts.
pub struct JsonFileCartStore {
    dir: PathBuf,
}

impl JsonFileCartStore {
    /// Create a store rooted at the given directory. The directory is
    /// created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn cart_path(&self, tenant_id: &TenantId) -> PathBuf {
        self.dir.join(format!("cart-{tenant_id}.json"))
    }
}

#[async_trait]
impl CartStore for JsonFileCartStore {
    async fn load(&self, tenant_id: &TenantId) -> Result<Vec<CartLine>, CartStoreError> {
        match std::fs::read(self.cart_path(tenant_id)) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, tenant_id: &TenantId, lines: &[CartLine]) -> Result<(), CartStoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec_pretty(lines)?;
        std::fs::write(self.cart_path(tenant_id), json)?;
        Ok(())
    }

    async fn clear(&self, tenant_id: &TenantId) -> Result<(), CartStoreError> {
        match std::fs::remove_file(self.cart_path(tenant_id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
