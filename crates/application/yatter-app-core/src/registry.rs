//! Scope-keyed holder registry owned by the composition root.
//!
//! A holder outlives any single view attachment. Views ask the registry for
//! the holder of their scope; re-attaching returns the same instance with its
//! state and pending navigation intact. Removing a scope drops the holder,
//! which cancels its in-flight work.

use std::any::{type_name, Any};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("scope '{scope}' holds a different holder type than {requested}")]
    TypeMismatch {
        scope: String,
        requested: &'static str,
    },
}

#[derive(Default)]
pub struct ScopeRegistry {
    holders: HashMap<String, Box<dyn Any + Send>>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holder stored under `scope`, creating it with `factory` on
    /// first use.
    pub fn get_or_insert_with<H, F>(
        &mut self,
        scope: impl Into<String>,
        factory: F,
    ) -> Result<&mut H, RegistryError>
    where
        H: Any + Send,
        F: FnOnce() -> H,
    {
        let scope = scope.into();
        let mut created = false;
        let entry = self.holders.entry(scope.clone()).or_insert_with(|| {
            created = true;
            Box::new(factory())
        });
        debug!(scope = %scope, created, "holder attached");
        entry
            .downcast_mut::<H>()
            .ok_or(RegistryError::TypeMismatch {
                scope,
                requested: type_name::<H>(),
            })
    }

    pub fn get_mut<H: Any + Send>(&mut self, scope: &str) -> Option<&mut H> {
        self.holders.get_mut(scope)?.downcast_mut::<H>()
    }

    pub fn contains(&self, scope: &str) -> bool {
        self.holders.contains_key(scope)
    }

    /// Drops the holder of `scope`. Returns false when there was none.
    pub fn remove(&mut self, scope: &str) -> bool {
        let removed = self.holders.remove(scope).is_some();
        if removed {
            debug!(scope, "holder destroyed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.holders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}
