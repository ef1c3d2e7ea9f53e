//! System-wide lock that keeps a second launcher from opening its window.

use single_instance::{error::SingleInstanceError, SingleInstance};
use thiserror::Error;
use uetraces_config::SINGLE_INSTANCE_LOCK_NAME;

#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to create single-instance lock `{name}`: {source}")]
    Create {
        name: String,
        #[source]
        source: SingleInstanceError,
    },
}

/// Held for the lifetime of the launcher. Dropping it releases the lock.
pub struct InstanceGuard {
    _lock: SingleInstance,
    name: String,
}

impl InstanceGuard {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for InstanceGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceGuard")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Debug)]
pub enum InstanceLock {
    Acquired(InstanceGuard),
    AlreadyRunning,
}

#[cfg(target_os = "macos")]
fn platform_lock_name(name: &str) -> String {
    // The macOS backend locks a file, so keep it out of the working directory.
    std::env::temp_dir().join(name).to_string_lossy().to_string()
}

#[cfg(not(target_os = "macos"))]
fn platform_lock_name(name: &str) -> String {
    name.to_string()
}

pub fn acquire(name: &str) -> Result<InstanceLock, InstanceError> {
    let lock_name = platform_lock_name(name);
    let lock = SingleInstance::new(&lock_name).map_err(|source| InstanceError::Create {
        name: lock_name.clone(),
        source,
    })?;

    if !lock.is_single() {
        tracing::info!(lock = %lock_name, "Another launcher instance holds the lock");
        return Ok(InstanceLock::AlreadyRunning);
    }

    tracing::debug!(lock = %lock_name, "Acquired single-instance lock");
    Ok(InstanceLock::Acquired(InstanceGuard {
        _lock: lock,
        name: lock_name,
    }))
}

/// Acquires the launcher's own system-wide lock.
pub fn acquire_default() -> Result<InstanceLock, InstanceError> {
    acquire(SINGLE_INSTANCE_LOCK_NAME)
}
