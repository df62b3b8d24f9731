//! Runtime-mutable online/offline mode flag.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared online/offline mode flag.
///
/// Defaults to online. `set_offline` unconditionally overwrites the current
/// mode; a completed write is visible to all subsequent reads from any
/// thread. The flag is an explicitly owned value handed to the façade at
/// construction, not a process-wide singleton, so isolated instances can
/// coexist (one per test, one per tenant, ...).
#[derive(Debug, Default)]
pub struct ModeFlag {
    offline: AtomicBool,
}

impl ModeFlag {
    /// Create a new flag in online mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch offline mode on or off.
    pub fn set_offline(&self, enabled: bool) {
        self.offline.store(enabled, Ordering::SeqCst);
    }

    /// Returns true if offline mode is currently enabled.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_online() {
        assert!(!ModeFlag::new().is_offline());
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let flag = ModeFlag::new();
        flag.set_offline(true);
        assert!(flag.is_offline());
        flag.set_offline(true);
        assert!(flag.is_offline());
        flag.set_offline(false);
        assert!(!flag.is_offline());
    }
}
