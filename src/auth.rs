use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Login state shared by everything that holds a clone
///
/// Only the external identity flow flips it; the rest of the service reads it.
#[derive(Debug, Clone, Default)]
pub struct AuthFlag {
    logged_in: Arc<AtomicBool>,
}

impl AuthFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::Acquire)
    }

    pub fn sign_in(&self) {
        self.logged_in.store(true, Ordering::Release);
        tracing::info!("User signed in");
    }

    pub fn sign_out(&self) {
        self.logged_in.store(false, Ordering::Release);
        tracing::info!("User signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_logged_out() {
        assert!(!AuthFlag::new().is_logged_in());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = AuthFlag::new();
        let reader = flag.clone();

        flag.sign_in();
        assert!(reader.is_logged_in());

        flag.sign_out();
        assert!(!reader.is_logged_in());
    }
}
