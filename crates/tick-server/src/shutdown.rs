//! Graceful shutdown signalling.

use tokio_util::sync::CancellationToken;

/// Shared handle that tells the serve loop to stop accepting and drain.
///
/// Clones observe the same underlying token, so the signal handler in the
/// binary and the serve task can hold separate copies. Firing it twice is
/// harmless.
#[derive(Clone, Debug, Default)]
pub struct ShutdownCoordinator {
    token: CancellationToken,
}

impl ShutdownCoordinator {
    /// Create an un-fired coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that resolves once [`ShutdownCoordinator::shutdown`] runs.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Fire the shutdown signal.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    /// Whether the signal has fired.
    pub fn is_shutting_down(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active() {
        assert!(!ShutdownCoordinator::new().is_shutting_down());
        assert!(!ShutdownCoordinator::default().is_shutting_down());
    }

    #[test]
    fn firing_is_visible_through_clones_and_tokens() {
        let coord = ShutdownCoordinator::new();
        let clone = coord.clone();
        let token = coord.token();

        coord.shutdown();

        assert!(coord.is_shutting_down());
        assert!(clone.is_shutting_down());
        assert!(token.is_cancelled());
    }

    #[test]
    fn repeated_fires_are_harmless() {
        let coord = ShutdownCoordinator::new();
        coord.shutdown();
        coord.shutdown();
        assert!(coord.is_shutting_down());
    }

    #[tokio::test]
    async fn token_future_resolves_after_fire() {
        let coord = ShutdownCoordinator::new();
        let waiter = coord.token().cancelled_owned();

        coord.shutdown();

        tokio::time::timeout(std::time::Duration::from_secs(1), waiter)
            .await
            .expect("cancelled future should resolve immediately");
    }
}
