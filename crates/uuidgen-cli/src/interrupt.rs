use tokio::sync::watch;
use tracing::{debug, warn};

/// Cancellation token raised when the user interrupts the process.
///
/// Interactive reads race against [`Interrupt::triggered`].
#[derive(Debug, Clone)]
pub struct Interrupt {
    rx: watch::Receiver<bool>,
}

/// The raising side of an [`Interrupt`].
#[derive(Debug)]
pub struct InterruptHandle {
    tx: watch::Sender<bool>,
}

impl InterruptHandle {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Interrupt {
    pub fn channel() -> (InterruptHandle, Interrupt) {
        let (tx, rx) = watch::channel(false);
        (InterruptHandle { tx }, Interrupt { rx })
    }

    /// A token that never fires.
    pub fn never() -> Self {
        Self::channel().1
    }

    /// A token raised by Ctrl-C. Must be called from within a tokio runtime.
    pub fn ctrl_c() -> Self {
        let (handle, interrupt) = Self::channel();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    debug!("received interrupt signal");
                    handle.trigger();
                }
                Err(err) => warn!(error = %err, "failed to listen for interrupt signal"),
            }
        });
        interrupt
    }

    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the token is raised. Pends forever if the raising side
    /// is dropped without firing.
    pub async fn triggered(&mut self) {
        let fired = self.rx.wait_for(|raised| *raised).await.is_ok();
        if !fired {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn triggered_resolves_after_trigger() {
        let (handle, mut interrupt) = Interrupt::channel();
        assert!(!interrupt.is_triggered());

        handle.trigger();

        interrupt.triggered().await;
        assert!(interrupt.is_triggered());
    }

    #[tokio::test]
    async fn never_does_not_resolve() {
        let mut interrupt = Interrupt::never();
        let result = tokio::time::timeout(Duration::from_millis(20), interrupt.triggered()).await;
        assert!(result.is_err());
    }
}
