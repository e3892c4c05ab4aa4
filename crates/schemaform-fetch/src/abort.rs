//! Request cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct AbortState {
	aborted: AtomicBool,
	notify: Notify,
}

/// Owns the right to abort; hands out [`AbortSignal`]s.
///
/// # Examples
///
/// ```
/// use schemaform_fetch::AbortController;
///
/// let controller = AbortController::new();
/// let signal = controller.signal();
/// controller.abort();
/// assert!(signal.is_aborted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AbortController {
	state: Arc<AbortState>,
}

impl AbortController {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn signal(&self) -> AbortSignal {
		AbortSignal {
			state: Arc::clone(&self.state),
		}
	}

	/// Aborts every request holding one of this controller's signals.
	/// Aborting twice is a no-op.
	pub fn abort(&self) {
		if !self.state.aborted.swap(true, Ordering::SeqCst) {
			tracing::debug!("abort requested");
			self.state.notify.notify_waiters();
		}
	}
}

/// Observes an [`AbortController`].
#[derive(Debug, Clone)]
pub struct AbortSignal {
	state: Arc<AbortState>,
}

impl AbortSignal {
	pub fn is_aborted(&self) -> bool {
		self.state.aborted.load(Ordering::SeqCst)
	}

	/// Resolves once the controller aborts.
	pub async fn aborted(&self) {
		loop {
			let notified = self.state.notify.notified();
			tokio::pin!(notified);
			notified.as_mut().enable();
			if self.is_aborted() {
				return;
			}
			notified.await;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::time::Duration;

	#[rstest]
	#[tokio::test]
	async fn test_aborted_resolves_after_abort() {
		let controller = AbortController::new();
		let signal = controller.signal();
		let waiter = tokio::spawn(async move { signal.aborted().await });

		tokio::time::sleep(Duration::from_millis(10)).await;
		controller.abort();
		tokio::time::timeout(Duration::from_secs(1), waiter)
			.await
			.expect("signal should resolve")
			.unwrap();
	}

	#[rstest]
	#[tokio::test]
	async fn test_already_aborted_resolves_immediately() {
		let controller = AbortController::new();
		controller.abort();
		controller.abort();
		controller.signal().aborted().await;
		assert!(controller.signal().is_aborted());
	}
}
