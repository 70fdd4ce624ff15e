//! Shared test doubles for the dispatch path.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use upstream_client::{ChangeEvent, ChangeNotifier, UpstreamError, UpstreamResult};

/// What the stub does after recording a call.
pub(crate) enum StubBehavior {
    Succeed,
    Fail,
    /// Never complete; the caller's timeout or cancellation must cut it off.
    Hang,
}

/// A call-recording [`ChangeNotifier`] stub.
pub(crate) struct RecordingNotifier {
    behavior: StubBehavior,
    calls: Mutex<Vec<ChangeEvent>>,
    in_flight_dropped: Arc<AtomicBool>,
}

/// Flags when a hanging delivery future is dropped before completing.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl RecordingNotifier {
    pub(crate) fn succeeding() -> Self {
        Self::with_behavior(StubBehavior::Succeed)
    }

    pub(crate) fn failing() -> Self {
        Self::with_behavior(StubBehavior::Fail)
    }

    pub(crate) fn hanging() -> Self {
        Self::with_behavior(StubBehavior::Hang)
    }

    fn with_behavior(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
            in_flight_dropped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Every event the stub has been asked to deliver, in order.
    pub(crate) fn calls(&self) -> Vec<ChangeEvent> {
        self.calls.lock().expect("Lock poisoned").clone()
    }

    /// Whether a hanging delivery was cancelled (its future dropped)
    /// instead of running to completion.
    pub(crate) fn in_flight_dropped(&self) -> bool {
        self.in_flight_dropped.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChangeNotifier for RecordingNotifier {
    async fn notify_change(&self, change: ChangeEvent) -> UpstreamResult<()> {
        self.calls.lock().expect("Lock poisoned").push(change);
        match self.behavior {
            StubBehavior::Succeed => Ok(()),
            StubBehavior::Fail => Err(UpstreamError::Api {
                status: 500,
                url: "stub://control-plane".to_string(),
            }),
            StubBehavior::Hang => {
                let _guard = DropFlag(self.in_flight_dropped.clone());
                std::future::pending::<()>().await;
                unreachable!("pending future completed")
            }
        }
    }
}
