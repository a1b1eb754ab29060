//! One-shot Loading -> Success lifecycle of the chat list screen.
//!
//! The controller is the only writer of [`ScreenState`]. Renderers hold a
//! [`StateSubscription`] and are woken on every transition. Dropping the
//! controller cancels a load that has not published yet.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, Stream};
use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::config::{LoadConfig, ValidateExt};
use crate::error::Result;
use crate::mock::MockDataProvider;
use crate::models::{ChatsSnapshot, ScreenState};

/// Drives the chat list from `Loading` to `Success` after a random delay
pub struct ChatListStateController {
    state: Arc<watch::Sender<ScreenState>>,
    cancelled: Arc<AtomicBool>,
    delay: Duration,
    task: JoinHandle<()>,
}

impl ChatListStateController {
    /// Start loading with the default timing and chat count.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(provider: MockDataProvider) -> Self {
        Self::start(provider, LoadConfig::default())
    }

    /// Start loading with custom timing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(provider: MockDataProvider, load: LoadConfig) -> Result<Self> {
        load.validate_input()?;
        Ok(Self::start(provider, load))
    }

    fn start(provider: MockDataProvider, load: LoadConfig) -> Self {
        let (state, _) = watch::channel(ScreenState::Loading);
        let state = Arc::new(state);
        let cancelled = Arc::new(AtomicBool::new(false));

        let delay = Duration::from_millis(rand::thread_rng().gen_range(load.delay_ms.as_range()));
        let deadline = Instant::now() + delay;
        debug!(delay_ms = delay.as_millis() as u64, "Scheduled chat list load");

        let task = tokio::spawn(Self::load(
            provider,
            load.chat_count,
            deadline,
            state.clone(),
            cancelled.clone(),
        ));

        Self {
            state,
            cancelled,
            delay,
            task,
        }
    }

    async fn load(
        provider: MockDataProvider,
        chat_count: usize,
        deadline: Instant,
        state: Arc<watch::Sender<ScreenState>>,
        cancelled: Arc<AtomicBool>,
    ) {
        sleep_until(deadline).await;

        let snapshot = provider.fetch_snapshot(chat_count);
        let chats = snapshot.chats.len();

        // Runs under the channel's write lock, see `Drop`.
        let published = state.send_if_modified(move |current| {
            if cancelled.load(Ordering::Acquire) || !current.is_loading() {
                return false;
            }
            *current = ScreenState::Success(snapshot);
            true
        });

        if published {
            info!(chats, "Chat list loaded");
        }
    }

    /// Latest published state
    pub fn current_state(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// Observe state changes. Dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> StateSubscription {
        StateSubscription {
            rx: self.state.subscribe(),
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    /// Delay chosen for this load, measured from construction
    pub fn load_delay(&self) -> Duration {
        self.delay
    }

    /// Whether the load task has published or been cancelled
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ChatListStateController {
    fn drop(&mut self) {
        if self.task.is_finished() {
            return;
        }
        // Holding the read lock orders the flag against an in-flight publish.
        let current = self.state.borrow();
        self.cancelled.store(true, Ordering::Release);
        let was_loading = current.is_loading();
        drop(current);

        self.task.abort();
        if was_loading {
            debug!("Chat list load cancelled before publishing");
        }
    }
}

/// Read-only view of the controller's state
pub struct StateSubscription {
    rx: watch::Receiver<ScreenState>,
}

impl StateSubscription {
    /// State at the time of the call. Does not consume a pending change.
    pub fn current(&self) -> ScreenState {
        self.rx.borrow().clone()
    }

    /// Wait for the next transition.
    ///
    /// Returns `None` once the controller is gone and no further change can
    /// happen.
    pub async fn changed(&mut self) -> Option<ScreenState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Resolve with the loaded data, or `None` if the load was cancelled.
    pub async fn wait_until_loaded(&mut self) -> Option<ChatsSnapshot> {
        let state = self.rx.wait_for(ScreenState::is_success).await.ok()?;
        state.snapshot().cloned()
    }

    /// Stream of states, starting with the current one
    pub fn into_stream(self) -> impl Stream<Item = ScreenState> + Send {
        stream::unfold((self, true), |(mut sub, first)| async move {
            if first {
                let state = sub.rx.borrow_and_update().clone();
                return Some((state, (sub, false)));
            }
            let state = sub.changed().await?;
            Some((state, (sub, false)))
        })
    }
}
