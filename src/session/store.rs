//! Concurrent in-memory session store.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time;
use uuid::Uuid;

use crate::analyzer::Analysis;
use crate::config::SessionConfig;
use crate::observability::metrics;
use crate::reduce::Toggle;
use crate::session::state::{Session, SessionView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),

    #[error("Session store is full ({capacity} sessions)")]
    StoreFull { capacity: usize },
}

/// Sessions keyed by ID.
///
/// Mutations go through the map entry, so two toggles on the same session
/// are applied one after the other, each against the latest state. Every
/// access counts as use; sessions idle for longer than the TTL are dropped
/// by [`SessionStore::evict_idle`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<DashMap<Uuid, Session>>,
    max_sessions: usize,
    idle_ttl: Duration,
    sweep_interval: Duration,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            max_sessions: config.max_sessions,
            idle_ttl: Duration::from_secs(config.idle_ttl_secs),
            sweep_interval: Duration::from_secs(config.sweep_interval_secs),
        }
    }

    /// Open a session for a fresh analysis.
    ///
    /// A full store first drops its idle sessions; creation is refused only
    /// when every slot is still in use.
    pub fn create(&self, analysis: Analysis) -> Result<(Uuid, SessionView), SessionError> {
        if self.inner.len() >= self.max_sessions {
            self.evict_idle();
        }
        if self.inner.len() >= self.max_sessions {
            tracing::warn!(capacity = self.max_sessions, "Session store full");
            return Err(SessionError::StoreFull {
                capacity: self.max_sessions,
            });
        }

        let id = Uuid::new_v4();
        let session = Session::new(analysis);
        let view = session.view();
        self.inner.insert(id, session);

        metrics::record_active_sessions(self.inner.len());
        tracing::info!(session_id = %id, url = %view.url, "Session created");
        Ok((id, view))
    }

    pub fn view(&self, id: Uuid) -> Result<SessionView, SessionError> {
        self.with_session_mut(id, |session| session.view())
    }

    /// Run `f` with exclusive access to one session, marking it as used.
    pub fn with_session_mut<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, SessionError> {
        let mut entry = self.inner.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        let session = entry.value_mut();
        session.touch();
        Ok(f(session))
    }

    /// Apply a toggle to a session and return the updated view.
    pub fn toggle(&self, id: Uuid, toggle: Toggle) -> Result<SessionView, SessionError> {
        let view = self.with_session_mut(id, |session| {
            session.toggle(toggle);
            session.view()
        })?;

        metrics::record_toggle(toggle.part_name(), toggle.enabled());
        tracing::debug!(
            session_id = %id,
            part = toggle.part_name(),
            enabled = toggle.enabled(),
            candidate = %view.candidate_url,
            "Toggle applied"
        );
        Ok(view)
    }

    /// Replace a session's analysis, resetting its selection if the URL changed.
    pub fn replace_analysis(&self, id: Uuid, analysis: Analysis) -> Result<SessionView, SessionError> {
        self.with_session_mut(id, |session| {
            if session.replace_analysis(analysis) {
                tracing::debug!(session_id = %id, "New URL, selection reset");
            }
            session.view()
        })
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        let removed = self.inner.remove(&id).is_some();
        if removed {
            metrics::record_active_sessions(self.inner.len());
        }
        removed
    }

    /// Drop every session idle for longer than the TTL. Returns how many went.
    pub fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let before = self.inner.len();
        self.inner
            .retain(|_, session| session.idle_for(now) <= self.idle_ttl);

        let evicted = before.saturating_sub(self.inner.len());
        if evicted > 0 {
            metrics::record_active_sessions(self.inner.len());
            tracing::info!(evicted, remaining = self.inner.len(), "Idle sessions evicted");
        }
        evicted
    }

    /// Periodically evict idle sessions until shutdown.
    pub async fn run_sweeper(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            idle_ttl_secs = self.idle_ttl.as_secs(),
            interval_secs = self.sweep_interval.as_secs(),
            "Session sweeper starting"
        );

        let mut ticker = time::interval(self.sweep_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.evict_idle();
                }
                _ = shutdown.recv() => {
                    tracing::info!("Session sweeper received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
