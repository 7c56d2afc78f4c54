//! Shared fakes for cc-app integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use cc_app::LazyFlipCard;
use cc_core::ports::{CatalogError, CatalogPort};
use cc_core::{CardState, EntityId, EntityRecord};
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_test_writer()
            .with_env_filter(EnvFilter::new("debug"))
            .try_init();
    });
}

pub fn id(value: u32) -> EntityId {
    EntityId::new(value).expect("test ids are positive")
}

pub fn record(value: u32, name: &str, types: &[&str]) -> EntityRecord {
    EntityRecord {
        id: id(value),
        name: name.to_string(),
        sprite: Some(format!("https://sprites.example/{value}.png")),
        types: types.iter().map(|t| t.to_string()).collect(),
        height: None,
        weight: None,
    }
}

/// In-memory log sink for asserting on formatted span and event output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Catalog fake with per-id scripted outcomes, call counting and an
/// optional gate that holds every request until opened.
pub struct ScriptedCatalog {
    scripts: Mutex<HashMap<EntityId, VecDeque<Result<EntityRecord, CatalogError>>>>,
    calls: Mutex<HashMap<EntityId, usize>>,
    gate_tx: watch::Sender<bool>,
}

impl ScriptedCatalog {
    pub fn new() -> Arc<Self> {
        Self::with_gate(true)
    }

    /// Requests block until [`ScriptedCatalog::open_gate`] is called.
    pub fn gated() -> Arc<Self> {
        Self::with_gate(false)
    }

    fn with_gate(open: bool) -> Arc<Self> {
        let (gate_tx, _) = watch::channel(open);
        Arc::new(Self {
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            gate_tx,
        })
    }

    /// Queue the outcome of the next unanswered call for `entity`.
    /// Unscripted calls answer `NotFound`.
    pub fn respond(&self, entity: u32, outcome: Result<EntityRecord, CatalogError>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(id(entity))
            .or_default()
            .push_back(outcome);
    }

    pub fn open_gate(&self) {
        self.gate_tx.send_replace(true);
    }

    pub fn calls(&self, entity: u32) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&id(entity))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl CatalogPort for ScriptedCatalog {
    async fn fetch(&self, entity: EntityId) -> Result<EntityRecord, CatalogError> {
        *self.calls.lock().unwrap().entry(entity).or_default() += 1;

        let mut gate = self.gate_tx.subscribe();
        gate.wait_for(|open| *open)
            .await
            .map_err(|_| CatalogError::Unavailable("gate closed".into()))?;

        self.scripts
            .lock()
            .unwrap()
            .get_mut(&entity)
            .and_then(|queue| queue.pop_front())
            .unwrap_or(Err(CatalogError::NotFound(entity)))
    }
}

/// Wait until the card's back load is no longer `Loading`.
pub async fn settled(card: &LazyFlipCard) -> CardState {
    let mut rx = card.subscribe();
    tokio::time::timeout(Duration::from_secs(2), async move {
        rx.wait_for(|state| !state.back_load.is_loading())
            .await
            .map(|state| state.clone())
    })
    .await
    .expect("card did not settle in time")
    .expect("card state channel closed")
}

/// Let spawned tasks run on the current-thread test runtime.
pub async fn drain_tasks() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
    tokio::time::sleep(Duration::from_millis(20)).await;
}
