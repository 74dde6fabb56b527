//! Fake inventories for driving the loader and the session.

use searchbox::inventory::{AppInventory, Candidate, MemoryInventory};
use searchbox::{AppItem, Result, SearchboxError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};

/// A latch that blocks enumeration until it is opened.
#[derive(Debug, Default)]
pub struct Gate {
    open: Mutex<bool>,
    changed: Condvar,
}

impl Gate {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn open(&self) {
        let mut open = self.open.lock().unwrap();
        *open = true;
        self.changed.notify_all();
    }

    pub fn wait(&self) {
        let mut open = self.open.lock().unwrap();
        while !*open {
            open = self.changed.wait(open).unwrap();
        }
    }
}

/// Opens its gate when dropped, so a failing assertion never leaves a blocking
/// worker parked and the runtime waiting on it.
pub struct GateGuard(pub Arc<Gate>);

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.0.open();
    }
}

/// Inventory that counts `enumerate` calls and can hold them behind a [`Gate`].
pub struct CountingInventory {
    inner: MemoryInventory,
    calls: Arc<AtomicUsize>,
    entered: Arc<AtomicUsize>,
    gate: Option<Arc<Gate>>,
}

impl CountingInventory {
    pub fn new(inner: MemoryInventory) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
            entered: Arc::new(AtomicUsize::new(0)),
            gate: None,
        }
    }

    pub fn gated(inner: MemoryInventory, gate: Arc<Gate>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new(inner)
        }
    }

    /// Number of finished `enumerate` calls.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Number of started `enumerate` calls.
    pub fn entered(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.entered)
    }
}

impl AppInventory for CountingInventory {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.wait();
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.enumerate()
    }
}

/// Inventory whose enumeration always fails.
pub struct FailingInventory;

impl AppInventory for FailingInventory {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        Err(SearchboxError::Inventory("package manager unavailable".to_string()))
    }
}

/// Inventory whose enumeration panics.
pub struct PanickingInventory;

impl AppInventory for PanickingInventory {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        panic!("inventory blew up");
    }
}

/// Inventory that refuses to resolve one identifier.
pub struct FlakyInventory {
    pub inner: MemoryInventory,
    pub broken: &'static str,
}

impl AppInventory for FlakyInventory {
    fn enumerate(&self) -> Result<Vec<Candidate>> {
        self.inner.enumerate()
    }

    fn resolve(&self, candidate: &Candidate) -> Result<AppItem> {
        if candidate.identifier == self.broken {
            return Err(SearchboxError::Resolution {
                identifier: candidate.identifier.clone(),
                reason: "label lookup failed".to_string(),
            });
        }
        self.inner.resolve(candidate)
    }
}
