//! Recorded host sessions for replay.

use crate::host::HostEvent;
use crate::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sequence of host callbacks captured from a real device or written by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub events: Vec<HostEvent>,
}

impl Session {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Session(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Session(format!("{}: {}", path.display(), e)))?;
        let session = Self::from_json(&json)?;
        log::info!("Loaded {} events from {:?}", session.events.len(), path);
        Ok(session)
    }

    /// Number of pointer samples in the session.
    pub fn pointer_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::Pointer { .. }))
            .count()
    }
}
