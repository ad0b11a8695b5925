use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit fields embedded in every mutable aggregate.
///
/// `created_by` doubles as the ownership token: mutations are only allowed
/// when the acting identity matches it (see [`crate::policy`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Audit {
    pub fn new(created_by: impl Into<String>) -> Self {
        Self {
            created_by: created_by.into(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    /// Stamp an update. `updated_at` never moves backwards once set.
    pub fn record_update(&mut self, updated_by: impl Into<String>) {
        let now = Utc::now();
        self.updated_by = Some(updated_by.into());
        self.updated_at = Some(match self.updated_at {
            Some(prev) if prev > now => prev,
            _ => now,
        });
    }
}
