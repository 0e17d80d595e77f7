use serde::{Deserialize, Serialize};

/// A GitHub issue label.
///
/// `color` is a hex string without the `#` prefix (e.g., "d73a4a").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The operation a sync outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOp {
    Delete,
    Create,
}

/// What happened to a single label during a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelStatus {
    /// The API call succeeded.
    Applied,
    /// The end state already held: delete of a missing label, or create of
    /// an existing one.
    AlreadySatisfied,
    /// The API call failed; the rest of the batch continued.
    Failed(String),
}

/// Per-label record of one step of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOutcome {
    pub name: String,
    pub op: LabelOp,
    pub status: LabelStatus,
}

/// Structured result of a full label replacement.
///
/// The sync is not transactional; callers inspect the outcomes to decide
/// whether partial success is acceptable.
#[derive(Debug, Clone, Default)]
pub struct LabelSyncReport {
    pub outcomes: Vec<LabelOutcome>,
}

impl LabelSyncReport {
    pub fn push(&mut self, name: &str, op: LabelOp, status: LabelStatus) {
        self.outcomes.push(LabelOutcome {
            name: name.to_string(),
            op,
            status,
        });
    }

    /// Number of outcomes that failed outright.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, LabelStatus::Failed(_)))
            .count()
    }

    /// True when every outcome is `Applied` or `AlreadySatisfied`.
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}
