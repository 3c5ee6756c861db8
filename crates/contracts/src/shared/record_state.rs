use serde::{Deserialize, Serialize};

/// Lifecycle of a soft-deletable record, derived from its `isActive` / `isDeleted` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordState {
    Active,
    Inactive,
    Deleted,
}

impl RecordState {
    pub fn from_flags(is_active: bool, is_deleted: bool) -> Self {
        if is_deleted {
            RecordState::Deleted
        } else if is_active {
            RecordState::Active
        } else {
            RecordState::Inactive
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecordState::Active => "Active",
            RecordState::Inactive => "Inactive",
            RecordState::Deleted => "Deleted",
        }
    }

    /// Badge variant used by list tables.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            RecordState::Active => "success",
            RecordState::Inactive => "warning",
            RecordState::Deleted => "error",
        }
    }

    /// Soft delete is offered on live rows only.
    pub fn can_soft_delete(&self) -> bool {
        !matches!(self, RecordState::Deleted)
    }

    /// Restore and hard delete are offered on soft-deleted rows only.
    pub fn can_restore(&self) -> bool {
        matches!(self, RecordState::Deleted)
    }

    pub fn can_hard_delete(&self) -> bool {
        matches!(self, RecordState::Deleted)
    }
}

/// Implemented by every DTO that carries the soft-delete flags.
pub trait HasRecordState {
    fn record_state(&self) -> RecordState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_wins_over_active() {
        assert_eq!(RecordState::from_flags(true, true), RecordState::Deleted);
        assert_eq!(RecordState::from_flags(false, true), RecordState::Deleted);
    }

    #[test]
    fn test_live_states() {
        assert_eq!(RecordState::from_flags(true, false), RecordState::Active);
        assert_eq!(RecordState::from_flags(false, false), RecordState::Inactive);
    }

    #[test]
    fn test_allowed_actions() {
        assert!(RecordState::Active.can_soft_delete());
        assert!(RecordState::Inactive.can_soft_delete());
        assert!(!RecordState::Active.can_restore());
        assert!(!RecordState::Active.can_hard_delete());
        assert!(!RecordState::Deleted.can_soft_delete());
        assert!(RecordState::Deleted.can_restore());
        assert!(RecordState::Deleted.can_hard_delete());
    }
}
