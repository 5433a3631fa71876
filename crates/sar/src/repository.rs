//! SAR repository capability
//!
//! Persistence is injected: the case manager only ever talks to this trait,
//! never to a storage technology. The in-memory implementation backs tests
//! and embedded use.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::report::SuspiciousActivityReport;
use crate::status::SarStatus;

/// Failure inside an injected repository implementation
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RepositoryError(pub String);

/// Storage capability for SARs.
///
/// Implementations must never delete: terminal SARs are retained for audit.
pub trait SarRepository {
    /// Insert or replace a SAR by its id
    fn save(&mut self, sar: &SuspiciousActivityReport) -> Result<(), RepositoryError>;

    /// Load a SAR by id
    fn load(&self, sar_id: &str) -> Result<Option<SuspiciousActivityReport>, RepositoryError>;

    /// Whether a SAR with this id exists
    fn exists(&self, sar_id: &str) -> Result<bool, RepositoryError>;

    /// All SARs currently in the given status
    fn list_by_status(
        &self,
        status: SarStatus,
    ) -> Result<Vec<SuspiciousActivityReport>, RepositoryError>;

    /// Every SAR, including terminal ones
    fn all(&self) -> Result<Vec<SuspiciousActivityReport>, RepositoryError>;
}

/// In-memory repository keyed by SAR id
#[derive(Debug, Default)]
pub struct InMemorySarRepository {
    reports: BTreeMap<String, SuspiciousActivityReport>,
}

impl InMemorySarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SarRepository for InMemorySarRepository {
    fn save(&mut self, sar: &SuspiciousActivityReport) -> Result<(), RepositoryError> {
        self.reports.insert(sar.sar_id.clone(), sar.clone());
        Ok(())
    }

    fn load(&self, sar_id: &str) -> Result<Option<SuspiciousActivityReport>, RepositoryError> {
        Ok(self.reports.get(sar_id).cloned())
    }

    fn exists(&self, sar_id: &str) -> Result<bool, RepositoryError> {
        Ok(self.reports.contains_key(sar_id))
    }

    fn list_by_status(
        &self,
        status: SarStatus,
    ) -> Result<Vec<SuspiciousActivityReport>, RepositoryError> {
        Ok(self
            .reports
            .values()
            .filter(|sar| sar.status == status)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<SuspiciousActivityReport>, RepositoryError> {
        Ok(self.reports.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::SarCategory;

    fn sar() -> SuspiciousActivityReport {
        SuspiciousActivityReport::new("P-001", SarCategory::Other, "narrative", "analyst")
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut repo = InMemorySarRepository::new();
        let report = sar();

        repo.save(&report).unwrap();

        let loaded = repo.load(&report.sar_id).unwrap().unwrap();
        assert_eq!(loaded.sar_id, report.sar_id);
        assert_eq!(loaded.narrative, report.narrative);
    }

    #[test]
    fn test_load_missing_is_none() {
        let repo = InMemorySarRepository::new();
        assert!(repo.load("SAR-MISSING").unwrap().is_none());
        assert!(!repo.exists("SAR-MISSING").unwrap());
    }

    #[test]
    fn test_save_replaces_existing() {
        let mut repo = InMemorySarRepository::new();
        let report = sar();
        repo.save(&report).unwrap();

        let updated = report.clone().with_narrative("updated narrative", "reviewer");
        repo.save(&updated).unwrap();

        let loaded = repo.load(&report.sar_id).unwrap().unwrap();
        assert_eq!(loaded.narrative, "updated narrative");
        assert_eq!(repo.all().unwrap().len(), 1);
    }

    #[test]
    fn test_list_by_status() {
        let mut repo = InMemorySarRepository::new();
        let draft = sar();
        let cancelled = sar()
            .with_status(SarStatus::Cancelled, "analyst")
            .with_cancellation_reason("duplicate case");

        repo.save(&draft).unwrap();
        repo.save(&cancelled).unwrap();

        assert_eq!(repo.list_by_status(SarStatus::Draft).unwrap().len(), 1);
        assert_eq!(repo.list_by_status(SarStatus::Cancelled).unwrap().len(), 1);
        assert_eq!(repo.list_by_status(SarStatus::Closed).unwrap().len(), 0);

        // Terminal SARs remain retrievable
        assert_eq!(repo.all().unwrap().len(), 2);
    }
}
