//! Per-operation call log.

use callstore_core::CallRecord;

/// Append-only log of calls for one operation identity.
///
/// The counter and the record list grow together; both are only cleared by
/// dropping the log (backend flush).
#[derive(Debug, Default, Clone)]
pub struct CallLog {
    count: u64,
    records: Vec<CallRecord>,
}

impl CallLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one call and append its record
    pub fn record(&mut self, record: CallRecord) {
        self.count += 1;
        self.records.push(record);
    }

    /// Number of recorded calls
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Records in call order
    pub fn records(&self) -> &[CallRecord] {
        &self.records
    }
}
