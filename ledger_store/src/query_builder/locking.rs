//! Row-level locking clause

/// Row lock taken by a SELECT inside a transaction.
///
/// Only the blocking form exists: a second locker waits until the holder's
/// transaction commits or rolls back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLock {
    /// `FOR UPDATE`, optionally restricted to the rows of one table reference
    ForUpdate { of: Option<String> },
}

impl RowLock {
    pub fn for_update() -> Self {
        RowLock::ForUpdate { of: None }
    }

    pub fn for_update_of(table_ref: impl Into<String>) -> Self {
        RowLock::ForUpdate {
            of: Some(table_ref.into()),
        }
    }

    pub fn to_sql(&self) -> String {
        match self {
            RowLock::ForUpdate { of: Some(table_ref) } => format!("FOR UPDATE OF {}", table_ref),
            RowLock::ForUpdate { of: None } => "FOR UPDATE".to_string(),
        }
    }
}
