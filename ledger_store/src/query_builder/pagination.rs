//! LIMIT / OFFSET

/// Pagination configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }

    pub fn to_sql(&self) -> String {
        let mut clauses = Vec::new();

        if let Some(limit) = self.limit {
            clauses.push(format!("LIMIT {}", limit));
        }

        if let Some(offset) = self.offset {
            clauses.push(format!("OFFSET {}", offset));
        }

        clauses.join(" ")
    }
}
