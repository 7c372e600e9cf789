/// Represents a field selection in a SELECT clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectField {
    /// Select specific field: SELECT field_name
    Field(String),
    /// Select field or expression with alias: SELECT expr AS alias
    FieldWithAlias { field: String, alias: String },
    /// COUNT(*) or COUNT(field), optionally aliased
    Count {
        field: Option<String>,
        alias: Option<String>,
    },
}

impl SelectField {
    /// Create a simple field selection
    pub fn field(field: impl Into<String>) -> Self {
        SelectField::Field(field.into())
    }

    /// Create a field (or computed expression) with alias
    pub fn field_as(field: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectField::FieldWithAlias {
            field: field.into(),
            alias: alias.into(),
        }
    }

    /// Create COUNT(*) aggregate
    pub fn count_all() -> Self {
        SelectField::Count {
            field: None,
            alias: None,
        }
    }

    /// Add an alias to a COUNT aggregate; other selections are returned unchanged
    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        match self {
            SelectField::Count { field, .. } => SelectField::Count {
                field,
                alias: Some(alias.into()),
            },
            other => other,
        }
    }

    pub fn to_sql(&self) -> String {
        match self {
            SelectField::Field(name) => name.clone(),
            SelectField::FieldWithAlias { field, alias } => format!("{} AS {}", field, alias),
            SelectField::Count { field, alias } => {
                let aggregate = format!("COUNT({})", field.as_deref().unwrap_or("*"));
                match alias {
                    Some(alias) => format!("{} AS {}", aggregate, alias),
                    None => aggregate,
                }
            }
        }
    }
}
