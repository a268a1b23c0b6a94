/// Columns to read, optionally with one embedded relation, e.g.
/// `*,profiles(username,avatar_url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    columns: Vec<String>,
}

impl Select {
    pub fn all() -> Self {
        Self {
            columns: vec!["*".to_string()],
        }
    }

    pub fn with_relation(mut self, relation: &str, fields: &[&str]) -> Self {
        self.columns
            .push(format!("{}({})", relation, fields.join(",")));
        self
    }
}

impl std::fmt::Display for Select {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.columns.join(","))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// A read against one table: projection, ordering and a row limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    select: Select,
    order: Option<(String, Direction)>,
    limit: Option<usize>,
}

impl Query {
    pub fn table(name: &str) -> Self {
        Self {
            table: name.to_string(),
            select: Select::all(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, select: Select) -> Self {
        self.select = select;
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Query string in the PostgREST dialect, values percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![format!(
            "select={}",
            urlencoding::encode(&self.select.to_string())
        )];
        if let Some((column, direction)) = &self.order {
            params.push(format!(
                "order={}.{}",
                urlencoding::encode(column),
                direction.as_str()
            ));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        params.join("&")
    }
}
