use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One named table of a stats API response.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(default)]
    pub row_set: Vec<Vec<Value>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
}

impl ResultSet {
    #[must_use]
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// One object per row, keyed by header, in header order.
    #[must_use]
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.row_set
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(col, header)| (header.clone(), cell(row, col)))
                    .collect()
            })
            .collect()
    }

    /// `{header: {"<row index>": value}}`, the column-oriented shape the client reads
    /// career stats in.
    #[must_use]
    pub fn to_columns(&self) -> Map<String, Value> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let cells: Map<String, Value> = self
                    .row_set
                    .iter()
                    .enumerate()
                    .map(|(i, row)| (i.to_string(), cell(row, col)))
                    .collect();
                (header.clone(), Value::Object(cells))
            })
            .collect()
    }
}

fn cell(row: &[Value], col: usize) -> Value {
    row.get(col).cloned().unwrap_or(Value::Null)
}
