pub mod attendance;
pub mod employee;

/// Accumulates `column = ?` assignments for a dynamic UPDATE statement.
/// Every patchable column in this schema is TEXT, so values bind as strings.
#[derive(Debug, Default)]
pub struct SqlPatch {
    columns: Vec<&'static str>,
    values: Vec<String>,
}

impl SqlPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &'static str, value: String) {
        self.columns.push(column);
        self.values.push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Builds `UPDATE {table} SET a = ?, b = ? WHERE {key_column} = ?` and
    /// returns the SQL together with the SET values; the key binds last.
    pub fn into_update_sql(self, table: &str, key_column: &str) -> (String, Vec<String>) {
        let set_clause = self
            .columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!("UPDATE {table} SET {set_clause} WHERE {key_column} = ?");
        (sql, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::SqlPatch;

    #[test]
    fn builds_update_for_supplied_columns_only() {
        let mut patch = SqlPatch::new();
        patch.set("full_name", "Jane Doe".into());
        patch.set("department", "Finance".into());

        let (sql, values) = patch.into_update_sql("employees", "employee_id");
        assert_eq!(
            sql,
            "UPDATE employees SET full_name = ?, department = ? WHERE employee_id = ?"
        );
        assert_eq!(values, vec!["Jane Doe".to_string(), "Finance".to_string()]);
    }

    #[test]
    fn empty_patch_is_detectable() {
        assert!(SqlPatch::new().is_empty());
    }
}
