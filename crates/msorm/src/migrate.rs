//! DDL ordering preferences reported to the schema migrator.
//!
//! The migrator itself lives with the schema layer; the dialect only states how
//! SQL Server wants its DDL sequenced.

/// Migration preferences for a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MigratorConfig {
    /// Emit `CREATE INDEX` as separate statements after `CREATE TABLE`
    /// instead of declaring indexes inline.
    pub create_index_after_create_table: bool,
}

impl MigratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create_index_after_create_table(mut self, enabled: bool) -> Self {
        self.create_index_after_create_table = enabled;
        self
    }
}

/// Preferences reported by the SQL Server dialect: indexes follow the table.
pub const SQL_SERVER_MIGRATOR: MigratorConfig = MigratorConfig {
    create_index_after_create_table: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_server_creates_indexes_after_table() {
        assert!(!MigratorConfig::new().create_index_after_create_table);
        assert_eq!(
            MigratorConfig::new().with_create_index_after_create_table(true),
            SQL_SERVER_MIGRATOR
        );
    }
}
