use super::types::Args;
use sql_middleware::middleware::DatabaseType;

impl Args {
    /// Check the database connection arguments fit the chosen backend.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database configuration is invalid
    pub fn validate(&mut self) -> Result<(), String> {
        if self.db_type == DatabaseType::Postgres {
            if self.db_user.is_none() {
                return Err("Postgres user is required".to_string());
            }
            if self.db_host.is_none() || self.db_host.as_deref().unwrap_or_default().is_empty() {
                return Err("Postgres host is required".to_string());
            }
            if self.db_port.is_none() {
                return Err("Postgres port is required".to_string());
            }
            if self.db_password.is_none() {
                return Err("Postgres password is required".to_string());
            }
        }
        Ok(())
    }
}
