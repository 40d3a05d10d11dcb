//! Connection settings for the catalog store.

/// Where and how to reach the Postgres instance holding the `books` table.
///
/// Values come from the environment (or flags) at the shell boundary; no
/// credentials are embedded in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConf {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
}

impl ConnectionConf {
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .application_name("bookscape");
        if let Some(password) = &self.password {
            config.password(password);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use tokio_postgres::config::Host;

    use super::*;

    #[test]
    fn pg_config_carries_all_settings() {
        let conf = ConnectionConf {
            host: "db.internal".to_string(),
            port: 5433,
            database: "bookscape_explorer".to_string(),
            user: "reader".to_string(),
            password: Some("hunter2".to_string()),
        };
        let config = conf.pg_config();
        assert_eq!(
            config.get_hosts(),
            &[Host::Tcp("db.internal".to_string())]
        );
        assert_eq!(config.get_ports(), &[5433]);
        assert_eq!(config.get_dbname(), Some("bookscape_explorer"));
        assert_eq!(config.get_user(), Some("reader"));
        assert_eq!(config.get_password(), Some("hunter2".as_bytes()));
        assert_eq!(config.get_application_name(), Some("bookscape"));
    }

    #[test]
    fn password_is_optional() {
        let conf = ConnectionConf {
            host: "localhost".to_string(),
            port: 5432,
            database: "bookscape_explorer".to_string(),
            user: "postgres".to_string(),
            password: None,
        };
        assert_eq!(conf.pg_config().get_password(), None);
    }
}
