//! Client-side model of the connection management dialog.
//!
//! Nothing here talks to a backend: connections live only as long as the dialog
//! state. A test is a two-step transition, [`ConnectionBook::begin_test`] followed
//! by [`ConnectionBook::finish_test`] after [`TEST_DURATION`], with the result
//! decided by [`outcome`].

use std::fmt;
use std::time::Duration;

/// Simulated latency of a connection test.
pub const TEST_DURATION: Duration = Duration::from_secs(2);

/// Probability that a simulated test succeeds.
pub const TEST_SUCCESS_RATE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionKind {
    #[default]
    Database,
    Sftp,
    Api,
    Cloud,
}

impl ConnectionKind {
    pub const ALL: [ConnectionKind; 4] = [
        ConnectionKind::Database,
        ConnectionKind::Sftp,
        ConnectionKind::Api,
        ConnectionKind::Cloud,
    ];

    /// Value used in the type selector.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionKind::Database => "database",
            ConnectionKind::Sftp => "sftp",
            ConnectionKind::Api => "api",
            ConnectionKind::Cloud => "cloud",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionKind::Database => "Database",
            ConnectionKind::Sftp => "SFTP Server",
            ConnectionKind::Api => "API Endpoint",
            ConnectionKind::Cloud => "Cloud Service",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Testing,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Testing => "testing",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: u32,
    pub name: String,
    pub kind: ConnectionKind,
    pub status: ConnectionStatus,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl Connection {
    /// `host[:port][/database]`, or `None` without a host.
    pub fn address(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let mut address = host.to_string();
        if let Some(port) = self.port {
            address.push_str(&format!(":{port}"));
        }
        if let Some(database) = self.database.as_deref().filter(|d| !d.is_empty()) {
            address.push('/');
            address.push_str(database);
        }
        Some(address)
    }

    pub fn is_testing(&self) -> bool {
        self.status == ConnectionStatus::Testing
    }
}

/// The "add connection" form. Credentials are collected but never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionDraft {
    pub name: String,
    pub kind: ConnectionKind,
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl ConnectionDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.host.trim().is_empty()
    }
}

/// The dialog's connection list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionBook {
    connections: Vec<Connection>,
    next_id: u32,
}

impl ConnectionBook {
    pub fn new() -> Self {
        Self {
            connections: Vec::new(),
            next_id: 1,
        }
    }

    /// The three seeded demo connections.
    pub fn demo() -> Self {
        let mut book = Self::new();
        book.push(
            "Production Database",
            ConnectionKind::Database,
            ConnectionStatus::Connected,
            "prod-db.example.com",
            Some(5432),
            Some("keansa_prod"),
        );
        book.push(
            "SFTP Server",
            ConnectionKind::Sftp,
            ConnectionStatus::Connected,
            "files.example.com",
            Some(22),
            None,
        );
        book.push(
            "Test Environment",
            ConnectionKind::Database,
            ConnectionStatus::Disconnected,
            "test-db.example.com",
            Some(5432),
            Some("keansa_test"),
        );
        book
    }

    fn push(
        &mut self,
        name: &str,
        kind: ConnectionKind,
        status: ConnectionStatus,
        host: &str,
        port: Option<u16>,
        database: Option<&str>,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.connections.push(Connection {
            id,
            name: name.to_string(),
            kind,
            status,
            host: Some(host.to_string()),
            port,
            database: database.map(str::to_string),
        });
        id
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn get(&self, id: u32) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Mark a connection as testing. Returns false if it is unknown or already testing.
    pub fn begin_test(&mut self, id: u32) -> bool {
        match self.connections.iter_mut().find(|c| c.id == id) {
            Some(connection) if !connection.is_testing() => {
                connection.status = ConnectionStatus::Testing;
                true
            }
            _ => false,
        }
    }

    pub fn finish_test(&mut self, id: u32, succeeded: bool) {
        if let Some(connection) = self.connections.iter_mut().find(|c| c.id == id) {
            connection.status = if succeeded {
                ConnectionStatus::Connected
            } else {
                ConnectionStatus::Disconnected
            };
            tracing::debug!("Connection test {}: {}", connection.name, connection.status);
        }
    }

    /// Add a disconnected connection from the form, or `None` if name or host is missing.
    pub fn add(&mut self, draft: &ConnectionDraft) -> Option<u32> {
        if !draft.is_complete() {
            return None;
        }
        let port = draft.port.trim().parse::<u16>().ok();
        let database = Some(draft.database.trim()).filter(|d| !d.is_empty());
        Some(self.push(
            draft.name.trim(),
            draft.kind,
            ConnectionStatus::Disconnected,
            draft.host.trim(),
            port,
            database,
        ))
    }
}

impl Default for ConnectionBook {
    fn default() -> Self {
        Self::demo()
    }
}

/// Whether a test succeeds for a uniform `roll` in `[0, 1)`.
pub fn outcome(roll: f64) -> bool {
    roll < TEST_SUCCESS_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_connections() {
        let book = ConnectionBook::demo();
        let names: Vec<_> = book.connections().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["Production Database", "SFTP Server", "Test Environment"]
        );
        assert_eq!(
            book.get(1).and_then(Connection::address).as_deref(),
            Some("prod-db.example.com:5432/keansa_prod")
        );
        assert_eq!(
            book.get(2).and_then(Connection::address).as_deref(),
            Some("files.example.com:22")
        );
        assert_eq!(book.get(3).map(|c| c.status), Some(ConnectionStatus::Disconnected));
    }

    #[test]
    fn test_test_transitions() {
        let mut book = ConnectionBook::demo();

        assert!(book.begin_test(3));
        assert!(book.get(3).is_some_and(Connection::is_testing));
        assert!(!book.begin_test(3));
        book.finish_test(3, true);
        assert_eq!(book.get(3).map(|c| c.status), Some(ConnectionStatus::Connected));

        assert!(book.begin_test(1));
        book.finish_test(1, false);
        assert_eq!(book.get(1).map(|c| c.status), Some(ConnectionStatus::Disconnected));

        assert!(!book.begin_test(42));
    }

    #[test]
    fn test_add_requires_name_and_host() {
        let mut book = ConnectionBook::demo();
        let mut draft = ConnectionDraft {
            name: "Warehouse".to_string(),
            ..ConnectionDraft::default()
        };
        assert_eq!(book.add(&draft), None);

        draft.host = "  ".to_string();
        assert_eq!(book.add(&draft), None);

        draft.name = String::new();
        draft.host = "wh.example.com".to_string();
        assert_eq!(book.add(&draft), None);
        assert_eq!(book.connections().len(), 3);
    }

    #[test]
    fn test_add_parses_port() {
        let mut book = ConnectionBook::demo();
        let draft = ConnectionDraft {
            name: "Warehouse".to_string(),
            kind: ConnectionKind::Cloud,
            host: "wh.example.com".to_string(),
            port: "abc".to_string(),
            username: "etl".to_string(),
            password: "secret".to_string(),
            ..ConnectionDraft::default()
        };

        let id = book.add(&draft).unwrap();
        assert_eq!(id, 4);
        let added = book.get(id).unwrap();
        assert_eq!(added.status, ConnectionStatus::Disconnected);
        assert_eq!(added.kind, ConnectionKind::Cloud);
        assert_eq!(added.port, None);
        assert_eq!(added.address().as_deref(), Some("wh.example.com"));

        let with_port = ConnectionDraft {
            port: "8080".to_string(),
            ..draft
        };
        let id = book.add(&with_port).unwrap();
        assert_eq!(book.get(id).and_then(|c| c.port), Some(8080));
    }

    #[test]
    fn test_outcome_threshold() {
        assert!(outcome(0.0));
        assert!(outcome(0.69));
        assert!(!outcome(0.7));
        assert!(!outcome(0.99));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ConnectionKind::parse("sftp"), Some(ConnectionKind::Sftp));
        assert_eq!(ConnectionKind::parse("ftp"), None);
        assert_eq!(ConnectionDraft::default().kind, ConnectionKind::Database);
    }
}
