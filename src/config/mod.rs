//! Application configuration and Notion credential resolution.

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default Notion API endpoint; override with `NOTION_BASE_URL`.
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com";

/// Pipeline (deals) collection queried for the dashboard.
const DEFAULT_DEALS_DB: &str = "d342aea5-0997-4410-b9f9-0ad4524fd596";

/// Financial-goal collection.
const DEFAULT_GOALS_DB: &str = "2f16d0373889807ba8c8db65ded46e57";

/// Token file fallback when `NOTION_TOKEN` is unset.
const DEFAULT_TOKEN_FILE: &str = ".notion_token";

/// Resolved Notion API credential.
///
/// A missing credential is an explicit state rather than an empty
/// string, so the fetch layer can fail with a typed error and the
/// dashboard can say exactly what is wrong.
#[derive(Clone)]
pub enum NotionCredential {
    Token(String),
    Missing,
}

impl NotionCredential {
    /// Resolve from `NOTION_TOKEN`, falling back to the file named by
    /// `NOTION_TOKEN_FILE` (default `.notion_token`).
    pub fn resolve() -> Self {
        let token_file =
            env::var("NOTION_TOKEN_FILE").unwrap_or_else(|_| DEFAULT_TOKEN_FILE.to_string());
        Self::resolve_from(env::var("NOTION_TOKEN").ok(), Path::new(&token_file))
    }

    fn resolve_from(env_token: Option<String>, token_file: &Path) -> Self {
        if let Some(token) = env_token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
        {
            return Self::Token(token);
        }

        match fs::read_to_string(token_file) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Self::Missing
                } else {
                    Self::Token(token.to_string())
                }
            }
            Err(_) => Self::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

// Keep the token out of debug output and logs.
impl fmt::Debug for NotionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(***)"),
            Self::Missing => f.write_str("Missing"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub notion_base_url: String,
    pub credential: NotionCredential,
    pub deals_database_id: String,
    pub goals_database_id: String,
    pub cache_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("ESTEIRA_PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse()
                .unwrap_or(8501),
            notion_base_url: env::var("NOTION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NOTION_BASE_URL.to_string()),
            credential: NotionCredential::resolve(),
            deals_database_id: env::var("ESTEIRA_DEALS_DB")
                .unwrap_or_else(|_| DEFAULT_DEALS_DB.to_string()),
            goals_database_id: env::var("ESTEIRA_GOALS_DB")
                .unwrap_or_else(|_| DEFAULT_GOALS_DB.to_string()),
            cache_ttl: Duration::from_secs(
                env::var("ESTEIRA_CACHE_TTL_SECS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .unwrap_or(300),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn env_token_wins_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "secret-from-file").unwrap();

        let credential =
            NotionCredential::resolve_from(Some("secret-from-env".to_string()), file.path());
        match credential {
            NotionCredential::Token(token) => assert_eq!(token, "secret-from-env"),
            NotionCredential::Missing => panic!("expected a token"),
        }
    }

    #[test]
    fn file_token_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  secret-from-file  ").unwrap();

        let credential = NotionCredential::resolve_from(None, file.path());
        match credential {
            NotionCredential::Token(token) => assert_eq!(token, "secret-from-file"),
            NotionCredential::Missing => panic!("expected a token"),
        }
    }

    #[test]
    fn blank_env_token_falls_through_to_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "secret-from-file").unwrap();

        let credential = NotionCredential::resolve_from(Some("   ".to_string()), file.path());
        match credential {
            NotionCredential::Token(token) => assert_eq!(token, "secret-from-file"),
            NotionCredential::Missing => panic!("expected a token"),
        }
    }

    #[test]
    fn absent_token_resolves_to_missing() {
        let dir = tempfile::tempdir().unwrap();
        let credential = NotionCredential::resolve_from(None, &dir.path().join("no-such-file"));
        assert!(credential.is_missing());
    }

    #[test]
    fn empty_token_file_resolves_to_missing() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let credential = NotionCredential::resolve_from(None, file.path());
        assert!(credential.is_missing());
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let credential = NotionCredential::Token("ntn_very_secret".to_string());
        let printed = format!("{credential:?}");
        assert!(!printed.contains("ntn_very_secret"));
        assert_eq!(printed, "Token(***)");
    }
}
