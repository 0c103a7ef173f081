use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub notion: NotionConfig,
    pub contact: ContactConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Configuration for the Notion integration backing the people list
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Internal integration secret
    pub token: String,
    /// Database holding one page per person
    pub people_database_id: String,
    /// API base URL, overridable for tests and proxies
    pub api_base_url: String,
    /// Value of the `Notion-Version` header
    pub version: String,
    /// Number of results requested per query (Notion caps this at 100)
    pub page_size: u32,
    pub timeout: Duration,
}

/// Contact form relay configuration
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Webhook receiving accepted submissions. When unset, submissions are only logged.
    pub webhook_url: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            notion: NotionConfig::from_env()?,
            contact: ContactConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl NotionConfig {
    const DEFAULT_API_BASE_URL: &'static str = "https://api.notion.com";
    const DEFAULT_VERSION: &'static str = "2022-06-28";
    const MAX_PAGE_SIZE: u32 = 100;
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let token = env::var("NOTION_TOKEN")
            .map_err(|_| "NOTION_TOKEN environment variable is required".to_string())?;

        let people_database_id = env::var("NOTION_PEOPLE_DATABASE_ID").map_err(|_| {
            "NOTION_PEOPLE_DATABASE_ID environment variable is required".to_string()
        })?;

        let api_base_url = env::var("NOTION_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let version =
            env::var("NOTION_VERSION").unwrap_or_else(|_| Self::DEFAULT_VERSION.to_string());

        let page_size = env::var("NOTION_PAGE_SIZE")
            .unwrap_or_else(|_| Self::MAX_PAGE_SIZE.to_string())
            .parse::<u32>()
            .map_err(|_| "NOTION_PAGE_SIZE must be a valid number".to_string())?
            .clamp(1, Self::MAX_PAGE_SIZE);

        let timeout_secs = env::var("NOTION_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "NOTION_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            token,
            people_database_id,
            api_base_url,
            version,
            page_size,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl ContactConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let webhook_url = env::var("CONTACT_WEBHOOK_URL")
            .ok()
            .filter(|s| !s.is_empty());

        let timeout_secs = env::var("CONTACT_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "CONTACT_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            webhook_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Manuvantara API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the Manuvantara website".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
