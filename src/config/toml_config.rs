use crate::core::client::ClientConfiguration;
use crate::core::dispatch::DispatchOptions;
use crate::utils::error::{Result, SdkError};
use crate::utils::validation::{
    validate_api_root, validate_non_empty_string, validate_one_of, validate_socket_address,
    validate_url,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn default_address() -> String {
    "127.0.0.1:29572".to_string()
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfiguration,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub api_root: String,
    #[serde(default = "default_true")]
    pub validate_requests: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            api_root: String::new(),
            validate_requests: true,
        }
    }
}

impl ServerConfig {
    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            validate_requests: self.validate_requests,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl SdkConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SdkError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SdkError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NF_ADDRESS})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SdkError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_socket_address("server.address", &self.server.address)?;
        validate_api_root("server.api_root", &self.server.api_root)?;

        validate_one_of("client.scheme", &self.client.scheme, &["http", "https"])?;
        if let Some(host) = &self.client.host {
            validate_non_empty_string("client.host", host)?;
        }
        validate_non_empty_string("client.user_agent", &self.client.user_agent)?;

        // 伺服器 URL 需先代入變數預設值再檢查
        let servers = self
            .client
            .servers
            .iter()
            .map(|s| ("client.servers".to_string(), s))
            .chain(self.client.operation_servers.iter().flat_map(|(op, list)| {
                list.iter()
                    .map(move |s| (format!("client.operation_servers.{}", op), s))
            }));
        for (field, server) in servers {
            let url = server.url(&self.client.server_variables)?;
            validate_url(&field, &url)?;
        }

        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }
}
