// Copyright (c) 2025 wxconvert authors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 启动时加载一次，之后以只读方式在各处理器之间共享
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 静态文件目录，挂载到 /static
    pub static_dir: String,
    /// 通过 GET /config 原样返回的本地JSON配置文件路径
    pub config_file: String,
    /// 文章抓取配置
    pub fetch: FetchSettings,
    /// 微信公众号接口配置
    pub wechat: WeChatSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 文章抓取配置设置
#[derive(Debug, Deserialize)]
pub struct FetchSettings {
    /// 抓取请求超时时间（秒）
    pub timeout_secs: u64,
    /// 抓取请求使用的User-Agent
    pub user_agent: String,
}

/// 微信公众号接口配置设置
#[derive(Debug, Deserialize)]
pub struct WeChatSettings {
    /// 接口基础URL，测试时可指向本地mock服务
    pub api_base_url: String,
    /// 接口请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从可选的配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5003)?
            .set_default("static_dir", "static")?
            .set_default("config_file", "config.json")?
            // Default fetch settings
            .set_default("fetch.timeout_secs", 10)?
            .set_default(
                "fetch.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            )?
            // Default WeChat API settings
            .set_default("wechat.api_base_url", "https://api.weixin.qq.com")?
            .set_default("wechat.timeout_secs", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("WXCONVERT").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::new().expect("defaults should load");
        assert_eq!(settings.server.port, 5003);
        assert_eq!(settings.fetch.timeout_secs, 10);
        assert_eq!(settings.wechat.api_base_url, "https://api.weixin.qq.com");
        assert_eq!(settings.config_file, "config.json");
    }
}
