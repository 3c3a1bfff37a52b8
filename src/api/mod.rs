//! # API 客户端层
//!
//! 将配置文件服务的 HTTP 接口封装为按资源划分的客户端方法。
//!
//! ## 主要资源
//! - **profiles**: 配置文件的增删改查、启动与停止
//! - **cookies**: Cookie 的读取、导入（`base64json` 格式）与清空
//! - **automation**: 远程自动化浏览器的启动端点
//!
//! ## 模块结构
//! - `client`: 客户端入口（`ProfileServiceClient`）
//! - `profiles`: 配置文件操作
//! - `cookies`: Cookie 操作
//! - `automation`: 自动化启动操作

pub mod automation;
pub mod client;
pub mod cookies;
pub mod profiles;


pub use automation::AutomationApi;
pub use client::ProfileServiceClient;
pub use cookies::CookiesApi;
pub use profiles::ProfilesApi;
