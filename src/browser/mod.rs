//! # 浏览器会话层
//!
//! 管理反检测浏览器实例的启动与关闭。启动调用返回远程调试 URL 后，
//! 先经由 CDP 就绪探测确认端点可连接，再将 URL 交给调用方的自动化库。
//!
//! ## 主要功能
//! - **启动**: 通过自动化端点启动配置文件对应的浏览器
//! - **快速开始**: 自动创建配置文件并立即启动
//! - **生命周期**: 幂等的显式关闭句柄，不依赖全局信号监听
//!
//! ## 模块结构
//! - `session`: 启动配置、会话入口与浏览器句柄

pub mod session;

#[cfg(test)]
pub mod tests;

pub use session::{close_all, BrowserHandle, CloakBrowser, LaunchConfig};
