//! # CDP 就绪探测层
//!
//! 远程浏览器启动后，其 Chrome DevTools Protocol 控制端点需要一段不确定的
//! 时间才能接受连接。本层通过轮询版本端点（`/json/version`）判断端点何时
//! 就绪，避免固定时长的等待。
//!
//! ## 主要功能
//! - **就绪轮询**: 带总超时预算的顺序探测循环
//! - **指数退避**: 前几次尝试后间隔翻倍，直至上限
//! - **单次超时**: 每次探测携带短于当前间隔的独立超时，保证节奏可预测
//!
//! ## 模块结构
//! - `poller`: 轮询循环与纯状态机

pub mod poller;


pub use poller::{health_url, wait_for_ready, DEFAULT_INITIAL_INTERVAL, VERSION_PATH};
