//! # HTTP 请求层
//!
//! 提供面向配置文件服务的 HTTP 请求构建与分发能力，是整个客户端的传输核心。
//!
//! ## 主要功能
//! - **链式请求构建**: 逐步累积方法、URL、请求头和请求体
//! - **延迟配置队列**: 异步配置步骤在发送前按入队顺序全部执行完毕
//! - **编码策略**: JSON、扁平化表单、`profileData` 信封表单三种显式编码
//! - **类型化错误映射**: 将传输层失败翻译为统一的错误分类
//!
//! ## 模块结构
//! - `agent`: 请求工厂（`HttpAgent` / `ApiAgent`）
//! - `request`: 请求包装器与分发逻辑
//! - `encoding`: 请求体编码策略

pub mod agent;
pub mod encoding;
pub mod request;


pub use agent::{init_agent, ApiAgent, HttpAgent};
pub use encoding::BodyEncoding;
pub use request::{DeferredAction, RequestBuilder, RequestState};
