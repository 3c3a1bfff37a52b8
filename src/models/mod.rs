//! # 数据模型层
//!
//! 定义配置文件服务的全部线上数据类型（请求与响应）。
//!
//! ## 主要类型
//! - **浏览器配置文件**: 指纹、代理、时区、WebRTC、Navigator 等配置段
//! - **Cookie**: Cookie 数据及 `base64json` 导入格式
//! - **自动化**: 远程浏览器启动请求与连接 URL 响应
//!
//! ## 模块结构
//! - `profile`: 配置文件及其各配置段
//! - `cookie`: Cookie 类型与导入/导出载荷
//! - `automation`: 自动化启动类型

pub mod automation;
pub mod cookie;
pub mod profile;

pub use automation::{
    LaunchPuppeteerRequest, LaunchSeleniumRequest, PuppeteerLaunchResponse,
    SeleniumLaunchResponse,
};
pub use cookie::{AddCookieRequest, Cookie, CookiesResponse, DeleteCookiesResponse};
pub use profile::{
    BrowserProfile, CreateProfileResponse, GeneralProfileInformation, Navigator, Other,
    ProfileData, ProfileGetResponse, ProfileListResponse, ProfileStatusResponse, Proxy,
    StatusMessageResponse, Timezone, UpdateProfileRequest, WebRtc,
};

/// Unique identifier for a browser profile
pub type ProfileId = String;
