//! TuitionHub - 学校作业分发与提交服务
//!
//! 基于 Actix Web 构建的作业管理后端：学生凭邮箱匹配花名册，
//! 按班级与日期下载作业文档，并上传提交文件。
//!
//! # 架构
//! - `cache`: 缓存层（Moka）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `middlewares`: 速率限制中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 花名册存储层（XLSX/CSV）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
