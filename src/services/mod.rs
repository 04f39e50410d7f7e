//! 服务层模块
//!
//! - config: 配置服务（阅读器参数与按键覆盖）

pub mod config;

pub use config::{ensure_config_file, load_config, ReaderConfig};
