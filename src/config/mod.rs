//! 配置管理
//!
//! 加载顺序：`config.toml` → `config.{APP_ENV}.toml` → `RECRUIT_*` 环境变量 → 常用环境变量覆盖。
//! 所有字段都有默认值，无配置文件时也可启动。

mod r#impl;
mod structs;

pub use structs::*;
