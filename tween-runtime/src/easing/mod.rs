//! # Easing 模块
//!
//! 缓动曲线：贝塞尔求值、命名曲线目录、控制点文本解析。
//!
//! ## 核心概念
//!
//! - `ControlPoint` / `BezierCurve`: 曲线本体与求值算法
//! - `NamedEasing`: 封闭的 16 项命名曲线目录
//! - `parse_control_points` / `resolve_easing`: 文本语法入口
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! // 命名曲线 → 规范控制点 → 补齐端点
//! let curve = NamedEasing::EaseInOut.control_points().with_unit_endpoints();
//!
//! // 时间进度 → 缓动进度
//! let eased = curve.eased_progress_at(0.5)?;
//! ```

mod bezier;
mod catalog;
mod parse;

pub use bezier::{BezierCurve, ControlPoint};
pub use catalog::{NamedEasing, control_points_for};
pub use parse::{is_valid_control_point_text, parse_control_points, resolve_easing};
