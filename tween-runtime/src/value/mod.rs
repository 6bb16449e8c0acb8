//! # Value 模块
//!
//! 可插值的值模型与插值策略注册表。
//!
//! ## 核心概念
//!
//! - `Value` / `ValueKind`: 封闭的带标签值变体与类型标签
//! - `InterpolationStrategy`: 单一值类型的插值规则
//! - `InterpolationRegistry`: 类型标签到策略的映射，内置六种线性策略，
//!   可在启动期注册自定义策略（同一类型后注册者生效）
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! let registry = InterpolationRegistry::new();
//! let mid = registry.interpolate(&Value::Integer(0), &Value::Integer(10), 0.5)?;
//! assert_eq!(mid, Value::Integer(5));
//! ```

mod registry;
mod strategy;
mod types;

pub use registry::InterpolationRegistry;
pub use strategy::{
    ColorLerp, Float32Lerp, Float64Lerp, IntegerLerp, InterpolationStrategy, PointLerp, SizeLerp,
};
pub use types::{Color, Point2D, Size2D, Value, ValueKind};
