//! # Error 模块
//!
//! 定义 tween-runtime 中使用的错误类型。

use thiserror::Error;

use crate::value::ValueKind;

/// 曲线错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// 无效的曲线
    #[error("无效的曲线: {message}")]
    InvalidCurve { message: String },

    /// 无效的控制点文本格式
    #[error("无效的控制点格式: {message}")]
    InvalidFormat { message: String },

    /// 未知的缓动曲线名称
    #[error("未知的缓动曲线 '{name}'")]
    UnknownEasing { name: String },
}

/// 插值错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolateError {
    /// 值类型没有注册插值策略
    #[error("值类型 {kind} 没有注册插值策略")]
    UnsupportedType { kind: ValueKind },

    /// 进度超出 [0, 1] 范围
    #[error("进度 {progress} 超出 [0, 1] 范围")]
    ProgressOutOfRange { progress: f64 },

    /// 起止值的类型标签不一致
    #[error("起止值类型不一致: {start} 与 {end}")]
    KindMismatch { start: ValueKind, end: ValueKind },
}

/// tween-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// 曲线错误
    #[error("曲线错误: {0}")]
    Curve(#[from] CurveError),

    /// 插值错误
    #[error("插值错误: {0}")]
    Interpolate(#[from] InterpolateError),
}

/// Result 类型别名
pub type TweenResult<T> = Result<T, TweenError>;
