//! # Spec 模块
//!
//! 动画规格：时长、帧率、延迟与缓动方式，以及文本语法解析。
//!
//! ## 文本语法
//!
//! `"<time>, <fps>[, <easing>]"`
//!
//! - `<time>`: 时长（毫秒）
//! - `<fps>`: 帧率（帧/秒）
//! - `<easing>`: 方括号控制点列表（如 `[0, 0, 1, 1]`）或大小写不敏感的
//!   曲线名（如 `EaseInOut`）；省略时使用 Linear

use std::sync::Arc;

use crate::easing::{BezierCurve, NamedEasing, resolve_easing};
use crate::error::CurveError;

/// 自定义进度函数：时间进度 (0.0 - 1.0) → 缓动进度
pub type ProgressFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// 缓动方式
#[derive(Clone)]
pub enum EasingSpec {
    /// 命名曲线
    Named(NamedEasing),
    /// 显式控制点曲线
    Curve(BezierCurve),
    /// 自定义进度函数
    Custom(ProgressFn),
}

impl Default for EasingSpec {
    fn default() -> Self {
        Self::Named(NamedEasing::Linear)
    }
}

impl std::fmt::Debug for EasingSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(named) => f.debug_tuple("Named").field(named).finish(),
            Self::Curve(curve) => f.debug_tuple("Curve").field(curve).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<NamedEasing> for EasingSpec {
    fn from(named: NamedEasing) -> Self {
        Self::Named(named)
    }
}

impl From<BezierCurve> for EasingSpec {
    fn from(curve: BezierCurve) -> Self {
        Self::Curve(curve)
    }
}

/// 动画规格
///
/// 由调用方构造的值对象，每次过渡消费一次。
#[derive(Debug, Clone)]
pub struct AnimationSpec {
    /// 时长（毫秒）
    pub duration_ms: f64,
    /// 帧率（帧/秒）
    pub frame_rate: f64,
    /// 延迟启动（毫秒）
    pub delay_ms: f64,
    /// 缓动方式
    pub easing: EasingSpec,
}

impl AnimationSpec {
    /// 创建动画规格（Linear 缓动，无延迟）
    ///
    /// 时长与帧率被钳制到一个极小的正值，避免除零。
    pub fn new(duration_ms: f64, frame_rate: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(0.01),
            frame_rate: frame_rate.max(0.01),
            delay_ms: 0.0,
            easing: EasingSpec::default(),
        }
    }

    /// 设置缓动方式
    pub fn with_easing(mut self, easing: impl Into<EasingSpec>) -> Self {
        self.easing = easing.into();
        self
    }

    /// 设置自定义进度函数
    pub fn with_progress_fn(mut self, progress_fn: ProgressFn) -> Self {
        self.easing = EasingSpec::Custom(progress_fn);
        self
    }

    /// 设置延迟
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    /// 帧间隔（毫秒）
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.frame_rate
    }

    /// 解析文本语法
    ///
    /// 输入: `"300, 25, EaseInOut"` 或 `"300, 25, [0, 0, 1, 1]"` 或 `"300, 25"`
    ///
    /// 时长与帧率字段是严格的；缓动字段走 [`resolve_easing`] 的宽松路径，
    /// 无法识别时降级为 Linear。
    ///
    /// # 返回
    /// - `Ok(spec)`: 解析成功
    /// - `Err(InvalidFormat)`: 时长或帧率缺失、无法解析
    pub fn parse(text: &str) -> Result<Self, CurveError> {
        // 缓动字段内部可能含逗号，只按前两个逗号切分
        let mut parts = text.splitn(3, ',');

        let time_part = parts.next().unwrap_or("").trim();
        let duration_ms: f64 = time_part.parse().map_err(|_| CurveError::InvalidFormat {
            message: format!("无法解析时长: '{time_part}'"),
        })?;

        let fps_part = parts
            .next()
            .ok_or_else(|| CurveError::InvalidFormat {
                message: "缺少帧率字段".to_string(),
            })?
            .trim();
        let frame_rate: f64 = fps_part.parse().map_err(|_| CurveError::InvalidFormat {
            message: format!("无法解析帧率: '{fps_part}'"),
        })?;

        let spec = Self::new(duration_ms, frame_rate);
        match parts.next() {
            None => Ok(spec),
            Some(easing_part) => {
                let easing_part = easing_part.trim();
                // 方括号只是列表的语法外衣，去掉后走统一的解析路径
                let inner = easing_part
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .unwrap_or(easing_part);
                Ok(spec.with_easing(EasingSpec::Curve(resolve_easing(inner))))
            }
        }
    }
}
