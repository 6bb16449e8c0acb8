//! # Catalog 模块
//!
//! 命名缓动曲线目录。
//! 这是所有曲线名称、规范控制点的**唯一来源**。

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bezier::BezierCurve;
use crate::error::CurveError;

/// 命名缓动曲线
///
/// 封闭的 16 项集合，每一项映射到一组规范控制点（见 [`control_points`]）。
///
/// [`control_points`]: NamedEasing::control_points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NamedEasing {
    /// 线性（匀速）
    #[default]
    Linear,
    /// 缓入（先慢后快）
    EaseIn,
    /// 缓出（先快后慢）
    EaseOut,
    /// 缓入缓出（两头慢中间快）
    EaseInOut,
    /// 二次缓入
    EaseInQuad,
    /// 二次缓出
    EaseOutQuad,
    /// 二次缓入缓出
    EaseInOutQuad,
    /// 三次缓入
    EaseInCubic,
    /// 三次缓出
    EaseOutCubic,
    /// 三次缓入缓出
    EaseInOutCubic,
    /// 四次缓入
    EaseInQuart,
    /// 四次缓出
    EaseOutQuart,
    /// 四次缓入缓出
    EaseInOutQuart,
    /// 五次缓入
    EaseInQuint,
    /// 五次缓出
    EaseOutQuint,
    /// 五次缓入缓出
    EaseInOutQuint,
}

impl NamedEasing {
    /// 全部曲线名
    pub const ALL: [NamedEasing; 16] = [
        Self::Linear,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
    ];

    /// 返回曲线的规范控制点
    ///
    /// 每条曲线记录两个内侧控制点（四个数值）。起点 (0,0) 与终点 (1,1)
    /// 不在表内，由端点规范化补齐（见
    /// [`BezierCurve::with_unit_endpoints`]）。
    pub fn control_points(&self) -> BezierCurve {
        let (x1, y1, x2, y2) = match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Self::EaseInQuad => (0.55, 0.085, 0.68, 0.53),
            Self::EaseOutQuad => (0.25, 0.46, 0.45, 0.94),
            Self::EaseInOutQuad => (0.455, 0.03, 0.515, 0.955),
            Self::EaseInCubic => (0.55, 0.055, 0.675, 0.19),
            Self::EaseOutCubic => (0.215, 0.61, 0.355, 1.0),
            Self::EaseInOutCubic => (0.645, 0.045, 0.355, 1.0),
            Self::EaseInQuart => (0.895, 0.03, 0.685, 0.22),
            Self::EaseOutQuart => (0.165, 0.84, 0.44, 1.0),
            Self::EaseInOutQuart => (0.77, 0.0, 0.175, 1.0),
            Self::EaseInQuint => (0.755, 0.05, 0.855, 0.06),
            Self::EaseOutQuint => (0.23, 1.0, 0.32, 1.0),
            Self::EaseInOutQuint => (0.86, 0.0, 0.07, 1.0),
        };
        BezierCurve::from_pairs(&[(x1, y1), (x2, y2)])
    }

    /// 曲线的规范名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::EaseIn => "EaseIn",
            Self::EaseOut => "EaseOut",
            Self::EaseInOut => "EaseInOut",
            Self::EaseInQuad => "EaseInQuad",
            Self::EaseOutQuad => "EaseOutQuad",
            Self::EaseInOutQuad => "EaseInOutQuad",
            Self::EaseInCubic => "EaseInCubic",
            Self::EaseOutCubic => "EaseOutCubic",
            Self::EaseInOutCubic => "EaseInOutCubic",
            Self::EaseInQuart => "EaseInQuart",
            Self::EaseOutQuart => "EaseOutQuart",
            Self::EaseInOutQuart => "EaseInOutQuart",
            Self::EaseInQuint => "EaseInQuint",
            Self::EaseOutQuint => "EaseOutQuint",
            Self::EaseInOutQuint => "EaseInOutQuint",
        }
    }

    /// 按名称查找曲线（大小写不敏感）
    ///
    /// # 返回
    /// - `Ok(easing)`: 名称命中
    /// - `Err(UnknownEasing)`: 名称不在目录中
    pub fn from_name(name: &str) -> Result<Self, CurveError> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .find(|easing| easing.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| CurveError::UnknownEasing {
                name: trimmed.to_string(),
            })
    }
}

impl FromStr for NamedEasing {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for NamedEasing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 按名称查找曲线的规范控制点（大小写不敏感）
pub fn control_points_for(name: &str) -> Result<BezierCurve, CurveError> {
    NamedEasing::from_name(name).map(|easing| easing.control_points())
}
