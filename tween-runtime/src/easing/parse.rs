//! # 控制点文本解析
//!
//! 手写的控制点文本解析函数，无正则依赖。
//!
//! 两个严格原语（`parse_control_points` / `is_valid_control_point_text`）
//! 加一个宽松组合子（`resolve_easing`）。组合子在两条路径都失败时静默
//! 降级为 Linear，这是兼容行为，不是疏漏，修改前务必确认。

use super::bezier::{BezierCurve, ControlPoint};
use super::catalog::NamedEasing;
use crate::error::CurveError;

/// 解析控制点文本
///
/// 按逗号切分、去除空白、逐项解析为浮点数，再按顺序两两配对。
///
/// 输入: `"0, 0, 1, 1"`
/// 输出: `[(0,0), (1,1)]`
///
/// # 返回
/// - `Ok(curve)`: 解析成功
/// - `Err(InvalidFormat)`: 数值个数为奇数、少于 2，或存在无法解析的项
pub fn parse_control_points(text: &str) -> Result<BezierCurve, CurveError> {
    let mut values = Vec::new();
    for token in text.split(',') {
        let token = token.trim();
        let value: f64 = token.parse().map_err(|_| CurveError::InvalidFormat {
            message: format!("无法解析为浮点数: '{token}'"),
        })?;
        values.push(value);
    }

    if values.len() < 2 || values.len() % 2 != 0 {
        return Err(CurveError::InvalidFormat {
            message: format!("数值个数必须为偶数且不少于 2，实际为 {}", values.len()),
        });
    }

    let points = values
        .chunks(2)
        .map(|pair| ControlPoint::new(pair[0], pair[1]))
        .collect();
    Ok(BezierCurve::new(points))
}

/// 检查文本是否为合法的控制点列表
///
/// 与 [`parse_control_points`] 同一套规则的非抛错探测版本。
pub fn is_valid_control_point_text(text: &str) -> bool {
    parse_control_points(text).is_ok()
}

/// 解析缓动描述文本
///
/// 先尝试按控制点列表解析；失败则按曲线名（大小写不敏感）查目录；
/// 两者都失败时降级为 Linear `[(0,0), (1,1)]`，不返回错误。
pub fn resolve_easing(text: &str) -> BezierCurve {
    if let Ok(curve) = parse_control_points(text) {
        return curve;
    }
    if let Ok(named) = NamedEasing::from_name(text) {
        return named.control_points();
    }

    tracing::warn!(easing = %text, "无法识别的缓动描述，降级为 Linear");
    BezierCurve::linear()
}
