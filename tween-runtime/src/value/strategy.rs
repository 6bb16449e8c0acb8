//! # Strategy 模块
//!
//! 插值策略接口与内置实现。
//!
//! 所有内置策略都是线性插值；整数分量在乘法之后向零截断（不是四舍五入）。

use crate::error::InterpolateError;

use super::types::{Color, Point2D, Size2D, Value};

/// 插值策略接口
///
/// 针对单一值类型实现 "interpolate(start, end, progress) → value"。
/// 进度范围与起止类型一致性由注册表在分发前校验；策略自身在变体
/// 不匹配时返回 `KindMismatch`。
///
/// 注册表可以被多个并发的过渡循环共享，策略实现必须线程安全。
pub trait InterpolationStrategy: Send + Sync {
    /// 计算 start 与 end 之间在 progress 处的插值
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError>;
}

/// 整数线性插值，乘法后向零截断
fn lerp_i32(start: i32, end: i32, progress: f64) -> i32 {
    start + ((end - start) as f64 * progress).trunc() as i32
}

/// 8 位通道线性插值，乘法后向零截断
fn lerp_u8(start: u8, end: u8, progress: f64) -> u8 {
    (start as i32 + ((end as i32 - start as i32) as f64 * progress).trunc() as i32) as u8
}

fn mismatch(start: &Value, end: &Value) -> InterpolateError {
    InterpolateError::KindMismatch {
        start: start.kind(),
        end: end.kind(),
    }
}

/// 整数插值策略
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerLerp;

impl InterpolationStrategy for IntegerLerp {
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        match (start, end) {
            (Value::Integer(s), Value::Integer(e)) => {
                Ok(Value::Integer(lerp_i32(*s, *e, progress)))
            }
            _ => Err(mismatch(start, end)),
        }
    }
}

/// 单精度浮点插值策略
#[derive(Debug, Clone, Copy, Default)]
pub struct Float32Lerp;

impl InterpolationStrategy for Float32Lerp {
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        match (start, end) {
            (Value::Float32(s), Value::Float32(e)) => {
                // 在单精度下计算
                Ok(Value::Float32(s + (e - s) * progress as f32))
            }
            _ => Err(mismatch(start, end)),
        }
    }
}

/// 双精度浮点插值策略
#[derive(Debug, Clone, Copy, Default)]
pub struct Float64Lerp;

impl InterpolationStrategy for Float64Lerp {
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        match (start, end) {
            (Value::Float64(s), Value::Float64(e)) => Ok(Value::Float64(s + (e - s) * progress)),
            _ => Err(mismatch(start, end)),
        }
    }
}

/// 颜色插值策略
///
/// 逐通道对 R、G、B 做线性插值；alpha 通道不参与插值，
/// 结果保留起始颜色的 alpha 值。
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorLerp;

impl InterpolationStrategy for ColorLerp {
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        match (start, end) {
            (Value::Color(s), Value::Color(e)) => Ok(Value::Color(Color {
                r: lerp_u8(s.r, e.r, progress),
                g: lerp_u8(s.g, e.g, progress),
                b: lerp_u8(s.b, e.b, progress),
                a: s.a,
            })),
            _ => Err(mismatch(start, end)),
        }
    }
}

/// 二维点插值策略（逐分量，整数截断）
#[derive(Debug, Clone, Copy, Default)]
pub struct PointLerp;

impl InterpolationStrategy for PointLerp {
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        match (start, end) {
            (Value::Point(s), Value::Point(e)) => Ok(Value::Point(Point2D {
                x: lerp_i32(s.x, e.x, progress),
                y: lerp_i32(s.y, e.y, progress),
            })),
            _ => Err(mismatch(start, end)),
        }
    }
}

/// 二维尺寸插值策略（逐分量，整数截断）
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeLerp;

impl InterpolationStrategy for SizeLerp {
    fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        match (start, end) {
            (Value::Size(s), Value::Size(e)) => Ok(Value::Size(Size2D {
                width: lerp_i32(s.width, e.width, progress),
                height: lerp_i32(s.height, e.height, progress),
            })),
            _ => Err(mismatch(start, end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_midpoint() {
        let value = IntegerLerp
            .interpolate(&Value::Integer(0), &Value::Integer(10), 0.5)
            .unwrap();
        assert_eq!(value, Value::Integer(5));
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        // 5.5 截断为 5，不是四舍五入为 6
        let value = IntegerLerp
            .interpolate(&Value::Integer(0), &Value::Integer(10), 0.55)
            .unwrap();
        assert_eq!(value, Value::Integer(5));

        // 反向：10 + trunc(-5.5) = 5
        let value = IntegerLerp
            .interpolate(&Value::Integer(10), &Value::Integer(0), 0.55)
            .unwrap();
        assert_eq!(value, Value::Integer(5));
    }

    #[test]
    fn test_float_lerp() {
        let value = Float64Lerp
            .interpolate(&Value::Float64(1.0), &Value::Float64(3.0), 0.25)
            .unwrap();
        assert_eq!(value, Value::Float64(1.5));

        let value = Float32Lerp
            .interpolate(&Value::Float32(0.0), &Value::Float32(1.0), 0.5)
            .unwrap();
        assert_eq!(value, Value::Float32(0.5));
    }

    #[test]
    fn test_color_midpoint_truncates() {
        // 黑到白的中点：127.5 截断为 127
        let value = ColorLerp
            .interpolate(
                &Value::Color(Color::BLACK),
                &Value::Color(Color::WHITE),
                0.5,
            )
            .unwrap();
        assert_eq!(value, Value::Color(Color::rgb(127, 127, 127)));
    }

    #[test]
    fn test_color_keeps_start_alpha() {
        // alpha 不参与插值，progress 为 1.0 时仍保留起始 alpha
        let start = Color::new(0, 0, 0, 32);
        let end = Color::new(255, 255, 255, 255);
        let value = ColorLerp
            .interpolate(&Value::Color(start), &Value::Color(end), 1.0)
            .unwrap();
        assert_eq!(value, Value::Color(Color::new(255, 255, 255, 32)));
    }

    #[test]
    fn test_point_and_size_lerp() {
        let value = PointLerp
            .interpolate(
                &Value::Point(Point2D::new(0, 100)),
                &Value::Point(Point2D::new(10, 0)),
                0.25,
            )
            .unwrap();
        assert_eq!(value, Value::Point(Point2D::new(2, 75)));

        let value = SizeLerp
            .interpolate(
                &Value::Size(Size2D::new(100, 200)),
                &Value::Size(Size2D::new(200, 400)),
                0.5,
            )
            .unwrap();
        assert_eq!(value, Value::Size(Size2D::new(150, 300)));
    }

    #[test]
    fn test_kind_mismatch() {
        let result = IntegerLerp.interpolate(&Value::Integer(0), &Value::Float64(1.0), 0.5);
        assert!(matches!(
            result,
            Err(InterpolateError::KindMismatch { .. })
        ));
    }
}
