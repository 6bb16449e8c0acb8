//! # Bezier 模块
//!
//! 贝塞尔曲线求值与时间反解。
//!
//! ## 核心算法
//!
//! - `point_at`: 广义 de Casteljau 求值，支持任意数量的控制点
//! - `eased_progress_at`: 在 t ∈ [0, 1] 上二分查找，反解"时间进度 → 缓动进度"

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// 二分查找的收敛容差
const TOLERANCE: f64 = 1e-6;

/// 二分查找的迭代上限
const MAX_ITERATIONS: usize = 64;

/// 控制点
///
/// 曲线语义上 x 作为时间轴，y 作为缓动进度轴，但坐标本身没有范围约束。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    /// 创建新的控制点
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 线性插值
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<ControlPoint> for (f64, f64) {
    fn from(p: ControlPoint) -> Self {
        (p.x, p.y)
    }
}

/// 贝塞尔曲线
///
/// 控制点的有序序列，插入顺序即求值顺序。构造后不可变。
/// 单点曲线是退化的常量曲线，对任意 t 都返回该点。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    points: Vec<ControlPoint>,
}

impl BezierCurve {
    /// 从控制点序列创建曲线
    pub fn new(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    /// 从 (x, y) 对创建曲线
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(x, y)| ControlPoint::new(x, y)).collect(),
        }
    }

    /// 线性曲线 `[(0,0), (1,1)]`
    pub fn linear() -> Self {
        Self::from_pairs(&[(0.0, 0.0), (1.0, 1.0)])
    }

    /// 控制点序列
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// 控制点数量
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 是否为空曲线
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 端点规范化
    ///
    /// 首点不是 (0,0) 时在前面补上 (0,0)，末点不是 (1,1) 时在后面补上 (1,1)，
    /// 保证曲线覆盖完整的时间域。空曲线原样返回。
    pub fn with_unit_endpoints(&self) -> Self {
        let mut points = self.points.clone();
        if let Some(first) = points.first()
            && *first != ControlPoint::new(0.0, 0.0)
        {
            points.insert(0, ControlPoint::new(0.0, 0.0));
        }
        if let Some(last) = points.last()
            && *last != ControlPoint::new(1.0, 1.0)
        {
            points.push(ControlPoint::new(1.0, 1.0));
        }
        Self { points }
    }

    /// 求曲线在参数 t 处的点
    ///
    /// 广义 de Casteljau：对当前点集的每对相邻点按 t 线性插值，
    /// 逐层归约直到剩下一个点。迭代实现，复用一个临时缓冲区。
    ///
    /// # 参数
    /// - `t`: 曲线参数 (0.0 - 1.0)
    ///
    /// # 返回
    /// - `Ok(point)`: 曲线上的点
    /// - `Err(InvalidCurve)`: 控制点序列为空
    pub fn point_at(&self, t: f64) -> Result<ControlPoint, CurveError> {
        if self.points.is_empty() {
            return Err(CurveError::InvalidCurve {
                message: "控制点序列为空".to_string(),
            });
        }

        let mut scratch = self.points.clone();
        let mut count = scratch.len();
        while count > 1 {
            for i in 0..count - 1 {
                scratch[i] = scratch[i].lerp(scratch[i + 1], t);
            }
            count -= 1;
        }
        Ok(scratch[0])
    }

    /// 反解时间进度对应的缓动进度
    ///
    /// 在 t ∈ [0, 1] 上二分查找，使曲线在 t 处的 x 逼近 `time_progress`，
    /// 返回该处的 y。x 命中容差、区间宽度小于容差或达到迭代上限时终止。
    ///
    /// 调用方契约：x 必须随 t 单调不减。不满足时查找仍会确定性地收敛到
    /// 某个分支，但结果未作约定。本方法不校验单调性。
    ///
    /// # 参数
    /// - `time_progress`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - `Ok(eased)`: 缓动进度
    /// - `Err(InvalidCurve)`: 控制点序列为空
    pub fn eased_progress_at(&self, time_progress: f64) -> Result<f64, CurveError> {
        let mut lower = 0.0_f64;
        let mut upper = 1.0_f64;
        // 初值取时间进度本身，对近似线性的曲线第一次求值即可命中
        let mut t = time_progress.clamp(0.0, 1.0);

        for _ in 0..MAX_ITERATIONS {
            let point = self.point_at(t)?;
            if (point.x - time_progress).abs() <= TOLERANCE || upper - lower <= TOLERANCE {
                return Ok(point.y);
            }
            if point.x < time_progress {
                lower = t;
            } else {
                upper = t;
            }
            t = (lower + upper) * 0.5;
        }

        Ok(self.point_at(t)?.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ease_in_out() -> BezierCurve {
        BezierCurve::from_pairs(&[(0.42, 0.0), (0.58, 1.0)]).with_unit_endpoints()
    }

    #[test]
    fn test_point_at_endpoints() {
        let curves = [
            BezierCurve::linear(),
            ease_in_out(),
            BezierCurve::from_pairs(&[(0.0, 0.0), (0.25, 0.75), (1.0, 1.0)]),
        ];

        for curve in &curves {
            let first = curve.points()[0];
            let last = curve.points()[curve.len() - 1];

            let at_zero = curve.point_at(0.0).unwrap();
            assert!((at_zero.x - first.x).abs() < 1e-9);
            assert!((at_zero.y - first.y).abs() < 1e-9);

            let at_one = curve.point_at(1.0).unwrap();
            assert!((at_one.x - last.x).abs() < 1e-9);
            assert!((at_one.y - last.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_point_at_single_point() {
        // 退化的常量曲线：任意 t 都返回该点
        let curve = BezierCurve::from_pairs(&[(0.3, 0.7)]);
        assert_eq!(curve.point_at(0.0).unwrap(), ControlPoint::new(0.3, 0.7));
        assert_eq!(curve.point_at(0.5).unwrap(), ControlPoint::new(0.3, 0.7));
        assert_eq!(curve.point_at(1.0).unwrap(), ControlPoint::new(0.3, 0.7));
    }

    #[test]
    fn test_point_at_empty_curve() {
        let curve = BezierCurve::new(vec![]);
        assert!(matches!(
            curve.point_at(0.5),
            Err(CurveError::InvalidCurve { .. })
        ));
    }

    #[test]
    fn test_point_at_midpoint_linear() {
        let curve = BezierCurve::linear();
        let mid = curve.point_at(0.5).unwrap();
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linear_inversion_is_identity() {
        let curve = BezierCurve::linear();
        for i in 0..=10 {
            let p = i as f64 / 10.0;
            let eased = curve.eased_progress_at(p).unwrap();
            assert!((eased - p).abs() < 1e-5, "p = {p}, eased = {eased}");
        }
    }

    #[test]
    fn test_eased_progress_endpoints() {
        let curve = ease_in_out();
        assert!(curve.eased_progress_at(0.0).unwrap().abs() < 1e-5);
        assert!((curve.eased_progress_at(1.0).unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_eased_progress_monotonic() {
        let curve = ease_in_out();
        let mut previous = 0.0;
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let eased = curve.eased_progress_at(p).unwrap();
            assert!(eased >= previous - 1e-9, "p = {p} 处出现回退");
            previous = eased;
        }
    }

    #[test]
    fn test_eased_progress_empty_curve() {
        let curve = BezierCurve::new(vec![]);
        assert!(matches!(
            curve.eased_progress_at(0.5),
            Err(CurveError::InvalidCurve { .. })
        ));
    }

    #[test]
    fn test_with_unit_endpoints_expands() {
        let curve = BezierCurve::from_pairs(&[(0.42, 0.0), (0.58, 1.0)]);
        let normalized = curve.with_unit_endpoints();
        assert_eq!(normalized.len(), 4);
        assert_eq!(normalized.points()[0], ControlPoint::new(0.0, 0.0));
        assert_eq!(normalized.points()[3], ControlPoint::new(1.0, 1.0));
    }

    #[test]
    fn test_with_unit_endpoints_noop_when_present() {
        let curve = BezierCurve::linear();
        assert_eq!(curve.with_unit_endpoints(), curve);
    }

    #[test]
    fn test_with_unit_endpoints_partial() {
        // 只缺终点时只补终点
        let curve = BezierCurve::from_pairs(&[(0.0, 0.0), (0.5, 0.9)]);
        let normalized = curve.with_unit_endpoints();
        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized.points()[2], ControlPoint::new(1.0, 1.0));
    }
}
