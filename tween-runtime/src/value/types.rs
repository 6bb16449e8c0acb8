//! # 值类型定义
//!
//! 可插值的值：封闭的带标签变体集合，在调用点静态构造，
//! 避免装箱与运行时强转。

use serde::{Deserialize, Serialize};

/// RGBA 颜色（8 位通道）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// 创建新的颜色
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// 创建不透明颜色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// 黑色（不透明）
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// 白色（不透明）
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// 二维点（整数坐标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    /// 创建新的点
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point2D> for (i32, i32) {
    fn from(p: Point2D) -> Self {
        (p.x, p.y)
    }
}

/// 二维尺寸（整数分量）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size2D {
    pub width: i32,
    pub height: i32,
}

impl Size2D {
    /// 创建新的尺寸
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size2D {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

impl From<Size2D> for (i32, i32) {
    fn from(s: Size2D) -> Self {
        (s.width, s.height)
    }
}

/// 可插值的值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 整数
    Integer(i32),
    /// 单精度浮点数
    Float32(f32),
    /// 双精度浮点数
    Float64(f64),
    /// RGBA 颜色
    Color(Color),
    /// 二维点
    Point(Point2D),
    /// 二维尺寸
    Size(Size2D),
}

impl Value {
    /// 值的类型标签
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Color(_) => ValueKind::Color,
            Self::Point(_) => ValueKind::Point,
            Self::Size(_) => ValueKind::Size,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Point2D> for Value {
    fn from(v: Point2D) -> Self {
        Self::Point(v)
    }
}

impl From<Size2D> for Value {
    fn from(v: Size2D) -> Self {
        Self::Size(v)
    }
}

/// 值类型标签
///
/// 注册表按标签精确匹配策略，没有隐式类型拓宽。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// 整数
    Integer,
    /// 单精度浮点数
    Float32,
    /// 双精度浮点数
    Float64,
    /// RGBA 颜色
    Color,
    /// 二维点
    Point,
    /// 二维尺寸
    Size,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "Integer",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Color => "Color",
            Self::Point => "Point",
            Self::Size => "Size",
        };
        f.write_str(name)
    }
}
