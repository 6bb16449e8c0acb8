//! # Registry 模块
//!
//! 插值策略注册表。
//!
//! 显式构造、显式传递的对象，不是进程级全局表。注册应在所有过渡
//! 开始之前完成；注册表本身不为"运行中注册"提供同步保障。

use std::collections::HashMap;

use crate::error::InterpolateError;

use super::strategy::{
    ColorLerp, Float32Lerp, Float64Lerp, IntegerLerp, InterpolationStrategy, PointLerp, SizeLerp,
};
use super::types::{Value, ValueKind};

/// 插值策略注册表
///
/// 类型标签到策略的映射。查找按标签精确匹配，没有数值类型间的
/// 隐式拓宽：未注册的类型直接报 `UnsupportedType`。
pub struct InterpolationRegistry {
    strategies: HashMap<ValueKind, Box<dyn InterpolationStrategy>>,
}

impl Default for InterpolationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InterpolationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpolationRegistry")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

impl InterpolationRegistry {
    /// 创建带全部内置策略的注册表
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ValueKind::Integer, Box::new(IntegerLerp));
        registry.register(ValueKind::Float32, Box::new(Float32Lerp));
        registry.register(ValueKind::Float64, Box::new(Float64Lerp));
        registry.register(ValueKind::Color, Box::new(ColorLerp));
        registry.register(ValueKind::Point, Box::new(PointLerp));
        registry.register(ValueKind::Size, Box::new(SizeLerp));
        registry
    }

    /// 创建空注册表（不含任何策略）
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// 注册或替换指定类型的策略
    ///
    /// 同一类型后注册者生效。
    pub fn register(&mut self, kind: ValueKind, strategy: Box<dyn InterpolationStrategy>) {
        self.strategies.insert(kind, strategy);
    }

    /// 是否注册了指定类型的策略
    pub fn supports(&self, kind: ValueKind) -> bool {
        self.strategies.contains_key(&kind)
    }

    /// 计算插值
    ///
    /// 校验顺序：进度范围 → 起止类型一致 → 策略存在，之后委托给策略。
    ///
    /// # 返回
    /// - `Ok(value)`: 插值结果
    /// - `Err(ProgressOutOfRange)`: progress 不在 [0, 1] 内
    /// - `Err(KindMismatch)`: 起止值的类型标签不一致
    /// - `Err(UnsupportedType)`: 该类型没有注册策略
    pub fn interpolate(
        &self,
        start: &Value,
        end: &Value,
        progress: f64,
    ) -> Result<Value, InterpolateError> {
        if !(0.0..=1.0).contains(&progress) {
            return Err(InterpolateError::ProgressOutOfRange { progress });
        }
        if start.kind() != end.kind() {
            return Err(InterpolateError::KindMismatch {
                start: start.kind(),
                end: end.kind(),
            });
        }

        let strategy =
            self.strategies
                .get(&start.kind())
                .ok_or(InterpolateError::UnsupportedType {
                    kind: start.kind(),
                })?;
        strategy.interpolate(start, end, progress)
    }
}
