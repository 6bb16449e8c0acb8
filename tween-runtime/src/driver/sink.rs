//! # Sink 模块
//!
//! 值输出接口。引擎只通过两个窄接口触达外部：
//! 读取目标当前值，以及应用一个插值结果。

use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// 值接收器
///
/// 每帧同步、顺序调用一次。若目标有线程归属要求，
/// 上下文切换由实现方负责。
pub trait ValueSink {
    /// 应用一个插值结果
    fn apply(&mut self, value: &Value);
}

impl<F: FnMut(&Value)> ValueSink for F {
    fn apply(&mut self, value: &Value) {
        self(value)
    }
}

/// 属性访问器
///
/// 对单个可动画目标的读写能力。读取只在调用方未显式提供
/// 起始值时发生。
pub trait PropertyAccessor {
    /// 读取当前值
    fn get(&self) -> Value;

    /// 写入新值
    fn set(&mut self, value: Value);
}

/// 基于 `Rc<RefCell<Value>>` 的简单属性访问器
///
/// 访问器与外部持有方共享同一个值，可以同时动画多个属性，
/// 无需担心借用冲突。
#[derive(Debug, Clone)]
pub struct SharedProperty {
    value: Rc<RefCell<Value>>,
}

impl SharedProperty {
    /// 创建新的属性访问器
    pub fn new(initial: Value) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
        }
    }

    /// 获取值的共享引用
    pub fn value_ref(&self) -> Rc<RefCell<Value>> {
        self.value.clone()
    }
}

impl PropertyAccessor for SharedProperty {
    fn get(&self) -> Value {
        *self.value.borrow()
    }

    fn set(&mut self, value: Value) {
        *self.value.borrow_mut() = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_sink() {
        let mut seen = Vec::new();
        let mut sink = |value: &Value| seen.push(*value);
        sink.apply(&Value::Integer(1));
        sink.apply(&Value::Integer(2));
        assert_eq!(seen, vec![Value::Integer(1), Value::Integer(2)]);
    }

    #[test]
    fn test_shared_property() {
        let mut accessor = SharedProperty::new(Value::Float64(0.5));
        assert_eq!(accessor.get(), Value::Float64(0.5));

        accessor.set(Value::Float64(0.8));
        assert_eq!(accessor.get(), Value::Float64(0.8));

        // 共享引用看到同一个值
        let shared = accessor.value_ref();
        accessor.set(Value::Float64(1.0));
        assert_eq!(*shared.borrow(), Value::Float64(1.0));
    }
}
