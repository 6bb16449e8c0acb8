//! # Driver 模块
//!
//! 帧驱动的阻塞式过渡循环。
//!
//! 每次 `run` 编排一次完整过渡：解析缓动 → 按帧采样 → 调用 sink →
//! 帧间隔挂起。循环中唯一的挂起点是帧间隔等待。

use tracing::debug;

use crate::error::TweenResult;
use crate::spec::AnimationSpec;
use crate::value::{InterpolationRegistry, Value};

use super::clock::{CancelToken, FrameClock};
use super::session::{FrameOutcome, TransitionOptions, TransitionSession, TransitionState};
use super::sink::{PropertyAccessor, ValueSink};

/// 过渡驱动器
///
/// 持有插值策略注册表与过渡选项。注册表在构造后、任何 run 之前
/// 完成定制；运行期间它是只读的，多个驱动循环可以共享同一个
/// 驱动器引用并发执行。
pub struct TransitionDriver {
    registry: InterpolationRegistry,
    options: TransitionOptions,
}

impl Default for TransitionDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransitionDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionDriver")
            .field("registry", &self.registry)
            .field("options", &self.options)
            .finish()
    }
}

impl TransitionDriver {
    /// 创建驱动器（内置插值策略，默认选项）
    pub fn new() -> Self {
        Self::with_registry(InterpolationRegistry::new())
    }

    /// 使用自定义注册表创建驱动器
    pub fn with_registry(registry: InterpolationRegistry) -> Self {
        Self {
            registry,
            options: TransitionOptions::default(),
        }
    }

    /// 设置过渡选项
    pub fn with_options(mut self, options: TransitionOptions) -> Self {
        self.options = options;
        self
    }

    /// 访问注册表（用于启动期注册自定义策略）
    pub fn registry_mut(&mut self) -> &mut InterpolationRegistry {
        &mut self.registry
    }

    /// 插值策略注册表
    pub fn registry(&self) -> &InterpolationRegistry {
        &self.registry
    }

    /// 执行一次过渡
    ///
    /// 阻塞当前线程直到完成或取消。start == end 时立即完成，
    /// 不触碰 sink。取消后已应用的最后一帧保持原样，end 值不会再下发。
    ///
    /// # 参数
    /// - `start` / `end`: 起止值（类型标签须一致）
    /// - `spec`: 动画规格
    /// - `sink`: 值接收器，每帧调用一次
    /// - `cancel`: 取消令牌，每次迭代开头检查
    /// - `clock`: 单调时钟与帧间隔挂起
    ///
    /// # 返回
    /// - `Ok(Completed)`: 正常完成，end 值已恰好应用一次
    /// - `Ok(Cancelled)`: 被取消
    /// - `Err(..)`: 缓动解析或插值失败，失败帧之后不再触碰 sink
    pub fn run<S, C>(
        &self,
        start: Value,
        end: Value,
        spec: &AnimationSpec,
        sink: &mut S,
        cancel: &CancelToken,
        clock: &C,
    ) -> TweenResult<TransitionState>
    where
        S: ValueSink,
        C: FrameClock,
    {
        let mut session = TransitionSession::new(start, end, spec, &self.options)?;
        if session.is_finished() {
            // 幂等短路
            return Ok(session.state());
        }

        debug!(
            duration_ms = spec.duration_ms,
            frame_rate = spec.frame_rate,
            "过渡开始"
        );

        let interval_ms = spec.frame_interval_ms();
        let started_at = clock.now_ms();

        loop {
            if cancel.is_cancelled() {
                session.cancel();
                debug!("过渡被取消");
                return Ok(session.state());
            }

            let elapsed_ms = clock.now_ms() - started_at;
            match session.tick(elapsed_ms, &self.registry)? {
                FrameOutcome::Apply(value) => sink.apply(&value),
                FrameOutcome::Finish(value) => {
                    sink.apply(&value);
                    debug!("过渡完成");
                    return Ok(session.state());
                }
                FrameOutcome::Waiting => {}
                FrameOutcome::Done => return Ok(session.state()),
            }

            clock.wait_ms(interval_ms);
        }
    }

    /// 以属性访问器为目标执行一次过渡
    ///
    /// 起始值通过 [`PropertyAccessor::get`] 读取，适用于调用方
    /// 不显式提供起始值的场景；每帧通过 [`PropertyAccessor::set`] 应用。
    pub fn run_property<P, C>(
        &self,
        accessor: &mut P,
        end: Value,
        spec: &AnimationSpec,
        cancel: &CancelToken,
        clock: &C,
    ) -> TweenResult<TransitionState>
    where
        P: PropertyAccessor,
        C: FrameClock,
    {
        let start = accessor.get();
        let mut sink = |value: &Value| accessor.set(*value);
        self.run(start, end, spec, &mut sink, cancel, clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::clock::ManualClock;
    use crate::driver::sink::SharedProperty;
    use crate::error::{InterpolateError, TweenError};
    use crate::value::ValueKind;

    fn spec_100ms() -> AnimationSpec {
        // 时长 100ms，帧率 100fps，帧间隔 10ms
        AnimationSpec::new(100.0, 100.0)
    }

    #[test]
    fn test_run_completes() {
        let driver = TransitionDriver::new();
        let clock = ManualClock::new();
        let cancel = CancelToken::new();
        let mut seen = Vec::new();
        let mut sink = |value: &Value| seen.push(*value);

        let state = driver
            .run(
                Value::Integer(0),
                Value::Integer(100),
                &spec_100ms(),
                &mut sink,
                &cancel,
                &clock,
            )
            .unwrap();

        assert_eq!(state, TransitionState::Completed);
        // 帧序列单调不减，最后一帧恰好是终值
        assert!(!seen.is_empty());
        assert_eq!(*seen.last().unwrap(), Value::Integer(100));
        let mut previous = i32::MIN;
        for value in &seen {
            let Value::Integer(v) = value else {
                panic!("意外的值类型: {value:?}");
            };
            assert!(*v >= previous);
            previous = *v;
        }
        // 终值只下发一次
        assert_eq!(
            seen.iter().filter(|v| **v == Value::Integer(100)).count(),
            1
        );
    }

    #[test]
    fn test_run_start_equals_end() {
        let driver = TransitionDriver::new();
        let clock = ManualClock::new();
        let cancel = CancelToken::new();
        let mut calls = 0;
        let mut sink = |_: &Value| calls += 1;

        let state = driver
            .run(
                Value::Integer(5),
                Value::Integer(5),
                &spec_100ms(),
                &mut sink,
                &cancel,
                &clock,
            )
            .unwrap();

        assert_eq!(state, TransitionState::Completed);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_run_cancelled_never_reaches_end() {
        let driver = TransitionDriver::new();
        let clock = ManualClock::new();
        let cancel = CancelToken::new();

        // 第一帧之后请求取消
        let cancel_after_first = cancel.clone();
        let mut seen = Vec::new();
        let mut sink = |value: &Value| {
            seen.push(*value);
            cancel_after_first.cancel();
        };

        let state = driver
            .run(
                Value::Integer(0),
                Value::Integer(100),
                &spec_100ms(),
                &mut sink,
                &cancel,
                &clock,
            )
            .unwrap();

        assert_eq!(state, TransitionState::Cancelled);
        assert_eq!(seen.len(), 1);
        // 终值不会再下发，最后观察到的是取消前的插值
        assert_ne!(*seen.last().unwrap(), Value::Integer(100));
    }

    #[test]
    fn test_run_property_reads_start_and_applies_end() {
        let driver = TransitionDriver::new();
        let clock = ManualClock::new();
        let cancel = CancelToken::new();
        let mut accessor = SharedProperty::new(Value::Float64(0.0));

        let state = driver
            .run_property(
                &mut accessor,
                Value::Float64(100.0),
                &spec_100ms(),
                &cancel,
                &clock,
            )
            .unwrap();

        assert_eq!(state, TransitionState::Completed);
        assert_eq!(accessor.get(), Value::Float64(100.0));
    }

    #[test]
    fn test_run_unsupported_type_fails_before_first_frame() {
        let driver = TransitionDriver::with_registry(InterpolationRegistry::empty());
        let clock = ManualClock::new();
        let cancel = CancelToken::new();
        let mut calls = 0;
        let mut sink = |_: &Value| calls += 1;

        let result = driver.run(
            Value::Integer(0),
            Value::Integer(100),
            &spec_100ms(),
            &mut sink,
            &cancel,
            &clock,
        );

        assert!(matches!(
            result,
            Err(TweenError::Interpolate(InterpolateError::UnsupportedType {
                kind: ValueKind::Integer
            }))
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_run_with_delay_defers_first_frame() {
        let driver = TransitionDriver::new();
        let clock = ManualClock::new();
        let cancel = CancelToken::new();
        let spec = spec_100ms().with_delay(30.0);
        let mut seen = Vec::new();
        let mut sink = |value: &Value| seen.push(*value);

        let state = driver
            .run(
                Value::Integer(0),
                Value::Integer(100),
                &spec,
                &mut sink,
                &cancel,
                &clock,
            )
            .unwrap();

        assert_eq!(state, TransitionState::Completed);
        // 延迟阶段没有产出任何帧，完成时终值在场
        assert_eq!(*seen.last().unwrap(), Value::Integer(100));
        assert_eq!(*seen.first().unwrap(), Value::Integer(0));
    }

    #[test]
    fn test_pre_cancelled_token_stops_before_any_frame() {
        let driver = TransitionDriver::new();
        let clock = ManualClock::new();
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut calls = 0;
        let mut sink = |_: &Value| calls += 1;

        let state = driver
            .run(
                Value::Integer(0),
                Value::Integer(100),
                &spec_100ms(),
                &mut sink,
                &cancel,
                &clock,
            )
            .unwrap();

        assert_eq!(state, TransitionState::Cancelled);
        assert_eq!(calls, 0);
    }
}
