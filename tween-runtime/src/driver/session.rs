//! # Session 模块
//!
//! 单次过渡的状态机。
//!
//! 纯逻辑：由外部（[`TransitionDriver`] 或宿主自己的帧循环）提供流逝
//! 时间，本身不持有时钟，也没有挂起点。
//!
//! [`TransitionDriver`]: super::driver::TransitionDriver

use serde::{Deserialize, Serialize};

use crate::easing::BezierCurve;
use crate::error::{CurveError, TweenResult};
use crate::spec::{AnimationSpec, EasingSpec, ProgressFn};
use crate::value::{InterpolationRegistry, Value};

/// 过渡状态
///
/// `Idle → Running → {Completed, Cancelled}`，终态不再迁移。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitionState {
    /// 尚未开始
    #[default]
    Idle,
    /// 进行中
    Running,
    /// 正常完成
    Completed,
    /// 被取消
    Cancelled,
}

impl TransitionState {
    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// 单次 tick 的产出
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// 应用一个中间插值
    Apply(Value),
    /// 应用最终值并结束（整个会话只产出一次）
    Finish(Value),
    /// 延迟阶段，无输出
    Waiting,
    /// 已处于终态，无动作
    Done,
}

/// 过渡选项
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionOptions {
    /// 端点规范化：对命名/显式曲线补齐 (0,0) 起点与 (1,1) 终点，
    /// 保证曲线覆盖完整的时间域。默认开启，可关闭。
    pub normalize_endpoints: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            normalize_endpoints: true,
        }
    }
}

/// 已解析的缓动来源
#[derive(Clone)]
enum ResolvedEasing {
    Curve(BezierCurve),
    Custom(ProgressFn),
}

impl ResolvedEasing {
    fn eased_progress(&self, time_progress: f64) -> TweenResult<f64> {
        match self {
            Self::Curve(curve) => Ok(curve.eased_progress_at(time_progress)?),
            Self::Custom(progress_fn) => Ok(progress_fn(time_progress)),
        }
    }
}

fn resolve_spec_easing(
    easing: &EasingSpec,
    options: &TransitionOptions,
) -> TweenResult<ResolvedEasing> {
    let normalize = |curve: BezierCurve| {
        if options.normalize_endpoints {
            curve.with_unit_endpoints()
        } else {
            curve
        }
    };

    match easing {
        EasingSpec::Named(named) => Ok(ResolvedEasing::Curve(normalize(named.control_points()))),
        EasingSpec::Curve(curve) => {
            if curve.is_empty() {
                return Err(CurveError::InvalidCurve {
                    message: "控制点序列为空".to_string(),
                }
                .into());
            }
            Ok(ResolvedEasing::Curve(normalize(curve.clone())))
        }
        EasingSpec::Custom(progress_fn) => Ok(ResolvedEasing::Custom(progress_fn.clone())),
    }
}

/// 单次过渡会话
///
/// 管理一个值从 start 到 end 的单趟变化。缓动在构造时一次性解析：
/// 空曲线在任何帧产生之前报 `InvalidCurve`。start == end 时会话直接
/// 处于 `Completed`（幂等短路，调用方不应再触碰 sink）。
pub struct TransitionSession {
    start: Value,
    end: Value,
    duration_ms: f64,
    delay_ms: f64,
    easing: ResolvedEasing,
    state: TransitionState,
    /// skip() 置位后，下一次 tick 直接产出 Finish
    skip_requested: bool,
}

impl std::fmt::Debug for TransitionSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionSession")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration_ms", &self.duration_ms)
            .field("state", &self.state)
            .finish()
    }
}

impl TransitionSession {
    /// 创建会话
    ///
    /// # 参数
    /// - `start` / `end`: 起止值（类型标签须一致，由插值时校验）
    /// - `spec`: 动画规格
    /// - `options`: 过渡选项
    ///
    /// # 返回
    /// - `Ok(session)`: 会话就绪
    /// - `Err(InvalidCurve)`: 显式曲线为空
    pub fn new(
        start: Value,
        end: Value,
        spec: &AnimationSpec,
        options: &TransitionOptions,
    ) -> TweenResult<Self> {
        let easing = resolve_spec_easing(&spec.easing, options)?;
        let state = if start == end {
            TransitionState::Completed
        } else {
            TransitionState::Idle
        };

        Ok(Self {
            start,
            end,
            duration_ms: spec.duration_ms,
            delay_ms: spec.delay_ms,
            easing,
            state,
            skip_requested: false,
        })
    }

    /// 推进状态机
    ///
    /// # 参数
    /// - `elapsed_ms`: 自会话启动以来的流逝时间（毫秒）
    /// - `registry`: 插值策略注册表
    ///
    /// # 返回
    /// - `Apply(value)`: 本帧应用的中间插值
    /// - `Finish(value)`: 最终值，应用后会话进入 `Completed`（只产出一次）
    /// - `Waiting`: 仍在延迟阶段
    /// - `Done`: 会话已处于终态
    pub fn tick(
        &mut self,
        elapsed_ms: f64,
        registry: &InterpolationRegistry,
    ) -> TweenResult<FrameOutcome> {
        match self.state {
            TransitionState::Completed | TransitionState::Cancelled => {
                return Ok(FrameOutcome::Done);
            }
            TransitionState::Idle => self.state = TransitionState::Running,
            TransitionState::Running => {}
        }

        if self.skip_requested {
            self.state = TransitionState::Completed;
            return Ok(FrameOutcome::Finish(self.end));
        }

        if elapsed_ms < self.delay_ms {
            return Ok(FrameOutcome::Waiting);
        }

        let time_progress = (elapsed_ms - self.delay_ms) / self.duration_ms;
        if time_progress >= 1.0 {
            self.state = TransitionState::Completed;
            return Ok(FrameOutcome::Finish(self.end));
        }

        let eased = self.easing.eased_progress(time_progress)?;
        let value = registry.interpolate(&self.start, &self.end, eased)?;
        Ok(FrameOutcome::Apply(value))
    }

    /// 请求取消
    ///
    /// 进行中（或尚未开始）的会话进入 `Cancelled`；终态不受影响。
    /// 已应用的最后一帧保持原样，没有回滚。
    pub fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = TransitionState::Cancelled;
        }
    }

    /// 跳到最终值
    ///
    /// 下一次 tick 直接产出 `Finish(end)`，无视剩余时长。终态不受影响。
    pub fn skip(&mut self) {
        if !self.state.is_terminal() {
            self.skip_requested = true;
        }
    }

    /// 当前状态
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// 起始值
    pub fn start_value(&self) -> Value {
        self.start
    }

    /// 最终值
    pub fn end_value(&self) -> Value {
        self.end
    }
}
