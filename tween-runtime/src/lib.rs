//! # Tween Runtime
//!
//! 属性过渡动画引擎的核心运行时库。
//!
//! ## 架构概述
//!
//! `tween-runtime` 是纯逻辑核心，不依赖任何渲染或平台 API。
//! 它与外部世界只通过几个窄接口相连：
//!
//! ```text
//! Caller                               Engine
//!   │                                    │
//!   │── start / end + AnimationSpec ───►│
//!   │                                    │ 每帧:
//!   │                                    │   eased = 曲线反解(time_progress)
//!   │                                    │   value = registry.interpolate(start, end, eased)
//!   │◄──────── sink(value) ─────────────│
//!   │                                    │ 挂起 1000 / frame_rate 毫秒
//! ```
//!
//! 起始值可以显式给出，也可以经 [`PropertyAccessor`] 从目标读取；
//! 时间来自 [`FrameClock`]（单调时钟 + 帧间隔挂起）；取消经
//! [`CancelToken`] 协作式传达，每帧检查一次。
//!
//! ## 核心类型
//!
//! - [`BezierCurve`]：贝塞尔曲线求值与"时间进度 → 缓动进度"反解
//! - [`NamedEasing`]：封闭的 16 项命名缓动曲线目录
//! - [`InterpolationRegistry`]：值类型到插值策略的映射
//! - [`AnimationSpec`]：时长、帧率、延迟与缓动方式
//! - [`TransitionSession`]：单次过渡的状态机（tick 驱动）
//! - [`TransitionDriver`]：阻塞式帧循环
//!
//! ## 使用示例
//!
//! ```ignore
//! use tween_runtime::{
//!     AnimationSpec, CancelToken, NamedEasing, StdFrameClock, TransitionDriver, Value,
//! };
//!
//! let driver = TransitionDriver::new();
//! let spec = AnimationSpec::new(300.0, 60.0).with_easing(NamedEasing::EaseInOut);
//! let cancel = CancelToken::new();
//! let clock = StdFrameClock::new();
//!
//! let mut sink = |value: &Value| {
//!     // 把插值结果应用到目标属性
//! };
//!
//! driver.run(
//!     Value::Integer(0),
//!     Value::Integer(200),
//!     &spec,
//!     &mut sink,
//!     &cancel,
//!     &clock,
//! )?;
//! ```
//!
//! ## 模块结构
//!
//! - [`easing`]：贝塞尔曲线、命名曲线目录、控制点文本解析
//! - [`value`]：值模型与插值策略注册表
//! - [`spec`]：动画规格与文本语法
//! - [`driver`]：状态机、帧循环与外部能力接口
//! - [`error`]：错误类型定义

pub mod driver;
pub mod easing;
pub mod error;
pub mod spec;
pub mod value;

// 重导出核心类型
pub use driver::{
    CancelToken, FrameClock, FrameOutcome, ManualClock, PropertyAccessor, SharedProperty,
    StdFrameClock, TransitionDriver, TransitionOptions, TransitionSession, TransitionState,
    ValueSink,
};
pub use easing::{
    BezierCurve, ControlPoint, NamedEasing, control_points_for, is_valid_control_point_text,
    parse_control_points, resolve_easing,
};
pub use error::{CurveError, InterpolateError, TweenError, TweenResult};
pub use spec::{AnimationSpec, EasingSpec, ProgressFn};
pub use value::{
    Color, InterpolationRegistry, InterpolationStrategy, Point2D, Size2D, Value, ValueKind,
};
