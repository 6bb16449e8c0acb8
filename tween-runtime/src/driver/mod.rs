//! # Driver 模块
//!
//! 过渡执行：状态机、帧循环与外部能力接口。
//!
//! ## 核心设计理念
//!
//! 执行被拆成两层：
//!
//! - [`TransitionSession`]: 纯状态机，由外部提供流逝时间逐帧推进，
//!   适合接入宿主自己的帧循环（渲染循环、定时器回调）
//! - [`TransitionDriver`]: 阻塞式帧循环，用 [`FrameClock`] 自己计时、
//!   自己挂起，适合独立线程或测试
//!
//! 引擎与外部世界只通过窄接口相连：[`ValueSink`] / [`PropertyAccessor`]
//! 负责值的进出，[`FrameClock`] 提供单调时间与帧间隔挂起，
//! [`CancelToken`] 提供协作式取消。

mod clock;
mod driver;
mod session;
mod sink;

pub use clock::{CancelToken, FrameClock, ManualClock, StdFrameClock};
pub use driver::TransitionDriver;
pub use session::{FrameOutcome, TransitionOptions, TransitionSession, TransitionState};
pub use sink::{PropertyAccessor, SharedProperty, ValueSink};
