//! # Clock 模块
//!
//! 单调时钟、帧间隔挂起与取消令牌。
//!
//! 过渡循环中唯一的挂起点是帧间隔等待；取消是协作式的，
//! 循环每次迭代开头检查一次。

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// 帧时钟接口
///
/// 提供两个能力：单调毫秒时间，以及"挂起 N 毫秒"。
pub trait FrameClock {
    /// 当前单调时间（毫秒）
    fn now_ms(&self) -> f64;

    /// 挂起指定毫秒数
    fn wait_ms(&self, ms: f64);
}

/// 基于 std::time 的帧时钟
#[derive(Debug)]
pub struct StdFrameClock {
    origin: Instant,
}

impl StdFrameClock {
    /// 创建新的帧时钟
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for StdFrameClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_ms(&self, ms: f64) {
        if ms > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(ms / 1000.0));
        }
    }
}

/// 手动推进的时钟（测试用）
///
/// `wait_ms` 直接把内部时间向前推进，使循环测试即时完成且确定。
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// 创建新的手动时钟，初始时间为 0
    pub fn new() -> Self {
        Self::default()
    }

    /// 向前推进指定毫秒数
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn wait_ms(&self, ms: f64) {
        self.advance(ms);
    }
}

/// 取消令牌
///
/// 协作式取消：持有方随时置位，循环在每次迭代开头检查。
/// 取消请求到循环退出的最大延迟为一个帧间隔。
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// 创建新的取消令牌
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求取消
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// 是否已请求取消
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
