//! Loading indicator shown while a reading cycle runs.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

/// Messages cycled while waiting, in order.
pub const LOADING_MESSAGES: [&str; 5] = [
    "正在链接宇宙能量",
    "正在观测星象轨迹",
    "正在解析五行流转",
    "正在共鸣人类图谱",
    "正在编织心旅行动",
];

/// Time between two messages.
pub const LOADING_INTERVAL: Duration = Duration::from_millis(800);

/// Drives `task` to completion, printing the next loading message to `out`
/// on every tick. The first message appears immediately.
///
/// # Errors
///
/// Returns any I/O error from writing to `out`. The task is dropped in
/// that case.
pub async fn with_loading<F, W>(out: &mut W, task: F) -> io::Result<F::Output>
where
    F: Future,
    W: Write,
{
    tokio::pin!(task);
    let mut ticker = tokio::time::interval(LOADING_INTERVAL);
    let mut messages = LOADING_MESSAGES.iter().cycle();

    loop {
        tokio::select! {
            output = &mut task => return Ok(output),
            _ = ticker.tick() => {
                if let Some(message) = messages.next() {
                    writeln!(out, "  ✦ {message} …")?;
                    out.flush()?;
                }
            }
        }
    }
}
