//! 利用者への通知
//!
//! 通知は同期呼び出しで、利用者が確認するまで戻らない。
//! テストでは RecordingNotifier に差し替える。

use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
#[cfg(test)]
use std::sync::Mutex;

/// 通知の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Failure,
}

/// 利用者に見せる1件の通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Failure,
            message: message.into(),
        }
    }
}

/// 通知の確認コールバック
pub trait Notifier: Send + Sync {
    /// 通知を表示し、確認されるまでブロックする
    fn notify(&self, notification: &Notification);
}

/// 端末への通知
pub struct ConsoleNotifier {
    /// true なら Enter が押されるまで待つ
    wait_for_ack: bool,
}

impl ConsoleNotifier {
    pub fn new(wait_for_ack: bool) -> Self {
        Self { wait_for_ack }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => println!("{}", notification.message.green()),
            NotificationLevel::Failure => eprintln!("{}", notification.message.red()),
        }

        if self.wait_for_ack {
            wait_for_enter(&mut std::io::stdin().lock(), &mut std::io::stdout());
        }
    }
}

/// Enter が押されるまで待つ
///
/// 端末が閉じているなどの入出力エラーは待機をやめるだけで、結果には影響しない。
fn wait_for_enter(input: &mut impl BufRead, output: &mut impl Write) {
    let prompt = write!(output, "{}", "[Entrée pour continuer]".dimmed())
        .and_then(|_| output.flush());
    if let Err(e) = prompt {
        tracing::debug!(error = %e, "failed to write prompt");
    }

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        tracing::debug!(error = %e, "failed to read acknowledgement");
    }
}

/// 通知を記録するだけの実装
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 受け取った通知の一覧
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification.clone());
        }
    }
}
