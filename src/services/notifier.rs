//! # 사용자 알림 채널
//!
//! 검증 실패, 서버 보고 에러, 전송 실패를 사용자에게 알리는 주입형 capability입니다.
//! 실제 화면에서는 모달 메시지 창이 되고, 테스트에서는 [`RecordingNotifier`]가
//! (필드, 메시지) 쌍을 기록합니다.

use std::sync::Mutex;

use log::warn;

use crate::utils::display_terminal::print_notification;

/// 사용자 알림 capability
pub trait Notifier: Send + Sync {
    /// 사용자에게 메시지를 표시합니다.
    ///
    /// # Arguments
    ///
    /// * `field` - 문제가 된 필드 이름. 원격 호출 실패처럼 특정 필드가 없으면 `None`
    /// * `message` - 사용자에게 보여줄 메시지
    fn notify(&self, field: Option<&str>, message: &str);
}

/// 기록된 알림 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub field: Option<String>,
    pub message: String,
}

/// 알림을 `log::warn!`으로 내보내는 구현
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, field: Option<&str>, message: &str) {
        match field {
            Some(field) => warn!("[{}] {}", field, message),
            None => warn!("{}", message),
        }
    }
}

/// 알림을 터미널(표준 에러)에 출력하는 구현
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, field: Option<&str>, message: &str) {
        print_notification(field, message);
    }
}

/// 알림을 메모리에 기록하는 구현
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    records: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 기록된 알림을 순서대로 반환합니다.
    pub fn notifications(&self) -> Vec<Notification> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// 기록된 메시지만 순서대로 반환합니다.
    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications().is_empty()
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, field: Option<&str>, message: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(Notification {
                field: field.map(str::to_string),
                message: message.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Some("Quantity"), "Quantity must be numeric.");
        notifier.notify(None, "Server unavailable");

        assert_eq!(
            notifier.notifications(),
            vec![
                Notification {
                    field: Some("Quantity".to_string()),
                    message: "Quantity must be numeric.".to_string(),
                },
                Notification {
                    field: None,
                    message: "Server unavailable".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_recording_notifier_clear() {
        let notifier = RecordingNotifier::new();
        notifier.notify(None, "x");
        assert!(!notifier.is_empty());

        notifier.clear();
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_log_notifier_does_not_panic_without_logger() {
        LogNotifier.notify(Some("Name"), "Please enter Name.");
        LogNotifier.notify(None, "timeout");
    }
}
