//! Transient on-screen notices and the texts the widget reports with.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::WidgetError;

/// Visual kind of a notice; maps to a CSS modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Sink for user-visible notices. Showing a notice replaces the previous one.
pub trait Notifier {
    fn notify(&self, text: &str, kind: NoticeKind);
}

/// Which orchestration boundary a refresh ran under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOrigin {
    /// The initial render while mounting the panel.
    Mount,
    /// The header's refresh button.
    Button,
}

impl RefreshOrigin {
    #[must_use]
    pub fn success_text(self) -> &'static str {
        match self {
            Self::Mount => "二维码生成器已启动",
            Self::Button => "二维码已更新",
        }
    }

    #[must_use]
    pub fn failure_text(self) -> &'static str {
        match self {
            Self::Mount => "二维码生成器初始化失败，请刷新页面重试",
            Self::Button => "更新失败",
        }
    }
}

/// Turn a finished refresh into exactly one notice plus a console line.
pub fn report(origin: RefreshOrigin, result: &Result<(), WidgetError>, notifier: &dyn Notifier) {
    match result {
        Ok(()) => {
            log::info!("qr refresh ({origin:?}) complete");
            notifier.notify(origin.success_text(), NoticeKind::Success);
        }
        Err(e) => {
            log::error!("qr refresh ({origin:?}) failed: {e}");
            notifier.notify(origin.failure_text(), NoticeKind::Error);
        }
    }
}
