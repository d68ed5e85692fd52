//! Toast notifications in the top-right corner, under the header
//!
//! Used for confirmations (email copied, theme switched) and for failures
//! of the clipboard and system opener.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::header::HEADER_HEIGHT;
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

const MAX_VISIBLE_TOASTS: usize = 3;
const DEFAULT_DURATION: Duration = Duration::from_secs(3);
const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    fn color(&self, theme: &Theme) -> Color {
        match self {
            ToastKind::Success => theme.success_color,
            ToastKind::Info => theme.highlight_color,
            ToastKind::Error => theme.error_color,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Info => "•",
            ToastKind::Error => "✗",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub created_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Error)
    }

    fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: DEFAULT_DURATION,
            created_at: Instant::now(),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast; a repeat of a visible message restarts its timer
    pub fn push(&mut self, toast: Toast) {
        self.toasts.retain(|t| t.message != toast.message);
        if self.toasts.len() >= MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(toast);
    }

    /// Drop expired toasts; true if any were removed
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        self.toasts.len() != before
    }

    /// Most recent first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

pub fn render_toasts(f: &mut Frame, area: Rect, queue: &ToastQueue, theme: &Theme) {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 8 {
        return;
    }
    let x = area.x + area.width - width - 1;

    for (i, toast) in queue.visible().enumerate() {
        let y = area.y + HEADER_HEIGHT + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let color = toast.kind.color(theme);
        let message = truncate_ellipsis(&toast.message, width.saturating_sub(5) as usize);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.surface_color));
        let line = Line::from(vec![
            Span::styled(format!("{} ", toast.kind.icon()), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(theme.text_color)),
        ]);

        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(line).block(block), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_message_replaces() {
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("Copied"));
        queue.push(Toast::info("Theme: Nord"));
        queue.push(Toast::success("Copied"));
        assert_eq!(queue.visible().count(), 2);
        assert_eq!(queue.visible().next().map(|t| t.message.as_str()), Some("Copied"));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = ToastQueue::new();
        for i in 0..5 {
            queue.push(Toast::info(format!("toast {}", i)));
        }
        assert_eq!(queue.visible().count(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.visible().last().map(|t| t.message.as_str()), Some("toast 2"));
    }

    #[test]
    fn test_tick_expires_by_duration() {
        let mut queue = ToastQueue::new();
        let toast = Toast::success("Copied").with_duration(Duration::from_millis(1200));
        let start = toast.created_at;
        queue.push(toast);
        queue.push(Toast::error("Clipboard unavailable"));

        assert!(!queue.tick(start + Duration::from_millis(1199)));
        assert!(queue.tick(start + Duration::from_millis(1200)));
        assert_eq!(queue.visible().count(), 1);
        assert_eq!(queue.visible().next().map(|t| t.kind), Some(ToastKind::Error));
    }
}
