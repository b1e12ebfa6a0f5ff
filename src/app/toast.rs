//! Toast notification for action acknowledgements

use crate::theme;
use eframe::egui;
use std::time::Instant;

const VISIBLE_SECS: f32 = 3.0;
const FADE_SECS: f32 = 0.5;

pub(crate) struct Toast {
    message: String,
    started: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            started: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn alpha(&self) -> f32 {
        let elapsed = self.started.elapsed().as_secs_f32();
        if elapsed > VISIBLE_SECS {
            ((VISIBLE_SECS + FADE_SECS - elapsed) / FADE_SECS).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    fn expired(&self) -> bool {
        self.started.elapsed().as_secs_f32() >= VISIBLE_SECS + FADE_SECS
    }
}

/// Bottom-right of the central panel, 3s visible then fade, pause on hover
pub(crate) fn show(ctx: &egui::Context, toast: &mut Option<Toast>, panel_rect: Option<egui::Rect>) {
    let (Some(current), Some(panel_rect)) = (toast.as_mut(), panel_rect) else {
        return;
    };

    let margin = 16.0;
    let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
    let alpha = current.alpha();

    let response = egui::Area::new(egui::Id::new("action_toast"))
        .fixed_pos(toast_pos)
        .pivot(egui::Align2::RIGHT_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(0x0f, 0x17, 0x2a, (235.0 * alpha) as u8))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgba_unmultiplied(
                        theme::ACCENT.r(),
                        theme::ACCENT.g(),
                        theme::ACCENT.b(),
                        (160.0 * alpha) as u8,
                    ),
                ))
                .corner_radius(theme::RADIUS_MEDIUM)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(current.message()).color(
                        egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                    ));
                });
        });

    // Pause timer while hovering
    if response.response.hovered() {
        current.started = Instant::now();
    }

    if current.expired() {
        *toast = None;
    } else {
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fresh_toast_is_opaque() {
        let toast = Toast::new("hello");
        assert_eq!(toast.alpha(), 1.0);
        assert!(!toast.expired());
    }

    #[test]
    fn test_old_toast_expires() {
        let mut toast = Toast::new("hello");
        if let Some(past) = Instant::now().checked_sub(Duration::from_secs(10)) {
            toast.started = past;
            assert!(toast.expired());
            assert_eq!(toast.alpha(), 0.0);
        }
    }
}
