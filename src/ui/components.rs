//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use crate::types::AwardRecord;
use eframe::egui;
use std::f32::consts::{FRAC_PI_2, TAU};

pub const STAR_COUNT: u8 = 5;

/// Star rating rounded down to whole stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub filled: u8,
}

impl StarRating {
    /// Clamps to 0..=5 and floors; NaN counts as zero.
    pub fn from_rating(rating: f32) -> Self {
        let clamped = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, STAR_COUNT as f32) };
        Self { filled: clamped.floor() as u8 }
    }

    pub fn empty(self) -> u8 {
        STAR_COUNT - self.filled
    }

    pub fn filled_glyphs(self) -> String {
        "★".repeat(self.filled as usize)
    }

    pub fn empty_glyphs(self) -> String {
        "☆".repeat(self.empty() as usize)
    }
}

/// Star row in two colors. Always five glyphs wide.
pub fn stars(ui: &mut egui::Ui, rating: f32, size: f32) {
    let stars = StarRating::from_rating(rating);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for (glyphs, color) in [
            (stars.filled_glyphs(), theme::STAR_FILLED),
            (stars.empty_glyphs(), theme::STAR_EMPTY),
        ] {
            if !glyphs.is_empty() {
                ui.add(
                    egui::Label::new(egui::RichText::new(glyphs).size(size).color(color))
                        .selectable(false),
                );
            }
        }
    });
}

/// Titled white card. `width` is the outer width including the frame margin.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    theme::card_frame()
        .show(ui, |ui| {
            ui.set_width(width - theme::SPACING_XL * 2.0);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(title)
                        .size(theme::FONT_CARD_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_MD);
            add_contents(ui)
        })
        .inner
}

/// Sidebar navigation control. Active entries get the darker fill.
pub fn nav_button(
    ui: &mut egui::Ui,
    id: egui::Id,
    icon: &str,
    label: &str,
    active: bool,
) -> egui::Response {
    let (_, rect) = ui.allocate_space(egui::vec2(ui.available_width(), theme::NAV_ITEM_HEIGHT));
    let response = ui.interact(rect, id, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = if active {
            (theme::SIDEBAR_ITEM_ACTIVE, rect)
        } else {
            theme::button_visual(&response, theme::SIDEBAR_BG, rect)
        };
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            draw_rect.left_center() + egui::vec2(12.0, 0.0),
            egui::Align2::LEFT_CENTER,
            format!("{}  {}", icon, label),
            egui::FontId::proportional(theme::FONT_BODY + 1.0),
            theme::TEXT_ON_ACCENT,
        );
    }

    response
}

/// One slice of the awards pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSegment {
    pub label: &'static str,
    pub value: u32,
    pub color: egui::Color32,
    /// Radians, clockwise from 12 o'clock
    pub start_angle: f32,
    pub sweep: f32,
}

/// Lay out pie slices in record order. Segment values are the record values unchanged.
pub fn pie_segments(awards: &[AwardRecord]) -> Vec<PieSegment> {
    let total: u64 = awards.iter().map(|a| u64::from(a.value)).sum();
    let mut angle = 0.0;
    awards
        .iter()
        .map(|award| {
            let sweep = if total == 0 {
                0.0
            } else {
                TAU * (award.value as f64 / total as f64) as f32
            };
            let segment = PieSegment {
                label: award.program,
                value: award.value,
                color: award.color,
                start_angle: angle,
                sweep,
            };
            angle += sweep;
            segment
        })
        .collect()
}

/// Paint a pie chart with a legend on the right
pub fn pie_chart(ui: &mut egui::Ui, segments: &[PieSegment], radius: f32) {
    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            if segments.iter().all(|s| s.sweep <= 0.0) {
                painter.circle_stroke(
                    center,
                    radius - 1.0,
                    egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT),
                );
            }
            for segment in segments {
                paint_slice(painter, center, radius, segment);
            }
        }

        ui.add_space(theme::SPACING_LG);
        ui.vertical(|ui| {
            for segment in segments {
                ui.horizontal(|ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, segment.color);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(format!(
                                "{}  {}",
                                segment.label,
                                crate::utils::format_currency(u64::from(segment.value))
                            ))
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                        )
                        .selectable(false),
                    );
                });
            }
        });
    });
}

fn paint_slice(painter: &egui::Painter, center: egui::Pos2, radius: f32, segment: &PieSegment) {
    if segment.sweep <= 0.0 {
        return;
    }
    let point = |angle: f32| {
        let a = angle - FRAC_PI_2;
        center + egui::vec2(a.cos(), a.sin()) * radius
    };

    // convex_polygon needs convex input, so draw fans of at most a quarter turn
    let chunks = (segment.sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let chunk_sweep = segment.sweep / chunks as f32;
    for chunk in 0..chunks {
        let start = segment.start_angle + chunk_sweep * chunk as f32;
        let steps = 16;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for step in 0..=steps {
            points.push(point(start + chunk_sweep * step as f32 / steps as f32));
        }
        painter.add(egui::Shape::convex_polygon(points, segment.color, egui::Stroke::NONE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceData;

    fn render_stars(rating: f32) -> String {
        let stars = StarRating::from_rating(rating);
        stars.filled_glyphs() + &stars.empty_glyphs()
    }

    #[test]
    fn test_stars_whole_ratings() {
        assert_eq!(render_stars(4.0), "★★★★☆");
        assert_eq!(render_stars(0.0), "☆☆☆☆☆");
        assert_eq!(render_stars(5.0), "★★★★★");
    }

    #[test]
    fn test_stars_floor_and_clamp() {
        assert_eq!(StarRating::from_rating(4.5).filled, 4);
        assert_eq!(StarRating::from_rating(-2.0).filled, 0);
        assert_eq!(StarRating::from_rating(9.0).filled, 5);
        assert_eq!(StarRating::from_rating(f32::NAN).filled, 0);

        for rating in [0.0, 1.2, 2.5, 3.99, 5.0, 12.0] {
            let stars = StarRating::from_rating(rating);
            assert_eq!(stars.filled + stars.empty(), STAR_COUNT);
            assert_eq!(render_stars(rating).chars().count(), STAR_COUNT as usize);
        }
    }

    #[test]
    fn test_pie_segment_values_sum_to_award_total() {
        let data = ReferenceData::builtin();
        let segments = pie_segments(&data.awards);

        assert_eq!(segments.len(), data.awards.len());
        let shown: u64 = segments.iter().map(|s| u64::from(s.value)).sum();
        assert_eq!(shown, data.award_total());

        for (segment, award) in segments.iter().zip(&data.awards) {
            assert_eq!(segment.label, award.program);
            assert_eq!(segment.value, award.value);
            assert_eq!(segment.color, award.color);
        }

        let sweep: f32 = segments.iter().map(|s| s.sweep).sum();
        assert!((sweep - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_pie_segments_are_contiguous() {
        let data = ReferenceData::builtin();
        let segments = pie_segments(&data.awards);
        for pair in segments.windows(2) {
            let end = pair[0].start_angle + pair[0].sweep;
            assert!((pair[1].start_angle - end).abs() < 1e-5);
        }
    }

    #[test]
    fn test_pie_segments_zero_total() {
        let awards = vec![AwardRecord {
            program: "Unfunded",
            value: 0,
            color: theme::CHART_SKY,
        }];
        let segments = pie_segments(&awards);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].sweep, 0.0);
        assert!(pie_segments(&[]).is_empty());
    }
}
