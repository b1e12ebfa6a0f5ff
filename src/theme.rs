//! Centralized theme constants for Student Aid Navigator
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc); // slate-50
pub const BG_CARD: Color32 = Color32::WHITE;
pub const BG_ROW_ALT: Color32 = Color32::from_rgb(0xf1, 0xf5, 0xf9); // slate-100
pub const BG_HOVER_SUBTLE: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200

// =============================================================================
// COLORS - Accent (Sky)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x02, 0x84, 0xc7); // sky-600
pub const ACCENT_ACTIVE: Color32 = Color32::from_rgb(0x07, 0x59, 0x85); // sky-800
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x03, 0x69, 0xa1); // sky-700

// =============================================================================
// COLORS - Sidebar
// =============================================================================
pub const SIDEBAR_BG: Color32 = ACCENT;
pub const SIDEBAR_ITEM_ACTIVE: Color32 = ACCENT_ACTIVE;

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x37, 0x41, 0x51); // gray-700
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63); // gray-600
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80); // gray-500
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1); // slate-300

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x05, 0x96, 0x69); // emerald-600
pub const STATUS_WARNING: Color32 = Color32::from_rgb(0xd9, 0x77, 0x06); // amber-600
pub const STATUS_INFO: Color32 = Color32::from_rgb(0x02, 0x84, 0xc7); // sky-600
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// COLORS - Stars
// =============================================================================
pub const STAR_FILLED: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b); // amber-500
pub const STAR_EMPTY: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1); // slate-300

// =============================================================================
// COLORS - Chart
// =============================================================================
pub const CHART_SKY: Color32 = Color32::from_rgb(0x0e, 0xa5, 0xe9); // sky-500
pub const CHART_EMERALD: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81); // emerald-500
pub const CHART_AMBER: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b); // amber-500
pub const CHART_ROSE: Color32 = Color32::from_rgb(0xf4, 0x3f, 0x5e); // rose-500

pub fn status_color(status: crate::types::ApplicationStatus) -> Color32 {
    use crate::types::ApplicationStatus;
    match status {
        ApplicationStatus::Approved => STATUS_SUCCESS,
        ApplicationStatus::Pending => STATUS_WARNING,
        ApplicationStatus::UnderReview => STATUS_INFO,
        ApplicationStatus::Denied => STATUS_ERROR,
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 48.0;
pub const FONT_PAGE_TITLE: f32 = 30.0;
pub const FONT_SIDEBAR_TITLE: f32 = 20.0;
pub const FONT_SECTION: f32 = 20.0;
pub const FONT_CARD_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 13.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 224.0;
pub const NAV_ITEM_HEIGHT: f32 = 38.0;
pub const CARD_WIDTH: f32 = 320.0;
pub const PROGRAM_CARD_WIDTH: f32 = 280.0;
pub const PROFILE_MAX_WIDTH: f32 = 512.0;
pub const TABLE_HEADER_HEIGHT: f32 = 36.0;
pub const TABLE_ROW_HEIGHT: f32 = 32.0;
pub const PIE_RADIUS: f32 = 64.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;
pub const RADIUS_CARD: f32 = 12.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;
pub const SPACING_XXL: f32 = 32.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: false,
        panel_fill: BG_BASE,
        window_fill: BG_CARD,
        extreme_bg_color: BG_CARD,
        faint_bg_color: BG_ROW_ALT,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0xba, 0xe6, 0xfd), // sky-200
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_CARD,
                weak_bg_fill: BG_ROW_ALT,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: BG_ROW_ALT,
                weak_bg_fill: BG_ROW_ALT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER_SUBTLE,
                weak_bg_fill: BG_HOVER_SUBTLE,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(1.5, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: BORDER_DEFAULT,
                weak_bg_fill: BORDER_DEFAULT,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            ..egui::style::Widgets::light()
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::light()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(16.0, 8.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 1],
            blur: 3,
            spread: 0,
            color: Color32::from_black_alpha(20),
        })
}

// =============================================================================
// HELPER - Sidebar frame
// =============================================================================
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(SIDEBAR_BG)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

// =============================================================================
// HELPER - Content frame
// =============================================================================
pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_BASE)
        .inner_margin(egui::Margin::same(SPACING_XXL as i8))
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Accent sky button (for primary actions like Start Check)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_ON_ACCENT))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Darkens on hover, shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (darken(base_fill, 0.12), rect.shrink(1.0))
    } else if response.hovered() {
        (darken(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn darken(c: Color32, amount: f32) -> Color32 {
    let scale = 1.0 - amount;
    Color32::from_rgb(
        (c.r() as f32 * scale) as u8,
        (c.g() as f32 * scale) as u8,
        (c.b() as f32 * scale) as u8,
    )
}
