//! Left navigation sidebar

use super::UiEvent;
use crate::constants::{APP_VERSION, SIDEBAR_TITLE};
use crate::navigation::SidebarEntry;
use crate::theme;
use crate::types::PageId;
use crate::ui::components::nav_button;
use crate::utils;
use eframe::egui;
use tracing::warn;

const LOGO_SIZE: f32 = 28.0;

pub(crate) fn nav_id(page: PageId) -> egui::Id {
    egui::Id::new(("nav_button", page))
}

pub(crate) fn show(
    ctx: &egui::Context,
    entries: &[SidebarEntry],
    logo_texture: &mut Option<Option<egui::TextureHandle>>,
    events: &mut Vec<UiEvent>,
) {
    egui::SidePanel::left("nav_sidebar")
        .exact_width(theme::SIDEBAR_WIDTH)
        .resizable(false)
        .show_separator_line(false)
        .frame(theme::sidebar_frame())
        .show(ctx, |ui| {
            ui.add_space(theme::SPACING_SM);
            ui.horizontal(|ui| {
                let texture = logo_texture.get_or_insert_with(|| load_logo(ctx));
                if let Some(texture) = texture {
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(LOGO_SIZE, LOGO_SIZE),
                    ));
                }
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(SIDEBAR_TITLE)
                            .size(theme::FONT_SIDEBAR_TITLE)
                            .strong()
                            .color(theme::TEXT_ON_ACCENT),
                    )
                    .selectable(false),
                );
            });
            ui.add_space(theme::SPACING_XL);

            ui.spacing_mut().item_spacing.y = theme::SPACING_MD;
            for entry in entries {
                let response =
                    nav_button(ui, nav_id(entry.page), entry.icon, entry.label, entry.active);
                if response.clicked() {
                    events.push(UiEvent::Select(entry.page));
                }
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("v{}", APP_VERSION))
                            .size(theme::FONT_SMALL - 2.0)
                            .color(egui::Color32::from_white_alpha(160)),
                    )
                    .selectable(false),
                );
            });
        });
}

fn load_logo(ctx: &egui::Context) -> Option<egui::TextureHandle> {
    let size = (LOGO_SIZE * ctx.pixels_per_point() * 2.0) as u32;
    match utils::rasterize_logo(size) {
        Some((pixels, w, h)) => Some(ctx.load_texture(
            "logo",
            egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
            egui::TextureOptions::LINEAR,
        )),
        None => {
            warn!("Failed to rasterize logo");
            None
        }
    }
}
