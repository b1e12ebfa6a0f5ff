//! Page rendering (header, dashboard, finder, tracker, profile)

use super::UiEvent;
use crate::navigation::UserAction;
use crate::theme;
use crate::ui::components::{card, pie_chart, stars};
use crate::utils::format_currency;
use crate::views::*;
use eframe::egui;

pub(crate) fn header(ui: &mut egui::Ui, title: &str, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_PAGE_TITLE)
                    .strong()
                    .color(theme::ACCENT_TEXT),
            )
            .selectable(false),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = format!("{}  Log Out", egui_phosphor::regular::SIGN_OUT);
            if ui.add(theme::button_accent(label)).clicked() {
                events.push(UiEvent::Action(UserAction::LogOut));
            }
        });
    });
    ui.add_space(theme::SPACING_XXL);
}

pub(crate) fn show(ui: &mut egui::Ui, page: &PageView<'_>, events: &mut Vec<UiEvent>) {
    match page {
        PageView::Dashboard(view) => dashboard(ui, view, events),
        PageView::Finder(view) => finder(ui, view, events),
        PageView::Tracker(view) => tracker(ui, view),
        PageView::Profile(view) => profile(ui, view, events),
    }
}

fn section_title(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SECTION)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
    ui.add_space(theme::SPACING_LG);
}

fn muted(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text.into())
        .size(theme::FONT_BODY)
        .color(theme::TEXT_MUTED)
}

// ============================================================================
// DASHBOARD
// ============================================================================

fn dashboard(ui: &mut egui::Ui, view: &DashboardView<'_>, events: &mut Vec<UiEvent>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_XL, theme::SPACING_XL);

        card(ui, "Quick Eligibility Check", theme::CARD_WIDTH, |ui| {
            ui.label(muted("Answer a few questions to see matching aid programs."));
            ui.add_space(theme::SPACING_LG);
            if ui.add(theme::button_accent("Start Check")).clicked() {
                events.push(UiEvent::Action(UserAction::StartEligibilityCheck));
            }
        });

        card(ui, "Upcoming Deadlines", theme::CARD_WIDTH, |ui| {
            ui.spacing_mut().item_spacing.y = theme::SPACING_MD;
            for deadline in view.deadlines {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{}  {}",
                            egui_phosphor::regular::CALENDAR_BLANK,
                            deadline.program
                        ))
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(muted(deadline.due_label()));
                    });
                });
            }
        });

        card(ui, "Feedback Score", theme::CARD_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("{:.1}", view.feedback_score))
                        .size(theme::FONT_DISPLAY)
                        .strong()
                        .color(theme::ACCENT),
                );
                ui.label(
                    egui::RichText::new("out of 5")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
                stars(ui, view.feedback_score, 18.0);
            });
        });

        card(ui, "Awards", theme::CARD_WIDTH, |ui| {
            pie_chart(ui, &view.awards, theme::PIE_RADIUS);
            ui.add_space(theme::SPACING_MD);
            ui.label(muted(format!("Total awarded: {}", format_currency(view.award_total))));
        });
    });
}

// ============================================================================
// AID FINDER
// ============================================================================

fn finder(ui: &mut egui::Ui, view: &FinderView<'_>, events: &mut Vec<UiEvent>) {
    section_title(ui, "Browse Aid Programs");
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(theme::SPACING_XL, theme::SPACING_XL);
        for (idx, program) in view.programs.iter().enumerate() {
            card(ui, program.name, theme::PROGRAM_CARD_WIDTH, |ui| {
                ui.label(muted(program.description));
                ui.add_space(theme::SPACING_SM);
                stars(ui, program.rating, 16.0);
                ui.add_space(theme::SPACING_LG);
                let apply = ui.add_sized(
                    egui::vec2(ui.available_width(), theme::TABLE_ROW_HEIGHT),
                    theme::button_accent("Apply"),
                );
                if apply.clicked() {
                    events.push(UiEvent::Action(UserAction::Apply(idx)));
                }
            });
        }
    });
}

// ============================================================================
// APPLICATION TRACKER
// ============================================================================

fn tracker(ui: &mut egui::Ui, view: &TrackerView<'_>) {
    use egui_extras::{Column, TableBuilder};

    section_title(ui, "Application Status");
    theme::card_frame()
        .inner_margin(egui::Margin::same(0))
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::exact(240.0))
                .column(Column::exact(180.0))
                .column(Column::remainder())
                .header(theme::TABLE_HEADER_HEIGHT, |mut header| {
                    for title in view.columns {
                        header.col(|ui| {
                            ui.painter().rect_filled(ui.max_rect(), 0.0, theme::ACCENT);
                            ui.add_space(theme::SPACING_LG);
                            ui.label(
                                egui::RichText::new(title)
                                    .size(theme::FONT_BODY)
                                    .strong()
                                    .color(theme::TEXT_ON_ACCENT),
                            );
                        });
                    }
                })
                .body(|mut body| {
                    for row in &view.rows {
                        body.row(theme::TABLE_ROW_HEIGHT, |mut table_row| {
                            table_row.col(|ui| {
                                ui.add_space(theme::SPACING_LG);
                                ui.label(egui::RichText::new(row.program).size(theme::FONT_SMALL));
                            });
                            table_row.col(|ui| {
                                ui.add_space(theme::SPACING_LG);
                                ui.label(
                                    egui::RichText::new(row.status_label())
                                        .size(theme::FONT_SMALL)
                                        .color(theme::status_color(row.status)),
                                );
                            });
                            table_row.col(|ui| {
                                ui.add_space(theme::SPACING_LG);
                                ui.label(
                                    egui::RichText::new(&row.last_update).size(theme::FONT_SMALL),
                                );
                            });
                        });
                    }
                });
        });
}

// ============================================================================
// PROFILE
// ============================================================================

fn profile(ui: &mut egui::Ui, view: &ProfileView, events: &mut Vec<UiEvent>) {
    ui.vertical_centered(|ui| {
        let width = theme::PROFILE_MAX_WIDTH.min(ui.available_width());
        card(ui, "My Profile", width, |ui| {
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.spacing_mut().item_spacing.y = theme::SPACING_LG;
                for (label, value) in &view.fields {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        ui.label(
                            egui::RichText::new(format!("{}: ", label))
                                .size(theme::FONT_BODY)
                                .strong()
                                .color(theme::TEXT_SECONDARY),
                        );
                        ui.label(
                            egui::RichText::new(value)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_SECONDARY),
                        );
                    });
                }
                let label = format!("{}  Edit Profile", egui_phosphor::regular::PENCIL_SIMPLE);
                if ui.add(theme::button_accent(label)).clicked() {
                    events.push(UiEvent::Action(UserAction::EditProfile));
                }
            });
        });
    });
}
