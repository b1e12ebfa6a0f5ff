//! App module - contains the main application state and logic

mod pages;
mod sidebar;
mod toast;

use crate::data::ReferenceData;
use crate::navigation::{Navigator, UserAction};
use crate::services::Services;
use crate::settings::Settings;
use crate::theme;
use crate::types::PageId;
use eframe::egui;
use std::path::PathBuf;
use toast::Toast;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) navigator: Navigator,
    pub(crate) toast: Option<Toast>,
    // None = not tried yet, Some(None) = rasterizing failed
    pub(crate) logo_texture: Option<Option<egui::TextureHandle>>,
    // Central panel rect for toast positioning
    pub(crate) central_panel_rect: Option<egui::Rect>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

/// Interaction collected while painting, applied once the frame's screen is dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiEvent {
    Select(PageId),
    Action(UserAction),
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        configure_context(&cc.egui_ctx);
        let navigator = Navigator::new(ReferenceData::builtin(), Services::default());
        Self::from_parts(navigator, data_dir)
    }

    pub fn from_parts(navigator: Navigator, data_dir: PathBuf) -> Self {
        Self {
            navigator,
            toast: None,
            logo_texture: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        Settings::with_geometry(self.window_pos, self.window_size).save(&self.data_dir);
    }

    pub(crate) fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Select(page) => self.navigator.select(page),
            UiEvent::Action(action) => {
                if let Some(ack) = self.navigator.dispatch(action) {
                    self.toast = Some(Toast::new(ack.message));
                }
            }
        }
    }

    /// Paint one frame and apply whatever the user did during it
    pub fn ui(&mut self, ctx: &egui::Context) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        let mut events = Vec::new();

        // Number keys jump between pages when nothing has keyboard focus
        if !ctx.wants_keyboard_input() {
            let active = self.navigator.state().active();
            let pressed = ctx.input(|i| {
                PageId::ALL
                    .into_iter()
                    .filter(|p| *p != active)
                    .find(|p| i.modifiers.is_none() && i.key_pressed(p.shortcut_key()))
            });
            if let Some(page) = pressed {
                debug!(%page, "Page shortcut");
                events.push(UiEvent::Select(page));
            }
        }

        {
            let screen = self.navigator.render();

            // Sidebar must be added BEFORE CentralPanel
            sidebar::show(ctx, &screen.sidebar, &mut self.logo_texture, &mut events);

            egui::CentralPanel::default()
                .frame(theme::content_frame())
                .show(ctx, |ui| {
                    self.central_panel_rect = Some(ui.max_rect());
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            pages::header(ui, screen.header, &mut events);
                            pages::show(ui, &screen.page, &mut events);
                        });
                });
        }

        for event in events {
            self.handle(event);
        }

        toast::show(ctx, &mut self.toast, self.central_panel_rect);
    }
}

/// Fonts and visuals shared by the native window and headless contexts
pub fn configure_context(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Light);

    // Add Phosphor icons font
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    // Apply theme from theme.rs
    theme::apply_visuals(ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::Recorder;

    fn test_app(services: Services) -> App {
        let navigator = Navigator::new(ReferenceData::builtin(), services);
        App::from_parts(navigator, std::env::temp_dir())
    }

    fn run_frame(ctx: &egui::Context, app: &mut App, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(1280.0, 800.0),
            )),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_every_page_paints() {
        let ctx = egui::Context::default();
        configure_context(&ctx);
        let mut app = test_app(Services::default());

        for page in PageId::ALL {
            app.handle(UiEvent::Select(page));
            run_frame(&ctx, &mut app, Vec::new());
            run_frame(&ctx, &mut app, Vec::new());
            assert_eq!(app.navigator.state().active(), page);
        }
        assert!(app.central_panel_rect.is_some());
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let ctx = egui::Context::default();
        configure_context(&ctx);
        let mut app = test_app(Services::default());

        run_frame(&ctx, &mut app, Vec::new());
        run_frame(&ctx, &mut app, vec![key(egui::Key::Num3)]);
        assert_eq!(app.navigator.state().active(), PageId::Tracker);

        run_frame(&ctx, &mut app, vec![key(egui::Key::Num2)]);
        assert_eq!(app.navigator.state().active(), PageId::Finder);

        run_frame(&ctx, &mut app, vec![key(egui::Key::Num1)]);
        assert_eq!(app.navigator.state().active(), PageId::Dashboard);
    }

    fn click(ctx: &egui::Context, app: &mut App, page: PageId) {
        let rect = ctx
            .read_response(sidebar::nav_id(page))
            .map(|r| r.rect)
            .expect("sidebar entry laid out");
        let pos = rect.center();
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        };
        run_frame(ctx, app, vec![egui::Event::PointerMoved(pos)]);
        run_frame(ctx, app, vec![button(true)]);
        run_frame(ctx, app, vec![button(false)]);
    }

    #[test]
    fn test_sidebar_click_selects_page() {
        let ctx = egui::Context::default();
        configure_context(&ctx);
        let mut app = test_app(Services::default());
        run_frame(&ctx, &mut app, Vec::new());

        for page in [PageId::Tracker, PageId::Profile, PageId::Finder, PageId::Dashboard] {
            click(&ctx, &mut app, page);
            assert_eq!(app.navigator.state().active(), page);

            let active: Vec<_> = app
                .navigator
                .render()
                .sidebar
                .iter()
                .filter(|e| e.active)
                .map(|e| e.page)
                .collect();
            assert_eq!(active, vec![page]);
        }
    }

    #[test]
    fn test_action_shows_toast_and_keeps_page() {
        let recorder = Recorder::default();
        let mut app = test_app(recorder.services());
        app.handle(UiEvent::Select(PageId::Profile));

        app.handle(UiEvent::Action(UserAction::EditProfile));

        assert_eq!(app.navigator.state().active(), PageId::Profile);
        assert_eq!(recorder.calls(), vec!["edit_profile:Test Student".to_string()]);
        let toast = app.toast.as_ref().expect("toast should be shown");
        assert_eq!(toast.message(), "edit_profile:Test Student");
    }

    #[test]
    fn test_unknown_program_shows_nothing() {
        let mut app = test_app(Services::default());
        app.handle(UiEvent::Action(UserAction::Apply(42)));
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_toast_paints_over_page() {
        let ctx = egui::Context::default();
        configure_context(&ctx);
        let mut app = test_app(Services::default());

        run_frame(&ctx, &mut app, Vec::new());
        app.handle(UiEvent::Action(UserAction::StartEligibilityCheck));
        run_frame(&ctx, &mut app, Vec::new());
        assert!(app.toast.is_some());
    }
}
