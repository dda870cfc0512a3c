//! Full editor frame: title bar plus the two-knob panel.

use egui::{CentralPanel, Context, Frame, Margin, RichText, TopBottomPanel};

use crate::panel::{CrshrPanel, PANEL_TITLE};
use crate::param_bridge::ParamBridge;
use crate::theme::Theme;
use crate::widgets::EguiRenderer;

/// Draw one editor frame into `ctx`.
///
/// Called once per refresh by whatever owns the event loop. The theme is
/// expected to have been applied to `ctx` already (see [`Theme::apply`]).
pub fn show_editor<B: ParamBridge + ?Sized>(
    ctx: &Context,
    panel: &mut CrshrPanel,
    bridge: &mut B,
    theme: &Theme,
) {
    TopBottomPanel::top("crshr_title")
        .frame(
            Frame::new()
                .fill(theme.title_bg_active)
                .inner_margin(Margin::same(theme.scaled(4.0).round() as i8)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(PANEL_TITLE)
                        .font(theme.title_font())
                        .color(theme.text_primary),
                );
            });
        });

    CentralPanel::default()
        .frame(Frame::new().fill(theme.window_bg))
        .show(ctx, |ui| {
            ui.add_space(theme.top_spacing());
            ui.horizontal(|ui| {
                // Center the knob pair
                let knobs_width = 2.0 * theme.knob_diameter() + ui.spacing().item_spacing.x;
                let slack = (ui.available_width() - knobs_width).max(0.0);
                ui.add_space(slack / 2.0);

                let mut renderer = EguiRenderer::new(ui, theme);
                panel.render(&mut renderer, bridge, theme);
            });
        });
}
