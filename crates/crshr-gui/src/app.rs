//! eframe application hosting the CRSHR editor.

use crshr_core::CrshrParam;
use crshr_gui_core::{CrshrPanel, Theme, show_editor};
use eframe::egui;

use crate::loopback_host::LoopbackHost;

/// Host values delivered before the first frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InitialValues {
    /// Crush value, if given.
    pub crush: Option<f32>,
    /// Mix percentage, if given.
    pub mix: Option<f32>,
}

/// Standalone editor: the panel wired to a [`LoopbackHost`].
pub struct CrshrApp {
    panel: CrshrPanel,
    host: LoopbackHost,
    theme: Theme,
}

impl CrshrApp {
    /// Create the app and install the theme on the eframe context.
    pub fn new(cc: &eframe::CreationContext<'_>, theme: Theme, initial: InitialValues) -> Self {
        theme.apply(&cc.egui_ctx);
        Self::with_values(theme, initial)
    }

    /// Create the app without an egui context.
    pub fn with_values(theme: Theme, initial: InitialValues) -> Self {
        let mut panel = CrshrPanel::new();
        let values = [
            (CrshrParam::Crush, initial.crush),
            (CrshrParam::Mix, initial.mix),
        ];
        for (param, value) in values {
            if let Some(value) = value {
                tracing::info!(%param, value, "initial host value");
                panel.on_parameter_changed(param.index(), value);
            }
        }
        Self {
            panel,
            host: LoopbackHost::new(),
            theme,
        }
    }

    /// The editor panel.
    pub fn panel(&self) -> &CrshrPanel {
        &self.panel
    }

    /// Deliver the host's confirmations of this frame's pushes.
    fn deliver_echoes(&mut self) {
        for (index, value) in self.host.drain_echoes() {
            self.panel.on_parameter_changed(index, value);
        }
    }
}

impl eframe::App for CrshrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        show_editor(ctx, &mut self.panel, &mut self.host, &self.theme);

        self.deliver_echoes();
        if self.panel.take_repaint_request() {
            ctx.request_repaint();
        }
    }
}
