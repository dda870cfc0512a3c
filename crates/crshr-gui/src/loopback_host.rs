//! In-process stand-in for a plugin host.
//!
//! [`LoopbackHost`] receives the editor's outbound calls, logs them, and
//! queues every pushed value so the app can feed it back through
//! [`CrshrPanel::on_parameter_changed`](crshr_gui_core::CrshrPanel::on_parameter_changed)
//! on the next frame, the way a real host confirms a parameter change.

use crshr_core::CrshrParam;
use crshr_gui_core::ParamBridge;

/// Host that echoes every pushed value back to the editor.
#[derive(Debug, Default)]
pub struct LoopbackHost {
    /// Per-parameter open gesture flags, by wire index.
    gestures: [bool; 2],
    echoes: Vec<(u32, f32)>,
}

impl LoopbackHost {
    /// Create an idle host with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued `(index, value)` echo, oldest first.
    pub fn drain_echoes(&mut self) -> Vec<(u32, f32)> {
        std::mem::take(&mut self.echoes)
    }
}

impl ParamBridge for LoopbackHost {
    fn begin_set(&mut self, param: CrshrParam) {
        tracing::debug!(%param, "host: begin edit");
        self.gestures[param.index() as usize] = true;
    }

    fn set(&mut self, param: CrshrParam, value: f32) {
        if !self.gestures.iter().any(|&open| open) {
            tracing::warn!(%param, value, "host: value pushed outside a gesture");
        }
        tracing::trace!(%param, value, "host: value");
        self.echoes.push((param.index(), value));
    }

    fn end_set(&mut self, param: CrshrParam) {
        let slot = &mut self.gestures[param.index() as usize];
        if *slot {
            tracing::debug!(%param, "host: end edit");
        } else {
            // Paired end for the parameter that was not dragged
            tracing::trace!(%param, "host: end edit without begin");
        }
        *slot = false;
    }
}
