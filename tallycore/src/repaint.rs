//! Input-driven repaint control
//!
//! egui repaints after every input event on its own. Anything that changes
//! state outside an input event has to ask for a frame explicitly, and nothing
//! else should schedule one, so an idle window costs no frames at all.
//!
//! Call [`RepaintController::begin_frame`] at the top of `update()`,
//! [`RepaintController::mark_needs_repaint`] whenever state changed in a way
//! the current frame has not drawn yet, and [`RepaintController::end_frame`]
//! at the bottom.

/// Why this frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// User input (pointer, key, scroll).
    Input,
    /// The previous frame marked state dirty.
    StateChange,
}

#[derive(Debug, Default)]
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: Option<RepaintReason>,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for one more frame after the current one.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    pub fn reason(&self) -> RepaintReason {
        self.reason.unwrap_or(RepaintReason::Init)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frames that follow a [`Self::mark_needs_repaint`] are `StateChange`;
    /// every other frame after the first was woken by input.
    pub fn begin_frame(&mut self, _ctx: &egui::Context) {
        self.reason = Some(if self.frame == 0 {
            RepaintReason::Init
        } else if self.needs_repaint {
            RepaintReason::StateChange
        } else {
            RepaintReason::Input
        });
        self.needs_repaint = false;
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            tracing::trace!(frame = self.frame, "repaint requested");
            ctx.request_repaint();
        }
    }
}
