//! tallycore - shared library for the tally calculator

pub mod logging;
pub mod repaint;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use repaint::RepaintController;
pub use theme::TallyTheme;
