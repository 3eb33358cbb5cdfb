use crate::frame::{Frame, WindowSnapshot};
use crate::geometry::{Insets, Rect, Size};
use crate::setup::SetupStep;

/// The native GUI collaborator a [`Frame`] is set up against.
///
/// Implementations supply screen geometry and text metrics, and make a
/// finished frame visible. Everything else (layout, centering, the order of
/// the setup steps) is decided on this side of the trait.
pub trait Toolkit {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Full area of the primary screen, the reference for centering a
    /// window that has no owner.
    fn screen_bounds(&self) -> Rect;

    /// Minimum bounds needed to draw `text` as a single label.
    fn measure_text(&self, text: &str) -> Size;

    /// Decoration padding added around a frame's content when packing.
    fn frame_insets(&self) -> Insets {
        Insets::NONE
    }

    /// Called after every setup step with the state it left behind.
    fn step_completed(&mut self, _step: SetupStep, _state: &WindowSnapshot) {}

    /// Makes `frame` visible. Called once per frame, after it has been
    /// titled, filled, packed and positioned.
    fn present(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
