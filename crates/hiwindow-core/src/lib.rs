pub mod error;
pub mod frame;
pub mod geometry;
pub mod headless;
pub mod setup;
pub mod toolkit;
pub mod widget;

pub use error::CoreError;
pub use frame::{Frame, ShownFrame, WindowSnapshot};
pub use geometry::{Insets, Point, Rect, Size};
pub use headless::HeadlessToolkit;
pub use setup::{GREETING, Greeting, SetupStep, TITLE, run, run_with};
pub use toolkit::Toolkit;
pub use widget::{Label, Widget};
