//! The fixed window setup sequence.

use std::fmt;

use tracing::{debug, info};

use crate::error::CoreError;
use crate::frame::{Frame, ShownFrame};
use crate::toolkit::Toolkit;
use crate::widget::Label;

pub const TITLE: &str = "Hi!";
pub const GREETING: &str = "Hello, world!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Create,
    SetTitle,
    AddLabel,
    Pack,
    Center,
    Show,
}

impl SetupStep {
    pub const ALL: [SetupStep; 6] = [
        SetupStep::Create,
        SetupStep::SetTitle,
        SetupStep::AddLabel,
        SetupStep::Pack,
        SetupStep::Center,
        SetupStep::Show,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SetupStep::Create => "create",
            SetupStep::SetTitle => "set-title",
            SetupStep::AddLabel => "add-label",
            SetupStep::Pack => "pack",
            SetupStep::Center => "center",
            SetupStep::Show => "show",
        }
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title and label text for the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub title: String,
    pub text: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            text: GREETING.to_string(),
        }
    }
}

/// Opens the "Hi!" / "Hello, world!" window on `toolkit`.
pub fn run<T: Toolkit + ?Sized>(toolkit: &mut T) -> Result<ShownFrame, CoreError> {
    run_with(toolkit, &Greeting::default())
}

/// Creates a frame, titles it, adds one label, packs it, centers it on the
/// screen and shows it, in that order.
pub fn run_with<T: Toolkit + ?Sized>(
    toolkit: &mut T,
    greeting: &Greeting,
) -> Result<ShownFrame, CoreError> {
    let mut frame = Frame::new();
    completed(toolkit, SetupStep::Create, &frame);

    frame.set_title(greeting.title.as_str());
    completed(toolkit, SetupStep::SetTitle, &frame);

    frame.add(Label::new(greeting.text.as_str()));
    completed(toolkit, SetupStep::AddLabel, &frame);

    frame.pack(&*toolkit);
    completed(toolkit, SetupStep::Pack, &frame);

    frame.center_on(&*toolkit, None)?;
    completed(toolkit, SetupStep::Center, &frame);

    let shown = frame.show(toolkit)?;
    debug!(step = %SetupStep::Show, "setup step done");
    toolkit.step_completed(SetupStep::Show, &shown.snapshot());

    let bounds = shown.bounds();
    info!(
        title = shown.title(),
        x = bounds.origin.x,
        y = bounds.origin.y,
        width = bounds.size.width,
        height = bounds.size.height,
        "window shown"
    );
    Ok(shown)
}

fn completed<T: Toolkit + ?Sized>(toolkit: &mut T, step: SetupStep, frame: &Frame) {
    debug!(step = %step, "setup step done");
    toolkit.step_completed(step, &frame.snapshot());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::WindowSnapshot;
    use crate::geometry::{Insets, Point, Rect, Size};
    use crate::headless::HeadlessToolkit;

    /// Wraps a headless toolkit and records the window state after each step.
    struct Recorder {
        inner: HeadlessToolkit,
        steps: Vec<(SetupStep, WindowSnapshot)>,
        presented: Option<Presented>,
    }

    /// What `present` was handed, and which steps had finished by then.
    struct Presented {
        state: WindowSnapshot,
        bounds: Option<Rect>,
        after: Vec<SetupStep>,
    }

    impl Recorder {
        fn new(inner: HeadlessToolkit) -> Self {
            Self {
                inner,
                steps: Vec::new(),
                presented: None,
            }
        }

        fn state_after(&self, step: SetupStep) -> &WindowSnapshot {
            &self
                .steps
                .iter()
                .find(|(s, _)| *s == step)
                .expect("step was not recorded")
                .1
        }
    }

    impl Toolkit for Recorder {
        type Error = std::convert::Infallible;

        fn screen_bounds(&self) -> Rect {
            self.inner.screen_bounds()
        }

        fn measure_text(&self, text: &str) -> Size {
            self.inner.measure_text(text)
        }

        fn frame_insets(&self) -> Insets {
            self.inner.frame_insets()
        }

        fn step_completed(&mut self, step: SetupStep, state: &WindowSnapshot) {
            self.steps.push((step, state.clone()));
        }

        fn present(&mut self, frame: &Frame) -> Result<(), Self::Error> {
            self.presented = Some(Presented {
                state: frame.snapshot(),
                bounds: frame.bounds(),
                after: self.steps.iter().map(|(s, _)| *s).collect(),
            });
            self.inner.present(frame)
        }
    }

    #[derive(Debug)]
    struct NoDisplay;

    impl fmt::Display for NoDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("no display available")
        }
    }

    impl std::error::Error for NoDisplay {}

    struct Broken;

    impl Toolkit for Broken {
        type Error = NoDisplay;

        fn screen_bounds(&self) -> Rect {
            HeadlessToolkit::DEFAULT_SCREEN
        }

        fn measure_text(&self, _text: &str) -> Size {
            Size::new(10.0, 10.0)
        }

        fn present(&mut self, _frame: &Frame) -> Result<(), Self::Error> {
            Err(NoDisplay)
        }
    }

    #[test]
    fn test_hello_window() {
        let mut tk = HeadlessToolkit::default();
        let shown = run(&mut tk).unwrap();

        assert_eq!(shown.title(), "Hi!");
        assert_eq!(shown.children().len(), 1);
        let labels: Vec<_> = shown.labels().map(Label::text).collect();
        assert_eq!(labels, vec!["Hello, world!"]);
        assert!(shown.is_visible());
    }

    #[test]
    fn test_size_follows_content() {
        let mut tk = HeadlessToolkit::default();
        let shown = run(&mut tk).unwrap();
        assert_eq!(shown.bounds().size, tk.measure_text(GREETING));

        let mut wide = HeadlessToolkit::default().with_metrics(20.0, 30.0);
        let shown = run(&mut wide).unwrap();
        assert_eq!(shown.bounds().size, Size::new(260.0, 30.0));
    }

    #[test]
    fn test_centered_on_screen() {
        let mut tk = HeadlessToolkit::default();
        let shown = run(&mut tk).unwrap();

        // 1920x1080 screen, 104x16 label
        assert_eq!(shown.bounds().origin, Point::new(908.0, 532.0));
        assert_eq!(shown.bounds().center(), tk.screen_bounds().center());
    }

    #[test]
    fn test_centered_on_secondary_origin() {
        let mut tk = HeadlessToolkit::new(Rect::from_xywh(-1280.0, 0.0, 1280.0, 1024.0));
        let shown = run(&mut tk).unwrap();
        assert_eq!(shown.bounds().center(), tk.screen_bounds().center());
    }

    #[test]
    fn test_steps_run_in_order() {
        let mut tk = Recorder::new(HeadlessToolkit::default());
        run(&mut tk).unwrap();

        let order: Vec<_> = tk.steps.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, SetupStep::ALL.to_vec());
    }

    #[test]
    fn test_title_and_label_set_before_shown() {
        let mut tk = Recorder::new(HeadlessToolkit::default());
        run(&mut tk).unwrap();

        let titled = tk.state_after(SetupStep::SetTitle);
        assert_eq!(titled.title, "Hi!");
        assert!(titled.labels.is_empty());
        assert!(!titled.visible);

        let labelled = tk.state_after(SetupStep::AddLabel);
        assert_eq!(labelled.labels, vec!["Hello, world!".to_string()]);
        assert_eq!(labelled.size, None);
        assert!(!labelled.visible);

        let packed = tk.state_after(SetupStep::Pack);
        assert!(packed.size.is_some());
        assert_eq!(packed.position, None);

        let centered = tk.state_after(SetupStep::Center);
        assert!(centered.position.is_some());
        assert!(!centered.visible);

        let shown = tk.state_after(SetupStep::Show);
        assert!(shown.visible);

        for (step, state) in &tk.steps {
            assert_eq!(state.visible, *step == SetupStep::Show, "step {step}");
        }
    }

    #[test]
    fn test_present_receives_finished_frame() {
        let mut tk = Recorder::new(HeadlessToolkit::default());
        let shown = run(&mut tk).unwrap();

        let presented = tk.presented.as_ref().expect("frame was never presented");
        assert_eq!(presented.state.title, "Hi!");
        assert_eq!(presented.state.labels, vec!["Hello, world!".to_string()]);
        assert_eq!(presented.bounds, Some(shown.bounds()));
        assert_eq!(presented.after, SetupStep::ALL[..5].to_vec());
    }

    #[test]
    fn test_presented_once_with_final_state() {
        let mut tk = HeadlessToolkit::default();
        let shown = run(&mut tk).unwrap();
        assert_eq!(tk.presented(), &[shown.snapshot()]);
    }

    #[test]
    fn test_rerun_is_identical() {
        let first = run(&mut HeadlessToolkit::default()).unwrap();
        let second = run(&mut HeadlessToolkit::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.snapshot(), second.snapshot());
    }

    #[test]
    fn test_custom_greeting() {
        let greeting = Greeting {
            title: "Howdy".to_string(),
            text: "Hi there".to_string(),
        };
        let mut tk = HeadlessToolkit::default();
        let shown = run_with(&mut tk, &greeting).unwrap();
        assert_eq!(shown.title(), "Howdy");
        assert_eq!(shown.bounds().size, Size::new(64.0, 16.0));
    }

    #[test]
    fn test_toolkit_failure_reports_step() {
        let err = run(&mut Broken).unwrap_err();
        match &err {
            CoreError::Toolkit { step, source } => {
                assert_eq!(*step, SetupStep::Show);
                assert_eq!(source.to_string(), "no display available");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "toolkit failed during 'show': no display available"
        );
    }

    #[test]
    fn test_step_names() {
        let names: Vec<_> = SetupStep::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["create", "set-title", "add-label", "pack", "center", "show"]
        );
    }
}
