use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::CoreError;
use crate::geometry::{Point, Rect, Size};
use crate::setup::SetupStep;
use crate::toolkit::Toolkit;
use crate::widget::{Label, Widget};

/// A top-level window that has not been shown yet.
///
/// All mutation happens here. [`Frame::show`] consumes the frame and hands
/// back a [`ShownFrame`], which has no mutators, so nothing can change a
/// window after it becomes visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    title: String,
    children: Vec<Widget>,
    size: Option<Size>,
    position: Option<Point>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.children.iter().filter_map(Widget::as_label)
    }

    pub fn add(&mut self, widget: impl Into<Widget>) {
        self.children.push(widget.into());
    }

    /// Size assigned by the last [`Frame::pack`], if any.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Origin assigned by the last [`Frame::center_on`], if any.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(self.position?, self.size?))
    }

    /// An unshown frame is never visible.
    pub fn is_visible(&self) -> bool {
        false
    }

    /// Sizes the frame to the smallest bounds that show every child without
    /// clipping. Children are stacked top to bottom.
    pub fn pack<T: Toolkit + ?Sized>(&mut self, toolkit: &T) -> Size {
        let content = self
            .children
            .iter()
            .map(|child| child.preferred_size(toolkit))
            .fold(Size::ZERO, Size::stack_below);
        let size = content.grow(toolkit.frame_insets());

        trace!(
            children = self.children.len(),
            width = size.width,
            height = size.height,
            "packed frame"
        );
        self.size = Some(size);
        size
    }

    /// Centers the frame on `owner`, or on the screen when there is no owner.
    /// Packs first if the frame has no size yet.
    pub fn center_on<T: Toolkit + ?Sized>(
        &mut self,
        toolkit: &T,
        owner: Option<Rect>,
    ) -> Result<Point, CoreError> {
        let reference = owner.unwrap_or_else(|| toolkit.screen_bounds());
        if reference.size.is_empty() {
            return Err(CoreError::InvalidReference {
                width: reference.size.width,
                height: reference.size.height,
            });
        }

        let size = match self.size {
            Some(size) => size,
            None => self.pack(toolkit),
        };
        let origin = reference.centered_origin(size);

        trace!(
            x = origin.x,
            y = origin.y,
            relative_to_owner = owner.is_some(),
            "centered frame"
        );
        self.position = Some(origin);
        Ok(origin)
    }

    /// Presents the frame through `toolkit`. A frame that was never
    /// positioned is centered on the screen first.
    pub fn show<T: Toolkit + ?Sized>(mut self, toolkit: &mut T) -> Result<ShownFrame, CoreError> {
        let size = match self.size {
            Some(size) => size,
            None => self.pack(&*toolkit),
        };
        let origin = match self.position {
            Some(origin) => origin,
            None => self.center_on(&*toolkit, None)?,
        };

        toolkit
            .present(&self)
            .map_err(|e| CoreError::toolkit(SetupStep::Show, e))?;
        debug!(title = %self.title, "frame shown");

        Ok(ShownFrame {
            title: self.title,
            children: self.children,
            bounds: Rect::new(origin, size),
        })
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            title: self.title.clone(),
            labels: self.labels().map(|l| l.text().to_owned()).collect(),
            size: self.size,
            position: self.position,
            visible: false,
        }
    }
}

/// A window that has been shown. Read-only for the rest of its life.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownFrame {
    title: String,
    children: Vec<Widget>,
    bounds: Rect,
}

impl ShownFrame {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.children.iter().filter_map(Widget::as_label)
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        true
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            title: self.title.clone(),
            labels: self.labels().map(|l| l.text().to_owned()).collect(),
            size: Some(self.bounds.size),
            position: Some(self.bounds.origin),
            visible: true,
        }
    }
}

/// Serialisable description of a window at one point of its setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSnapshot {
    pub title: String,
    pub labels: Vec<String>,
    pub size: Option<Size>,
    pub position: Option<Point>,
    pub visible: bool,
}
