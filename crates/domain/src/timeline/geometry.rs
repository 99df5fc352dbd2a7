//! Viewport geometry for popup placement and horizontal centering

/// Element bounding box in viewport coordinates (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Size of the browser viewport
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Viewport edge a popup gets pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalPin {
    Left,
    Right,
}

/// Placement corrections for an event popup that would render off-screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipAdjustment {
    /// Popup overflows the top edge; render it below the baseline instead
    pub flip_below: bool,
    /// Popup overflows a side; drop the transform and pin it to that edge
    pub pin: Option<HorizontalPin>,
}

impl TooltipAdjustment {
    /// Offset from the marker used once a popup is flipped below
    pub const FLIPPED_TOP_OFFSET_PX: u32 = 25;

    /// Corrections needed for a popup with the given bounds.
    ///
    /// A right-edge overflow wins over a left-edge one, since pinning right
    /// also releases the left anchor.
    ///
    /// # Examples
    /// ```
    /// use debtline_domain::{HorizontalPin, Rect, TooltipAdjustment, Viewport};
    ///
    /// let viewport = Viewport { width: 800.0, height: 600.0 };
    /// let fits = TooltipAdjustment::for_bounds(Rect::new(10.0, 10.0, 200.0, 100.0), viewport);
    /// assert!(fits.is_noop());
    ///
    /// let clipped = TooltipAdjustment::for_bounds(Rect::new(700.0, -20.0, 200.0, 100.0), viewport);
    /// assert!(clipped.flip_below);
    /// assert_eq!(clipped.pin, Some(HorizontalPin::Right));
    /// ```
    pub fn for_bounds(bounds: Rect, viewport: Viewport) -> Self {
        let flip_below = bounds.top < 0.0;

        let pin = if bounds.right() > viewport.width {
            Some(HorizontalPin::Right)
        } else if bounds.left < 0.0 {
            Some(HorizontalPin::Left)
        } else {
            None
        };

        Self { flip_below, pin }
    }

    /// True when the popup already fits
    pub fn is_noop(&self) -> bool {
        !self.flip_below && self.pin.is_none()
    }

    /// Inline style overrides for the popup element
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if self.flip_below {
            style.push_str(&format!(
                "bottom: auto; top: {}px;",
                Self::FLIPPED_TOP_OFFSET_PX
            ));
        }
        match self.pin {
            Some(HorizontalPin::Left) => style.push_str(" transform: translateY(0); left: 0;"),
            Some(HorizontalPin::Right) => {
                style.push_str(" transform: translateY(0); right: 0; left: auto;")
            }
            None => {}
        }
        style.trim().to_string()
    }
}

/// Horizontal scroll delta that centers `target` inside `container`.
///
/// Positive values scroll right.
///
/// # Examples
/// ```
/// use debtline_domain::{center_scroll_delta, Rect};
///
/// let container = Rect::new(0.0, 0.0, 1000.0, 300.0);
/// let target = Rect::new(800.0, 100.0, 40.0, 40.0);
/// assert_eq!(center_scroll_delta(target, container), 320.0);
/// ```
pub fn center_scroll_delta(target: Rect, container: Rect) -> f64 {
    target.left - container.left - container.width / 2.0 + target.width / 2.0
}
