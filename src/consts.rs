//! Shared numeric and style constants for the wheel.

// ── Values ──────────────────────────────────────────────────────

/// Largest value a slice can hold. Values live in `1..=MAX_VALUE`.
pub const MAX_VALUE: u8 = 10;

/// Grid rings are drawn at every multiple of this value.
pub const RING_STEP: u8 = 2;

// ── Layout ──────────────────────────────────────────────────────

/// Reference chart side length; margins and offsets scale against it.
pub const BASE_CHART_SIZE: f64 = 600.0;

/// Smallest side length the responsive sizing policy allows.
pub const MIN_CHART_SIZE: f64 = 280.0;

/// Room left around the wheel for labels, at the base chart size.
pub const BASE_MARGIN: f64 = 80.0;

/// Label distance beyond the outer ring, at the base chart size.
pub const BASE_LABEL_OFFSET: f64 = 35.0;

/// Labels never sit closer than this to the outer ring.
pub const MIN_LABEL_OFFSET: f64 = 44.0;

/// Share of a label's width added to its radial offset.
pub const LABEL_WIDTH_PUSH: f64 = 0.1;

/// Horizontal keep-out band at the canvas edges for labels.
pub const LABEL_PADDING: f64 = 16.0;

/// Half-height of a label's hit box before inflation.
pub const LABEL_HALF_HEIGHT: f64 = 14.0;

/// Extra hit box margin around a label on every side.
pub const LABEL_HIT_EXTRA: f64 = 6.0;

/// Value numbers sit this far inside (or outside, for small values) the fill edge.
pub const VALUE_TEXT_INSET: f64 = 15.0;

/// Values below this are labelled outside their fill.
pub const SMALL_VALUE: u8 = 3;

/// Maximum overshoot of a value number past the outer ring.
pub const VALUE_TEXT_OVERSHOOT: f64 = 10.0;

/// Hover popovers float this far above their label anchor, in screen pixels.
pub const POPOVER_LIFT_PX: f64 = 8.0;

/// Hover anchors closer than this to the last report count as unchanged.
pub const HOVER_EPSILON: f64 = 0.5;

// ── Sketch ──────────────────────────────────────────────────────

/// Endpoint jitter of the primary pencil stroke.
pub const LINE_JITTER: f64 = 1.5;

/// Endpoint jitter of the secondary pencil stroke.
pub const LINE_ECHO_JITTER: f64 = 3.0;

/// Width factor of the secondary pencil stroke.
pub const LINE_ECHO_WIDTH: f64 = 0.7;

/// Opacity of the secondary pencil stroke.
pub const LINE_ECHO_ALPHA: f64 = 0.6;

/// Segments used to approximate a circle.
pub const CIRCLE_SEGMENTS: u32 = 40;

/// Per-vertex radial jitter of a circle.
pub const CIRCLE_JITTER: f64 = 2.0;

/// Dash pattern for grid rings.
pub const RING_DASH: [f64; 2] = [10.0, 10.0];

/// Spacing between scribble strokes.
pub const SCRIBBLE_DENSITY: f64 = 6.0;

/// Random offset range of each scribble stroke.
pub const SCRIBBLE_WOBBLE: f64 = 5.0;

/// Vertical drop across a scribble stroke, which gives the fill its slant.
pub const SCRIBBLE_SLANT: f64 = 20.0;

/// Opacity of the scribble fill.
pub const SCRIBBLE_ALPHA: f64 = 0.8;

/// Stroke width of the scribble fill.
pub const SCRIBBLE_WIDTH: f64 = 3.0;

/// Jittered segments in a wedge's outer arc.
pub const WEDGE_ARC_SEGMENTS: u32 = 10;

/// Radial jitter of a wedge's outer arc.
pub const WEDGE_ARC_JITTER: f64 = 2.0;

// ── Style ───────────────────────────────────────────────────────

pub const BACKGROUND_COLOR: &str = "#fdfbf7";
pub const RING_COLOR: &str = "#e5e7eb";
pub const BOUNDARY_COLOR: &str = "#374151";
pub const AXIS_COLOR: &str = "#9ca3af";
pub const OUTLINE_COLOR: &str = "#333";
pub const VALUE_TEXT_COLOR: &str = "#000";
pub const LABEL_TEXT_COLOR: &str = "#1f2937";

/// Default font family for numbers and labels.
pub const DEFAULT_FONT_FAMILY: &str = "\"Patrick Hand\"";
