//! Vertical "now" marker for a scrollable timeline canvas.
//!
//! The canvas maps the time window `[canvas_time_start, canvas_time_end)`
//! onto `canvas_width` pixels. When the current time falls inside that
//! window, a line is drawn from just below the header to the bottom of the
//! canvas; otherwise the space is still allocated but left empty.

use std::time::Duration;

use egui::Stroke;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use crate::error::ConfigError;
use crate::theme::WidgetPalette;

/// Canvas geometry the marker is positioned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TodayLineProps {
    /// Start of the visible time window (ms)
    pub canvas_time_start: i64,
    /// End of the visible time window (ms, exclusive)
    pub canvas_time_end: i64,
    /// Width of the canvas in pixels
    pub canvas_width: f32,
    /// Height of the header band above the rows
    pub header_height: f32,
    /// Full canvas height, header included
    pub height: f32,
}

impl TodayLineProps {
    /// Rejects empty or reversed windows and impossible sizes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_time_end <= self.canvas_time_start {
            return Err(ConfigError::EmptyTimeWindow {
                start: self.canvas_time_start,
                end: self.canvas_time_end,
            });
        }
        if self.canvas_time_end.checked_sub(self.canvas_time_start).is_none() {
            return Err(ConfigError::TimeWindowTooWide {
                start: self.canvas_time_start,
                end: self.canvas_time_end,
            });
        }
        if !(self.canvas_width > 0.0) {
            return Err(ConfigError::InvalidCanvasWidth(self.canvas_width));
        }
        if !(self.height >= self.header_height) || self.header_height < 0.0 {
            return Err(ConfigError::HeaderTallerThanCanvas {
                height: self.height,
                header_height: self.header_height,
            });
        }
        Ok(())
    }

    /// Whether `time` lies in the half-open window.
    pub fn contains(&self, time: i64) -> bool {
        time >= self.canvas_time_start && time < self.canvas_time_end
    }

    /// Pixels per millisecond.
    pub fn ratio(&self) -> f64 {
        self.canvas_width as f64 / span_ms(self.canvas_time_start, self.canvas_time_end)
    }
}

/// `to - from` computed wide so any pair of timestamps fits.
fn span_ms(from: i64, to: i64) -> f64 {
    (to as i128 - from as i128) as f64
}

/// Where the marker goes, relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    pub left: f32,
    pub top: f32,
    pub height: f32,
}

/// Places the marker for `now`, or `None` when `now` is off-canvas.
pub fn marker_geometry(props: &TodayLineProps, now: i64) -> Option<MarkerGeometry> {
    if !props.contains(now) {
        return None;
    }
    let left = (span_ms(props.canvas_time_start, now) * props.ratio()).round() as f32;
    Some(MarkerGeometry {
        left,
        top: props.header_height,
        height: props.height - props.header_height,
    })
}

/// The marker widget.
///
/// Without [`TodayLine::with_tick`] the marker only moves when the host
/// repaints for its own reasons (scrolling, zooming).
#[derive(Debug, Clone)]
pub struct TodayLine<C: Clock = SystemClock> {
    props: TodayLineProps,
    clock: C,
    tick: Option<Duration>,
    stroke: Option<Stroke>,
}

impl TodayLine<SystemClock> {
    pub fn new(props: TodayLineProps) -> Result<Self, ConfigError> {
        Self::with_clock(props, SystemClock)
    }
}

impl<C: Clock> TodayLine<C> {
    pub fn with_clock(props: TodayLineProps, clock: C) -> Result<Self, ConfigError> {
        props.validate()?;
        Ok(Self {
            props,
            clock,
            tick: None,
            stroke: None,
        })
    }

    /// Repaints every `interval` so the marker follows the clock.
    pub fn with_tick(mut self, interval: Duration) -> Self {
        self.tick = Some(interval);
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn props(&self) -> &TodayLineProps {
        &self.props
    }

    /// Geometry for the current clock reading.
    pub fn geometry(&self) -> Option<MarkerGeometry> {
        marker_geometry(&self.props, self.clock.now_ms())
    }

    /// Paints the marker into `canvas_rect`, whose top-left corner is the
    /// canvas origin, and schedules the next tick if one is configured.
    /// Returns what was painted.
    pub fn paint(&self, painter: &egui::Painter, canvas_rect: egui::Rect) -> Option<MarkerGeometry> {
        if let Some(interval) = self.tick {
            painter.ctx().request_repaint_after(interval);
        }
        let geometry = self.geometry()?;
        let x = canvas_rect.left() + geometry.left;
        let top = canvas_rect.top() + geometry.top;
        painter.line_segment(
            [egui::pos2(x, top), egui::pos2(x, top + geometry.height)],
            self.stroke.unwrap_or_else(|| default_stroke(painter.ctx())),
        );
        Some(geometry)
    }
}

impl<C: Clock> egui::Widget for TodayLine<C> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(self.props.canvas_width, self.props.height);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        self.paint(ui.painter(), rect);
        response
    }
}

fn default_stroke(ctx: &egui::Context) -> Stroke {
    Stroke::new(2.0, WidgetPalette::for_visuals(&ctx.style().visuals).today_line)
}
