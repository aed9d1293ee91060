use super::{GridRect, LANE_COUNT, SLOTS_PER_DAY};

/// Linear mapping from slot/lane space onto a caller-chosen drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridScale {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Grid area of a canvas once the margins are removed.
    pub fn with_margins(
        canvas_width: f64,
        canvas_height: f64,
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Self {
        Self::new(
            left,
            top,
            (canvas_width - left - right).max(0.0),
            (canvas_height - top - bottom).max(0.0),
        )
    }

    pub fn slot_width(&self) -> f64 {
        self.width / SLOTS_PER_DAY as f64
    }

    pub fn lane_height(&self) -> f64 {
        self.height / LANE_COUNT as f64
    }

    /// Fractional slots are allowed.
    pub fn x_for_slot(&self, slot: f64) -> f64 {
        self.origin_x + slot * self.slot_width()
    }

    pub fn y_for_lane(&self, lane: usize) -> f64 {
        self.origin_y + lane as f64 * self.lane_height()
    }

    pub fn rect(&self, r: &GridRect) -> ScaledRect {
        ScaledRect {
            x: self.x_for_slot(r.start_slot as f64),
            y: self.y_for_lane(r.lane),
            width: r.width() as f64 * self.slot_width(),
            height: self.lane_height(),
        }
    }
}
