//! Map viewport that follows the route.
//!
//! Every non-empty route update yields exactly one `Recenter` command; the map
//! widget that consumes it is not part of this crate.

use crate::models::location::GeoPoint;
use serde::Serialize;

/// Geographic center of the contiguous US, used before any route is known.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 39.8283,
    lon: -98.5795,
};

pub const RECENTER_PADDING: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = GeoBounds {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };

        Some(points.iter().skip(1).fold(init, |b, p| GeoBounds {
            south: b.south.min(p.lat),
            west: b.west.min(p.lon),
            north: b.north.max(p.lat),
            east: b.east.max(p.lon),
        }))
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ViewportCommand {
    Recenter { bounds: GeoBounds, padding: u32 },
}

#[derive(Debug, Default, Clone)]
pub struct RouteViewport {
    positions: Vec<GeoPoint>,
    bounds: Option<GeoBounds>,
}

impl RouteViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the route. Returns the recenter command for a non-empty route.
    pub fn update(&mut self, positions: Vec<GeoPoint>) -> Option<ViewportCommand> {
        self.bounds = GeoBounds::from_points(&positions);
        self.positions = positions;

        self.bounds.map(|bounds| ViewportCommand::Recenter {
            bounds,
            padding: RECENTER_PADDING,
        })
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        self.bounds
    }

    /// Initial map center: the middle point of the route.
    pub fn center(&self) -> GeoPoint {
        self.positions
            .get(self.positions.len() / 2)
            .copied()
            .unwrap_or(DEFAULT_CENTER)
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.positions.first().copied()
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.positions.last().copied()
    }

    pub fn positions(&self) -> &[GeoPoint] {
        &self.positions
    }
}
