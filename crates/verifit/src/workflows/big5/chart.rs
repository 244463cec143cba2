//! Pentagon (radar) chart geometry for the five normalized domain scores.
//!
//! This is a pure deterministic transform: the service hands the layout to
//! web clients, which only have to draw the precomputed points. Five axis
//! rays sit at 72-degree intervals starting at the vertical; reference rings
//! sit at 20% steps of the outer radius.

use serde::{Deserialize, Serialize};

use super::domain::TraitDomain;

const AXIS_COUNT: usize = 5;
const AXIS_STEP_DEGREES: f64 = 360.0 / AXIS_COUNT as f64;
const FIRST_AXIS_DEGREES: f64 = -90.0;
const RING_FRACTIONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
// Anchor offsets as fractions of the outer radius.
const AXIS_LABEL_OFFSET: f64 = 0.12;
const SCORE_LABEL_OFFSET: f64 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One axis ray with its label anchor placed outside the outer ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisArm {
    pub domain: TraitDomain,
    pub label: &'static str,
    pub color: &'static str,
    pub end: Point,
    pub label_anchor: Point,
}

/// A plotted domain score with an anchor for its numeric label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMarker {
    pub domain: TraitDomain,
    pub score: u8,
    pub point: Point,
    pub label_anchor: Point,
}

/// Complete layout handed to chart consumers. `polygon` is `None` when
/// fewer than five domain scores were supplied; axes and rings still render
/// so the degraded display keeps its frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub center: Point,
    pub max_radius: f64,
    pub axes: Vec<AxisArm>,
    pub rings: Vec<Vec<Point>>,
    pub polygon: Option<Vec<ScoreMarker>>,
}

impl RadarChart {
    pub fn layout(scores: &[(TraitDomain, u8)], center: Point, max_radius: f64) -> RadarChart {
        let axes = TraitDomain::ALL
            .iter()
            .enumerate()
            .map(|(index, domain)| AxisArm {
                domain: *domain,
                label: domain.name(),
                color: domain.display_color(),
                end: project(center, axis_angle(index), max_radius),
                label_anchor: project(
                    center,
                    axis_angle(index),
                    max_radius * (1.0 + AXIS_LABEL_OFFSET),
                ),
            })
            .collect();

        let rings = RING_FRACTIONS
            .iter()
            .map(|fraction| {
                (0..AXIS_COUNT)
                    .map(|index| project(center, axis_angle(index), max_radius * fraction))
                    .collect()
            })
            .collect();

        let polygon = data_polygon(scores, center, max_radius);

        RadarChart {
            center,
            max_radius,
            axes,
            rings,
            polygon,
        }
    }
}

fn data_polygon(
    scores: &[(TraitDomain, u8)],
    center: Point,
    max_radius: f64,
) -> Option<Vec<ScoreMarker>> {
    // One vertex per canonical axis; any missing domain degrades the whole
    // polygon rather than drawing a misleading partial shape.
    let markers: Vec<ScoreMarker> = TraitDomain::ALL
        .iter()
        .enumerate()
        .filter_map(|(index, domain)| {
            let score = scores
                .iter()
                .find(|(candidate, _)| candidate == domain)
                .map(|(_, score)| *score)?;

            let radius = max_radius * f64::from(score) / 100.0;
            Some(ScoreMarker {
                domain: *domain,
                score,
                point: project(center, axis_angle(index), radius),
                label_anchor: project(
                    center,
                    axis_angle(index),
                    radius + max_radius * SCORE_LABEL_OFFSET,
                ),
            })
        })
        .collect();

    (markers.len() == AXIS_COUNT).then_some(markers)
}

fn axis_angle(index: usize) -> f64 {
    (FIRST_AXIS_DEGREES + AXIS_STEP_DEGREES * index as f64).to_radians()
}

fn project(center: Point, angle: f64, radius: f64) -> Point {
    Point {
        x: center.x + radius * angle.cos(),
        y: center.y + radius * angle.sin(),
    }
}
