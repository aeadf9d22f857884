//! Geometric quality checks for shell elements
//!
//! Only an inverted (or collapsed) element is invalid. Aspect ratio and
//! corner angle problems are reported as warnings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::elements::ShellElement;
use crate::math::{Jacobian, Vec3, GAUSS_POINTS_2X2};
use crate::options::ShellOptions;

/// Edges shorter than this fraction of the longest edge are collapsed corners
const ZERO_EDGE_RATIO: f64 = 1e-9;

/// One finding of the quality validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QualityWarning {
    /// No element normal: the nodes are colinear
    CollapsedNormal,
    /// det J <= 0 (or below tolerance) at these Gauss points
    NonPositiveJacobian { gauss_points: Vec<usize>, min_det: f64 },
    /// Longest over shortest edge reached the limit
    AspectRatio { ratio: f64, limit: f64 },
    /// Interior angle at a corner (0-based node index) outside the accepted range
    CornerAngle { corner: usize, angle: f64, min: f64, max: f64 },
}

impl fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityWarning::CollapsedNormal => {
                write!(f, "colinear nodes: element normal and Jacobian are undefined")
            }
            QualityWarning::NonPositiveJacobian { gauss_points, min_det } => write!(
                f,
                "non-positive Jacobian determinant (min {:.3e}) at Gauss points {:?}: \
                 element is inverted or collapsed",
                min_det, gauss_points
            ),
            QualityWarning::AspectRatio { ratio, limit } => {
                write!(f, "aspect ratio {:.2} at or above limit {:.2}", ratio, limit)
            }
            QualityWarning::CornerAngle { corner, angle, min, max } => write!(
                f,
                "corner angle {:.1}° at node {} outside [{:.0}°, {:.0}°]",
                angle,
                corner + 1,
                min,
                max
            ),
        }
    }
}

/// Outcome of [`validate_element`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub is_valid: bool,
    pub warnings: Vec<QualityWarning>,
}

impl QualityReport {
    fn valid() -> Self {
        Self {
            is_valid: true,
            warnings: Vec::new(),
        }
    }

    fn invalid(warning: QualityWarning) -> Self {
        Self {
            is_valid: false,
            warnings: vec![warning],
        }
    }

    /// Warning texts, for reporting
    pub fn messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

/// Check an element before trusting its stiffness
///
/// 1. det J > 0 at all four Gauss points, otherwise invalid (stops here)
/// 2. longest/shortest edge below `max_aspect_ratio`
/// 3. every corner angle within [`min_corner_angle`, `max_corner_angle`]
pub fn validate_element(element: &ShellElement, options: &ShellOptions) -> QualityReport {
    let frame = element.local_frame();
    if frame.is_degenerate() {
        log::warn!("Element quality: {}", QualityWarning::CollapsedNormal);
        return QualityReport::invalid(QualityWarning::CollapsedNormal);
    }

    let local = frame.local_corners(&element.corners());
    let mut bad_points = Vec::new();
    let mut min_det = f64::INFINITY;
    for (gp, &(xi, eta)) in GAUSS_POINTS_2X2.iter().enumerate() {
        let jac = Jacobian::at(&local, xi, eta, options.singular_tolerance);
        min_det = min_det.min(jac.det);
        if jac.is_singular() || jac.det <= 0.0 {
            bad_points.push(gp);
        }
    }
    if !bad_points.is_empty() {
        let w = QualityWarning::NonPositiveJacobian {
            gauss_points: bad_points,
            min_det,
        };
        log::warn!("Element quality: {}", w);
        return QualityReport::invalid(w);
    }

    let points: Vec<Vec3> = element.nodes().iter().map(|n| n.position.to_vector()).collect();
    let mut report = QualityReport::valid();

    if let Some(ratio) = aspect_ratio(&points) {
        if ratio >= options.max_aspect_ratio {
            report.warnings.push(QualityWarning::AspectRatio {
                ratio,
                limit: options.max_aspect_ratio,
            });
        }
    }

    for (corner, angle) in corner_angles(&points).into_iter().enumerate() {
        if angle < options.min_corner_angle || angle > options.max_corner_angle {
            report.warnings.push(QualityWarning::CornerAngle {
                corner,
                angle,
                min: options.min_corner_angle,
                max: options.max_corner_angle,
            });
        }
    }

    for w in &report.warnings {
        log::warn!("Element quality: {}", w);
    }
    report
}

/// Longest over shortest edge, ignoring zero-length edges
fn aspect_ratio(points: &[Vec3]) -> Option<f64> {
    let n = points.len();
    let lengths: Vec<f64> = (0..n).map(|i| (points[(i + 1) % n] - points[i]).norm()).collect();
    let longest = lengths.iter().copied().fold(0.0_f64, f64::max);
    let shortest = lengths
        .iter()
        .copied()
        .filter(|&l| l > ZERO_EDGE_RATIO * longest)
        .fold(f64::INFINITY, f64::min);
    (shortest.is_finite() && shortest > 0.0).then(|| longest / shortest)
}

/// Interior angle at each node in degrees
fn corner_angles(points: &[Vec3]) -> Vec<f64> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let to_prev = points[(i + n - 1) % n] - points[i];
            let to_next = points[(i + 1) % n] - points[i];
            let denom = to_prev.norm() * to_next.norm();
            if denom == 0.0 {
                return 0.0;
            }
            (to_prev.dot(&to_next) / denom).clamp(-1.0, 1.0).acos().to_degrees()
        })
        .collect()
}
