//! H engine: estimated remaining cost and the optional straightness bias.

use grid_util::point::Point;

use crate::request::{Formula, SearchRequest};
use crate::TIEBREAK_FACTOR;

/// Estimated cost of the remaining route from `node` to the request's end
/// point, under the request's formula and heuristic scale.
pub(crate) fn estimate(node: Point, request: &SearchRequest) -> i32 {
    let dx = (node.x - request.end().x).abs();
    let dy = (node.y - request.end().y).abs();
    let scale = request.heuristic_scale();
    match request.formula() {
        Formula::Diagonal => {
            let diagonal = dx.min(dy);
            scale * 2 * diagonal + scale * ((dx + dy) - 2 * diagonal)
        }
        Formula::Euclidean => (f64::from(scale) * f64::from(dx * dx + dy * dy).sqrt()).round() as i32,
        Formula::Manhattan => scale * (dx + dy),
    }
}

/// Bias favouring routes collinear with the straight start-end line: the
/// cross product of parent-to-end against start-to-end, scaled down to act
/// only between otherwise equal-cost candidates. `parent` is the coordinate
/// the candidate node was reached from.
pub(crate) fn tie_break(parent: Point, request: &SearchRequest) -> i32 {
    let dx1 = parent.x - request.end().x;
    let dy1 = parent.y - request.end().y;
    let dx2 = request.start().x - request.end().x;
    let dy2 = request.start().y - request.end().y;
    (f64::from((dx1 * dy2 - dx2 * dy1).abs()) * TIEBREAK_FACTOR) as i32
}
