//! Priority-driven search over the grid, plus the [find_path] entry point.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, info};
use smallvec::SmallVec;

use crate::error::{Result, SeekError};
use crate::grid::CostGrid;
use crate::request::SearchRequest;
use crate::response::SearchResponse;
use crate::{cost, heuristic};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

const G_INITIAL: i32 = 0;

const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// The cells a step from `pos` may land on, paired with whether the step is
/// diagonal. Cardinal neighbours come first; diagonal ones are included only
/// when `diagonal` movement is requested. No bounds filtering happens here.
pub(crate) fn neighbourhood(pos: Point, diagonal: bool) -> SmallVec<[(Point, bool); 8]> {
    let mut points: SmallVec<[(Point, bool); 8]> = CARDINAL_OFFSETS
        .iter()
        .map(|&(dx, dy)| (Point::new(pos.x + dx, pos.y + dy), false))
        .collect();
    if diagonal {
        points.extend(
            DIAGONAL_OFFSETS
                .iter()
                .map(|&(dx, dy)| (Point::new(pos.x + dx, pos.y + dy), true)),
        );
    }
    points
}

/// Transient search node. Identity for deduplication is the coordinate
/// alone; the parent coordinate and costs ride along for reconstruction.
#[derive(Clone, Copy, Debug)]
struct Node {
    pos: Point,
    parent: Option<Point>,
    g: i32,
    h: i32,
}

/// Heap entry ordering the open set. [BinaryHeap] is a max-heap, so the
/// comparison is inverted: lowest F first, then highest G (favouring deeper
/// nodes among equal estimates), then insertion order. The sequence number
/// makes the order total and the search deterministic.
struct OpenEntry {
    f: i32,
    seq: u64,
    node: Node,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.node.g == other.node.g && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then(self.node.g.cmp(&other.node.g))
            .then(other.seq.cmp(&self.seq))
    }
}

/// One search run: owns the open set and the visited trace, borrows the grid
/// and request. The trace doubles as the closed set and the reconstruction
/// log; coordinate membership of both sets is answered by O(1) lookups that
/// keep the accept/reject decisions of a full scan.
struct SearchEngine<'a> {
    grid: &'a CostGrid,
    request: &'a SearchRequest,
    open: BinaryHeap<OpenEntry>,
    queued: FxHashSet<Point>,
    best_g: FxIndexMap<Point, i32>,
    trace: Vec<Node>,
    seq: u64,
}

impl<'a> SearchEngine<'a> {
    fn new(grid: &'a CostGrid, request: &'a SearchRequest) -> SearchEngine<'a> {
        SearchEngine {
            grid,
            request,
            open: BinaryHeap::new(),
            queued: FxHashSet::default(),
            best_g: FxIndexMap::default(),
            trace: Vec::new(),
            seq: 0,
        }
    }

    fn run(mut self) -> SearchResponse {
        let seed = Node {
            pos: self.request.start(),
            parent: None,
            g: G_INITIAL,
            h: self.request.heuristic_scale(),
        };
        self.push(seed);
        while let Some(entry) = self.open.pop() {
            let node = entry.node;
            self.queued.remove(&node.pos);
            self.record_visit(node);
            if node.pos == self.request.end() {
                return SearchResponse::found(self.backtrack());
            }
            self.expand(node);
        }
        debug!(
            "open set exhausted after visiting {} nodes, no route to {}",
            self.trace.len(),
            self.request.end()
        );
        SearchResponse::not_found()
    }

    fn push(&mut self, node: Node) {
        self.queued.insert(node.pos);
        self.open.push(OpenEntry {
            f: node.g + node.h,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }

    /// Appends the node to the visited trace and folds its G into the
    /// per-coordinate minimum used by the revisit check.
    fn record_visit(&mut self, node: Node) {
        self.trace.push(node);
        match self.best_g.entry(node.pos) {
            Occupied(mut e) => {
                if node.g < *e.get() {
                    e.insert(node.g);
                }
            }
            Vacant(e) => {
                e.insert(node.g);
            }
        }
    }

    fn expand(&mut self, parent: Node) {
        // X component of the travel that brought us to the parent; the
        // reference the direction surcharge is judged against.
        let travel_dx = parent.parent.map_or(0, |pp| parent.pos.x - pp.x);
        let tie_break = if self.request.use_tie_breaker() {
            heuristic::tie_break(parent.pos, self.request)
        } else {
            0
        };
        for (pos, diagonal) in neighbourhood(parent.pos, self.request.allow_diagonals()) {
            if !self.grid.is_valid_point(pos.x, pos.y) || self.queued.contains(&pos) {
                continue;
            }
            let lessen = self.request.lessen_diagonals() && diagonal;
            let g = cost::accumulate(self.grid, pos, parent.g, lessen);
            if g == parent.g {
                // The cell contributed nothing: impassable.
                continue;
            }
            if let Some(&seen) = self.best_g.get(&pos) {
                // Visited coordinates are final unless the request reopens
                // them, and then only for a strictly cheaper route.
                if !self.request.reopen_closed_nodes() || seen <= g {
                    continue;
                }
            }
            let g = g + cost::direction_modifier(
                pos,
                parent.pos,
                self.request.lessen_direction_change(),
                travel_dx,
            );
            let h = heuristic::estimate(pos, self.request) + tie_break;
            self.push(Node {
                pos,
                parent: Some(parent.pos),
                g,
                h,
            });
        }
    }

    /// Walks the visited trace backwards from its terminal entry, keeping an
    /// entry only when its coordinate is the retained node's parent. Parents
    /// are always appended to the trace before their children, so the kept
    /// entries form the route and a single reversal orders it start to end.
    fn backtrack(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut retained: Option<&Node> = None;
        for node in self.trace.iter().rev() {
            let keep = match retained {
                None => true,
                Some(r) => r.parent == Some(node.pos),
            };
            if keep {
                path.push(node.pos);
                retained = Some(node);
            }
        }
        path.reverse();
        path
    }
}

/// Finds a lowest-cost route between the request's start and end cells.
///
/// Start and end must lie within the grid; anything else fails with
/// [SeekError::OutOfBounds] before the search begins. An unreachable end is
/// not an error: the search runs until its open set is exhausted and reports
/// [PathNotFound](crate::SearchOutcome::PathNotFound) — except that a target
/// which the grid's connected components already prove unreachable is
/// answered directly, skipping the doomed flood search. The call is
/// synchronous and runs to completion on the calling thread.
pub fn find_path(grid: &CostGrid, request: &SearchRequest) -> Result<SearchResponse> {
    for point in [request.start(), request.end()] {
        if !grid.is_valid_point(point.x, point.y) {
            return Err(SeekError::OutOfBounds {
                point,
                side: grid.side(),
            });
        }
    }
    if request.start() != request.end()
        && grid.components_current()
        && grid.unreachable(request.start(), request.end(), request.allow_diagonals())
    {
        info!(
            "{} is not reachable from {}, skipping search",
            request.end(),
            request.start()
        );
        return Ok(SearchResponse::not_found());
    }
    Ok(SearchEngine::new(grid, request).run())
}
