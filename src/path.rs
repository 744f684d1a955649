//! Shortest-path search over populated cells.
//!
//! This is A* with a uniform step cost of 1 and hex distance as the
//! heuristic. Distance never overestimates the true cost (each step covers
//! at most one unit of it), so the first time the goal comes off the
//! frontier its cost is optimal.

use crate::{
    coord::Coordinate,
    error::GridError,
    grid::{CoordinateMap, Grid},
};
use log::trace;
use std::{cmp, collections::BinaryHeap};

/// A frontier entry. Ordering is lowest-priority-first once wrapped in
/// [cmp::Reverse]; the insertion sequence breaks ties, so among equally
/// promising cells the one discovered first wins and results stay
/// deterministic.
#[derive(Debug, PartialEq, Eq)]
struct Entry {
    priority: u64,
    sequence: u64,
    coordinate: Coordinate,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        (self.priority, self.sequence).cmp(&(other.priority, other.sequence))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-heap of coordinates to expand, cheapest estimated total first.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<cmp::Reverse<Entry>>,
    sequence: u64,
}

impl Frontier {
    fn push(&mut self, coordinate: Coordinate, priority: u64) {
        self.heap.push(cmp::Reverse(Entry {
            priority,
            sequence: self.sequence,
            coordinate,
        }));
        self.sequence += 1;
    }

    fn pop(&mut self) -> Option<Coordinate> {
        self.heap.pop().map(|cmp::Reverse(entry)| entry.coordinate)
    }
}

/// Find a shortest path from `start` to `goal` stepping only between
/// populated adjacent cells. Both endpoints are included in the result. An
/// empty vector means no path exists, which covers unpopulated endpoints
/// too; only an invalid coordinate is an actual error.
pub(crate) fn shortest_path<T>(
    grid: &Grid<T>,
    start: Coordinate,
    goal: Coordinate,
) -> Result<Vec<Coordinate>, GridError> {
    if !grid.contains(start) || !grid.contains(goal) {
        return Ok(Vec::new());
    }

    let mut frontier = Frontier::default();
    let mut came_from: CoordinateMap<Option<Coordinate>> = CoordinateMap::default();
    let mut cost_so_far: CoordinateMap<u64> = CoordinateMap::default();
    frontier.push(start, 0);
    came_from.insert(start, None);
    cost_so_far.insert(start, 0);

    while let Some(current) = frontier.pop() {
        if current == goal {
            break;
        }
        // Every pushed coordinate has a recorded cost, but stale duplicate
        // entries can outlive a cheaper route
        let current_cost = match cost_so_far.get(&current) {
            Some(&cost) => cost,
            None => continue,
        };

        for next in grid.neighbor_coordinates(current, true)? {
            let next_cost = current_cost + 1;
            let improved = cost_so_far
                .get(&next)
                .map_or(true, |&cost| next_cost < cost);
            if improved {
                cost_so_far.insert(next, next_cost);
                came_from.insert(next, Some(current));
                frontier.push(next, next_cost + grid.distance(next, goal)?);
            }
        }
    }

    let path = reconstruct(&came_from, start, goal);
    trace!(
        "path {} -> {}: {} cells, {} expanded",
        start,
        goal,
        path.len(),
        came_from.len()
    );
    Ok(path)
}

/// Walk the predecessor links back from the goal and reverse them. If the
/// goal was never reached (or the walk doesn't close at the start) there is
/// no path.
fn reconstruct(
    came_from: &CoordinateMap<Option<Coordinate>>,
    start: Coordinate,
    goal: Coordinate,
) -> Vec<Coordinate> {
    let mut path = Vec::new();
    let mut current = goal;
    loop {
        match came_from.get(&current) {
            None => return Vec::new(),
            Some(None) => {
                path.push(current);
                break;
            }
            Some(Some(previous)) => {
                path.push(current);
                current = *previous;
            }
        }
    }
    path.reverse();
    if path.first() == Some(&start) {
        path
    } else {
        Vec::new()
    }
}
