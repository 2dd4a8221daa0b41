use std::collections::HashMap;

use gridgraph_core::{
    Direction, Graph, GraphBuilder, Grid, Point, SquareLatticeGraph, VertexId, parse_grid,
    parse_lattice,
};
use gridgraph_paths::{BreadthFirst, DepthFirst, Dijkstra, UNREACHABLE, path_cost};

const MAZE: &str = "\
S.#.....
.##.###.
....#..E";

/// Graph over the open cells of `grid`, joined to their open 4-neighbors.
fn open_cells(grid: &Grid<char>) -> (Graph<Point>, HashMap<Point, VertexId>) {
    let mut b = GraphBuilder::new();
    let mut ids = HashMap::new();
    for (p, v) in grid.iter_points() {
        if *v.value() != '#' {
            ids.insert(p, b.vertex(p));
        }
    }
    for (p, _) in grid.iter_points() {
        let Some(&id) = ids.get(&p) else { continue };
        for dir in [Direction::Right, Direction::Down] {
            if let Some(&n) = ids.get(&p.shift(dir)) {
                b.edge(id, n).unwrap();
            }
        }
    }
    (b.build(), ids)
}

fn cells(g: &SquareLatticeGraph<char>, path: &[VertexId]) -> String {
    path.iter()
        .map(|&id| *g.vertex(id).unwrap().value())
        .collect()
}

#[test]
fn bfs_on_open_lattice_ignores_walls() {
    let g = parse_lattice(MAZE, false, |c| c).unwrap();
    let s = g.find(|c| *c == 'S').unwrap().id();
    let e = g.find(|c| *c == 'E').unwrap().id();

    let mut bfs = BreadthFirst::with_start(&g, s);
    let path = bfs.path(e);
    assert_eq!(path.len() as i32 - 1, g.distance(s, e));
    assert_eq!(bfs.distance_at(e), 9);
}

#[test]
fn dijkstra_walks_around_expensive_walls() {
    let mut b = SquareLatticeGraph::builder();
    for line in MAZE.lines() {
        b.row(line.chars()).unwrap();
    }
    let g = b
        .build_weighted(|_, to| if *to.value() == '#' { 100 } else { 1 })
        .unwrap();
    let e = g.find(|c| *c == 'E').unwrap().id();

    let mut dj = Dijkstra::new(&g);
    let path = dj.path(e);
    assert_eq!(cells(&g, &path), "S............E");
    assert_eq!(dj.cost_at(e), 13);
    assert_eq!(path_cost(&g, &path), 13);

    let turns: Vec<Direction> = path.windows(2).map(|w| g.direction(w[0], w[1])).collect();
    assert_eq!(turns[0], Direction::Down);
    assert_eq!(turns[turns.len() - 1], Direction::Down);
}

#[test]
fn open_cell_graph_agrees_with_weighted_lattice() {
    let grid = parse_grid(MAZE, |c| c).unwrap();
    let (g, ids) = open_cells(&grid);
    assert_eq!(g.size(), 17);

    let e = ids[&Point::new(7, 2)];
    let mut bfs = BreadthFirst::new(&g);
    let path = bfs.path(e);
    assert_eq!(path.len(), 14);
    assert_eq!(g.vertex(path[6]).map(|v| *v.value()), Some(Point::new(3, 1)));

    let mut dj = Dijkstra::new(&g);
    assert_eq!(dj.path(e), path);
    assert_eq!(dj.cost_at(e), 13);

    let mut dfs = DepthFirst::new(&g);
    let found = dfs.path(e);
    assert_eq!(found.first(), path.first());
    assert_eq!(found.last(), Some(&e));
    assert!(found.windows(2).all(|w| g.adjacent(w[0], w[1])));
    assert_eq!(dfs.reachable().len(), 17);
    assert_eq!(dfs.components().len(), 1);
}

#[test]
fn sealed_rooms_are_separate_components() {
    let grid = parse_grid("..#.\n..#.\n###.", |c| c).unwrap();
    let (g, ids) = open_cells(&grid);
    let mut dfs = DepthFirst::new(&g);
    let sizes: Vec<usize> = dfs.components().iter().map(Vec::len).collect();
    assert_eq!(sizes, [4, 3]);

    let inside = ids[&Point::new(1, 1)];
    let outside = ids[&Point::new(3, 2)];
    let mut bfs = BreadthFirst::new(&g);
    assert!(bfs.path(outside).is_empty());
    assert_eq!(bfs.distance_at(outside), UNREACHABLE);
    assert_eq!(bfs.path(inside).len(), 3);

    let mut dj = Dijkstra::new(&g);
    assert!(dj.path(outside).is_empty());
    let costs: Vec<i64> = dj.map(UNREACHABLE).iter().map(|n| n.cost).collect();
    assert_eq!(costs, [0, 1, 1, 2]);
}

#[test]
fn stacked_mazes_parse_independently() {
    let text = format!("{MAZE}\n\nab\ncd\n");
    let grids = gridgraph_core::parse_grids(&text, |c| c).unwrap();
    assert_eq!(grids.len(), 2);
    assert_eq!((grids[0].width(), grids[0].height()), (8, 3));

    let small = &grids[1];
    let d = small.find(|c| *c == 'd').unwrap().id();
    let mut bfs = BreadthFirst::new(small);
    assert_eq!(bfs.path(d).len(), 3);
    assert!(BreadthFirst::new(&grids[0]).path(d).is_empty());
}
