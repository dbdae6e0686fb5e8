use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;
use ungraph::{algorithm::*, graph::*};

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("1000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("5000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, matrix, edge_list);
criterion_main!(benches);

fn matrix(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    cases(c, "matrix", || MatrixGraph::new(vertex_size));
}

fn edge_list(c: &mut Criterion) {
    cases(c, "edge_list", EdgeListGraph::new);
}

fn cases<G, F>(c: &mut Criterion, prefix: &str, new: F)
where
    G: Graph<Vertex = usize> + Clone,
    F: Fn() -> G,
{
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function(&(prefix.to_string() + "/add_vertex"), |b| {
        b.iter(|| add_vertices(new(), vertex_size))
    });

    let g = add_random_edges(add_vertices(new(), vertex_size), edge_size);
    let edges: Vec<_> = g
        .edges()
        .map(|e| {
            let (a, b) = e.endpoints();
            (*a, *b, e.weight())
        })
        .collect();
    c.bench_function(&(prefix.to_string() + "/are_adjacent"), |b| {
        b.iter(|| are_adjacent(&g, vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/neighbors"), |b| {
        b.iter(|| neighbors(&g, vertex_size))
    });
    c.bench_function(&(prefix.to_string() + "/remove_and_add_edges"), |b| {
        let mut g = g.clone();
        b.iter(|| remove_and_add_edges(&mut g, &edges))
    });
    c.bench_function(&(prefix.to_string() + "/dfs"), |b| {
        b.iter(|| black_box(g.dfs(&0).unwrap().count()))
    });
    c.bench_function(&(prefix.to_string() + "/kruskal"), |b| {
        b.iter(|| black_box(g.minimum_spanning_forest().total_weight()))
    });
    c.bench_function(&(prefix.to_string() + "/dijkstra"), |b| {
        b.iter(|| black_box(g.shortest_paths(&0).unwrap().distances().len()))
    });
}

fn add_vertices<G>(mut g: G, vertex_size: usize) -> G
where
    G: GrowableGraph<Vertex = usize>,
{
    for v in 0..vertex_size {
        let _ = g.add_vertex(v);
    }
    g
}

/// Self loops and duplicates are drawn too, and simply rejected.
fn add_random_edges<G>(mut g: G, edge_size: usize) -> G
where
    G: GrowableGraph<Vertex = usize>,
{
    let n = g.vertex_size();
    let mut rng = rand::thread_rng();
    for _ in 0..edge_size {
        let v0 = rng.gen::<usize>() % n;
        let v1 = rng.gen::<usize>() % n;
        let w = rng.gen_range(0..100);
        let _ = g.add_edge(&v0, &v1, w);
    }
    g
}

fn are_adjacent<G>(g: &G, vertex_size: usize)
where
    G: QueryableGraph<Vertex = usize>,
{
    let v0 = rand::thread_rng().gen::<usize>() % vertex_size;
    let v1 = rand::thread_rng().gen::<usize>() % vertex_size;
    let _ = black_box(g.are_adjacent(&v0, &v1));
}

fn neighbors<G>(g: &G, vertex_size: usize)
where
    G: QueryableGraph<Vertex = usize>,
{
    let v = rand::thread_rng().gen::<usize>() % vertex_size;
    if let Ok(it) = g.neighbors(&v) {
        for x in it {
            black_box(x);
        }
    }
}

fn remove_and_add_edges<G>(g: &mut G, edges: &[(usize, usize, Weight)])
where
    G: Graph<Vertex = usize>,
{
    for (a, b, w) in edges {
        let _ = black_box(g.remove_edge(a, b));
        let _ = black_box(g.add_edge(a, b, *w));
    }
}
