use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use hampath::{solve, Graph, Method, Outcome, MAX_DP_VERTICES};

fn random_graph(rng: &mut ChaCha8Rng, n: usize, density: f64) -> Graph {
    let mut g = Graph::with_vertices(n).unwrap();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(density) {
                g.add_edge(u, v);
            }
        }
    }
    g
}

#[test]
fn all_strategies_agree_on_random_graphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x4a11);
    for n in 4..=10 {
        for &density in &[0.2, 0.4, 0.7] {
            let g = random_graph(&mut rng, n, density);
            let verdicts: Vec<bool> = Method::ALL
                .into_iter()
                .map(|method| solve(method, &g).exists())
                .collect();
            assert!(
                verdicts.windows(2).all(|w| w[0] == w[1]),
                "disagreement on n={n} density={density}: {verdicts:?}"
            );
        }
    }
}

#[test]
fn trivial_single_vertex_has_a_path() {
    let g = Graph::with_vertices(1).unwrap();
    for method in Method::ALL {
        assert_eq!(solve(method, &g).outcome, Outcome::Found, "{method}");
    }
}

#[test]
fn complete_graphs_always_have_a_path() {
    for n in 1..=8 {
        let mut g = Graph::with_vertices(n).unwrap();
        for u in 0..n {
            for v in (u + 1)..n {
                g.add_edge(u, v);
            }
        }
        for method in Method::ALL {
            assert!(solve(method, &g).exists(), "{method} on K_{n}");
        }
    }
}

#[test]
fn dp_is_skipped_past_the_size_limit() {
    // A 23-vertex cycle: Hamiltonian, but above the subset-table bound.
    let n = MAX_DP_VERTICES + 1;
    let edges: Vec<(usize, usize)> = (0..n).map(|u| (u, (u + 1) % n)).collect();
    let g = Graph::from_edges(n, &edges).unwrap();

    let record = solve(Method::BitmaskDp, &g);
    assert_eq!(record.outcome, Outcome::Skipped);
    assert_eq!(record.steps, 0);
    assert_eq!(record.elapsed_ms, 0.0);
    assert_eq!(record.csv_line(), "Prog_Dinamica,NAO,0.000,0,0");

    // The backtracking strategies still reach a definite verdict.
    assert_eq!(solve(Method::Backtracking, &g).outcome, Outcome::Found);
    assert_eq!(solve(Method::OrderedBacktracking, &g).outcome, Outcome::Found);
}

#[test]
fn reruns_reproduce_verdict_and_steps() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xbeef);
    let g = random_graph(&mut rng, 9, 0.35);
    for method in Method::ALL {
        let first = solve(method, &g);
        let second = solve(method, &g);
        assert_eq!(first.outcome, second.outcome, "{method}");
        assert_eq!(first.steps, second.steps, "{method}");
    }
}
