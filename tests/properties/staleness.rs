//! Property tests for staleness over random include graphs, checked against
//! a straightforward breadth-first reference.

use std::collections::{BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use proptest::prelude::*;

use shaderbake::domain::services::{DependencyResolver, StalenessChecker};
use shaderbake::infrastructure::MemoryFs;
use shaderbake::Language;

#[derive(Debug, Clone)]
struct Graph {
    /// edges[i] holds the files that file i includes
    edges: Vec<BTreeSet<usize>>,
    mtimes: Vec<u64>,
    output_mtime: u64,
}

fn graph() -> impl Strategy<Value = Graph> {
    (2usize..8).prop_flat_map(|n| {
        (
            proptest::collection::vec(proptest::collection::btree_set(0..n, 0..n), n),
            proptest::collection::vec(0u64..20, n),
            0u64..20,
        )
            .prop_map(|(edges, mtimes, output_mtime)| Graph {
                edges,
                mtimes,
                output_mtime,
            })
    })
}

fn at(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(1_000 + secs)
}

fn file(i: usize) -> PathBuf {
    PathBuf::from(format!("/g/f{i}.glsl"))
}

fn materialize(graph: &Graph) -> MemoryFs {
    let fs = MemoryFs::new();
    for (i, deps) in graph.edges.iter().enumerate() {
        let content: String = deps.iter().map(|d| format!("#include \"f{d}.glsl\"\n")).collect();
        fs.add_file_at(file(i), content, at(graph.mtimes[i]));
    }
    fs.add_file_at("/out/f0.spv", "SPIRV", at(graph.output_mtime));
    fs
}

fn reachable(graph: &Graph) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([0]);
    let mut queue = VecDeque::from([0]);
    while let Some(node) = queue.pop_front() {
        for &next in &graph.edges[node] {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: stale exactly when something reachable is newer than the output,
    /// and the walk terminates on cycles.
    #[test]
    fn property_staleness_matches_reference(graph in graph()) {
        let fs = materialize(&graph);
        let checker = StalenessChecker::new(DependencyResolver::new(&fs, Language::Glsl.default_directive()));

        let reach = reachable(&graph);
        let expected = reach.iter().any(|&i| graph.mtimes[i] > graph.output_mtime);

        let stale = checker.is_stale(&file(0), Path::new("/out/f0.spv")).unwrap();
        prop_assert_eq!(stale, expected);

        let closure = checker.dependency_closure(&file(0)).unwrap();
        let expected_closure: Vec<PathBuf> = reach.iter().filter(|&&i| i != 0).map(|&i| file(i)).collect();
        prop_assert_eq!(closure, expected_closure);
    }
}
