//! Symmetry classification against real enumeration output.

use regina::prelude::*;

/// Known fundamental (symmetry-reduced) solution counts.
const FUNDAMENTAL: [(usize, usize); 6] = [(4, 1), (5, 2), (6, 1), (7, 6), (8, 12), (9, 46)];

#[test]
fn fundamental_counts_match_known_values() {
    for (n, expected) in FUNDAMENTAL {
        let solutions = solve_all(n, &SearchBudget::unbounded()).solutions;
        let classes = analyze_symmetry(&solutions);
        assert_eq!(classes.len(), expected, "n = {n}");
    }
}

#[test]
fn eight_queens_orbit_distribution() {
    let solutions = solve_all(8, &SearchBudget::unbounded()).solutions;
    let classes = analyze_symmetry(&solutions);
    assert_eq!(classes.len(), 12);

    // One class is invariant under the half turn (orbit 4); the other
    // eleven have the full orbit of 8. Together they cover all 92.
    let mut orbit_4 = 0;
    let mut orbit_8 = 0;
    let mut covered = 0;
    for (_, &size) in classes.iter() {
        covered += size;
        match size {
            4 => orbit_4 += 1,
            8 => orbit_8 += 1,
            other => panic!("unexpected orbit size {other} for 8-queens"),
        }
    }
    assert_eq!(orbit_4, 1);
    assert_eq!(orbit_8, 11);
    assert_eq!(covered, 92);
}

#[test]
fn classes_partition_the_solution_set() {
    for n in [5, 6, 7] {
        let solutions = solve_all(n, &SearchBudget::unbounded()).solutions;
        let classes = analyze_symmetry(&solutions);
        let covered: usize = classes.values().sum();
        assert_eq!(covered, solutions.len(), "n = {n}");
    }
}

#[test]
fn representatives_are_members_of_their_own_class() {
    let solutions = solve_all(7, &SearchBudget::unbounded()).solutions;
    for representative in analyze_symmetry(&solutions).keys() {
        assert!(validate_solution(representative));
        assert!(
            solutions.contains(representative),
            "canonical representative must itself be a solution"
        );
    }
}
