use rand::Rng;
use xyztree::{PointSet, Tree};

fn random_points(count: usize) -> PointSet {
    let mut rng = rand::thread_rng();
    let mut points = PointSet::new();
    for i in 0..count {
        let point = [
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        ];
        points.insert(format!("pt{}", i), point);
    }
    points
}

#[test]
fn test_json_round_trip_random_trees() {
    for count in [1, 2, 10, 100] {
        let tree = Tree::build(&random_points(count)).unwrap();
        for compact in [true, false] {
            let json = tree.to_json(compact).unwrap();
            let restored = Tree::from_json(&json).unwrap();
            assert_eq!(restored, tree, "round trip changed a {}-node tree", count);
        }
    }
}

#[test]
fn test_round_trip_preserves_floats_exactly() {
    // Coordinates without a finite binary expansion must come back
    // bit-identical, not merely within a parse tolerance
    let points: PointSet = [
        ("a", [0.1, 0.2, 0.3]),
        ("b", [-3.826721535318152, 1e-300, 2.0 / 3.0]),
        ("c", [f64::MIN_POSITIVE, 99.9, -0.7]),
    ]
    .iter()
    .map(|(k, p)| (k.to_string(), *p))
    .collect();
    let tree = Tree::build(&points).unwrap();

    for compact in [true, false] {
        let json = tree.to_json(compact).unwrap();
        let restored = Tree::from_json(&json).unwrap();
        for (original, roundtripped) in tree.nodes().iter().zip(restored.nodes()) {
            for k in 0..3 {
                assert_eq!(
                    original.point[k].to_bits(),
                    roundtripped.point[k].to_bits(),
                    "coordinate {} of '{}' changed across the round trip",
                    k, original.key
                );
            }
        }
        assert_eq!(restored, tree);
    }
}

#[test]
fn test_file_round_trip() {
    let tree = Tree::build(&random_points(25)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.json");
    tree.export(&path, false).unwrap();

    let restored = Tree::import(&path).unwrap();
    assert_eq!(restored, tree);

    // A restored tree answers queries just like the original
    let query = [0.5, -0.5, 3.0];
    let a = tree.nearest_by_name(&query, "Manhattan").unwrap();
    let b = restored.nearest_by_name(&query, "Manhattan").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_import_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.json");
    assert!(matches!(Tree::import(&path), Err(xyztree::Error::Io(_))));
}
