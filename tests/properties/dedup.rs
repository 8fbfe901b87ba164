//! Property tests for detection deduplication and monorepo classification.

use std::path::Path;

use proptest::prelude::*;

use agentic_repo::{deduplicate, is_monorepo, Detection, StackKind};

const ROOT: &str = "/repo";

fn stack() -> impl Strategy<Value = StackKind> {
    proptest::sample::select(StackKind::PRIORITY.to_vec())
}

/// Optional root detection plus detections in distinct child directories
fn detections() -> impl Strategy<Value = (Option<StackKind>, Vec<StackKind>)> {
    (
        proptest::option::of(stack()),
        proptest::collection::vec(stack(), 0..6),
    )
}

fn build(root: Option<StackKind>, children: &[StackKind]) -> Vec<Detection> {
    let mut out = Vec::new();
    if let Some(stack) = root {
        out.push(Detection::new(ROOT, stack));
    }
    for (i, stack) in children.iter().enumerate() {
        out.push(Detection::new(format!("{}/svc{}", ROOT, i), *stack));
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: non-root detections survive unless they all match root.
    #[test]
    fn property_children_kept_unless_uniform(
        (root, children) in detections()
    ) {
        let input = build(root, &children);
        let out = deduplicate(input.clone(), Path::new(ROOT)).into_vec();

        let uniform = root.is_some()
            && input.len() > 1
            && children.iter().all(|s| Some(*s) == root);

        if uniform {
            prop_assert_eq!(out.len(), 1);
            prop_assert_eq!(out[0].path(), Path::new(ROOT));
        } else {
            let kept_children = out.iter().filter(|d| d.path() != Path::new(ROOT)).count();
            prop_assert_eq!(kept_children, children.len());
        }
    }

    /// PROPERTY: a dropped root is covered by a kept child of its stack,
    /// next to a kept detection of another stack.
    #[test]
    fn property_dropped_root_is_covered_by_kept_child(
        (root, children) in detections()
    ) {
        let input = build(root, &children);
        let out = deduplicate(input, Path::new(ROOT)).into_vec();
        let root_kept = out.iter().any(|d| d.path() == Path::new(ROOT));

        if let (Some(root_stack), false) = (root, root_kept) {
            prop_assert!(out
                .iter()
                .any(|d| d.path() != Path::new(ROOT) && d.stack() == root_stack));
            prop_assert!(out.iter().any(|d| d.stack() != root_stack));
        }
    }

    /// PROPERTY: a root kept beside other detections shares its stack with none of them.
    #[test]
    fn property_kept_root_has_no_twin_beside_it(
        (root, children) in detections()
    ) {
        let input = build(root, &children);
        let out = deduplicate(input, Path::new(ROOT)).into_vec();

        if let Some(root_detection) = out.iter().find(|d| d.path() == Path::new(ROOT)) {
            prop_assert!(out
                .iter()
                .filter(|d| d.path() != Path::new(ROOT))
                .all(|d| d.stack() != root_detection.stack()));
        }
    }

    /// PROPERTY: dedup never invents detections and preserves input order.
    #[test]
    fn property_output_is_ordered_subset(
        (root, children) in detections()
    ) {
        let input = build(root, &children);
        let out = deduplicate(input.clone(), Path::new(ROOT)).into_vec();

        let mut rest = input.iter();
        for detection in &out {
            prop_assert!(rest.any(|d| d == detection));
        }
    }

    /// PROPERTY: a set is a monorepo exactly when it holds more than one detection.
    #[test]
    fn property_monorepo_iff_more_than_one(
        (root, children) in detections()
    ) {
        let input = build(root, &children);
        let out = deduplicate(input, Path::new(ROOT));
        prop_assert_eq!(out.is_monorepo(), out.len() > 1);
        prop_assert_eq!(is_monorepo(&out.clone().into_vec()), out.len() > 1);
    }
}
