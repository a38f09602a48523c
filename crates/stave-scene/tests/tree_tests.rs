//! Tests for scene tree structure: insertion, reparenting, traversal and
//! position mapping.

use std::collections::HashSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use stave_geometry::{PagePoint, Point, Unit};
use stave_scene::{Frame, LayoutController, Node, NodeClass, NodeId, Path, SceneError, SceneTree, Text};

fn group(tree: &mut SceneTree, parent: NodeId, pos: PagePoint) -> NodeId {
    tree.insert(parent, Node::group(pos)).unwrap()
}

fn child_set(tree: &SceneTree, id: NodeId) -> HashSet<NodeId> {
    tree.children(id).iter().copied().collect()
}

// ========== insert / set_parent ==========

#[test]
fn test_insert_registers_child() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let b = group(&mut tree, a, PagePoint::ORIGIN);

    assert_eq!(tree.parent(b), Some(a));
    assert_eq!(child_set(&tree, a), HashSet::from([b]));
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_insert_under_unknown_parent_fails() {
    let mut tree = SceneTree::default();
    let result = tree.insert(NodeId(7), Node::group(PagePoint::ORIGIN));
    assert!(matches!(result, Err(SceneError::UnknownNode(NodeId(7)))));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_set_parent_moves_between_children_sets() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let b = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let c = group(&mut tree, a, PagePoint::ORIGIN);

    tree.set_parent(c, b).unwrap();

    assert_eq!(tree.parent(c), Some(b));
    assert!(tree.children(a).is_empty());
    assert_eq!(child_set(&tree, b), HashSet::from([c]));
}

#[test]
fn test_set_parent_to_own_descendant_is_rejected() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let b = group(&mut tree, a, PagePoint::ORIGIN);
    let c = group(&mut tree, b, PagePoint::ORIGIN);

    let result = tree.set_parent(a, c);
    assert!(matches!(result, Err(SceneError::InvalidParent { node, parent }) if node == a && parent == c));

    assert_eq!(tree.parent(a), Some(NodeId::ROOT));
    assert_eq!(child_set(&tree, a), HashSet::from([b]));
    assert_eq!(child_set(&tree, b), HashSet::from([c]));
    assert!(tree.children(c).is_empty());
}

#[test]
fn test_set_parent_to_self_is_rejected() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    assert!(matches!(tree.set_parent(a, a), Err(SceneError::InvalidParent { .. })));
    assert_eq!(tree.parent(a), Some(NodeId::ROOT));
}

#[test]
fn test_root_cannot_be_moved_or_removed() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    assert!(matches!(tree.set_parent(NodeId::ROOT, a), Err(SceneError::RootNode)));
    assert!(matches!(tree.remove(NodeId::ROOT), Err(SceneError::RootNode)));
}

#[test]
fn test_remove_drops_subtree() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let b = group(&mut tree, a, PagePoint::ORIGIN);
    let c = group(&mut tree, b, PagePoint::ORIGIN);
    let keep = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);

    let removed = tree.remove(a).unwrap();

    assert_eq!(removed.parent(), None);
    assert!(tree.get(a).is_none());
    assert!(tree.get(b).is_none());
    assert!(tree.get(c).is_none());
    assert_eq!(child_set(&tree, NodeId::ROOT), HashSet::from([keep]));
    assert_eq!(tree.len(), 2);
}

// ========== traversal ==========

#[test]
fn test_descendants_are_post_order() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let a1 = group(&mut tree, a, PagePoint::ORIGIN);
    let a2 = group(&mut tree, a, PagePoint::ORIGIN);
    let a1x = group(&mut tree, a1, PagePoint::ORIGIN);
    let b = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![a1x, a1, a2, a, b]);

    // Each call starts over.
    assert_eq!(tree.descendants(NodeId::ROOT).count(), 5);
    assert_eq!(tree.descendants(a).collect::<Vec<_>>(), vec![a1x, a1, a2]);
}

#[test]
fn test_descendants_filtered_by_class() {
    let mut tree = SceneTree::default();
    let g = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let path = tree
        .insert(g, Node::path(Point::ORIGIN, Path::straight_line(Point::graphic(5.0, 0.0))))
        .unwrap();
    let text = tree
        .insert(NodeId::ROOT, Node::text(Point::ORIGIN, Text::new("p", Unit::pt(10.0))))
        .unwrap();

    let graphics: HashSet<NodeId> = tree.descendants_of_type(NodeId::ROOT, NodeClass::Graphic).collect();
    assert_eq!(graphics, HashSet::from([path, text]));

    let positioned = tree.descendants_of_type(NodeId::ROOT, NodeClass::Positioned).count();
    assert_eq!(positioned, 3);

    let exact: Vec<NodeId> = tree.descendants_of_exact_type(NodeId::ROOT, NodeClass::Text).collect();
    assert_eq!(exact, vec![text]);
    assert_eq!(tree.descendants_of_exact_type(NodeId::ROOT, NodeClass::Graphic).count(), 0);
}

#[test]
fn test_ancestors_nearest_first() {
    let mut tree = SceneTree::default();
    let a = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let b = group(&mut tree, a, PagePoint::ORIGIN);
    assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![a, NodeId::ROOT]);
    assert!(tree.is_descendant_of(b, NodeId::ROOT));
    assert!(!tree.is_descendant_of(a, b));
}

// ========== positions ==========

#[test]
fn test_absolute_position_sums_chain_with_pages() {
    let mut tree = SceneTree::default();
    let parent = group(&mut tree, NodeId::ROOT, PagePoint::graphic(100.0, 102.0, 7));
    let source = group(&mut tree, parent, PagePoint::graphic(5.0, 6.0, 1));

    assert_eq!(tree.absolute_position(source).unwrap(), PagePoint::graphic(105.0, 108.0, 8));
}

#[test]
fn test_map_between_top_level_nodes() {
    let mut tree = SceneTree::default();
    let source = group(&mut tree, NodeId::ROOT, PagePoint::graphic(5.0, 6.0, 1));
    let destination = group(&mut tree, NodeId::ROOT, PagePoint::graphic(100.0, 100.0, 4));

    assert_eq!(tree.map_between(source, destination).unwrap(), PagePoint::graphic(95.0, 94.0, 3));
}

#[test]
fn test_map_between_through_parent() {
    let mut tree = SceneTree::default();
    let parent = group(&mut tree, NodeId::ROOT, PagePoint::graphic(100.0, 102.0, 7));
    let source = group(&mut tree, parent, PagePoint::graphic(5.0, 6.0, 1));
    let destination = group(&mut tree, NodeId::ROOT, PagePoint::graphic(1.0, 1.0, 4));

    assert_eq!(
        tree.map_between(source, destination).unwrap(),
        PagePoint::graphic(-104.0, -107.0, -4)
    );
}

#[test]
fn test_position_inside_frame_goes_through_layout() {
    let mut tree = SceneTree::default();
    let frame = Frame::with_controllers(
        Unit::graphic(20.0),
        Unit::graphic(10.0),
        vec![
            LayoutController::new(
                Unit::ZERO,
                PagePoint::graphic(10.0, 10.0, 0),
                Unit::graphic(100.0),
                Unit::graphic(20.0),
                Unit::ZERO,
            ),
            LayoutController::new(
                Unit::graphic(100.0),
                PagePoint::graphic(0.0, 0.0, 1),
                Unit::graphic(100.0),
                Unit::graphic(20.0),
                Unit::graphic(10.0),
            ),
        ],
    )
    .unwrap();
    let frame = tree.insert(NodeId::ROOT, Node::frame(PagePoint::graphic(10.0, 10.0, 0), frame)).unwrap();
    let staff = group(&mut tree, frame, PagePoint::graphic(80.0, 5.0, 0));
    let note = group(&mut tree, staff, PagePoint::graphic(40.0, 2.0, 0));

    assert_eq!(tree.local_position_in_frame(frame, note).unwrap(), Point::graphic(120.0, 7.0));
    assert_eq!(tree.absolute_position(note).unwrap(), PagePoint::graphic(20.0, 7.0, 1));
    assert_eq!(tree.frame_of(note), Some(frame));
    assert!(tree.is_in_flowable(staff));
    assert!(!tree.is_in_flowable(frame));
}

#[test]
fn test_local_position_outside_frame_fails() {
    let mut tree = SceneTree::default();
    let frame = tree
        .insert(
            NodeId::ROOT,
            Node::frame(Point::ORIGIN, Frame::new(Unit::graphic(10.0), Unit::graphic(10.0), Unit::ZERO)),
        )
        .unwrap();
    let outsider = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);

    assert!(matches!(
        tree.local_position_in_frame(frame, outsider),
        Err(SceneError::NotInFrame { .. })
    ));
    assert!(matches!(
        tree.local_position_in_frame(outsider, frame),
        Err(SceneError::NotAFrame(_))
    ));
}

#[quickcheck]
fn map_between_is_antisymmetric(a: (i16, i16, i8), b: (i16, i16, i8), parent: (i16, i16, i8)) -> TestResult {
    let to_page_point = |(x, y, page): (i16, i16, i8)| {
        PagePoint::graphic(f64::from(x), f64::from(y), i32::from(page))
    };
    let mut tree = SceneTree::default();
    let p = group(&mut tree, NodeId::ROOT, to_page_point(parent));
    let source = group(&mut tree, p, to_page_point(a));
    let destination = group(&mut tree, NodeId::ROOT, to_page_point(b));

    let forward = tree.map_between(source, destination).unwrap();
    let backward = tree.map_between(destination, source).unwrap();
    TestResult::from_bool(forward.approx_eq(-backward))
}

#[quickcheck]
fn reparent_under_descendant_never_mutates(depth: u8) -> TestResult {
    let depth = usize::from(depth % 8) + 1;
    let mut tree = SceneTree::default();
    let top = group(&mut tree, NodeId::ROOT, PagePoint::ORIGIN);
    let mut chain = vec![top];
    for _ in 0..depth {
        let last = *chain.last().unwrap();
        chain.push(group(&mut tree, last, PagePoint::ORIGIN));
    }
    let before: Vec<Vec<NodeId>> = chain.iter().map(|&id| tree.children(id).to_vec()).collect();

    let deepest = *chain.last().unwrap();
    let rejected = matches!(tree.set_parent(top, deepest), Err(SceneError::InvalidParent { .. }));
    let after: Vec<Vec<NodeId>> = chain.iter().map(|&id| tree.children(id).to_vec()).collect();

    TestResult::from_bool(rejected && before == after && tree.parent(top) == Some(NodeId::ROOT))
}
