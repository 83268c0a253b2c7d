//! Stacking layouts and tables: derived sizes and child placement.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use boxdraw_layout::prelude::*;
use boxdraw_testing::{init_logging, RecordingRenderer};

fn three_children<N: Node>(layout: N) -> N {
    layout
        .child(Rectangle::new(40, 10))
        .child_at(Rectangle::new(20, 10), Point::new(0, 5))
        .child_at(Rectangle::new(30, 8), Point::new(-5, 2))
}

#[test]
fn test_vlayout_size_from_children() {
    let column = three_children(VLayout::new());
    // max(40 + 0, 20 + 0, 30 - 5) and (10 + 0) + (10 + 5) + (8 + 2)
    assert_eq!(column.width(), Ok(40));
    assert_eq!(column.height(), Ok(35));
}

#[test]
fn test_hlayout_size_from_children() {
    let row = three_children(HLayout::new());
    // (40 + 0) + (20 + 0) + (30 - 5) and max(10 + 0, 10 + 5, 8 + 2)
    assert_eq!(row.width(), Ok(85));
    assert_eq!(row.height(), Ok(15));
}

#[test]
fn test_empty_layouts_are_zero_sized() {
    assert_eq!(VLayout::new().width(), Ok(0));
    assert_eq!(VLayout::new().height(), Ok(0));
    assert_eq!(HLayout::new().width(), Ok(0));
    assert_eq!(Table::new().height(), Ok(0));
}

#[test]
fn test_derived_sizes_are_live() {
    let mut column = VLayout::new()
        .child(Group::sized(10, 10))
        .child(Group::sized(20, 10));
    assert_eq!(column.width(), Ok(20));

    let first = column.core_mut().children_mut().first_mut().unwrap();
    first.node_mut().set_width(50).unwrap();
    first.node_mut().set_height(30).unwrap();

    assert_eq!(column.width(), Ok(50));
    assert_eq!(column.height(), Ok(40));
}

#[test]
fn test_nested_layouts_propagate() {
    let mut outer = HLayout::new()
        .child(VLayout::new().child(Group::sized(10, 10)))
        .child(Group::sized(5, 5));
    assert_eq!(outer.width(), Ok(15));

    let inner = outer.core_mut().children_mut().first_mut().unwrap();
    inner.node_mut().add_boxed(Box::new(Group::sized(30, 10)), Point::zero());

    assert_eq!(outer.width(), Ok(35));
    assert_eq!(outer.height(), Ok(20));
}

#[test]
fn test_unset_child_size_surfaces() {
    let column = VLayout::new().child(Group::new());
    assert_eq!(
        column.width(),
        Err(LayoutError::UnsetDimension {
            node: "Group",
            axis: boxdraw_layout::error::Axis::Horizontal,
        })
    );
}

#[test]
fn test_layouts_reject_forced_size() {
    let mut column = VLayout::new();
    let mut row = HLayout::new();
    let mut table = Table::new();

    assert!(matches!(
        column.set_width(10),
        Err(LayoutError::DerivedDimension { node: "VLayout", .. })
    ));
    assert!(matches!(
        row.set_height(10),
        Err(LayoutError::DerivedDimension { node: "HLayout", .. })
    ));
    assert!(matches!(
        table.set_height(10),
        Err(LayoutError::DerivedDimension { node: "Table", .. })
    ));
}

#[test]
fn test_vlayout_centres_children() {
    init_logging();
    let column = VLayout::new()
        .child(Rectangle::new(40, 10))
        .child(Rectangle::new(20, 10))
        .child_at(Rectangle::new(20, 10), Point::new(4, 2));

    let mut r = RecordingRenderer::new();
    column.render(&mut r, Point::new(0, 0)).unwrap();

    assert_eq!(
        r.rectangles(),
        vec![
            (Point::new(0, 0), Point::new(40, 10)),
            (Point::new(10, 10), Point::new(30, 20)),
            // the x offset is cancelled by centring; y offset still applies
            (Point::new(10, 22), Point::new(30, 32)),
        ]
    );
}

#[test]
fn test_vlayout_centring_rounds_down() {
    let column = VLayout::new()
        .child(Rectangle::new(7, 2))
        .child(Rectangle::new(2, 2));

    let mut r = RecordingRenderer::new();
    column.render(&mut r, Point::new(1, 0)).unwrap();

    // layout centre 1 + 3, child centre 1 + 1
    assert_eq!(r.rectangles()[1], (Point::new(3, 2), Point::new(5, 4)));
}

#[test]
fn test_hlayout_places_sequentially() {
    let row = HLayout::new()
        .child(Rectangle::new(10, 5))
        .child_at(Rectangle::new(20, 8), Point::new(3, 1))
        .child(Rectangle::new(4, 4));

    let mut r = RecordingRenderer::new();
    row.render(&mut r, Point::new(1, 1)).unwrap();

    assert_eq!(
        r.rectangles(),
        vec![
            (Point::new(1, 1), Point::new(11, 6)),
            (Point::new(14, 2), Point::new(34, 10)),
            (Point::new(34, 1), Point::new(38, 5)),
        ]
    );
}

#[test]
fn test_declared_alignment_is_kept() {
    let column = VLayout::new().align(Align::Left);
    let row = HLayout::new().align(Align::Bottom);
    assert_eq!(column.alignment(), Align::Left);
    assert_eq!(row.alignment(), Align::Bottom);
    assert_eq!(VLayout::new().alignment(), Align::Center);
}

#[test]
fn test_table_equalises_cell_heights() {
    let mut table = Table::new()
        .child(Rectangle::new(10, 10))
        .child(Rectangle::new(10, 25))
        .child(Rectangle::new(10, 15));

    table.prepare(&mut RecordingRenderer::new()).unwrap();

    for cell in table.children() {
        assert_eq!(cell.node().height(), Ok(25));
    }
    assert_eq!(table.width(), Ok(30));
    assert_eq!(table.height(), Ok(25));
}

#[test]
fn test_table_measures_text_cells_first() {
    let mut table = Table::new()
        .child(Text::new("ab"))
        .child(Rectangle::new(10, 25));
    let mut r = RecordingRenderer::new();

    table.prepare(&mut r).unwrap();

    let text = table.children()[0].node();
    assert_eq!(text.width(), Ok(12));
    assert_eq!(text.height(), Ok(25));
    r.assert_measured("ab", 1).unwrap();
}

#[test]
fn test_table_rejects_derived_cells() {
    let mut table = Table::new()
        .child(Rectangle::new(10, 25))
        .child(VLayout::new().child(Rectangle::new(10, 10)));

    assert_eq!(
        table.prepare(&mut RecordingRenderer::new()),
        Err(LayoutError::DerivedDimension {
            node: "VLayout",
            axis: boxdraw_layout::error::Axis::Vertical,
        })
    );
}

#[test]
fn test_table_renders_like_row() {
    let mut table = Table::new()
        .child(Rectangle::new(10, 10))
        .child(Rectangle::new(5, 20));
    let mut r = RecordingRenderer::new();

    table.prepare(&mut r).unwrap();
    table.render(&mut r, Point::zero()).unwrap();

    assert_eq!(
        r.rectangles(),
        vec![
            (Point::new(0, 0), Point::new(10, 20)),
            (Point::new(10, 0), Point::new(15, 20)),
        ]
    );
}
