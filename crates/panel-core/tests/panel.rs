// File: crates/panel-core/tests/panel.rs
// Purpose: Series bookkeeping and the paint pass, checked through a recording surface.

use panel_core::{ChartPanel, DisplayList, DrawCommand, PanelError, Point, Rgba, SeriesId, Size};

const BLUE: Rgba = Rgba::rgb(64, 160, 255);

fn sample() -> Vec<f64> {
    vec![5.0, 7.0, 2.0, 1.5, 9.0, 4.0, 7.0, 7.0, 1.0, 3.0]
}

#[test]
fn end_to_end_placement() {
    let mut panel = ChartPanel::new();
    let id = panel.add_named_series(sample(), "Series 1", Rgba::RED).unwrap();

    let mut dl = DisplayList::new(Size::new(800, 600));
    panel.render(&mut dl);

    let entry = panel.series(id).expect("series present");
    let placement = entry.placement();
    assert_eq!(placement.min_value(), 1.0);
    assert_eq!(placement.max_value(), 9.0);
    assert_eq!(placement.points().len(), 10);
    assert_eq!(placement.points()[0].x, 0);
    let last_x = placement.points()[9].x;
    assert!((799..=800).contains(&last_x), "last x {last_x}");

    // 10 points -> 9 segments in the series color
    assert_eq!(dl.lines_in(Rgba::RED).len(), 9);
}

#[test]
fn add_then_remove_restores_count() {
    let mut panel = ChartPanel::new();
    panel.add_series(vec![1.0, 2.0]).unwrap();
    let before = panel.series_count();

    let id = panel.add_series(sample()).unwrap();
    assert_eq!(panel.series_count(), before + 1);
    assert!(panel.remove_series(id));
    assert_eq!(panel.series_count(), before);
}

#[test]
fn unknown_id_is_not_found() {
    let mut panel = ChartPanel::new();
    let id = panel.add_series(sample()).unwrap();

    assert!(!panel.remove_series(SeriesId(42)));
    assert!(!panel.set_series_visible(SeriesId(42), false));
    assert!(!panel.toggle_series_visible(SeriesId(42)));
    assert!(!panel.set_series_color(SeriesId(42), BLUE));

    assert_eq!(panel.series_count(), 1);
    let entry = panel.series(id).unwrap();
    assert!(entry.is_visible());
    assert_eq!(entry.color(), Rgba::WHITE);
}

#[test]
fn ids_are_never_reused() {
    let mut panel = ChartPanel::new();
    let first = panel.add_series(sample()).unwrap();
    assert!(panel.remove_series(first));
    let second = panel.add_series(sample()).unwrap();
    assert!(second > first);

    panel.remove_all_series();
    assert_eq!(panel.series_count(), 0);
    let third = panel.add_series(sample()).unwrap();
    assert!(third > second);
}

#[test]
fn rejected_add_keeps_state_and_ids() {
    let mut panel = ChartPanel::new();
    let a = panel.add_series(sample()).unwrap();
    assert_eq!(panel.add_series(Vec::new()).unwrap_err(), PanelError::EmptySeries);
    assert_eq!(panel.series_count(), 1);
    let b = panel.add_series(sample()).unwrap();
    assert_eq!(b, SeriesId(a.0 + 1));
}

#[test]
fn defaults_for_unnamed_series() {
    let mut panel = ChartPanel::new();
    let id = panel.add_series(sample()).unwrap();
    let entry = panel.series(id).unwrap();
    assert_eq!(entry.name(), "");
    assert_eq!(entry.color(), Rgba::WHITE);
    assert_eq!(entry.legend_label(), "0: ");
}

#[test]
fn recolor_applies_to_next_paint() {
    let mut panel = ChartPanel::new();
    let id = panel.add_named_series(vec![1.0, 2.0, 3.0], "s", Rgba::RED).unwrap();
    assert!(panel.set_series_color(id, BLUE));

    let mut dl = DisplayList::new(Size::new(100, 100));
    panel.render(&mut dl);
    assert!(dl.lines_in(Rgba::RED).is_empty());
    assert_eq!(dl.lines_in(BLUE).len(), 2);
}

#[test]
fn hidden_series_keeps_its_legend_row() {
    let mut panel = ChartPanel::new();
    panel.add_named_series(sample(), "a", Rgba::RED).unwrap();
    let b = panel.add_named_series(sample(), "b", BLUE).unwrap();
    panel.add_named_series(sample(), "c", Rgba::LIGHT_GRAY).unwrap();
    panel.show_vertical_guide(false);
    panel.show_horizontal_guide(false);

    assert!(panel.toggle_series_visible(b));

    let mut dl = DisplayList::new(Size::new(800, 600));
    panel.render(&mut dl);

    assert!(dl.lines_in(BLUE).is_empty());
    assert_eq!(dl.lines_in(Rgba::RED).len(), 9);
    assert_eq!(dl.lines_in(Rgba::LIGHT_GRAY).len(), 9);

    // row 1 stays blank; row 2 is where it would be with b visible
    let texts = dl.texts();
    assert_eq!(texts, vec![("0: a", Point::new(0, 45)), ("2: c", Point::new(0, 95))]);

    assert!(panel.set_series_visible(b, true));
    dl.clear();
    panel.render(&mut dl);
    assert_eq!(dl.texts()[1], ("1: b", Point::new(0, 70)));
}

#[test]
fn paint_order_background_lines_guides() {
    let mut panel = ChartPanel::new();
    panel.add_named_series(vec![1.0, 2.0], "s", Rgba::RED).unwrap();
    panel.set_pointer(Point::new(30, 40));
    panel.show_legend(false);

    let mut dl = DisplayList::new(Size::new(100, 80));
    panel.render(&mut dl);

    let cmds = dl.commands();
    assert!(matches!(cmds[0], DrawCommand::FillRect { color: Rgba::BLACK, .. }));
    assert_eq!(
        &cmds[1..],
        &[
            DrawCommand::Line { from: Point::new(0, 80), to: Point::new(100, 0), color: Rgba::RED },
            DrawCommand::Line { from: Point::new(30, 0), to: Point::new(30, 80), color: Rgba::GREEN },
            DrawCommand::Line { from: Point::new(0, 40), to: Point::new(100, 40), color: Rgba::GREEN },
        ]
    );
}

#[test]
fn single_point_series_draws_no_line() {
    let mut panel = ChartPanel::new();
    panel.add_named_series(vec![3.0], "dot", Rgba::RED).unwrap();
    let mut dl = DisplayList::new(Size::new(100, 100));
    panel.render(&mut dl);
    assert!(dl.lines_in(Rgba::RED).is_empty());
}

#[test]
fn render_tracks_surface_size() {
    let mut panel = ChartPanel::new();
    let id = panel.add_series(vec![0.0, 1.0]).unwrap();
    let mut dl = DisplayList::new(Size::new(300, 200));
    panel.render(&mut dl);
    assert_eq!(panel.size(), Size::new(300, 200));

    dl.resize(Size::new(600, 400));
    dl.clear();
    panel.render(&mut dl);
    assert_eq!(panel.series(id).unwrap().placement().points()[1], Point::new(600, 0));
}

#[test]
fn huge_legend_row_delta_clamps_rows() {
    let mut panel = ChartPanel::new();
    for (name, color) in [("a", Rgba::RED), ("b", BLUE), ("c", Rgba::LIGHT_GRAY)] {
        panel.add_named_series(vec![1.0, 2.0], name, color).unwrap();
    }
    let delta = i32::MAX / 2 + 1;
    panel.set_legend_row_delta(delta);

    let mut dl = DisplayList::new(Size::new(100, 100));
    panel.render(&mut dl);

    let rows: Vec<Point> = dl.texts().into_iter().map(|(_, at)| at).collect();
    assert_eq!(rows, vec![Point::new(0, 45), Point::new(0, 45 + delta), Point::new(0, i32::MAX)]);
}
