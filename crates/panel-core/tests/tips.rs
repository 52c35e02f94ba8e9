// File: crates/panel-core/tests/tips.rs
// Purpose: Lock in the tip bucket lookup, including its shifted-by-one selection.

use panel_core::{ChartPanel, DisplayList, Point, Rgba, Size};

fn panel_with_tips(width: u32, tips: &[&str]) -> ChartPanel {
    let mut panel = ChartPanel::new();
    panel.resize(Size::new(width, 100));
    panel.set_tips(tips.iter().map(|s| s.to_string()).collect());
    panel
}

#[test]
fn first_bucket_yields_second_tip() {
    let panel = panel_with_tips(300, &["A", "B", "C"]);
    assert_eq!(panel.tip_at(0), "B");
    assert_eq!(panel.tip_at(149), "B");
}

#[test]
fn last_bucket_yields_last_tip() {
    let panel = panel_with_tips(300, &["A", "B", "C"]);
    assert_eq!(panel.tip_at(150), "C");
    assert_eq!(panel.tip_at(299), "C");
}

#[test]
fn first_tip_is_unreachable_with_several_tips() {
    let panel = panel_with_tips(300, &["A", "B", "C"]);
    assert!((0..300).all(|x| panel.tip_at(x) != "A"));
}

#[test]
fn outside_width_is_empty() {
    let panel = panel_with_tips(300, &["A", "B", "C"]);
    assert_eq!(panel.tip_at(-1), "");
    assert_eq!(panel.tip_at(300), "");
}

#[test]
fn no_tips_is_empty() {
    let panel = panel_with_tips(300, &[]);
    assert_eq!(panel.tip_at(10), "");
}

#[test]
fn sole_tip_everywhere() {
    let panel = panel_with_tips(300, &["only"]);
    assert_eq!(panel.tip_at(0), "only");
    assert_eq!(panel.tip_at(299), "only");
    assert_eq!(panel.tip_at(300), "");
}

#[test]
fn tip_drawn_at_configured_position() {
    let mut panel = panel_with_tips(300, &["A", "B", "C"]);
    panel.show_legend(false);
    panel.set_tip_position(Point::new(5, 30));
    panel.set_tip_color(Rgba::RED);
    panel.set_pointer(Point::new(200, 10));

    let mut dl = DisplayList::new(Size::new(300, 100));
    panel.render(&mut dl);
    assert_eq!(dl.texts(), vec![("C", Point::new(5, 30))]);

    panel.show_tips(false);
    dl.clear();
    panel.render(&mut dl);
    assert!(dl.texts().is_empty());
}

#[test]
fn cleared_tips_draw_nothing() {
    let mut panel = panel_with_tips(300, &["A", "B", "C"]);
    panel.clear_tips();
    assert!(panel.tips().is_empty());
    assert_eq!(panel.tip_at(10), "");

    panel.show_legend(false);
    let mut dl = DisplayList::new(Size::new(300, 100));
    panel.render(&mut dl);
    assert!(dl.texts().is_empty());
}
