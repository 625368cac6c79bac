use ratatui::layout::Rect;
use sentencelens::ui::LayoutManager;

#[test]
fn test_main_layout_gives_input_its_rows() {
    let layout = LayoutManager::main_layout(Rect::new(0, 0, 100, 40), 15);

    assert_eq!(layout.title.height, 1);
    assert_eq!(layout.input.height, 17, "15 text rows plus borders");
    assert_eq!(layout.feedback.height, 1);
    assert_eq!(layout.status.height, 1);
    assert_eq!(layout.results.height, 20);
    assert_eq!(layout.status.y, 39);
}

#[test]
fn test_main_layout_shrinks_input_on_small_screens() {
    let layout = LayoutManager::main_layout(Rect::new(0, 0, 80, 10), 15);

    assert_eq!(layout.input.height, 7);
    assert_eq!(layout.results.height, 0);
    assert_eq!(layout.status.y, 9);
}

#[test]
fn test_centered_rect_lines() {
    let area = Rect::new(0, 0, 100, 40);
    let popup = LayoutManager::centered_rect_lines(60, 10, area);

    assert_eq!(popup.height, 10);
    assert_eq!(popup.width, 60);
    assert_eq!(popup.x, 20);
}
