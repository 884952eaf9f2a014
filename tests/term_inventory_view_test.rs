use tetris_stack::core::{CycleKinds, PieceGenerator, Session};
use tetris_stack::term::inventory_view::{
    HELP_FIRST_ROW, NEXT_ID_ROW, QUEUE_ROW, STACK_FIRST_ROW, STATUS_ROW,
};
use tetris_stack::term::{FrameBuffer, InventoryView, Rgb, StatusLine, Viewport};
use tetris_stack::types::{PieceKind, STACK_CAPACITY};

fn session() -> Session<CycleKinds> {
    Session::new(PieceGenerator::new(CycleKinds::new(PieceKind::ALL)))
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_lists_queue_front_first() {
    let s = session();
    let view = InventoryView::default();
    let fb = view.render(&s.snapshot(), None, Viewport::new(60, 24));

    let row = fb.row_text(QUEUE_ROW);
    for (i, piece) in s.queue().ordered().iter().enumerate() {
        let x = view.queue_tile_x(i) as usize;
        let tile: String = row.chars().skip(x + 1).take(3).collect();
        assert_eq!(tile, format!("{} {}", piece.kind, piece.id));
    }
}

#[test]
fn term_view_draws_stack_top_first() {
    let mut s = session();
    s.reserve().unwrap(); // [I 0]
    s.reserve().unwrap(); // [O 1]
    let view = InventoryView::default();
    let fb = view.render(&s.snapshot(), None, Viewport::new(60, 24));

    let free = (STACK_CAPACITY - 2) as u16;
    // Unused slots sit above the top entry.
    assert_eq!(fb.get(view.margin_x(), STACK_FIRST_ROW).unwrap().ch, '·');
    assert_eq!(fb.get(view.margin_x() + 1, STACK_FIRST_ROW + free).unwrap().ch, 'O');
    assert_eq!(
        fb.get(view.margin_x() + 1, STACK_FIRST_ROW + free + 1).unwrap().ch,
        'I'
    );
    assert!(fb.row_text(STACK_FIRST_ROW + free).contains("< top"));
}

#[test]
fn term_view_marks_empty_reserve() {
    let s = session();
    let fb = InventoryView::default().render(&s.snapshot(), None, Viewport::new(60, 24));
    assert!(fb.row_text(STACK_FIRST_ROW).contains("(empty)"));
}

#[test]
fn term_view_shows_status_and_next_id() {
    let s = session();
    let view = InventoryView::default();
    let fb = view.render(
        &s.snapshot(),
        Some(StatusLine::error("No reserved pieces!")),
        Viewport::new(60, 24),
    );

    assert!(fb.row_text(STATUS_ROW).contains("No reserved pieces!"));
    assert_eq!(
        fb.get(view.margin_x(), STATUS_ROW).unwrap().style.fg,
        Rgb::new(230, 90, 90)
    );
    assert!(fb.row_text(NEXT_ID_ROW).contains("NEXT ID 5"));
}

#[test]
fn term_view_help_lists_every_action() {
    let fb = InventoryView::default().render(
        &session().snapshot(),
        None,
        Viewport::new(60, 24),
    );
    let text = screen_text(&fb);
    for needle in [
        "[1] Play piece",
        "[2] Reserve piece",
        "[3] Use reserved piece",
        "[4] Swap queue front with stack top",
        "[5] Swap first 3 queue pieces with top 3 reserved",
        "[q] Quit",
    ] {
        assert!(text.contains(needle), "missing {:?}", needle);
    }
}

#[test]
fn term_view_clips_help_to_short_viewports() {
    let h = HELP_FIRST_ROW + 2;
    let fb = InventoryView::default().render(&session().snapshot(), None, Viewport::new(60, h));
    assert_eq!(fb.height(), h);
    assert!(fb.row_text(HELP_FIRST_ROW + 1).contains("[2]"));
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let mut s = session();
    let view = InventoryView::default();
    let mut fb = FrameBuffer::new(10, 10);

    view.render_into(&s.snapshot(), None, Viewport::new(60, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 24));

    s.play().unwrap();
    view.render_into(&s.snapshot(), None, Viewport::new(60, 24), &mut fb);
    let tile: String = fb
        .row_text(QUEUE_ROW)
        .chars()
        .skip(view.queue_tile_x(0) as usize + 1)
        .take(3)
        .collect();
    assert_eq!(tile, "O 1");
}
