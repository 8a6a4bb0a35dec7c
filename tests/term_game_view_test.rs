use term_tetris::core::GameState;
use term_tetris::term::{piece_color, FrameBuffer, GameView, Viewport};
use term_tetris::types::{GameAction, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22; 20 rows + border = 22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_columns_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[18][0] = PieceKind::L.id();
    snap.running = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 18);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, piece_color(PieceKind::L));
        assert!(!glyph.style.bold);
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_highlights_active_piece() {
    let mut game = GameState::with_pieces(&[PieceKind::O]);
    game.start();
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O piece at anchor (5, 0) covers board columns 5 and 6 of rows 0 and 1.
    let glyph = fb.get(1 + 5 * 2, 1).unwrap();
    assert_eq!(glyph.ch, '█');
    assert!(glyph.style.bold);
    assert_eq!(glyph.style.fg, piece_color(PieceKind::O));
    assert!(fb.get(1 + 6 * 2 + 1, 2).unwrap().style.bold);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::with_pieces(&[PieceKind::T]);
    game.start();
    let mut snap = game.snapshot();
    snap.score = 1234;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));
    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("PLAYING"));
    assert!(text.contains("T"));

    // Too narrow: board only.
    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_shows_press_enter_before_start() {
    let snap = GameState::new(1).snapshot();
    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 24)));
    assert!(text.contains("PRESS ENTER"));
    assert!(text.contains("READY"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut game = GameState::with_pieces(&[PieceKind::I]);
    game.start();
    while game.running() {
        game.apply_action(GameAction::HardDrop);
    }
    let snap = game.snapshot();
    assert!(snap.game_over);

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 24)));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PRESS ENTER"));
    assert!(!text.contains('█'));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));

    view.render_into(&snap, Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
