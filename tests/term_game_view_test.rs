use cake_tower::core::{GameConfig, GameState, RunResult};
use cake_tower::term::{
    layer_color, render_result, render_title, GameView, HudView, Viewport, CAKE_PALETTE,
};

fn screen_text(fb: &cake_tower::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::default().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(72, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(49, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 23).unwrap().ch, '╰');
    assert_eq!(fb.get(49, 23).unwrap().ch, '╯');
}

#[test]
fn term_view_draws_base_layer_above_plate() {
    let snap = GameState::default().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(72, 24));

    // 720 world units over 48 columns: the 400-wide base spans [160, 560).
    assert_eq!(fb.get(1, 22).unwrap().ch, '▀');
    let row = fb.row_text(21);
    let first = row.find('█').unwrap();
    let filled = row.chars().filter(|&c| c == '█').count();
    assert_eq!(row[..first].chars().count(), 12);
    assert_eq!(filled, 26);
    assert_eq!(fb.get(12, 21).unwrap().style.fg, layer_color(0));
}

#[test]
fn term_view_shows_swinging_piece_on_top_row() {
    let mut game = GameState::default();
    game.start();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(72, 24));
    assert!(fb.row_text(1).contains('█'));
    assert_eq!(fb.get(24, 1).unwrap().style.fg, layer_color(1));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(GameConfig {
        drop_frames: 0,
        ..GameConfig::default()
    });
    game.start();
    for _ in 0..4 {
        game.tap();
    }
    let hud = HudView {
        best: 42,
        banner: Some("Flawless!"),
    };
    let fb = GameView::default().render_with_hud(&game.snapshot(), Some(&hud), Viewport::new(72, 24));
    let text = screen_text(&fb);

    assert!(text.contains("LAYERS"));
    assert!(text.contains("COMBO!"));
    assert!(text.contains("SPEED"));
    assert!(text.contains("4.6"));
    assert!(text.contains("42"));
    assert!(text.contains("Flawless!"));
}

#[test]
fn term_view_hides_side_panel_when_narrow() {
    let snap = GameState::default().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(50, 24));
    assert!(!screen_text(&fb).contains("LAYERS"));
}

#[test]
fn term_view_overlays_ready_and_game_over() {
    let snap = GameState::default().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(72, 24));
    assert!(screen_text(&fb).contains("PRESS SPACE"));

    let mut game = GameState::new(GameConfig {
        drop_frames: 0,
        ..GameConfig::default()
    });
    game.start();
    game.place_active(900.0);
    game.tap();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(72, 24));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_scrolls_tall_towers() {
    let mut game = GameState::new(GameConfig {
        drop_frames: 0,
        ..GameConfig::default()
    });
    game.start();
    for _ in 0..40 {
        game.tap();
        game.drain_events().for_each(drop);
    }
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(72, 24));
    // Only the newest 19 layers fit; the highest visible one is layer 40.
    let rows = 22 - 3;
    let top_row = 22 - rows;
    let top_color = layer_color(40);
    let row = fb.row_text(top_row);
    let x = row.find('█').map(|i| row[..i].chars().count()).unwrap() as u16;
    assert_eq!(fb.get(x, top_row).unwrap().style.fg, top_color);
}

#[test]
fn term_view_reports_tiny_terminals() {
    let snap = GameState::default().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert!(fb.row_text(0).starts_with("terminal t"));
}

#[test]
fn palette_cycles() {
    assert_eq!(layer_color(0), CAKE_PALETTE[0]);
    assert_eq!(layer_color(CAKE_PALETTE.len() as u32), CAKE_PALETTE[0]);
    assert_eq!(layer_color(7), CAKE_PALETTE[1]);
}

#[test]
fn title_screen_shows_best() {
    let fb = render_title(27, Viewport::new(60, 24));
    let text = screen_text(&fb);
    assert!(text.contains("C A K E   T O W E R"));
    assert!(text.contains("BEST 27"));
    assert!(text.contains("press SPACE"));
}

#[test]
fn result_screen_shows_record_and_rating() {
    let result = RunResult {
        score: 21,
        best: 21,
        is_new_record: true,
    };
    let fb = render_result(&result, Some("You did it! New best!"), Viewport::new(60, 24));
    let text = screen_text(&fb);
    assert!(text.contains("NEW RECORD"));
    assert!(text.contains("21 layers"));
    assert!(text.contains("First-Class Patissier!"));
    assert!(text.contains("You did it!"));

    let result = RunResult {
        score: 3,
        best: 21,
        is_new_record: false,
    };
    let text = screen_text(&render_result(&result, None, Viewport::new(60, 24)));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("NEW RECORD"));
    assert!(text.contains("Practice Makes Perfect!"));
}
