//! Scene flow around a single [`GameState`].
//!
//! `Title → Playing → Result`, and from the result screen back into a new run
//! or to the title. The app owns the collaborators the core does not: the high
//! score store, the cue sink and the announcer. It is driven the same way the
//! core is, one [`App::handle_action`] and one [`App::tick`] per frame, so it
//! runs headless in tests.

use log::info;

use crate::core::{
    settle, CueSink, FlavorPicker, GameConfig, GameEvent, GameSnapshot, GameState,
    HighScoreStore, RunResult,
};
use crate::term::{
    render_result_into, render_title_into, FrameBuffer, GameView, HudView, Viewport,
};
use crate::types::{GameAction, RESULT_DELAY_FRAMES};

/// Frames an announcer line stays on screen (~1.2s).
pub const BANNER_FRAMES: u32 = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Title,
    Playing,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Banner {
    text: &'static str,
    frames_left: u32,
}

pub struct App<S, C> {
    game: GameState,
    scene: Scene,
    store: S,
    cues: C,
    flavor: FlavorPicker,
    best: u32,
    banner: Option<Banner>,
    result: Option<RunResult>,
    /// Line shown on the result screen when the run set a record.
    record_line: Option<&'static str>,
    /// Frames left before a finished run switches to the result screen.
    result_delay: Option<u32>,
    snapshot: GameSnapshot,
}

impl<S: HighScoreStore, C: CueSink> App<S, C> {
    pub fn new(config: GameConfig, store: S, cues: C, seed: u32) -> Self {
        let best = store.read_high_score();
        info!("loaded best score {}", best);
        Self {
            game: GameState::new(config),
            scene: Scene::Title,
            store,
            cues,
            flavor: FlavorPicker::new(seed),
            best,
            banner: None,
            result: None,
            record_line: None,
            result_delay: None,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Mutable access to the run, for scripted play.
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.banner.map(|b| b.text)
    }

    /// Settled result of the last finished run.
    pub fn result(&self) -> Option<RunResult> {
        self.result
    }

    pub fn record_line(&self) -> Option<&'static str> {
        self.record_line
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cues(&self) -> &C {
        &self.cues
    }

    pub fn handle_action(&mut self, action: GameAction) {
        match (self.scene, action) {
            (_, GameAction::Title) => self.to_title(),
            (Scene::Title | Scene::Result, GameAction::Tap | GameAction::Restart) => {
                self.new_run()
            }
            (Scene::Playing, GameAction::Restart) => self.new_run(),
            (Scene::Playing, GameAction::Tap) => {
                self.game.tap();
            }
        }
        self.pump_events();
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        if self.scene == Scene::Playing {
            self.game.tick(1);
            self.pump_events();

            if let Some(left) = self.result_delay {
                if left <= 1 {
                    self.result_delay = None;
                    self.scene = Scene::Result;
                } else {
                    self.result_delay = Some(left - 1);
                }
            }
        }

        if let Some(banner) = self.banner.as_mut() {
            banner.frames_left = banner.frames_left.saturating_sub(1);
            if banner.frames_left == 0 {
                self.banner = None;
            }
        }
    }

    /// Draw the current scene into `fb`.
    pub fn render_into(&mut self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        match (self.scene, self.result) {
            (Scene::Title, _) => render_title_into(self.best, viewport, fb),
            (Scene::Result, Some(result)) => {
                render_result_into(&result, self.record_line, viewport, fb)
            }
            (Scene::Playing, _) | (Scene::Result, None) => {
                self.game.snapshot_into(&mut self.snapshot);
                let hud = HudView {
                    best: self.best,
                    banner: self.banner(),
                };
                view.render_into_with_hud(&self.snapshot, Some(&hud), viewport, fb);
            }
        }
    }

    fn new_run(&mut self) {
        self.game.reset();
        self.game.start();
        self.scene = Scene::Playing;
        self.clear_run_ui();
    }

    fn to_title(&mut self) {
        self.game.apply_action(GameAction::Title);
        self.scene = Scene::Title;
        self.clear_run_ui();
    }

    fn clear_run_ui(&mut self) {
        self.banner = None;
        self.result = None;
        self.record_line = None;
        self.result_delay = None;
    }

    fn show(&mut self, text: &'static str) {
        self.banner = Some(Banner {
            text,
            frames_left: BANNER_FRAMES,
        });
    }

    fn pump_events(&mut self) {
        while let Some(event) = self.game.next_event() {
            self.on_event(event);
        }
    }

    fn on_event(&mut self, event: GameEvent) {
        if let GameEvent::Cue(cue) = event {
            self.cues.play(cue);
            return;
        }

        if let Some(line) = self.flavor.line_for(&event) {
            self.show(line);
        }

        if let GameEvent::GameOver { score } = event {
            let result = settle(&mut self.store, score);
            self.best = result.best;
            if result.is_new_record {
                let line = self.flavor.new_record();
                self.record_line = Some(line);
                self.show(line);
            }
            self.result = Some(result);
            self.result_delay = Some(RESULT_DELAY_FRAMES);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryHighScore;
    use crate::types::{Cue, Phase};

    #[derive(Debug, Default)]
    struct RecordedCues(Vec<Cue>);

    impl CueSink for RecordedCues {
        fn play(&mut self, cue: Cue) {
            self.0.push(cue);
        }
    }

    fn app(best: u32) -> App<MemoryHighScore, RecordedCues> {
        let config = GameConfig {
            drop_frames: 0,
            ..GameConfig::default()
        };
        App::new(config, MemoryHighScore::new(best), RecordedCues::default(), 7)
    }

    fn miss(app: &mut App<MemoryHighScore, RecordedCues>) {
        let top = app.game().top();
        let width = app.game().active().map(|p| p.width).unwrap_or(0.0);
        assert!(app.game_mut().place_active(top.center_x + top.width / 2.0 + width / 2.0 + 1.0));
        app.handle_action(GameAction::Tap);
        assert_eq!(app.game().phase(), Phase::GameOver);
    }

    #[test]
    fn starts_on_title_with_stored_best() {
        let app = app(12);
        assert_eq!(app.scene(), Scene::Title);
        assert_eq!(app.best(), 12);
    }

    #[test]
    fn tap_on_title_starts_a_run_and_cues() {
        let mut app = app(0);
        app.handle_action(GameAction::Tap);
        assert_eq!(app.scene(), Scene::Playing);
        assert_eq!(app.game().phase(), Phase::Swinging);
        assert_eq!(app.cues().0, vec![Cue::Start]);
    }

    #[test]
    fn perfect_drop_shows_banner_that_expires() {
        let mut app = app(0);
        app.handle_action(GameAction::Tap);
        app.handle_action(GameAction::Tap);
        assert_eq!(app.game().score(), 1);
        assert!(app.banner().is_some());

        for _ in 0..BANNER_FRAMES {
            app.tick();
        }
        assert_eq!(app.banner(), None);
    }

    #[test]
    fn game_over_waits_then_shows_result() {
        let mut app = app(0);
        app.handle_action(GameAction::Tap);
        app.handle_action(GameAction::Tap);
        app.handle_action(GameAction::Tap);
        miss(&mut app);

        let result = app.result().unwrap();
        assert_eq!(result.score, 2);
        assert!(result.is_new_record);
        assert_eq!(app.store().read_high_score(), 2);
        assert_eq!(app.cues().0.last(), Some(&Cue::GameOver));

        for _ in 0..RESULT_DELAY_FRAMES - 1 {
            app.tick();
            assert_eq!(app.scene(), Scene::Playing);
        }
        app.tick();
        assert_eq!(app.scene(), Scene::Result);
    }

    #[test]
    fn result_screen_restarts_or_leaves() {
        let mut app = app(50);
        app.handle_action(GameAction::Tap);
        miss(&mut app);
        for _ in 0..RESULT_DELAY_FRAMES {
            app.tick();
        }
        assert_eq!(app.scene(), Scene::Result);
        assert!(!app.result().unwrap().is_new_record);
        assert_eq!(app.record_line(), None);

        app.handle_action(GameAction::Restart);
        assert_eq!(app.scene(), Scene::Playing);
        assert_eq!(app.result(), None);
        assert_eq!(app.game().score(), 0);

        app.handle_action(GameAction::Title);
        assert_eq!(app.scene(), Scene::Title);
        assert_eq!(app.game().phase(), Phase::Ready);
    }

    #[test]
    fn renders_every_scene() {
        let mut app = app(3);
        let view = GameView::default();
        let vp = Viewport::new(72, 24);
        let mut fb = FrameBuffer::new(0, 0);

        app.render_into(&view, vp, &mut fb);
        let title: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(title.contains("C A K E"));

        app.handle_action(GameAction::Tap);
        app.render_into(&view, vp, &mut fb);
        let playing: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(playing.contains("LAYERS"));
    }
}
