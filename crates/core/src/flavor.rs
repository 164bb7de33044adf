//! Announcer lines shown (or spoken) alongside landing events.
//!
//! Purely cosmetic. The picker owns its own [`SimpleRng`] and never touches
//! the game state, so the landing resolver stays deterministic.

use crate::events::GameEvent;
use crate::rng::SimpleRng;
use crate::types::{LandingKind, COMBO_FLAVOR_MIN};

const PERFECT: &[&str] = &["Perfect!", "Flawless!", "Beautiful!", "Amazing!"];
const PERFECT_COMBO: &[&str] = &["Genius patissier!", "Divine technique!", "Pure art!"];
const MILESTONE_10: &[&str] = &["What a tower!", "10 layers!"];
const MILESTONE_20: &[&str] = &["Record-breaking!", "20 layers!"];
const MILESTONE_30: &[&str] = &["Legendary patissier!", "30 layers! Unbelievable!"];
const GAME_OVER: &[&str] = &["Oops... still looks tasty!", "Never mind!", "Try again!"];
const NEW_RECORD: &[&str] = &["You did it! New best!", "Congrats on the new record!"];

#[derive(Debug, Clone, Default)]
pub struct FlavorPicker {
    rng: SimpleRng,
}

impl FlavorPicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Line for an event, if the event deserves one.
    pub fn line_for(&mut self, event: &GameEvent) -> Option<&'static str> {
        let pool = match event {
            GameEvent::Landed(e) if e.kind == LandingKind::Perfect => {
                if e.combo >= COMBO_FLAVOR_MIN {
                    PERFECT_COMBO
                } else {
                    PERFECT
                }
            }
            GameEvent::Milestone(10) => MILESTONE_10,
            GameEvent::Milestone(20) => MILESTONE_20,
            GameEvent::Milestone(_) => MILESTONE_30,
            GameEvent::GameOver { .. } => GAME_OVER,
            _ => return None,
        };
        self.rng.pick(pool).copied()
    }

    pub fn new_record(&mut self) -> &'static str {
        self.rng.pick(NEW_RECORD).copied().unwrap_or("New best!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LandingEvent;
    use crate::types::Cue;

    fn landed(kind: LandingKind, combo: u32) -> GameEvent {
        GameEvent::Landed(LandingEvent {
            kind,
            drop_x: 360.0,
            drop_y: 1070.0,
            overlap: 400.0,
            placed: None,
            cut: None,
            combo,
            score: 1,
        })
    }

    #[test]
    fn perfect_lines_switch_with_combo() {
        let mut picker = FlavorPicker::new(3);
        let line = picker.line_for(&landed(LandingKind::Perfect, 1)).unwrap();
        assert!(PERFECT.contains(&line));
        let line = picker.line_for(&landed(LandingKind::Perfect, 5)).unwrap();
        assert!(PERFECT_COMBO.contains(&line));
    }

    #[test]
    fn partial_and_cues_are_silent() {
        let mut picker = FlavorPicker::new(3);
        assert_eq!(picker.line_for(&landed(LandingKind::Partial, 0)), None);
        assert_eq!(picker.line_for(&GameEvent::Cue(Cue::Start)), None);
    }

    #[test]
    fn milestones_and_game_over() {
        let mut picker = FlavorPicker::new(3);
        let line = picker.line_for(&GameEvent::Milestone(20)).unwrap();
        assert!(MILESTONE_20.contains(&line));
        let line = picker.line_for(&GameEvent::GameOver { score: 4 }).unwrap();
        assert!(GAME_OVER.contains(&line));
        assert!(NEW_RECORD.contains(&picker.new_record()));
    }

    #[test]
    fn same_seed_same_lines() {
        let mut a = FlavorPicker::new(11);
        let mut b = FlavorPicker::new(11);
        for _ in 0..20 {
            let e = landed(LandingKind::Perfect, 1);
            assert_eq!(a.line_for(&e), b.line_for(&e));
        }
    }
}
