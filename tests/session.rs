use std::cell::RefCell;
use std::rc::Rc;

use bee_flap::consts::SCORE_KEY;
use bee_flap::sim::{GameEvent, GameStatus, UnitRandom};
use bee_flap::{GameConfig, MemoryStorage, Profile, Session, SoundCue, SoundSink, Storage};

/// Replays a fixed list of samples
struct Scripted {
    values: Vec<f32>,
    next: usize,
}

impl Scripted {
    fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl UnitRandom for Scripted {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<SoundCue>>>);

impl SoundSink for Recorder {
    fn play(&mut self, cue: SoundCue) {
        self.0.borrow_mut().push(cue);
    }
}

// Portrait 1000x2000 field; a 0.875 sample puts every gap top at y=875,
// just above the bee's starting height
fn portrait_session(storage: MemoryStorage) -> Session<MemoryStorage> {
    let config = GameConfig::new(Profile::Android, 1000.0, 2000.0);
    Session::with_random(config, storage, Box::new(Scripted::new(&[0.875])))
}

/// Flap whenever the bee sinks past y=1020, keeping it inside the gaps
fn hover(session: &mut Session<MemoryStorage>) {
    if session.state().bee.pos.y > 1020.0 {
        session.jump();
    }
}

#[test]
fn test_portrait_spawn_density() {
    let mut session = portrait_session(MemoryStorage::new());
    session.start();
    session.tick();

    let pipe_width = session.config().pipe_width;
    assert_eq!(session.state().pipes.len(), 1);
    assert_eq!(session.state().pipes[0].x, 1000.0 + pipe_width);

    let threshold = session.config().screen_width / 2.0;
    while session.state().pipes[0].x >= threshold {
        assert_eq!(session.state().pipes.len(), 1);
        hover(&mut session);
        assert_eq!(session.tick(), GameStatus::Started);
    }
    assert_eq!(session.state().pipes.len(), 2);
    assert_eq!(session.state().pipes[1].x, 1000.0 + pipe_width);
}

#[test]
fn test_full_run_completes_and_saves_best() {
    let mut storage = MemoryStorage::new();
    storage.put_int(SCORE_KEY, 3);
    let recorder = Recorder::default();
    let mut session = portrait_session(storage).with_sound(recorder.clone());

    session.start();
    let mut events = session.drain_events();
    for _ in 0..5000 {
        hover(&mut session);
        let status = session.tick();
        events.extend(session.drain_events());
        if status.is_finished() {
            break;
        }
    }

    assert_eq!(session.status(), GameStatus::Completed);
    assert_eq!(session.state().score, 5);
    assert_eq!(session.state().level, 5);
    assert_eq!(session.state().best_score, 5);
    assert_eq!(session.storage().get_int(SCORE_KEY, 0), 5);

    let level_ups = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
        .count();
    assert_eq!(level_ups, 4);
    assert!(events.contains(&GameEvent::NewBestScore { score: 5 }));

    let cues = recorder.0.borrow();
    assert_eq!(cues.first(), Some(&SoundCue::GameLoop));
    assert_eq!(cues.last(), Some(&SoundCue::LevelComplete));
    assert!(cues.contains(&SoundCue::Jump));
}

#[test]
fn test_game_over_keeps_higher_best() {
    let mut storage = MemoryStorage::new();
    storage.put_int(SCORE_KEY, 3);
    let recorder = Recorder::default();
    let mut session = portrait_session(storage).with_sound(recorder.clone());

    session.start();
    // No flapping: the bee drops out of the bottom
    let mut ticks = 0;
    while session.tick() == GameStatus::Started {
        ticks += 1;
        assert!(ticks < 1000, "bee never fell out");
    }

    assert_eq!(session.status(), GameStatus::Over);
    assert_eq!(session.state().best_score, 3);
    assert_eq!(session.storage().get_int(SCORE_KEY, 0), 3);
    assert_eq!(recorder.0.borrow().last(), Some(&SoundCue::GameOver));
    assert!(recorder.0.borrow().contains(&SoundCue::Falling));

    // Jumping is ignored after the run ended
    assert!(!session.jump());

    session.restart();
    let state = session.state();
    assert_eq!(state.status, GameStatus::Started);
    assert_eq!(state.score, 0);
    assert_eq!(state.level, 1);
    assert!(state.pipes.is_empty());
    assert_eq!(state.bee.pos.y, 1000.0);
    assert_eq!(state.velocity, 0.0);
    assert_eq!(state.best_score, 3);
}

#[test]
fn test_muted_session_plays_nothing() {
    let recorder = Recorder::default();
    let mut session = portrait_session(MemoryStorage::new()).with_sound(recorder.clone());
    session.set_sound_enabled(false);
    recorder.0.borrow_mut().clear();

    session.start();
    session.jump();
    for _ in 0..10 {
        session.tick();
    }
    assert!(recorder.0.borrow().is_empty());
    // Events still reach the host
    assert!(session.drain_events().contains(&GameEvent::Jumped));
}

#[test]
fn test_zero_sized_session_waits_for_layout() {
    let mut session = Session::new(GameConfig::default(), MemoryStorage::new(), 3);
    session.start();
    for _ in 0..100 {
        assert_eq!(session.tick(), GameStatus::Started);
    }
    assert!(session.state().pipes.is_empty());

    session.resize(1000.0, 2000.0);
    assert_eq!(session.status(), GameStatus::Idle);
    session.start();
    session.tick();
    assert_eq!(session.state().pipes.len(), 1);
}
