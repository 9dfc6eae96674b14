//! End-to-end engine scenarios driven by simulated buttons and time

use std::cell::Cell;
use std::rc::Rc;

use mint_core::input::ButtonPad;
use mint_core::{Activation, Button, Checkbox, Label, UiEngine, UiError, Widget, WidgetEvent, Window};
use mint_display::RecordingSurface;
use mint_hal::{ManualClock, ManualPin};

const FRAME_MS: u32 = 16;

struct Rig {
    pins: [ManualPin; 4],
    clock: ManualClock,
}

const PREV: usize = 0;
const NEXT: usize = 1;
const SELECT: usize = 2;
const BACK: usize = 3;

type Engine<'a> = UiEngine<RecordingSurface, ButtonPad<&'a ManualPin>, &'a ManualClock>;

impl Rig {
    fn new() -> Self {
        Self {
            pins: [ManualPin::new(), ManualPin::new(), ManualPin::new(), ManualPin::new()],
            clock: ManualClock::new(1_000),
        }
    }

    fn engine(&self) -> Engine<'_> {
        let pad = ButtonPad::new(&self.pins[0], &self.pins[1], &self.pins[2], &self.pins[3]);
        let mut engine = UiEngine::new(RecordingSurface::new(), pad, &self.clock);
        engine.begin().unwrap();
        engine
    }

    /// Run frames for `ms` milliseconds, collecting activations
    fn run(&self, engine: &mut Engine<'_>, ms: u32) -> Vec<Activation> {
        let mut hits = Vec::new();
        let mut elapsed = 0;
        while elapsed < ms {
            self.clock.advance(FRAME_MS);
            elapsed += FRAME_MS;
            if let Some(hit) = engine.update().unwrap() {
                hits.push(hit);
            }
        }
        hits
    }

    /// Hold a button long enough to pass debounce, then release it
    fn tap(&self, engine: &mut Engine<'_>, button: usize) -> Vec<Activation> {
        self.pins[button].press();
        let hits = self.run(engine, 64);
        self.pins[button].release();
        let mut rest = self.run(engine, 64);
        let mut all = hits;
        all.append(&mut rest);
        all
    }
}

fn main_window() -> Window {
    let mut window = Window::new("A");
    window.add_widget(Label::new(4, 14, "Main menu")).unwrap();
    window
        .add_widget(Widget::from(Button::new(4, 28, 60, 14, "Open")).with_id("open"))
        .unwrap();
    window
        .add_widget(Widget::from(Checkbox::new(4, 46, "Sound")).with_id("sound"))
        .unwrap();
    window
}

fn detail_window() -> Window {
    let mut window = Window::new("B");
    window.add_widget(Label::new(4, 14, "Details")).unwrap();
    window
        .add_widget(Widget::from(Button::new(4, 28, 60, 14, "OK")).with_id("ok"))
        .unwrap();
    window
}

#[test]
fn test_push_push_pop_scenario() {
    let rig = Rig::new();
    let mut engine = rig.engine();

    engine.push_window(main_window()).unwrap();
    rig.run(&mut engine, 300);
    assert_eq!(engine.depth(), 1);
    assert!(!engine.current_window().unwrap().is_transitioning());
    assert_eq!(engine.surface().find_text("A"), Some((2, 1)));

    // Select on "Open" reports an activation the app answers with a push
    let hits = rig.tap(&mut engine, SELECT);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "open");
    assert_eq!(hits[0].event, WidgetEvent::Pressed);
    engine.push_window(detail_window()).unwrap();
    assert_eq!(engine.depth(), 2);

    // Mid-transition both windows are drawn, A at rest underneath
    rig.run(&mut engine, 32);
    assert!(engine.current_window().unwrap().is_transitioning());
    assert_eq!(engine.surface().find_text("A"), Some((2, 1)));
    assert!(engine.surface().find_text("B").is_some());

    // After the slide only B is drawn
    rig.run(&mut engine, 300);
    assert_eq!(engine.surface().find_text("B"), Some((2, 1)));
    assert_eq!(engine.surface().find_text("A"), None);

    // Back pops B after its slide-out
    rig.pins[BACK].press();
    rig.run(&mut engine, 48);
    assert!(engine.is_popping());
    assert_eq!(engine.depth(), 2);
    rig.pins[BACK].release();
    rig.run(&mut engine, 300);

    assert!(!engine.is_popping());
    assert_eq!(engine.depth(), 1);
    assert_eq!(engine.current_window().unwrap().title(), "A");
    assert_eq!(engine.surface().find_text("A"), Some((2, 1)));
    assert_eq!(engine.surface().find_text("B"), None);
}

#[test]
fn test_input_during_transition_is_discarded() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    engine.push_window(main_window()).unwrap();

    // Press and release entirely inside the 250 ms slide-in
    rig.pins[NEXT].press();
    rig.run(&mut engine, 64);
    rig.pins[NEXT].release();
    rig.run(&mut engine, 300);

    assert_eq!(engine.current_window().unwrap().focused_index(), Some(1));

    rig.tap(&mut engine, NEXT);
    assert_eq!(engine.current_window().unwrap().focused_index(), Some(2));
}

#[test]
fn test_focus_wraps_and_checkbox_toggles() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    engine.push_window(main_window()).unwrap();
    rig.run(&mut engine, 300);

    rig.tap(&mut engine, PREV);
    assert_eq!(engine.current_window().unwrap().focused_index(), Some(2));

    let hits = rig.tap(&mut engine, SELECT);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].event, WidgetEvent::Toggled(true));
    let sound = engine.current_window().unwrap().widget_by_id("sound").unwrap();
    assert!(sound.as_checkbox().unwrap().is_checked());

    let hits = rig.tap(&mut engine, SELECT);
    assert_eq!(hits[0].event, WidgetEvent::Toggled(false));
}

#[test]
fn test_callbacks_fire_on_select() {
    let rig = Rig::new();
    let mut engine = rig.engine();

    let presses = Rc::new(Cell::new(0u32));
    let counter = presses.clone();
    let mut window = Window::new("Cb");
    window
        .add_widget(Button::new(4, 20, 60, 14, "Go").on_press(move || counter.set(counter.get() + 1)))
        .unwrap();
    engine.push_window(window).unwrap();
    rig.run(&mut engine, 300);

    rig.tap(&mut engine, SELECT);
    rig.tap(&mut engine, SELECT);
    assert_eq!(presses.get(), 2);
}

#[test]
fn test_stack_capacity() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    for _ in 0..5 {
        engine.push_window(Window::new("W")).unwrap();
    }
    assert_eq!(engine.push_window(Window::new("X")), Err(UiError::StackFull));
    assert_eq!(engine.depth(), 5);
    assert_eq!(engine.current_window().unwrap().title(), "W");
}

#[test]
fn test_pop_refused_at_root() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    assert!(!engine.pop_window());

    engine.push_window(main_window()).unwrap();
    rig.run(&mut engine, 300);
    assert!(!engine.pop_window());

    rig.tap(&mut engine, BACK);
    assert_eq!(engine.depth(), 1);
    assert!(!engine.is_popping());
}

#[test]
fn test_double_pop_removes_one_window() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    engine.push_window(main_window()).unwrap();
    engine.push_window(detail_window()).unwrap();
    engine.push_window(Window::new("C")).unwrap();
    rig.run(&mut engine, 300);

    assert!(engine.pop_window());
    assert!(!engine.pop_window());
    rig.run(&mut engine, 300);
    assert_eq!(engine.depth(), 2);
    assert_eq!(engine.current_window().unwrap().title(), "B");
}

#[test]
fn test_bouncing_contact_fires_once() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    engine.push_window(main_window()).unwrap();
    rig.run(&mut engine, 300);

    // Contact chatter: every frame flips the level before it settles
    let mut hits = Vec::new();
    for level in [true, false, true, false, true] {
        rig.pins[SELECT].set_high(!level);
        hits.extend(rig.run(&mut engine, FRAME_MS));
    }
    hits.extend(rig.run(&mut engine, 100));
    rig.pins[SELECT].release();
    hits.extend(rig.run(&mut engine, 100));

    assert_eq!(hits.len(), 1);
}

#[test]
fn test_update_before_push_draws_nothing() {
    let rig = Rig::new();
    let mut engine = rig.engine();
    let frames = engine.surface().frames();
    rig.run(&mut engine, 100);
    assert_eq!(engine.surface().frames(), frames);
}
