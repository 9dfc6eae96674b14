//! UI engine
//!
//! Owns the display surface, the input source, the clock and the window
//! stack, and runs one frame per [`UiEngine::update`] call:
//!
//! 1. advance every animation to the current time
//! 2. remove a popped window whose slide-out has finished
//! 3. poll input and dispatch it to the active window
//! 4. redraw and flush
//!
//! Input is polled every frame so debounce state keeps tracking the
//! buttons, but events are discarded while the active window is sliding.

use mint_display::{DisplayError, InputSource, NavigationEvent, Surface};
use mint_hal::Clock;

use crate::config::EngineConfig;
use crate::error::{ConfigError, UiError};
use crate::window::{Activation, Slide, Window, WindowStack};

pub struct UiEngine<S, I, C> {
    surface: S,
    input: I,
    clock: C,
    stack: WindowStack,
    config: EngineConfig,
}

impl<S: Surface, I: InputSource, C: Clock> UiEngine<S, I, C> {
    /// Engine with the default configuration
    pub fn new(surface: S, input: I, clock: C) -> Self {
        Self::build(surface, input, clock, EngineConfig::default())
    }

    /// Engine with a validated configuration
    pub fn with_config(
        surface: S,
        input: I,
        clock: C,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(surface, input, clock, config))
    }

    fn build(surface: S, mut input: I, clock: C, config: EngineConfig) -> Self {
        let (width, _) = surface.pixel_dimensions();
        let slide = Slide {
            distance: i32::from(width),
            duration_ms: config.slide_duration_ms,
        };
        input.set_debounce_ms(config.debounce_ms);

        Self {
            surface,
            input,
            clock,
            stack: WindowStack::new(config.max_windows).with_slide(slide, config.slide_from_right),
            config,
        }
    }

    /// Bring up the display and input, leaving a blank screen
    pub fn begin(&mut self) -> Result<(), DisplayError> {
        let now = self.clock.now_ms();
        self.input.begin(now);
        self.surface.init()?;
        self.surface.clear()?;
        self.surface.flush()?;
        info!("UI engine started");
        Ok(())
    }

    /// Push a window; it slides in and becomes active
    pub fn push_window(&mut self, window: Window) -> Result<(), UiError> {
        let now = self.clock.now_ms();
        if self.stack.is_popping() {
            debug!("push while popping, finishing pop");
        }
        self.stack.push(window, now)?;
        if let Some(top) = self.stack.top() {
            info!("window '{}' pushed (depth {})", top.title(), self.stack.len());
        }
        Ok(())
    }

    /// Request a pop of the active window
    ///
    /// The window slides out and is removed on a later frame. Returns false
    /// when the root window is active or a pop is already pending.
    pub fn pop_window(&mut self) -> bool {
        let now = self.clock.now_ms();
        let accepted = self.stack.request_pop(now);
        if accepted {
            debug!("pop requested (depth {})", self.stack.len());
        }
        accepted
    }

    /// Run one frame
    ///
    /// Returns the activation caused by a select press, if any. A no-op
    /// when no window has been pushed.
    pub fn update(&mut self) -> Result<Option<Activation>, DisplayError> {
        if self.stack.is_empty() {
            return Ok(None);
        }
        let now = self.clock.now_ms();

        self.stack.tick(now);
        if let Some(window) = self.stack.finish_pop() {
            info!("window '{}' popped (depth {})", window.title(), self.stack.len());
        }

        let activation = self.dispatch_input(now);
        self.render(now)?;
        Ok(activation)
    }

    fn dispatch_input(&mut self, now_ms: u32) -> Option<Activation> {
        let mut activation = None;

        for event in self.input.poll(now_ms) {
            let depth = self.stack.len();
            let Some(window) = self.stack.top_mut() else {
                break;
            };
            if window.is_transitioning() {
                trace!("input ignored during transition");
                continue;
            }

            match event {
                NavigationEvent::Previous => {
                    window.focus_previous();
                }
                NavigationEvent::Next => {
                    window.focus_next();
                }
                NavigationEvent::Select => {
                    if let Some(hit) = window.click_focused(now_ms) {
                        debug!("activated widget {}", hit.index);
                        activation = Some(hit);
                    }
                }
                NavigationEvent::Back => {
                    if depth > 1 {
                        self.stack.request_pop(now_ms);
                    }
                }
            }
        }

        activation
    }

    fn render(&mut self, now_ms: u32) -> Result<(), DisplayError> {
        self.surface.clear()?;

        if let Some(top) = self.stack.top() {
            // The window beneath stays at rest while the active one slides
            if top.is_transitioning() {
                if let Some(beneath) = self.stack.beneath() {
                    beneath.draw(&mut self.surface, 0, 0, now_ms)?;
                }
            }
            top.draw(&mut self.surface, 0, 0, now_ms)?;
        }

        self.surface.flush()
    }

    pub fn current_window(&self) -> Option<&Window> {
        self.stack.top()
    }

    pub fn current_window_mut(&mut self) -> Option<&mut Window> {
        self.stack.top_mut()
    }

    /// Number of windows on the stack, including one that is popping
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_popping(&self) -> bool {
        self.stack.is_popping()
    }

    pub fn stack(&self) -> &WindowStack {
        &self.stack
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Tear down, returning the owned peripherals
    pub fn release(self) -> (S, I, C) {
        (self.surface, self.input, self.clock)
    }
}
