use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

use vm8::Engine;

use crate::keymap::keymap;
use crate::window::Window;

/// How the host paces and draws the machine
pub struct Settings {
    pub rom: PathBuf,
    pub frame_rate: u32,
    pub steps_per_frame: u32,
    pub scale: u32,
}

/// # Driver
/// Owns the engine together with its renderer and input source, and the loop that ties them together.
///
/// Every frame it:
/// - forwards keypad events to the engine
/// - steps the engine `steps_per_frame` times unless suspended
/// - renders the frame buffer if it changed
/// - sleeps out the rest of the frame
///
/// Space suspends or resumes stepping; Escape quits.
pub struct Driver {
    engine: Engine,
    window: Window,
    events: EventPump,
    frame_time: Duration,
    steps_per_frame: u32,
    suspended: bool,
    beeping: bool,
}

impl Driver {
    pub fn new(settings: &Settings) -> Result<Self> {
        let program = fs::read(&settings.rom)
            .with_context(|| format!("unable to read ROM {}", settings.rom.display()))?;
        let mut engine = Engine::default();
        engine.load_program(&program)?;

        let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
        let window = Window::new(&sdl, settings.scale)?;
        let events = sdl.event_pump().map_err(anyhow::Error::msg)?;

        Ok(Driver {
            engine,
            window,
            events,
            frame_time: Duration::from_nanos(1_000_000_000 / u64::from(settings.frame_rate)),
            steps_per_frame: settings.steps_per_frame,
            suspended: false,
            beeping: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut last_frame = Instant::now();

        'event: loop {
            for event in self.events.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'event,
                    Event::KeyDown {
                        keycode: Some(key),
                        repeat: false,
                        ..
                    } => match (key, keymap(key)) {
                        (_, Some(kc)) => self.engine.key_down(kc),
                        (Keycode::Space, _) => {
                            self.suspended = !self.suspended;
                            info!("{}", if self.suspended { "Suspended" } else { "Resumed" });
                        }
                        (Keycode::Escape, _) => break 'event,
                        _ => continue,
                    },
                    Event::KeyUp {
                        keycode: Some(key), ..
                    } => {
                        if let Some(kc) = keymap(key) {
                            self.engine.key_up(kc);
                        }
                    }
                    _ => continue,
                };
            }

            if !self.suspended {
                for _ in 0..self.steps_per_frame {
                    self.engine.step();
                }
            }

            if let Some(frame) = self.engine.take_frame() {
                self.window.render(&frame)?;
            }

            // no audio device; the tone is only reported
            if self.engine.sound_active() != self.beeping {
                self.beeping = !self.beeping;
                debug!("Tone {}", if self.beeping { "on" } else { "off" });
            }

            // Handle timing
            let elapsed = last_frame.elapsed();
            if self.frame_time > elapsed {
                std::thread::sleep(self.frame_time - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}
