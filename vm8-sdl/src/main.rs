use std::path::PathBuf;

use clap::Parser;

use vm8::constants::TIMER_FREQUENCY;

use crate::run::{Driver, Settings};

mod keymap;
mod run;
mod window;

/// Runs a Chip-8 ROM in an SDL2 window.
///
/// Keypad: 1234 / QWER / ASDF / ZXCV. Space suspends, Escape quits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Frames per second; one frame runs `steps_per_frame` instructions
    #[arg(short, long, default_value_t = TIMER_FREQUENCY, value_parser = clap::value_parser!(u32).range(1..))]
    frame_rate: u32,

    /// Instructions per frame; timers also tick once per instruction
    #[arg(short = 'n', long, default_value_t = 1)]
    steps_per_frame: u32,

    /// Screen pixels per Chip-8 pixel
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings {
        rom: args.rom,
        frame_rate: args.frame_rate,
        steps_per_frame: args.steps_per_frame,
        scale: args.scale,
    };
    let mut driver = Driver::new(&settings)?;
    driver.run()
}
