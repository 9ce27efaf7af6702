#![no_std]
#![no_main]

use embedded_hal::delay::DelayNs;
use esp_backtrace as _;
use esp_hal::entry;
use fugit::MillisDurationU32;
use ledcube_util::{Cube, Error, EXTENT};

mod driver;

const LETTER_HOLD: MillisDurationU32 = MillisDurationU32::from_ticks(600);

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    log::info!("Starting");

    let (mut cube, mut delay) = driver::init();

    loop {
        if let Err(err) = cube.write_text("hello world", LETTER_HOLD, 255) {
            log::error!("Text failed: {}", err);
        }
        pulse(&mut cube, &mut delay);
        if let Err(err) = rain(&mut cube, &mut delay, 64) {
            log::error!("Rain failed: {}", err);
        }
        if let Err(err) = cube.print_all_symbols() {
            log::error!("Symbols failed: {}", err);
        }
    }
}

fn pulse<D: DelayNs>(cube: &mut Cube<'_, D>, delay: &mut impl DelayNs) {
    for value in (0..=255u8).step_by(5).chain((0..=255u8).rev().step_by(5)) {
        cube.fill(value);
        cube.swap();
        delay.delay_ms(20);
    }
}

// Every layer falls one step per frame, fresh drops appear on top.
fn rain<D: DelayNs>(cube: &mut Cube<'_, D>, delay: &mut impl DelayNs, frames: usize) -> Result<(), Error> {
    for frame in 0..frames {
        for x in 0..EXTENT {
            for y in 0..EXTENT {
                for z in 0..EXTENT - 1 {
                    cube.copy((x, y, z), (x, y, z + 1))?;
                }
                let drop = (x * 7 + y * 3 + frame) % 5 == 0;
                cube.write(x, y, EXTENT - 1, if drop { 255 } else { 0 })?;
            }
        }
        cube.swap();
        delay.delay_ms(80);
    }
    Ok(())
}
