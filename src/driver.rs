use core::cell::RefCell;
use critical_section::Mutex;
use esp_hal::{
    clock::ClockControl,
    delay::Delay,
    gpio::{AnyOutput, Io, Level},
    interrupt::{self, Priority},
    peripherals::{Interrupt, Peripherals, TIMG0},
    prelude::*,
    system::SystemControl,
    timer::timg::{Timer, Timer0, TimerGroup},
};
use fugit::MicrosDurationU64;
use ledcube_util::{Cube, Polarity, Refresher, SharedFrameBuffer, TICK_PERIOD};

type Pin = AnyOutput<'static>;

static TIMER0: Mutex<RefCell<Option<Timer<Timer0<TIMG0>, esp_hal::Blocking>>>> = Mutex::new(RefCell::new(None));
static REFRESHER: Mutex<RefCell<Option<Refresher<Pin, Delay>>>> = Mutex::new(RefCell::new(None));

static FRAME_BUFFER: SharedFrameBuffer = SharedFrameBuffer::new();

/// Sets up the cube pins and starts the refresh timer. Returns the drawing
/// handle and a spare delay for the caller's own pacing.
pub fn init() -> (Cube<'static, Delay>, Delay) {
    let peripherals = Peripherals::take();
    let system = SystemControl::new(peripherals.SYSTEM);
    let clocks = ClockControl::max(system.clock_control).freeze();

    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    // Columns are shared by every layer, indexed [x][y].
    let columns: [[Pin; 4]; 4] = [
        [
            AnyOutput::new(io.pins.gpio1, Level::Low),
            AnyOutput::new(io.pins.gpio2, Level::Low),
            AnyOutput::new(io.pins.gpio4, Level::Low),
            AnyOutput::new(io.pins.gpio5, Level::Low),
        ],
        [
            AnyOutput::new(io.pins.gpio6, Level::Low),
            AnyOutput::new(io.pins.gpio7, Level::Low),
            AnyOutput::new(io.pins.gpio8, Level::Low),
            AnyOutput::new(io.pins.gpio9, Level::Low),
        ],
        [
            AnyOutput::new(io.pins.gpio10, Level::Low),
            AnyOutput::new(io.pins.gpio11, Level::Low),
            AnyOutput::new(io.pins.gpio12, Level::Low),
            AnyOutput::new(io.pins.gpio13, Level::Low),
        ],
        [
            AnyOutput::new(io.pins.gpio14, Level::Low),
            AnyOutput::new(io.pins.gpio15, Level::Low),
            AnyOutput::new(io.pins.gpio16, Level::Low),
            AnyOutput::new(io.pins.gpio17, Level::Low),
        ],
    ];
    let layers: [Pin; 4] = [
        AnyOutput::new(io.pins.gpio18, Level::Low),
        AnyOutput::new(io.pins.gpio21, Level::Low),
        AnyOutput::new(io.pins.gpio38, Level::Low),
        AnyOutput::new(io.pins.gpio39, Level::Low),
    ];

    let delay = Delay::new(&clocks);
    let refresher = match Refresher::new(columns, layers, delay, Polarity::default()) {
        Ok(refresher) => refresher,
        Err(never) => match never {},
    };

    let timg0 = TimerGroup::new(peripherals.TIMG0, &clocks);
    let timer0 = timg0.timer0;
    timer0.set_interrupt_handler(refresh_interrupt);

    critical_section::with(|cs| {
        REFRESHER.borrow_ref_mut(cs).replace(refresher);

        timer0.load_value(tick()).unwrap();
        timer0.start();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });
    interrupt::enable(Interrupt::TG0_T0_LEVEL, Priority::Priority1).unwrap();

    log::info!("Refreshing one layer every {} us", TICK_PERIOD.ticks());

    (Cube::new(&FRAME_BUFFER, delay), delay)
}

fn tick() -> MicrosDurationU64 {
    (TICK_PERIOD.ticks() as u64).micros()
}

#[handler]
fn refresh_interrupt() {
    critical_section::with(|cs| {
        if let Some(refresher) = REFRESHER.borrow_ref_mut(cs).as_mut() {
            // Pins are infallible; a late or missed tick only shows as flicker.
            let _ = refresher.refresh(&FRAME_BUFFER);
        }

        if let Some(timer0) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer0.clear_interrupt();
            let _ = timer0.load_value(tick());
            timer0.start();
        }
    });
}
