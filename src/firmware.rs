// AttitudeWatch - Firmware Boot
//
// Boot sequence:
//   1. Take peripherals; bring up the I2C bus, SPI bus and button GPIOs.
//   2. Initialise the memory LCD.
//   3. Run the MPU6050 self-test.
//   4. Spawn the sensor task and the UI task (the cooperative event loop).

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use embedded_graphics::geometry::Size;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, IOPin, OutputPin, PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::prelude::*;
use esp_idf_hal::spi::config::Config as SpiConfig;
use esp_idf_hal::spi::{SpiDeviceDriver, SpiDriver, SpiDriverConfig};

use attitude_watch::config::*;
use attitude_watch::{app, Window};

use crate::drivers::imu::Mpu6050;
use crate::drivers::sharp_lcd::SharpLcd;
use crate::tasks;

pub fn boot() -> anyhow::Result<()> {
    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // Buttons (pull-up, active LOW): Select, Up, Down.
    let mut select = PinDriver::input(peripherals.pins.gpio3.downgrade())?;
    let mut up = PinDriver::input(peripherals.pins.gpio4.downgrade())?;
    let mut down = PinDriver::input(peripherals.pins.gpio5.downgrade())?;
    for button in [&mut select, &mut up, &mut down] {
        button.set_pull(Pull::Up)?;
    }

    // ---- I2C bus (MPU6050) ------------------------------------------------
    let i2c_config = I2cConfig::new().baudrate(I2C_BAUDRATE_KHZ.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio6, // SDA
        peripherals.pins.gpio7, // SCL
        &i2c_config,
    )?;

    // ---- SPI bus (memory LCD) ---------------------------------------------
    let spi_driver = SpiDriver::new(
        peripherals.spi2,
        peripherals.pins.gpio8,  // SCK
        peripherals.pins.gpio10, // MOSI
        Option::<AnyIOPin>::None,
        &SpiDriverConfig::new(),
    )?;
    let spi = SpiDeviceDriver::new(
        spi_driver,
        Option::<AnyOutputPin>::None, // CS is active HIGH, driven by SharpLcd
        &SpiConfig::new().baudrate(LCD_SPI_BAUDRATE_MHZ.MHz().into()),
    )?;
    let cs = PinDriver::output(peripherals.pins.gpio20.downgrade_output())?;
    let disp = PinDriver::output(peripherals.pins.gpio21.downgrade_output())?;

    let mut display = SharpLcd::new(spi, cs, disp);
    display.init()?;

    // ---- Component self-test ----------------------------------------------
    let mut imu = Mpu6050::new(i2c);
    if !imu.is_connected() {
        log::error!("Boot check FAILED - MPU6050 not responding");
        // Continue anyway so we can still debug via serial.
    }

    // ---- Channels & window ------------------------------------------------
    let (ui_tx, ui_rx) = mpsc::channel();
    let mut window = Window::new(app::default_app(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    // Loading here lets the sensor task run at the rate the app subscribed with.
    window.load();
    let rate = window.sampling_rate().unwrap_or_default();

    // ---- Spawn tasks (map to FreeRTOS tasks via std::thread) ---------------

    // Sensor task - tightest timing.
    let sensor_tx = ui_tx.clone();
    thread::Builder::new()
        .name("sensor".into())
        .stack_size(STACK_SENSOR)
        .spawn(move || {
            tasks::sensor::sensor_task(imu, rate, sensor_tx);
        })?;

    // UI task (window + display + buttons)
    thread::Builder::new()
        .name("ui".into())
        .stack_size(STACK_UI)
        .spawn(move || {
            tasks::ui::ui_task(window, display, [select, up, down], ui_rx, ui_tx);
        })?;

    log::info!("Boot complete - entering normal operation");

    // Main thread has nothing left to do - park it forever.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
