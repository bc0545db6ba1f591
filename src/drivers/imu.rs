// AttitudeWatch - MPU6050 Accelerometer Driver
//
// Custom register-level driver over I2C.
// Avoids external crate version conflicts with esp-idf-hal.
// Only the accelerometer is used; readings are converted to milli-g.

use esp_idf_hal::i2c::I2cDriver;

use attitude_watch::config::*;
use attitude_watch::RawSample;

// MPU6050 register addresses
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_CONFIG: u8 = 0x1A;
const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_XOUT_H: u8 = 0x3B; // Start of 6-byte accel burst
const REG_WHO_AM_I: u8 = 0x75;
const WHO_AM_I_EXPECTED: u8 = 0x68;

pub struct Mpu6050 {
    bus: I2cDriver<'static>,
}

impl Mpu6050 {
    pub fn new(bus: I2cDriver<'static>) -> Self {
        Self { bus }
    }

    /// Verify the device is reachable on the I2C bus.
    pub fn is_connected(&mut self) -> bool {
        let mut buf = [0u8; 1];
        match self
            .bus
            .write_read(I2C_ADDR_MPU6050, &[REG_WHO_AM_I], &mut buf, I2C_TIMEOUT_TICKS)
        {
            Ok(()) => buf[0] == WHO_AM_I_EXPECTED,
            Err(_) => false,
        }
    }

    /// Wake the sensor and configure accel (+-4 g), DLPF 44 Hz.
    pub fn init(&mut self) -> anyhow::Result<()> {
        // Wake up (clear SLEEP bit)
        self.bus
            .write(I2C_ADDR_MPU6050, &[REG_PWR_MGMT_1, 0x00], I2C_TIMEOUT_TICKS)?;

        // DLPF bandwidth 44 Hz (below Nyquist at 100 Hz sampling)
        self.bus
            .write(I2C_ADDR_MPU6050, &[REG_CONFIG, 0x03], I2C_TIMEOUT_TICKS)?;

        // Accelerometer: +-4 g
        self.bus
            .write(I2C_ADDR_MPU6050, &[REG_ACCEL_CONFIG, 0x08], I2C_TIMEOUT_TICKS)?;

        log::info!("MPU6050 initialised (+-4g, DLPF 44Hz)");
        Ok(())
    }

    /// Burst-read the three accelerometer axes, in milli-g.
    pub fn read_accel(&mut self) -> anyhow::Result<RawSample> {
        let mut raw = [0u8; 6];
        self.bus.write_read(
            I2C_ADDR_MPU6050,
            &[REG_ACCEL_XOUT_H],
            &mut raw,
            I2C_TIMEOUT_TICKS,
        )?;

        let milli_g = |hi: u8, lo: u8| {
            (i16::from_be_bytes([hi, lo]) as i32 * 1000 / ACCEL_LSB_PER_G_4G) as i16
        };
        Ok(RawSample {
            x: milli_g(raw[0], raw[1]),
            y: milli_g(raw[2], raw[3]),
            z: milli_g(raw[4], raw[5]),
        })
    }
}
