pub mod imu;
pub mod sharp_lcd;
