// AttitudeWatch - Hardware & System Configuration
// Target: Seeed Studio Xiao ESP32-C3 (RISC-V) + Sharp LS013B7DH05 memory LCD

// ---------------------------------------------------------------------------
// GPIO Pin Definitions (Xiao ESP32-C3 pinout)
// ---------------------------------------------------------------------------
pub const PIN_BUTTON_SELECT: i32 = 3; // D1 - Select button (INPUT_PULLUP, active LOW)
pub const PIN_BUTTON_UP: i32 = 4;     // D2 - Up button
pub const PIN_BUTTON_DOWN: i32 = 5;   // D3 - Down button
pub const PIN_I2C_SDA: i32 = 6;       // D4 - I2C data line
pub const PIN_I2C_SCL: i32 = 7;       // D5 - I2C clock line
pub const PIN_LCD_SCK: i32 = 8;       // D8 - SPI clock
pub const PIN_LCD_MOSI: i32 = 10;     // D10 - SPI data out
pub const PIN_LCD_CS: i32 = 20;       // D7 - LCD chip select (active HIGH)
pub const PIN_LCD_DISP: i32 = 21;     // D6 - LCD display enable

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_MPU6050: u8 = 0x68;
pub const I2C_BAUDRATE_KHZ: u32 = 400;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks

// ---------------------------------------------------------------------------
// Display (Sharp memory LCD, 1 bpp)
// ---------------------------------------------------------------------------
pub const SCREEN_WIDTH: u32 = 144;
pub const SCREEN_HEIGHT: u32 = 168;
pub const LINE_BYTES: usize = SCREEN_WIDTH as usize / 8; // 18
pub const DISPLAY_BUFFER_SIZE: usize = LINE_BYTES * SCREEN_HEIGHT as usize; // 3024
pub const LCD_SPI_BAUDRATE_MHZ: u32 = 2;

// ---------------------------------------------------------------------------
// Instrument tuning (visual parity depends on these exact values)
// ---------------------------------------------------------------------------
pub const INSTRUMENT_DIAMETER: u16 = 130;
pub const BORDER_WIDTH: u16 = 16;
pub const PITCH_SENSITIVITY: u16 = 10;  // milli-g per pixel of pitch offset
pub const ROLL_SCALE: i16 = 16;         // milli-g per degree of roll
pub const CROWN_APEX_INSET: i16 = 17;   // apex distance below the rim top
pub const CROWN_HALF_BASE: i16 = 5;
pub const CROWN_HEIGHT: i16 = 10;
pub const MASK_RING_OFFSET: u16 = 50;   // outer mask radius beyond the rim
pub const MASK_RING_STROKE: u16 = 100;

// ---------------------------------------------------------------------------
// Accelerometer feed
// ---------------------------------------------------------------------------
pub const ACCEL_SAMPLES_PER_UPDATE: u32 = 5;  // 50 ms boxcar at 100 Hz
pub const MAX_SAMPLES_PER_UPDATE: u32 = 25;
pub const SHAKE_THRESHOLD_MG: i16 = 2000;

// ---------------------------------------------------------------------------
// Button demo text layer
// ---------------------------------------------------------------------------
pub const TEXT_LAYER_Y: i32 = 72;
pub const TEXT_LAYER_HEIGHT: u32 = 20;

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_SENSOR: usize = 4096;
pub const STACK_UI: usize = 12288;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const UI_POLL_INTERVAL_MS: u64 = 10;   // 100 Hz input poll / event drain
pub const DEBOUNCE_MS: u64 = 50;
pub const VCOM_TOGGLE_MS: u64 = 1000;      // memory LCD polarity inversion

// ---------------------------------------------------------------------------
// MPU6050 Sensor Scale Factors
// ---------------------------------------------------------------------------
pub const ACCEL_LSB_PER_G_4G: i32 = 8192;  // LSB/g at +-4 g
