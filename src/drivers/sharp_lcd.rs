// AttitudeWatch - Sharp Memory LCD Driver (LS013B7DH05, 144x168)
//
// The panel clocks data in LSB first; the SPI peripheral runs MSB first, so
// every byte is bit-reversed on the way out.  Chip select is active HIGH and
// driven by hand.  VCOM must be inverted periodically or the liquid crystal
// builds up a DC bias.

use esp_idf_hal::delay::Ets;
use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
use esp_idf_hal::spi::{SpiDeviceDriver, SpiDriver};

use attitude_watch::config::*;
use attitude_watch::gfx::Framebuffer;

const CMD_WRITE: u8 = 0x01;
const CMD_VCOM: u8 = 0x02;
const CMD_CLEAR: u8 = 0x04;

pub struct SharpLcd {
    spi: SpiDeviceDriver<'static, SpiDriver<'static>>,
    cs: PinDriver<'static, AnyOutputPin, Output>,
    disp: PinDriver<'static, AnyOutputPin, Output>,
    vcom: bool,
    buf: Vec<u8>,
}

impl SharpLcd {
    pub fn new(
        spi: SpiDeviceDriver<'static, SpiDriver<'static>>,
        cs: PinDriver<'static, AnyOutputPin, Output>,
        disp: PinDriver<'static, AnyOutputPin, Output>,
    ) -> Self {
        Self {
            spi,
            cs,
            disp,
            vcom: false,
            // command + per line (address + data + trailer) + final trailer
            buf: Vec::with_capacity(2 + SCREEN_HEIGHT as usize * (LINE_BYTES + 2)),
        }
    }

    /// Power the panel on and blank it.
    pub fn init(&mut self) -> anyhow::Result<()> {
        self.cs.set_low()?;
        self.disp.set_high()?;
        self.clear()?;
        log::info!("Memory LCD initialised ({}x{})", SCREEN_WIDTH, SCREEN_HEIGHT);
        Ok(())
    }

    fn vcom_bit(&self) -> u8 {
        if self.vcom {
            CMD_VCOM
        } else {
            0
        }
    }

    fn transfer(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.cs.set_high()?;
        Ets::delay_us(3); // tsSCS
        let result = self.spi.write(bytes);
        Ets::delay_us(1); // thSCS
        self.cs.set_low()?;
        result?;
        Ok(())
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        let cmd = [(CMD_CLEAR | self.vcom_bit()).reverse_bits(), 0];
        self.transfer(&cmd)
    }

    /// Flip VCOM with a display-mode command.  Call about once a second.
    pub fn toggle_vcom(&mut self) -> anyhow::Result<()> {
        self.vcom = !self.vcom;
        let cmd = [self.vcom_bit().reverse_bits(), 0];
        self.transfer(&cmd)
    }

    /// Write every line of `fb` in one transaction.
    pub fn flush(&mut self, fb: &Framebuffer) -> anyhow::Result<()> {
        let mut buf = core::mem::take(&mut self.buf);
        buf.clear();
        buf.push((CMD_WRITE | self.vcom_bit()).reverse_bits());
        for (y, row) in fb.rows().enumerate() {
            // Line addresses are 1-based.
            buf.push(((y + 1) as u8).reverse_bits());
            buf.extend(row.iter().map(|b| b.reverse_bits()));
            buf.push(0);
        }
        buf.push(0);

        let result = self.transfer(&buf);
        self.buf = buf;
        result
    }
}
