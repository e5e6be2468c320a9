/// Registers described in the data sheet for this device
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum Register {
    INTR_STATUS_1 = 0x00,
    INTR_STATUS_2 = 0x01,
    INTR_ENABLE_1 = 0x02,
    INTR_ENABLE_2 = 0x03,
    FIFO_WR_PTR = 0x04,     // FIFO_WR_PTR[4:0]
    OVF_COUNTER = 0x05,     // OVF_COUNTER[4:0]
    FIFO_RD_PTR = 0x06,     // FIFO_RD_PTR[4:0]
    FIFO_DATA = 0x07,       // read pointer auto-increments on each access
    FIFO_CONFIG = 0x08,
    MODE_CONFIG = 0x09,
    SPO2_CONFIG = 0x0A,
    LED1_PA = 0x0C,         // red
    LED2_PA = 0x0D,
    PILOT_PA = 0x10,
    MULTI_LED_CTRL1 = 0x11,
    MULTI_LED_CTRL2 = 0x12,
    TEMP_INTR = 0x13,
    TEMP_FRAC = 0x14,
    TEMP_CONFIG = 0x15,
    PROX_INT_THRESH = 0x16,
    REV_ID = 0xFE,
    PART_ID = 0xFF,         // s/b 0x15
}

/// Values written to the MODE_CONFIG Register (0x09)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum ModeConfig {
    /// Red and IR
    SpO2 = 0x03,
    /// Reset all configuration, threshold and data registers to power-on state.
    /// The bit clears itself once the reset completes.
    Reset = 0x40,
}

/// Fields from INTR_ENABLE_1 Register (0x02)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum InterruptEnable1Field {
    /// FIFO almost full
    A_FULL_EN = 1 << 7,
    /// New FIFO data ready
    PPG_RDY_EN = 1 << 6,
}

/// Fields from FIFO_CONFIG Register (0x08)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum FifoConfigField {
    /// Free slots remaining when the almost-full interrupt fires
    FIFO_A_FULL = 0b1111,
}

/// Field settings for SPO2_CONFIG Register (0x0A)
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum SpO2ConfigField {
    /// SPO2_ADC_RGE: 4096nA full scale
    ADC_RGE_4096 = 0b01 << 5,
    /// SPO2_SR: 100 samples per second
    SR_100 = 0b001 << 2,
    /// LED_PW: 411us, 18 bit ADC resolution
    LED_PW_411 = 0b11,
}

/// INTR_ENABLE_1: almost-full and data-ready interrupts
pub const SETUP_INTR_ENABLE_1: u8 =
    InterruptEnable1Field::A_FULL_EN as u8 | InterruptEnable1Field::PPG_RDY_EN as u8;
/// INTR_ENABLE_2: die temperature interrupt off
pub const SETUP_INTR_ENABLE_2: u8 = 0x00;
/// sample avg = 1, fifo rollover = false, fifo almost full = 0x0F
pub const SETUP_FIFO_CONFIG: u8 = FifoConfigField::FIFO_A_FULL as u8;
/// ADC range = 4096nA, sample rate = 100 Hz, pulse width = 411us
pub const SETUP_SPO2_CONFIG: u8 = SpO2ConfigField::ADC_RGE_4096 as u8
    | SpO2ConfigField::SR_100 as u8
    | SpO2ConfigField::LED_PW_411 as u8;
/// ~7mA
pub const SETUP_LED_PA: u8 = 0x24;
/// ~25mA
pub const SETUP_PILOT_PA: u8 = 0x7F;

/// Register writes that follow the soft reset during setup, in order
pub const SETUP_SEQUENCE: [(Register, u8); 11] = [
    (Register::INTR_ENABLE_1, SETUP_INTR_ENABLE_1),
    (Register::INTR_ENABLE_2, SETUP_INTR_ENABLE_2),
    // empty FIFO
    (Register::FIFO_WR_PTR, 0x00),
    (Register::OVF_COUNTER, 0x00),
    (Register::FIFO_RD_PTR, 0x00),
    (Register::FIFO_CONFIG, SETUP_FIFO_CONFIG),
    (Register::MODE_CONFIG, ModeConfig::SpO2 as u8),
    (Register::SPO2_CONFIG, SETUP_SPO2_CONFIG),
    (Register::LED1_PA, SETUP_LED_PA),
    (Register::LED2_PA, SETUP_LED_PA),
    (Register::PILOT_PA, SETUP_PILOT_PA),
];
