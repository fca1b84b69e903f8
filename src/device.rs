//! Ccs811 device definitions
//!
//! Copyright 2019 Ryan Kurte


/// Ccs811 default I2C address
/// (ADDR pin low, 0x5B with ADDR pin high)
pub const DEFAULT_ADDRESS: u8 = 0x5A;

/// Expected contents of the HW_ID register
pub const HARDWARE_ID: u8 = 0x81;

/// Sequence written to APP_ERASE to arm an application firmware erase
pub const APP_ERASE_SEQUENCE: [u8; 4] = [0xE7, 0xA7, 0xE6, 0x09];

/// Sequence written to SW_RESET to reset the device into boot mode
pub const SW_RESET_SEQUENCE: [u8; 4] = [0x11, 0xE5, 0x72, 0x8A];

/// Number of retries allowed for the hardware ID read during a comms check
pub const COMMS_RETRIES: u8 = 10;

/// Delay between comms check retries in milliseconds
pub const COMMS_RETRY_DELAY_MS: u8 = 10;

/// Hysteresis applied by the device when eCO2 moves between threshold zones
pub const THRESHOLD_HYSTERESIS_PPM: u16 = 50;

/// Largest register payload (APP_DATA)
pub const MAX_PAYLOAD: usize = 9;

/// Ccs811 register map
/// Each register is selected by writing its one-byte address, followed by data for writes
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[repr(u8)]
pub enum Register {
    /// Status flags (R, 1 byte)
    Status = 0x00,

    /// Measurement mode and interrupt configuration (R/W, 1 byte)
    MeasMode = 0x01,

    /// Algorithm results (R, up to 8 bytes)
    /// The first 4 bytes hold eTVOC and eCO2, followed by raw data, error and status in an 8 byte read
    AlgResultData = 0x02,

    /// Raw ADC reading and sensor current (R, 2 bytes)
    RawData = 0x03,

    /// Humidity and temperature compensation (W, 4 bytes)
    EnvData = 0x05,

    /// eCO2 interrupt thresholds (W, 4 bytes)
    Thresholds = 0x10,

    /// Encoded baseline (R/W, 2 bytes)
    Baseline = 0x11,

    /// Hardware ID, always 0x81 (R, 1 byte)
    HwId = 0x20,

    /// Hardware version (R, 1 byte)
    HwVersion = 0x21,

    /// Boot firmware version (R, 2 bytes)
    FwBootVersion = 0x23,

    /// Application firmware version (R, 2 bytes)
    FwAppVersion = 0x24,

    /// Internal state (R, 1 byte)
    InternalState = 0xA0,

    /// Error source flags (R, 1 byte)
    ErrorId = 0xE0,

    /// Application erase, requires the 4 byte erase sequence (W)
    AppErase = 0xF1,

    /// Application firmware data (W, 9 bytes)
    AppData = 0xF2,

    /// Application verify trigger (W)
    AppVerify = 0xF3,

    /// Application start trigger (W)
    AppStart = 0xF4,

    /// Software reset, requires the 4 byte reset sequence (W)
    SwReset = 0xFF,
}
