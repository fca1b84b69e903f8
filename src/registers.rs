//! Ccs811 register layouts
//!
//! Each register is described by a marker type implementing [`Reg`] (address and length),
//! with [`Readable`] and / or [`Writable`] providing the codec between wire bytes and values.
//! Multi-byte numeric values are big endian on the wire.
//!
//! Copyright 2019 Ryan Kurte

use crate::device::*;

/// Register descriptor, binds a register address to a fixed transfer length
pub trait Reg {
    const REGISTER: Register;
    const LEN: usize;
}

/// Register that may be read from the device
pub trait Readable: Reg {
    type Out;

    /// Decode a value from exactly `Self::LEN` bytes
    fn decode(data: &[u8]) -> Result<Self::Out, CodecError>;
}

/// Register that may be written to the device
pub trait Writable: Reg {
    type In;

    /// Encode a value into exactly `Self::LEN` bytes
    fn encode(value: &Self::In, data: &mut [u8]);
}

/// Register contents that cannot be represented as a typed value
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum CodecError {
    /// Drive mode field holds a reserved value (5..7)
    InvalidDriveMode(u8),
}

fn get_bit(v: u8, bit: u8) -> bool {
    v & (1 << bit) != 0
}

fn set_bit(v: &mut u8, bit: u8, value: bool) {
    if value {
        *v |= 1 << bit;
    } else {
        *v &= !(1 << bit);
    }
}

/// Firmware execution mode, reported by the status register
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FirmwareMode {
    /// Boot mode, accepts firmware updates and lifecycle triggers
    Boot = 0,
    /// Application mode, ready for measurements
    Application = 1,
}

/// Status register flags
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct StatusFlags {
    /// An I2C or sensor error occurred, the source is in the ERROR_ID register
    pub error: bool,
    /// A new sample is available in ALG_RESULT_DATA
    pub data_ready: bool,
    /// Valid application firmware is loaded
    pub app_valid: bool,
    /// Boot mode only, application verify completed successfully
    pub app_verified: bool,
    /// Boot mode only, application erase completed
    pub app_erased: bool,
    /// Firmware is in application mode
    pub app_mode: bool,
}

impl StatusFlags {
    pub fn from_bits(v: u8) -> Self {
        StatusFlags {
            error: get_bit(v, 0),
            data_ready: get_bit(v, 3),
            app_valid: get_bit(v, 4),
            app_verified: get_bit(v, 5),
            app_erased: get_bit(v, 6),
            app_mode: get_bit(v, 7),
        }
    }

    pub fn bits(&self) -> u8 {
        let mut v = 0;
        set_bit(&mut v, 0, self.error);
        set_bit(&mut v, 3, self.data_ready);
        set_bit(&mut v, 4, self.app_valid);
        set_bit(&mut v, 5, self.app_verified);
        set_bit(&mut v, 6, self.app_erased);
        set_bit(&mut v, 7, self.app_mode);
        v
    }

    /// Current firmware mode
    pub fn firmware_mode(&self) -> FirmwareMode {
        match self.app_mode {
            true => FirmwareMode::Application,
            false => FirmwareMode::Boot,
        }
    }
}

/// Measurement drive mode, selects the sampling cadence
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum DriveMode {
    /// Measurements disabled
    Idle = 0,
    /// Constant power, a measurement every second
    ConstantPower1s = 1,
    /// Pulse heating, a measurement every 10 seconds
    Pulse10s = 2,
    /// Low power pulse heating, a measurement every 60 seconds
    Pulse60s = 3,
    /// Constant power, raw data only every 250ms
    /// ALG_RESULT_DATA is not updated in this mode
    RawOnly250ms = 4,
}

impl DriveMode {
    pub fn from_bits(v: u8) -> Result<Self, CodecError> {
        match v {
            0 => Ok(DriveMode::Idle),
            1 => Ok(DriveMode::ConstantPower1s),
            2 => Ok(DriveMode::Pulse10s),
            3 => Ok(DriveMode::Pulse60s),
            4 => Ok(DriveMode::RawOnly250ms),
            _ => Err(CodecError::InvalidDriveMode(v)),
        }
    }
}

impl Default for DriveMode {
    fn default() -> Self {
        DriveMode::Idle
    }
}

/// Measurement mode configuration
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct MeasConfig {
    /// Only interrupt when eCO2 crosses a threshold zone (requires interrupt_data_ready)
    pub interrupt_threshold: bool,
    /// Assert nINT when new data is ready
    pub interrupt_data_ready: bool,
    /// Sampling mode
    pub drive_mode: DriveMode,
}

impl MeasConfig {
    pub fn from_bits(v: u8) -> Result<Self, CodecError> {
        Ok(MeasConfig {
            interrupt_threshold: get_bit(v, 2),
            interrupt_data_ready: get_bit(v, 3),
            drive_mode: DriveMode::from_bits((v >> 4) & 0x07)?,
        })
    }

    pub fn bits(&self) -> u8 {
        let mut v = (self.drive_mode as u8 & 0x07) << 4;
        set_bit(&mut v, 2, self.interrupt_threshold);
        set_bit(&mut v, 3, self.interrupt_data_ready);
        v
    }
}

/// Error source flags
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ErrorFlags {
    /// Write to an invalid register address
    pub write_reg_invalid: bool,
    /// Read from an invalid register address
    pub read_reg_invalid: bool,
    /// Unsupported drive mode requested
    pub meas_mode_invalid: bool,
    /// Sensor resistance out of range
    pub max_resistance: bool,
    /// Heater current out of range
    pub heater_fault: bool,
    /// Heater voltage not applied correctly
    pub heater_supply: bool,
}

impl ErrorFlags {
    pub fn from_bits(v: u8) -> Self {
        ErrorFlags {
            write_reg_invalid: get_bit(v, 0),
            read_reg_invalid: get_bit(v, 1),
            meas_mode_invalid: get_bit(v, 2),
            max_resistance: get_bit(v, 3),
            heater_fault: get_bit(v, 4),
            heater_supply: get_bit(v, 5),
        }
    }

    pub fn bits(&self) -> u8 {
        let mut v = 0;
        set_bit(&mut v, 0, self.write_reg_invalid);
        set_bit(&mut v, 1, self.read_reg_invalid);
        set_bit(&mut v, 2, self.meas_mode_invalid);
        set_bit(&mut v, 3, self.max_resistance);
        set_bit(&mut v, 4, self.heater_fault);
        set_bit(&mut v, 5, self.heater_supply);
        v
    }

    /// Check whether any fault is flagged
    pub fn any(&self) -> bool {
        self.bits() != 0
    }
}

/// eTVOC and eCO2 algorithm results
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct AirQuality {
    /// Equivalent total VOC in parts-per-billion (ppb)
    pub etvoc: u16,
    /// Equivalent CO2 in parts-per-million (ppm)
    pub eco2: u16,
}

/// Raw sensor reading
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct RawReading {
    /// 10-bit ADC reading of the sensor voltage (1023 = 1.65V)
    pub adc: u16,
    /// Current through the sensor in uA (0 - 63)
    pub current_ua: u8,
}

impl RawReading {
    fn decode(b: &[u8]) -> Self {
        let v = u16::from_be_bytes([b[0], b[1]]);
        RawReading {
            adc: v & 0x03FF,
            current_ua: (v >> 10) as u8,
        }
    }
}

/// Environmental compensation data in device fixed point (1/512 units)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Environment {
    /// Relative humidity in 1/512 %RH
    pub humidity: u16,
    /// Temperature relative to 25C in 1/512 C
    pub temperature: i16,
}

impl Environment {
    /// Convert a temperature (C) and relative humidity (%) to device fixed point
    /// Values outside the representable range saturate
    pub fn new(temperature: f32, humidity: f32) -> Self {
        Environment {
            humidity: (humidity * 512.0).round() as u16,
            temperature: ((temperature - 25.0) * 512.0).round() as i16,
        }
    }

    /// Temperature in degrees celsius
    pub fn temperature_c(&self) -> f32 {
        self.temperature as f32 / 512.0 + 25.0
    }

    /// Relative humidity in %
    pub fn humidity_pct(&self) -> f32 {
        self.humidity as f32 / 512.0
    }
}

/// eCO2 thresholds for zone interrupts
/// The device applies THRESHOLD_HYSTERESIS_PPM when moving between zones
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Co2Thresholds {
    /// Low to medium threshold (ppm)
    pub low: u16,
    /// Medium to high threshold (ppm)
    pub high: u16,
}

impl Co2Thresholds {
    /// Check the low limit lies below the high limit
    pub fn is_valid(&self) -> bool {
        self.low < self.high
    }
}

/// Hardware version
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct HardwareVersion {
    /// Major hardware version, 1 for CCS811
    pub major: u8,
    /// Build variant
    pub build: u8,
}

/// Firmware version (boot or application)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub trivial: u8,
}

impl FirmwareVersion {
    fn decode(b: &[u8]) -> Self {
        FirmwareVersion {
            major: b[0] >> 4,
            minor: b[0] & 0x0F,
            trivial: b[1],
        }
    }
}

/// Full ALG_RESULT_DATA block
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct AllData {
    pub raw: RawReading,
    pub error: ErrorFlags,
    pub status: StatusFlags,
    pub etvoc: u16,
    pub eco2: u16,
}

macro_rules! reg {
    ($(#[$meta:meta])* $name:ident, $reg:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, Clone, Copy, Debug)]
        pub struct $name;

        impl Reg for $name {
            const REGISTER: Register = Register::$reg;
            const LEN: usize = $len;
        }
    };
}

reg!(
    /// STATUS (0x00, 1 byte, R)
    Status, Status, 1);
reg!(
    /// MEAS_MODE (0x01, 1 byte, R/W)
    MeasMode, MeasMode, 1);
reg!(
    /// ALG_RESULT_DATA eTVOC and eCO2 (0x02, 4 bytes, R)
    AlgResult, AlgResultData, 4);
reg!(
    /// eCO2 from ALG_RESULT_DATA (0x02, 4 bytes, R)
    Eco2, AlgResultData, 4);
reg!(
    /// eTVOC from ALG_RESULT_DATA (0x02, 4 bytes, R)
    Etvoc, AlgResultData, 4);
reg!(
    /// Complete ALG_RESULT_DATA block (0x02, 8 bytes, R)
    AllResultData, AlgResultData, 8);
reg!(
    /// RAW_DATA (0x03, 2 bytes, R)
    RawData, RawData, 2);
reg!(
    /// ENV_DATA (0x05, 4 bytes, W)
    EnvData, EnvData, 4);
reg!(
    /// THRESHOLDS (0x10, 4 bytes, W)
    Thresholds, Thresholds, 4);
reg!(
    /// BASELINE (0x11, 2 bytes, R/W)
    /// Opaque, see AN000370 for save and restore
    Baseline, Baseline, 2);
reg!(
    /// HW_ID (0x20, 1 byte, R)
    HwId, HwId, 1);
reg!(
    /// HW_VERSION (0x21, 1 byte, R)
    HwVersion, HwVersion, 1);
reg!(
    /// FW_BOOT_VERSION (0x23, 2 bytes, R)
    FwBootVersion, FwBootVersion, 2);
reg!(
    /// FW_APP_VERSION (0x24, 2 bytes, R)
    FwAppVersion, FwAppVersion, 2);
reg!(
    /// INTERNAL_STATE (0xA0, 1 byte, R)
    InternalState, InternalState, 1);
reg!(
    /// ERROR_ID (0xE0, 1 byte, R)
    ErrorId, ErrorId, 1);
reg!(
    /// APP_ERASE (0xF1, 4 byte sequence, W)
    AppErase, AppErase, 4);
reg!(
    /// APP_DATA (0xF2, 9 bytes, W)
    AppData, AppData, 9);
reg!(
    /// APP_VERIFY (0xF3, 1 byte trigger, W)
    AppVerify, AppVerify, 1);
reg!(
    /// APP_START (0xF4, 1 byte trigger, W)
    AppStart, AppStart, 1);
reg!(
    /// SW_RESET (0xFF, 4 byte sequence, W)
    SwReset, SwReset, 4);

impl Readable for Status {
    type Out = StatusFlags;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(StatusFlags::from_bits(b[0]))
    }
}

impl Readable for MeasMode {
    type Out = MeasConfig;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        MeasConfig::from_bits(b[0])
    }
}

impl Writable for MeasMode {
    type In = MeasConfig;

    fn encode(value: &Self::In, b: &mut [u8]) {
        b[0] = value.bits();
    }
}

impl Readable for AlgResult {
    type Out = AirQuality;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(AirQuality {
            etvoc: u16::from_be_bytes([b[0], b[1]]),
            eco2: u16::from_be_bytes([b[2], b[3]]),
        })
    }
}

impl Readable for Eco2 {
    type Out = u16;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        AlgResult::decode(b).map(|r| r.eco2)
    }
}

impl Readable for Etvoc {
    type Out = u16;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        AlgResult::decode(b).map(|r| r.etvoc)
    }
}

impl Readable for AllResultData {
    type Out = AllData;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(AllData {
            raw: RawReading::decode(&b[0..2]),
            error: ErrorFlags::from_bits(b[2]),
            status: StatusFlags::from_bits(b[3]),
            etvoc: u16::from_be_bytes([b[4], b[5]]),
            eco2: u16::from_be_bytes([b[6], b[7]]),
        })
    }
}

impl Readable for RawData {
    type Out = RawReading;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(RawReading::decode(b))
    }
}

impl Readable for EnvData {
    type Out = Environment;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(Environment {
            humidity: u16::from_be_bytes([b[0], b[1]]),
            temperature: i16::from_be_bytes([b[2], b[3]]),
        })
    }
}

impl Writable for EnvData {
    type In = Environment;

    fn encode(value: &Self::In, b: &mut [u8]) {
        b[0..2].copy_from_slice(&value.humidity.to_be_bytes());
        b[2..4].copy_from_slice(&value.temperature.to_be_bytes());
    }
}

impl Readable for Thresholds {
    type Out = Co2Thresholds;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(Co2Thresholds {
            low: u16::from_be_bytes([b[0], b[1]]),
            high: u16::from_be_bytes([b[2], b[3]]),
        })
    }
}

impl Writable for Thresholds {
    type In = Co2Thresholds;

    fn encode(value: &Self::In, b: &mut [u8]) {
        b[0..2].copy_from_slice(&value.low.to_be_bytes());
        b[2..4].copy_from_slice(&value.high.to_be_bytes());
    }
}

impl Readable for Baseline {
    type Out = [u8; 2];

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok([b[0], b[1]])
    }
}

impl Writable for Baseline {
    type In = [u8; 2];

    fn encode(value: &Self::In, b: &mut [u8]) {
        b[..2].copy_from_slice(value);
    }
}

impl Readable for HwId {
    type Out = u8;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(b[0])
    }
}

impl Readable for HwVersion {
    type Out = HardwareVersion;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(HardwareVersion {
            major: b[0] >> 4,
            build: b[0] & 0x0F,
        })
    }
}

impl Readable for FwBootVersion {
    type Out = FirmwareVersion;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(FirmwareVersion::decode(b))
    }
}

impl Readable for FwAppVersion {
    type Out = FirmwareVersion;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(FirmwareVersion::decode(b))
    }
}

impl Readable for InternalState {
    type Out = u8;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(b[0])
    }
}

impl Readable for ErrorId {
    type Out = ErrorFlags;

    fn decode(b: &[u8]) -> Result<Self::Out, CodecError> {
        Ok(ErrorFlags::from_bits(b[0]))
    }
}

impl Writable for AppErase {
    type In = ();

    fn encode(_value: &Self::In, b: &mut [u8]) {
        b[..4].copy_from_slice(&APP_ERASE_SEQUENCE);
    }
}

impl Writable for AppData {
    type In = [u8; 9];

    fn encode(value: &Self::In, b: &mut [u8]) {
        b[..9].copy_from_slice(value);
    }
}

// Trigger registers, only the address selection matters

impl Writable for AppVerify {
    type In = ();

    fn encode(_value: &Self::In, b: &mut [u8]) {
        b[0] = 0x00;
    }
}

impl Writable for AppStart {
    type In = ();

    fn encode(_value: &Self::In, b: &mut [u8]) {
        b[0] = 0x00;
    }
}

impl Writable for SwReset {
    type In = ();

    fn encode(_value: &Self::In, b: &mut [u8]) {
        b[..4].copy_from_slice(&SW_RESET_SEQUENCE);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn round_trip<R: Readable + Writable<In = <R as Readable>::Out>>(v: R::In) -> R::Out {
        let mut buff = [0u8; MAX_PAYLOAD];
        R::encode(&v, &mut buff[..<R as Reg>::LEN]);
        R::decode(&buff[..<R as Reg>::LEN]).unwrap()
    }

    #[test]
    fn test_status_decode() {
        let s = Status::decode(&[0x98]).unwrap();
        assert_eq!(s, StatusFlags{
            error: false,
            data_ready: true,
            app_valid: true,
            app_verified: false,
            app_erased: false,
            app_mode: true,
        });
        assert_eq!(s.firmware_mode(), FirmwareMode::Application);
        assert_eq!(s.bits(), 0x98);

        let s = Status::decode(&[0x71]).unwrap();
        assert!(s.error);
        assert!(s.app_valid && s.app_verified && s.app_erased);
        assert_eq!(s.firmware_mode(), FirmwareMode::Boot);
    }

    #[test]
    fn test_meas_mode() {
        let c = MeasMode::decode(&[0x1C]).unwrap();
        assert_eq!(c, MeasConfig{
            interrupt_threshold: true,
            interrupt_data_ready: true,
            drive_mode: DriveMode::ConstantPower1s,
        });

        let tests = &[
            MeasConfig::default(),
            MeasConfig{ interrupt_threshold: false, interrupt_data_ready: true, drive_mode: DriveMode::Pulse10s },
            MeasConfig{ interrupt_threshold: true, interrupt_data_ready: false, drive_mode: DriveMode::Pulse60s },
            MeasConfig{ interrupt_threshold: true, interrupt_data_ready: true, drive_mode: DriveMode::RawOnly250ms },
        ];
        for t in tests {
            assert_eq!(round_trip::<MeasMode>(*t), *t);
        }

        let mut buff = [0u8; 1];
        MeasMode::encode(&tests[3], &mut buff);
        assert_eq!(buff, [0x4C]);
    }

    #[test]
    fn test_meas_mode_reserved() {
        assert_eq!(MeasMode::decode(&[0x50]), Err(CodecError::InvalidDriveMode(5)));
        assert_eq!(MeasMode::decode(&[0x70]), Err(CodecError::InvalidDriveMode(7)));
    }

    #[test]
    fn test_error_flags() {
        let e = ErrorId::decode(&[0x21]).unwrap();
        assert!(e.write_reg_invalid);
        assert!(e.heater_supply);
        assert!(!e.read_reg_invalid && !e.meas_mode_invalid && !e.max_resistance && !e.heater_fault);
        assert!(e.any());

        assert!(!ErrorId::decode(&[0x00]).unwrap().any());
        assert_eq!(ErrorFlags::from_bits(0x3F).bits(), 0x3F);
    }

    #[test]
    fn test_thresholds_byte_order() {
        let t = Co2Thresholds{ low: 400, high: 1200 };

        let mut buff = [0u8; 4];
        Thresholds::encode(&t, &mut buff);
        assert_eq!(buff, [0x01, 0x90, 0x04, 0xB0]);

        assert_eq!(Thresholds::decode(&buff).unwrap(), t);
        assert_eq!(round_trip::<Thresholds>(Co2Thresholds{ low: 0, high: 0xFFFF }), Co2Thresholds{ low: 0, high: 0xFFFF });
    }

    #[test]
    fn test_environment_conversion() {
        let e = Environment::new(25.0, 50.0);
        assert_eq!(e.temperature, 0);
        assert_eq!(e.humidity, 25600);

        let mut buff = [0u8; 4];
        EnvData::encode(&e, &mut buff);
        assert_eq!(buff, [0x64, 0x00, 0x00, 0x00]);

        let e = Environment::new(30.5, 0.0);
        assert_eq!(e.temperature, 2816);
        assert_eq!(e.humidity, 0);

        let e = Environment::new(20.0, 100.0);
        assert_eq!(e.temperature, -2560);
        assert_eq!(e.humidity, 51200);
        EnvData::encode(&e, &mut buff);
        assert_eq!(buff, [0xC8, 0x00, 0xF6, 0x00]);
    }

    #[test]
    fn test_environment_round_trip() {
        let tests = &[
            Environment::new(25.0, 0.0),
            Environment::new(25.0, 100.0),
            Environment::new(21.37, 33.3),
            Environment::new(-10.0, 0.001953125),
            Environment{ humidity: 0xFFFF, temperature: i16::MIN },
        ];
        for t in tests {
            assert_eq!(round_trip::<EnvData>(*t), *t);
        }

        let e = Environment::new(21.5, 33.25);
        assert_eq!(e.temperature_c(), 21.5);
        assert_eq!(e.humidity_pct(), 33.25);
    }

    #[test]
    fn test_baseline_round_trip() {
        for t in &[[0x00, 0x00], [0x84, 0x7B], [0xFF, 0xFF]] {
            assert_eq!(round_trip::<Baseline>(*t), *t);
        }
    }

    #[test]
    fn test_versions() {
        assert_eq!(HwVersion::decode(&[0x12]).unwrap(), HardwareVersion{ major: 1, build: 2 });
        assert_eq!(FwBootVersion::decode(&[0x10, 0x00]).unwrap(), FirmwareVersion{ major: 1, minor: 0, trivial: 0 });
        assert_eq!(FwAppVersion::decode(&[0x20, 0x09]).unwrap(), FirmwareVersion{ major: 2, minor: 0, trivial: 9 });
    }

    #[test]
    fn test_raw_data() {
        // 12uA, ADC 0x1A5
        let r = RawData::decode(&[0x31, 0xA5]).unwrap();
        assert_eq!(r, RawReading{ adc: 0x1A5, current_ua: 12 });
    }

    #[test]
    fn test_air_quality() {
        let d = [0x00, 0x2A, 0x01, 0x90];
        assert_eq!(AlgResult::decode(&d).unwrap(), AirQuality{ etvoc: 42, eco2: 400 });
        assert_eq!(Eco2::decode(&d).unwrap(), 400);
        assert_eq!(Etvoc::decode(&d).unwrap(), 42);
    }

    #[test]
    fn test_all_data_layout() {
        let d = [0x31, 0xA5, 0x01, 0x99, 0x00, 0x2A, 0x01, 0x90];
        let a = AllResultData::decode(&d).unwrap();

        assert_eq!(a.raw, RawData::decode(&d[0..2]).unwrap());
        assert_eq!(a.error, ErrorId::decode(&d[2..3]).unwrap());
        assert_eq!(a.status, Status::decode(&d[3..4]).unwrap());
        assert_eq!(a.etvoc, 42);
        assert_eq!(a.eco2, 400);
        assert!(a.status.data_ready);
        assert!(a.error.write_reg_invalid);
    }

    #[test]
    fn test_fixed_sequences() {
        let mut buff = [0u8; 4];
        SwReset::encode(&(), &mut buff);
        assert_eq!(buff, [0x11, 0xE5, 0x72, 0x8A]);

        AppErase::encode(&(), &mut buff);
        assert_eq!(buff, [0xE7, 0xA7, 0xE6, 0x09]);
    }
}
