//! Ccs811 digital gas sensor driver
//!
//! This provides register level access to the CCS811 over I2C, as well as the firmware
//! lifecycle (boot, erase, verify, application) triggers.
//! Lifecycle operations do not wait for completion, poll [`Ccs811::status`] to observe progress.
//!
//! Copyright 2019 Ryan Kurte

use core::fmt::Debug;
use core::marker::PhantomData;

extern crate embedded_hal;
use embedded_hal::blocking::i2c;
use embedded_hal::blocking::delay::DelayMs;

#[macro_use]
extern crate log;

pub mod device;
use device::*;

pub mod base;
use base::*;

pub mod registers;
use registers::*;

/// Ccs811 sensor object
/// This is generic over an I2C connector, a delay implementation and the associated error type
pub struct Ccs811<Conn, Delay, Err> {
    conn: Conn,
    delay: Delay,
    address: u8,
    _err: PhantomData<Err>,
}

/// Ccs811 error object
#[derive(Debug)]
pub enum Error<ConnErr> {
    /// Underlying bus error
    Conn(ConnErr),
    /// Register contents could not be decoded
    Codec(CodecError),
    /// Hardware ID did not match the expected value
    UnexpectedHardwareId(u8),
    /// Register write payload too long
    PayloadTooLong(usize),
}

impl <ConnErr> From<CodecError> for Error<ConnErr> {
    fn from(e: CodecError) -> Self {
        Error::Codec(e)
    }
}

impl <Conn, Delay, Err> Ccs811 <Conn, Delay, Err> where
    Conn: i2c::Read<Error=Err> + i2c::Write<Error=Err> + i2c::WriteRead<Error=Err>,
    Delay: DelayMs<u8>,
    Err: Debug,
{
    /// Create a new Ccs811 sensor instance using the default address
    /// This does not communicate with the device, see [`Ccs811::begin`]
    pub fn new(conn: Conn, delay: Delay) -> Self {
        Ccs811{ conn, delay, address: DEFAULT_ADDRESS, _err: PhantomData }
    }

    /// Set the device address and check communication with the device
    pub fn begin(&mut self, address: u8) -> Result<(), Error<Err>> {
        self.address = address;

        self.comms_check()
    }

    /// Destroy the sensor instance, returning the underlying connection and delay
    pub fn destroy(self) -> (Conn, Delay) {
        (self.conn, self.delay)
    }

    /// Fetch the configured device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Check communication by reading and validating the hardware ID
    ///
    /// Bus errors are retried up to COMMS_RETRIES times, a mismatched ID fails immediately.
    pub fn comms_check(&mut self) -> Result<(), Error<Err>> {
        let mut res = self.read::<HwId>();

        let mut retries = 0;
        loop {
            match res {
                Err(Error::Conn(ref e)) if retries < COMMS_RETRIES => {
                    trace!("Hardware ID read failed ({:?}), retrying ({})", e, retries + 1);
                },
                _ => break,
            }
            retries += 1;

            self.delay.delay_ms(COMMS_RETRY_DELAY_MS);
            res = self.read::<HwId>();
        }

        match res? {
            HARDWARE_ID => Ok(()),
            id => {
                debug!("Unexpected hardware ID: 0x{:02x}", id);
                Err(Error::UnexpectedHardwareId(id))
            }
        }
    }

    /// Read and decode a register
    pub fn read<R: Readable>(&mut self) -> Result<R::Out, Error<Err>> {
        let mut buff = [0u8; MAX_PAYLOAD];
        let data = &mut buff[..R::LEN];

        self.conn.read_register(self.address, R::REGISTER, data)?;

        let v = R::decode(data)?;

        Ok(v)
    }

    /// Encode and write a register
    pub fn write<R: Writable>(&mut self, value: &R::In) -> Result<(), Error<Err>> {
        let mut buff = [0u8; MAX_PAYLOAD];
        let data = &mut buff[..R::LEN];

        R::encode(value, data);

        self.conn.write_register(self.address, R::REGISTER, data)
    }

    /// Read device status flags
    pub fn status(&mut self) -> Result<StatusFlags, Error<Err>> {
        self.read::<Status>()
    }

    /// Check whether a new sample is available
    pub fn data_ready(&mut self) -> Result<bool, Error<Err>> {
        self.status().map(|s| s.data_ready)
    }

    /// Read the current firmware mode
    pub fn firmware_mode(&mut self) -> Result<FirmwareMode, Error<Err>> {
        self.status().map(|s| s.firmware_mode())
    }

    /// Read the measurement configuration
    pub fn meas_mode(&mut self) -> Result<MeasConfig, Error<Err>> {
        self.read::<MeasMode>()
    }

    /// Write the measurement configuration
    pub fn set_meas_mode(&mut self, config: MeasConfig) -> Result<(), Error<Err>> {
        self.write::<MeasMode>(&config)
    }

    /// Read eTVOC and eCO2 in a single transaction
    pub fn air_quality(&mut self) -> Result<AirQuality, Error<Err>> {
        self.read::<AlgResult>()
    }

    /// Read the complete algorithm result block
    /// This includes raw data, error flags and status alongside eTVOC and eCO2
    pub fn all_data(&mut self) -> Result<AllData, Error<Err>> {
        self.read::<AllResultData>()
    }

    /// Read equivalent CO2 in parts-per-million
    pub fn eco2(&mut self) -> Result<u16, Error<Err>> {
        self.read::<Eco2>()
    }

    /// Read equivalent total VOC in parts-per-billion
    pub fn etvoc(&mut self) -> Result<u16, Error<Err>> {
        self.read::<Etvoc>()
    }

    /// Best-effort eCO2 read, returning 0 on failure
    /// Use [`Ccs811::eco2`] where failures must be detected
    pub fn get_eco2(&mut self) -> u16 {
        self.eco2().unwrap_or_else(|e| {
            warn!("eCO2 read failed: {:?}", e);
            0
        })
    }

    /// Best-effort eTVOC read, returning 0 on failure
    /// Use [`Ccs811::etvoc`] where failures must be detected
    pub fn get_etvoc(&mut self) -> u16 {
        self.etvoc().unwrap_or_else(|e| {
            warn!("eTVOC read failed: {:?}", e);
            0
        })
    }

    /// Read the raw ADC reading and sensor current
    pub fn raw_data(&mut self) -> Result<RawReading, Error<Err>> {
        self.read::<RawData>()
    }

    /// Read the current thresholds
    pub fn thresholds(&mut self) -> Result<Co2Thresholds, Error<Err>> {
        self.read::<Thresholds>()
    }

    /// Read the encoded baseline
    pub fn baseline(&mut self) -> Result<[u8; 2], Error<Err>> {
        self.read::<Baseline>()
    }

    /// Restore a previously read baseline
    pub fn set_baseline(&mut self, baseline: [u8; 2]) -> Result<(), Error<Err>> {
        self.write::<Baseline>(&baseline)
    }

    /// Read the hardware ID
    pub fn hardware_id(&mut self) -> Result<u8, Error<Err>> {
        self.read::<HwId>()
    }

    /// Read the hardware version
    pub fn hardware_version(&mut self) -> Result<HardwareVersion, Error<Err>> {
        self.read::<HwVersion>()
    }

    /// Read the boot firmware version
    pub fn boot_version(&mut self) -> Result<FirmwareVersion, Error<Err>> {
        self.read::<FwBootVersion>()
    }

    /// Read the application firmware version
    pub fn app_version(&mut self) -> Result<FirmwareVersion, Error<Err>> {
        self.read::<FwAppVersion>()
    }

    /// Read the internal state register
    pub fn internal_state(&mut self) -> Result<u8, Error<Err>> {
        self.read::<InternalState>()
    }

    /// Read the error source flags
    pub fn error_flags(&mut self) -> Result<ErrorFlags, Error<Err>> {
        self.read::<ErrorId>()
    }

    /// Set environmental compensation data
    /// temperature in degrees celsius, humidity in %RH
    pub fn write_environmental_data(&mut self, temperature: f32, humidity: f32) -> Result<(), Error<Err>> {
        let env = Environment::new(temperature, humidity);

        debug!("Writing environment: {:.2} C {:.2} %RH ({:?})", temperature, humidity, env);

        self.write::<EnvData>(&env)
    }

    /// Set eCO2 thresholds (ppm) for threshold interrupts
    /// The device applies a hysteresis of THRESHOLD_HYSTERESIS_PPM between zones
    pub fn write_co2_thresholds(&mut self, low: u16, high: u16) -> Result<(), Error<Err>> {
        let thresholds = Co2Thresholds{ low, high };
        if !thresholds.is_valid() {
            warn!("Low threshold {} ppm is not below high threshold {} ppm", low, high);
        }

        self.write::<Thresholds>(&thresholds)
    }

    /// Soft reset the device, returning it to boot mode
    pub fn reset(&mut self) -> Result<(), Error<Err>> {
        debug!("Resetting device");
        self.write::<SwReset>(&())
    }

    /// Start an application firmware erase
    /// Completion is indicated by `app_erased` in the status register
    pub fn start_application_erase(&mut self) -> Result<(), Error<Err>> {
        debug!("Starting application erase");
        self.write::<AppErase>(&())
    }

    /// Write a single 9 byte chunk of application firmware
    pub fn write_application_data(&mut self, chunk: &[u8; 9]) -> Result<(), Error<Err>> {
        self.write::<AppData>(chunk)
    }

    /// Start application firmware verification
    /// Completion is indicated by `app_verified` in the status register
    pub fn start_application_verify(&mut self) -> Result<(), Error<Err>> {
        debug!("Starting application verify");
        self.write::<AppVerify>(&())
    }

    /// Switch from boot mode to application mode
    /// Success is indicated by `app_mode` in the status register
    pub fn start_application_mode(&mut self) -> Result<(), Error<Err>> {
        debug!("Starting application");
        self.write::<AppStart>(&())
    }
}
