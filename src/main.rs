//! Ccs811 command-line utility
//!
//! Copyright 2019 Ryan Kurte

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

extern crate embedded_hal;
extern crate linux_embedded_hal;
use linux_embedded_hal::{I2cdev, Delay};

extern crate structopt;
use structopt::StructOpt;

extern crate humantime;
use humantime::{Duration as HumanDuration};

#[macro_use] extern crate log;
extern crate simplelog;
use simplelog::{TermLogger, LevelFilter};

extern crate sensor_ccs811;
use sensor_ccs811::Ccs811;
use sensor_ccs811::registers::{DriveMode, MeasConfig, StatusFlags};

#[derive(StructOpt)]
#[structopt(name = "ccs811-util")]
/// A Command Line Interface (CLI) for interacting with a local CCS811 gas sensor over I2C
pub struct Options {

    /// Specify the i2c interface to use to connect to the ccs811 device
    #[structopt(short="d", long = "i2c", default_value = "/dev/i2c-1", env = "CCS811_I2C")]
    i2c: String,

    /// Device I2C address (hex)
    #[structopt(short = "a", long = "address", default_value = "5a", parse(try_from_str = "parse_hex"))]
    address: u8,

    #[structopt(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[structopt(long = "log-level", default_value = "info")]
    level: LevelFilter,
}

#[derive(StructOpt)]
pub enum Command {
    #[structopt(name = "info")]
    /// Read device identity, versions, status and error flags
    Info,

    #[structopt(name = "monitor")]
    /// Configure a drive mode and print measurements as they become available
    Monitor {
        /// Drive mode (1: 1s, 2: 10s, 3: 60s, 4: raw only 250ms)
        #[structopt(short = "m", long = "drive-mode", default_value = "1")]
        drive_mode: u8,

        /// Delay between sensor poll operations
        #[structopt(long = "poll-delay", default_value = "100ms")]
        poll_delay: HumanDuration,

        /// Number of allowed I2C errors prior to exiting
        #[structopt(long = "allowed-errors", default_value = "3")]
        allowed_errors: usize,
    },

    #[structopt(name = "reset")]
    /// Soft reset the device into boot mode
    Reset,

    #[structopt(name = "start")]
    /// Switch the device from boot mode to application mode
    Start,

    #[structopt(name = "baseline")]
    /// Read the current baseline, or restore a saved one
    Baseline {
        /// Baseline to restore (hex, as printed by a previous read)
        #[structopt(long = "set", parse(try_from_str = "parse_hex16"))]
        set: Option<u16>,
    },

    #[structopt(name = "environment")]
    /// Write temperature and humidity compensation data
    Environment {
        /// Temperature in degrees celsius
        #[structopt(long = "temperature", default_value = "25.0")]
        temperature: f32,

        /// Relative humidity in %
        #[structopt(long = "humidity", default_value = "50.0")]
        humidity: f32,
    },

    #[structopt(name = "thresholds")]
    /// Write eCO2 interrupt thresholds
    Thresholds {
        /// Low to medium threshold in ppm
        #[structopt(long = "low", default_value = "1500")]
        low: u16,

        /// Medium to high threshold in ppm
        #[structopt(long = "high", default_value = "2500")]
        high: u16,
    },

    #[structopt(name = "flash")]
    /// Erase, load and verify an application firmware image
    Flash {
        /// Application firmware image
        #[structopt(parse(from_os_str))]
        image: PathBuf,

        /// Delay after each application data write
        #[structopt(long = "write-delay", default_value = "50ms")]
        write_delay: HumanDuration,

        /// Timeout for erase and verify operations
        #[structopt(long = "timeout", default_value = "5s")]
        timeout: HumanDuration,
    },
}

fn parse_hex(s: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(s.trim_start_matches("0x"), 16)
}

fn parse_hex16(s: &str) -> Result<u16, std::num::ParseIntError> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16)
}

type I2cError = <I2cdev as embedded_hal::blocking::i2c::Write>::Error;
type Sensor = Ccs811<I2cdev, Delay, I2cError>;

fn main() {
    // Load options
    let opts = Options::from_args();

    // Setup logging
    TermLogger::init(opts.level, simplelog::Config::default()).unwrap();

    debug!("Connecting to I2C device");
    let i2c = match I2cdev::new(&opts.i2c) {
        Ok(v) => v,
        Err(e) => {
            error!("Error opening I2C device '{}': {:?}", &opts.i2c, e);
            std::process::exit(-1);
        }
    };

    debug!("Connecting to CCS811 at 0x{:02x}", opts.address);
    let mut sensor = Ccs811::new(i2c, Delay);
    if let Err(e) = sensor.begin(opts.address) {
        error!("Error connecting to CCS811: {:?}", e);
        std::process::exit(-2);
    }

    match opts.command {
        Command::Info => info(&mut sensor),
        Command::Monitor{ drive_mode, poll_delay, allowed_errors } => {
            monitor(&mut sensor, drive_mode, *poll_delay, allowed_errors)
        },
        Command::Reset => {
            if let Err(e) = sensor.reset() {
                error!("Error resetting device: {:?}", e);
                std::process::exit(-3);
            }
            info!("Device reset");
        },
        Command::Start => start(&mut sensor),
        Command::Baseline{ set: None } => {
            match sensor.baseline() {
                Ok(b) => info!("Baseline: {:04x}", u16::from_be_bytes(b)),
                Err(e) => {
                    error!("Error reading baseline: {:?}", e);
                    std::process::exit(-3);
                }
            }
        },
        Command::Baseline{ set: Some(b) } => {
            if let Err(e) = sensor.set_baseline(b.to_be_bytes()) {
                error!("Error writing baseline: {:?}", e);
                std::process::exit(-3);
            }
            info!("Baseline restored: {:04x}", b);
        },
        Command::Environment{ temperature, humidity } => {
            if let Err(e) = sensor.write_environmental_data(temperature, humidity) {
                error!("Error writing environment data: {:?}", e);
                std::process::exit(-3);
            }
        },
        Command::Thresholds{ low, high } => {
            if let Err(e) = sensor.write_co2_thresholds(low, high) {
                error!("Error writing thresholds: {:?}", e);
                std::process::exit(-3);
            }
        },
        Command::Flash{ image, write_delay, timeout } => {
            flash(&mut sensor, &image, *write_delay, *timeout)
        },
    }
}

fn info(sensor: &mut Sensor) {
    if let Err(e) = read_info(sensor) {
        error!("Error reading device info: {:?}", e);
        std::process::exit(-3);
    }
}

fn read_info(sensor: &mut Sensor) -> Result<(), sensor_ccs811::Error<I2cError>> {
    let hw = sensor.hardware_version()?;
    info!("Hardware version: {}.{}", hw.major, hw.build);

    let boot = sensor.boot_version()?;
    info!("Boot firmware: {}.{}.{}", boot.major, boot.minor, boot.trivial);

    let app = sensor.app_version()?;
    info!("Application firmware: {}.{}.{}", app.major, app.minor, app.trivial);

    let status = sensor.status()?;
    info!("Mode: {:?} status: {:?}", status.firmware_mode(), status);

    let errors = sensor.error_flags()?;
    if errors.any() {
        warn!("Errors: {:?}", errors);
    }

    Ok(())
}

fn start(sensor: &mut Sensor) {
    if let Err(e) = sensor.start_application_mode() {
        error!("Error starting application: {:?}", e);
        std::process::exit(-3);
    }

    // Allow the application to boot
    std::thread::sleep(Duration::from_millis(1));

    match sensor.status() {
        Ok(s) if s.app_mode => info!("Application started"),
        Ok(s) => {
            error!("Application failed to start, status: {:?}", s);
            std::process::exit(-4);
        },
        Err(e) => {
            error!("Error reading status: {:?}", e);
            std::process::exit(-4);
        }
    }
}

fn monitor(sensor: &mut Sensor, drive_mode: u8, poll_delay: Duration, allowed_errors: usize) {
    let drive_mode = match DriveMode::from_bits(drive_mode) {
        Ok(m) if m != DriveMode::Idle => m,
        _ => {
            error!("Invalid drive mode: {}", drive_mode);
            std::process::exit(-3);
        }
    };

    match sensor.status() {
        Ok(s) if !s.app_mode => start(sensor),
        Ok(_) => (),
        Err(e) => {
            error!("Error reading status: {:?}", e);
            std::process::exit(-3);
        }
    }

    debug!("Setting drive mode: {:?}", drive_mode);
    let config = MeasConfig{ drive_mode, ..Default::default() };
    if let Err(e) = sensor.set_meas_mode(config) {
        error!("Error setting drive mode: {:?}", e);
        std::process::exit(-3);
    }

    let mut errors = 0;

    loop {
        let d = match sensor.all_data() {
            Ok(d) => d,
            Err(e) => {
                warn!("Error reading sensor data: {:?}", e);
                errors += 1;
                if errors > allowed_errors {
                    error!("Exceeded maximum allowed I2C errors");
                    std::process::exit(-5);
                }
                std::thread::sleep(poll_delay);
                continue;
            }
        };

        if d.status.error {
            warn!("Sensor error: {:?}", d.error);
        }

        if d.status.data_ready {
            match drive_mode {
                DriveMode::RawOnly250ms => info!("ADC: {} Current: {} uA", d.raw.adc, d.raw.current_ua),
                _ => info!("eCO2: {} ppm, eTVOC: {} ppb", d.eco2, d.etvoc),
            }
        }

        std::thread::sleep(poll_delay);
    }
}

fn wait_status<F>(sensor: &mut Sensor, timeout: Duration, done: F) -> StatusFlags
where
    F: Fn(&StatusFlags) -> bool,
{
    let start = Instant::now();

    loop {
        match sensor.status() {
            Ok(s) if done(&s) => return s,
            Ok(s) if s.error => {
                error!("Device error, status: {:?} errors: {:?}", s, sensor.error_flags());
                std::process::exit(-6);
            },
            Ok(_) => (),
            Err(e) => warn!("Error reading status: {:?}", e),
        }

        if start.elapsed() > timeout {
            error!("Timeout waiting for device");
            std::process::exit(-6);
        }

        std::thread::sleep(Duration::from_millis(10));
    }
}

fn flash(sensor: &mut Sensor, image: &Path, write_delay: Duration, timeout: Duration) {
    let data = match std::fs::read(image) {
        Ok(d) => d,
        Err(e) => {
            error!("Error reading image '{}': {:?}", image.display(), e);
            std::process::exit(-3);
        }
    };

    if data.len() % 9 != 0 {
        warn!("Image length {} is not a multiple of 9, padding with 0xFF", data.len());
    }

    info!("Resetting to boot mode");
    if let Err(e) = sensor.reset() {
        error!("Error resetting device: {:?}", e);
        std::process::exit(-3);
    }
    std::thread::sleep(Duration::from_millis(20));

    info!("Erasing application");
    if let Err(e) = sensor.start_application_erase() {
        error!("Error starting erase: {:?}", e);
        std::process::exit(-3);
    }
    wait_status(sensor, timeout, |s| s.app_erased);

    info!("Writing {} bytes", data.len());
    for (i, c) in data.chunks(9).enumerate() {
        let mut chunk = [0xFFu8; 9];
        chunk[..c.len()].copy_from_slice(c);

        if let Err(e) = sensor.write_application_data(&chunk) {
            error!("Error writing chunk {}: {:?}", i, e);
            std::process::exit(-3);
        }

        std::thread::sleep(write_delay);
    }

    info!("Verifying application");
    if let Err(e) = sensor.start_application_verify() {
        error!("Error starting verify: {:?}", e);
        std::process::exit(-3);
    }
    let s = wait_status(sensor, timeout, |s| s.app_verified);

    if !s.app_valid {
        error!("Application image invalid, status: {:?}", s);
        std::process::exit(-7);
    }

    start(sensor);
}
