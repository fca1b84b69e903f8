//! Base communication implementation for interacting with Ccs811 device
//!
//! Copyright 2019 Ryan Kurte

use core::fmt::Debug;

use embedded_hal::blocking::i2c;

use crate::{Error};
use crate::device::*;

/// Base API for reading and writing device registers
/// This should not be required by consumers, but is exposed to support alternate use
pub trait Base<Err> {
    /// Select a register and write data to it in a single transaction
    fn write_register(&mut self, address: u8, register: Register, data: &[u8]) -> Result<(), Error<Err>>;
    /// Select a register then read exactly `data.len()` bytes from it
    fn read_register(&mut self, address: u8, register: Register, data: &mut [u8]) -> Result<(), Error<Err>>;
}

/// Base implementation for I2C devices
impl <Conn, Err> Base<Err> for Conn where
    Conn: i2c::Read<Error=Err> + i2c::Write<Error=Err> + i2c::WriteRead<Error=Err>,
    Err: Debug,
{
    fn write_register(&mut self, address: u8, register: Register, data: &[u8]) -> Result<(), Error<Err>> {
        if data.len() > MAX_PAYLOAD {
            return Err(Error::PayloadTooLong(data.len()));
        }

        let mut buff = [0u8; MAX_PAYLOAD + 1];
        buff[0] = register as u8;
        buff[1..][..data.len()].copy_from_slice(data);

        trace!("Writing register: {:?} data: {:x?}", register, data);

        self.write(address, &buff[..data.len() + 1]).map_err(|e| Error::Conn(e) )
    }

    fn read_register(&mut self, address: u8, register: Register, data: &mut [u8]) -> Result<(), Error<Err>> {
        trace!("Selecting register: {:?}", register);

        // Write the register address to select it
        self.write(address, &[register as u8])
            .map_err(|e| Error::Conn(e) )?;

        // Then, read the data back
        // Short reads are reported as bus errors by the connection
        self.read(address, data)
            .map_err(|e| Error::Conn(e) )?;

        trace!("Read data: {:x?}", data);

        Ok(())
    }
}
