// src/sensor/async_sensor.rs

use super::sequencer::{command_failed, decode_reading, read_failed, trace_command};
use crate::common::{
    address::Bh1750Addr,
    command::{Command, Resolution},
    error::Bh1750Error,
    timing,
};
use embedded_hal_async::{delay::DelayNs, i2c::I2c};
use log::trace;

/// Async counterpart of [`read_measurement`](super::read_measurement).
///
/// Same steps, same errors. The settle wait yields to the executor instead of
/// blocking, but the bus must still stay exclusive until the future completes.
pub async fn read_measurement_async<I, D>(
    i2c: &mut I,
    delay: &mut D,
    address: Bh1750Addr,
) -> Result<u16, Bh1750Error<I::Error>>
where
    I: I2c,
    D: DelayNs,
{
    write_command(i2c, address, Command::Reset).await?;
    write_command(i2c, address, Command::ONE_TIME_HIGH_RES).await?;

    trace!("bh1750 {}: settle {} ms", address, timing::ONE_TIME_H_RES_SETTLE.as_millis());
    delay.delay_ms(timing::ONE_TIME_H_RES_SETTLE.as_millis() as u32).await;

    let mut buf = [0u8; 2];
    i2c.read(address.as_u8(), &mut buf).await.map_err(|e| read_failed(address, e))?;
    Ok(decode_reading(address, buf, Resolution::High).raw())
}

async fn write_command<I: I2c>(i2c: &mut I, address: Bh1750Addr, command: Command) -> Result<(), Bh1750Error<I::Error>> {
    trace_command(address, command);
    i2c.write(address.as_u8(), &[command.opcode()])
        .await
        .map_err(|error| command_failed(address, command, error))
}
