mod common;

use common::Board;
use common::Event;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Mock as I2cMock;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;
use ov5647::registers::Bus;
use ov5647::registers::MipiControl14;
use ov5647::registers::Register;
use ov5647::registers::RegisterWrite;

fn list(addresses: &[u16]) -> Vec<RegisterWrite> {
    addresses
        .iter()
        .enumerate()
        .map(|(index, address)| RegisterWrite {
            address: *address,
            value: index as u8,
        })
        .collect()
}

#[test]
fn list_stops_at_the_failing_entry() {
    let board = Board::new();
    board.fail_register(0x1003);
    let mut bus = Bus::new(board.i2c(), common::ADDRESS);
    let error = bus
        .apply(&list(&[0x1000, 0x1001, 0x1002, 0x1003, 0x1004]))
        .unwrap_err();
    assert_eq!(
        error,
        ov5647::Error::RegisterList {
            index: 3,
            address: 0x1003,
            kind: ErrorKind::Other,
        }
    );
    assert_eq!(
        board.events(),
        [
            Event::Write(0x1000, 0),
            Event::Write(0x1001, 1),
            Event::Write(0x1002, 2),
        ]
    );
    assert_eq!(error.class(), ov5647::error::Class::Io);
}

#[test]
fn list_applies_every_entry_in_order() {
    let board = Board::new();
    let mut bus = Bus::new(board.i2c(), common::ADDRESS);
    bus.apply(&list(&[0x2000, 0x1000, 0x2000])).unwrap();
    assert_eq!(board.writes(), [(0x2000, 0), (0x1000, 1), (0x2000, 2)]);
    assert_eq!(board.register(0x2000), 2);
}

#[test]
fn single_access_uses_big_endian_addresses() {
    let expectations = [
        I2cTransaction::write_read(0x36, vec![0x48, 0x14], vec![0x2a]),
        I2cTransaction::write(0x36, vec![0x48, 0x14, 0x6a]),
    ];
    let mut i2c = I2cMock::new(&expectations);
    let mut bus = Bus::new(i2c.clone(), 0x36);
    let mut register = MipiControl14::read(&mut bus).unwrap();
    assert_eq!(register.reserved_0_6, 0x2a);
    register.virtual_channel = 1;
    register.write(&mut bus).unwrap();
    i2c.done();
}

#[test]
fn read_failure_names_the_register() {
    let expectations =
        [I2cTransaction::write_read(0x36, vec![0x35, 0x03], vec![0x00]).with_error(ErrorKind::Other)];
    let mut i2c = I2cMock::new(&expectations);
    let mut bus = Bus::new(i2c.clone(), 0x36);
    assert_eq!(
        bus.read(0x3503),
        Err(ov5647::Error::Io {
            address: 0x3503,
            kind: ErrorKind::Other,
        })
    );
    i2c.done();
}
