// SPDX-License-Identifier: MPL-2.0

#![cfg(test)]

use super::{
    CdmOutPos, CdmStatus, Dispenser, IntermediateStacker, JammedShutterPosition, OutputPosition,
    PositionStatus, SafeDoor, Shutter, Transport, TransportStatus,
};
use crate::{
    common::{AntiFraudModule, DevicePosition, DeviceState},
    error::{Error, ErrorKind},
    extra, Options,
};

use hex_literal::hex;
use lazy_static::lazy_static;
use xfs_layout::Version;

lazy_static! {
    // fwDevice=ONLINE, fwSafeDoor=DOORCLOSED, fwDispenser=OK, fwIntermediateStacker=EMPTY,
    // lppPositions=[CENTER, FRONT], lpszExtra="A=1"
    static ref CDM_STATUS_V300: Vec<u8> = hex!(
        "0000 0300 0000 0000 29000000 10000000
         413d3100 00
         0400 0000 0000 0000 0000
         0008 0200 0100 0100 0400
         15000000 1f000000 00000000"
    )
    .to_vec();
}

fn options(version: Version) -> Options {
    Options::new(version)
}

#[test]
fn test_layout() {
    for &(version, len, pos_len) in
        &[(Version::V3_00, 16, 10), (Version::V3_10, 148, 10), (Version::V3_20, 150, 12)]
    {
        assert_eq!(super::STATUS.layout(version).unwrap().len(), len);
        assert_eq!(super::OUT_POS.layout(version).unwrap().len(), pos_len);
    }
}

#[test]
fn test_read_v300() {
    let status = CdmStatus::view(&CDM_STATUS_V300, options(Version::V3_00)).unwrap();

    assert_eq!(status.device().unwrap(), DeviceState::Online);
    assert_eq!(status.safe_door().unwrap(), SafeDoor::Closed);
    assert_eq!(status.dispenser().unwrap(), Dispenser::Ok);
    assert_eq!(status.intermediate_stacker().unwrap(), IntermediateStacker::Empty);
    assert_eq!(status.extra().unwrap(), extra! { "A" => "1" });

    assert!(status.guid_lights().unwrap().iter().all(|lights| lights.is_empty()));
    assert_eq!(status.device_position().unwrap(), DevicePosition::NotSupported);
    assert_eq!(status.power_save_recovery_time().unwrap(), 0);
    assert_eq!(status.anti_fraud_module().unwrap(), AntiFraudModule::NotSupported);
}

#[test]
fn test_read_positions() {
    let status = CdmStatus::view(&CDM_STATUS_V300, options(Version::V3_00)).unwrap();
    let positions = status.positions().unwrap();
    assert_eq!(positions.len(), 2);

    assert_eq!(positions[0].position().unwrap(), OutputPosition::Center);
    assert_eq!(positions[0].shutter().unwrap(), Shutter::Closed);
    assert_eq!(positions[0].position_status().unwrap(), PositionStatus::Empty);
    assert_eq!(positions[0].transport().unwrap(), Transport::Ok);
    assert_eq!(positions[0].transport_status().unwrap(), TransportStatus::Empty);

    assert_eq!(positions[1].position().unwrap(), OutputPosition::Front);
    assert_eq!(positions[1].shutter().unwrap(), Shutter::Jammed);
    assert_eq!(positions[1].position_status().unwrap(), PositionStatus::NotEmpty);
    assert_eq!(positions[1].transport().unwrap(), Transport::Inoperable);
    assert_eq!(positions[1].transport_status().unwrap(), TransportStatus::NotSupported);
    assert_eq!(
        positions[1].jammed_shutter_position().unwrap(),
        JammedShutterPosition::NotSupported
    );
}

#[test]
fn test_copy_to_v330() {
    let src = CdmStatus::view(&CDM_STATUS_V300, options(Version::V3_00)).unwrap();
    let copy = CdmStatus::copy_from(options(Version::V3_30), &src).unwrap();

    assert_eq!(copy.safe_door().unwrap(), SafeDoor::Closed);
    assert_eq!(copy.extra().unwrap(), extra! { "A" => "1" });

    let positions = copy.positions().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[1].version(), Version::V3_30);
    assert_eq!(positions[1].as_view().struct_bytes().len(), 12);
    assert_eq!(positions[1].shutter().unwrap(), Shutter::Jammed);
    assert_eq!(positions[1].as_view().try_raw("wJammedShutterPosition").unwrap(), 0);
    assert_eq!(
        positions[1].jammed_shutter_position().unwrap(),
        JammedShutterPosition::NotSupported
    );

    assert_eq!(copy, src);
    assert_eq!(copy.positions().unwrap(), src.positions().unwrap());
}

#[test]
fn test_set_positions() {
    let opts = options(Version::V3_20);

    let mut left = CdmOutPos::new(opts).unwrap();
    left.set_position(OutputPosition::Left).unwrap();
    left.set_shutter(Shutter::Open).unwrap();

    let mut right = CdmOutPos::new(opts).unwrap();
    right.set_position(OutputPosition::Right).unwrap();
    right.set_shutter(Shutter::Jammed).unwrap();
    right.set_jammed_shutter_position(JammedShutterPosition::PartiallyOpen).unwrap();

    let mut status = CdmStatus::new(opts).unwrap();
    status.set_dispenser(Dispenser::CuState).unwrap();
    status.set_positions(&[left, right]).unwrap();

    let positions = status.positions().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0].position().unwrap(), OutputPosition::Left);
    assert_eq!(positions[0].shutter().unwrap(), Shutter::Open);
    assert_eq!(
        positions[1].jammed_shutter_position().unwrap(),
        JammedShutterPosition::PartiallyOpen
    );

    // 3.00에는 wJammedShutterPosition이 없습니다.
    let copy = CdmStatus::copy_from(options(Version::V3_00), &status).unwrap();
    let copied = copy.positions().unwrap();
    assert_eq!(copied[1].as_view().struct_bytes().len(), 10);
    assert_eq!(copied[1].shutter().unwrap(), Shutter::Jammed);
    assert_eq!(
        copied[1].jammed_shutter_position().unwrap(),
        JammedShutterPosition::NotSupported
    );
    assert_eq!(copy.dispenser().unwrap(), Dispenser::CuState);
    assert_ne!(copy, status);
}

#[test]
fn test_set_positions_from_view() {
    let src = CdmStatus::view(&CDM_STATUS_V300, options(Version::V3_00)).unwrap();

    let mut status = CdmStatus::new(options(Version::V3_10)).unwrap();
    assert!(status.positions().unwrap().is_empty());

    status.set_positions(&src.positions().unwrap()).unwrap();
    status.set_extra(&extra! { "A" => "1" }).unwrap();
    status.set_safe_door(SafeDoor::Closed).unwrap();

    assert_eq!(status, src);
}

#[test]
fn test_unknown_shutter() {
    let mut raw_data = CDM_STATUS_V300.clone();
    raw_data[33] = 0x09;

    let status = CdmStatus::view(&raw_data, options(Version::V3_00)).unwrap();
    let positions = status.positions().unwrap();
    assert_eq!(positions[1].shutter().unwrap_err(), Error::UnknownConstant {
        name: "Shutter",
        value: 9,
    });
    assert_eq!(positions[1].position().unwrap(), OutputPosition::Front);
}

#[test]
fn test_dangling_position() {
    let mut raw_data = CDM_STATUS_V300.clone();
    raw_data[45] = 0x60;

    let status = CdmStatus::view(&raw_data, options(Version::V3_00)).unwrap();
    assert_eq!(status.positions().unwrap_err().kind(), ErrorKind::MalformedInput);
    assert_eq!(status.safe_door().unwrap(), SafeDoor::Closed);
}
