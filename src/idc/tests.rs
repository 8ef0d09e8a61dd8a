// SPDX-License-Identifier: MPL-2.0

#![cfg(test)]

use super::{ChipModule, ChipPower, IdcStatus, ImageModule, MagModule, Media, RetainBin, Security};
use crate::{
    common::{AntiFraudModule, DevicePosition, DeviceState, GuidanceLights},
    error::{Error, ErrorKind, Malformed},
    extra, Options,
};

use hex_literal::hex;
use lazy_static::lazy_static;
use xfs_layout::Version;

lazy_static! {
    // fwDevice=ONLINE, fwMedia=PRESENT, fwRetainBin=OK, fwSecurity=NOTSUPP, usCards=5,
    // fwChipPower=ONLINE, lpszExtra="P6=2"
    static ref IDC_STATUS_V300: Vec<u8> =
        hex!("0000 0100 0100 0100 0500 0000 10000000 50363d32 0000").to_vec();
}

fn options(version: Version) -> Options {
    Options::new(version)
}

#[test]
fn test_layout() {
    for &(version, len) in &[(Version::V3_00, 16), (Version::V3_10, 158), (Version::V3_20, 160)] {
        let status = IdcStatus::new(options(version)).unwrap();
        assert_eq!(status.as_view().layout().len(), len, "wrong length in version {}", version);
        assert_eq!(status.as_view().layout().offset_of("lpszExtra").unwrap(), 12);
    }

    let layout = super::STATUS.layout(Version::V3_30).unwrap();
    assert_eq!(layout.len(), 160);
    assert_eq!(layout.offset_of("dwGuidLights").unwrap(), 16);
    assert_eq!(layout.offset_of("fwChipModule").unwrap(), 144);
    assert_eq!(layout.offset_of("usPowerSaveRecoveryTime").unwrap(), 156);
    assert_eq!(layout.offset_of("wAntiFraudModule").unwrap(), 158);
}

#[test]
fn test_read_v300() {
    let status = IdcStatus::view(&IDC_STATUS_V300, options(Version::V3_00)).unwrap();

    assert_eq!(status.device().unwrap(), DeviceState::Online);
    assert_eq!(status.media().unwrap(), Media::Present);
    assert_eq!(status.retain_bin().unwrap(), RetainBin::Ok);
    assert_eq!(status.security().unwrap(), Security::NotSupported);
    assert_eq!(status.cards().unwrap(), 5);
    assert_eq!(status.chip_power().unwrap(), ChipPower::Online);
    assert_eq!(status.extra().unwrap(), extra! { "P6" => "2" });

    // 3.10 이후 필드
    assert!(status.guid_lights().unwrap().iter().all(|lights| lights.is_empty()));
    assert_eq!(status.chip_module().unwrap(), ChipModule::NotSupported);
    assert_eq!(status.mag_read_module().unwrap(), MagModule::NotSupported);
    assert_eq!(status.mag_write_module().unwrap(), MagModule::NotSupported);
    assert_eq!(status.front_image_module().unwrap(), ImageModule::NotSupported);
    assert_eq!(status.back_image_module().unwrap(), ImageModule::NotSupported);
    assert_eq!(status.device_position().unwrap(), DevicePosition::NotSupported);
    assert_eq!(status.power_save_recovery_time().unwrap(), 0);
    assert_eq!(status.anti_fraud_module().unwrap(), AntiFraudModule::NotSupported);
}

#[test]
fn test_strict_read() {
    let status = IdcStatus::view(&IDC_STATUS_V300, options(Version::V3_00)).unwrap();

    assert_eq!(
        status.as_view().try_raw("fwChipModule").unwrap_err(),
        Error::UnsupportedForVersion {
            field: "fwChipModule",
            version: Version::V3_00,
            since: Version::V3_10,
        }
    );
    assert_eq!(status.as_view().try_raw("usCards").unwrap(), 5);
}

#[test]
fn test_copy_to_v330() {
    let src = IdcStatus::view(&IDC_STATUS_V300, options(Version::V3_00)).unwrap();
    let copy = IdcStatus::copy_from(options(Version::V3_30), &src).unwrap();

    assert_eq!(copy.version(), Version::V3_30);
    assert_eq!(copy.as_view().struct_bytes().len(), 160);
    assert_eq!(copy.media().unwrap(), Media::Present);
    assert_eq!(copy.cards().unwrap(), 5);
    assert_eq!(copy.extra().unwrap(), extra! { "P6" => "2" });

    let view = copy.as_view();
    assert_eq!(view.try_raw("fwChipModule").unwrap(), 4);
    assert_eq!(view.try_raw("fwMagReadModule").unwrap(), 4);
    assert_eq!(view.try_raw("fwBackImageModule").unwrap(), 4);
    assert_eq!(view.try_raw("wDevicePosition").unwrap(), 3);
    assert_eq!(view.try_raw("wAntiFraudModule").unwrap(), 0);
    assert_eq!(view.array("dwGuidLights").unwrap(), vec![0; 32]);

    assert_eq!(copy, src);
}

#[test]
fn test_copy_to_lower_version() {
    let mut status = IdcStatus::new(options(Version::V3_20)).unwrap();
    status.set_media(Media::Latched).unwrap();
    status.set_chip_module(ChipModule::Ok).unwrap();
    status.set_anti_fraud_module(AntiFraudModule::DeviceDetected).unwrap();
    status.set_extra(&extra! { "FIRMWARE" => "1.0.3" }).unwrap();

    let copy = IdcStatus::copy_from(options(Version::V3_10), &status).unwrap();
    assert_eq!(copy.media().unwrap(), Media::Latched);
    assert_eq!(copy.chip_module().unwrap(), ChipModule::Ok);
    assert_eq!(copy.anti_fraud_module().unwrap(), AntiFraudModule::NotSupported);
    assert_eq!(copy.extra().unwrap().get("FIRMWARE"), Some("1.0.3"));

    assert_ne!(copy, status);
}

#[test]
fn test_setters_write_through() {
    let mut raw_data = IDC_STATUS_V300.clone();

    {
        let mut status = IdcStatus::view_mut(&mut raw_data, options(Version::V3_00)).unwrap();
        status.set_media(Media::Jammed).unwrap();
        status.set_cards(7).unwrap();
        status.set_chip_power(ChipPower::NoCard).unwrap();

        assert_eq!(
            status.set_chip_module(ChipModule::Ok).unwrap_err().kind(),
            ErrorKind::UnsupportedForVersion
        );
        assert_eq!(status.media().unwrap(), Media::Jammed);
    }

    assert_eq!(&raw_data[..12], &hex!("0000 0300 0100 0100 0700 0500"));
    assert_eq!(&raw_data[12..], &IDC_STATUS_V300[12..]);
}

#[test]
fn test_guid_lights() {
    let mut status = IdcStatus::new(options(Version::V3_10)).unwrap();
    status.set_guid_light(2, GuidanceLights::SLOW_FLASH | GuidanceLights::GREEN).unwrap();

    let lights = status.guid_lights().unwrap();
    assert_eq!(lights[2], GuidanceLights::SLOW_FLASH | GuidanceLights::GREEN);
    assert!(lights[0].is_empty());
    assert_eq!(&status.as_view().struct_bytes()[24..28], &hex!("04020000"));

    assert_eq!(
        status.set_guid_light(32, GuidanceLights::OFF).unwrap_err(),
        Error::IndexOutOfRange { field: "dwGuidLights", index: 32, len: 32 }
    );
}

#[test]
fn test_guid_lights_direction() {
    let status = IdcStatus::new(options(Version::V3_30)).unwrap();
    let mut raw_data = status.into_view().into_inner();
    raw_data[16..20].copy_from_slice(&hex!("80021000"));

    let status = IdcStatus::view(&raw_data, options(Version::V3_30)).unwrap();
    let lights = status.guid_lights().unwrap();
    assert_eq!(
        lights[0],
        GuidanceLights::ENTRY | GuidanceLights::GREEN | GuidanceLights::CONTINUOUS
    );
    assert!(lights[1].is_empty());

    let mut status = IdcStatus::copy_from(options(Version::V3_30), &status).unwrap();
    status.set_guid_light(1, GuidanceLights::EXIT | GuidanceLights::RED).unwrap();
    assert_eq!(&status.as_view().struct_bytes()[20..24], &hex!("00012000"));

    raw_data[18] = 0x40;
    let status = IdcStatus::view(&raw_data, options(Version::V3_30)).unwrap();
    assert_eq!(
        status.guid_lights().unwrap_err(),
        Error::UnknownConstant { name: "GuidanceLights", value: 0x0040_0280 }
    );
}

#[test]
fn test_unknown_constant() {
    let mut raw_data = IDC_STATUS_V300.clone();
    raw_data[2] = 0x09;

    let status = IdcStatus::view(&raw_data, options(Version::V3_00)).unwrap();
    assert_eq!(status.media().unwrap_err(), Error::UnknownConstant { name: "Media", value: 9 });
    assert_eq!(status.retain_bin().unwrap(), RetainBin::Ok);

    let status = IdcStatus::new(options(Version::V3_10)).unwrap();
    let mut raw_data = status.into_view().into_inner();
    raw_data[16] = 0x02;

    let status = IdcStatus::view(&raw_data, options(Version::V3_10)).unwrap();
    assert_eq!(
        status.guid_lights().unwrap_err(),
        Error::UnknownConstant { name: "GuidanceLights", value: 2 }
    );
}

#[test]
fn test_buffer_too_short() {
    assert_eq!(
        IdcStatus::view(&IDC_STATUS_V300[..15], options(Version::V3_00)).unwrap_err(),
        Error::Malformed(Malformed::BufferTooShort { expected: 16, actual: 15 })
    );
    assert_eq!(
        IdcStatus::view(&IDC_STATUS_V300, options(Version::V3_10)).unwrap_err(),
        Error::Malformed(Malformed::BufferTooShort { expected: 158, actual: 22 })
    );
}

#[test]
fn test_equality() {
    let borrowed = IdcStatus::view(&IDC_STATUS_V300, options(Version::V3_00)).unwrap();
    let mut owned = IdcStatus::copy_from(options(Version::V3_20), &borrowed).unwrap();
    assert_eq!(borrowed, owned);
    assert_eq!(owned.clone(), owned);

    owned.set_device(DeviceState::Busy).unwrap();
    assert_ne!(borrowed, owned);

    let text = format!("{:?}", borrowed);
    assert!(text.starts_with("WFSIDCSTATUS {"));
    assert!(text.contains("usCards: 0x5"));
}
