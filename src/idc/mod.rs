// SPDX-License-Identifier: MPL-2.0

//! 카드 리더(IDC) 서비스 클래스 모듈입니다.

mod tests;

use crate::{
    common::{AntiFraudModule, DevicePosition, DeviceState, GuidanceLights, GUIDLIGHTS_SIZE},
    constant::XfsBitmask,
    data::Extra,
    Error,
};

use xfs_layout::{Extension, FieldSpec, StructSpec, Version};

constants! {
    /// 카드 리더 안의 매체 상태 (`fwMedia`)
    pub enum Media {
        Present = 1,
        NotPresent = 2,
        Jammed = 3,
        NotSupported = 4,
        Unknown = 5,
        Entering = 6,
        Latched = 7,
    }
}

constants! {
    /// 회수함 상태 (`fwRetainBin`)
    pub enum RetainBin {
        Ok = 1,
        Full = 2,
        High = 3,
        NotSupported = 4,
    }
}

constants! {
    /// 보안 모듈 상태 (`fwSecurity`)
    pub enum Security {
        NotSupported = 1,
        NotReady = 2,
        Open = 3,
    }
}

constants! {
    /// 칩 전원 상태 (`fwChipPower`)
    pub enum ChipPower {
        Online = 0,
        PoweredOff = 1,
        Busy = 2,
        NoDevice = 3,
        HwError = 4,
        NoCard = 5,
        NotSupported = 6,
        Unknown = 7,
    }
}

constants! {
    /// 칩 카드 모듈 상태 (`fwChipModule`)
    pub enum ChipModule {
        Ok = 1,
        Inoperable = 2,
        Unknown = 3,
        NotSupported = 4,
    }
}

constants! {
    /// 마그네틱 읽기/쓰기 모듈 상태 (`fwMagReadModule`, `fwMagWriteModule`)
    pub enum MagModule {
        Ok = 1,
        Inoperable = 2,
        Unknown = 3,
        NotSupported = 4,
    }
}

constants! {
    /// 카드 이미지 스캐너 상태 (`fwFrontImageModule`, `fwBackImageModule`)
    pub enum ImageModule {
        Ok = 1,
        Inoperable = 2,
        Unknown = 3,
        NotSupported = 4,
    }
}

const NOT_SUPPORTED: u64 = 4;

/// `WFSIDCSTATUS`
pub static STATUS: StructSpec = StructSpec {
    name: "WFSIDCSTATUS",
    since: Version::V3_00,
    fields: &[
        FieldSpec::word("fwDevice"),
        FieldSpec::word("fwMedia"),
        FieldSpec::word("fwRetainBin"),
        FieldSpec::word("fwSecurity"),
        FieldSpec::word("usCards"),
        FieldSpec::word("fwChipPower"),
        FieldSpec::key_values("lpszExtra"),
    ],
    extensions: &[
        Extension {
            since: Version::V3_10,
            fields: &[
                FieldSpec::array("dwGuidLights", 4, GUIDLIGHTS_SIZE),
                FieldSpec::word("fwChipModule").with_default(NOT_SUPPORTED),
                FieldSpec::word("fwMagReadModule").with_default(NOT_SUPPORTED),
                FieldSpec::word("fwMagWriteModule").with_default(NOT_SUPPORTED),
                FieldSpec::word("fwFrontImageModule").with_default(NOT_SUPPORTED),
                FieldSpec::word("fwBackImageModule").with_default(NOT_SUPPORTED),
                FieldSpec::word("wDevicePosition").with_default(3),
                FieldSpec::word("usPowerSaveRecoveryTime"),
            ],
        },
        Extension { since: Version::V3_20, fields: &[FieldSpec::word("wAntiFraudModule")] },
    ],
};

facade! {
    /// 카드 리더 상태 (`WFSIDCSTATUS`)
    ///
    /// 3.10 이후에 추가된 필드는 낮은 버전에서 읽으면 지원하지 않음을 나타내는 기본값이
    /// 반환됩니다.
    ///
    /// ## 예제
    /// ```rust
    /// use xfs::{idc::{IdcStatus, Media}, Options, Version};
    ///
    /// let mut status = IdcStatus::new(Options::new(Version::V3_00))?;
    /// status.set_media(Media::Present)?;
    ///
    /// let copy = IdcStatus::copy_from(Options::new(Version::V3_30), &status)?;
    /// assert_eq!(copy.media()?, Media::Present);
    /// assert_eq!(copy, status);
    /// # Ok::<(), xfs::Error>(())
    /// ```
    pub struct IdcStatus(STATUS);
}

impl<B: AsRef<[u8]>> IdcStatus<B> {
    pub fn device(&self) -> Result<DeviceState, Error> {
        self.0.constant("fwDevice")
    }

    pub fn media(&self) -> Result<Media, Error> {
        self.0.constant("fwMedia")
    }

    pub fn retain_bin(&self) -> Result<RetainBin, Error> {
        self.0.constant("fwRetainBin")
    }

    pub fn security(&self) -> Result<Security, Error> {
        self.0.constant("fwSecurity")
    }

    /// 회수함에 회수된 카드 수
    pub fn cards(&self) -> Result<u16, Error> {
        self.0.raw("usCards").map(|v| v as u16)
    }

    pub fn chip_power(&self) -> Result<ChipPower, Error> {
        self.0.constant("fwChipPower")
    }

    pub fn extra(&self) -> Result<Extra, Error> {
        self.0.key_values("lpszExtra")
    }

    /// 안내 표시등 상태를 읽습니다. 인덱스는 `WFS_IDC_GUIDANCE_*` 값입니다.
    pub fn guid_lights(&self) -> Result<[GuidanceLights; GUIDLIGHTS_SIZE], Error> {
        let raw = self.0.array("dwGuidLights")?;
        array_init::try_array_init(|i| GuidanceLights::from_raw(raw[i] as u32))
    }

    pub fn chip_module(&self) -> Result<ChipModule, Error> {
        self.0.constant("fwChipModule")
    }

    pub fn mag_read_module(&self) -> Result<MagModule, Error> {
        self.0.constant("fwMagReadModule")
    }

    pub fn mag_write_module(&self) -> Result<MagModule, Error> {
        self.0.constant("fwMagWriteModule")
    }

    pub fn front_image_module(&self) -> Result<ImageModule, Error> {
        self.0.constant("fwFrontImageModule")
    }

    pub fn back_image_module(&self) -> Result<ImageModule, Error> {
        self.0.constant("fwBackImageModule")
    }

    pub fn device_position(&self) -> Result<DevicePosition, Error> {
        self.0.constant("wDevicePosition")
    }

    /// 절전 모드에서 복귀하는 데 걸리는 시간(초)
    pub fn power_save_recovery_time(&self) -> Result<u16, Error> {
        self.0.raw("usPowerSaveRecoveryTime").map(|v| v as u16)
    }

    pub fn anti_fraud_module(&self) -> Result<AntiFraudModule, Error> {
        self.0.constant("wAntiFraudModule")
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> IdcStatus<B> {
    pub fn set_device(&mut self, device: DeviceState) -> Result<(), Error> {
        self.0.set_constant("fwDevice", device)
    }

    pub fn set_media(&mut self, media: Media) -> Result<(), Error> {
        self.0.set_constant("fwMedia", media)
    }

    pub fn set_retain_bin(&mut self, retain_bin: RetainBin) -> Result<(), Error> {
        self.0.set_constant("fwRetainBin", retain_bin)
    }

    pub fn set_security(&mut self, security: Security) -> Result<(), Error> {
        self.0.set_constant("fwSecurity", security)
    }

    pub fn set_cards(&mut self, cards: u16) -> Result<(), Error> {
        self.0.set_raw("usCards", cards.into())
    }

    pub fn set_chip_power(&mut self, chip_power: ChipPower) -> Result<(), Error> {
        self.0.set_constant("fwChipPower", chip_power)
    }

    pub fn set_guid_light(&mut self, index: usize, lights: GuidanceLights) -> Result<(), Error> {
        self.0.set_array_element("dwGuidLights", index, lights.raw().into())
    }

    pub fn set_chip_module(&mut self, module: ChipModule) -> Result<(), Error> {
        self.0.set_constant("fwChipModule", module)
    }

    pub fn set_mag_read_module(&mut self, module: MagModule) -> Result<(), Error> {
        self.0.set_constant("fwMagReadModule", module)
    }

    pub fn set_mag_write_module(&mut self, module: MagModule) -> Result<(), Error> {
        self.0.set_constant("fwMagWriteModule", module)
    }

    pub fn set_front_image_module(&mut self, module: ImageModule) -> Result<(), Error> {
        self.0.set_constant("fwFrontImageModule", module)
    }

    pub fn set_back_image_module(&mut self, module: ImageModule) -> Result<(), Error> {
        self.0.set_constant("fwBackImageModule", module)
    }

    pub fn set_device_position(&mut self, position: DevicePosition) -> Result<(), Error> {
        self.0.set_constant("wDevicePosition", position)
    }

    pub fn set_power_save_recovery_time(&mut self, secs: u16) -> Result<(), Error> {
        self.0.set_raw("usPowerSaveRecoveryTime", secs.into())
    }

    pub fn set_anti_fraud_module(&mut self, module: AntiFraudModule) -> Result<(), Error> {
        self.0.set_constant("wAntiFraudModule", module)
    }
}

impl IdcStatus<Vec<u8>> {
    pub fn set_extra(&mut self, extra: &Extra) -> Result<(), Error> {
        self.0.set_key_values("lpszExtra", extra)
    }
}
