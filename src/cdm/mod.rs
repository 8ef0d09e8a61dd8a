// SPDX-License-Identifier: MPL-2.0

//! 현금 방출기(CDM) 서비스 클래스 모듈입니다.

mod tests;

use crate::{
    common::{AntiFraudModule, DevicePosition, DeviceState, GuidanceLights, GUIDLIGHTS_SIZE},
    constant::XfsBitmask,
    data::Extra,
    Error,
};

use xfs_layout::{Extension, FieldSpec, StructSpec, Version};

constants! {
    /// 금고 문 상태 (`fwSafeDoor`)
    pub enum SafeDoor {
        NotSupported = 1,
        Open = 2,
        Closed = 3,
        Unknown = 5,
    }
}

constants! {
    /// 현금 카세트 전체의 상태 (`fwDispenser`)
    pub enum Dispenser {
        Ok = 0,
        CuState = 1,
        CuStop = 2,
        CuUnknown = 3,
    }
}

constants! {
    /// 중간 적재부 상태 (`fwIntermediateStacker`)
    pub enum IntermediateStacker {
        Empty = 0,
        NotEmpty = 1,
        NotEmptyCustomer = 2,
        NotEmptyUnknown = 3,
        Unknown = 4,
        NotSupported = 5,
    }
}

constants! {
    /// 출금구 위치 (`fwPosition`)
    pub enum OutputPosition {
        Null = 0x0000,
        Left = 0x0001,
        Right = 0x0002,
        Center = 0x0004,
        Top = 0x0040,
        Bottom = 0x0080,
        Front = 0x0800,
        Rear = 0x1000,
    }
}

constants! {
    /// 셔터 상태 (`fwShutter`)
    pub enum Shutter {
        Closed = 0,
        Open = 1,
        Jammed = 2,
        Unknown = 3,
        NotSupported = 4,
    }
}

constants! {
    /// 출금구에 남은 현금 여부 (`fwPositionStatus`)
    pub enum PositionStatus {
        Empty = 0,
        NotEmpty = 1,
        Unknown = 2,
        NotSupported = 3,
    }
}

constants! {
    /// 이송 장치 상태 (`fwTransport`)
    pub enum Transport {
        Ok = 0,
        Inoperable = 1,
        Unknown = 2,
        NotSupported = 3,
    }
}

constants! {
    /// 이송 장치에 남은 현금 여부 (`fwTransportStatus`)
    pub enum TransportStatus {
        Empty = 0,
        NotEmpty = 1,
        NotEmptyCustomer = 2,
        NotEmptyUnknown = 3,
        NotSupported = 4,
    }
}

constants! {
    /// 걸린 셔터의 위치 (`wJammedShutterPosition`)
    pub enum JammedShutterPosition {
        NotSupported = 0,
        NotJammed = 1,
        Open = 2,
        PartiallyOpen = 3,
        Closed = 4,
        Unknown = 5,
    }
}

/// `WFSCDMOUTPOS`
pub static OUT_POS: StructSpec = StructSpec {
    name: "WFSCDMOUTPOS",
    since: Version::V3_00,
    fields: &[
        FieldSpec::word("fwPosition"),
        FieldSpec::word("fwShutter"),
        FieldSpec::word("fwPositionStatus"),
        FieldSpec::word("fwTransport"),
        FieldSpec::word("fwTransportStatus"),
    ],
    extensions: &[Extension {
        since: Version::V3_20,
        fields: &[FieldSpec::word("wJammedShutterPosition")],
    }],
};

/// `WFSCDMSTATUS`
pub static STATUS: StructSpec = StructSpec {
    name: "WFSCDMSTATUS",
    since: Version::V3_00,
    fields: &[
        FieldSpec::word("fwDevice"),
        FieldSpec::word("fwSafeDoor"),
        FieldSpec::word("fwDispenser"),
        FieldSpec::word("fwIntermediateStacker"),
        FieldSpec::list("lppPositions", &OUT_POS),
        FieldSpec::key_values("lpszExtra"),
    ],
    extensions: &[
        Extension {
            since: Version::V3_10,
            fields: &[
                FieldSpec::array("dwGuidLights", 4, GUIDLIGHTS_SIZE),
                FieldSpec::word("wDevicePosition").with_default(3),
                FieldSpec::word("usPowerSaveRecoveryTime"),
            ],
        },
        Extension { since: Version::V3_20, fields: &[FieldSpec::word("wAntiFraudModule")] },
    ],
};

facade! {
    /// 출금구 하나의 상태 (`WFSCDMOUTPOS`)
    pub struct CdmOutPos(OUT_POS);
}

impl<B: AsRef<[u8]>> CdmOutPos<B> {
    pub fn position(&self) -> Result<OutputPosition, Error> {
        self.0.constant("fwPosition")
    }

    pub fn shutter(&self) -> Result<Shutter, Error> {
        self.0.constant("fwShutter")
    }

    pub fn position_status(&self) -> Result<PositionStatus, Error> {
        self.0.constant("fwPositionStatus")
    }

    pub fn transport(&self) -> Result<Transport, Error> {
        self.0.constant("fwTransport")
    }

    pub fn transport_status(&self) -> Result<TransportStatus, Error> {
        self.0.constant("fwTransportStatus")
    }

    /// 3.20 미만에서는 항상 [`JammedShutterPosition::NotSupported`]입니다.
    pub fn jammed_shutter_position(&self) -> Result<JammedShutterPosition, Error> {
        self.0.constant("wJammedShutterPosition")
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdmOutPos<B> {
    pub fn set_position(&mut self, position: OutputPosition) -> Result<(), Error> {
        self.0.set_constant("fwPosition", position)
    }

    pub fn set_shutter(&mut self, shutter: Shutter) -> Result<(), Error> {
        self.0.set_constant("fwShutter", shutter)
    }

    pub fn set_position_status(&mut self, status: PositionStatus) -> Result<(), Error> {
        self.0.set_constant("fwPositionStatus", status)
    }

    pub fn set_transport(&mut self, transport: Transport) -> Result<(), Error> {
        self.0.set_constant("fwTransport", transport)
    }

    pub fn set_transport_status(&mut self, status: TransportStatus) -> Result<(), Error> {
        self.0.set_constant("fwTransportStatus", status)
    }

    pub fn set_jammed_shutter_position(
        &mut self,
        position: JammedShutterPosition,
    ) -> Result<(), Error> {
        self.0.set_constant("wJammedShutterPosition", position)
    }
}

facade! {
    /// 현금 방출기 상태 (`WFSCDMSTATUS`)
    ///
    /// 출금구 목록은 null로 끝나는 [`CdmOutPos`] 포인터 배열입니다. 복사하면 각 출금구도
    /// 대상 버전으로 함께 복사됩니다.
    pub struct CdmStatus(STATUS);
}

impl<B: AsRef<[u8]>> CdmStatus<B> {
    pub fn device(&self) -> Result<DeviceState, Error> {
        self.0.constant("fwDevice")
    }

    pub fn safe_door(&self) -> Result<SafeDoor, Error> {
        self.0.constant("fwSafeDoor")
    }

    pub fn dispenser(&self) -> Result<Dispenser, Error> {
        self.0.constant("fwDispenser")
    }

    pub fn intermediate_stacker(&self) -> Result<IntermediateStacker, Error> {
        self.0.constant("fwIntermediateStacker")
    }

    /// 출금구 목록을 반환합니다. 포인터가 null이면 빈 목록입니다.
    pub fn positions(&self) -> Result<Vec<CdmOutPos<&[u8]>>, Error> {
        Ok(self.0.structs("lppPositions")?.into_iter().map(CdmOutPos).collect())
    }

    pub fn extra(&self) -> Result<Extra, Error> {
        self.0.key_values("lpszExtra")
    }

    pub fn guid_lights(&self) -> Result<[GuidanceLights; GUIDLIGHTS_SIZE], Error> {
        let raw = self.0.array("dwGuidLights")?;
        array_init::try_array_init(|i| GuidanceLights::from_raw(raw[i] as u32))
    }

    pub fn device_position(&self) -> Result<DevicePosition, Error> {
        self.0.constant("wDevicePosition")
    }

    pub fn power_save_recovery_time(&self) -> Result<u16, Error> {
        self.0.raw("usPowerSaveRecoveryTime").map(|v| v as u16)
    }

    pub fn anti_fraud_module(&self) -> Result<AntiFraudModule, Error> {
        self.0.constant("wAntiFraudModule")
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CdmStatus<B> {
    pub fn set_device(&mut self, device: DeviceState) -> Result<(), Error> {
        self.0.set_constant("fwDevice", device)
    }

    pub fn set_safe_door(&mut self, safe_door: SafeDoor) -> Result<(), Error> {
        self.0.set_constant("fwSafeDoor", safe_door)
    }

    pub fn set_dispenser(&mut self, dispenser: Dispenser) -> Result<(), Error> {
        self.0.set_constant("fwDispenser", dispenser)
    }

    pub fn set_intermediate_stacker(&mut self, stacker: IntermediateStacker) -> Result<(), Error> {
        self.0.set_constant("fwIntermediateStacker", stacker)
    }

    pub fn set_guid_light(&mut self, index: usize, lights: GuidanceLights) -> Result<(), Error> {
        self.0.set_array_element("dwGuidLights", index, lights.raw().into())
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

impl CdmStatus<Vec<u8>> {
    pub fn set_extra(&mut self, extra: &Extra) -> Result<(), Error> {
        self.0.set_key_values("lpszExtra", extra)
    }

    /// 출금구 목록을 현재 버전으로 복사하여 설정합니다.
    pub fn set_positions<C: AsRef<[u8]>>(&mut self, positions: &[CdmOutPos<C>]) -> Result<(), Error> {
        self.0.set_structs("lppPositions", positions.iter().map(|pos| &pos.0))
    }
}
