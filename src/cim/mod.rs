// SPDX-License-Identifier: MPL-2.0

//! 현금 입금기(CIM) 서비스 클래스 모듈입니다.


use crate::{
    common::{GuidanceLights, GUIDLIGHTS_SIZE},
    constant::XfsBitmask,
    data::Extra,
    Error,
};

use bitflags::bitflags;
use xfs_layout::{Extension, FieldSpec, StructSpec, Version};

/// CIM 서비스 클래스 번호 (`WFS_SERVICE_CLASS_CIM`)
pub const SERVICE_CLASS: u16 = 13;

const SERVICE_OFFSET: u32 = 1300;

/// `WFS_CMD_CIM_CASH_IN_START`
pub const CMD_CASH_IN_START: u32 = SERVICE_OFFSET + 1;
/// `WFS_CMD_CIM_CASH_IN`
pub const CMD_CASH_IN: u32 = SERVICE_OFFSET + 2;
/// `WFS_CMD_CIM_CASH_IN_END`
pub const CMD_CASH_IN_END: u32 = SERVICE_OFFSET + 3;
/// `WFS_CMD_CIM_CASH_IN_ROLLBACK`
pub const CMD_CASH_IN_ROLLBACK: u32 = SERVICE_OFFSET + 4;
/// `WFS_CMD_CIM_RETRACT`
pub const CMD_RETRACT: u32 = SERVICE_OFFSET + 5;
/// `WFS_CMD_CIM_RESET`
pub const CMD_RESET: u32 = SERVICE_OFFSET + 13;

constants! {
    /// 장치 종류 (`fwType`)
    pub enum CimType {
        TellerBill = 0,
        SelfServiceBill = 1,
        TellerCoin = 2,
        SelfServiceCoin = 3,
    }
}

constants! {
    /// 여러 매체를 한 번에 입금하는 방식 (`wMixedMode`)
    pub enum MixedMode {
        NotSupported = 0,
        IpmMixedMedia = 1,
    }
}

bitflags! {
    /// 입출금구 위치 (`fwPositions`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Positions: u32 {
        const IN_LEFT = 0x0001;
        const IN_RIGHT = 0x0002;
        const IN_CENTER = 0x0004;
        const IN_TOP = 0x0008;
        const IN_BOTTOM = 0x0010;
        const IN_FRONT = 0x0020;
        const IN_REAR = 0x0040;
        const OUT_LEFT = 0x0080;
        const OUT_RIGHT = 0x0100;
        const OUT_CENTER = 0x0200;
        const OUT_TOP = 0x0400;
        const OUT_BOTTOM = 0x0800;
        const OUT_FRONT = 0x1000;
        const OUT_REAR = 0x2000;
    }
}

bitflags! {
    /// 지원하는 교환 방식 (`fwExchangeType`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ExchangeType: u32 {
        const BY_HAND = 0x0001;
        const TO_CASSETTES = 0x0002;
        const CLEAR_RECYCLER = 0x0004;
        const DEPOSIT_INTO = 0x0008;
    }
}

bitflags! {
    /// 회수할 수 있는 위치 (`fwRetractAreas`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RetractAreas: u32 {
        const RETRACT = 0x0001;
        const TRANSPORT = 0x0002;
        const STACKER = 0x0004;
        const BILL_CASSETTES = 0x0008;
        const NOT_SUPPORTED = 0x0010;
    }
}

bitflags! {
    /// 이송부나 적재부에 남은 매체에 대한 동작
    /// (`fwRetractTransportActions`, `fwRetractStackerActions`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RetractActions: u32 {
        const PRESENT = 0x0001;
        const RETRACT = 0x0002;
        const NOT_SUPPORTED = 0x0004;
    }
}

bitflags! {
    /// 매체별로 얻을 수 있는 정보 (`dwItemInfoTypes`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ItemInfoTypes: u32 {
        const SERIAL_NUMBER = 0x0001;
        const SIGNATURE = 0x0002;
        const IMAGE_FILE = 0x0004;
    }
}

bitflags! {
    /// 입금 한도 설정 방식 (`fwCashInLimit`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CashInLimit: u32 {
        const BY_TOTAL_ITEMS = 0x0001;
        const BY_AMOUNT = 0x0002;
    }
}

bitflags! {
    /// 지원하는 계수 방식 (`fwCountActions`)
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CountActions: u32 {
        const INDIVIDUAL = 0x0001;
        const ALL = 0x0002;
    }
}

impl_bitmask!(
    Positions,
    ExchangeType,
    RetractAreas,
    RetractActions,
    ItemInfoTypes,
    CashInLimit,
    CountActions,
);

/// `WFSCIMCAPS`
pub static CAPS: StructSpec = StructSpec {
    name: "WFSCIMCAPS",
    since: Version::V3_00,
    fields: &[
        FieldSpec::word("wClass").with_default(SERVICE_CLASS as u64),
        FieldSpec::word("fwType"),
        FieldSpec::word("wMaxCashInItems"),
        FieldSpec::dword("bCompound"),
        FieldSpec::dword("bShutter"),
        FieldSpec::dword("bShutterControl"),
        FieldSpec::dword("bSafeDoor"),
        FieldSpec::dword("bCashBox"),
        FieldSpec::word("fwIntermediateStacker"),
        FieldSpec::dword("bItemsTakenSensor"),
        FieldSpec::dword("bItemsInsertedSensor"),
        FieldSpec::word("fwPositions"),
        FieldSpec::word("fwExchangeType"),
        FieldSpec::word("fwRetractAreas"),
        FieldSpec::word("fwRetractTransportActions"),
        FieldSpec::word("fwRetractStackerActions"),
        FieldSpec::key_values("lpszExtra"),
    ],
    extensions: &[
        Extension {
            since: Version::V3_10,
            fields: &[
                FieldSpec::array("dwGuidLights", 4, GUIDLIGHTS_SIZE),
                FieldSpec::dword("dwItemInfoTypes"),
                FieldSpec::dword("bCompareSignatures"),
                FieldSpec::dword("bPowerSaveControl"),
                FieldSpec::dword("bReplenish"),
                FieldSpec::word("fwCashInLimit"),
                FieldSpec::word("fwCountActions"),
            ],
        },
        Extension {
            since: Version::V3_20,
            fields: &[
                FieldSpec::dword("bDeviceLockControl"),
                FieldSpec::word("wMixedMode"),
                FieldSpec::dword("bMixedDepositAndRollback"),
                FieldSpec::dword("bAntiFraudModule"),
            ],
        },
        Extension {
            since: Version::V3_30,
            fields: &[
                FieldSpec::dword("bDeplete"),
                FieldSpec::dword("bBlacklist"),
                FieldSpec::dword_list("lpdwSynchronizableCommands"),
            ],
        },
    ],
};

facade! {
    /// 현금 입금기 기능 정보 (`WFSCIMCAPS`)
    ///
    /// `BOOL` 필드는 `bool`로 읽고 씁니다. 낮은 버전에서 읽으면 이후에 추가된 기능은 모두
    /// 지원하지 않는 것으로 나타납니다.
    ///
    /// ## 예제
    /// ```rust
    /// use xfs::{cim::{self, CimCaps}, Options, Version};
    ///
    /// let mut caps = CimCaps::new(Options::new(Version::V3_30))?;
    /// caps.set_synchronizable_commands(&[cim::CMD_CASH_IN, cim::CMD_RESET])?;
    ///
    /// let copy = CimCaps::copy_from(Options::new(Version::V3_20), &caps)?;
    /// assert!(copy.synchronizable_commands()?.is_empty());
    /// # Ok::<(), xfs::Error>(())
    /// ```
    pub struct CimCaps(CAPS);
}

impl<B: AsRef<[u8]>> CimCaps<B> {
    pub fn class(&self) -> Result<u16, Error> {
        self.0.raw("wClass").map(|v| v as u16)
    }

    pub fn cim_type(&self) -> Result<CimType, Error> {
        self.0.constant("fwType")
    }

    /// 한 번에 입금할 수 있는 최대 매수
    pub fn max_cash_in_items(&self) -> Result<u16, Error> {
        self.0.raw("wMaxCashInItems").map(|v| v as u16)
    }

    pub fn compound(&self) -> Result<bool, Error> {
        self.0.flag("bCompound")
    }

    pub fn shutter(&self) -> Result<bool, Error> {
        self.0.flag("bShutter")
    }

    pub fn shutter_control(&self) -> Result<bool, Error> {
        self.0.flag("bShutterControl")
    }

    pub fn safe_door(&self) -> Result<bool, Error> {
        self.0.flag("bSafeDoor")
    }

    pub fn cash_box(&self) -> Result<bool, Error> {
        self.0.flag("bCashBox")
    }

    /// 중간 적재부에 둘 수 있는 매수입니다. 0이면 중간 적재부가 없습니다.
    pub fn intermediate_stacker(&self) -> Result<u16, Error> {
        self.0.raw("fwIntermediateStacker").map(|v| v as u16)
    }

    pub fn items_taken_sensor(&self) -> Result<bool, Error> {
        self.0.flag("bItemsTakenSensor")
    }

    pub fn items_inserted_sensor(&self) -> Result<bool, Error> {
        self.0.flag("bItemsInsertedSensor")
    }

    pub fn positions(&self) -> Result<Positions, Error> {
        self.0.bitmask("fwPositions")
    }

    pub fn exchange_type(&self) -> Result<ExchangeType, Error> {
        self.0.bitmask("fwExchangeType")
    }

    pub fn retract_areas(&self) -> Result<RetractAreas, Error> {
        self.0.bitmask("fwRetractAreas")
    }

    pub fn retract_transport_actions(&self) -> Result<RetractActions, Error> {
        self.0.bitmask("fwRetractTransportActions")
    }

    pub fn retract_stacker_actions(&self) -> Result<RetractActions, Error> {
        self.0.bitmask("fwRetractStackerActions")
    }

    pub fn extra(&self) -> Result<Extra, Error> {
        self.0.key_values("lpszExtra")
    }

    /// 안내 표시등 기능을 읽습니다. 인덱스는 `WFS_CIM_GUIDANCE_*` 값입니다.
    pub fn guid_lights(&self) -> Result<[GuidanceLights; GUIDLIGHTS_SIZE], Error> {
        let raw = self.0.array("dwGuidLights")?;
        array_init::try_array_init(|i| GuidanceLights::from_raw(raw[i] as u32))
    }

    pub fn item_info_types(&self) -> Result<ItemInfoTypes, Error> {
        self.0.bitmask("dwItemInfoTypes")
    }

    pub fn compare_signatures(&self) -> Result<bool, Error> {
        self.0.flag("bCompareSignatures")
    }

    pub fn power_save_control(&self) -> Result<bool, Error> {
        self.0.flag("bPowerSaveControl")
    }

    pub fn replenish(&self) -> Result<bool, Error> {
        self.0.flag("bReplenish")
    }

    pub fn cash_in_limit(&self) -> Result<CashInLimit, Error> {
        self.0.bitmask("fwCashInLimit")
    }

    pub fn count_actions(&self) -> Result<CountActions, Error> {
        self.0.bitmask("fwCountActions")
    }

    pub fn device_lock_control(&self) -> Result<bool, Error> {
        self.0.flag("bDeviceLockControl")
    }

    pub fn mixed_mode(&self) -> Result<MixedMode, Error> {
        self.0.constant("wMixedMode")
    }

    pub fn mixed_deposit_and_rollback(&self) -> Result<bool, Error> {
        self.0.flag("bMixedDepositAndRollback")
    }

    pub fn anti_fraud_module(&self) -> Result<bool, Error> {
        self.0.flag("bAntiFraudModule")
    }

    pub fn deplete(&self) -> Result<bool, Error> {
        self.0.flag("bDeplete")
    }

    pub fn blacklist(&self) -> Result<bool, Error> {
        self.0.flag("bBlacklist")
    }

    /// 다른 서비스와 동기화하여 실행할 수 있는 명령 코드 목록
    pub fn synchronizable_commands(&self) -> Result<Vec<u32>, Error> {
        self.0.dword_list("lpdwSynchronizableCommands")
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> CimCaps<B> {
    pub fn set_class(&mut self, class: u16) -> Result<(), Error> {
        self.0.set_raw("wClass", class.into())
    }

    pub fn set_cim_type(&mut self, cim_type: CimType) -> Result<(), Error> {
        self.0.set_constant("fwType", cim_type)
    }

    pub fn set_max_cash_in_items(&mut self, items: u16) -> Result<(), Error> {
        self.0.set_raw("wMaxCashInItems", items.into())
    }

    pub fn set_compound(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bCompound", value)
    }

    pub fn set_shutter(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bShutter", value)
    }

    pub fn set_shutter_control(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bShutterControl", value)
    }

    pub fn set_safe_door(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bSafeDoor", value)
    }

    pub fn set_cash_box(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bCashBox", value)
    }

    pub fn set_intermediate_stacker(&mut self, items: u16) -> Result<(), Error> {
        self.0.set_raw("fwIntermediateStacker", items.into())
    }

    pub fn set_items_taken_sensor(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bItemsTakenSensor", value)
    }

    pub fn set_items_inserted_sensor(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bItemsInsertedSensor", value)
    }

    pub fn set_positions(&mut self, positions: Positions) -> Result<(), Error> {
        self.0.set_bitmask("fwPositions", positions)
    }

    pub fn set_exchange_type(&mut self, exchange_type: ExchangeType) -> Result<(), Error> {
        self.0.set_bitmask("fwExchangeType", exchange_type)
    }

    pub fn set_retract_areas(&mut self, areas: RetractAreas) -> Result<(), Error> {
        self.0.set_bitmask("fwRetractAreas", areas)
    }

    pub fn set_retract_transport_actions(&mut self, actions: RetractActions) -> Result<(), Error> {
        self.0.set_bitmask("fwRetractTransportActions", actions)
    }

    pub fn set_retract_stacker_actions(&mut self, actions: RetractActions) -> Result<(), Error> {
        self.0.set_bitmask("fwRetractStackerActions", actions)
    }

    pub fn set_guid_light(&mut self, index: usize, lights: GuidanceLights) -> Result<(), Error> {
        self.0.set_array_element("dwGuidLights", index, lights.raw().into())
    }

    pub fn set_item_info_types(&mut self, types: ItemInfoTypes) -> Result<(), Error> {
        self.0.set_bitmask("dwItemInfoTypes", types)
    }

    pub fn set_compare_signatures(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bCompareSignatures", value)
    }

    pub fn set_power_save_control(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bPowerSaveControl", value)
    }

    pub fn set_replenish(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bReplenish", value)
    }

    pub fn set_cash_in_limit(&mut self, limit: CashInLimit) -> Result<(), Error> {
        self.0.set_bitmask("fwCashInLimit", limit)
    }

    pub fn set_count_actions(&mut self, actions: CountActions) -> Result<(), Error> {
        self.0.set_bitmask("fwCountActions", actions)
    }

    pub fn set_device_lock_control(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bDeviceLockControl", value)
    }

    pub fn set_mixed_mode(&mut self, mode: MixedMode) -> Result<(), Error> {
        self.0.set_constant("wMixedMode", mode)
    }

    pub fn set_mixed_deposit_and_rollback(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bMixedDepositAndRollback", value)
    }

    pub fn set_anti_fraud_module(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bAntiFraudModule", value)
    }

    pub fn set_deplete(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bDeplete", value)
    }

    pub fn set_blacklist(&mut self, value: bool) -> Result<(), Error> {
        self.0.set_flag("bBlacklist", value)
    }
}

impl CimCaps<Vec<u8>> {
    pub fn set_extra(&mut self, extra: &Extra) -> Result<(), Error> {
        self.0.set_key_values("lpszExtra", extra)
    }

    pub fn set_synchronizable_commands(&mut self, commands: &[u32]) -> Result<(), Error> {
        self.0.set_dword_list("lpdwSynchronizableCommands", commands)
    }
}
