// SPDX-License-Identifier: MPL-2.0

//! 여러 서비스 클래스가 공유하는 상수 모듈입니다.

use bitflags::bitflags;

/// 안내 표시등 배열의 크기 (`WFS_*_GUIDLIGHTS_SIZE`)
pub const GUIDLIGHTS_SIZE: usize = 32;

constants! {
    /// 장치 상태 (`fwDevice`)
    pub enum DeviceState {
        Online = 0,
        Offline = 1,
        PowerOff = 2,
        NoDevice = 3,
        HwError = 4,
        UserError = 5,
        Busy = 6,
        FraudAttempt = 7,
        PotentialFraud = 8,
    }
}

constants! {
    /// 장치가 정상 동작 위치에 있는지 여부 (`wDevicePosition`)
    pub enum DevicePosition {
        InPosition = 0,
        NotInPosition = 1,
        Unknown = 2,
        NotSupported = 3,
    }
}

constants! {
    /// 부정 사용 방지 모듈 상태 (`wAntiFraudModule`)
    pub enum AntiFraudModule {
        NotSupported = 0,
        Ok = 1,
        Inoperable = 2,
        DeviceDetected = 3,
        Unknown = 4,
    }
}

bitflags! {
    /// 안내 표시등 상태 (`dwGuidLights`)
    ///
    /// 빈 값은 해당 표시등이 없음을 의미합니다.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GuidanceLights: u32 {
        const OFF = 0x0000_0001;
        const SLOW_FLASH = 0x0000_0004;
        const MEDIUM_FLASH = 0x0000_0008;
        const QUICK_FLASH = 0x0000_0010;
        const CONTINUOUS = 0x0000_0080;
        const RED = 0x0000_0100;
        const GREEN = 0x0000_0200;
        const YELLOW = 0x0000_0400;
        const BLUE = 0x0000_0800;
        const CYAN = 0x0000_1000;
        const MAGENTA = 0x0000_2000;
        const WHITE = 0x0000_4000;
        /// 3.30부터 사용되는 진입 방향 표시
        const ENTRY = 0x0010_0000;
        /// 3.30부터 사용되는 퇴출 방향 표시
        const EXIT = 0x0020_0000;
    }
}

impl_bitmask!(GuidanceLights);
