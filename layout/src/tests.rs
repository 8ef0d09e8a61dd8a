// SPDX-License-Identifier: MPL-2.0

#![cfg(test)]

use crate::{Error, Extension, FieldSpec, StructSpec, Version, VersionRange, POINTER_WIDTH};

static POSITION: StructSpec = StructSpec {
    name: "POSITION",
    since: Version::V3_00,
    fields: &[FieldSpec::word("fwPosition"), FieldSpec::word("fwShutter")],
    extensions: &[Extension {
        since: Version::V3_20,
        fields: &[FieldSpec::word("wJammedShutterPosition")],
    }],
};

static STATUS: StructSpec = StructSpec {
    name: "STATUS",
    since: Version::V3_00,
    fields: &[FieldSpec::word("fwDevice"), FieldSpec::key_values("lpszExtra")],
    extensions: &[
        Extension {
            since: Version::V3_10,
            fields: &[
                FieldSpec::array("dwGuidLights", 4, 32),
                FieldSpec::word("wDevicePosition").with_default(3),
            ],
        },
        Extension {
            since: Version::V3_20,
            fields: &[FieldSpec::word("wAntiFraudModule"), FieldSpec::nested("position", &POSITION)],
        },
        Extension { since: Version::V3_30, fields: &[FieldSpec::dword_list("lpdwCommands")] },
    ],
};

// 3.20에서 커지는 구조체가 기본 필드의 마지막에 위치합니다.
static TAIL: StructSpec = StructSpec {
    name: "TAIL",
    since: Version::V3_00,
    fields: &[FieldSpec::word("fwDevice"), FieldSpec::nested("position", &POSITION)],
    extensions: &[Extension { since: Version::V3_20, fields: &[FieldSpec::dword("dwFlags")] }],
};

const VERSIONS: [Version; 4] = [Version::V3_00, Version::V3_10, Version::V3_20, Version::V3_30];

#[test]
fn test_layout_offsets() {
    let layout = STATUS.layout(Version::V3_00).unwrap();
    assert_eq!(layout.offset_of("fwDevice").unwrap(), 0);
    assert_eq!(layout.offset_of("lpszExtra").unwrap(), 2);
    assert_eq!(layout.len(), 2 + POINTER_WIDTH);

    let layout = STATUS.layout(Version::V3_30).unwrap();
    assert_eq!(layout.offset_of("lpszExtra").unwrap(), 2);
    assert_eq!(layout.offset_of("dwGuidLights").unwrap(), 6);
    assert_eq!(layout.offset_of("wDevicePosition").unwrap(), 134);
    assert_eq!(layout.offset_of("wAntiFraudModule").unwrap(), 136);
    assert_eq!(layout.offset_of("position").unwrap(), 138);
    assert_eq!(layout.offset_of("lpdwCommands").unwrap(), 144);
    assert_eq!(layout.len(), 148);
}

#[test]
fn test_layout_has_no_gaps() {
    for spec in &[&STATUS, &TAIL] {
        for &version in &VERSIONS {
            let layout = spec.layout(version).unwrap();
            let mut expected = 0;
            for placement in layout.placements() {
                assert_eq!(placement.offset, expected, "{} at {}", placement.name(), version);
                expected += placement.width;
            }
            assert_eq!(layout.len(), expected);
        }
    }
}

#[test]
fn test_offset_stability() {
    for spec in &[&POSITION, &STATUS, &TAIL] {
        for (i, &low) in VERSIONS.iter().enumerate() {
            let low_layout = spec.layout(low).unwrap();
            for &high in &VERSIONS[i..] {
                let high_layout = spec.layout(high).unwrap();
                for placement in low_layout.placements() {
                    assert_eq!(
                        high_layout.offset_of(placement.name()).unwrap(),
                        placement.offset,
                        "{}.{} moved between {} and {}",
                        spec.name,
                        placement.name(),
                        low,
                        high
                    );
                }
            }
        }
    }
}

#[test]
fn test_nested_width_follows_version() {
    assert_eq!(POSITION.layout(Version::V3_10).unwrap().len(), 4);
    assert_eq!(POSITION.layout(Version::V3_20).unwrap().len(), 6);

    assert_eq!(TAIL.layout(Version::V3_10).unwrap().locate("position").unwrap().width, 4);
    let layout = TAIL.layout(Version::V3_20).unwrap();
    assert_eq!(layout.locate("position").unwrap().width, 6);
    assert_eq!(layout.offset_of("dwFlags").unwrap(), 8);
}

#[test]
fn test_growing_nested_struct_rejected() {
    static MOVING: StructSpec = StructSpec {
        name: "MOVING",
        since: Version::V3_00,
        fields: &[FieldSpec::nested("position", &POSITION), FieldSpec::word("fwDevice")],
        extensions: &[],
    };

    // 커지는 버전보다 먼저 추가된 확장 필드도 오프셋이 바뀝니다.
    static MOVING_EXTENSION: StructSpec = StructSpec {
        name: "MOVING_EXTENSION",
        since: Version::V3_00,
        fields: &[FieldSpec::nested("position", &POSITION)],
        extensions: &[Extension { since: Version::V3_10, fields: &[FieldSpec::word("wMode")] }],
    };

    static OUTER: StructSpec = StructSpec {
        name: "OUTER",
        since: Version::V3_00,
        fields: &[FieldSpec::nested("tail", &TAIL), FieldSpec::word("wLast")],
        extensions: &[],
    };

    for &version in &VERSIONS {
        assert_eq!(
            MOVING.layout(version).unwrap_err(),
            Error::UnstableOffset {
                strukt: "MOVING",
                field: "fwDevice",
                nested: "position",
                growth: Version::V3_20,
            }
        );
    }
    assert!(matches!(
        MOVING_EXTENSION.validate(),
        Err(Error::UnstableOffset { field: "wMode", .. })
    ));
    assert!(matches!(OUTER.validate(), Err(Error::UnstableOffset { field: "wLast", .. })));

    assert_eq!(TAIL.last_growth(), Version::V3_20);
    assert_eq!(OUTER.last_growth(), Version::V3_20);
    assert!(STATUS.validate().is_ok());
    assert!(TAIL.validate().is_ok());
}

#[test]
fn test_locate_errors() {
    let layout = STATUS.layout(Version::V3_00).unwrap();

    assert_eq!(
        layout.locate("wAntiFraudModule").unwrap_err(),
        Error::UnsupportedForVersion {
            field: "wAntiFraudModule",
            version: Version::V3_00,
            since: Version::V3_20,
        }
    );
    assert!(matches!(layout.locate("fwMedia"), Err(Error::UnknownField { .. })));
    assert!(layout.get("dwGuidLights").is_none());
}

#[test]
fn test_layout_below_struct_version() {
    let err = STATUS.layout(Version::new(2, 0, 0)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion { strukt: "STATUS", .. }));
}

#[test]
fn test_declared_fields() {
    let names: Vec<_> = STATUS.declared().map(|(f, _)| f.name).collect();
    assert_eq!(
        names,
        [
            "fwDevice",
            "lpszExtra",
            "dwGuidLights",
            "wDevicePosition",
            "wAntiFraudModule",
            "position",
            "lpdwCommands",
        ]
    );

    let (field, since) = STATUS.field("wDevicePosition").unwrap();
    assert_eq!(field.default, 3);
    assert_eq!(since, Version::V3_10);
    assert_eq!(STATUS.latest(), Version::V3_30);
}

#[test]
fn test_version_word() {
    assert_eq!(Version::from_word(0x0a03), Version::V3_10);
    assert_eq!(Version::V3_30.to_word(), 0x1e03);
    assert_eq!(Version::from_word(Version::V3_00.to_word()), Version::V3_00);
}

#[test]
fn test_version_range_dword() {
    let range = VersionRange::from_dword(0x1e03_0003);
    assert_eq!(range, VersionRange::SUPPORTED);
    assert_eq!(range.to_dword(), 0x1e03_0003);
    assert!(range.contains(Version::V3_20));
    assert!(!range.contains(Version::new(3, 40, 0)));
    assert_eq!(range.to_string(), "3.00-3.30");
}

#[test]
fn test_version_text() {
    assert_eq!("3.10".parse::<Version>().unwrap(), Version::V3_10);
    assert_eq!("3.10.2".parse::<Version>().unwrap(), Version::new(3, 10, 2));
    assert_eq!(Version::V3_00.to_string(), "3.00");
    assert_eq!(Version::new(3, 10, 2).to_string(), "3.10.2");

    for text in ["", "3", "3.", "3.x", "3.10.1.0", "300.0"].iter() {
        assert!(text.parse::<Version>().is_err(), "{:?}", text);
    }
}

#[test]
fn test_version_order() {
    assert!(Version::V3_00 < Version::V3_10);
    assert!(Version::V3_10 < Version::new(3, 10, 1));
    assert!(Version::new(3, 10, 1) < Version::V3_20);
}

#[cfg(feature = "serde")]
#[test]
fn test_version_serde() {
    let text = serde_json::to_string(&Version::V3_20).unwrap();
    assert_eq!(serde_json::from_str::<Version>(&text).unwrap(), Version::V3_20);
}
