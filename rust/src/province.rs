//! Province-level administrative division codes.
//!
//! The first two digits of an identity number name the province,
//! municipality, autonomous region or special administrative region
//! the number was issued in.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Known province codes and their display names, ordered by code.
pub const PROVINCES: [(u8, &str); 34] = [
    (11, "北京市"),
    (12, "天津市"),
    (13, "河北省"),
    (14, "山西省"),
    (15, "内蒙古自治区"),
    (21, "辽宁省"),
    (22, "吉林省"),
    (23, "黑龙江省"),
    (31, "上海市"),
    (32, "江苏省"),
    (33, "浙江省"),
    (34, "安徽省"),
    (35, "福建省"),
    (36, "江西省"),
    (37, "山东省"),
    (41, "河南省"),
    (42, "湖北省"),
    (43, "湖南省"),
    (44, "广东省"),
    (45, "广西壮族自治区"),
    (46, "海南省"),
    (50, "重庆市"),
    (51, "四川省"),
    (52, "贵州省"),
    (53, "云南省"),
    (54, "西藏自治区"),
    (61, "陕西省"),
    (62, "甘肃省"),
    (63, "青海省"),
    (64, "宁夏回族自治区"),
    (65, "新疆维吾尔自治区"),
    (71, "台湾省"),
    (81, "香港特别行政区"),
    (82, "澳门特别行政区"),
];

static PROVINCE_NAMES: Lazy<HashMap<u8, &'static str>> =
    Lazy::new(|| PROVINCES.iter().copied().collect());

/// Look up the display name for a two-digit province code.
///
/// Codes that do not parse or are not in [`PROVINCES`] yield an empty
/// string; reserved and historical codes are still structurally valid.
pub fn province_name(code: &str) -> &'static str {
    code.parse::<u8>()
        .ok()
        .and_then(|c| PROVINCE_NAMES.get(&c).copied())
        .unwrap_or("")
}
