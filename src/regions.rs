//! Native district names and their English display names.
//!
//! The display names match the region keys of the boundary geometry file, so
//! the map view can join case counts against it.

use std::collections::BTreeMap;

/// One of the 18 Hong Kong districts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum District {
    CentralAndWestern,
    WanChai,
    Eastern,
    Southern,
    YauTsimMong,
    ShamShuiPo,
    KowloonCity,
    WongTaiSin,
    KwunTong,
    KwaiTsing,
    TsuenWan,
    TuenMun,
    YuenLong,
    North,
    TaiPo,
    ShaTin,
    SaiKung,
    Islands,
}

impl District {
    pub const ALL: [District; 18] = [
        District::CentralAndWestern,
        District::WanChai,
        District::Eastern,
        District::Southern,
        District::YauTsimMong,
        District::ShamShuiPo,
        District::KowloonCity,
        District::WongTaiSin,
        District::KwunTong,
        District::KwaiTsing,
        District::TsuenWan,
        District::TuenMun,
        District::YuenLong,
        District::North,
        District::TaiPo,
        District::ShaTin,
        District::SaiKung,
        District::Islands,
    ];

    /// Name as it appears in the `地区名称` column of the source table.
    pub fn native_name(self) -> &'static str {
        match self {
            District::CentralAndWestern => "中西区",
            District::WanChai => "湾仔区",
            District::Eastern => "东区",
            District::Southern => "南区",
            District::YauTsimMong => "油尖旺区",
            District::ShamShuiPo => "深水埗区",
            District::KowloonCity => "九龙城区",
            District::WongTaiSin => "黄大仙区",
            District::KwunTong => "观塘区",
            District::KwaiTsing => "葵青区",
            District::TsuenWan => "荃湾区",
            District::TuenMun => "屯门区",
            District::YuenLong => "元朗区",
            District::North => "北区",
            District::TaiPo => "大埔区",
            District::ShaTin => "沙田区",
            District::SaiKung => "西贡区",
            District::Islands => "离岛区",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            District::CentralAndWestern => "Central and Western",
            District::WanChai => "Wan Chai",
            District::Eastern => "Eastern",
            District::Southern => "Southern",
            District::YauTsimMong => "Yau Tsim Mong",
            District::ShamShuiPo => "Sham Shui Po",
            District::KowloonCity => "Kowloon City",
            District::WongTaiSin => "Wong Tai Sin",
            District::KwunTong => "Kwun Tong",
            District::KwaiTsing => "Kwai Tsing",
            District::TsuenWan => "Tsuen Wan",
            District::TuenMun => "Tuen Mun",
            District::YuenLong => "Yuen Long",
            District::North => "North",
            District::TaiPo => "Tai Po",
            District::ShaTin => "Sha Tin",
            District::SaiKung => "Sai Kung",
            District::Islands => "Islands",
        }
    }

    pub fn from_native(name: &str) -> Option<District> {
        District::ALL.into_iter().find(|d| d.native_name() == name)
    }
}

/// Returns the display name for `native`, or `native` itself when it is not
/// one of the known districts.
pub fn resolve(native: &str) -> &str {
    District::from_native(native)
        .map(District::display_name)
        .unwrap_or(native)
}

/// The full `native -> display` table, for clients joining against the
/// boundary file.
pub fn name_map() -> BTreeMap<&'static str, &'static str> {
    District::ALL
        .into_iter()
        .map(|d| (d.native_name(), d.display_name()))
        .collect()
}
