//! Movement and carrying capabilities. Pure data; nothing here is derived.

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gigantic,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Capabilities {
    pub overland: i32,
    pub throwing: i32,
    pub highjump: i32,
    pub longjump: i32,
    pub swim: i32,
    pub power: i32,
    pub size: Size,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            overland: 5,
            throwing: 6,
            highjump: 0,
            longjump: 1,
            swim: 2,
            power: 4,
            size: Size::Medium,
        }
    }
}
