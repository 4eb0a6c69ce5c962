//! Build slots.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Display group a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Components inside the case.
    Core,
    /// Monitor and case fans.
    Peripherals,
    /// Input devices and audio.
    Accessories,
}

impl Section {
    /// Heading shown above the section.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Core => "Core Components",
            Self::Peripherals => "Peripherals & Others",
            Self::Accessories => "Accessories",
        }
    }
}

/// A position in a PC build that holds at most one product.
///
/// Declaration order is the enumeration order used for display and for
/// committing a build to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Processor,
    Motherboard,
    GraphicsCard,
    CpuCooler,
    Ram1,
    Ram2,
    Ssd,
    Hdd,
    PowerSupply,
    Casing,
    Monitor,
    CaseFan,
    Mouse,
    Keyboard,
    Headphone,
}

impl Slot {
    /// Every slot in enumeration order.
    pub const ALL: [Self; 15] = [
        Self::Processor,
        Self::Motherboard,
        Self::GraphicsCard,
        Self::CpuCooler,
        Self::Ram1,
        Self::Ram2,
        Self::Ssd,
        Self::Hdd,
        Self::PowerSupply,
        Self::Casing,
        Self::Monitor,
        Self::CaseFan,
        Self::Mouse,
        Self::Keyboard,
        Self::Headphone,
    ];

    /// Slots that must be filled before a build can be committed.
    pub const REQUIRED: [Self; 2] = [Self::Processor, Self::Motherboard];

    /// Wire name (camelCase).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Processor => "processor",
            Self::Motherboard => "motherboard",
            Self::GraphicsCard => "graphicsCard",
            Self::CpuCooler => "cpuCooler",
            Self::Ram1 => "ram1",
            Self::Ram2 => "ram2",
            Self::Ssd => "ssd",
            Self::Hdd => "hdd",
            Self::PowerSupply => "powerSupply",
            Self::Casing => "casing",
            Self::Monitor => "monitor",
            Self::CaseFan => "caseFan",
            Self::Mouse => "mouse",
            Self::Keyboard => "keyboard",
            Self::Headphone => "headphone",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processor => "Processor",
            Self::Motherboard => "Motherboard",
            Self::GraphicsCard => "Graphics Card",
            Self::CpuCooler => "CPU Cooler",
            Self::Ram1 => "RAM 1",
            Self::Ram2 => "RAM 2",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::PowerSupply => "Power Supply",
            Self::Casing => "Casing",
            Self::Monitor => "Monitor",
            Self::CaseFan => "Case Fan",
            Self::Mouse => "Mouse",
            Self::Keyboard => "Keyboard",
            Self::Headphone => "Headphone",
        }
    }

    /// Catalog category the picker draws candidates from.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Ram1 | Self::Ram2 => "RAM",
            Self::Ssd => "SSD",
            Self::Hdd => "HDD",
            Self::CpuCooler => "CPU Cooler",
            other => other.label(),
        }
    }

    /// Whether the slot must be filled for the build to be valid.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Processor | Self::Motherboard)
    }

    /// Display group.
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Self::Monitor | Self::CaseFan => Section::Peripherals,
            Self::Mouse | Self::Keyboard | Self::Headphone => Section::Accessories,
            _ => Section::Core,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Slot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSlot(s.to_string()))
    }
}
