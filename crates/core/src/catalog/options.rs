//! Fixed category and brand choices offered by the catalog filters.

/// Categories offered in the category filter.
pub const CATEGORY_OPTIONS: &[&str] = &[
    "Processor",
    "Motherboard",
    "Graphics Card",
    "CPU Cooler",
    "RAM",
    "SSD",
    "HDD",
    "Power Supply",
    "Casing",
    "Monitor",
    "Case Fan",
    "Mouse",
    "Keyboard",
    "Headphone",
];

/// Brands offered in the brand filter.
pub const BRAND_OPTIONS: &[&str] = &[
    "AMD",
    "Intel",
    "NVIDIA",
    "ASUS",
    "MSI",
    "Gigabyte",
    "ASRock",
    "Corsair",
    "G.Skill",
    "Kingston",
    "Samsung",
    "Western Digital",
    "Seagate",
    "Cooler Master",
    "NZXT",
    "Lian Li",
    "Noctua",
    "DeepCool",
    "Logitech",
    "Razer",
    "HyperX",
];

/// Whether `category` is one of [`CATEGORY_OPTIONS`].
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    CATEGORY_OPTIONS.contains(&category)
}

/// Whether `brand` is one of [`BRAND_OPTIONS`].
#[must_use]
pub fn is_known_brand(brand: &str) -> bool {
    BRAND_OPTIONS.contains(&brand)
}
