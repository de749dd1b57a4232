//! The fixed set of recognized configuration fields.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What a field controls on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Text broadcast to every element carrying the field's marker class.
    Text,
    /// Color written to a CSS custom property on the document root.
    Color,
    /// Body font family.
    FontFamily,
    /// Body font size, in pixels.
    FontSize,
}

/// A recognized configuration key.
///
/// Declaration order is significant: `Configuration` iterates in this order,
/// and the text fields are listed identity, specialty, contact, address with
/// English before Arabic for every pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DoctorNameEn,
    DoctorNameAr,
    SpecialtyEn,
    SpecialtyAr,
    ClinicPhone,
    ClinicEmail,
    ClinicAddressEn,
    ClinicAddressAr,
    BackgroundColor,
    SurfaceColor,
    TextColor,
    PrimaryActionColor,
    SecondaryActionColor,
    FontFamily,
    FontSize,
}

impl Field {
    /// Every recognized field.
    pub const ALL: [Self; 15] = [
        Self::DoctorNameEn,
        Self::DoctorNameAr,
        Self::SpecialtyEn,
        Self::SpecialtyAr,
        Self::ClinicPhone,
        Self::ClinicEmail,
        Self::ClinicAddressEn,
        Self::ClinicAddressAr,
        Self::BackgroundColor,
        Self::SurfaceColor,
        Self::TextColor,
        Self::PrimaryActionColor,
        Self::SecondaryActionColor,
        Self::FontFamily,
        Self::FontSize,
    ];

    /// Human-readable text fields, in edit-panel order.
    pub const TEXT: [Self; 8] = [
        Self::DoctorNameEn,
        Self::DoctorNameAr,
        Self::SpecialtyEn,
        Self::SpecialtyAr,
        Self::ClinicPhone,
        Self::ClinicEmail,
        Self::ClinicAddressEn,
        Self::ClinicAddressAr,
    ];

    /// Color fields, in recolorable order.
    pub const COLORS: [Self; 5] = [
        Self::BackgroundColor,
        Self::SurfaceColor,
        Self::TextColor,
        Self::PrimaryActionColor,
        Self::SecondaryActionColor,
    ];

    /// The wire key for this field.
    pub const fn key(self) -> &'static str {
        match self {
            Self::DoctorNameEn => "doctor_name_en",
            Self::DoctorNameAr => "doctor_name_ar",
            Self::SpecialtyEn => "specialty_en",
            Self::SpecialtyAr => "specialty_ar",
            Self::ClinicPhone => "clinic_phone",
            Self::ClinicEmail => "clinic_email",
            Self::ClinicAddressEn => "clinic_address_en",
            Self::ClinicAddressAr => "clinic_address_ar",
            Self::BackgroundColor => "background_color",
            Self::SurfaceColor => "surface_color",
            Self::TextColor => "text_color",
            Self::PrimaryActionColor => "primary_action_color",
            Self::SecondaryActionColor => "secondary_action_color",
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
        }
    }

    /// Look up a field by its wire key. Unrecognized keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::BackgroundColor
            | Self::SurfaceColor
            | Self::TextColor
            | Self::PrimaryActionColor
            | Self::SecondaryActionColor => FieldKind::Color,
            Self::FontFamily => FieldKind::FontFamily,
            Self::FontSize => FieldKind::FontSize,
            _ => FieldKind::Text,
        }
    }

    /// Marker class carried by the elements that display this field.
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::DoctorNameEn => Some("doctor-name-en"),
            Self::DoctorNameAr => Some("doctor-name-ar"),
            Self::SpecialtyEn => Some("specialty-en"),
            Self::SpecialtyAr => Some("specialty-ar"),
            Self::ClinicPhone => Some("clinic-phone"),
            Self::ClinicEmail => Some("clinic-email"),
            Self::ClinicAddressEn => Some("clinic-address-en"),
            Self::ClinicAddressAr => Some("clinic-address-ar"),
            _ => None,
        }
    }

    /// CSS custom property on the document root driven by this field.
    pub const fn css_var(self) -> Option<&'static str> {
        match self {
            Self::BackgroundColor => Some("--bg-color"),
            Self::SurfaceColor => Some("--surface-color"),
            Self::TextColor => Some("--text-color"),
            Self::PrimaryActionColor => Some("--primary-color"),
            Self::SecondaryActionColor => Some("--secondary-color"),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown configuration field '{s}'"))
    }
}
