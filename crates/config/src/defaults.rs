// Built-in defaults for every recognized field.

use std::sync::OnceLock;

use crate::{Configuration, Field, Value};

pub(crate) const DOCTOR_NAME_EN: &str = "Dr. Youssef Saber Romih";
pub(crate) const DOCTOR_NAME_AR: &str = "د. يوسف صابر رميح";
pub(crate) const SPECIALTY_EN: &str = "Cardiologist & Catheterization Specialist";
pub(crate) const SPECIALTY_AR: &str = "أخصائي أمراض القلب والقسطرة";
pub(crate) const CLINIC_PHONE: &str = "+20 123 456 7890";
pub(crate) const CLINIC_EMAIL: &str = "info@dryoussef.com";
pub(crate) const CLINIC_ADDRESS_EN: &str = "123 Medical Center, Cairo, Egypt";
pub(crate) const CLINIC_ADDRESS_AR: &str = "123 المركز الطبي، القاهرة، مصر";

pub(crate) const BACKGROUND_COLOR: &str = "#ffffff";
pub(crate) const SURFACE_COLOR: &str = "#f8fafc";
pub(crate) const TEXT_COLOR: &str = "#1f2937";
pub(crate) const PRIMARY_ACTION_COLOR: &str = "#2563eb";
pub(crate) const SECONDARY_ACTION_COLOR: &str = "#64748b";

pub(crate) const FONT_FAMILY: &str = "Inter";
/// Default body font size in pixels.
pub const FONT_SIZE_PX: f64 = 16.0;

/// Default value for a single field.
pub fn default_value(field: Field) -> Value {
    let text = |s: &str| Value::Text(s.to_string());
    match field {
        Field::DoctorNameEn => text(DOCTOR_NAME_EN),
        Field::DoctorNameAr => text(DOCTOR_NAME_AR),
        Field::SpecialtyEn => text(SPECIALTY_EN),
        Field::SpecialtyAr => text(SPECIALTY_AR),
        Field::ClinicPhone => text(CLINIC_PHONE),
        Field::ClinicEmail => text(CLINIC_EMAIL),
        Field::ClinicAddressEn => text(CLINIC_ADDRESS_EN),
        Field::ClinicAddressAr => text(CLINIC_ADDRESS_AR),
        Field::BackgroundColor => text(BACKGROUND_COLOR),
        Field::SurfaceColor => text(SURFACE_COLOR),
        Field::TextColor => text(TEXT_COLOR),
        Field::PrimaryActionColor => text(PRIMARY_ACTION_COLOR),
        Field::SecondaryActionColor => text(SECONDARY_ACTION_COLOR),
        Field::FontFamily => text(FONT_FAMILY),
        Field::FontSize => Value::Number(FONT_SIZE_PX),
    }
}

/// The default configuration: a total mapping over every recognized field.
///
/// Built once and shared for the lifetime of the process.
pub fn default_config() -> &'static Configuration {
    static DEFAULTS: OnceLock<Configuration> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        Field::ALL
            .into_iter()
            .fold(Configuration::new(), |cfg, field| {
                cfg.with(field, default_value(field))
            })
    })
}
