//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_3XL: f32 = 30.0;
}
