use std::{borrow::Cow, fmt};

use schemars::{
    gen::SchemaGenerator,
    schema::{InstanceType, Schema, SchemaObject, StringValidation},
    JsonSchema,
};
use serde::{Deserialize, Serialize};

/// Text token used on dark backgrounds.
pub const LIGHT_TEXT: HexColor = HexColor::from_static("#F8FAFC");
/// Text token used on light backgrounds.
pub const DARK_TEXT: HexColor = HexColor::from_static("#0F172A");

const HEX_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a #RRGGBB color token")]
pub struct InvalidHexColor(pub String);

/// A `#RRGGBB` color token. The original spelling is kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Cow<'static, str>);

impl HexColor {
    /// Build a token from a literal; invalid literals fail at compile time when
    /// used in a `const`.
    pub const fn from_static(token: &'static str) -> Self {
        assert!(is_hex_token(token), "color literal must be #RRGGBB");
        HexColor(Cow::Borrowed(token))
    }

    pub fn parse(token: &str) -> Result<Self, InvalidHexColor> {
        if is_hex_token(token) {
            Ok(HexColor(Cow::Owned(token.to_string())))
        } else {
            Err(InvalidHexColor(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let bytes = self.0.as_bytes();
        (
            hex_pair(bytes[1], bytes[2]),
            hex_pair(bytes[3], bytes[4]),
            hex_pair(bytes[5], bytes[6]),
        )
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        let (r, g, b) = self.rgb();
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    pub fn contrast_ratio(&self, other: &HexColor) -> f64 {
        let (a, b) = (self.relative_luminance(), other.relative_luminance());
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Whichever of the two text tokens reads better on this background.
    pub fn readable_text(&self) -> HexColor {
        if self.contrast_ratio(&LIGHT_TEXT) > self.contrast_ratio(&DARK_TEXT) {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        }
    }

    pub fn is_dark(&self) -> bool {
        self.readable_text() == LIGHT_TEXT
    }
}

const fn is_hex_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return false;
    }
    let mut idx = 1;
    while idx < bytes.len() {
        if !bytes[idx].is_ascii_hexdigit() {
            return false;
        }
        idx += 1;
    }
    true
}

fn hex_pair(high: u8, low: u8) -> u8 {
    fn nibble(b: u8) -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    }
    nibble(high) * 16 + nibble(low)
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_hex_token(&value) {
            Ok(HexColor(Cow::Owned(value)))
        } else {
            Err(InvalidHexColor(value))
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0.into_owned()
    }
}

impl JsonSchema for HexColor {
    fn schema_name() -> String {
        "HexColor".to_string()
    }

    fn is_referenceable() -> bool {
        false
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            string: Some(Box::new(StringValidation {
                pattern: Some(HEX_PATTERN.to_string()),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}

/// The four color tokens that drive the interface palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorTheme {
    /// Hex code for primary UI elements
    pub primary: HexColor,
    /// Hex code for accents and highlights
    pub accent: HexColor,
    /// Hex code for the main background
    #[serde(rename = "bg")]
    pub background: HexColor,
    /// Hex code for body text
    pub text: HexColor,
}

impl ColorTheme {
    /// Palette whose text token is derived from the background's luminance.
    pub fn from_base(primary: HexColor, accent: HexColor, background: HexColor) -> Self {
        let text = background.readable_text();
        Self {
            primary,
            accent,
            background,
            text,
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        ColorTheme::from_base(
            HexColor::from_static("#0F172A"),
            HexColor::from_static("#64748B"),
            HexColor::from_static("#F8FAFC"),
        )
    }
}
