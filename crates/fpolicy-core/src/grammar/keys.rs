//! Feature key normalization (camelCase -> dashed header token).

use crate::error::{PolicyError, Result};

/// Which feature names a dialect accepts and how they are spelled on the wire.
#[derive(Debug, Clone, Copy)]
pub enum KeyVocabulary {
    /// Any identifier, dashified algorithmically.
    Open,
    /// Fixed `(camelCase, dashed)` table; anything else is unsupported.
    Closed(&'static [(&'static str, &'static str)]),
}

impl KeyVocabulary {
    pub fn normalize(&self, key: &str) -> Result<String> {
        match self {
            KeyVocabulary::Open => Ok(dashify(key)),
            KeyVocabulary::Closed(table) => table
                .iter()
                .find(|(camel, _)| *camel == key)
                .map(|(_, dashed)| (*dashed).to_string())
                .ok_or_else(|| PolicyError::UnsupportedFeature(key.to_string())),
        }
    }
}

/// `unoptimizedImages` -> `unoptimized-images`.
pub fn dashify(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Features understood by the legacy `Feature-Policy` header.
pub const FEATURE_POLICY_FEATURES: &[(&str, &str)] = &[
    ("accelerometer", "accelerometer"),
    ("ambientLightSensor", "ambient-light-sensor"),
    ("autoplay", "autoplay"),
    ("battery", "battery"),
    ("camera", "camera"),
    ("displayCapture", "display-capture"),
    ("documentDomain", "document-domain"),
    ("documentWrite", "document-write"),
    ("encryptedMedia", "encrypted-media"),
    ("executionWhileNotRendered", "execution-while-not-rendered"),
    ("executionWhileOutOfViewport", "execution-while-out-of-viewport"),
    ("fontDisplayLateSwap", "font-display-late-swap"),
    ("fullscreen", "fullscreen"),
    ("geolocation", "geolocation"),
    ("gyroscope", "gyroscope"),
    ("layoutAnimations", "layout-animations"),
    ("legacyImageFormats", "legacy-image-formats"),
    ("loadingFrameDefaultEager", "loading-frame-default-eager"),
    ("magnetometer", "magnetometer"),
    ("microphone", "microphone"),
    ("midi", "midi"),
    ("navigationOverride", "navigation-override"),
    ("notifications", "notifications"),
    ("oversizedImages", "oversized-images"),
    ("payment", "payment"),
    ("pictureInPicture", "picture-in-picture"),
    ("serial", "serial"),
    ("speaker", "speaker"),
    ("syncScript", "sync-script"),
    ("syncXhr", "sync-xhr"),
    ("unoptimizedImages", "unoptimized-images"),
    ("unoptimizedLosslessImages", "unoptimized-lossless-images"),
    ("unoptimizedLossyImages", "unoptimized-lossy-images"),
    ("unsizedMedia", "unsized-media"),
    ("usb", "usb"),
    ("verticalScroll", "vertical-scroll"),
    ("vibrate", "vibrate"),
    ("vr", "vr"),
    ("wakeLock", "wake-lock"),
    ("xr", "xr"),
];
