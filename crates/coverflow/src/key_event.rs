//! Keyboard input routed to the slider.

/// Keys the slider reacts to while open.
///
/// Hosts translate their platform key identifiers into this enum and hand
/// everything through one dispatch call; anything mapped to `Unknown` is
/// ignored without being buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Unknown,
}

impl Key {
    /// Maps a DOM-style key identifier string.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Unknown,
        }
    }
}
