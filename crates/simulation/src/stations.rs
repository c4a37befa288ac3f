//! The fixed station roster for the line.
//!
//! Stations are announced in order and wrap back to the first. Each carries
//! the asset path of its announcement clip; the rendering crate preloads the
//! handles at startup.

/// A named stop with its announcement sound.
#[derive(Debug, Clone, Copy)]
pub struct Station {
    pub name: &'static str,
    /// Asset path of the announcement clip, relative to `assets/`.
    pub sound: &'static str,
}

/// All stations on the line, in announcement order.
pub const STATIONS: [Station; 5] = [
    Station {
        name: "Sutherland Rd",
        sound: "audio/stop1.ogg",
    },
    Station {
        name: "Government Center",
        sound: "audio/stop2.ogg",
    },
    Station {
        name: "Cleveland Circle",
        sound: "audio/stop3.ogg",
    },
    Station {
        name: "Chiswick Rd",
        sound: "audio/stop4.ogg",
    },
    Station {
        name: "Dighton St",
        sound: "audio/stop5.ogg",
    },
];

/// Asset path of the horn clip.
pub const HORN_SOUND: &str = "audio/horn.ogg";
