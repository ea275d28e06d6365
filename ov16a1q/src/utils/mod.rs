// ov16a1q-rs/ov16a1q/src/utils/mod.rs

//! Small helpers for debug output of bus traffic.

use std::fmt::Write;

/// Render a bus frame as spaced lowercase hex, e.g. `[0x35, 0x00, 0x4c]`
/// -> `"35 00 4c"`. Used when logging register traffic.
pub fn format_frame(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{b:02x}");
    }
    s
}
