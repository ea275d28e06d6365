// fixtures.rs: expected bus frames used across the integration tests

/// Build the expected bus frame for a register write: 2 address bytes
/// big-endian followed by the value bytes.
pub fn frame(address: u16, value: &[u8]) -> Vec<u8> {
    let mut out = address.to_be_bytes().to_vec();
    out.extend_from_slice(value);
    out
}

/// The stream-enable frame (register 0x0100 = 1).
pub fn stream_on_frame() -> Vec<u8> {
    frame(0x0100, &[0x01])
}

/// The stream-disable frame (register 0x0100 = 0).
pub fn stream_off_frame() -> Vec<u8> {
    frame(0x0100, &[0x00])
}
