//! Bring a simulated OV16A1Q up over the mock rig and run one
//! stream start/stop cycle, printing the bus traffic summary.
//!
//! Usage:
//!   RUST_LOG=info cargo run -p ov16a1q --example mock_stream

use anyhow::Result;
use ov16a1q::test_support::MockRig;
use ov16a1q::utils::format_frame;
use ov16a1q::ControlId;

fn main() -> Result<()> {
    env_logger::init();

    let rig = MockRig::new();
    // Seed the chip-id readback so identification succeeds.
    rig.bus.push_read(vec![0x16, 0x41]);

    let sensor = rig.builder().probe()?;
    println!("probed sensor, power state: {:?}", sensor.power_state());

    let fmt = sensor.format();
    println!("active format: {}x{} {}", fmt.width, fmt.height, fmt.code);

    let (gain_min, gain_max) = sensor.ctrl_range(ControlId::AnalogGain)?;
    println!("analog gain range: {gain_min}..={gain_max}");

    rig.bus.clear_writes();
    sensor.set_stream(true)?;
    let writes = rig.bus.writes();
    println!("stream start issued {} register writes", writes.len());
    if let (Some(first), Some(last)) = (writes.first(), writes.last()) {
        println!("  first frame: {}", format_frame(first));
        println!("  last frame:  {}", format_frame(last));
    }

    // Nudge the gain while streaming; this reaches the bus immediately.
    sensor.set_ctrl(ControlId::AnalogGain, 256)?;

    sensor.set_stream(false)?;
    println!("stopped, power state: {:?}", sensor.power_state());

    sensor.shutdown();
    println!(
        "shut down: clock enables={} disables={}",
        rig.clock.enable_calls(),
        rig.clock.disable_calls()
    );
    Ok(())
}
