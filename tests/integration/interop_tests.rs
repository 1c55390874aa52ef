//! Keyboard-side hooks: toggle key, caps-lock indicator, frame painting
//! and the queued report path.

use rgbdirect::Rgb;
use rgbdirect::adapters::eeprom::MemoryEeprom;
use rgbdirect::app::direct_buffer::WhiteFallback;
use rgbdirect::app::keys::{KeyEvent, Keycode};
use rgbdirect::app::ports::LedFlags;
use rgbdirect::rpc::channels::{ReportChannel, enqueue_report};
use rgbdirect::{DirectModeConfig, Firmware, OwnershipMode};

use crate::mock_hw::{MatrixCall, MockMatrix, MockTransport, RecordingSink};

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

type Fw = Firmware<MemoryEeprom<64>, WhiteFallback, 4>;

fn boot(config: DirectModeConfig, matrix: &mut MockMatrix) -> Fw {
    let mut sink = RecordingSink::default();
    let fw = Fw::boot(MemoryEeprom::new(), WhiteFallback, config, matrix, &mut sink).unwrap();
    matrix.calls.clear();
    fw
}

fn with_caps_led(led: u8) -> DirectModeConfig {
    DirectModeConfig {
        caps_lock_led: Some(led),
        ..Default::default()
    }
}

// ── Toggle key ────────────────────────────────────────────────

#[test]
fn toggle_press_clears_matrix_then_restores() {
    let mut matrix = MockMatrix::new_enabled(4);
    let mut fw = boot(DirectModeConfig::default(), &mut matrix);
    matrix.leds = vec![Rgb::new(1, 2, 3); 4];

    assert!(!fw.on_key(KeyEvent::press(Keycode::RgbToggle), &mut matrix));
    assert_eq!(matrix.flags, LedFlags::NONE);
    assert_eq!(matrix.leds, vec![BLACK; 4]);

    assert!(!fw.on_key(KeyEvent::press(Keycode::RgbToggle), &mut matrix));
    assert_eq!(matrix.flags, LedFlags::ALL);
    assert!(matrix.enabled);
}

#[test]
fn toggle_enables_a_disabled_engine() {
    let mut matrix = MockMatrix::new(4);
    let mut fw = boot(DirectModeConfig::default(), &mut matrix);

    assert!(!fw.on_key(KeyEvent::press(Keycode::RgbToggle), &mut matrix));
    assert!(matrix.enabled);
    assert_eq!(matrix.flags, LedFlags::ALL);
    assert_eq!(
        matrix.calls,
        vec![
            MatrixCall::SetFlags(LedFlags::NONE),
            MatrixCall::SetColorAll(BLACK),
            MatrixCall::SetFlags(LedFlags::ALL),
            MatrixCall::Enable,
        ]
    );
}

#[test]
fn toggle_release_only_reenables() {
    let mut matrix = MockMatrix::new_enabled(4);
    let mut fw = boot(DirectModeConfig::default(), &mut matrix);

    assert!(!fw.on_key(KeyEvent::release(Keycode::RgbToggle), &mut matrix));
    assert!(matrix.calls.is_empty());
}

#[test]
fn other_keys_pass_through() {
    let mut matrix = MockMatrix::new(4);
    let mut fw = boot(DirectModeConfig::default(), &mut matrix);

    assert!(fw.on_key(KeyEvent::press(Keycode::Other(0x04)), &mut matrix));
    assert!(fw.on_key(KeyEvent::release(Keycode::Other(0x04)), &mut matrix));
    assert!(matrix.calls.is_empty());
}

// ── Caps-lock indicator ───────────────────────────────────────

#[test]
fn caps_lock_forces_white_in_any_mode() {
    let mut matrix = MockMatrix::new(4);
    let mut fw = boot(with_caps_led(2), &mut matrix);

    fw.on_indicators(true, &mut matrix);
    assert_eq!(matrix.leds[2], WHITE);

    fw.on_report(
        &[0x03, 0x00],
        &mut matrix,
        &mut MockTransport::default(),
        &mut RecordingSink::default(),
    );
    matrix.leds[2] = Rgb::new(9, 9, 9);
    fw.on_indicators(true, &mut matrix);
    assert_eq!(matrix.leds[2], WHITE);
}

#[test]
fn caps_lock_off_keeps_frame_color_while_painting_all() {
    let mut matrix = MockMatrix::new(4);
    let fw = boot(with_caps_led(1), &mut matrix);
    matrix.leds[1] = Rgb::new(7, 7, 7);

    fw.on_indicators(false, &mut matrix);
    assert_eq!(matrix.leds[1], Rgb::new(7, 7, 7));
}

#[test]
fn caps_lock_off_clears_led_when_engine_paints_nothing() {
    let mut matrix = MockMatrix::new(4);
    let fw = boot(with_caps_led(1), &mut matrix);
    matrix.flags = LedFlags::NONE;
    matrix.leds[1] = WHITE;

    fw.on_indicators(false, &mut matrix);
    assert_eq!(matrix.leds[1], BLACK);
}

#[test]
fn no_indicator_led_means_no_overlay() {
    let mut matrix = MockMatrix::new(4);
    let fw = boot(DirectModeConfig::default(), &mut matrix);
    fw.on_indicators(true, &mut matrix);
    assert!(matrix.calls.is_empty());
}

// ── Frame painting ────────────────────────────────────────────

#[test]
fn frame_paints_buffer_only_when_external() {
    let mut matrix = MockMatrix::new(4);
    let mut fw = boot(DirectModeConfig::default(), &mut matrix);
    assert!(!fw.on_frame(&mut matrix));
    assert!(matrix.calls.is_empty());

    let mut sink = RecordingSink::default();
    let mut transport = MockTransport::default();
    fw.on_report(&[0x03, 0x00], &mut matrix, &mut transport, &mut sink);
    fw.on_report(&[0x00, 10, 20, 30], &mut matrix, &mut transport, &mut sink);
    matrix.leds = vec![BLACK; 4];

    assert!(fw.on_frame(&mut matrix));
    assert_eq!(matrix.leds, vec![Rgb::new(10, 20, 30), WHITE, WHITE, WHITE]);
    assert_eq!(fw.app().mode(), OwnershipMode::ExternalOwned);
}

// ── Queued reports ────────────────────────────────────────────

#[test]
fn queued_reports_run_in_arrival_order() {
    let mut matrix = MockMatrix::new(4);
    let mut fw = boot(DirectModeConfig::default(), &mut matrix);
    let mut transport = MockTransport::default();
    let mut sink = RecordingSink::default();
    let channel = ReportChannel::new();

    assert!(enqueue_report(&channel, &[0x03, 0x00]));
    assert!(enqueue_report(&channel, &[0x04, 0x00]));
    assert!(enqueue_report(&channel, &[0x02, 0x00]));
    assert!(enqueue_report(&channel, &[0x04, 0x00]));

    let handled = fw.poll_reports(&channel, &mut matrix, &mut transport, &mut sink);
    assert_eq!(handled, 4);
    assert_eq!(transport.sent.len(), 2);
    assert_eq!(transport.sent[0][3], 1);
    assert_eq!(transport.sent[1][3], 0);
    assert_eq!(fw.app().mode(), OwnershipMode::ViaOwned);
    assert_eq!(fw.stats().handled, 4);
}
