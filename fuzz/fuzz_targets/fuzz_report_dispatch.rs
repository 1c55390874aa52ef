//! Fuzz target: `ReportEngine::on_report`
//!
//! Splits arbitrary input into reports and drives them through a booted
//! firmware instance. Asserts that dispatch never panics, never indexes
//! past the matrix, and that every reply is a well-formed status report.
//!
//! cargo fuzz run fuzz_report_dispatch

#![no_main]

use libfuzzer_sys::fuzz_target;
use rgbdirect::adapters::eeprom::MemoryEeprom;
use rgbdirect::app::direct_buffer::WhiteFallback;
use rgbdirect::app::events::AppEvent;
use rgbdirect::app::ports::{EventSink, LedFlags, RgbMatrix};
use rgbdirect::rpc::codec::{REPORT_LEN, StatusReport};
use rgbdirect::rpc::transport::ReportTransport;
use rgbdirect::{DirectModeConfig, Firmware, Rgb};

const LEDS: usize = 8;

struct Matrix {
    enabled: bool,
    flags: LedFlags,
    leds: [Rgb; LEDS],
}

impl RgbMatrix for Matrix {
    fn is_enabled(&self) -> bool {
        self.enabled
    }
    fn enable(&mut self) {
        self.enabled = true;
    }
    fn flags(&self) -> LedFlags {
        self.flags
    }
    fn set_flags(&mut self, flags: LedFlags) {
        self.flags = flags;
    }
    fn set_color(&mut self, index: usize, color: Rgb) {
        // Panics on an out-of-range index.
        self.leds[index] = color;
    }
    fn set_color_all(&mut self, color: Rgb) {
        self.leds = [color; LEDS];
    }
    fn render_frame(&mut self) {}
}

struct CheckReply;

impl ReportTransport for CheckReply {
    type Error = ();
    fn send(&mut self, report: &[u8]) -> Result<(), ()> {
        assert_eq!(report.len(), REPORT_LEN);
        let status = StatusReport::decode(report).expect("status reply must decode");
        assert_eq!(usize::from(status.led_count), LEDS);
        Ok(())
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut matrix = Matrix {
        enabled: false,
        flags: LedFlags::NONE,
        leds: [Rgb::default(); LEDS],
    };
    let Ok(mut fw) = Firmware::<_, _, LEDS>::boot(
        MemoryEeprom::<64>::new(),
        WhiteFallback,
        DirectModeConfig::default(),
        &mut matrix,
        &mut Discard,
    ) else {
        return;
    };

    // 0xFF separates reports so one input exercises a whole session.
    for report in data.split(|b| *b == 0xFF) {
        fw.on_report(report, &mut matrix, &mut CheckReply, &mut Discard);
        fw.on_frame(&mut matrix);
    }
});
