#![no_main]

use libfuzzer_sys::fuzz_target;
use wavforge::SampleEncoder;

fuzz_target!(|input: (u8, f64)| {
    let (depth, amplitude) = input;
    let bits = u16::from(depth % 4 + 1) * 8;
    let encoder = SampleEncoder::new(bits).unwrap();

    if let Ok(bytes) = encoder.encode(amplitude) {
        assert_eq!(bytes.len(), encoder.width());
        assert!((encoder.decode(&bytes) as f64) < encoder.max_amplitude());
    }
});
