#![no_main]

use libfuzzer_sys::fuzz_target;
use wavforge::{generate_from_code, AudioConfig, ForgeError};

fuzz_target!(|data: &[u8]| {
    let Ok(code) = std::str::from_utf8(data) else {
        return;
    };
    // Keep renders short; length is not what is being explored.
    if code.chars().count() > 8 {
        return;
    }

    let config = AudioConfig::new(1, 8000, 8).expect("static config is valid");
    match generate_from_code(&config, code) {
        Ok(result) => {
            assert_eq!(result.wav.wav_data.len(), 44 + result.wav.num_frames);
            assert!(result.warnings.is_empty());
        }
        Err(ForgeError::InvalidCharacter { .. }) => {}
        Err(e) => panic!("unexpected error: {}", e),
    }
});
