//! Integration tests for code rendering through the public API.

use std::io::Cursor;

use pretty_assertions::assert_eq;
use wavforge::sequence::{carrier_duration, data_duration, CARRIER_FREQUENCY};
use wavforge::synth::frames_for;
use wavforge::{
    generate_from_code, AudioConfig, ForgeError, SequenceGenerator, ToneSynthesizer, WavHeader,
};

fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[test]
fn test_single_symbol_closed_form() {
    let config = AudioConfig::default();
    let result = generate_from_code(&config, "0").unwrap();

    let carrier_frames = (44100.0 * (0.0872 / 2.0 * 1.4)) as usize;
    let data_frames = (44100.0 * (0.0872 / 2.0 * 0.6)) as usize;
    let frames = carrier_frames + data_frames;
    let data_size = frames * 2 * 2;

    assert_eq!(result.wav.num_frames, frames);
    assert_eq!(result.wav.wav_data.len(), 44 + data_size);
    assert_eq!(u32_at(&result.wav.wav_data, 4) as usize, 36 + data_size);
    assert_eq!(u32_at(&result.wav.wav_data, 40) as usize, data_size);
}

#[test]
fn test_single_symbol_is_carrier_then_data() {
    let config = AudioConfig::default();
    let result = generate_from_code(&config, "0").unwrap();

    let mut expected = ToneSynthesizer::new(config);
    expected
        .synthesize(CARRIER_FREQUENCY, 0.6, carrier_duration())
        .unwrap();
    expected.synthesize(18000.0, 0.6, data_duration()).unwrap();

    assert_eq!(result.wav.body(), expected.buffer());
}

#[test]
fn test_data_tone_starts_after_carrier() {
    let config = AudioConfig::new(1, 44100, 16).unwrap();
    let result = generate_from_code(&config, "v").unwrap();
    let carrier_frames = frames_for(&config, carrier_duration());

    // Both tones start from a silent frame.
    let body = result.wav.body();
    assert_eq!(&body[0..2], &[0, 0]);
    assert_eq!(&body[carrier_frames * 2..carrier_frames * 2 + 2], &[0, 0]);
    assert!(body[2..carrier_frames * 2].iter().any(|&b| b != 0));
}

#[test]
fn test_empty_code_header() {
    let result = generate_from_code(&AudioConfig::default(), "").unwrap();
    assert!(result.wav.body().is_empty());
    assert_eq!(u32_at(result.wav.header_bytes(), 40), 0);
}

#[test]
fn test_invalid_code_is_fatal() {
    for code in ["A", "0A", "abcw", "12 3", "é"] {
        let err = generate_from_code(&AudioConfig::default(), code).unwrap_err();
        assert!(
            matches!(err, ForgeError::InvalidCharacter { .. }),
            "code {:?} gave {:?}",
            code,
            err
        );
    }
}

#[test]
fn test_header_matches_config() {
    let config = AudioConfig::new(1, 48000, 24).unwrap();
    let result = generate_from_code(&config, "pq").unwrap();
    let header = result.wav.header_bytes();

    assert_eq!(u16_at(header, 22), 1);
    assert_eq!(u32_at(header, 24), 48000);
    assert_eq!(u32_at(header, 28), 144000);
    assert_eq!(u16_at(header, 32), 3);
    assert_eq!(u16_at(header, 34), 24);
    assert_eq!(
        header,
        &WavHeader::new(&config, result.wav.num_frames).unwrap().to_bytes()[..]
    );
}

#[test]
fn test_frame_count_prediction() {
    for config in [
        AudioConfig::default(),
        AudioConfig::new(1, 8000, 8).unwrap(),
        AudioConfig::new(4, 96000, 32).unwrap(),
    ] {
        let code = "0123456789abcdefghijklmnopqrstuv";
        let result = generate_from_code(&config, code).unwrap();
        assert_eq!(
            result.wav.num_frames,
            SequenceGenerator::frame_count(code, &config).unwrap()
        );
        assert_eq!(
            result.wav.body().len(),
            result.wav.num_frames * usize::from(config.block_align())
        );
    }
}

#[test]
fn test_rendered_file_reads_back_with_hound() {
    let config = AudioConfig::default();
    let result = generate_from_code(&config, "uv8e").unwrap();

    let reader = hound::WavReader::new(Cursor::new(result.wav.wav_data.clone())).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.duration() as usize, result.wav.num_frames);

    let samples: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), result.wav.num_frames * 2);

    // Mono signal duplicated into both channels, peak at 0.6 of full scale.
    for frame in samples.chunks(2) {
        assert_eq!(frame[0], frame[1]);
    }
    let peak = samples.iter().map(|s| i32::from(*s).abs()).max().unwrap();
    assert!(peak <= (0.6 * 32768.0) as i32 + 1, "peak {}", peak);
    assert!(peak > 15000, "peak {}", peak);
}
