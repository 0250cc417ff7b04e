//! Tests for sound construction and generation-time metadata.

use super::*;
use crate::rng::create_rng;
use pretty_assertions::assert_eq;

#[test]
fn test_rejects_non_positive_frequency() {
    assert!(matches!(
        Sound::sine(0.0, 1.0, 1.0, 8),
        Err(SoundError::InvalidFrequency { .. })
    ));
    assert!(matches!(
        Sound::sine(-440.0, 1.0, 1.0, 8),
        Err(SoundError::InvalidFrequency { .. })
    ));
    assert!(matches!(
        Sound::sine(f64::NAN, 1.0, 1.0, 8),
        Err(SoundError::InvalidFrequency { .. })
    ));
}

#[test]
fn test_rejects_negative_duration() {
    assert!(matches!(
        Sound::square(440.0, 1.0, -0.1, 8),
        Err(SoundError::InvalidDuration { .. })
    ));
}

#[test]
fn test_rejects_zero_sample_rate() {
    assert!(matches!(
        Sound::sawtooth(440.0, 1.0, 1.0, 0),
        Err(SoundError::InvalidSampleRate { .. })
    ));
}

#[test]
fn test_sample_count_is_rounded() {
    // 0.25 s at 11250 Hz is 2812.5 samples; rounds up.
    let sound = Sound::constant(0.5, 0.25, 11250).unwrap();
    assert_eq!(sound.num_samples(), 2813);

    let sound = Sound::sine(440.0, 1.0, 1.0, 11250).unwrap();
    assert_eq!(sound.num_samples(), 11250);
}

#[test]
fn test_zero_duration_yields_empty_buffer() {
    let sound = Sound::sine(440.0, 1.0, 0.0, 11250).unwrap();
    assert_eq!(sound.num_samples(), 0);
    assert_eq!(sound.duration(), 0.0);
}

#[test]
fn test_constant_generation() {
    let sound = Sound::constant(0.4, 2.0, 100).unwrap();
    assert_eq!(sound.num_samples(), 200);
    assert!(sound.samples().iter().all(|&s| s == 0.4));
    assert_eq!(sound.amplitude(), 0.4);
    assert_eq!(sound.origin(), Origin::Generated(Waveform::Constant));
}

#[test]
fn test_amplitude_is_clamped_at_construction() {
    let sound = Sound::constant(1.5, 1.0, 10).unwrap();
    assert_eq!(sound.amplitude(), 1.0);
    assert!(sound.samples().iter().all(|&s| s == 1.0));

    let sound = Sound::constant(-2.0, 1.0, 10).unwrap();
    assert_eq!(sound.amplitude(), -1.0);
}

#[test]
fn test_sine_one_cycle() {
    // 1 Hz at 8 Hz: one full cycle, sin(0), sin(pi/4), sin(pi/2), ...
    let sound = Sound::sine(1.0, 1.0, 1.0, 8).unwrap();
    assert_eq!(sound.num_samples(), 8);
    for (i, &s) in sound.samples().iter().enumerate() {
        let expected = (i as f64 * std::f64::consts::FRAC_PI_4).sin();
        assert!((s - expected).abs() < 1e-12);
    }
}

#[test]
fn test_generated_sounds_stay_in_range() {
    let mut rng = create_rng(42);
    for waveform in [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Constant,
        Waveform::Noise,
    ] {
        let sound = Sound::new(waveform, 440.0, 1.0, 0.5, 11250, &mut rng).unwrap();
        for &s in sound.samples() {
            assert!((-1.0..=1.0).contains(&s), "{waveform:?} sample {s} out of range");
        }
    }
}

#[test]
fn test_noise_is_seed_deterministic() {
    let mut rng1 = create_rng(99);
    let mut rng2 = create_rng(99);
    let a = Sound::noise(1.0, 0.1, 11250, &mut rng1).unwrap();
    let b = Sound::noise(1.0, 0.1, 11250, &mut rng2).unwrap();
    assert_eq!(a.samples(), b.samples());

    let mut rng3 = create_rng(100);
    let c = Sound::noise(1.0, 0.1, 11250, &mut rng3).unwrap();
    assert_ne!(a.samples(), c.samples());
}

#[test]
fn test_display_summarizes_metadata() {
    let sound = Sound::sine(440.0, 0.5, 1.0, 11250).unwrap();
    let text = sound.to_string();
    assert!(text.contains("440"));
    assert!(text.contains("11250"));
    assert!(text.contains("Sine"));
}
