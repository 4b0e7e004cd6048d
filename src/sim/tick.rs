//! Per-frame bomp update
//!
//! Radius follows a sine between the bounds. Crossing the trigger threshold
//! from below posts the bomp's note and stamps the trigger time, which
//! drives the jump animation.

use glam::Vec3;

use super::bomp::Bomp;
use super::decay::JumpPose;
use crate::audio::ids::game_parameters;
use crate::audio::{Audio, SoundEngine};
use crate::consts::SPIN_FACTOR;

/// Rising-edge test: `previous` was below `threshold`, `current` is at or above it
#[inline]
pub fn crossed_threshold(previous: f32, current: f32, threshold: f32) -> bool {
    previous < threshold && current >= threshold
}

/// Screen position to audio space (y up, measured from the bottom edge)
#[inline]
pub fn audio_position(screen: Vec3, canvas_height: f32) -> Vec3 {
    Vec3::new(screen.x, canvas_height - screen.y, screen.z)
}

/// Advance one bomp to time `t`. Returns true if it fired this frame.
pub fn update_bomp<E: SoundEngine>(
    bomp: &mut Bomp,
    audio: &mut Audio<E>,
    canvas_height: f32,
    t: f32,
    dt: f32,
) -> bool {
    let radius = bomp.params.radius_at(t);
    let mut fired = false;

    if crossed_threshold(bomp.radius, radius, bomp.params.trigger_threshold()) {
        match bomp.params.degree.event() {
            Some(event) => {
                let playing = audio.post_event(event, bomp.audio_handle());
                // a failed post keeps the previous trigger and its animation
                if playing.is_valid() {
                    bomp.playing_id = playing;
                    bomp.playing_time = t;
                    fired = true;
                }
            }
            None => log::debug!("No event for degree {:?}", bomp.params.degree),
        }
    }

    bomp.radius = radius;

    let handle = bomp.audio_handle();
    audio.set_position(handle, audio_position(bomp.position(), canvas_height));
    audio.set_game_parameter(game_parameters::BOMP_SIZE, handle, bomp.normalized_radius());

    bomp.pose = JumpPose::at(bomp.elapsed(t));
    bomp.rotation += dt * (bomp.params.speed * SPIN_FACTOR + bomp.pose.spin_bonus);

    fired
}

/// Advance every bomp to time `t`. Returns how many fired.
pub fn update_bomps<E: SoundEngine>(
    bomps: &mut [Bomp],
    audio: &mut Audio<E>,
    canvas_height: f32,
    t: f32,
    dt: f32,
) -> usize {
    bomps
        .iter_mut()
        .map(|bomp| update_bomp(bomp, audio, canvas_height, t, dt))
        .filter(|&fired| fired)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioCall, HeadlessEngine, PlayingId};
    use crate::consts::MAX_SPIN_BONUS;
    use crate::sim::bomp::{BompParams, Degree};
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    const DT: f32 = 1.0 / 60.0;

    fn params(speed: f32, time_offset: f32, degree: Degree) -> BompParams {
        BompParams {
            position: Vec3::new(200.0, 150.0, 0.0),
            radius_min: 12.0,
            radius_max: 128.0,
            speed,
            time_offset,
            degree,
        }
    }

    fn setup(p: BompParams) -> (Bomp, Audio<HeadlessEngine>) {
        let mut audio = Audio::new(HeadlessEngine::recording()).unwrap();
        let handle = audio.register_entity("bomp").unwrap();
        (Bomp::new(p, handle), audio)
    }

    /// Step from t=0 to `until`, returning the times the bomp fired
    fn run(bomp: &mut Bomp, audio: &mut Audio<HeadlessEngine>, until: f32) -> Vec<f32> {
        let mut fired_at = Vec::new();
        let steps = (until / DT).ceil() as u32;
        for i in 1..=steps {
            let t = i as f32 * DT;
            if update_bomp(bomp, audio, 600.0, t, DT) {
                fired_at.push(t);
            }
        }
        fired_at
    }

    #[test]
    fn test_rising_edge() {
        assert!(crossed_threshold(100.0, 108.8, 108.8));
        assert!(!crossed_threshold(108.8, 120.0, 108.8));
        assert!(!crossed_threshold(120.0, 100.0, 108.8));
        assert!(!crossed_threshold(50.0, 60.0, 108.8));
    }

    #[test]
    fn test_fires_once_per_period() {
        let (mut bomp, mut audio) = setup(params(1.0, 0.0, Degree::First));
        let fired = run(&mut bomp, &mut audio, TAU);
        assert_eq!(fired.len(), 1);

        // first frame at or above the threshold
        let t = fired[0];
        let threshold = bomp.params.trigger_threshold();
        assert!(bomp.params.radius_at(t) >= threshold);
        assert!(bomp.params.radius_at(t - DT) < threshold);
        assert_eq!(bomp.playing_time, t);
        assert!(bomp.has_fired());
    }

    #[test]
    fn test_fires_once_per_cycle_over_many_cycles() {
        let (mut bomp, mut audio) = setup(params(2.0, 0.3, Degree::Third));
        let period = TAU / 2.0;
        let fired = run(&mut bomp, &mut audio, period * 5.0);
        assert_eq!(fired.len(), 5);
        for pair in fired.windows(2) {
            assert!((pair[1] - pair[0] - period).abs() < 2.0 * DT);
        }
    }

    #[test]
    fn test_starting_above_threshold_does_not_fire_immediately() {
        // sin(pi/2) = 1, so the bomp starts at radius_max
        let (mut bomp, mut audio) = setup(params(1.0, std::f32::consts::FRAC_PI_2, Degree::First));
        assert!(!update_bomp(&mut bomp, &mut audio, 600.0, DT, DT));
    }

    #[test]
    fn test_octave_never_fires() {
        let (mut bomp, mut audio) = setup(params(1.0, 0.0, Degree::Octave));
        let fired = run(&mut bomp, &mut audio, TAU);
        assert!(fired.is_empty());
        assert!(!bomp.has_fired());
        assert_eq!(bomp.pose, JumpPose::REST);
    }

    #[test]
    fn test_failed_post_keeps_previous_trigger() {
        let (mut bomp, mut audio) = setup(params(1.0, 0.0, Degree::First));
        let fired = run(&mut bomp, &mut audio, TAU);
        assert_eq!(fired.len(), 1);
        let (id, time) = (bomp.playing_id, bomp.playing_time);

        audio.engine_mut().set_failing_posts(true);
        let mut fired_again = false;
        let steps = (TAU / DT).ceil() as u32;
        for i in 1..=steps {
            let t = TAU + i as f32 * DT;
            fired_again |= update_bomp(&mut bomp, &mut audio, 600.0, t, DT);
        }
        assert!(!fired_again);
        assert_eq!(bomp.playing_id, id);
        assert_eq!(bomp.playing_time, time);
        assert_ne!(bomp.playing_id, PlayingId::INVALID);
    }

    #[test]
    fn test_trigger_starts_jump_and_spin() {
        let (mut bomp, mut audio) = setup(params(1.0, 0.0, Degree::First));
        for i in 1..1000 {
            let t = i as f32 * DT;
            let before = bomp.rotation;
            if update_bomp(&mut bomp, &mut audio, 600.0, t, DT) {
                assert_eq!(bomp.pose, JumpPose::at(Some(0.0)));
                let expected = DT * (bomp.params.speed * SPIN_FACTOR + MAX_SPIN_BONUS);
                assert!((bomp.rotation - before - expected).abs() < 1e-4);
                return;
            }
            assert_eq!(bomp.pose, JumpPose::REST);
        }
        panic!("bomp never fired");
    }

    #[test]
    fn test_position_is_flipped_for_audio() {
        let (mut bomp, mut audio) = setup(params(1.0, 0.0, Degree::First));
        audio.engine_mut().clear_journal();
        update_bomp(&mut bomp, &mut audio, 600.0, DT, DT);
        let handle = bomp.audio_handle();
        assert!(audio.engine().journal().contains(&AudioCall::SetPosition {
            object: handle,
            position: Vec3::new(200.0, 450.0, 0.0),
        }));
    }

    #[test]
    fn test_update_bomps_counts_fired() {
        let mut audio = Audio::new(HeadlessEngine::new()).unwrap();
        let mut bomps: Vec<Bomp> = (0..3)
            .map(|i| {
                let handle = audio.register_entity(&format!("bomp {i}")).unwrap();
                Bomp::new(params(1.0, 0.0, Degree::Fifth), handle)
            })
            .collect();

        let mut total = 0;
        let steps = (TAU / DT).ceil() as u32;
        for i in 1..=steps {
            total += update_bomps(&mut bomps, &mut audio, 600.0, i as f32 * DT, DT);
        }
        assert_eq!(total, 3);
    }

    proptest! {
        #[test]
        fn prop_radius_stays_in_bounds(
            radius_min in 1.0f32..50.0,
            span in 1.0f32..100.0,
            speed in 0.1f32..6.0,
            time_offset in 0.0f32..TAU,
            t in 0.0f32..1000.0,
        ) {
            let p = BompParams {
                position: Vec3::ZERO,
                radius_min,
                radius_max: radius_min + span,
                speed,
                time_offset,
                degree: Degree::First,
            };
            let r = p.radius_at(t);
            prop_assert!(r >= p.radius_min && r <= p.radius_max);
        }
    }
}
