//! Tween animation systems.
//!
//! These systems update cube state over time based on tween data:
//! - [`tween_pivot_system`] – plays the layer turn held by the [`Pivot`]
//! - [`tween_scale_system`] – animates [`Scale`](crate::components::scale::Scale)
//!
//! Each tween specifies start/end values, duration and easing function, and
//! plays once. The systems read delta time from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! and interpolate the property accordingly.

use crate::components::cubie::{CubieTransform, PivotChild};
use crate::components::scale::Scale;
use crate::components::tween::{Easing, TweenScale};
use crate::events::moves::RotationFinishedEvent;
use crate::resources::pivot::Pivot;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

const BACK_C1: f32 = 1.70158;
const BACK_C3: f32 = BACK_C1 + 1.0;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::BackOut => {
            let p = t - 1.0;
            1.0 + BACK_C3 * p * p * p + BACK_C1 * p * p
        }
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time and stop it at the end.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, dt: f32) {
    *time += dt;
    if *time >= duration {
        *playing = false;
        *time = time.clamp(0.0, duration.max(0.0));
    }
}

/// Eased progress of a tween, `1.0` for zero-length tweens.
fn progress(easing: Easing, time: f32, duration: f32) -> f32 {
    if duration > 0.0 {
        ease(easing, time / duration)
    } else {
        1.0
    }
}

/// Play the pivot turn and carry the attached cubies along.
///
/// Triggers [`RotationFinishedEvent`] on the tick the tween stops. The
/// stopped tween stays on the pivot until the completion observer resets
/// it, so the event fires exactly once per turn.
pub fn tween_pivot_system(
    world_time: Res<WorldTime>,
    mut commands: Commands,
    mut pivot: ResMut<Pivot>,
    mut query: Query<(&PivotChild, &mut CubieTransform)>,
) {
    let dt = world_time.delta.max(0.0);
    let pivot = &mut *pivot;
    let Some(tw) = pivot.tween.as_mut() else {
        return;
    };
    if !tw.playing {
        return;
    }
    let duration = tw.duration;
    advance(&mut tw.time, duration, &mut tw.playing, dt);
    let playing = tw.playing;
    let angle = lerp_f32(tw.from, tw.to, progress(tw.easing, tw.time, duration));
    pivot.rotation = tw.axis.rotation(angle);

    for &entity in pivot.group.iter() {
        if let Ok((child, mut transform)) = query.get_mut(entity) {
            *transform = child.rest.rotated_about(pivot.center, pivot.rotation);
        }
    }

    if !playing {
        commands.trigger(RotationFinishedEvent {});
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Scale, &mut TweenScale)>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut scale, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let tw = &mut *tw;
        let duration = tw.duration;
        advance(&mut tw.time, duration, &mut tw.playing, dt);
        scale.scale = lerp_f32(tw.from, tw.to, progress(tw.easing, tw.time, duration));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    const EASINGS: [Easing; 2] = [Easing::Linear, Easing::BackOut];

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_all_types_at_zero() {
        for easing in EASINGS {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_all_types_at_one() {
        for easing in EASINGS {
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for easing in EASINGS {
            assert!(approx_eq(ease(easing, -0.5), 0.0), "{:?}", easing);
            assert!(approx_eq(ease(easing, 1.5), 1.0), "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_linear_values() {
        assert!(approx_eq(ease(Easing::Linear, 0.25), 0.25));
        assert!(approx_eq(ease(Easing::Linear, 0.5), 0.5));
    }

    #[test]
    fn test_ease_back_out_overshoots() {
        // Peaks above 1 before settling back at the end.
        let peak = (1..100)
            .map(|i| ease(Easing::BackOut, i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.05, "peak was {}", peak);
        assert!(peak < 1.2, "peak was {}", peak);
    }

    #[test]
    fn test_ease_back_out_midpoint() {
        // 1 + 2.70158 * (-0.125) + 1.70158 * 0.25
        assert!((ease(Easing::BackOut, 0.5) - 1.0876975).abs() < 1e-5);
    }

    // ==================== INTERPOLATION FUNCTION TESTS ====================

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(0.0, -90.0, 0.5), -45.0));
        assert!(approx_eq(lerp_f32(0.0, 90.0, 0.0), 0.0));
        assert!(approx_eq(lerp_f32(0.0, 90.0, 1.0), 90.0));
    }

    #[test]
    fn test_lerp_f32_extrapolation() {
        // back-out pushes t past 1, the angle overshoots the target
        assert!(approx_eq(lerp_f32(0.0, 90.0, 1.1), 99.0));
    }

    #[test]
    fn test_progress_zero_duration_is_complete() {
        assert!(approx_eq(progress(Easing::BackOut, 0.0, 0.0), 1.0));
    }

    // ==================== ADVANCE FUNCTION TESTS ====================

    #[test]
    fn test_advance_mid_tween() {
        let mut time = 0.0;
        let mut playing = true;
        advance(&mut time, 1.0, &mut playing, 0.1);
        assert!(approx_eq(time, 0.1));
        assert!(playing);
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut time = 0.9;
        let mut playing = true;
        advance(&mut time, 1.0, &mut playing, 0.2);
        assert!(approx_eq(time, 1.0));
        assert!(!playing);
    }

    #[test]
    fn test_advance_zero_duration_stops_immediately() {
        let mut time = 0.0;
        let mut playing = true;
        advance(&mut time, 0.0, &mut playing, 0.016);
        assert!(approx_eq(time, 0.0));
        assert!(!playing);
    }

    // ==================== SYSTEM TESTS ====================

    #[test]
    fn test_tween_scale_system_reaches_target() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.1,
            ..Default::default()
        });
        let e = world
            .spawn((
                Scale::new(1.05),
                TweenScale::new(1.05, 1.0, 0.3).with_easing(Easing::BackOut),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_scale_system);
        for _ in 0..5 {
            schedule.run(&mut world);
        }
        let scale = world.get::<Scale>(e).unwrap();
        assert!((scale.scale - 1.0).abs() < 1e-5);
        assert!(!world.get::<TweenScale>(e).unwrap().playing);
    }
}
