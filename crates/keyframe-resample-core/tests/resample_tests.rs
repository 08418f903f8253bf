//! Facade behavior: dispatch, skip taxonomy, commit-only-if-shorter, batch
//! stats, and the serde surface.

use keyframe_resample_core::{
    export_stats_json, resample_animation, resample_sampler, Arena, ComponentType, Interpolation,
    Outcome, ResampleConfig, ResampleError, TargetPath, TrackSampler,
};

fn rot_z(deg: f32) -> [f32; 4] {
    let half = deg.to_radians() / 2.0;
    [0.0, 0.0, half.sin(), half.cos()]
}

fn scalar_sampler(name: &str, interpolation: Interpolation, keys: &[(f32, f32)]) -> TrackSampler {
    TrackSampler {
        name: name.to_string(),
        target: TargetPath::Translation,
        interpolation,
        times: keys.iter().map(|(t, _)| *t).collect(),
        values: keys.iter().map(|(_, v)| *v).collect(),
        element_size: 1,
        component: ComponentType::F32,
    }
}

/// it should commit truncated storage when keyframes were dropped
#[test]
fn commits_shorter_track() {
    let mut sampler = scalar_sampler(
        "hold",
        Interpolation::Step,
        &[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 0.0),
            (4.0, 0.0),
            (5.0, 1.0),
        ],
    );
    let mut arena = Arena::default();
    let outcome = resample_sampler(&mut sampler, &mut arena, &ResampleConfig::default()).unwrap();
    assert_eq!(
        outcome,
        Outcome::Resampled {
            before: 6,
            after: 3
        }
    );
    assert_eq!(sampler.times, vec![0.0, 4.0, 5.0]);
    assert_eq!(sampler.values, vec![0.0, 0.0, 1.0]);
}

/// it should leave storage untouched when nothing is droppable
#[test]
fn unchanged_track_is_not_rewritten() {
    let mut sampler = scalar_sampler(
        "distinct",
        Interpolation::Step,
        &[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)],
    );
    let original = sampler.clone();
    let mut arena = Arena::default();
    let outcome = resample_sampler(&mut sampler, &mut arena, &ResampleConfig::default()).unwrap();
    assert_eq!(outcome, Outcome::Unchanged);
    assert_eq!(sampler, original);
}

/// it should route LINEAR rotation through the slerp kernel
#[test]
fn linear_rotation_slerps() {
    let mut values = Vec::new();
    for q in [rot_z(0.0), rot_z(45.0), rot_z(90.0)] {
        values.extend_from_slice(&q);
    }
    let mut sampler = TrackSampler {
        name: "rot".to_string(),
        target: TargetPath::Rotation,
        interpolation: Interpolation::Linear,
        times: vec![0.0, 1.0, 2.0],
        values,
        element_size: 4,
        component: ComponentType::F32,
    };
    let mut arena = Arena::default();
    let config = ResampleConfig {
        tolerance: 1e-6,
        normalize: None,
    };
    let outcome = resample_sampler(&mut sampler, &mut arena, &config).unwrap();
    assert_eq!(
        outcome,
        Outcome::Resampled {
            before: 3,
            after: 2
        }
    );
    assert_eq!(sampler.times, vec![0.0, 2.0]);
}

/// it should derive the weights element width from the value/time
/// cardinality
#[test]
fn weights_width_is_derived() {
    // Two morph targets, colinear ramps over exactly representable steps.
    let times = vec![0.0, 1.0, 2.0, 3.0];
    let mut values = Vec::new();
    for t in &times {
        values.extend_from_slice(&[t * 0.25, t * 0.5]);
    }
    let mut sampler = TrackSampler {
        name: "weights".to_string(),
        target: TargetPath::Weights,
        interpolation: Interpolation::Linear,
        times,
        // Declared size is meaningless for weights; the facade divides.
        values,
        element_size: 1,
        component: ComponentType::F32,
    };
    let mut arena = Arena::default();
    let config = ResampleConfig {
        tolerance: 1e-6,
        normalize: None,
    };
    let outcome = resample_sampler(&mut sampler, &mut arena, &config).unwrap();
    assert_eq!(
        outcome,
        Outcome::Resampled {
            before: 4,
            after: 2
        }
    );
    assert_eq!(sampler.values, vec![0.0, 0.0, 0.75, 1.5]);
}

/// it should handle weight widths past vec4 with the same keep rule
#[test]
fn wide_weights_collapse() {
    // Five morph targets, each a colinear ramp (one constant).
    let times = vec![0.0, 1.0, 2.0];
    let mut values = Vec::new();
    for t in &times {
        values.extend_from_slice(&[t * 0.25, t * 0.5, t * 0.125, 0.0, t * 1.0]);
    }
    let mut sampler = TrackSampler {
        name: "wide-weights".to_string(),
        target: TargetPath::Weights,
        interpolation: Interpolation::Linear,
        times,
        values,
        element_size: 1,
        component: ComponentType::F32,
    };
    let mut arena = Arena::default();
    let config = ResampleConfig {
        tolerance: 1e-6,
        normalize: None,
    };
    let outcome = resample_sampler(&mut sampler, &mut arena, &config).unwrap();
    assert_eq!(
        outcome,
        Outcome::Resampled {
            before: 3,
            after: 2
        }
    );
    assert_eq!(sampler.times, vec![0.0, 2.0]);
    assert_eq!(
        sampler.values,
        vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 0.25, 0.0, 2.0]
    );
}

/// it should skip CUBICSPLINE samplers without mutating them
#[test]
fn cubicspline_is_skipped() {
    let mut sampler = scalar_sampler(
        "spline",
        Interpolation::CubicSpline,
        &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
    );
    let original = sampler.clone();
    let mut arena = Arena::default();
    let err = resample_sampler(&mut sampler, &mut arena, &ResampleConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ResampleError::UnsupportedInterpolation(Interpolation::CubicSpline)
    );
    assert_eq!(sampler, original);
}

/// it should skip normalized storage unless the config opts in
#[test]
fn normalized_storage_requires_opt_in() {
    let mut sampler = scalar_sampler(
        "quantized",
        Interpolation::Linear,
        &[(0.0, 0.0), (1.0, 128.0), (2.0, 255.0)],
    );
    sampler.component = ComponentType::U8;
    let original = sampler.clone();
    let mut arena = Arena::default();

    let err = resample_sampler(&mut sampler, &mut arena, &ResampleConfig::default()).unwrap_err();
    assert_eq!(err, ResampleError::UnsupportedLayout(ComponentType::U8));
    assert_eq!(sampler, original);

    let config = ResampleConfig {
        tolerance: 1e-2,
        normalize: Some(ComponentType::U8),
    };
    let outcome = resample_sampler(&mut sampler, &mut arena, &config).unwrap();
    assert_eq!(
        outcome,
        Outcome::Resampled {
            before: 3,
            after: 2
        }
    );
    assert_eq!(sampler.values, vec![0.0, 255.0]);
}

/// it should reject a weights track whose cardinality is not integral
#[test]
fn malformed_weights_are_skipped() {
    let mut sampler = TrackSampler {
        name: "bad-weights".to_string(),
        target: TargetPath::Weights,
        interpolation: Interpolation::Linear,
        times: vec![0.0, 1.0, 2.0],
        values: vec![0.0; 7],
        element_size: 1,
        component: ComponentType::F32,
    };
    let original = sampler.clone();
    let mut arena = Arena::default();
    let err = resample_sampler(&mut sampler, &mut arena, &ResampleConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ResampleError::UnsupportedDimension {
            frames: 3,
            values: 7
        }
    );
    assert_eq!(sampler, original);
}

/// it should process siblings despite local failures and account for them
/// in the stats
#[test]
fn batch_failures_are_local() {
    let mut samplers = vec![
        scalar_sampler(
            "ramp",
            Interpolation::Linear,
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)],
        ),
        scalar_sampler(
            "spline",
            Interpolation::CubicSpline,
            &[(0.0, 0.0), (1.0, 1.0)],
        ),
        scalar_sampler(
            "hold",
            Interpolation::Step,
            &[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)],
        ),
    ];
    let mut arena = Arena::default();
    let stats = resample_animation(&mut samplers, &mut arena, &ResampleConfig::default());

    assert_eq!(stats.samplers, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.before_frames, 4 + 2 + 3);
    assert_eq!(stats.after_frames, 2 + 2 + 2);
    assert!(stats.after_bytes < stats.before_bytes);

    // The failed sampler kept its storage.
    assert_eq!(samplers[1].times.len(), 2);

    let json = export_stats_json(&stats);
    assert_eq!(json["samplers"], 3);
    assert_eq!(json["skipped"], 1);
}

/// it should round-trip the sampler model through serde with glTF-style
/// tags and a defaulted component type
#[test]
fn sampler_serde_round_trip() {
    let json = serde_json::json!({
        "name": "node.rotation",
        "target": "rotation",
        "interpolation": "LINEAR",
        "times": [0.0, 1.0],
        "values": [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        "element_size": 4
    });
    let sampler: TrackSampler = serde_json::from_value(json).unwrap();
    assert_eq!(sampler.target, TargetPath::Rotation);
    assert_eq!(sampler.interpolation, Interpolation::Linear);
    assert_eq!(sampler.component, ComponentType::F32);

    let back = serde_json::to_value(&sampler).unwrap();
    assert_eq!(back["interpolation"], "LINEAR");
    assert_eq!(back["target"], "rotation");
}
