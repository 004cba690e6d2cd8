use std::thread;

use deterioration_core::{score_trajectory, PatientTimeline, TrackedFeature, WeightTable};

fn patient(seed: usize) -> PatientTimeline {
    let hr: Vec<f64> = (0..48).map(|i| 60.0 + ((i * 7 + seed * 13) % 90) as f64).collect();
    let lactate: Vec<f64> = (0..48).map(|i| ((i + seed) % 12) as f64 * 0.5).collect();
    PatientTimeline::from_series([(TrackedFeature::Hr, hr), (TrackedFeature::Lactate, lactate)])
        .with_patient_id(format!("P{seed:03}"))
}

#[test]
fn patients_score_independently_across_threads() {
    let weights = WeightTable::new([(TrackedFeature::Hr, 0.053), (TrackedFeature::Lactate, 0.103)])
        .unwrap();
    let patients: Vec<PatientTimeline> = (0..8).map(patient).collect();
    let weights = &weights;

    let sequential: Vec<Vec<f64>> = patients
        .iter()
        .map(|timeline| score_trajectory(timeline, weights).unwrap())
        .collect();

    let parallel: Vec<Vec<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = patients
            .iter()
            .map(|timeline| scope.spawn(move || score_trajectory(timeline, weights).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, parallel);
    assert!(sequential.iter().all(|scores| scores.len() == 48));
}
