use std::path::PathBuf;

use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::Array2;

use vitalscreen_app::models::store::ModelStore;

/// Train a deliberately trivial model: the first feature alone separates
/// the classes at 0.5.
fn train_tiny_model() -> GBDT {
    let mut config = Config::new();
    config.set_feature_size(3);
    config.set_shrinkage(0.1);
    config.set_max_depth(3);
    config.set_iterations(20);
    config.set_loss("LogLikelyhood");

    let mut gbdt = GBDT::new(&config);

    let mut train_x = DataVec::new();
    for i in 0..40 {
        let v = i as f32 / 40.0;
        let label = if v > 0.5 { 1.0 } else { -1.0 };
        train_x.push(Data::new_training_data(vec![v, 1.0 - v, 5.0], 1.0, label, None));
    }

    gbdt.fit(&mut train_x);
    gbdt
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vitalscreen_{}_{}.json", name, std::process::id()))
}

#[test]
fn saved_artifact_loads_and_predicts_binary_labels() {
    let path = scratch_path("round_trip");
    train_tiny_model()
        .save_model(path.to_str().unwrap())
        .expect("failed to save artifact");

    let mut store = ModelStore::new();
    let classifier = store.load(&path, "round_trip").expect("failed to load artifact");

    let batch = Array2::from_shape_vec(
        (2, 3),
        vec![
            0.05, 0.95, 5.0, // deep in the negative class
            0.95, 0.05, 5.0, // deep in the positive class
        ],
    )
    .unwrap();

    let labels = classifier.predict(&batch).expect("prediction failed");
    assert_eq!(labels, vec![0, 1]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn reloading_the_same_path_reuses_the_cached_object() {
    let path = scratch_path("cache");
    train_tiny_model()
        .save_model(path.to_str().unwrap())
        .expect("failed to save artifact");

    let mut store = ModelStore::new();
    let first = store.load(&path, "cache").expect("failed to load artifact");

    // the artifact is gone from storage, so only the cache can satisfy this
    std::fs::remove_file(&path).unwrap();
    let second = store.load(&path, "cache").expect("cached load should not touch storage");

    let batch = Array2::from_shape_vec((1, 3), vec![0.95, 0.05, 5.0]).unwrap();
    assert_eq!(
        first.predict(&batch).unwrap(),
        second.predict(&batch).unwrap()
    );
}

#[test]
fn missing_artifact_is_a_load_error() {
    let mut store = ModelStore::new();
    let err = store
        .load(&scratch_path("missing"), "missing")
        .err()
        .expect("expected load of missing artifact to fail");
    let text = err.to_string();
    assert!(text.contains("vitalscreen_missing"), "unexpected error: {}", text);
}
