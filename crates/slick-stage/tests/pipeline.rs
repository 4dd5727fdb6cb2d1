//! Pipeline validation tests.
//!
//! These live as integration tests rather than a unit-test module inside
//! `src/pipeline.rs`: the stage fixtures in `slick-test-utils` implement
//! the `Stage` trait from the externally built `slick-stage` lib, which a
//! unit-test build cannot unify with (dev-dependency cycle).

use slick_core::{FieldId, FieldSet};
use slick_stage::{validate_pipeline, PipelineError, Stage, WriteMode};
use slick_test_utils::{ConstStage, IdentityStage};

fn defined(ids: &[u32]) -> FieldSet {
    ids.iter().map(|&i| FieldId(i)).collect()
}

#[test]
fn empty_pipeline_rejected() {
    let stages: Vec<Box<dyn Stage>> = vec![];
    assert_eq!(
        validate_pipeline(&stages, &defined(&[0]), &FieldSet::empty()).unwrap_err(),
        PipelineError::EmptyPipeline
    );
}

#[test]
fn write_conflict_detected() {
    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(ConstStage::new("a", FieldId(0), 1.0)),
        Box::new(ConstStage::new("b", FieldId(0), 2.0)),
    ];
    match validate_pipeline(&stages, &defined(&[0]), &FieldSet::empty()).unwrap_err() {
        PipelineError::WriteConflict(conflicts) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].field_id, FieldId(0));
            assert_eq!(conflicts[0].first_writer, "a");
            assert_eq!(conflicts[0].second_writer, "b");
        }
        other => panic!("expected WriteConflict, got {other:?}"),
    }
}

#[test]
fn undefined_read_rejected() {
    let stages: Vec<Box<dyn Stage>> =
        vec![Box::new(IdentityStage::new("copy", FieldId(5), FieldId(0)))];
    assert_eq!(
        validate_pipeline(&stages, &defined(&[0]), &FieldSet::empty()).unwrap_err(),
        PipelineError::UndefinedField {
            stage: "copy".into(),
            field_id: FieldId(5),
        }
    );
}

#[test]
fn undefined_write_rejected() {
    let stages: Vec<Box<dyn Stage>> =
        vec![Box::new(ConstStage::new("c", FieldId(9), 0.0))];
    assert_eq!(
        validate_pipeline(&stages, &defined(&[0]), &FieldSet::empty()).unwrap_err(),
        PipelineError::UndefinedField {
            stage: "c".into(),
            field_id: FieldId(9),
        }
    );
}

#[test]
fn static_field_write_rejected() {
    let stages: Vec<Box<dyn Stage>> =
        vec![Box::new(ConstStage::new("fill", FieldId(0), 1.0))];
    assert_eq!(
        validate_pipeline(&stages, &defined(&[0]), &defined(&[0])).unwrap_err(),
        PipelineError::StaticFieldWrite {
            stage: "fill".into(),
            field_id: FieldId(0),
        }
    );
}

#[test]
fn static_field_reads_allowed() {
    let stages: Vec<Box<dyn Stage>> =
        vec![Box::new(IdentityStage::new("copy", FieldId(0), FieldId(1)))];
    assert!(validate_pipeline(&stages, &defined(&[0, 1]), &defined(&[0])).is_ok());
}

#[test]
fn valid_pipeline_produces_plan() {
    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(ConstStage::new("fill", FieldId(0), 1.0)),
        Box::new(IdentityStage::new("copy", FieldId(0), FieldId(1))),
    ];
    let plan = validate_pipeline(&stages, &defined(&[0, 1]), &FieldSet::empty()).unwrap();
    assert_eq!(plan.len(), 2);
    let modes = plan.write_modes_for(1).unwrap();
    assert_eq!(modes.get(&FieldId(1)), Some(&WriteMode::Full));
}
