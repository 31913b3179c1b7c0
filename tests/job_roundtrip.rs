use std::fs;
use stockprep::{
    generate_gcode, generate_toolpath, validate, FacingJobParams, GenerationOptions,
};

const JOB_JSON: &str = r#"{
    "stock": {
        "shape": "rectangular",
        "x": 100.0,
        "y": 80.0,
        "z": 10.0,
        "originPosition": "front-left"
    },
    "cutting": {
        "toolRadius": 3.0,
        "stepover": 50.0,
        "stepdown": 1.0,
        "zOffset": 0.0,
        "totalDepth": 2.0,
        "safeZHeight": 5.0
    },
    "pattern": {
        "type": "zigzag",
        "angle": 0.0,
        "millingDirection": "climb"
    },
    "feeds": {
        "xy": 800.0,
        "z": 300.0,
        "spindleSpeed": 12000.0
    }
}"#;

#[test]
fn job_file_to_program_file() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("facing.json");
    let output_path = dir.path().join("facing.nc");
    fs::write(&params_path, JOB_JSON).unwrap();

    let text = fs::read_to_string(&params_path).unwrap();
    let params: FacingJobParams = serde_json::from_str(&text).unwrap();
    assert!(validate(&params).is_empty());

    let toolpath = generate_toolpath(&params, &GenerationOptions::default()).unwrap();
    assert_eq!(toolpath.len(), 2);

    let program = generate_gcode(&toolpath, &params, 1, 1);
    fs::write(&output_path, &program).unwrap();

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("; Stockprep - Generated Facing Operation"));
    assert!(written.contains("; Pattern: zigzag at 0°"));
    assert!(written.contains("; Roughing Z Level 2"));
    assert!(written.contains("G27 Z1 ; Park machine"));
}

#[test]
fn invalid_job_reports_problems_without_generating() {
    let mut params: FacingJobParams = serde_json::from_str(JOB_JSON).unwrap();
    params.cutting.tool_radius = -1.0;
    params.feeds.spindle_speed = 0.0;

    let problems = validate(&params);
    assert!(problems.contains(&"Tool radius must be positive".to_string()));
    assert!(problems.contains(&"Spindle speed must be positive".to_string()));
}
