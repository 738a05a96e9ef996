//! End-to-end integration tests for the dissection pipeline.
//!
//! Drives the complete pipeline from XML files to extracted plans and YAML
//! output using the fixture documents under `tests/fixtures/`.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use cosim_config::manager::dissect_file;
use cosim_config::ports::{PortRange, PortsManager};
use cosim_config::yaml::generate_yaml;
use cosim_config::{tags, ConfigError, SectionValue, ServicesDeploymentManager};

/// Path to a fixture file.
fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_deployment_pipeline_full_document() {
    let mut manager = ServicesDeploymentManager::new();
    dissect_file(&fixture("services_deployment.xml"), &mut manager)
        .expect("dissection should succeed");

    let plan = manager
        .services_deployment_plan()
        .expect("plan should be built");

    assert_eq!(
        plan.launch_command,
        vec![
            "srun",
            "--exact",
            "--label",
            "--nodes=1",
            "--ntasks=1",
            "--cpus-per-task=1",
            "--cpu-bind=none",
            "--gres=gpus:0",
        ]
    );

    // Exactly the three services from the fixture, passed through verbatim
    assert_eq!(plan.settings.len(), 3);
    let orchestrator = plan
        .settings
        .get(tags::ORCHESTRATOR)
        .and_then(SectionValue::as_map)
        .expect("ORCHESTRATOR settings should be a map");
    assert_eq!(
        orchestrator.get("NODE"),
        Some(&SectionValue::Text("0".to_string()))
    );
    assert_eq!(
        orchestrator.get("CPUS_PER_TASK"),
        Some(&SectionValue::Text("1".to_string()))
    );
}

#[test]
fn test_deployment_pipeline_missing_options_section() {
    let mut manager = ServicesDeploymentManager::new();
    let err = dissect_file(&fixture("missing_options.xml"), &mut manager)
        .expect_err("dissection should fail");

    match err {
        ConfigError::MissingSection { filename, tag } => {
            assert_eq!(filename, "missing_options.xml");
            assert_eq!(tag, "srun_options");
        }
        other => panic!("expected MissingSection, got {other}"),
    }
    assert!(manager.services_deployment_plan().is_none());
}

#[test]
fn test_deployment_pipeline_idempotent() {
    let mut first = ServicesDeploymentManager::new();
    let mut second = ServicesDeploymentManager::new();
    dissect_file(&fixture("services_deployment.xml"), &mut first).expect("first dissection");
    dissect_file(&fixture("services_deployment.xml"), &mut second).expect("second dissection");

    assert_eq!(
        first.services_deployment_plan(),
        second.services_deployment_plan()
    );
}

#[test]
fn test_ports_pipeline_coerces_integers() {
    let mut manager = PortsManager::new();
    dissect_file(&fixture("port_ranges.xml"), &mut manager).expect("dissection should succeed");

    let ranges = manager.port_ranges().expect("ranges should be built");
    assert_eq!(ranges.len(), 3);
    assert_eq!(
        ranges.get(tags::ORCHESTRATOR),
        Some(&PortRange {
            min: 59100,
            max: 59120,
            max_tries: 20
        })
    );
    assert_eq!(
        ranges.get(tags::COMMAND_CONTROL),
        Some(&PortRange {
            min: 59121,
            max: 59150,
            max_tries: 30
        })
    );
    assert_eq!(
        ranges.get(tags::APPLICATION_COMPANION),
        Some(&PortRange {
            min: 59150,
            max: 59200,
            max_tries: 50
        })
    );
}

#[test]
fn test_ports_pipeline_rejects_deployment_document() {
    // Dissecting a deployment document with the ports extractor fails on the
    // root tag before any hook runs.
    let mut manager = PortsManager::new();
    let err = dissect_file(&fixture("services_deployment.xml"), &mut manager)
        .expect_err("root tag should not match");

    assert!(matches!(err, ConfigError::RootTagMismatch { .. }));
}

#[test]
fn test_yaml_export_of_extracted_plan() {
    let mut manager = ServicesDeploymentManager::new();
    dissect_file(&fixture("services_deployment.xml"), &mut manager)
        .expect("dissection should succeed");

    let plan = manager
        .services_deployment_plan()
        .expect("plan should be built");
    let yaml = generate_yaml(plan).expect("YAML generation should succeed");

    let value: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(&yaml).expect("generated YAML should parse");
    assert_eq!(
        value["launch_command"][0],
        serde_yaml_ng::Value::String("srun".to_string())
    );
    assert_eq!(
        value["settings"]["APPLICATION_COMPANION"]["NODE"],
        serde_yaml_ng::Value::String("1".to_string())
    );
}
