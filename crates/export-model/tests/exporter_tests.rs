//! End-to-end engine tests through the snapshot seam.

use std::fs;

use export_fs::NormalizedPath;
use export_model::{
    ElementKind, Exporter, ModelSnapshot, PlatformClient, ProjectRef, RevisionRef, SnapshotClient,
    SnapshotWorkingCopy,
    snapshot::SnapshotElement,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn element(name: &str, source: &str) -> SnapshotElement {
    SnapshotElement {
        qualified_name: name.into(),
        source: source.into(),
    }
}

fn working_copy(snapshot: ModelSnapshot) -> SnapshotWorkingCopy {
    SnapshotWorkingCopy::new(snapshot)
}

#[tokio::test]
async fn exports_one_file_per_element_with_kind_tags() {
    let out = TempDir::new().unwrap();
    let wc = working_copy(ModelSnapshot {
        project: "MyApp".into(),
        constants: vec![element("Core.MaxRetries", "3")],
        enumerations: vec![element("Core.Color", "Red;Green")],
        pages: vec![element("Core.Home", "<page/>")],
        ..Default::default()
    });

    let exporter = Exporter::new(NormalizedPath::new(out.path()), "_");
    let summary = exporter.export(&wc).await.unwrap();

    assert!(!summary.skipped);
    assert_eq!(summary.total(), 3);

    let project_dir = out.path().join("MyApp");
    assert!(project_dir.join("Core.MaxRetries [CONSTANT]").is_file());
    assert!(project_dir.join("Core.Color [ENUMERATION]").is_file());
    assert!(project_dir.join("Core.Home [PAGE]").is_file());
    assert_eq!(
        fs::read_to_string(project_dir.join("Core.MaxRetries [CONSTANT]")).unwrap(),
        "3"
    );
}

#[tokio::test]
async fn duplicate_names_get_numeric_suffixes() {
    let out = TempDir::new().unwrap();
    let wc = working_copy(ModelSnapshot {
        project: "MyApp".into(),
        microflows: vec![
            element("Core.DoThing", "first"),
            element("Core.DoThing", "second"),
            element("Core.DoThing", "third"),
        ],
        ..Default::default()
    });

    let exporter = Exporter::new(NormalizedPath::new(out.path()), "_");
    exporter.export(&wc).await.unwrap();

    let project_dir = out.path().join("MyApp");
    assert!(project_dir.join("Core.DoThing [MICROFLOW]").is_file());
    assert!(project_dir.join("Core.DoThing [MICROFLOW]1").is_file());
    // The suffix compounds on the already-suffixed label.
    assert!(project_dir.join("Core.DoThing [MICROFLOW]12").is_file());
}

#[tokio::test]
async fn illegal_characters_in_names_are_replaced() {
    let out = TempDir::new().unwrap();
    let wc = working_copy(ModelSnapshot {
        project: "MyApp".into(),
        snippets: vec![element("Core.A/B?C", "snippet")],
        ..Default::default()
    });

    let exporter = Exporter::new(NormalizedPath::new(out.path()), "_");
    exporter.export(&wc).await.unwrap();

    let project_dir = out.path().join("MyApp");
    assert!(project_dir.join("Core.A_B_C [SNIPPET]").is_file());
}

#[tokio::test]
async fn pre_existing_output_folder_skips_without_error() {
    let out = TempDir::new().unwrap();
    fs::create_dir_all(out.path().join("MyApp")).unwrap();
    fs::write(out.path().join("MyApp/keep-me"), "prior export").unwrap();

    let wc = working_copy(ModelSnapshot {
        project: "MyApp".into(),
        constants: vec![element("Core.MaxRetries", "3")],
        ..Default::default()
    });

    let exporter = Exporter::new(NormalizedPath::new(out.path()), "_");
    let summary = exporter.export(&wc).await.unwrap();

    assert!(summary.skipped);
    assert_eq!(summary.total(), 0);
    // Prior export untouched, nothing new written
    assert_eq!(
        fs::read_to_string(out.path().join("MyApp/keep-me")).unwrap(),
        "prior export"
    );
    assert_eq!(fs::read_dir(out.path().join("MyApp")).unwrap().count(), 1);
}

#[tokio::test]
async fn empty_model_exports_empty_folder() {
    let out = TempDir::new().unwrap();
    let wc = working_copy(ModelSnapshot {
        project: "Empty".into(),
        ..Default::default()
    });

    let exporter = Exporter::new(NormalizedPath::new(out.path()), "_");
    let summary = exporter.export(&wc).await.unwrap();

    assert!(!summary.skipped);
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.counts.len(), ElementKind::ALL.len());
    assert!(out.path().join("Empty").is_dir());
    assert_eq!(fs::read_dir(out.path().join("Empty")).unwrap().count(), 0);
}

#[tokio::test]
async fn snapshot_client_round_trip() {
    let dir = TempDir::new().unwrap();
    let snapshot_path = dir.path().join("model.json");
    let snapshot = ModelSnapshot {
        project: "MyApp".into(),
        domain_models: vec![element("Core", "entities")],
        ..Default::default()
    };
    fs::write(
        &snapshot_path,
        serde_json::to_string_pretty(&snapshot).unwrap(),
    )
    .unwrap();

    let client = SnapshotClient::new(NormalizedPath::new(&snapshot_path));
    let project = ProjectRef {
        id: "abc-123".into(),
        name: "MyApp".into(),
    };
    let wc = client
        .create_working_copy(&project, &RevisionRef::latest("trunk"))
        .await
        .unwrap();

    let out = TempDir::new().unwrap();
    let exporter = Exporter::new(NormalizedPath::new(out.path()), "_");
    let summary = exporter.export(&wc).await.unwrap();

    assert_eq!(summary.total(), 1);
    assert!(out.path().join("MyApp/Core [DOMAIN MODEL]").is_file());
}

#[tokio::test]
async fn snapshot_client_missing_file_is_working_copy_error() {
    let dir = TempDir::new().unwrap();
    let client = SnapshotClient::new(NormalizedPath::new(dir.path().join("absent.json")));
    let project = ProjectRef {
        id: "abc-123".into(),
        name: "MyApp".into(),
    };

    let err = client
        .create_working_copy(&project, &RevisionRef::latest("trunk"))
        .await
        .unwrap_err();
    assert!(matches!(err, export_model::Error::WorkingCopy { .. }));
}
