//! End-to-end pipeline tests over the in-memory adapters.
//!
//! These exercise the full `GenerateService` wiring: real catalog, real
//! writer semantics, scripted toolchain outcomes.

use std::path::Path;

use fabgen_adapters::{
    CollectingProgress, ComponentCatalog, MemoryFilesystem, MemorySpecSource, ScriptedToolchain,
};
use fabgen_core::{
    application::{
        ApplicationError, GenerateOptions, GenerateService, ProjectFilesystem, RunOutcome,
    },
    domain::{SpecKind, ValidationResult},
    error::FabgenError,
};

fn service_with(
    specs: MemorySpecSource,
    toolchain: ScriptedToolchain,
) -> (GenerateService, MemoryFilesystem) {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(
        Box::new(specs),
        Box::new(ComponentCatalog::with_builtin()),
        Box::new(fs.clone()),
        Box::new(toolchain),
        Box::new(CollectingProgress::new()),
    );
    (service, fs)
}

#[test]
fn empty_spec_directory_emits_full_default_artifact_set() {
    let (service, fs) = service_with(MemorySpecSource::empty(), ScriptedToolchain::all_green());

    let report = service
        .generate("new-app", &GenerateOptions::default())
        .unwrap();

    // 7 components + App.tsx + 6 ui primitives, all from placeholder data.
    assert_eq!(report.files_written.len(), 14);
    assert_eq!(fs.file_count(), 14);
    assert!(fs.exists(Path::new("new-app/src/App.tsx")));
    assert!(fs.exists(Path::new("new-app/src/components/MqttProvider.tsx")));
    assert!(fs.exists(Path::new("new-app/src/components/ui/scroll-area.tsx")));

    // Validation was attempted and the outcome reflects it.
    assert_eq!(report.outcome(), RunOutcome::Validated);
    assert!(report.requirements.is_default());
}

#[test]
fn equipment_tokens_deduplicate_across_documents() {
    let specs = MemorySpecSource::empty()
        .with(SpecKind::ProductRequirements, "see ws://broker/mqtt")
        .with(
            SpecKind::Dashboard,
            "LASER01 drives BEND02; BEND02 feeds COAT03. LASER01 again.",
        );
    let (service, _fs) = service_with(specs, ScriptedToolchain::all_green());

    let report = service
        .generate("new-app", &GenerateOptions::default())
        .unwrap();

    let equipment = &report.requirements.equipment;
    assert_eq!(equipment.len(), 3);
    for id in ["LASER01", "BEND02", "COAT03"] {
        assert!(equipment.contains(id), "missing {id}");
    }
    assert!(report.requirements.connection.is_some());
    assert_eq!(report.requirements.components.len(), 7);
}

#[test]
fn scaffold_failure_aborts_with_no_artifacts() {
    let toolchain = ScriptedToolchain::all_green().with_scaffold_exit(1);
    let (service, fs) = service_with(MemorySpecSource::empty(), toolchain);

    let err = service
        .generate("new-app", &GenerateOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        FabgenError::Application(ApplicationError::ScaffoldFailed { .. })
    ));
    assert_eq!(fs.file_count(), 0);
}

#[test]
fn install_failure_still_writes_all_artifacts() {
    let toolchain = ScriptedToolchain::all_green().with_install_exit(1);
    let (service, fs) = service_with(MemorySpecSource::empty(), toolchain);

    let report = service
        .generate("new-app", &GenerateOptions::default())
        .unwrap();

    assert!(!report.install.as_ref().unwrap().success());
    assert_eq!(fs.file_count(), 14);
    assert_eq!(report.outcome(), RunOutcome::Validated);
}

#[test]
fn failed_validation_reports_generated_unvalidated() {
    let toolchain = ScriptedToolchain::all_green()
        .with_build_result(ValidationResult::failed(Some(1), "tsc: 3 errors"));
    let (service, fs) = service_with(MemorySpecSource::empty(), toolchain);

    let report = service
        .generate("new-app", &GenerateOptions::default())
        .unwrap();

    // Generated tree is left in place for inspection.
    assert_eq!(fs.file_count(), 14);
    assert_eq!(report.outcome(), RunOutcome::GeneratedUnvalidated);
    assert!(
        report
            .validation
            .unwrap()
            .diagnostic_tail
            .contains("3 errors")
    );
}

#[test]
fn generate_twice_into_same_root_is_idempotent() {
    let (service, fs) = service_with(MemorySpecSource::empty(), ScriptedToolchain::all_green());
    let options = GenerateOptions::default();

    service.generate("new-app", &options).unwrap();
    let first = fs.list_files();
    let first_app = fs.read_file(Path::new("new-app/src/App.tsx")).unwrap();

    service.generate("new-app", &options).unwrap();
    let second = fs.list_files();
    let second_app = fs.read_file(Path::new("new-app/src/App.tsx")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_app, second_app);
}

#[test]
fn write_failure_leaves_earlier_artifacts_in_place() {
    let (service, fs) = service_with(MemorySpecSource::empty(), ScriptedToolchain::all_green());
    // The provider is written first; fail a later component write.
    fs.fail_writes_to("new-app/src/components/MessageFeed.tsx");

    let err = service
        .generate("new-app", &GenerateOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        FabgenError::Application(ApplicationError::FilesystemError { .. })
    ));
    // No rollback: artifacts written before the failure survive.
    assert!(fs.exists(Path::new("new-app/src/components/MqttProvider.tsx")));
    assert!(!fs.exists(Path::new("new-app/src/App.tsx")));
}

#[test]
fn progress_events_carry_structured_requirement_payload() {
    use fabgen_core::application::ports::{ProgressLevel, ProgressSink};
    use std::sync::Arc;

    // Delegating wrapper so the test keeps a handle on the collector
    // after the service takes ownership of its Box.
    struct Shared(Arc<CollectingProgress>);
    impl ProgressSink for Shared {
        fn emit(&self, level: ProgressLevel, message: &str, payload: Option<serde_json::Value>) {
            self.0.emit(level, message, payload);
        }
    }

    let collector = Arc::new(CollectingProgress::new());
    let specs = MemorySpecSource::empty().with(SpecKind::ProductRequirements, "prd");
    let service = GenerateService::new(
        Box::new(specs),
        Box::new(ComponentCatalog::with_builtin()),
        Box::new(MemoryFilesystem::new()),
        Box::new(ScriptedToolchain::all_green()),
        Box::new(Shared(collector.clone())),
    );

    service
        .generate("new-app", &GenerateOptions::default())
        .unwrap();

    let events = collector.events();
    let analysis = events
        .iter()
        .find(|e| e.message.contains("Requirements analysis complete"))
        .expect("analysis event missing");
    let payload = analysis.payload.as_ref().expect("structured payload");
    assert_eq!(payload["components"].as_array().unwrap().len(), 7);

    // A fully green run reports no error events.
    assert!(collector.errors().is_empty());

    // Elapsed markers never run backwards across the run.
    for pair in events.windows(2) {
        assert!(pair[0].elapsed_secs <= pair[1].elapsed_secs);
    }
}

#[test]
fn skip_validate_never_invokes_build() {
    let toolchain = ScriptedToolchain::all_green();
    let (service, _fs) = service_with(MemorySpecSource::empty(), toolchain.clone());
    let options = GenerateOptions {
        skip_validate: true,
        ..GenerateOptions::default()
    };

    let report = service.generate("new-app", &options).unwrap();
    assert_eq!(report.outcome(), RunOutcome::ValidationSkipped);
    assert!(report.validation.is_none());

    // Stage order: scaffold, install; build never ran.
    let calls = toolchain.calls();
    assert!(calls[0].starts_with("scaffold"));
    assert!(calls[1].starts_with("install"));
    assert!(!calls.iter().any(|c| c.starts_with("build")));
}
