//! Dispatcher behavior with stock and replacement packagers.

use async_trait::async_trait;
use bsdbook_packager::bundler::{
    AggregationRule, Bundler, DispatchOutcome, Error, PackageType, Packager, Result, Settings,
    SettingsBuilder, TargetStatus,
};
use std::path::PathBuf;

/// Writes `<out>/<name>.<ext>` containing `contents`.
struct WritesArtifact {
    package_type: PackageType,
    contents: &'static str,
}

#[async_trait]
impl Packager for WritesArtifact {
    fn package_type(&self) -> PackageType {
        self.package_type
    }

    async fn bundle_project(&self, settings: &Settings) -> Result<Vec<PathBuf>> {
        let out = settings.project_out_directory();
        tokio::fs::create_dir_all(out).await?;
        let path = out.join(format!(
            "{}.{}",
            settings.product_name(),
            self.package_type.extension()
        ));
        tokio::fs::write(&path, self.contents).await?;
        Ok(vec![path])
    }
}

/// Fails the way an external tool exiting with `code` would.
struct ExitsWith {
    package_type: PackageType,
    code: i32,
}

#[async_trait]
impl Packager for ExitsWith {
    fn package_type(&self) -> PackageType {
        self.package_type
    }

    async fn bundle_project(&self, _settings: &Settings) -> Result<Vec<PathBuf>> {
        Err(Error::ToolFailed {
            tool: "fake-tool".into(),
            code: Some(self.code),
        })
    }
}

/// Claims success without producing anything.
struct ReturnsNothing(PackageType);

#[async_trait]
impl Packager for ReturnsNothing {
    fn package_type(&self) -> PackageType {
        self.0
    }

    async fn bundle_project(&self, _settings: &Settings) -> Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

fn settings(dir: &tempfile::TempDir, rule: AggregationRule) -> Settings {
    SettingsBuilder::new()
        .source_directory(dir.path())
        .aggregation(rule)
        .build()
        .unwrap()
}

fn writes(package_type: PackageType) -> Box<dyn Packager> {
    Box::new(WritesArtifact {
        package_type,
        contents: "hello",
    })
}

#[tokio::test]
async fn stock_packagers_report_every_target_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let report = Bundler::new(settings(&dir, AggregationRule::SumOfCodes))
        .dispatch()
        .await;

    let types: Vec<_> = report.results().iter().map(|r| r.package_type).collect();
    assert_eq!(types, PackageType::ALL);
    assert!(
        report
            .results()
            .iter()
            .all(|r| r.status == TargetStatus::Unsupported)
    );
    assert_eq!(report.results().iter().map(|r| r.code()).sum::<i32>(), -4);
    assert_eq!(report.outcome(), DispatchOutcome::Failure);
    assert_eq!(report.outcome().code(), -1);
}

#[tokio::test]
async fn report_records_source_and_timing() {
    let dir = tempfile::tempdir().unwrap();
    let report = Bundler::new(settings(&dir, AggregationRule::AnyFailure))
        .dispatch()
        .await;

    assert!(report.source_directory().is_absolute());
    assert!(report.source_directory().ends_with(dir.path().file_name().unwrap()));
    assert!(report.started_at() <= report.finished_at());
}

#[tokio::test]
async fn repeated_dispatches_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let bundler = Bundler::new(settings(&dir, AggregationRule::AnyFailure));

    let first = bundler.dispatch().await;
    let second = bundler.dispatch().await;
    assert_eq!(first.results(), second.results());
    assert_eq!(first.outcome(), second.outcome());
}

#[tokio::test]
async fn all_targets_built_is_success() {
    let dir = tempfile::tempdir().unwrap();
    let mut bundler = Bundler::new(settings(&dir, AggregationRule::AnyFailure));
    for package_type in PackageType::ALL {
        bundler = bundler.with_packager(writes(package_type));
    }

    let report = bundler.dispatch().await;
    assert_eq!(report.outcome(), DispatchOutcome::Success);
    assert_eq!(report.results().len(), 4);

    let Some(TargetStatus::Built { artifact }) =
        report.result(PackageType::Dpkg).map(|r| &r.status)
    else {
        panic!("dpkg should have been built");
    };
    assert_eq!(artifact.size, 5);
    assert_eq!(
        artifact.checksum,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    assert_eq!(
        artifact.paths,
        vec![dir.path().join("dist").join("BSDBook.deb")]
    );
}

#[tokio::test]
async fn replacing_a_packager_keeps_order_and_count() {
    let dir = tempfile::tempdir().unwrap();
    let report = Bundler::new(settings(&dir, AggregationRule::AnyFailure))
        .with_packager(writes(PackageType::Exe))
        .with_packager(writes(PackageType::Dpkg))
        .dispatch()
        .await;

    let types: Vec<_> = report.results().iter().map(|r| r.package_type).collect();
    assert_eq!(types, PackageType::ALL);
    assert!(report.results()[0].status.is_built());
    assert_eq!(report.results()[1].status, TargetStatus::Unsupported);
    assert!(report.results()[3].status.is_built());
    assert_eq!(report.outcome(), DispatchOutcome::Failure);
}

#[tokio::test]
async fn positive_exit_code_fails_sum_rule() {
    let dir = tempfile::tempdir().unwrap();
    let report = Bundler::new(settings(&dir, AggregationRule::SumOfCodes))
        .with_packager(Box::new(ExitsWith {
            package_type: PackageType::Dpkg,
            code: 1,
        }))
        .with_packager(writes(PackageType::Pkg))
        .with_packager(writes(PackageType::Mpkg))
        .with_packager(writes(PackageType::Exe))
        .dispatch()
        .await;

    assert_eq!(report.results()[0].code(), 1);
    assert_eq!(report.outcome(), DispatchOutcome::Failure);
}

#[tokio::test]
async fn cancelling_codes_only_fool_the_sum_rule() {
    let dir = tempfile::tempdir().unwrap();
    let build = |rule| {
        Bundler::new(settings(&dir, rule))
            .with_packager(Box::new(ExitsWith {
                package_type: PackageType::Dpkg,
                code: 1,
            }))
            .with_packager(writes(PackageType::Mpkg))
            .with_packager(writes(PackageType::Exe))
    };

    // dpkg +1, pkg stub -1, the rest 0
    let summed = build(AggregationRule::SumOfCodes).dispatch().await;
    assert_eq!(summed.outcome(), DispatchOutcome::Success);

    let strict = build(AggregationRule::AnyFailure).dispatch().await;
    assert_eq!(strict.outcome(), DispatchOutcome::Failure);
}

#[tokio::test]
async fn empty_artifact_list_is_recorded_as_failure() {
    let dir = tempfile::tempdir().unwrap();
    let report = Bundler::new(settings(&dir, AggregationRule::AnyFailure))
        .with_packager(Box::new(ReturnsNothing(PackageType::Pkg)))
        .dispatch()
        .await;

    match &report.results()[1].status {
        TargetStatus::Failed { code, reason } => {
            assert_eq!(*code, -1);
            assert!(reason.contains("returned no paths"));
        }
        other => panic!("unexpected status: {other:?}"),
    }
    assert_eq!(report.results().len(), 4);
}
