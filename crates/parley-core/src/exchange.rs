//! One question/answer exchange with a presenter
//!
//! Flow: validate -> resolve presenter -> fire sound cue -> write request file
//! -> present and wait -> normalize -> remove request file.
//!
//! Every failure along the way is reported as an [`AskResult`] with
//! `status = "error"`; callers never see an `Err`.

use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::ParleyConfig;
use crate::error::{ParleyResult, UnifiedError};
use crate::normalize::{AskResult, normalize};
use crate::notify::Notifier;
use crate::platform::{ExecutableResolver, PlatformId, resolver_for_config};
use crate::presenter::{Presenter, ProcessPresenter, RawOutcome};
use crate::question::QuestionBatch;
use crate::transport::RequestFile;

/// Runs question exchanges. Cheap to share; concurrent calls are independent.
#[derive(Clone)]
pub struct AskExchange {
    config: ParleyConfig,
    platform: PlatformId,
    notifier: Notifier,
    resolver: Option<Arc<dyn ExecutableResolver>>,
    presenter: Option<Arc<dyn Presenter>>,
}

impl AskExchange {
    /// Exchange for the current platform
    pub fn new(config: ParleyConfig) -> Self {
        let platform = PlatformId::current();
        let notifier = Notifier::for_platform(&platform, &config.notification);
        Self {
            config,
            platform,
            notifier,
            resolver: None,
            presenter: None,
        }
    }

    /// Use a specific presenter instead of resolving an executable
    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Use a specific resolver instead of the one derived from config
    pub fn with_resolver(mut self, resolver: Arc<dyn ExecutableResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Pretend to run on another platform
    pub fn with_platform(mut self, platform: PlatformId) -> Self {
        self.notifier = Notifier::for_platform(&platform, &self.config.notification);
        self.platform = platform;
        self
    }

    /// Replace the sound cue
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &ParleyConfig {
        &self.config
    }

    pub fn platform(&self) -> &PlatformId {
        &self.platform
    }

    /// Ask a validated batch
    #[instrument(skip_all, fields(questions = batch.len(), platform = %self.platform))]
    pub async fn ask(&self, batch: &QuestionBatch) -> AskResult {
        match self.run(batch).await {
            Ok(result) => result,
            Err(err) => {
                warn!(code = err.error_code(), "exchange failed: {}", err);
                AskResult::error(err.to_string())
            }
        }
    }

    /// Validate raw JSON (`{ "questions": [...] }` or a bare array), then ask
    pub async fn ask_value(&self, value: serde_json::Value) -> AskResult {
        match QuestionBatch::from_value(value) {
            Ok(batch) => self.ask(&batch).await,
            Err(err) => AskResult::error(err.to_string()),
        }
    }

    /// The presenter this exchange would use. Fails without side effects if
    /// no executable can be found.
    pub fn presenter(&self) -> ParleyResult<Arc<dyn Presenter>> {
        if let Some(presenter) = &self.presenter {
            return Ok(presenter.clone());
        }
        let executable = match &self.resolver {
            Some(resolver) => resolver.resolve(&self.platform)?,
            None => resolver_for_config(&self.config)?.resolve(&self.platform)?,
        };
        Ok(Arc::new(ProcessPresenter::new(executable)))
    }

    async fn run(&self, batch: &QuestionBatch) -> ParleyResult<AskResult> {
        let presenter = self.presenter()?;
        let prefix = self.config.effective_file_prefix()?;

        self.notifier.notify();

        let request =
            RequestFile::write(batch, &self.config.effective_temp_dir(), prefix).await?;

        let result = presenter
            .present(request.path())
            .await
            .and_then(RawOutcome::into_stdout)
            .map(|stdout| normalize(&stdout));

        debug!("removing request file {}", request.path().display());
        request.remove();

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AskError;
    use crate::normalize::AskStatus;
    use crate::presenter::{AnswerValue, MockPresenter};
    use crate::question::{Question, QuestionOption};
    use crate::transport::RequestPayload;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn config(temp_dir: &Path) -> ParleyConfig {
        let mut config = ParleyConfig {
            temp_dir: Some(temp_dir.to_path_buf()),
            ..Default::default()
        };
        config.notification.enabled = false;
        config
    }

    fn batch() -> QuestionBatch {
        QuestionBatch::new(vec![Question::new(
            "Which DB?",
            "DB",
            vec![
                QuestionOption::new("Postgres", "Relational"),
                QuestionOption::new("SQLite", "Embedded"),
            ],
        )])
        .unwrap()
    }

    fn leftover_files(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn test_selected_flow() {
        let temp_dir = TempDir::new().unwrap();
        let seen: Arc<Mutex<Option<RequestPayload>>> = Arc::new(Mutex::new(None));
        let seen_in_mock = seen.clone();

        let mut presenter = MockPresenter::new();
        presenter.expect_present().times(1).returning(move |path| {
            let payload: RequestPayload =
                serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
            *seen_in_mock.lock().unwrap() = Some(payload);
            Ok(RawOutcome::success(
                r#"{"status":"selected","answers":[{"question":"Which DB?","header":"DB","selected":"Postgres","selected_index":0}]}"#,
            ))
        });

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result.status, AskStatus::Selected);
        assert_eq!(result.get("DB"), Some(&AnswerValue::Single("Postgres".into())));
        assert_eq!(seen.lock().unwrap().take().unwrap().questions, batch());
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_empty_stdout_non_zero_exit_is_cancelled() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = MockPresenter::new();
        presenter.expect_present().times(1).returning(|_| {
            Ok(RawOutcome {
                stdout: String::new(),
                stderr: String::new(),
                exit_code: 1,
            })
        });

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result, AskResult::cancelled());
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_presenter_failure_is_error_result() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = MockPresenter::new();
        presenter.expect_present().times(1).returning(|_| {
            Ok(RawOutcome {
                stdout: String::new(),
                stderr: "Error: display unavailable".into(),
                exit_code: 1,
            })
        });

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result.status, AskStatus::Error);
        assert!(result.error.unwrap().contains("display unavailable"));
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_spawn_error_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = MockPresenter::new();
        presenter
            .expect_present()
            .times(1)
            .returning(|_| Err(AskError::spawn("permission denied", "/bin/ask")));

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result.status, AskStatus::Error);
        assert!(result.error.unwrap().contains("permission denied"));
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_malformed_stdout_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = MockPresenter::new();
        presenter
            .expect_present()
            .times(1)
            .returning(|_| Ok(RawOutcome::success(r#"{"status":"#)));

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result.status, AskStatus::Error);
        assert!(!result.error.unwrap().is_empty());
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_invalid_spec_never_presents() {
        let temp_dir = TempDir::new().unwrap();
        let mut presenter = MockPresenter::new();
        presenter.expect_present().never();

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let result = exchange
            .ask_value(serde_json::json!({ "questions": [] }))
            .await;

        assert_eq!(result.status, AskStatus::Error);
        assert!(result.error.unwrap().contains("At least one question"));
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_prefix_outside_temp_dir_rejected() {
        let root = TempDir::new().unwrap();
        let requests = root.path().join("requests");
        std::fs::create_dir(&requests).unwrap();
        let mut presenter = MockPresenter::new();
        presenter.expect_present().never();

        let mut config = config(&requests);
        config.file_prefix = "../escape-".to_string();
        let exchange = AskExchange::new(config).with_presenter(Arc::new(presenter));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result.status, AskStatus::Error);
        assert!(result.error.unwrap().contains("path separators"));
        assert_eq!(leftover_files(&requests), 0);
        assert_eq!(leftover_files(root.path()), 1);
    }

    #[tokio::test]
    async fn test_unsupported_platform_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config(temp_dir.path());
        config.bin_dir = Some(temp_dir.path().join("bin"));

        let exchange = AskExchange::new(config).with_platform(PlatformId::new("haiku", "x64"));
        let result = exchange.ask(&batch()).await;

        assert_eq!(result.status, AskStatus::Error);
        assert!(result.error.unwrap().contains("haiku-x64"));
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_missing_binary_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config(temp_dir.path());
        config.presenter_path = Some(temp_dir.path().join("no-such-presenter"));

        let exchange = AskExchange::new(config);
        let err = match exchange.presenter() {
            Ok(_) => panic!("expected resolution to fail"),
            Err(err) => err,
        };
        assert!(matches!(err, AskError::BinaryMissing { .. }));

        let result = exchange.ask(&batch()).await;
        assert_eq!(result.status, AskStatus::Error);
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }

    #[tokio::test]
    async fn test_concurrent_exchanges_use_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths: Arc<Mutex<Vec<std::path::PathBuf>>> = Arc::new(Mutex::new(Vec::new()));
        let paths_in_mock = paths.clone();

        let mut presenter = MockPresenter::new();
        presenter.expect_present().times(2).returning(move |path| {
            assert!(path.exists());
            paths_in_mock.lock().unwrap().push(path.to_path_buf());
            Ok(RawOutcome::success(""))
        });

        let exchange =
            AskExchange::new(config(temp_dir.path())).with_presenter(Arc::new(presenter));
        let batch = batch();
        let (a, b) = tokio::join!(exchange.ask(&batch), exchange.ask(&batch));

        assert!(a.is_cancelled());
        assert!(b.is_cancelled());
        let paths = paths.lock().unwrap();
        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
        assert_eq!(leftover_files(temp_dir.path()), 0);
    }
}
