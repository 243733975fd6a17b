//! Mock collaborators for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use bundle_impact::error::{Error, Result};
use bundle_impact::platform::PlatformService;
use bundle_impact::report::ReportProducer;
use bundle_impact::types::{ChangedFile, PlatformConfig, PullRequestDetails};
use bundle_impact::update::Notifier;
use std::sync::Mutex;

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// matching how the rest of the suite builds test doubles.
///
/// Features:
/// - In-memory description with read/write tracking
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    description: Mutex<Option<String>>,
    changed_files: Mutex<Vec<ChangedFile>>,
    // Call tracking
    get_details_calls: Mutex<Vec<u64>>,
    set_description_calls: Mutex<Vec<(u64, String)>>,
    list_files_calls: Mutex<Vec<u64>>,
    // Error injection
    error_on_get_details: Mutex<Option<String>>,
    error_on_set_description: Mutex<Option<String>>,
    error_on_list_files: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            description: Mutex::new(None),
            changed_files: Mutex::new(Vec::new()),
            get_details_calls: Mutex::new(Vec::new()),
            set_description_calls: Mutex::new(Vec::new()),
            list_files_calls: Mutex::new(Vec::new()),
            error_on_get_details: Mutex::new(None),
            error_on_set_description: Mutex::new(None),
            error_on_list_files: Mutex::new(None),
        }
    }

    // === Setup methods ===

    /// Set the stored PR description (None models an empty body field)
    pub fn set_description(&self, description: Option<&str>) {
        *self.description.lock().unwrap() = description.map(ToString::to_string);
    }

    /// Set the changed files returned by `list_changed_files`
    pub fn set_changed_files(&self, files: Vec<ChangedFile>) {
        *self.changed_files.lock().unwrap() = files;
    }

    // === Error injection methods ===

    /// Make `get_pr_details` return an error
    pub fn fail_get_details(&self, msg: &str) {
        *self.error_on_get_details.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `set_pr_description` return an error
    pub fn fail_set_description(&self, msg: &str) {
        *self.error_on_set_description.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_changed_files` return an error
    pub fn fail_list_files(&self, msg: &str) {
        *self.error_on_list_files.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Current stored description
    pub fn current_description(&self) -> Option<String> {
        self.description.lock().unwrap().clone()
    }

    /// All PR numbers `get_pr_details` was called with
    pub fn get_details_calls(&self) -> Vec<u64> {
        self.get_details_calls.lock().unwrap().clone()
    }

    /// All `set_pr_description` calls as (pr_number, description)
    pub fn set_description_calls(&self) -> Vec<(u64, String)> {
        self.set_description_calls.lock().unwrap().clone()
    }

    /// All PR numbers `list_changed_files` was called with
    pub fn list_files_calls(&self) -> Vec<u64> {
        self.list_files_calls.lock().unwrap().clone()
    }

    /// Assert that the description was written exactly once with `expected`
    pub fn assert_single_write(&self, pr_number: u64, expected: &str) {
        let calls = self.set_description_calls();
        assert_eq!(
            calls.len(),
            1,
            "expected exactly one set_pr_description call, got: {calls:?}"
        );
        assert_eq!(calls[0].0, pr_number);
        assert_eq!(calls[0].1, expected);
    }

    /// Assert that the description was never written
    pub fn assert_no_writes(&self) {
        let calls = self.set_description_calls();
        assert!(
            calls.is_empty(),
            "expected no set_pr_description calls, got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pr_details(&self, pr_number: u64) -> Result<PullRequestDetails> {
        self.get_details_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_get_details.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(PullRequestDetails {
            number: pr_number,
            title: "Test PR".to_string(),
            body: self.description.lock().unwrap().clone(),
            head_ref: "feature".to_string(),
            base_ref: "main".to_string(),
            html_url: format!(
                "https://github.com/{}/{}/pull/{pr_number}",
                self.config.owner, self.config.repo
            ),
        })
    }

    async fn set_pr_description(&self, pr_number: u64, description: &str) -> Result<()> {
        self.set_description_calls
            .lock()
            .unwrap()
            .push((pr_number, description.to_string()));

        if let Some(msg) = self.error_on_set_description.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        *self.description.lock().unwrap() = Some(description.to_string());
        Ok(())
    }

    async fn list_changed_files(&self, pr_number: u64) -> Result<Vec<ChangedFile>> {
        self.list_files_calls.lock().unwrap().push(pr_number);

        if let Some(msg) = self.error_on_list_files.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self.changed_files.lock().unwrap().clone())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

/// Report producer that returns a fixed body, with error injection.
pub struct FixedReportProducer {
    body: Mutex<String>,
    error: Mutex<Option<String>>,
    produce_calls: Mutex<Vec<Vec<ChangedFile>>>,
}

impl FixedReportProducer {
    /// Create a producer that always returns `body`
    pub fn new(body: &str) -> Self {
        Self {
            body: Mutex::new(body.to_string()),
            error: Mutex::new(None),
            produce_calls: Mutex::new(Vec::new()),
        }
    }

    /// Change the body returned by subsequent calls
    pub fn set_body(&self, body: &str) {
        *self.body.lock().unwrap() = body.to_string();
    }

    /// Make `produce` return an error
    pub fn fail(&self, msg: &str) {
        *self.error.lock().unwrap() = Some(msg.to_string());
    }

    /// Changed-file slices `produce` was called with
    pub fn produce_calls(&self) -> Vec<Vec<ChangedFile>> {
        self.produce_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportProducer for FixedReportProducer {
    async fn produce(&self, changed_files: &[ChangedFile]) -> Result<String> {
        self.produce_calls
            .lock()
            .unwrap()
            .push(changed_files.to_vec());

        if let Some(msg) = self.error.lock().unwrap().as_ref() {
            return Err(Error::Report(msg.clone()));
        }

        Ok(self.body.lock().unwrap().clone())
    }
}

/// Notifier that records every message for verification.
#[derive(Default)]
pub struct RecordingNotifier {
    info_messages: Mutex<Vec<String>>,
    failed_messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All progress messages, in order
    pub fn info_messages(&self) -> Vec<String> {
        self.info_messages.lock().unwrap().clone()
    }

    /// All failure messages (should be empty or a single entry)
    pub fn failed_messages(&self) -> Vec<String> {
        self.failed_messages.lock().unwrap().clone()
    }

    /// Assert that no failure was reported
    pub fn assert_not_failed(&self) {
        let failed = self.failed_messages();
        assert!(failed.is_empty(), "expected no failure, got: {failed:?}");
    }

    /// Assert that exactly one failure containing `fragment` was reported
    pub fn assert_failed_once_with(&self, fragment: &str) {
        let failed = self.failed_messages();
        assert_eq!(failed.len(), 1, "expected one failure, got: {failed:?}");
        assert!(
            failed[0].contains(fragment),
            "failure message '{}' does not contain '{fragment}'",
            failed[0]
        );
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn info(&self, message: &str) {
        self.info_messages.lock().unwrap().push(message.to_string());
    }

    async fn set_failed(&self, message: &str) {
        self.failed_messages
            .lock()
            .unwrap()
            .push(message.to_string());
    }
}
