//! Behavioural integration tests for the upload gate.
//!
//! The submission service is mocked so these tests can verify exactly when
//! the gate calls it and with which bytes.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use async_trait::async_trait;
use csv_gate::session::ProductValidationSession;
use csv_gate::upload::{
    domain::{FileUpload, JobId},
    ports::{JobSubmitter, SubmitterError, SubmitterResult},
    services::{UploadError, UploadGate},
};
use csv_gate::validation::ports::validator::ScanConfig;
use eyre::Result;
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Submitter {}

    #[async_trait]
    impl JobSubmitter for Submitter {
        async fn submit(&self, upload: &FileUpload) -> SubmitterResult<JobId>;
    }
}

const VALID: &str = "id,nome,categoria,preco,estoque,fornecedor\n\
                     1,Cadeira,Móveis,199.90,10,Fornecedor A\n\
                     2,Mouse,Hardware,10.00,5,ACME";

const INVALID: &str = "id,nome,categoria,preco,estoque,fornecedor\n\
                       1,Cadeira,Móveis,199.901,10,Fornecedor A";

async fn settled_session(content: &str) -> ProductValidationSession {
    let mut session = ProductValidationSession::for_products(ScanConfig::default());
    session.validate_content("produtos.csv", content.to_owned());
    session.settled().await;
    session
}

#[tokio::test]
async fn valid_file_is_submitted_byte_for_byte() -> Result<()> {
    let job = JobId::new();
    let mut submitter = MockSubmitter::new();
    submitter
        .expect_submit()
        .withf(|upload| upload.file_name() == "produtos.csv" && upload.bytes() == VALID.as_bytes())
        .times(1)
        .returning(move |_| Ok(job));
    let gate = UploadGate::new(Arc::new(submitter));
    let session = settled_session(VALID).await;

    let receipt = gate.forward(&session).await?;

    assert_eq!(receipt.job_id(), job);
    assert_eq!(receipt.bytes(), VALID.len());
    Ok(())
}

#[tokio::test]
async fn invalid_file_never_reaches_the_service() {
    let mut submitter = MockSubmitter::new();
    submitter.expect_submit().never();
    let gate = UploadGate::new(Arc::new(submitter));
    let session = settled_session(INVALID).await;

    let err = gate
        .forward(&session)
        .await
        .expect_err("invalid file must be refused");

    assert!(matches!(err, UploadError::ValidationFailed { invalid_lines: 1 }));
}

#[tokio::test]
async fn running_session_is_not_forwarded() {
    let mut submitter = MockSubmitter::new();
    submitter.expect_submit().never();
    let gate = UploadGate::new(Arc::new(submitter));
    let mut session = ProductValidationSession::for_products(ScanConfig::default());
    session.validate_content("produtos.csv", VALID.to_owned());

    let err = gate
        .forward(&session)
        .await
        .expect_err("unfinished session must be refused");

    assert!(matches!(err, UploadError::NotValidated));
}

#[tokio::test]
async fn service_failures_are_propagated() {
    let mut submitter = MockSubmitter::new();
    submitter
        .expect_submit()
        .times(1)
        .returning(|_| Err(SubmitterError::Rejected("quota exceeded".to_owned())));
    let gate = UploadGate::new(Arc::new(submitter));
    let session = settled_session(VALID).await;

    let err = gate
        .forward(&session)
        .await
        .expect_err("rejection must propagate");

    assert!(matches!(
        err,
        UploadError::Submission(SubmitterError::Rejected(ref reason)) if reason == "quota exceeded"
    ));
    assert_eq!(err.to_string(), "submission rejected: quota exceeded");
}
