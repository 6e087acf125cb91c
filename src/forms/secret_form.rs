use crate::{
    error::Error as VelaError,
    forms::{
        FormMode, SecretFormContext, SecretFormFields, SecretFormPhase, SubmissionRequest,
        SubmissionState, SubmissionTarget,
    },
    logging::SecretLogContext,
    notifications::{Notifier, failure_message},
    secrets::{
        Secret, SecretRecord, SecretShape, SecretType, SecretWriteParams, SecretsService,
    },
};
use anyhow::{Context, bail};
use tracing::{debug, error, info};

/// Controller of the secret create/edit/view form.
///
/// The form is created in the `Initializing` phase and exposes fields only after
/// [`SecretForm::initialize`] resolves. Submission is split into [`SecretForm::begin_submission`]
/// and [`SecretForm::complete_submission`] so that the pending state can be observed while the
/// request is dispatched, [`SecretForm::submit`] runs both steps.
pub struct SecretForm<'s, S: SecretsService + ?Sized> {
    service: &'s S,
    context: SecretFormContext,
    phase: SecretFormPhase,
    submission: SubmissionState,
    notifier: Notifier,
}

impl<'s, S: SecretsService + ?Sized> SecretForm<'s, S> {
    /// Creates a form in the `Initializing` phase.
    pub fn new(service: &'s S, context: SecretFormContext) -> Self {
        Self {
            service,
            context,
            phase: SecretFormPhase::Initializing,
            submission: SubmissionState::Idle,
            notifier: Notifier::default(),
        }
    }

    /// Creates a form and loads its initial values.
    pub async fn open(service: &'s S, context: SecretFormContext) -> Self {
        let mut form = Self::new(service, context);
        form.initialize().await;
        form
    }

    /// Loads initial values of the form: an empty record in `add` mode, or the existing secret
    /// otherwise. Does nothing if the form is already initialized, can be called again after a
    /// failure.
    pub async fn initialize(&mut self) -> &SecretFormPhase {
        if self.phase.is_ready() {
            return &self.phase;
        }

        self.phase = SecretFormPhase::Initializing;
        self.phase = match self.load_record().await {
            Ok(record) => {
                debug!(form = ?self.log_context(), "Secret form is initialized.");
                let fields = SecretFormFields::from(&record);
                SecretFormPhase::Ready {
                    record: Box::new(record),
                    fields: Box::new(fields),
                }
            }
            Err(err) => {
                error!(form = ?self.log_context(), "Failed to initialize secret form: {err:?}");
                SecretFormPhase::Failed(format!("{err:#}"))
            }
        };

        &self.phase
    }

    async fn load_record(&self) -> anyhow::Result<SecretRecord> {
        let raw = if self.context.mode.loads_existing() {
            let name = self
                .context
                .secret_name
                .as_deref()
                .with_context(|| format!("Secret name is required in {} mode.", self.context.mode))?;
            let secret = self
                .service
                .get_secret(&self.context.secret_path(), name)
                .await
                .with_context(|| format!("Cannot load secret ({name})."))?;
            Some(SecretShape::from(secret))
        } else {
            None
        };

        SecretRecord::normalize(raw, &self.context)
    }

    pub fn context(&self) -> &SecretFormContext {
        &self.context
    }

    pub fn phase(&self) -> &SecretFormPhase {
        &self.phase
    }

    /// Record the form was initialized with.
    pub fn record(&self) -> Option<&SecretRecord> {
        match self.phase {
            SecretFormPhase::Ready { ref record, .. } => Some(record.as_ref()),
            _ => None,
        }
    }

    /// Current field values, available once the form is initialized.
    pub fn fields(&self) -> Option<&SecretFormFields> {
        match self.phase {
            SecretFormPhase::Ready { ref fields, .. } => Some(fields.as_ref()),
            _ => None,
        }
    }

    /// Editable field values, available once the form is initialized and unless it's read-only.
    pub fn fields_mut(&mut self) -> Option<&mut SecretFormFields> {
        if self.context.mode == FormMode::View {
            return None;
        }

        match self.phase {
            SecretFormPhase::Ready { ref mut fields, .. } => Some(fields.as_mut()),
            _ => None,
        }
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Indicates whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        self.context.mode != FormMode::View
            && self.phase.is_ready()
            && !self.submission.is_pending()
    }

    /// Location to navigate to once the secret is saved.
    pub fn back_location(&self) -> Option<String> {
        matches!(self.submission, SubmissionState::Success(_))
            .then(|| self.context.secrets_list_location())
    }

    /// Builds the payload from the current field values.
    pub fn build_payload(&self) -> anyhow::Result<SecretWriteParams> {
        let fields = self
            .fields()
            .context("Secret form is not initialized yet.")?;

        // Blank value in `edit` mode means "keep the stored value".
        let value = if self.context.mode == FormMode::Add || !fields.value.is_empty() {
            Some(fields.value.clone())
        } else {
            None
        };

        Ok(SecretWriteParams {
            org: self.context.org.clone(),
            repo: self.context.repo.clone(),
            team: None,
            name: fields.name.clone(),
            value,
            secret_type: SecretType::Repo,
            images: fields.images.values(),
            events: fields.events.iter().copied().collect(),
            allow_command: fields.allow_command,
        })
    }

    /// Validates the fields and captures the submission request, moving the form to the pending
    /// state. Fails without changing the state if the form can't be submitted at all, and
    /// completes the submission with an error if the fields are invalid.
    pub fn begin_submission(&mut self) -> anyhow::Result<Option<SubmissionRequest>> {
        let target = match (self.context.mode, &self.context.secret_name) {
            (FormMode::View, _) => bail!("Secret form in view mode is read-only."),
            (FormMode::Add, _) => SubmissionTarget::Create,
            (FormMode::Edit, Some(name)) => SubmissionTarget::Update {
                original_name: name.clone(),
            },
            (FormMode::Edit, None) => bail!("Secret name is required in edit mode."),
        };

        if self.submission.is_pending() {
            bail!("Secret form submission is already in progress.");
        }

        let fields = match self.phase {
            SecretFormPhase::Ready { ref fields, .. } => fields,
            SecretFormPhase::Initializing => bail!("Secret form is not initialized yet."),
            SecretFormPhase::Failed(ref message) => {
                bail!("Secret form failed to initialize: {message}")
            }
        };

        if let Err(err) = fields.validate() {
            debug!(form = ?self.log_context(), "Secret form is invalid: {err}");
            self.complete_submission(Err(VelaError::validation(err.to_string()).into()));
            return Ok(None);
        }

        let request = SubmissionRequest {
            path: self.context.secret_path(),
            target,
            payload: self.build_payload()?,
        };

        self.submission = SubmissionState::Pending;
        Ok(Some(request))
    }

    /// Records the result of the dispatched submission and publishes the matching notice.
    pub fn complete_submission(&mut self, result: anyhow::Result<Secret>) {
        self.submission = match result {
            Ok(secret) => {
                info!(form = ?self.log_context(), "Secret is saved.");
                SubmissionState::Success(Box::new(secret))
            }
            Err(err) => {
                error!(form = ?self.log_context(), "Failed to save secret: {err:?}");
                SubmissionState::Error(failure_message(&err))
            }
        };
        self.notifier.notify(&self.submission);
    }

    /// Validates, dispatches and completes the submission. Errors are reserved for the cases when
    /// the form can't be submitted at all, failures of the submission itself are reported through
    /// the submission state and the notifier.
    pub async fn submit(&mut self) -> anyhow::Result<&SubmissionState> {
        if let Some(request) = self.begin_submission()? {
            let result = request.dispatch(self.service).await;
            self.complete_submission(result);
        }

        Ok(&self.submission)
    }

    /// Drops the pending state left by a submission that was abandoned before completion.
    pub fn reset_submission(&mut self) {
        if self.submission.is_pending() {
            self.submission = SubmissionState::Idle;
        }
    }

    fn log_context(&self) -> SecretLogContext {
        self.context.log_context()
    }
}
