//! Modal create/edit forms
//!
//! A modal is either closed or open on a form, blank for creation or
//! pre-filled from the record being edited. Submitting validates the form;
//! an invalid form stays open, a saved form closes and resets.

use pabx_core::models::Notification;
use pabx_core::traits::{MutationFacade, NotificationEmitter, Record};
use pabx_core::{AppError, AppResult};
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// A form editing one kind of record
pub trait EntityForm: Clone + Debug + Send + 'static {
    type Entity: Record + Debug + Serialize;

    /// Human name of the record kind, used in notifications
    const LABEL: &'static str;

    /// Form state for a new record
    fn blank() -> Self;

    /// Form state pre-filled from an existing record
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Presence checks. `editing` is the record being edited, if any.
    fn check(&self, editing: Option<&Self::Entity>) -> AppResult<()>;

    /// Build the record to save. New records get id 0.
    fn build(&self, editing: Option<&Self::Entity>) -> Self::Entity;
}

/// Whether a submission creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

/// A validated form, ready for the mutation facade
#[derive(Debug, Clone)]
pub struct Submission<E> {
    pub kind: SaveKind,
    pub record: E,
}

#[derive(Debug, Clone)]
enum ModalState<F: EntityForm> {
    Closed,
    Open {
        form: F,
        editing: Option<F::Entity>,
    },
}

#[derive(Debug, Clone)]
pub struct FormModal<F: EntityForm> {
    state: ModalState<F>,
    /// Bumped on every open; a save only closes the modal it was taken from
    generation: u64,
}

impl<F: EntityForm> Default for FormModal<F> {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            generation: 0,
        }
    }
}

impl<F: EntityForm> FormModal<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a blank form for a new record
    pub fn open_blank(&mut self) -> F {
        let form = F::blank();
        self.load(form.clone(), None);
        form
    }

    /// Open a form pre-filled from `entity`
    pub fn open_for(&mut self, entity: &F::Entity) -> F {
        let form = F::from_entity(entity);
        self.load(form.clone(), Some(entity.clone()));
        form
    }

    /// Open directly on the given input, creating when `editing` is `None`
    pub fn load(&mut self, form: F, editing: Option<F::Entity>) {
        self.generation += 1;
        self.state = ModalState::Open { form, editing };
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn form(&self) -> Option<&F> {
        match &self.state {
            ModalState::Open { form, .. } => Some(form),
            ModalState::Closed => None,
        }
    }

    /// Id of the record being edited; `None` when creating or closed
    pub fn editing_id(&self) -> Option<u32> {
        match &self.state {
            ModalState::Open {
                editing: Some(entity),
                ..
            } => Some(entity.id()),
            _ => None,
        }
    }

    /// Replace the form contents, as typed by the user
    pub fn fill(&mut self, values: F) -> AppResult<()> {
        match &mut self.state {
            ModalState::Open { form, .. } => {
                *form = values;
                Ok(())
            }
            ModalState::Closed => Err(AppError::InvalidInput(format!(
                "{} form is not open",
                F::LABEL
            ))),
        }
    }

    /// Close and discard any unsaved input
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Close only if nothing reopened the modal since `generation`
    pub fn close_if(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.close();
        true
    }

    /// Validate the open form. The modal stays open either way.
    pub fn validate(&self) -> AppResult<Submission<F::Entity>> {
        match &self.state {
            ModalState::Closed => Err(AppError::InvalidInput(format!(
                "{} form is not open",
                F::LABEL
            ))),
            ModalState::Open { form, editing } => {
                form.check(editing.as_ref())?;
                let kind = if editing.is_some() {
                    SaveKind::Update
                } else {
                    SaveKind::Create
                };
                Ok(Submission {
                    kind,
                    record: form.build(editing.as_ref()),
                })
            }
        }
    }
}

/// A modal wired to its mutation facade and the notification emitter
pub struct ModalController<F: EntityForm> {
    modal: Mutex<FormModal<F>>,
    facade: Arc<dyn MutationFacade<F::Entity>>,
    notifier: Arc<dyn NotificationEmitter>,
}

impl<F: EntityForm> ModalController<F> {
    pub fn new(
        facade: Arc<dyn MutationFacade<F::Entity>>,
        notifier: Arc<dyn NotificationEmitter>,
    ) -> Self {
        Self {
            modal: Mutex::new(FormModal::new()),
            facade,
            notifier,
        }
    }

    pub fn open_blank(&self) -> F {
        self.modal.lock().open_blank()
    }

    pub fn open_for(&self, entity: &F::Entity) -> F {
        self.modal.lock().open_for(entity)
    }

    pub fn fill(&self, values: F) -> AppResult<()> {
        self.modal.lock().fill(values)
    }

    pub fn close(&self) {
        self.modal.lock().close();
    }

    pub fn is_open(&self) -> bool {
        self.modal.lock().is_open()
    }

    pub fn form(&self) -> Option<F> {
        self.modal.lock().form().cloned()
    }

    /// Validate and save the open form.
    ///
    /// Invalid input leaves the modal open and emits an error notification.
    /// A successful save closes the modal and emits a success notification.
    #[instrument(skip(self), fields(entity = F::LABEL, facade = self.facade.name()))]
    pub async fn submit(&self) -> AppResult<F::Entity> {
        let (submission, generation) = {
            let modal = self.modal.lock();
            (modal.validate(), modal.generation())
        };
        self.finish(submission, generation).await
    }

    /// Open on `form`, validate and save in one step.
    ///
    /// Opening, filling and validating happen under one lock, so a
    /// concurrent open cannot turn an edit into a create.
    #[instrument(
        skip(self, editing, form),
        fields(entity = F::LABEL, editing = ?editing.as_ref().map(Record::id))
    )]
    pub async fn save(&self, editing: Option<F::Entity>, form: F) -> AppResult<F::Entity> {
        let (submission, generation) = {
            let mut modal = self.modal.lock();
            modal.load(form, editing);
            (modal.validate(), modal.generation())
        };
        self.finish(submission, generation).await
    }

    async fn finish(
        &self,
        submission: AppResult<Submission<F::Entity>>,
        generation: u64,
    ) -> AppResult<F::Entity> {
        let submission = match submission {
            Ok(submission) => submission,
            Err(err) => {
                debug!(error = %err, "Form rejected");
                self.notifier
                    .emit(Notification::error("Validation error", err.to_string()));
                return Err(err);
            }
        };

        let result = match submission.kind {
            SaveKind::Create => self.facade.create(submission.record).await,
            SaveKind::Update => self.facade.update(submission.record).await,
        };

        match result {
            Ok(saved) => {
                if !self.modal.lock().close_if(generation) {
                    debug!("Modal reopened during save, left open");
                }
                let verb = match submission.kind {
                    SaveKind::Create => "created",
                    SaveKind::Update => "updated",
                };
                info!(id = saved.id(), verb, "Form saved");
                self.notifier.emit(Notification::success(
                    format!("{} {}", F::LABEL, verb),
                    format!("{} {} successfully", F::LABEL, verb),
                ));
                Ok(saved)
            }
            Err(err) => {
                self.notifier
                    .emit(Notification::error(format!("{} not saved", F::LABEL), err.to_string()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::AgentForm;
    use crate::mutation::LoggingFacade;
    use crate::notifications::NotificationCenter;
    use crate::seed;
    use pabx_core::models::Agent;

    fn controller() -> (ModalController<AgentForm>, Arc<NotificationCenter>) {
        let center = Arc::new(NotificationCenter::default());
        let controller =
            ModalController::new(Arc::new(LoggingFacade::<Agent>::new("agent")), center.clone());
        (controller, center)
    }

    #[tokio::test]
    async fn test_invalid_agent_keeps_modal_open() {
        let (modal, center) = controller();
        modal.open_blank();

        let err = modal.submit().await.unwrap_err();
        assert!(matches!(err, AppError::MissingFields(_)));
        assert!(modal.is_open());
        assert!(center.last().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_valid_agent_closes_modal() {
        let (modal, center) = controller();
        let mut form = modal.open_blank();
        form.name = "Nora".to_string();
        form.password = "pw".to_string();
        form.caller_id = "+1 555 0142".to_string();
        modal.fill(form).unwrap();

        let saved = modal.submit().await.unwrap();
        assert_eq!(saved.name, "Nora");
        assert!(!modal.is_open());
        assert_eq!(center.last().unwrap().title, "Agent created");
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates() {
        let (modal, center) = controller();
        let existing = seed::agents().remove(0);
        let form = modal.open_for(&existing);
        assert_eq!(form.name, existing.name);

        let saved = modal.submit().await.unwrap();
        assert_eq!(saved, existing);
        assert_eq!(center.last().unwrap().title, "Agent updated");
    }

    #[tokio::test]
    async fn test_save_is_not_affected_by_reopened_modal() {
        let (modal, center) = controller();
        let existing = seed::agents().remove(2);
        let mut form = modal.open_for(&existing);
        form.name = "Ana M.".to_string();

        // another request opens the blank form in between
        modal.open_blank();

        let saved = modal.save(Some(existing.clone()), form).await.unwrap();
        assert_eq!(saved.id, existing.id);
        assert_eq!(saved.name, "Ana M.");
        assert_eq!(center.last().unwrap().title, "Agent updated");
    }

    #[test]
    fn test_submit_leaves_modal_reopened_meanwhile() {
        let mut modal: FormModal<AgentForm> = FormModal::new();
        modal.open_blank();
        let generation = modal.generation();
        modal.open_for(&seed::agents().remove(0));

        assert!(!modal.close_if(generation));
        assert_eq!(modal.editing_id(), Some(1));
        assert!(modal.close_if(modal.generation()));
        assert!(!modal.is_open());
    }

    #[tokio::test]
    async fn test_save_invalid_create_stays_open() {
        let (modal, center) = controller();
        let err = modal.save(None, AgentForm::blank()).await.unwrap_err();
        assert!(matches!(err, AppError::MissingFields(_)));
        assert!(modal.is_open());
        assert_eq!(center.last().unwrap().title, "Validation error");
    }

    #[test]
    fn test_close_discards_input() {
        let mut modal: FormModal<AgentForm> = FormModal::new();
        let mut form = modal.open_blank();
        form.name = "Draft".to_string();
        modal.fill(form).unwrap();
        modal.close();

        assert!(modal.form().is_none());
        assert!(modal.fill(AgentForm::blank()).is_err());
        assert!(modal.open_blank().name.is_empty());
    }

    #[test]
    fn test_submit_while_closed() {
        let modal: FormModal<AgentForm> = FormModal::new();
        assert!(matches!(modal.validate(), Err(AppError::InvalidInput(_))));
    }
}
