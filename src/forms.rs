mod form_mode;
mod image_list;
mod secret_form;
mod secret_form_context;
mod secret_form_fields;
mod secret_form_phase;
mod submission_request;
mod submission_state;

pub use self::{
    form_mode::FormMode,
    image_list::{ALL_IMAGES_HINT, ImageEntry, ImageEntryId, ImageList},
    secret_form::SecretForm,
    secret_form_context::SecretFormContext,
    secret_form_fields::{EVENTS_DISCLAIMER, SecretFormFields},
    secret_form_phase::SecretFormPhase,
    submission_request::{SubmissionRequest, SubmissionTarget},
    submission_state::SubmissionState,
};
