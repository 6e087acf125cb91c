mod secret;
mod secret_audit;
mod secret_display;
mod secret_event;
mod secret_path;
mod secret_record;
mod secret_shape;
mod secret_type;
mod secret_write_params;
mod secrets_service;

pub use self::{
    secret::Secret,
    secret_audit::SecretAudit,
    secret_display::SecretDisplay,
    secret_event::SecretEvent,
    secret_path::{NATIVE_SECRETS_ENGINE, SecretPath},
    secret_record::SecretRecord,
    secret_shape::SecretShape,
    secret_type::SecretType,
    secret_write_params::SecretWriteParams,
    secrets_service::SecretsService,
};
