mod secret_log_context;

pub use self::secret_log_context::SecretLogContext;
