mod api_ext;

pub use self::api_ext::VelaApi;
