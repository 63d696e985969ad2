//! Accessor lookup for a signed-in session.

use crate::app_lib::api::get_json_with_bearer;
use crate::app_lib::config::{AppConfig, ProfileSourceKind};
use shipdesk::session::{Accessor, DemoProfileSource, ProfileSource, Session, SessionError};

const ACCESSOR_PATH: &str = "/v1/accessor";

/// Resolves the accessor from the API using the provider's ID token.
#[derive(Clone, Copy, Default)]
pub struct BackendProfileSource;

impl ProfileSource for BackendProfileSource {
    async fn fetch_accessor(&self, session: &Session) -> Result<Accessor, SessionError> {
        Ok(get_json_with_bearer::<Accessor>(ACCESSOR_PATH, &session.token).await?)
    }
}

/// Profile source selected by [`AppConfig::profile_source`].
#[derive(Clone, Copy)]
pub enum ConfiguredProfileSource {
    Demo(DemoProfileSource),
    Backend(BackendProfileSource),
}

impl From<&AppConfig> for ConfiguredProfileSource {
    fn from(config: &AppConfig) -> Self {
        match config.profile_source {
            ProfileSourceKind::Demo => Self::Demo(DemoProfileSource),
            ProfileSourceKind::Backend => Self::Backend(BackendProfileSource),
        }
    }
}

impl ProfileSource for ConfiguredProfileSource {
    async fn fetch_accessor(&self, session: &Session) -> Result<Accessor, SessionError> {
        match self {
            Self::Demo(source) => source.fetch_accessor(session).await,
            Self::Backend(source) => source.fetch_accessor(session).await,
        }
    }
}
