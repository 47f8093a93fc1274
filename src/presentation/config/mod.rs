mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    ConverterEngine, ConverterSettings, DEFAULT_PORT, LimitSettings, LoggingSettings, PORT_VAR,
    ServerSettings, Settings, StagingSettings,
};
