use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;

pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv to get it to overwrite the api token from env.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    load_settings_from_path(&config_path)
}

pub fn load_settings_from_path(config_path: &Path) -> Result<AppSettings> {
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    let settings: AppSettings = raw_settings.into();

    Ok(settings)
}
