//! `lang set|get`

use super::Session;
use crate::config::KEY_LANGUAGE;
use crate::error::Result;
use crate::i18n::Language;
use crate::ui;

pub fn set(session: &mut Session<'_>, language: Language) -> Result<()> {
    session.config.set(KEY_LANGUAGE, language.code())?;
    session.translator.reload(language);
    tracing::info!("Language set to {}", language.code());

    ui::success(&session.translator.t("lang_changed"));
    Ok(())
}

pub fn get(session: &Session<'_>) -> Result<()> {
    ui::info(&session.translator.t("lang_current"));
    Ok(())
}
