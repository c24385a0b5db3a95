//! `config view|set|path`

use super::Session;
use crate::config::{KEY_LANGUAGE, store};
use crate::error::Result;
use crate::i18n::Language;
use crate::ui::{
    self,
    table::{Cell, CellStyle, Table},
};

pub fn view(session: &Session<'_>) -> Result<()> {
    let t = &session.translator;
    let values = session.config.all();

    if values.is_empty() {
        ui::info(&t.t("config_empty"));
        return Ok(());
    }

    let mut table = Table::new(
        t.t("config_title"),
        &[t.t("config_column_key"), t.t("config_column_value")],
    );
    for (key, value) in values {
        table.add_row(vec![
            Cell::new(key.as_str(), CellStyle::Cyan),
            Cell::plain(store::display_value(value)),
        ]);
    }
    table.print();
    Ok(())
}

pub fn set(session: &mut Session<'_>, key: &str, value: &str) -> Result<()> {
    session.config.set(key, value)?;

    // keep the rest of this run in the new language
    if key == KEY_LANGUAGE
        && let Some(language) = Language::from_code(value)
    {
        session.translator.reload(language);
    }

    let stored = session
        .config
        .get(key)
        .map(store::display_value)
        .unwrap_or_default();
    ui::success(&session.translator.format(
        "config_saved",
        &[("key", key), ("value", &stored)],
    ));
    Ok(())
}

pub fn path(session: &Session<'_>) -> Result<()> {
    ui::info(&session.translator.format(
        "config_path",
        &[("path", &session.config.path().display().to_string())],
    ));
    Ok(())
}
