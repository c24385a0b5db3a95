//! Plan rendering. Read-only; nothing here can fail the run.

use super::types::{ActionVerb, Plan};
use crate::i18n::Translator;
use crate::ui::{
    self,
    table::{Cell, CellStyle, Table},
};

pub fn display(plan: &Plan, translator: &Translator) {
    for warning in &plan.warnings {
        ui::warning(&translator.format(
            warning.message,
            &[("path", &warning.target.display().to_string())],
        ));
    }

    match build_table(plan, translator) {
        Some(table) => {
            println!();
            table.print();
            println!();
        }
        None => ui::success(&translator.t("plan_empty")),
    }
}

/// One row per action; `None` for an empty plan
pub fn build_table(plan: &Plan, translator: &Translator) -> Option<Table> {
    if plan.is_empty() {
        return None;
    }

    let mut table = Table::new(
        translator.t("plan_title"),
        &[
            translator.t("plan_column_action"),
            translator.t("plan_column_target"),
            translator.t("plan_column_description"),
        ],
    );

    for action in &plan.actions {
        table.add_row(vec![
            Cell::new(translator.t(action.verb.message_key()), verb_style(action.verb)),
            Cell::new(action.target.to_string_lossy(), CellStyle::Magenta),
            Cell::plain(translator.t(action.description)),
        ]);
    }

    Some(table)
}

fn verb_style(verb: ActionVerb) -> CellStyle {
    match verb {
        ActionVerb::Create => CellStyle::Green,
        ActionVerb::Overwrite => CellStyle::Yellow,
        ActionVerb::Delete => CellStyle::Red,
    }
}
