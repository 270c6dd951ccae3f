//! Rendering of superposition sets

use qubit_superposition::{Element, State, SuperpositionSet};

use crate::config::FormatConfig;
use crate::printer::Printer;

/// Render a set as a delimited literal
///
/// Live sets print their elements. Collapsed sets have no elements of their
/// own; when annotated they print their eigenstates after the verdict.
pub fn render<T: Element>(set: &SuperpositionSet<T>, config: &FormatConfig) -> String {
    let mut p = Printer::new(config);

    let values: Vec<T> = match set.state() {
        State::Live(quantifier) => {
            if config.annotate_state {
                p.label(quantifier.name());
            }
            set.iter().collect()
        }
        State::Collapsed(collapse) => {
            if config.annotate_state {
                p.label(&format!("collapsed({})", collapse.verdict));
                collapse.eigenstates.clone()
            } else {
                set.iter().collect()
            }
        }
    };

    p.open();
    for value in values {
        p.item(&value.to_string());
    }
    p.finish()
}
