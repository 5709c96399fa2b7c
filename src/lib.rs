//! Formule postfixée : parenthèses -> shunting-yard -> calcul générique.

pub mod noyau;

pub use noyau::{evaluer_expression, ErreurFormule, Evaluation, Formule, Nombre};
