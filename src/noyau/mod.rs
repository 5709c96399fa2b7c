//! Noyau formule postfixée
//!
//! Organisation interne :
//! - erreur.rs      : erreurs fermées (thiserror)
//! - pile.rs        : pile LIFO générique (contrat Lifo + Pile)
//! - jetons.rs      : opérateurs + priorités
//! - nombre.rs      : type numérique générique (entiers, flottants, exacts)
//! - parentheses.rs : rapport des parenthèses
//! - rpn.rs         : shunting-yard (infixe -> postfixe)
//! - eval.rs        : calcul postfixé + pipeline complet
//! - formule.rs     : Formule (expression bornée + forme postfixée)

pub mod erreur;
pub mod eval;
pub mod formule;
pub mod jetons;
pub mod nombre;
pub mod parentheses;
pub mod pile;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurFormule, ErreurPile};
pub use eval::{calculer_postfixe, evaluer_expression, Evaluation};
pub use formule::{Formule, LONGUEUR_MAX};
pub use nombre::Nombre;
pub use parentheses::PaireParentheses;
pub use pile::{Lifo, Pile};
