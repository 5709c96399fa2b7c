// src/noyau/formule.rs
//
// Formule = expression infixe (bornée) + forme postfixée (état de travail).
//
// Contrats:
// - l'expression est fixée à la construction (tronquée à LONGUEUR_MAX caractères)
// - convertir() recalcule la forme postfixée à chaque appel
// - calculer() ne modifie rien : même état => même valeur
// - calculer() avant convertir() travaille sur une forme postfixée vide => PileVide

use log::warn;

use super::erreur::ErreurFormule;
use super::eval::calculer_postfixe;
use super::nombre::Nombre;
use super::parentheses::{self, PaireParentheses};
use super::rpn::vers_postfixe;

/// Longueur maximale d'une expression (en caractères).
pub const LONGUEUR_MAX: usize = 254;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formule {
    expression: String,
    postfixe: String,
}

impl Formule {
    pub fn new(expression: &str) -> Self {
        let expression = match expression.char_indices().nth(LONGUEUR_MAX) {
            Some((coupure, _)) => {
                warn!(
                    "expression tronquée à {LONGUEUR_MAX} caractères ({} reçus)",
                    expression.chars().count()
                );
                expression[..coupure].to_string()
            }
            None => expression.to_string(),
        };

        Self {
            expression,
            postfixe: String::new(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Forme postfixée du dernier convertir() réussi (vide sinon).
    pub fn postfixe(&self) -> &str {
        &self.postfixe
    }

    /// Écrit les paires (ouvrante, fermante) dans `sortie`, 0 = sans partenaire.
    /// Retourne le nombre de parenthèses non appariées.
    pub fn verifier_parentheses(&self, sortie: &mut [usize]) -> Result<usize, ErreurFormule> {
        parentheses::verifier_parentheses(&self.expression, sortie)
    }

    pub fn rapport_parentheses(&self) -> Result<Vec<PaireParentheses>, ErreurFormule> {
        parentheses::rapport_parentheses(&self.expression)
    }

    pub fn convertir(&mut self) -> Result<(), ErreurFormule> {
        match vers_postfixe(&self.expression) {
            Ok(p) => {
                self.postfixe = p;
                Ok(())
            }
            Err(e) => {
                self.postfixe.clear();
                Err(e)
            }
        }
    }

    /// Variante code de statut : 0 = succès, 1 = échec.
    pub fn convertir_statut(&mut self) -> i32 {
        match self.convertir() {
            Ok(()) => 0,
            Err(e) => {
                warn!("conversion impossible: {e}");
                1
            }
        }
    }

    pub fn calculer<T: Nombre>(&self) -> Result<T, ErreurFormule> {
        calculer_postfixe(&self.postfixe)
    }
}
