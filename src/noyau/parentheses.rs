// src/noyau/parentheses.rs
//
// Vérification des parenthèses (un seul passage).
//
// - '(' : on empile sa position (1-based)
// - ')' : on dépile la dernière '(' ouverte => paire (ouvrante, fermante)
//         pile vide => paire (0, fermante) + 1 erreur
// - fin : chaque '(' restante => paire (ouvrante, 0) + 1 erreur
//
// Le rapport est consultatif : c'est l'appelant qui décide de convertir ou non.

use log::debug;

use super::erreur::ErreurFormule;
use super::pile::{Lifo, Pile};

/// Une paire de positions 1-based. None = pas de partenaire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaireParentheses {
    pub ouvrante: Option<usize>,
    pub fermante: Option<usize>,
}

impl PaireParentheses {
    pub fn est_appariee(&self) -> bool {
        self.ouvrante.is_some() && self.fermante.is_some()
    }

    /// Forme plate : 0 = pas de partenaire.
    pub fn en_entiers(&self) -> (usize, usize) {
        (self.ouvrante.unwrap_or(0), self.fermante.unwrap_or(0))
    }
}

/// Rapport complet (toutes les paires, dans l'ordre d'enregistrement).
pub fn rapport_parentheses(expression: &str) -> Result<Vec<PaireParentheses>, ErreurFormule> {
    let mut ouvertes: Pile<usize> = Pile::new();
    let mut paires = Vec::new();

    for (i, c) in expression.chars().enumerate() {
        let position = i + 1;
        match c {
            '(' => ouvertes.empiler(position)?,
            ')' => {
                let ouvrante = if ouvertes.est_vide() {
                    None
                } else {
                    Some(ouvertes.depiler()?)
                };
                paires.push(PaireParentheses {
                    ouvrante,
                    fermante: Some(position),
                });
            }
            _ => {}
        }
    }

    while !ouvertes.est_vide() {
        paires.push(PaireParentheses {
            ouvrante: Some(ouvertes.depiler()?),
            fermante: None,
        });
    }

    Ok(paires)
}

pub fn nombre_erreurs(paires: &[PaireParentheses]) -> usize {
    paires.iter().filter(|p| !p.est_appariee()).count()
}

/// Écrit le rapport à plat dans `sortie` (2 entiers par paire) et retourne
/// le nombre de parenthèses non appariées.
///
/// Si `sortie` est trop petite, rien n'est écrit.
pub fn verifier_parentheses(expression: &str, sortie: &mut [usize]) -> Result<usize, ErreurFormule> {
    let paires = rapport_parentheses(expression)?;

    let requis = paires.len() * 2;
    if requis > sortie.len() {
        return Err(ErreurFormule::CapaciteDepassee {
            capacite: sortie.len(),
            requis,
        });
    }

    for (case, paire) in sortie.chunks_exact_mut(2).zip(&paires) {
        let (o, f) = paire.en_entiers();
        case[0] = o;
        case[1] = f;
    }

    let erreurs = nombre_erreurs(&paires);
    debug!("parenthèses: {} paires, {erreurs} erreurs", paires.len());
    Ok(erreurs)
}
