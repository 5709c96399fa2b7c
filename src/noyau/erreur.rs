// src/noyau/erreur.rs
//
// Erreurs du noyau (fermées, avec contexte).

use thiserror::Error;

/// Erreurs de la pile LIFO (collaborateur générique).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurPile {
    #[error("pile vide")]
    Vide,

    #[error("pile pleine (capacité fixe {capacite})")]
    Pleine { capacite: usize },

    #[error("capacité {demandee} insuffisante pour {taille} éléments")]
    CapaciteInsuffisante { demandee: usize, taille: usize },

    #[error("indice {indice} hors limites (taille {taille})")]
    HorsLimites { indice: usize, taille: usize },
}

/// Erreurs de la formule (vérification, conversion, calcul).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurFormule {
    /// Le rapport de parenthèses ne tient pas dans le tampon fourni.
    #[error("rapport de parenthèses trop grand: {requis} entiers requis, capacité {capacite}")]
    CapaciteDepassee { capacite: usize, requis: usize },

    /// Opérande manquant pendant le calcul (`jeton` = opérateur en cours, None = fin).
    #[error(
        "pile vide: opérande manquant ({})",
        .jeton.as_deref().unwrap_or("fin de l'expression")
    )]
    PileVide { jeton: Option<String> },

    #[error("division par zéro")]
    DivisionParZero,

    /// Plusieurs valeurs restent sur la pile à la fin du calcul.
    #[error("expression invalide: {restants} valeurs restantes au lieu d'une")]
    ExpressionMalformee { restants: usize },

    #[error("nombre invalide: '{litteral}'")]
    LitteralInvalide { litteral: String },

    #[error("dépassement de capacité numérique")]
    Debordement,

    #[error(transparent)]
    Pile(ErreurPile),
}

impl From<ErreurPile> for ErreurFormule {
    fn from(e: ErreurPile) -> Self {
        match e {
            ErreurPile::Vide => ErreurFormule::PileVide { jeton: None },
            autre => ErreurFormule::Pile(autre),
        }
    }
}
