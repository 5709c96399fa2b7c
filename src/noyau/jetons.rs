// src/noyau/jetons.rs
//
// Opérateurs reconnus + ordre de priorité.
//
// Priorités (ordre total):
//   '(' = 0  <  + - = 1  <  * / = 2  <  moins unaire = 3
// Un caractère hors de cette liste n'est PAS un opérateur (None),
// ce qui est vérifié avant toute comparaison.

use std::cmp::Ordering;

/// Symbole du moins unaire dans la forme postfixée.
pub const SYMBOLE_NEGATION: char = '~';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    ParG,
    Plus,
    Moins,
    Fois,
    Div,
    /// Moins unaire (un seul opérande).
    Neg,
}

impl Operateur {
    /// Opérateur binaire (ou '(') lu dans l'expression infixe.
    /// Le moins unaire n'est jamais produit ici : c'est le contexte qui décide.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::ParG),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Opérateur lu dans la forme postfixée.
    pub fn depuis_postfixe(c: char) -> Option<Self> {
        match c {
            SYMBOLE_NEGATION => Some(Self::Neg),
            '(' => None,
            _ => Self::depuis_char(c),
        }
    }

    pub fn priorite(self) -> u8 {
        match self {
            Self::ParG => 0,
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Div => 2,
            Self::Neg => 3,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::ParG => '(',
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
            Self::Neg => SYMBOLE_NEGATION,
        }
    }

    pub fn est_unaire(self) -> bool {
        matches!(self, Self::Neg)
    }

    /// `self` (sommet de pile) doit-il sortir avant d'empiler `entrant` ?
    /// Égalité => oui : associativité gauche pour les binaires.
    pub fn sort_avant(self, entrant: Self) -> bool {
        self.cmp_priorite(entrant) != Ordering::Less
    }

    pub fn cmp_priorite(self, autre: Self) -> Ordering {
        self.priorite().cmp(&autre.priorite())
    }
}

/// Début d'un littéral numérique.
pub fn est_chiffre_nombre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
