// src/noyau/pile.rs
//
// Pile LIFO générique
// - Lifo<T> : contrat minimal utilisé par la conversion et le calcul
//   (empiler / dépiler / sommet / est_vide)
// - Pile<T> : implémentation à capacité, auto-extensible (x2) ou fixe
//
// Indices: 0 = fond de la pile.

use super::erreur::ErreurPile;

/// Capacité initiale par défaut.
pub const CAPACITE_DEFAUT: usize = 10;

/// Contrat LIFO minimal.
pub trait Lifo<T> {
    fn empiler(&mut self, valeur: T) -> Result<(), ErreurPile>;
    fn depiler(&mut self) -> Result<T, ErreurPile>;
    fn sommet(&self) -> Option<&T>;
    fn est_vide(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Croissance {
    Auto,
    Fixe,
}

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
    capacite: usize,
    croissance: Croissance,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pile<T> {
    /// Pile auto-extensible de capacité CAPACITE_DEFAUT.
    pub fn new() -> Self {
        Self::avec_capacite(CAPACITE_DEFAUT)
    }

    /// Pile auto-extensible (capacité 0 => 1 pour pouvoir doubler).
    pub fn avec_capacite(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            elements: Vec::with_capacity(capacite),
            capacite,
            croissance: Croissance::Auto,
        }
    }

    /// Pile à capacité fixe : `empiler` échoue quand elle est pleine.
    pub fn fixe(capacite: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacite),
            capacite,
            croissance: Croissance::Fixe,
        }
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn taille(&self) -> usize {
        self.elements.len()
    }

    pub fn est_pleine(&self) -> bool {
        self.elements.len() >= self.capacite
    }

    /// Change la capacité; refuse de perdre des éléments.
    pub fn changer_capacite(&mut self, capacite: usize) -> Result<(), ErreurPile> {
        if capacite < self.elements.len() {
            return Err(ErreurPile::CapaciteInsuffisante {
                demandee: capacite,
                taille: self.elements.len(),
            });
        }
        if capacite > self.elements.capacity() {
            self.elements.reserve_exact(capacite - self.elements.len());
        }
        self.capacite = capacite;
        Ok(())
    }

    /// Ramène le sommet à `taille` (les éléments au-dessus sont perdus).
    pub fn tronquer(&mut self, taille: usize) -> Result<(), ErreurPile> {
        if taille > self.elements.len() {
            return Err(ErreurPile::HorsLimites {
                indice: taille,
                taille: self.elements.len(),
            });
        }
        self.elements.truncate(taille);
        Ok(())
    }

    pub fn get(&self, indice: usize) -> Option<&T> {
        self.elements.get(indice)
    }

    /// Lecture indexée avec erreur (fond = 0).
    pub fn element(&self, indice: usize) -> Result<&T, ErreurPile> {
        self.elements.get(indice).ok_or(ErreurPile::HorsLimites {
            indice,
            taille: self.elements.len(),
        })
    }

    /// Parcours du fond vers le sommet.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn vider(&mut self) {
        self.elements.clear();
    }
}

impl<T> Lifo<T> for Pile<T> {
    fn empiler(&mut self, valeur: T) -> Result<(), ErreurPile> {
        if self.est_pleine() {
            match self.croissance {
                Croissance::Fixe => {
                    return Err(ErreurPile::Pleine {
                        capacite: self.capacite,
                    })
                }
                Croissance::Auto => {
                    let nouvelle = (self.capacite * 2).max(1);
                    self.changer_capacite(nouvelle)?;
                }
            }
        }
        self.elements.push(valeur);
        Ok(())
    }

    fn depiler(&mut self) -> Result<T, ErreurPile> {
        self.elements.pop().ok_or(ErreurPile::Vide)
    }

    fn sommet(&self) -> Option<&T> {
        self.elements.last()
    }

    fn est_vide(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Égalité sur le contenu (la capacité n'entre pas en compte).
impl<T: PartialEq> PartialEq for Pile<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<'a, T> IntoIterator for &'a Pile<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
