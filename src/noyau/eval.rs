//! Noyau — calcul de la forme postfixée + pipeline complet
//!
//! parenthèses (rapport) -> postfixe -> valeur
//!
//! Un jeton est un nombre si:
//! - son premier caractère est un chiffre ou '.'
//! - ou c'est '-' suivi d'un chiffre ou '.' (littéral négatif produit par la conversion)
//!
//! Sinon, son premier caractère est un opérateur : + - * / (binaires) ou ~ (moins unaire).
//! La pile d'opérandes est reconstruite à chaque appel.

use log::{debug, trace};

use super::erreur::ErreurFormule;
use super::formule::Formule;
use super::jetons::{est_chiffre_nombre, Operateur};
use super::nombre::Nombre;
use super::parentheses::{nombre_erreurs, PaireParentheses};
use super::pile::{Lifo, Pile};

/// Résultat du pipeline complet (valeur + étapes intermédiaires).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation<T> {
    pub parentheses: Vec<PaireParentheses>,
    pub erreurs_parentheses: usize,
    pub postfixe: String,
    pub valeur: T,
}

fn est_litteral(jeton: &str) -> bool {
    let mut it = jeton.chars();
    match it.next() {
        Some('-') => it.next().is_some_and(est_chiffre_nombre),
        Some(c) => est_chiffre_nombre(c),
        None => false,
    }
}

fn depiler_operande<T>(pile: &mut Pile<T>, jeton: &str) -> Result<T, ErreurFormule> {
    pile.depiler().map_err(|_| ErreurFormule::PileVide {
        jeton: Some(jeton.to_string()),
    })
}

/// Calcule une forme postfixée (jetons séparés par des blancs).
pub fn calculer_postfixe<T: Nombre>(postfixe: &str) -> Result<T, ErreurFormule> {
    let mut valeurs: Pile<T> = Pile::new();

    for jeton in postfixe.split_whitespace() {
        trace!("jeton: {jeton:?}");

        if est_litteral(jeton) {
            let v = T::depuis_litteral(jeton)?;
            valeurs.empiler(v)?;
            continue;
        }

        let op = jeton
            .chars()
            .next()
            .and_then(Operateur::depuis_postfixe)
            .ok_or_else(|| ErreurFormule::LitteralInvalide {
                litteral: jeton.to_string(),
            })?;

        let r = if op.est_unaire() {
            depiler_operande(&mut valeurs, jeton)?.oppose()?
        } else {
            // b = sommet = opérande de droite
            let b = depiler_operande(&mut valeurs, jeton)?;
            let a = depiler_operande(&mut valeurs, jeton)?;

            match op {
                Operateur::Plus => a.additionner(b)?,
                Operateur::Moins => a.soustraire(b)?,
                Operateur::Fois => a.multiplier(b)?,
                Operateur::Div => a.diviser(b)?,
                Operateur::ParG | Operateur::Neg => {
                    return Err(ErreurFormule::LitteralInvalide {
                        litteral: jeton.to_string(),
                    })
                }
            }
        };
        valeurs.empiler(r)?;
    }

    match valeurs.taille() {
        0 => Err(ErreurFormule::PileVide { jeton: None }),
        1 => Ok(valeurs.depiler()?),
        restants => Err(ErreurFormule::ExpressionMalformee { restants }),
    }
}

/// API publique : évalue une expression infixe en une fois.
///
/// Le rapport de parenthèses est consultatif : une parenthèse sans partenaire
/// est comptée dans `erreurs_parentheses`, puis ignorée au calcul.
pub fn evaluer_expression<T: Nombre>(expression: &str) -> Result<Evaluation<T>, ErreurFormule> {
    let mut formule = Formule::new(expression);

    let parentheses = formule.rapport_parentheses()?;
    let erreurs_parentheses = nombre_erreurs(&parentheses);

    formule.convertir()?;
    let valeur: T = formule.calculer()?;

    debug!("{:?} => {valeur}", formule.expression());

    Ok(Evaluation {
        parentheses,
        erreurs_parentheses,
        postfixe: formule.postfixe().to_string(),
        valeur,
    })
}
