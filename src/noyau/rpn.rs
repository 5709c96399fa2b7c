// src/noyau/rpn.rs
//
// Shunting-yard : expression infixe (texte) -> forme postfixée (texte)
//
// Règles:
// - chiffre ou '.' : nombre = plus longue suite de chiffres/'.', suivi d'un espace
//   (plusieurs '.' passent ici; le calcul refusera le littéral)
// - '(' : empilée
// - ')' : dépile jusqu'à '(' (jetée); ')' orpheline => vide la pile, sans erreur
// - + - * / : dépile tant que priorité(sommet) >= priorité(entrant), puis empile
// - Moins unaire (début, après '(' ou après un opérateur):
//    - collé à un nombre => littéral négatif : "2*-3" => "2 -3 *"
//    - sinon => opérateur '~' : "-(1+2)" => "1 2 + ~"
// - tout autre caractère est ignoré (ne change pas le contexte)
//
// - en fin de lecture, une '(' restée ouverte est jetée (le rapport de parenthèses la signale)
//
// Jetons séparés par un seul espace.

use log::{debug, trace};

use super::erreur::ErreurFormule;
use super::jetons::{est_chiffre_nombre, Operateur};
use super::pile::{Lifo, Pile};

/// Opérateur en attente + sa position 1-based (pour tracer une '(' non fermée).
type EnAttente = (Operateur, usize);

fn emettre(sortie: &mut String, op: Operateur) {
    sortie.push(op.symbole());
    sortie.push(' ');
}

/// Convertit une expression infixe en forme postfixée.
///
/// Exemple:
///   "(1+2)*3"  =>  "1 2 + 3 *"
pub fn vers_postfixe(expression: &str) -> Result<String, ErreurFormule> {
    let chars: Vec<char> = expression.chars().collect();
    let mut sortie = String::with_capacity(chars.len() * 2);
    let mut ops: Pile<EnAttente> = Pile::new();

    // true tant qu'on attend un opérande (sert à détecter le moins unaire)
    let mut attend_operande = true;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_chiffre_nombre(c) {
            i = lire_nombre(&chars, i, &mut sortie);
            attend_operande = false;
            continue;
        }

        if c == ')' {
            while let Some(&(top, _)) = ops.sommet() {
                if top == Operateur::ParG {
                    break;
                }
                ops.depiler()?;
                emettre(&mut sortie, top);
            }
            if !ops.est_vide() {
                ops.depiler()?; // '('
            }
            attend_operande = false;
            i += 1;
            continue;
        }

        let op = match Operateur::depuis_char(c) {
            Some(op) => op,
            None => {
                trace!("caractère ignoré: {c:?}");
                i += 1;
                continue;
            }
        };

        match op {
            Operateur::ParG => {
                ops.empiler((op, i + 1))?;
                attend_operande = true;
            }

            Operateur::Moins if attend_operande => {
                let suivant = chars.get(i + 1).copied();
                if suivant.is_some_and(est_chiffre_nombre) {
                    // littéral négatif : le '-' fait partie du nombre
                    sortie.push('-');
                    i = lire_nombre(&chars, i + 1, &mut sortie);
                    attend_operande = false;
                    continue;
                }
                // préfixe : rien à dépiler (il s'applique à ce qui suit)
                ops.empiler((Operateur::Neg, i + 1))?;
            }

            _ => {
                while let Some(&(top, _)) = ops.sommet() {
                    if !top.sort_avant(op) {
                        break;
                    }
                    ops.depiler()?;
                    emettre(&mut sortie, top);
                }
                ops.empiler((op, i + 1))?;
                attend_operande = true;
            }
        }

        i += 1;
    }

    // vide la pile ops
    while !ops.est_vide() {
        let (op, position) = ops.depiler()?;
        if op == Operateur::ParG {
            debug!("'(' non fermée en position {position}, jetée");
            continue;
        }
        emettre(&mut sortie, op);
    }

    let fin = sortie.trim_end().len();
    sortie.truncate(fin);

    debug!("postfixe: {expression:?} => {sortie:?}");
    Ok(sortie)
}

/// Copie le nombre qui commence en `debut` (+ espace) et retourne l'indice suivant.
fn lire_nombre(chars: &[char], debut: usize, sortie: &mut String) -> usize {
    let mut i = debut;
    while i < chars.len() && est_chiffre_nombre(chars[i]) {
        sortie.push(chars[i]);
        i += 1;
    }
    sortie.push(' ');
    i
}
