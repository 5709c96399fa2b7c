//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée, longueur <= LONGUEUR_MAX
//! - budget temps global
//! - invariant clé : la valeur calculée == valeur de référence (rationnel exact)
//! - bruit aléatoire : jamais de panique, seulement des erreurs connues

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurFormule;
use super::eval::evaluer_expression;
use super::formule::{Formule, LONGUEUR_MAX};
use super::parentheses::nombre_erreurs;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurFormule) -> bool {
    // Liste blanche : erreurs *normales* sur du bruit.
    matches!(
        e,
        ErreurFormule::PileVide { .. }
            | ErreurFormule::DivisionParZero
            | ErreurFormule::ExpressionMalformee { .. }
            | ErreurFormule::LitteralInvalide { .. }
    )
}

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

/// Expression entièrement parenthésée + sa valeur exacte (None si division par zéro).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Option<BigRational>) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(10) as i64;
        return (format!("{n}"), Some(rat(n)));
    }

    if rng.pick(6) == 0 {
        let (s, v) = gen_expr(rng, depth - 1);
        return (format!("-({s})"), v.map(|x| -x));
    }

    let (sa, va) = gen_expr(rng, depth - 1);
    let (sb, vb) = gen_expr(rng, depth - 1);

    let (op, v) = match rng.pick(4) {
        0 => ('+', va.zip(vb).map(|(a, b)| a + b)),
        1 => ('-', va.zip(vb).map(|(a, b)| a - b)),
        2 => ('*', va.zip(vb).map(|(a, b)| a * b)),
        _ => (
            '/',
            va.zip(vb)
                .and_then(|(a, b)| if b.is_zero() { None } else { Some(a / b) }),
        ),
    };

    (format!("({sa}{op}{sb})"), v)
}

/// Bruit : caractères utiles + parasites, sans structure.
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '3', '7', '9', '.', '+', '-', '*', '/', '(', ')', ' ', 'x', '#', 'é',
    ];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeur_exacte_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);
        if expr.chars().count() > LONGUEUR_MAX {
            continue;
        }

        let r = evaluer_expression::<BigRational>(&expr);
        match attendu {
            Some(v) => {
                let e = r.unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
                assert_eq!(e.valeur, v, "expr={expr:?} postfixe={:?}", e.postfixe);
                assert_eq!(e.erreurs_parentheses, 0, "expr={expr:?}");
                seen_ok += 1;
            }
            None => {
                assert_eq!(
                    r.map(|e| e.valeur),
                    Err(ErreurFormule::DivisionParZero),
                    "expr={expr:?}"
                );
                seen_div0 += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_div0 > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_flottant_proche_du_rationnel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..120 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 3);
        let Some(v) = attendu else { continue };

        let f = evaluer_expression::<f64>(&expr)
            .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
            .valeur;

        // référence en f64 : n/d
        let n: f64 = v.numer().to_string().parse().unwrap();
        let d: f64 = v.denom().to_string().parse().unwrap();
        let reference = n / d;
        let tol = 1e-6 * reference.abs().max(1.0);
        assert!(
            (f - reference).abs() <= tol,
            "expr={expr:?} f64={f} ref={reference}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);
    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(40) as usize;
        let expr = gen_bruit(&mut rng, longueur);

        // rapport : nombre d'erreurs == paires non appariées, positions dans l'expression
        let f = Formule::new(&expr);
        let paires = f.rapport_parentheses().unwrap();
        let mut tampon = vec![0usize; paires.len() * 2];
        let n = f.verifier_parentheses(&mut tampon).unwrap();
        assert_eq!(n, nombre_erreurs(&paires), "expr={expr:?}");
        let nb_chars = expr.chars().count();
        assert!(tampon.iter().all(|p| *p <= nb_chars), "expr={expr:?}");

        // conversion : réussit toujours, parenthèses appariées ou non
        let mut conv = f.clone();
        assert_eq!(conv.convertir(), Ok(()), "expr={expr:?}");
        assert_eq!(conv.convertir_statut(), 0, "expr={expr:?}");
        assert!(!conv.postfixe().ends_with(' '), "expr={expr:?}");
        if expr.chars().any(|c| c.is_ascii_digit()) {
            assert!(!conv.postfixe().is_empty(), "expr={expr:?}");
        }

        let entier = evaluer_expression::<i64>(&expr);
        let flottant = evaluer_expression::<f64>(&expr);

        for e in [entier.as_ref().err(), flottant.as_ref().err()]
            .into_iter()
            .flatten()
        {
            assert!(
                is_erreur_attendue(e) || matches!(e, ErreurFormule::Debordement),
                "erreur non attendue: expr={expr:?} err={e}"
            );
        }

        // même forme postfixée, quel que soit le type
        if let (Ok(a), Ok(b)) = (&entier, &flottant) {
            assert_eq!(a.postfixe, b.postfixe, "expr={expr:?}");
        }

        if flottant.is_ok() {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    assert!(seen_ok > 0, "aucun succès sur le bruit");
    assert!(seen_err > 0, "aucune erreur sur le bruit");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..50 {
        let (ea, _) = gen_expr(&mut a, 4);
        let (eb, _) = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let va = evaluer_expression::<BigRational>(&ea).map(|e| e.valeur);
        let vb = evaluer_expression::<BigRational>(&eb).map(|e| e.valeur);
        assert_eq!(va, vb);
    }
    assert!(a.coin() == b.coin());
}
