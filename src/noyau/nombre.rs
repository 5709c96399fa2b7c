// src/noyau/nombre.rs
//
// Type numérique générique du calcul postfixé.
//
// Règles:
// - entiers (i32, i64, BigInt) : division tronquée, division par zéro => erreur,
//   dépassement => erreur (arithmétique vérifiée, pas de panique)
// - flottants (f32, f64) : règles IEEE 754 (x/0 => ±inf ou NaN)
// - BigRational : exact ; "3.5" => 7/2
// - littéral entier hors bornes du type => Debordement (pas LitteralInvalide)

use std::fmt;
use std::num::IntErrorKind;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Num, Zero};

use super::erreur::ErreurFormule;

pub trait Nombre: Num + Clone + fmt::Debug + fmt::Display {
    /// Lit un littéral (signe '-' optionnel).
    fn depuis_litteral(texte: &str) -> Result<Self, ErreurFormule>;

    fn additionner(self, rhs: Self) -> Result<Self, ErreurFormule>;
    fn soustraire(self, rhs: Self) -> Result<Self, ErreurFormule>;
    fn multiplier(self, rhs: Self) -> Result<Self, ErreurFormule>;
    fn diviser(self, rhs: Self) -> Result<Self, ErreurFormule>;
    fn oppose(self) -> Result<Self, ErreurFormule>;
}

macro_rules! impl_nombre_entier {
    ($($t:ty),*) => {
        $(
            impl Nombre for $t {
                fn depuis_litteral(texte: &str) -> Result<Self, ErreurFormule> {
                    texte.parse::<$t>().map_err(|e| match e.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            ErreurFormule::Debordement
                        }
                        _ => litteral_invalide(texte),
                    })
                }

                fn additionner(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    self.checked_add(rhs).ok_or(ErreurFormule::Debordement)
                }

                fn soustraire(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    self.checked_sub(rhs).ok_or(ErreurFormule::Debordement)
                }

                fn multiplier(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    self.checked_mul(rhs).ok_or(ErreurFormule::Debordement)
                }

                fn diviser(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    if rhs == 0 {
                        return Err(ErreurFormule::DivisionParZero);
                    }
                    // MIN / -1
                    self.checked_div(rhs).ok_or(ErreurFormule::Debordement)
                }

                fn oppose(self) -> Result<Self, ErreurFormule> {
                    self.checked_neg().ok_or(ErreurFormule::Debordement)
                }
            }
        )*
    };
}

macro_rules! impl_nombre_flottant {
    ($($t:ty),*) => {
        $(
            impl Nombre for $t {
                fn depuis_litteral(texte: &str) -> Result<Self, ErreurFormule> {
                    texte.parse::<$t>().map_err(|_| litteral_invalide(texte))
                }

                fn additionner(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    Ok(self + rhs)
                }

                fn soustraire(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    Ok(self - rhs)
                }

                fn multiplier(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    Ok(self * rhs)
                }

                fn diviser(self, rhs: Self) -> Result<Self, ErreurFormule> {
                    Ok(self / rhs)
                }

                fn oppose(self) -> Result<Self, ErreurFormule> {
                    Ok(-self)
                }
            }
        )*
    };
}

fn litteral_invalide(texte: &str) -> ErreurFormule {
    ErreurFormule::LitteralInvalide {
        litteral: texte.to_string(),
    }
}

impl_nombre_entier!(i32, i64);
impl_nombre_flottant!(f32, f64);

impl Nombre for BigInt {
    fn depuis_litteral(texte: &str) -> Result<Self, ErreurFormule> {
        texte.parse().map_err(|_| litteral_invalide(texte))
    }

    fn additionner(self, rhs: Self) -> Result<Self, ErreurFormule> {
        Ok(self + rhs)
    }

    fn soustraire(self, rhs: Self) -> Result<Self, ErreurFormule> {
        Ok(self - rhs)
    }

    fn multiplier(self, rhs: Self) -> Result<Self, ErreurFormule> {
        Ok(self * rhs)
    }

    fn diviser(self, rhs: Self) -> Result<Self, ErreurFormule> {
        if rhs.is_zero() {
            return Err(ErreurFormule::DivisionParZero);
        }
        Ok(self / rhs)
    }

    fn oppose(self) -> Result<Self, ErreurFormule> {
        Ok(-self)
    }
}

impl Nombre for BigRational {
    fn depuis_litteral(texte: &str) -> Result<Self, ErreurFormule> {
        rationnel_depuis_decimal(texte).ok_or_else(|| litteral_invalide(texte))
    }

    fn additionner(self, rhs: Self) -> Result<Self, ErreurFormule> {
        Ok(self + rhs)
    }

    fn soustraire(self, rhs: Self) -> Result<Self, ErreurFormule> {
        Ok(self - rhs)
    }

    fn multiplier(self, rhs: Self) -> Result<Self, ErreurFormule> {
        Ok(self * rhs)
    }

    fn diviser(self, rhs: Self) -> Result<Self, ErreurFormule> {
        if rhs.is_zero() {
            return Err(ErreurFormule::DivisionParZero);
        }
        Ok(self / rhs)
    }

    fn oppose(self) -> Result<Self, ErreurFormule> {
        Ok(-self)
    }
}

/// "-12.50" => -25/2 (exact). Un seul '.', au moins un chiffre.
fn rationnel_depuis_decimal(texte: &str) -> Option<BigRational> {
    let (neg, corps) = match texte.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, texte),
    };

    let (ent, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, f),
        None => (corps, ""),
    };

    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);

    let r = BigRational::new(n, d);
    Some(if neg { -r } else { r })
}
