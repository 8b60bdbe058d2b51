// src/noyau/valeur.rs
//
// Valeur numérique d’un exercice :
// - Entier : naturel
// - Fraction : num/den brut (PAS réduit à la construction)
//
// La réduction se fait au passage en BigRational (calcul) ou à l’affichage.
// Une Fraction k/1 vaut Entier(k) mais garde son étiquette pendant la génération.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use rand::Rng;

use super::format::format_reponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Valeur {
    Entier(u64),
    Fraction { num: u64, den: u64 },
}

impl Valeur {
    pub fn est_entier(&self) -> bool {
        matches!(self, Valeur::Entier(_))
    }

    /// Valeur exacte (réduite). `den` ≠ 0 est garanti par le tirage.
    pub fn en_rationnel(&self) -> BigRational {
        match *self {
            Valeur::Entier(n) => BigRational::from_integer(BigInt::from(n)),
            Valeur::Fraction { num, den } => {
                BigRational::new(BigInt::from(num), BigInt::from(den))
            }
        }
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Entier(n) => write!(f, "{n}"),
            Valeur::Fraction { .. } => f.write_str(&format_reponse(&self.en_rationnel())),
        }
    }
}

/// Tire un opérande :
/// - 1 fois sur 2 : entier dans [0, r-1]
/// - sinon : fraction num ∈ [1, r-1], den ∈ [1, r]
///
/// Précondition r ≥ 2 : seul `generateur::generer` (qui la vérifie) y accède.
pub(super) fn tirer_valeur<R: Rng>(rng: &mut R, r: u64) -> Valeur {
    debug_assert!(r >= 2, "borne r < 2");

    if rng.gen_bool(0.5) {
        Valeur::Entier(rng.gen_range(0..r))
    } else {
        Valeur::Fraction {
            num: rng.gen_range(1..r),
            den: rng.gen_range(1..=r),
        }
    }
}
