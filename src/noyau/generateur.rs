// src/noyau/generateur.rs
//
// Générateur d’expressions aléatoires.
//
// Règles:
// - arrêt si nb_ops ≥ MAX_OPERATEURS, ou 1 fois sur 5 (indépendamment de nb_ops)
// - sinon : opérateur uniforme parmi + - * /, deux enfants à nb_ops + 1
// - contraintes (seulement si les DEUX enfants sont entiers) :
//    - `-` : gauche ≥ droite
//    - `/` : droite ≠ 0 et gauche divisible par droite
//   Une fraction d’un côté => pas de contrôle (même k/1, affichée comme un entier).
// - rejet + nouveau tirage, borné par MAX_ESSAIS_NOEUD (plafond injectable en interne)
//
// Invariant obtenu : tout sous-arbre entier vaut un naturel.

use num_traits::{Signed, Zero};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use super::erreur::ErreurNoyau;
use super::expr::{Expr, Op};
use super::valeur::tirer_valeur;

/// Profondeur maximale (en opérateurs).
pub const MAX_OPERATEURS: usize = 3;

/// Probabilité d’arrêter sur un terminal avant la profondeur maximale.
const PROBA_TERMINAL: f64 = 0.2;

/// Garde-fou : tirages par nœud avant d’abandonner.
pub const MAX_ESSAIS_NOEUD: usize = 1000;

/// Génère une expression pour la borne `r` (r ≥ 2).
pub fn generer<R: Rng>(rng: &mut R, r: u64) -> Result<Expr, ErreurNoyau> {
    generer_plafonne(rng, r, MAX_ESSAIS_NOEUD)
}

/// Comme `generer`, avec `plafond` tirages par nœud au lieu de MAX_ESSAIS_NOEUD.
pub(crate) fn generer_plafonne<R: Rng>(
    rng: &mut R,
    r: u64,
    plafond: usize,
) -> Result<Expr, ErreurNoyau> {
    if r < 2 {
        return Err(ErreurNoyau::BorneInvalide(r));
    }
    generer_noeud(rng, r, 0, plafond)
}

fn generer_noeud<R: Rng>(
    rng: &mut R,
    r: u64,
    nb_ops: usize,
    plafond: usize,
) -> Result<Expr, ErreurNoyau> {
    if nb_ops >= MAX_OPERATEURS || rng.gen_bool(PROBA_TERMINAL) {
        return Ok(Expr::Terminal(tirer_valeur(rng, r)));
    }

    let op = *Op::TOUS.choose(rng).ok_or("aucun opérateur")?;

    for essai in 0..plafond {
        let gauche = generer_noeud(rng, r, nb_ops + 1, plafond)?;
        let droite = generer_noeud(rng, r, nb_ops + 1, plafond)?;

        if contrainte_respectee(op, &gauche, &droite) {
            return Ok(Expr::binaire(op, gauche, droite));
        }
        trace!(?op, essai, "contrainte non respectée, nouveau tirage");
    }

    Err(ErreurNoyau::GenerationImpossible { essais: plafond })
}

/// Contraintes de domaine, uniquement entre deux sous-arbres entiers.
pub fn contrainte_respectee(op: Op, gauche: &Expr, droite: &Expr) -> bool {
    if !matches!(op, Op::Moins | Op::Div) {
        return true;
    }
    if !(gauche.est_entiere() && droite.est_entiere()) {
        return true;
    }

    let (Ok(a), Ok(b)) = (gauche.valeur(), droite.valeur()) else {
        return false;
    };

    match op {
        Op::Moins => a >= b,
        Op::Div => !b.is_zero() && (a / b).is_integer(),
        Op::Plus | Op::Fois => true,
    }
}

/// Vérifie récursivement l’invariant : aucun sous-arbre entier n’est négatif
/// ni non entier.
pub fn respecte_domaine(e: &Expr) -> bool {
    match e {
        Expr::Terminal(_) => true,
        Expr::Binaire { gauche, droite, .. } => {
            if !(respecte_domaine(gauche) && respecte_domaine(droite)) {
                return false;
            }
            if !e.est_entiere() {
                return true;
            }
            match e.valeur() {
                Ok(v) => v.is_integer() && !v.is_negative(),
                Err(_) => false,
            }
        }
    }
}
